//! Style building
//!
//! Maps a key's variant onto concrete per-state colors and fills in widget
//! geometry from the class defaults and the key's extras.

use crate::diagnostics::Diagnostic;
use crate::key::{ExtraValue, StyleKey};
use crate::vocab::{Capabilities, Variant, WidgetClass};
use bootstyle_core::Color;
use bootstyle_theme::{readable_on, ColorSet, ColorToken, ThemePalette, SUBTLE_BACKGROUND_WEIGHT};
use serde::Serialize;

/// Pressed ghost fill, as background weight
const GHOST_ACTIVE_WEIGHT: f32 = 0.70;
/// Trough of round/square sliders and scrollbars, as foreground weight
const TROUGH_WEIGHT: f32 = 0.10;

/// Colors of one interaction state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StateStyle {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
}

impl StateStyle {
    fn filled(fill: Color, border: Color, palette: &ThemePalette) -> Self {
        Self {
            background: fill,
            foreground: readable_on(fill, palette),
            border,
        }
    }

    fn on_surface(foreground: Color, border: Color, palette: &ThemePalette) -> Self {
        Self {
            background: palette.background(),
            foreground,
            border,
        }
    }
}

/// Per-state styling
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StateColors {
    pub normal: StateStyle,
    pub hover: StateStyle,
    pub active: StateStyle,
    pub disabled: StateStyle,
    pub focus: StateStyle,
}

/// Fully resolved style, ready for a backend
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedStyleSpec {
    pub widget: WidgetClass,
    pub variant: Variant,
    pub color: ColorToken,
    pub theme: String,
    /// Token color per state, before variant mapping
    pub colors: ColorSet,
    pub states: StateColors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

/// Output of [`build`]
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltStyle {
    pub spec: ResolvedStyleSpec,
    pub diagnostics: Vec<Diagnostic>,
}

/// Build the full style for `key` from its resolved token colors
pub fn build(key: &StyleKey, colors: &ColorSet, palette: &ThemePalette) -> BuiltStyle {
    let widget = key.widget();
    let defaults = widget.spec();
    let caps = defaults.capabilities;

    let mut spec = ResolvedStyleSpec {
        widget,
        variant: key.variant(),
        color: key.color().clone(),
        theme: palette.name().to_string(),
        colors: *colors,
        states: map_variant(key.variant(), colors, palette),
        border_width: caps.border.then_some(defaults.border_width),
        corner_radius: caps.corner_radius.then_some(defaults.corner_radius),
        indicator_size: caps.indicator.then_some(defaults.indicator_size),
        icon: None,
        padding: None,
        font: None,
    };

    let mut diagnostics = Vec::new();
    for (name, value) in key.extras().iter() {
        if let Err(reason) = apply_extra(&mut spec, caps, name, value) {
            diagnostics.push(Diagnostic::UnsupportedExtra {
                widget,
                key: name.to_string(),
                reason,
            });
        }
    }

    BuiltStyle { spec, diagnostics }
}

fn apply_extra(
    spec: &mut ResolvedStyleSpec,
    caps: Capabilities,
    name: &str,
    value: &ExtraValue,
) -> Result<(), &'static str> {
    let size = |value: &ExtraValue| match value {
        ExtraValue::Int(n) => u32::try_from(*n).map_err(|_| "expected a non-negative integer"),
        _ => Err("expected a non-negative integer"),
    };
    let text = |value: &ExtraValue| match value {
        ExtraValue::Text(s) => Ok(s.clone()),
        _ => Err("expected text"),
    };
    let require = |supported: bool| {
        if supported {
            Ok(())
        } else {
            Err("not supported by this widget class")
        }
    };

    match name {
        "border_width" | "borderwidth" => {
            require(caps.border)?;
            spec.border_width = Some(size(value)?);
        }
        "corner_radius" | "radius" => {
            require(caps.corner_radius)?;
            spec.corner_radius = Some(size(value)?);
        }
        "indicator_size" => {
            require(caps.indicator)?;
            spec.indicator_size = Some(size(value)?);
        }
        "icon" => {
            require(caps.icon)?;
            spec.icon = Some(text(value)?);
        }
        "padding" => spec.padding = Some(size(value)?),
        "font" => spec.font = Some(text(value)?),
        _ => return Err("unknown extra"),
    }
    Ok(())
}

/// Surface a variant draws its token color on: the slider/scrollbar trough
/// for thumbs, the window background otherwise
pub fn surface_for(variant: Variant, palette: &ThemePalette) -> Color {
    match variant {
        Variant::Round | Variant::Square => trough(palette),
        _ => palette.background(),
    }
}

fn trough(palette: &ThemePalette) -> Color {
    palette
        .background()
        .mix(palette.foreground(), TROUGH_WEIGHT)
        .quantized()
}

fn map_variant(variant: Variant, c: &ColorSet, palette: &ThemePalette) -> StateColors {
    let surface = palette.background();
    let subtle = |color: Color| color.mix(surface, SUBTLE_BACKGROUND_WEIGHT).quantized();
    let filled = |fill: Color| StateStyle::filled(fill, fill, palette);
    let plain = |fg: Color, border: Color| StateStyle::on_surface(fg, border, palette);

    match variant {
        Variant::Solid | Variant::Striped | Variant::Toggle => StateColors {
            normal: filled(c.normal),
            hover: filled(c.hover),
            active: filled(c.active),
            disabled: filled(c.disabled),
            focus: StateStyle::filled(c.normal, c.focus, palette),
        },
        Variant::Outline => StateColors {
            normal: plain(c.normal, c.normal),
            hover: filled(c.hover),
            active: filled(c.active),
            disabled: plain(c.disabled, c.disabled),
            focus: plain(c.normal, c.focus),
        },
        Variant::Ghost => {
            let tint = |fill: Color, fg: Color| StateStyle {
                background: fill,
                foreground: fg,
                border: fill,
            };
            StateColors {
                normal: plain(c.normal, surface),
                hover: tint(subtle(c.normal), c.hover),
                active: tint(c.normal.mix(surface, GHOST_ACTIVE_WEIGHT).quantized(), c.active),
                disabled: plain(c.disabled, surface),
                focus: plain(c.normal, c.focus),
            }
        }
        Variant::Link => StateColors {
            normal: plain(c.normal, surface),
            hover: plain(c.hover, surface),
            active: plain(c.active, surface),
            disabled: plain(c.disabled, surface),
            focus: plain(c.normal, c.focus),
        },
        Variant::Text => StateColors {
            normal: plain(c.normal, surface),
            hover: plain(c.normal, surface),
            active: plain(c.normal, surface),
            disabled: plain(c.disabled, surface),
            focus: plain(c.normal, surface),
        },
        Variant::Toolbutton => StateColors {
            normal: filled(subtle(c.normal)),
            hover: filled(subtle(c.hover)),
            active: filled(c.normal),
            disabled: plain(c.disabled, surface),
            focus: StateStyle::filled(subtle(c.normal), c.focus, palette),
        },
        Variant::Round | Variant::Square => {
            let track = trough(palette);
            let thumb = |fg: Color| StateStyle {
                background: track,
                foreground: fg,
                border: track,
            };
            StateColors {
                normal: thumb(c.normal),
                hover: thumb(c.hover),
                active: thumb(c.active),
                disabled: thumb(c.disabled),
                focus: StateStyle {
                    border: c.focus,
                    ..thumb(c.normal)
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Extras;
    use bootstyle_theme::{resolve_on, ThemeCatalog, MIN_CONTRAST};

    fn built(key: StyleKey, theme: &str) -> BuiltStyle {
        let palette = ThemeCatalog::builtin().get(theme).unwrap();
        let surface = surface_for(key.variant(), &palette);
        let colors = resolve_on(key.color(), key.modifiers(), &palette, surface)
            .unwrap()
            .colors;
        build(&key, &colors, &palette)
    }

    #[test]
    fn test_solid_fills_with_token_color() {
        let style = built(
            StyleKey::new(WidgetClass::Button, ColorToken::Primary, Variant::Solid),
            "cosmo",
        );
        assert_eq!(style.spec.states.normal.background.to_hex(), 0x2780E3);
        let normal = style.spec.states.normal;
        assert!(normal.background.contrast_ratio(normal.foreground) >= MIN_CONTRAST);
        assert_eq!(style.spec.border_width, Some(1));
        assert!(style.diagnostics.is_empty());
    }

    #[test]
    fn test_outline_keeps_surface_until_hover() {
        let style = built(
            StyleKey::new(WidgetClass::Button, ColorToken::Success, Variant::Outline),
            "cosmo",
        );
        let palette = ThemeCatalog::builtin().get("cosmo").unwrap();
        let states = style.spec.states;
        assert_eq!(states.normal.background, palette.background());
        assert_eq!(states.normal.border, style.spec.colors.normal);
        assert_eq!(states.hover.background, style.spec.colors.hover);
    }

    #[test]
    fn test_extras_override_defaults() {
        let key = StyleKey::new(WidgetClass::Button, ColorToken::Info, Variant::Solid)
            .with_extras(Extras::new().with("border_width", 3).with("icon", "gear"));
        let style = built(key, "cosmo");
        assert_eq!(style.spec.border_width, Some(3));
        assert_eq!(style.spec.icon.as_deref(), Some("gear"));
        assert!(style.diagnostics.is_empty());
    }

    #[test]
    fn test_unsupported_extras_are_reported() {
        let key = StyleKey::new(WidgetClass::Progressbar, ColorToken::Info, Variant::Solid)
            .with_extras(
                Extras::new()
                    .with("icon", "gear")
                    .with("padding", -1)
                    .with("wobble", true),
            );
        let style = built(key, "cosmo");
        assert_eq!(style.spec.icon, None);
        assert_eq!(style.spec.padding, None);
        assert_eq!(style.diagnostics.len(), 3);
    }

    #[test]
    fn test_capabilities_gate_defaults() {
        let style = built(
            StyleKey::new(WidgetClass::Label, ColorToken::Foreground, Variant::Text),
            "darkly",
        );
        assert_eq!(style.spec.border_width, None);
        assert_eq!(style.spec.indicator_size, None);
        assert_eq!(style.spec.theme, "darkly");
    }
}
