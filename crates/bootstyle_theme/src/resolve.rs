//! Color resolution
//!
//! Turns a color token plus modifiers into concrete colors for one palette.
//! Modifiers are always applied in canonical order:
//!
//! 1. `Shade(n)` - pick a step from the token's precomputed ramp
//! 2. `Elevation(d)` - shift lightness by `d` elevation units
//! 3. `Subtle` - blend toward the palette background
//! 4. `Muted` - derive a readable, softened foreground against the background
//!
//! The derived `Ord` on [`Modifier`] encodes that order, so sorting a modifier
//! list is enough to canonicalize it.

use crate::error::Result;
use crate::palette::ThemePalette;
use crate::tokens::ColorToken;
use bootstyle_core::Color;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Weight of the background in a `Subtle` blend
pub const SUBTLE_BACKGROUND_WEIGHT: f32 = 0.85;

/// Minimum WCAG contrast a `Muted` foreground aims for
pub const MIN_CONTRAST: f32 = 4.5;

/// Maximum lightness adjustments tried for `Muted`
pub const MUTED_STEP_BUDGET: usize = 20;

const MUTED_START_WEIGHT: f32 = 0.40;
const MUTED_STEP: f32 = 0.02;

// State derivation, independent of the palette's elevation unit.
const STATE_STEP: f32 = 0.08;
const STATE_LIGHTNESS_PIVOT: f32 = 0.6;
const FOCUS_MIX: f32 = 0.35;
const DISABLED_MIX: f32 = 0.70;

/// A color transformation attached to a token in a descriptor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Modifier {
    /// Ramp step, `100..=900`
    Shade(u16),
    /// Lightness shift in elevation units
    Elevation(i16),
    /// Soft surface tone
    Subtle,
    /// Readable low-emphasis foreground
    Muted,
}

impl Modifier {
    /// Stable tag used when serializing keys
    pub fn tag(&self) -> u8 {
        match self {
            Modifier::Shade(_) => 0,
            Modifier::Elevation(_) => 1,
            Modifier::Subtle => 2,
            Modifier::Muted => 3,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Shade(n) => write!(f, "[{n}]"),
            Modifier::Elevation(d) => write!(f, "[{d:+}]"),
            Modifier::Subtle => f.write_str("[subtle]"),
            Modifier::Muted => f.write_str("[muted]"),
        }
    }
}

/// Sort and deduplicate modifiers into canonical application order
pub fn canonical_modifiers(modifiers: &[Modifier]) -> SmallVec<[Modifier; 4]> {
    let mut ordered: SmallVec<[Modifier; 4]> = modifiers.iter().copied().collect();
    ordered.sort_unstable();
    ordered.dedup();
    ordered
}

/// Colors for every interaction state
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColorSet {
    pub normal: Color,
    pub hover: Color,
    pub active: Color,
    pub disabled: Color,
    pub focus: Color,
}

/// A `Muted` foreground that could not reach [`MIN_CONTRAST`]
#[derive(Clone, Debug, PartialEq)]
pub struct LowContrast {
    pub token: ColorToken,
    /// Best ratio found within the step budget
    pub achieved: f32,
    pub required: f32,
}

impl fmt::Display for LowContrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "muted `{}` reaches contrast {:.2}, below {:.1}",
            self.token, self.achieved, self.required
        )
    }
}

/// Output of [`resolve`]
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedColors {
    pub colors: ColorSet,
    /// Present when a `Muted` modifier fell short of the contrast target
    pub low_contrast: Option<LowContrast>,
}

/// Resolve a token with modifiers against a palette, drawn on the palette
/// background.
///
/// Only fails when the palette lacks the token entirely, which validated
/// palettes never do for standard tokens.
pub fn resolve(
    token: &ColorToken,
    modifiers: &[Modifier],
    palette: &ThemePalette,
) -> Result<ResolvedColors> {
    resolve_on(token, modifiers, palette, palette.background())
}

/// Resolve a token that will be drawn on `surface`.
///
/// `Subtle` blends toward `surface`, `Muted` measures contrast against it and
/// the disabled/focus states fade toward it.
pub fn resolve_on(
    token: &ColorToken,
    modifiers: &[Modifier],
    palette: &ThemePalette,
    surface: Color,
) -> Result<ResolvedColors> {
    let mut color = palette.color(token)?;
    let mut low_contrast = None;

    for modifier in canonical_modifiers(modifiers) {
        color = match modifier {
            Modifier::Shade(n) => match palette.ramp(token) {
                Some(ramp) => ramp.shade(n),
                None => color,
            },
            Modifier::Elevation(delta) => {
                color.shift_lightness(f32::from(delta) * palette.elevation_step())
            }
            Modifier::Subtle => color.mix(surface, SUBTLE_BACKGROUND_WEIGHT),
            Modifier::Muted => {
                let (muted, achieved) = muted_foreground(color, surface);
                if achieved < MIN_CONTRAST {
                    low_contrast = Some(LowContrast {
                        token: token.clone(),
                        achieved,
                        required: MIN_CONTRAST,
                    });
                }
                muted
            }
        }
        .quantized();
    }

    Ok(ResolvedColors {
        colors: state_colors(color, surface),
        low_contrast,
    })
}

/// Soften `color` toward `background`, then walk lightness away from the
/// background until the contrast target is met or the budget runs out.
///
/// Returns the chosen color and its contrast ratio. When the target is not
/// met, the best candidate seen is returned.
pub fn muted_foreground(color: Color, background: Color) -> (Color, f32) {
    let toward_black = background.contrast_ratio(Color::BLACK);
    let toward_white = background.contrast_ratio(Color::WHITE);
    let direction = if toward_black >= toward_white {
        -1.0
    } else {
        1.0
    };

    let mut candidate = color.mix(background, MUTED_START_WEIGHT).quantized();
    let mut best = (candidate, candidate.contrast_ratio(background));
    if best.1 >= MIN_CONTRAST {
        return best;
    }

    for _ in 0..MUTED_STEP_BUDGET {
        candidate = candidate.shift_lightness(direction * MUTED_STEP).quantized();
        let ratio = candidate.contrast_ratio(background);
        if ratio > best.1 {
            best = (candidate, ratio);
        }
        if ratio >= MIN_CONTRAST {
            return (candidate, ratio);
        }
    }

    best
}

/// Derive state colors from a resolved normal color
pub fn state_colors(normal: Color, background: Color) -> ColorSet {
    let normal = normal.quantized();
    let direction = if normal.lightness() > STATE_LIGHTNESS_PIVOT {
        -1.0
    } else {
        1.0
    };

    ColorSet {
        normal,
        hover: normal.shift_lightness(direction * STATE_STEP).quantized(),
        active: normal.shift_lightness(direction * 2.0 * STATE_STEP).quantized(),
        disabled: normal.mix(background, DISABLED_MIX).quantized(),
        focus: normal.mix(background, FOCUS_MIX).quantized(),
    }
}

/// The palette color that reads best on top of `fill`.
///
/// Prefers the theme's own foreground/background; falls back to pure black or
/// white when neither reaches [`MIN_CONTRAST`].
pub fn readable_on(fill: Color, palette: &ThemePalette) -> Color {
    let pick = |a: Color, b: Color| {
        if fill.contrast_ratio(a) >= fill.contrast_ratio(b) {
            a
        } else {
            b
        }
    };

    let themed = pick(palette.foreground(), palette.background());
    if fill.contrast_ratio(themed) >= MIN_CONTRAST {
        themed
    } else {
        pick(Color::WHITE, Color::BLACK)
    }
}
