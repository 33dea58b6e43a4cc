//! Token vocabulary
//!
//! Static tables for variant and widget-class tokens, plus the [`Vocabulary`]
//! used by the descriptor parser (static tables + custom color tokens).
//!
//! Enum declaration order is the vocabulary order: when a descriptor names two
//! tokens of the same kind, the one declared first wins. The derived `Ord`
//! implementations encode exactly that.

use bootstyle_theme::ColorToken;
use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Variants
// ─────────────────────────────────────────────────────────────────────────────

/// Visual emphasis of a style
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    Solid,
    Outline,
    Ghost,
    Link,
    Text,
    Toggle,
    Toolbutton,
    Striped,
    Round,
    Square,
}

impl Variant {
    pub const ALL: [Variant; 10] = [
        Variant::Solid,
        Variant::Outline,
        Variant::Ghost,
        Variant::Link,
        Variant::Text,
        Variant::Toggle,
        Variant::Toolbutton,
        Variant::Striped,
        Variant::Round,
        Variant::Square,
    ];

    /// Descriptor token
    pub fn name(self) -> &'static str {
        match self {
            Variant::Solid => "solid",
            Variant::Outline => "outline",
            Variant::Ghost => "ghost",
            Variant::Link => "link",
            Variant::Text => "text",
            Variant::Toggle => "toggle",
            Variant::Toolbutton => "toolbutton",
            Variant::Striped => "striped",
            Variant::Round => "round",
            Variant::Square => "square",
        }
    }

    /// Capitalized form used in generated style names
    pub fn display_name(self) -> &'static str {
        match self {
            Variant::Solid => "Solid",
            Variant::Outline => "Outline",
            Variant::Ghost => "Ghost",
            Variant::Link => "Link",
            Variant::Text => "Text",
            Variant::Toggle => "Toggle",
            Variant::Toolbutton => "Toolbutton",
            Variant::Striped => "Striped",
            Variant::Round => "Round",
            Variant::Square => "Square",
        }
    }

    pub fn from_name(name: &str) -> Option<Variant> {
        Self::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }

    /// Stable byte used in key fingerprints
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget classes
// ─────────────────────────────────────────────────────────────────────────────

/// Which style concepts a widget family can express
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub border: bool,
    pub icon: bool,
    pub indicator: bool,
    pub corner_radius: bool,
}

/// Declared behavior of a widget class
#[derive(Clone, Debug)]
pub struct WidgetSpec {
    pub variants: &'static [Variant],
    pub default_variant: Variant,
    pub default_color: ColorToken,
    pub capabilities: Capabilities,
    pub border_width: u32,
    pub corner_radius: u32,
    pub indicator_size: u32,
}

const fn caps(border: bool, icon: bool, indicator: bool, corner_radius: bool) -> Capabilities {
    Capabilities {
        border,
        icon,
        indicator,
        corner_radius,
    }
}

/// Widget family a style applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidgetClass {
    Button,
    Label,
    Frame,
    Checkbutton,
    Radiobutton,
    Entry,
    Combobox,
    Spinbox,
    Scale,
    Progressbar,
    Scrollbar,
    Notebook,
    Menubutton,
    Separator,
    Labelframe,
    Treeview,
}

impl WidgetClass {
    pub const ALL: [WidgetClass; 16] = [
        WidgetClass::Button,
        WidgetClass::Label,
        WidgetClass::Frame,
        WidgetClass::Checkbutton,
        WidgetClass::Radiobutton,
        WidgetClass::Entry,
        WidgetClass::Combobox,
        WidgetClass::Spinbox,
        WidgetClass::Scale,
        WidgetClass::Progressbar,
        WidgetClass::Scrollbar,
        WidgetClass::Notebook,
        WidgetClass::Menubutton,
        WidgetClass::Separator,
        WidgetClass::Labelframe,
        WidgetClass::Treeview,
    ];

    /// Descriptor token
    pub fn name(self) -> &'static str {
        match self {
            WidgetClass::Button => "button",
            WidgetClass::Label => "label",
            WidgetClass::Frame => "frame",
            WidgetClass::Checkbutton => "checkbutton",
            WidgetClass::Radiobutton => "radiobutton",
            WidgetClass::Entry => "entry",
            WidgetClass::Combobox => "combobox",
            WidgetClass::Spinbox => "spinbox",
            WidgetClass::Scale => "scale",
            WidgetClass::Progressbar => "progressbar",
            WidgetClass::Scrollbar => "scrollbar",
            WidgetClass::Notebook => "notebook",
            WidgetClass::Menubutton => "menubutton",
            WidgetClass::Separator => "separator",
            WidgetClass::Labelframe => "labelframe",
            WidgetClass::Treeview => "treeview",
        }
    }

    /// Class name the native toolkit knows the widget by
    pub fn native_class(self) -> &'static str {
        match self {
            WidgetClass::Button => "TButton",
            WidgetClass::Label => "TLabel",
            WidgetClass::Frame => "TFrame",
            WidgetClass::Checkbutton => "TCheckbutton",
            WidgetClass::Radiobutton => "TRadiobutton",
            WidgetClass::Entry => "TEntry",
            WidgetClass::Combobox => "TCombobox",
            WidgetClass::Spinbox => "TSpinbox",
            WidgetClass::Scale => "TScale",
            WidgetClass::Progressbar => "TProgressbar",
            WidgetClass::Scrollbar => "TScrollbar",
            WidgetClass::Notebook => "TNotebook",
            WidgetClass::Menubutton => "TMenubutton",
            WidgetClass::Separator => "TSeparator",
            WidgetClass::Labelframe => "TLabelframe",
            WidgetClass::Treeview => "Treeview",
        }
    }

    /// Accepts the token (`button`), the capitalized name (`Button`) or the
    /// native class (`TButton`), case-insensitively
    pub fn from_name(name: &str) -> Option<WidgetClass> {
        Self::ALL.into_iter().find(|w| {
            w.name().eq_ignore_ascii_case(name) || w.native_class().eq_ignore_ascii_case(name)
        })
    }

    /// Stable byte used in key fingerprints
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn spec(self) -> WidgetSpec {
        use Variant::*;

        const BUTTON: &[Variant] = &[Solid, Outline, Ghost, Link, Text, Toolbutton];
        const LABEL: &[Variant] = &[Text, Solid];
        const PANEL: &[Variant] = &[Solid, Outline];
        const CHECK: &[Variant] = &[Solid, Toggle, Toolbutton, Round, Square];
        const RADIO: &[Variant] = &[Solid, Toggle, Toolbutton];
        const INPUT: &[Variant] = &[Outline, Solid];
        const SLIDER: &[Variant] = &[Solid, Round, Square];
        const PROGRESS: &[Variant] = &[Solid, Striped];
        const SCROLL: &[Variant] = &[Round, Square];
        const MENU: &[Variant] = &[Solid, Outline, Ghost, Toolbutton];
        const RULE: &[Variant] = &[Solid];

        let spec = |variants: &'static [Variant], color: ColorToken, capabilities: Capabilities| WidgetSpec {
            variants,
            default_variant: variants[0],
            default_color: color,
            capabilities,
            border_width: 0,
            corner_radius: 0,
            indicator_size: 0,
        };

        match self {
            WidgetClass::Button => WidgetSpec {
                border_width: 1,
                corner_radius: 4,
                ..spec(BUTTON, ColorToken::Primary, caps(true, true, false, true))
            },
            WidgetClass::Label => spec(LABEL, ColorToken::Foreground, caps(false, true, false, false)),
            WidgetClass::Frame => spec(PANEL, ColorToken::Background, caps(true, false, false, true)),
            WidgetClass::Checkbutton => WidgetSpec {
                indicator_size: 14,
                ..spec(CHECK, ColorToken::Primary, caps(false, true, true, false))
            },
            WidgetClass::Radiobutton => WidgetSpec {
                indicator_size: 14,
                ..spec(RADIO, ColorToken::Primary, caps(false, true, true, false))
            },
            WidgetClass::Entry | WidgetClass::Combobox | WidgetClass::Spinbox => WidgetSpec {
                border_width: 1,
                corner_radius: 4,
                ..spec(INPUT, ColorToken::Primary, caps(true, false, false, true))
            },
            WidgetClass::Scale => WidgetSpec {
                indicator_size: 16,
                ..spec(SLIDER, ColorToken::Primary, caps(false, false, true, false))
            },
            WidgetClass::Progressbar => spec(PROGRESS, ColorToken::Primary, caps(false, false, false, false)),
            WidgetClass::Scrollbar => WidgetSpec {
                corner_radius: 6,
                ..spec(SCROLL, ColorToken::Secondary, caps(false, false, false, true))
            },
            WidgetClass::Notebook => WidgetSpec {
                border_width: 1,
                ..spec(PANEL, ColorToken::Primary, caps(true, false, false, false))
            },
            WidgetClass::Menubutton => WidgetSpec {
                border_width: 1,
                corner_radius: 4,
                indicator_size: 8,
                ..spec(MENU, ColorToken::Primary, caps(true, true, true, true))
            },
            WidgetClass::Separator => spec(RULE, ColorToken::Secondary, caps(false, false, false, false)),
            WidgetClass::Labelframe => WidgetSpec {
                border_width: 1,
                corner_radius: 4,
                ..spec(PANEL, ColorToken::Foreground, caps(true, false, false, true))
            },
            WidgetClass::Treeview => WidgetSpec {
                border_width: 1,
                ..spec(PANEL, ColorToken::Primary, caps(true, false, false, false))
            },
        }
    }

    pub fn supports(self, variant: Variant) -> bool {
        self.spec().variants.contains(&variant)
    }
}

impl fmt::Display for WidgetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_class())
    }
}

impl std::str::FromStr for WidgetClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetClass::from_name(s).ok_or_else(|| format!("unknown widget class: {s}"))
    }
}

impl Serialize for WidgetClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.native_class())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Vocabulary
// ─────────────────────────────────────────────────────────────────────────────

/// A recognized descriptor token
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Color(ColorToken),
    Variant(Variant),
    Widget(WidgetClass),
}

/// Every word the parser recognizes.
///
/// Holds the static tables plus custom color tokens declared by themes.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    custom_colors: BTreeSet<ColorToken>,
    /// All words, longest first, for segmentation
    words: Vec<(String, Token)>,
}

impl Vocabulary {
    /// Standard tokens only
    pub fn standard() -> Self {
        Self::with_custom_colors(std::iter::empty())
    }

    /// Standard tokens plus the given custom color tokens
    pub fn with_custom_colors(custom: impl IntoIterator<Item = ColorToken>) -> Self {
        let custom_colors: BTreeSet<ColorToken> =
            custom.into_iter().filter(ColorToken::is_custom).collect();

        let mut words: Vec<(String, Token)> = Vec::new();
        for token in ColorToken::STANDARD.into_iter().chain(custom_colors.iter().cloned()) {
            words.push((token.name().to_string(), Token::Color(token)));
        }
        for variant in Variant::ALL {
            words.push((variant.name().to_string(), Token::Variant(variant)));
        }
        for widget in WidgetClass::ALL {
            words.push((widget.name().to_string(), Token::Widget(widget)));
        }
        // Stable sort keeps table order among equal lengths.
        words.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self {
            custom_colors,
            words,
        }
    }

    pub fn custom_colors(&self) -> impl Iterator<Item = &ColorToken> {
        self.custom_colors.iter()
    }

    /// Exact (lowercase) word lookup
    pub fn lookup(&self, word: &str) -> Option<Token> {
        self.words
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, token)| token.clone())
    }

    /// Split a run of concatenated tokens (`outlinesuccess`) by longest match,
    /// backtracking when a longer match leaves an unparseable remainder.
    ///
    /// Runs in one backward pass: `choice[i]` is the first word, in table
    /// order, that matches at byte `i` and leaves a segmentable remainder.
    pub fn segment(&self, text: &str) -> Option<Vec<Token>> {
        let bytes = text.as_bytes();
        let mut choice: Vec<Option<usize>> = vec![None; bytes.len() + 1];
        let mut reachable = vec![false; bytes.len() + 1];
        reachable[bytes.len()] = true;

        for start in (0..bytes.len()).rev() {
            choice[start] = self.words.iter().position(|(word, _)| {
                bytes[start..].starts_with(word.as_bytes()) && reachable[start + word.len()]
            });
            reachable[start] = choice[start].is_some();
        }

        let mut tokens = Vec::new();
        let mut at = 0;
        while at < bytes.len() {
            let (word, token) = &self.words[choice[at]?];
            tokens.push(token.clone());
            at += word.len();
        }
        Some(tokens)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_widget_default_variant_is_supported() {
        for widget in WidgetClass::ALL {
            let spec = widget.spec();
            assert!(widget.supports(spec.default_variant), "{widget:?}");
        }
    }

    #[test]
    fn test_widget_lookup_accepts_native_names() {
        assert_eq!(WidgetClass::from_name("Button"), Some(WidgetClass::Button));
        assert_eq!(WidgetClass::from_name("TButton"), Some(WidgetClass::Button));
        assert_eq!(WidgetClass::from_name("treeview"), Some(WidgetClass::Treeview));
        assert_eq!(WidgetClass::from_name("Canvas"), None);
    }

    #[test]
    fn test_segment_longest_match() {
        let vocab = Vocabulary::standard();
        assert_eq!(
            vocab.segment("outlinesuccess"),
            Some(vec![
                Token::Variant(Variant::Outline),
                Token::Color(ColorToken::Success)
            ])
        );
        assert_eq!(
            vocab.segment("outlinetoolbutton"),
            Some(vec![
                Token::Variant(Variant::Outline),
                Token::Variant(Variant::Toolbutton)
            ])
        );
        assert_eq!(vocab.segment("successbogus"), None);
    }

    #[test]
    fn test_segment_backtracks() {
        // "lightext" is not "light" + "ext"; nothing parses it, but
        // "lighttext" must split as "light" + "text".
        let vocab = Vocabulary::standard();
        assert_eq!(vocab.segment("lightext"), None);
        assert_eq!(
            vocab.segment("lighttext"),
            Some(vec![Token::Color(ColorToken::Light), Token::Variant(Variant::Text)])
        );
    }

    #[test]
    fn test_segment_long_runs() {
        let vocab = Vocabulary::standard();
        let tokens = vocab.segment(&"info".repeat(20_000)).unwrap();
        assert_eq!(tokens.len(), 20_000);
        assert!(tokens.iter().all(|t| *t == Token::Color(ColorToken::Info)));

        let mut stuck = "outline".repeat(10_000);
        stuck.push('x');
        assert_eq!(vocab.segment(&stuck), None);
    }

    #[test]
    fn test_segment_non_ascii() {
        let vocab = Vocabulary::standard();
        assert_eq!(vocab.segment("infoé"), None);
        assert_eq!(vocab.segment("éinfo"), None);
        assert_eq!(vocab.segment(""), Some(Vec::new()));
    }

    #[test]
    fn test_custom_colors_join_vocabulary() {
        let vocab = Vocabulary::with_custom_colors([ColorToken::Custom("teal".into())]);
        assert_eq!(
            vocab.lookup("teal"),
            Some(Token::Color(ColorToken::Custom("teal".into())))
        );
        assert_eq!(Vocabulary::standard().lookup("teal"), None);
    }
}
