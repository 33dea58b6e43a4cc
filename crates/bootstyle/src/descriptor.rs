//! Descriptor parsing
//!
//! A descriptor is the short bootstyle string (or token list) a widget asks
//! for: `"success-outline"`, `"info[subtle]"`, `"outlinedanger toolbutton"`.
//! Parsing turns it into a canonical [`StyleKey`] and never fails outright:
//! the one hard error, an unknown color, still carries a usable fallback key.
//!
//! Grammar, informally:
//!
//! ```text
//! descriptor := piece (sep piece)*          sep: '-' '_' ',' whitespace
//! piece      := word ( '[' arg ']' )*       word may be several tokens run together
//! arg        := digits | ('+'|'-') digits | "subtle" | "muted"
//! ```

use crate::diagnostics::Diagnostic;
use crate::key::StyleKey;
use crate::vocab::{Token, Variant, Vocabulary, WidgetClass};
use bootstyle_theme::{ColorToken, Modifier, MAX_SHADE, MIN_SHADE};
use thiserror::Error;

/// A style request, as text or as pre-split tokens
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Descriptor {
    Text(String),
    Tokens(Vec<String>),
}

impl Descriptor {
    /// The descriptor as written, for diagnostics
    pub fn source(&self) -> String {
        match self {
            Descriptor::Text(text) => text.clone(),
            Descriptor::Tokens(tokens) => tokens.join(" "),
        }
    }

    /// Separator-split pieces, lowercased
    fn pieces(&self) -> Vec<String> {
        match self {
            Descriptor::Text(text) => split_pieces(text),
            Descriptor::Tokens(tokens) => tokens.iter().flat_map(|t| split_pieces(t)).collect(),
        }
    }
}

impl From<&str> for Descriptor {
    fn from(value: &str) -> Self {
        Descriptor::Text(value.to_string())
    }
}

impl From<String> for Descriptor {
    fn from(value: String) -> Self {
        Descriptor::Text(value)
    }
}

impl From<&String> for Descriptor {
    fn from(value: &String) -> Self {
        Descriptor::Text(value.clone())
    }
}

impl From<Vec<String>> for Descriptor {
    fn from(value: Vec<String>) -> Self {
        Descriptor::Tokens(value)
    }
}

impl From<&[&str]> for Descriptor {
    fn from(value: &[&str]) -> Self {
        Descriptor::Tokens(value.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Descriptor {
    fn from(value: [&str; N]) -> Self {
        Descriptor::Tokens(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<(&str, &str)> for Descriptor {
    fn from((a, b): (&str, &str)) -> Self {
        Descriptor::Tokens(vec![a.to_string(), b.to_string()])
    }
}

impl From<(&str, &str, &str)> for Descriptor {
    fn from((a, b, c): (&str, &str, &str)) -> Self {
        Descriptor::Tokens(vec![a.to_string(), b.to_string(), c.to_string()])
    }
}

/// Successful parse: the key plus everything that was ignored on the way
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedDescriptor {
    pub key: StyleKey,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Error)]
pub enum DescriptorError {
    /// No known color was named but an unrecognized piece was; `fallback`
    /// carries the same descriptor resolved with the fallback color.
    #[error("unknown color token {token:?}")]
    UnknownColorToken {
        token: String,
        fallback: Box<ParsedDescriptor>,
    },
}

impl DescriptorError {
    /// The key to use anyway
    pub fn into_fallback(self) -> ParsedDescriptor {
        match self {
            DescriptorError::UnknownColorToken { fallback, .. } => *fallback,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lexing
// ─────────────────────────────────────────────────────────────────────────────

fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c == ',' || c.is_whitespace()
}

/// Split on separators outside brackets, so `"info[-1]"` keeps its sign
fn split_pieces(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in text.chars() {
        match c {
            '[' => {
                depth += 1;
                current.push(c);
            }
            ']' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            c if depth == 0 && is_separator(c) => {
                if !current.is_empty() {
                    pieces.push(std::mem::take(&mut current));
                }
            }
            c => current.extend(c.to_lowercase()),
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// `word[arg][arg]` split into the word and its bracket arguments.
/// Returns `None` for malformed brackets.
fn split_args(piece: &str) -> Option<(&str, Vec<&str>)> {
    let Some(open) = piece.find('[') else {
        return Some((piece, Vec::new()));
    };

    let word = &piece[..open];
    let mut args = Vec::new();
    let mut rest = &piece[open..];
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        args.push(inner[..close].trim());
        rest = &inner[close + 1..];
    }
    Some((word, args))
}

fn parse_modifier(arg: &str) -> Option<Modifier> {
    match arg {
        "subtle" => Some(Modifier::Subtle),
        "muted" => Some(Modifier::Muted),
        _ if arg.starts_with('+') || arg.starts_with('-') => {
            let magnitude = saturating_digits(&arg[1..])?;
            let delta = if arg.starts_with('-') {
                -magnitude
            } else {
                magnitude
            };
            let delta = delta.clamp(i64::from(i16::MIN), i64::from(i16::MAX));
            Some(Modifier::Elevation(delta as i16))
        }
        _ => {
            let shade = saturating_digits(arg)?;
            let shade = shade.clamp(i64::from(MIN_SHADE), i64::from(MAX_SHADE));
            Some(Modifier::Shade(shade as u16))
        }
    }
}

/// Decimal digits as an integer, saturating instead of overflowing.
/// `None` unless `digits` is non-empty ASCII digits.
fn saturating_digits(digits: &str) -> Option<i64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    }))
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Parse a descriptor into a canonical key.
///
/// `default_widget` applies when the descriptor names no widget class. When
/// it names several tokens of one kind, the earliest in vocabulary order
/// wins and the rest are reported as unrecognized.
pub fn parse(
    descriptor: &Descriptor,
    default_widget: WidgetClass,
    vocabulary: &Vocabulary,
) -> Result<ParsedDescriptor, DescriptorError> {
    let source = descriptor.source();
    let mut diagnostics = Vec::new();
    let unrecognized = |token: &str| Diagnostic::UnrecognizedToken {
        token: token.to_string(),
        descriptor: source.clone(),
    };

    let mut colors: Vec<(ColorToken, Vec<Modifier>)> = Vec::new();
    let mut variants: Vec<Variant> = Vec::new();
    let mut widgets: Vec<WidgetClass> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();

    for piece in descriptor.pieces() {
        let Some((word, args)) = split_args(&piece) else {
            diagnostics.push(unrecognized(&piece));
            continue;
        };
        if word.is_empty() {
            diagnostics.push(unrecognized(&piece));
            continue;
        }

        let tokens = match vocabulary.lookup(word) {
            Some(token) => vec![token],
            None => match vocabulary.segment(word) {
                Some(tokens) => tokens,
                None => {
                    unknown.push(word.to_string());
                    continue;
                }
            },
        };

        // Bracket arguments bind to the last token of the piece, which must
        // be a color.
        let mut modifiers = Vec::new();
        if matches!(tokens.last(), Some(Token::Color(_))) {
            for arg in &args {
                match parse_modifier(arg) {
                    Some(m) => modifiers.push(m),
                    None => diagnostics.push(unrecognized(&format!("[{arg}]"))),
                }
            }
        } else {
            for arg in &args {
                diagnostics.push(unrecognized(&format!("[{arg}]")));
            }
        }

        let last = tokens.len() - 1;
        for (i, token) in tokens.into_iter().enumerate() {
            match token {
                Token::Color(color) if i == last => {
                    colors.push((color, std::mem::take(&mut modifiers)))
                }
                Token::Color(color) => colors.push((color, Vec::new())),
                Token::Variant(variant) => variants.push(variant),
                Token::Widget(widget) => widgets.push(widget),
            }
        }
    }

    // Earliest vocabulary entry of each kind wins.
    let widget = pick_first(widgets, &mut diagnostics, |w| unrecognized(w.name()))
        .unwrap_or(default_widget);
    let spec = widget.spec();

    let requested_variant = pick_first(variants, &mut diagnostics, |v| unrecognized(v.name()));

    colors.sort_by(|a, b| a.0.cmp(&b.0));
    let mut colors = colors.into_iter();
    let chosen_color = colors.next();
    for (loser, _) in colors {
        diagnostics.push(unrecognized(loser.name()));
    }

    let variant = match requested_variant {
        Some(variant) if widget.supports(variant) => variant,
        Some(variant) => {
            diagnostics.push(Diagnostic::UnsupportedVariantForWidget {
                variant,
                widget,
                fallback: spec.default_variant,
            });
            spec.default_variant
        }
        None => spec.default_variant,
    };

    let (color, modifiers) = match chosen_color {
        Some(found) => {
            for word in &unknown {
                diagnostics.push(unrecognized(word));
            }
            found
        }
        None if !unknown.is_empty() => {
            let token = unknown.remove(0);
            for word in &unknown {
                diagnostics.push(unrecognized(word));
            }
            let key = StyleKey::new(widget, ColorToken::FALLBACK, variant);
            return Err(DescriptorError::UnknownColorToken {
                token,
                fallback: Box::new(ParsedDescriptor { key, diagnostics }),
            });
        }
        None => (spec.default_color, Vec::new()),
    };

    Ok(ParsedDescriptor {
        key: StyleKey::new(widget, color, variant).with_modifiers(&modifiers),
        diagnostics,
    })
}

/// Smallest item wins; the rest are reported
fn pick_first<T: Ord + Copy>(
    mut items: Vec<T>,
    diagnostics: &mut Vec<Diagnostic>,
    report: impl Fn(T) -> Diagnostic,
) -> Option<T> {
    items.sort();
    items.dedup();
    let mut items = items.into_iter();
    let first = items.next()?;
    diagnostics.extend(items.map(report));
    Some(first)
}
