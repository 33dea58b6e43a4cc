//! Canonical style keys and their fingerprints
//!
//! A [`StyleKey`] is the registry's cache key. Its modifiers and extras are
//! always held in canonical order, so two descriptors that mean the same
//! thing produce equal keys (and equal fingerprints).

use crate::vocab::{Variant, WidgetClass};
use bootstyle_theme::{canonical_modifiers, ColorToken, Modifier};
use serde::Serialize;
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fmt;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Extend a 32-bit FNV-1a hash with `bytes`
#[inline]
pub fn fnv1a32_extend(mut hash: u32, bytes: &[u8]) -> u32 {
    for &byte in bytes {
        hash ^= u32::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// 32-bit FNV-1a of `bytes`
#[inline]
pub fn fnv1a32(bytes: &[u8]) -> u32 {
    fnv1a32_extend(FNV_OFFSET_BASIS, bytes)
}

// ─────────────────────────────────────────────────────────────────────────────
// Extras
// ─────────────────────────────────────────────────────────────────────────────

/// Value of a style extra
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ExtraValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl ExtraValue {
    fn tag(&self) -> u8 {
        match self {
            ExtraValue::Bool(_) => 0,
            ExtraValue::Int(_) => 1,
            ExtraValue::Text(_) => 2,
        }
    }

    /// Parse a command-line style value: `true`/`false`, an integer, or text
    pub fn parse(raw: &str) -> ExtraValue {
        match raw {
            "true" => ExtraValue::Bool(true),
            "false" => ExtraValue::Bool(false),
            _ => raw
                .parse::<i64>()
                .map(ExtraValue::Int)
                .unwrap_or_else(|_| ExtraValue::Text(raw.to_string())),
        }
    }
}

impl fmt::Display for ExtraValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtraValue::Bool(b) => write!(f, "{b}"),
            ExtraValue::Int(n) => write!(f, "{n}"),
            ExtraValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for ExtraValue {
    fn from(value: bool) -> Self {
        ExtraValue::Bool(value)
    }
}

impl From<i64> for ExtraValue {
    fn from(value: i64) -> Self {
        ExtraValue::Int(value)
    }
}

impl From<i32> for ExtraValue {
    fn from(value: i32) -> Self {
        ExtraValue::Int(i64::from(value))
    }
}

impl From<u32> for ExtraValue {
    fn from(value: u32) -> Self {
        ExtraValue::Int(i64::from(value))
    }
}

impl From<&str> for ExtraValue {
    fn from(value: &str) -> Self {
        ExtraValue::Text(value.to_string())
    }
}

impl From<String> for ExtraValue {
    fn from(value: String) -> Self {
        ExtraValue::Text(value)
    }
}

/// Widget options beyond color and variant, sorted by key.
///
/// Keys are lowercased on insertion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Extras(BTreeMap<String, ExtraValue>);

impl Extras {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: &str, value: impl Into<ExtraValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<ExtraValue>) -> Option<ExtraValue> {
        self.0.insert(key.to_ascii_lowercase(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&ExtraValue> {
        self.0.get(&key.to_ascii_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtraValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<ExtraValue>> FromIterator<(K, V)> for Extras {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut extras = Extras::new();
        for (key, value) in iter {
            extras.insert(key.as_ref(), value);
        }
        extras
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StyleKey
// ─────────────────────────────────────────────────────────────────────────────

/// Canonical identity of a style
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleKey {
    widget: WidgetClass,
    color: ColorToken,
    variant: Variant,
    modifiers: SmallVec<[Modifier; 4]>,
    extras: Extras,
}

impl StyleKey {
    pub fn new(widget: WidgetClass, color: ColorToken, variant: Variant) -> Self {
        Self {
            widget,
            color,
            variant,
            modifiers: SmallVec::new(),
            extras: Extras::new(),
        }
    }

    /// Replace the modifiers (canonicalized)
    pub fn with_modifiers(mut self, modifiers: &[Modifier]) -> Self {
        self.modifiers = canonical_modifiers(modifiers);
        self
    }

    pub fn with_extras(mut self, extras: Extras) -> Self {
        self.extras = extras;
        self
    }

    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    pub fn widget(&self) -> WidgetClass {
        self.widget
    }

    pub fn color(&self) -> &ColorToken {
        &self.color
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    /// Deterministic byte encoding of every field.
    ///
    /// Strings are length-prefixed and integers little-endian, so distinct
    /// keys never encode to the same bytes.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(64);
        let put_str = |out: &mut Vec<u8>, s: &str| {
            out.extend_from_slice(&(s.len() as u32).to_le_bytes());
            out.extend_from_slice(s.as_bytes());
        };

        out.push(self.widget.id());
        put_str(&mut out, self.color.name());
        out.push(self.variant.id());

        out.extend_from_slice(&(self.modifiers.len() as u32).to_le_bytes());
        for modifier in &self.modifiers {
            out.push(modifier.tag());
            let payload = match *modifier {
                Modifier::Shade(n) => i32::from(n),
                Modifier::Elevation(d) => i32::from(d),
                Modifier::Subtle | Modifier::Muted => 0,
            };
            out.extend_from_slice(&payload.to_le_bytes());
        }

        out.extend_from_slice(&(self.extras.len() as u32).to_le_bytes());
        for (key, value) in self.extras.iter() {
            put_str(&mut out, key);
            out.push(value.tag());
            match value {
                ExtraValue::Bool(b) => out.push(u8::from(*b)),
                ExtraValue::Int(n) => out.extend_from_slice(&n.to_le_bytes()),
                ExtraValue::Text(s) => put_str(&mut out, s),
            }
        }
        out
    }

    /// 32-bit FNV-1a over [`canonical_bytes`](Self::canonical_bytes)
    pub fn fingerprint(&self) -> u32 {
        fnv1a32(&self.canonical_bytes())
    }

    /// Fingerprint perturbed by `salt`; `salt == 0` is the plain fingerprint
    pub fn salted_fingerprint(&self, salt: u32) -> u32 {
        let hash = self.fingerprint();
        if salt == 0 {
            hash
        } else {
            fnv1a32_extend(hash, &salt.to_le_bytes())
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)?;
        for modifier in &self.modifiers {
            write!(f, "{modifier}")?;
        }
        write!(f, "-{}-{}", self.variant, self.widget.name())?;
        for (key, value) in self.extras.iter() {
            write!(f, " {key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a32_reference_values() {
        assert_eq!(fnv1a32(b""), 0x811c_9dc5);
        assert_eq!(fnv1a32(b"a"), 0xe40c_292c);
        assert_eq!(fnv1a32(b"foobar"), 0xbf9c_f968);
    }

    #[test]
    fn test_modifier_order_does_not_change_key() {
        let base = StyleKey::new(WidgetClass::Button, ColorToken::Primary, Variant::Solid);
        let a = base
            .clone()
            .with_modifiers(&[Modifier::Muted, Modifier::Shade(300)]);
        let b = base.with_modifiers(&[Modifier::Shade(300), Modifier::Muted]);
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_extras_are_part_of_identity() {
        let base = StyleKey::new(WidgetClass::Button, ColorToken::Primary, Variant::Solid);
        let plain = base.clone();
        let bordered = base.with_extras(Extras::new().with("border_width", 2));
        assert_ne!(plain, bordered);
        assert_ne!(plain.fingerprint(), bordered.fingerprint());
    }

    #[test]
    fn test_extras_insertion_order_is_irrelevant() {
        let a = Extras::new().with("padding", 4).with("Icon", "star");
        let b: Extras = [("icon", ExtraValue::from("star")), ("padding", ExtraValue::from(4))]
            .into_iter()
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_length_prefix_separates_fields() {
        let a = Extras::new().with("ab", "c");
        let b = Extras::new().with("a", "bc");
        let key = StyleKey::new(WidgetClass::Label, ColorToken::Info, Variant::Text);
        assert_ne!(
            key.clone().with_extras(a).canonical_bytes(),
            key.with_extras(b).canonical_bytes()
        );
    }

    #[test]
    fn test_extra_value_parse() {
        assert_eq!(ExtraValue::parse("true"), ExtraValue::Bool(true));
        assert_eq!(ExtraValue::parse("-3"), ExtraValue::Int(-3));
        assert_eq!(ExtraValue::parse("bold"), ExtraValue::Text("bold".into()));
    }

    #[test]
    fn test_salt_changes_fingerprint() {
        let key = StyleKey::new(WidgetClass::Entry, ColorToken::Danger, Variant::Outline);
        assert_eq!(key.salted_fingerprint(0), key.fingerprint());
        assert_ne!(key.salted_fingerprint(1), key.fingerprint());
    }
}
