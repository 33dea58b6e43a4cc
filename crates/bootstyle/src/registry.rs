//! Style registry
//!
//! Caches one built style per canonical [`StyleKey`] and hands out stable,
//! content-derived names:
//!
//! ```text
//! bs[1a2b3c4d].success.Outline.TButton
//!    ^^^^^^^^  ^^^^^^^ ^^^^^^^ ^^^^^^^
//!    key hash  color   variant native class
//! ```
//!
//! A name never changes for the life of the registry. Theme switches rebuild
//! every cached spec in place under the same names.

use crate::backend::StyleBackend;
use crate::builder::{build, surface_for, ResolvedStyleSpec};
use crate::descriptor::{parse, Descriptor, DescriptorError};
use crate::diagnostics::{Diagnostic, DiagnosticLog};
use crate::key::{Extras, StyleKey};
use crate::vocab::{Vocabulary, WidgetClass};
use bootstyle_core::Color;
use bootstyle_theme::{
    resolve_on, state_colors, ColorSet, ColorToken, PaletteSubscriber, ThemePalette,
};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Stable, toolkit-facing style name
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StyleName(String);

impl StyleName {
    fn generate(key: &StyleKey, salt: u32) -> Self {
        StyleName(format!(
            "bs[{:08x}].{}.{}.{}",
            key.salted_fingerprint(salt),
            key.color().name(),
            key.variant().display_name(),
            key.widget().native_class()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StyleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One cached style
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRegistryEntry {
    pub key: StyleKey,
    pub name: StyleName,
    pub spec: ResolvedStyleSpec,
}

/// Cache of built styles for the active palette
pub struct StyleRegistry {
    vocabulary: Vocabulary,
    palette: Arc<ThemePalette>,
    entries: IndexMap<StyleKey, StyleRegistryEntry>,
    by_name: FxHashMap<StyleName, usize>,
    backend: Box<dyn StyleBackend>,
    diagnostics: DiagnosticLog,
}

impl StyleRegistry {
    pub fn new(
        palette: Arc<ThemePalette>,
        vocabulary: Vocabulary,
        backend: Box<dyn StyleBackend>,
    ) -> Self {
        Self {
            vocabulary,
            palette,
            entries: IndexMap::new(),
            by_name: FxHashMap::default(),
            backend,
            diagnostics: DiagnosticLog::new(),
        }
    }

    // ========== Resolution ==========

    /// Name for `descriptor` on a widget of class `widget`
    pub fn resolve_name(&mut self, descriptor: impl Into<Descriptor>, widget: WidgetClass) -> StyleName {
        self.resolve_name_with(descriptor, widget, Extras::new())
    }

    /// Name for `descriptor` with extras.
    ///
    /// Never fails: unknown colors fall back to the primary color and every
    /// repair is recorded as a [`Diagnostic`].
    pub fn resolve_name_with(
        &mut self,
        descriptor: impl Into<Descriptor>,
        widget: WidgetClass,
        extras: Extras,
    ) -> StyleName {
        let descriptor = descriptor.into();
        let parsed = match parse(&descriptor, widget, &self.vocabulary) {
            Ok(parsed) => parsed,
            Err(DescriptorError::UnknownColorToken { token, fallback }) => {
                self.diagnostics.push(Diagnostic::UnknownColorToken {
                    token,
                    fallback: ColorToken::FALLBACK,
                });
                *fallback
            }
        };
        self.diagnostics.extend(parsed.diagnostics);

        let mut key = parsed.key.with_extras(extras);
        if !self.palette.contains(key.color()) {
            self.diagnostics.push(Diagnostic::UnknownColorToken {
                token: key.color().name().to_string(),
                fallback: ColorToken::FALLBACK,
            });
            key = key.with_color(ColorToken::FALLBACK);
        }
        self.resolve_key(key)
    }

    /// Name for an already canonical key, building it on first use
    pub fn resolve_key(&mut self, key: StyleKey) -> StyleName {
        if let Some(entry) = self.entries.get(&key) {
            tracing::trace!("StyleRegistry::resolve_key - hit {}", entry.name);
            return entry.name.clone();
        }

        let (spec, diagnostics) = build_spec(&key, &self.palette);
        self.diagnostics.extend(diagnostics);

        let mut salt = 0;
        let mut name = StyleName::generate(&key, salt);
        while self.by_name.contains_key(&name) {
            salt += 1;
            tracing::debug!("StyleRegistry::resolve_key - name collision for {}, salt {}", key, salt);
            name = StyleName::generate(&key, salt);
        }

        tracing::debug!("StyleRegistry::resolve_key - built {} for {}", name, key);
        self.backend.apply(&[(name.clone(), spec.clone())]);
        let (index, _) = self.entries.insert_full(
            key.clone(),
            StyleRegistryEntry {
                key,
                name: name.clone(),
                spec,
            },
        );
        self.by_name.insert(name.clone(), index);
        name
    }

    // ========== Rebuild ==========

    /// Rebuild every cached style against `palette`, keeping names.
    ///
    /// All specs are built before any is replaced, then the backend receives
    /// them in a single batch.
    pub fn rebuild_all(&mut self, palette: &Arc<ThemePalette>) {
        let mut diagnostics = Vec::new();
        let rebuilt: Vec<ResolvedStyleSpec> = self
            .entries
            .keys()
            .map(|key| {
                let (spec, diags) = build_spec(key, palette);
                diagnostics.extend(diags);
                spec
            })
            .collect();

        self.palette = palette.clone();
        let mut batch = Vec::with_capacity(rebuilt.len());
        for (entry, spec) in self.entries.values_mut().zip(rebuilt) {
            entry.spec = spec;
            batch.push((entry.name.clone(), entry.spec.clone()));
        }

        tracing::debug!(
            "StyleRegistry::rebuild_all - {} styles for theme {}",
            batch.len(),
            palette.name()
        );
        if !batch.is_empty() {
            self.backend.apply(&batch);
        }
        self.diagnostics.extend(diagnostics);
    }

    /// Replace the vocabulary, e.g. after new custom tokens were registered
    pub fn set_vocabulary(&mut self, vocabulary: Vocabulary) {
        self.vocabulary = vocabulary;
    }

    // ========== Queries ==========

    pub fn spec(&self, name: &StyleName) -> Option<&ResolvedStyleSpec> {
        self.entry(name).map(|entry| &entry.spec)
    }

    pub fn entry(&self, name: &StyleName) -> Option<&StyleRegistryEntry> {
        let index = *self.by_name.get(name)?;
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    pub fn get(&self, key: &StyleKey) -> Option<&StyleRegistryEntry> {
        self.entries.get(key)
    }

    /// Entries in creation order
    pub fn iter(&self) -> impl Iterator<Item = &StyleRegistryEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn palette(&self) -> &Arc<ThemePalette> {
        &self.palette
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Distinct color tokens referenced by cached styles
    pub fn required_tokens(&self) -> Vec<ColorToken> {
        self.entries
            .keys()
            .map(|key| key.color().clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// Drain recorded diagnostics
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}

impl PaletteSubscriber for StyleRegistry {
    fn required_tokens(&self) -> Vec<ColorToken> {
        StyleRegistry::required_tokens(self)
    }

    fn rebuild(&mut self, palette: &Arc<ThemePalette>) {
        self.rebuild_all(palette);
    }
}

impl fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("palette", &self.palette.name())
            .field("entries", &self.entries.len())
            .field("diagnostics", &self.diagnostics.len())
            .finish()
    }
}

/// Resolve colors and build, degrading to the fallback color if the palette
/// lacks the key's token
fn build_spec(key: &StyleKey, palette: &ThemePalette) -> (ResolvedStyleSpec, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let surface = surface_for(key.variant(), palette);
    let colors = match resolve_on(key.color(), key.modifiers(), palette, surface) {
        Ok(resolved) => {
            if let Some(low) = resolved.low_contrast {
                diagnostics.push(Diagnostic::LowContrastWarning(low));
            }
            resolved.colors
        }
        Err(e) => {
            tracing::error!("StyleRegistry - cannot resolve {}: {}", key, e);
            diagnostics.push(Diagnostic::UnknownColorToken {
                token: key.color().name().to_string(),
                fallback: ColorToken::FALLBACK,
            });
            fallback_colors(palette, surface)
        }
    };

    let built = build(key, &colors, palette);
    diagnostics.extend(built.diagnostics);
    (built.spec, diagnostics)
}

fn fallback_colors(palette: &ThemePalette, surface: Color) -> ColorSet {
    let normal = palette
        .base(&ColorToken::FALLBACK)
        .unwrap_or_else(|| palette.foreground());
    state_colors(normal, surface)
}
