//! The style engine facade
//!
//! Owns the [`ThemeProvider`] and the [`StyleRegistry`] and keeps them in
//! step: every successful theme switch rebuilds the registry before any
//! listener hears about it.

use crate::backend::{NullBackend, StyleBackend};
use crate::builder::ResolvedStyleSpec;
use crate::config::EngineConfig;
use crate::descriptor::Descriptor;
use crate::diagnostics::Diagnostic;
use crate::error::Result;
use crate::key::Extras;
use crate::registry::{StyleName, StyleRegistry};
use crate::vocab::{Vocabulary, WidgetClass};
use bootstyle_theme::{
    ListenerId, ThemeChanged, ThemeDefinition, ThemeError, ThemePalette, ThemeProvider,
};
use std::sync::Arc;

pub struct StyleEngine {
    provider: ThemeProvider,
    registry: StyleRegistry,
}

impl StyleEngine {
    /// Engine from configuration, discarding styles (no toolkit attached)
    pub fn new(config: &EngineConfig) -> Result<Self> {
        Self::with_backend(config, Box::new(NullBackend))
    }

    /// Engine from configuration, delivering styles to `backend`
    pub fn with_backend(config: &EngineConfig, backend: Box<dyn StyleBackend>) -> Result<Self> {
        let catalog = config.build_catalog()?;
        let provider = ThemeProvider::new(catalog, config.pair(), config.initial_theme())?;
        Ok(Self::from_provider(provider, backend))
    }

    /// Built-in themes, cosmo/darkly pair, cosmo active
    pub fn with_defaults() -> Result<Self> {
        Self::new(&EngineConfig::default())
    }

    pub fn from_provider(provider: ThemeProvider, backend: Box<dyn StyleBackend>) -> Self {
        let vocabulary = Vocabulary::with_custom_colors(provider.catalog().custom_tokens());
        let registry = StyleRegistry::new(provider.active(), vocabulary, backend);
        tracing::debug!("StyleEngine - started with theme {}", provider.active_name());
        Self { provider, registry }
    }

    // ========== Styles ==========

    /// Stable style name for `descriptor` on a `widget`
    pub fn resolve_name(&mut self, descriptor: impl Into<Descriptor>, widget: WidgetClass) -> StyleName {
        self.registry.resolve_name(descriptor, widget)
    }

    pub fn resolve_name_with(
        &mut self,
        descriptor: impl Into<Descriptor>,
        widget: WidgetClass,
        extras: Extras,
    ) -> StyleName {
        self.registry.resolve_name_with(descriptor, widget, extras)
    }

    /// Current spec behind a name
    pub fn spec(&self, name: &StyleName) -> Option<&ResolvedStyleSpec> {
        self.registry.spec(name)
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.registry.take_diagnostics()
    }

    // ========== Themes ==========

    pub fn active_theme(&self) -> Arc<ThemePalette> {
        self.provider.active()
    }

    pub fn provider(&self) -> &ThemeProvider {
        &self.provider
    }

    /// Switch themes; on error nothing changes
    pub fn set_theme(&mut self, name: &str) -> Result<()> {
        self.provider.switch(name, &mut self.registry)?;
        Ok(())
    }

    /// Flip between the light and dark themes of the configured pair
    pub fn toggle_theme(&mut self) -> Result<()> {
        self.provider.toggle(&mut self.registry)?;
        Ok(())
    }

    /// Register (or replace) a theme at runtime; its custom tokens become
    /// usable in descriptors
    pub fn register_theme(&mut self, definition: ThemeDefinition) -> Result<()> {
        let name = definition.name.clone();
        if self.provider.active_name().eq_ignore_ascii_case(&name) {
            // The active palette is never replaced in place.
            return Err(ThemeError::ActiveTheme(name).into());
        }
        self.provider.catalog_mut().insert(definition)?;
        self.registry.set_vocabulary(Vocabulary::with_custom_colors(
            self.provider.catalog().custom_tokens(),
        ));
        tracing::debug!("StyleEngine::register_theme - {}", name);
        Ok(())
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ThemeChanged) + 'static,
    {
        self.provider.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.provider.unsubscribe(id)
    }
}

impl std::fmt::Debug for StyleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleEngine")
            .field("provider", &self.provider)
            .field("registry", &self.registry)
            .finish()
    }
}
