//! Active theme ownership
//!
//! The provider holds the active palette and swaps it wholesale on
//! `switch`/`toggle`. The outgoing palette is never touched: anything still
//! holding its `Arc` keeps seeing consistent colors until it lets go.
//!
//! A successful switch always runs in this order:
//! 1. validate the new palette against the subscriber's required tokens
//! 2. replace the active palette
//! 3. call [`PaletteSubscriber::rebuild`] exactly once
//! 4. emit one [`ThemeChanged`] to every listener

use crate::catalog::ThemeCatalog;
use crate::error::{Result, ThemeError};
use crate::palette::ThemePalette;
use crate::theme::{ColorScheme, ThemePair};
use crate::tokens::ColorToken;
use std::sync::Arc;

/// Something that derives state from the active palette and must be rebuilt
/// when it changes (the style registry).
pub trait PaletteSubscriber {
    /// Tokens the next palette must define before it may become active
    fn required_tokens(&self) -> Vec<ColorToken>;

    /// Re-derive everything against the new palette
    fn rebuild(&mut self, palette: &Arc<ThemePalette>);
}

/// No-op subscriber for callers without derived state
impl PaletteSubscriber for () {
    fn required_tokens(&self) -> Vec<ColorToken> {
        Vec::new()
    }

    fn rebuild(&mut self, _palette: &Arc<ThemePalette>) {}
}

/// Notification emitted once per successful switch
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeChanged {
    pub previous: String,
    pub current: String,
    pub scheme: ColorScheme,
}

/// Handle returned by [`ThemeProvider::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ThemeChanged)>;

/// Owner of the active theme
pub struct ThemeProvider {
    catalog: ThemeCatalog,
    pair: ThemePair,
    active: Arc<ThemePalette>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl ThemeProvider {
    /// Create a provider with `initial` active.
    ///
    /// Both themes of `pair` and `initial` must exist in the catalog.
    pub fn new(catalog: ThemeCatalog, pair: ThemePair, initial: &str) -> Result<Self> {
        for name in [pair.light.as_str(), pair.dark.as_str()] {
            if !catalog.contains(name) {
                return Err(ThemeError::UnknownTheme(name.to_string()));
            }
        }
        let active = catalog
            .get(initial)
            .ok_or_else(|| ThemeError::UnknownTheme(initial.to_string()))?;

        tracing::debug!("ThemeProvider::new - active theme {}", active.name());
        Ok(Self {
            catalog,
            pair,
            active,
            listeners: Vec::new(),
            next_listener: 0,
        })
    }

    /// Built-in catalog, default light/dark pair, light theme active
    pub fn with_defaults() -> Result<Self> {
        let pair = ThemePair::default();
        let initial = pair.light.clone();
        Self::new(ThemeCatalog::builtin(), pair, &initial)
    }

    // ========== Active Theme ==========

    /// The active palette
    pub fn active(&self) -> Arc<ThemePalette> {
        self.active.clone()
    }

    pub fn active_name(&self) -> &str {
        self.active.name()
    }

    pub fn scheme(&self) -> ColorScheme {
        self.active.scheme()
    }

    pub fn pair(&self) -> &ThemePair {
        &self.pair
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    /// Mutable catalog access for registering themes after construction
    pub fn catalog_mut(&mut self) -> &mut ThemeCatalog {
        &mut self.catalog
    }

    // ========== Switching ==========

    /// Make `name` the active theme.
    ///
    /// Switching to the already-active theme does nothing. On error the
    /// active theme is unchanged and neither the subscriber nor any listener
    /// is called.
    pub fn switch(&mut self, name: &str, subscriber: &mut dyn PaletteSubscriber) -> Result<()> {
        let next = self
            .catalog
            .get(name)
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))?;

        if Arc::ptr_eq(&next, &self.active) {
            tracing::trace!("ThemeProvider::switch - {} already active", name);
            return Ok(());
        }

        next.validate(&subscriber.required_tokens())?;

        let previous = std::mem::replace(&mut self.active, next);
        tracing::debug!(
            "ThemeProvider::switch - switching from {} to {}",
            previous.name(),
            self.active.name()
        );

        subscriber.rebuild(&self.active);

        let event = ThemeChanged {
            previous: previous.name().to_string(),
            current: self.active.name().to_string(),
            scheme: self.active.scheme(),
        };
        drop(previous);
        self.notify(&event);
        Ok(())
    }

    /// Flip between the pair's light and dark themes
    pub fn toggle(&mut self, subscriber: &mut dyn PaletteSubscriber) -> Result<()> {
        let target = self.pair.for_scheme(self.scheme().toggle()).to_string();
        self.switch(&target, subscriber)
    }

    // ========== Listeners ==========

    /// Register a listener for theme changes
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ThemeChanged) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: &ThemeChanged) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("active", &self.active.name())
            .field("pair", &self.pair)
            .field("themes", &self.catalog.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct CountingSubscriber {
        required: Vec<ColorToken>,
        rebuilt: Vec<String>,
    }

    impl PaletteSubscriber for CountingSubscriber {
        fn required_tokens(&self) -> Vec<ColorToken> {
            self.required.clone()
        }

        fn rebuild(&mut self, palette: &Arc<ThemePalette>) {
            self.rebuilt.push(palette.name().to_string());
        }
    }

    #[test]
    fn test_switch_rebuilds_once_then_notifies() {
        let mut provider = ThemeProvider::with_defaults().unwrap();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        provider.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        let mut subscriber = CountingSubscriber::default();
        provider.switch("darkly", &mut subscriber).unwrap();

        assert_eq!(provider.active_name(), "darkly");
        assert_eq!(subscriber.rebuilt, vec!["darkly".to_string()]);
        assert_eq!(
            *events.borrow(),
            vec![ThemeChanged {
                previous: "cosmo".into(),
                current: "darkly".into(),
                scheme: ColorScheme::Dark,
            }]
        );
    }

    #[test]
    fn test_switch_to_active_theme_is_noop() {
        let mut provider = ThemeProvider::with_defaults().unwrap();
        let mut subscriber = CountingSubscriber::default();
        provider.switch("COSMO", &mut subscriber).unwrap();
        assert!(subscriber.rebuilt.is_empty());
    }

    #[test]
    fn test_unknown_theme_leaves_state_untouched() {
        let mut provider = ThemeProvider::with_defaults().unwrap();
        let mut subscriber = CountingSubscriber::default();
        let err = provider.switch("nope", &mut subscriber).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownTheme(_)));
        assert_eq!(provider.active_name(), "cosmo");
        assert!(subscriber.rebuilt.is_empty());
    }

    #[test]
    fn test_missing_required_token_blocks_switch() {
        let mut provider = ThemeProvider::with_defaults().unwrap();
        let mut subscriber = CountingSubscriber {
            required: vec![ColorToken::Custom("teal".into())],
            ..Default::default()
        };
        let err = provider.switch("darkly", &mut subscriber).unwrap_err();
        assert!(matches!(err, ThemeError::PaletteMissingToken { .. }));
        assert_eq!(provider.active_name(), "cosmo");
        assert!(subscriber.rebuilt.is_empty());
    }

    #[test]
    fn test_outgoing_palette_is_not_mutated() {
        let mut provider = ThemeProvider::with_defaults().unwrap();
        let held = provider.active();
        provider.switch("darkly", &mut ()).unwrap();
        assert_eq!(held.name(), "cosmo");
        assert_eq!(held.color(&ColorToken::Primary).unwrap().to_hex(), 0x2780E3);
    }

    #[test]
    fn test_toggle_flips_pair() {
        let mut provider = ThemeProvider::with_defaults().unwrap();
        provider.toggle(&mut ()).unwrap();
        assert_eq!(provider.scheme(), ColorScheme::Dark);
        assert_eq!(provider.active_name(), "darkly");
        provider.toggle(&mut ()).unwrap();
        assert_eq!(provider.active_name(), "cosmo");
    }

    #[test]
    fn test_unsubscribe() {
        let mut provider = ThemeProvider::with_defaults().unwrap();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let id = provider.subscribe(move |_| *sink.borrow_mut() += 1);

        provider.toggle(&mut ()).unwrap();
        assert!(provider.unsubscribe(id));
        assert!(!provider.unsubscribe(id));
        provider.toggle(&mut ()).unwrap();
        assert_eq!(*count.borrow(), 1);
    }
}
