//! Bootstyle Theme System
//!
//! Theme palettes, the active-theme provider and color resolution for
//! bootstyle descriptors.
//!
//! # Overview
//!
//! The theme system provides:
//! - **Color tokens**: semantic intents (`primary`, `danger`, ...) plus
//!   theme-declared custom tokens
//! - **Palettes**: validated, immutable color sets with a precomputed 9-step
//!   shade ramp per token
//! - **Catalog**: built-in themes and TOML-defined user themes
//! - **Provider**: the active palette, atomic switching and light/dark toggle
//! - **Resolver**: modifiers (`Shade`, `Elevation`, `Subtle`, `Muted`) and
//!   interaction-state colors
//!
//! # Quick Start
//!
//! ```rust
//! use bootstyle_theme::{resolve, ColorToken, Modifier, ThemeProvider};
//!
//! let mut provider = ThemeProvider::with_defaults().unwrap();
//! let palette = provider.active();
//!
//! let resolved = resolve(&ColorToken::Primary, &[Modifier::Shade(300)], &palette).unwrap();
//! println!("primary[300] = {}", resolved.colors.normal);
//!
//! // Swap to the dark half of the light/dark pair
//! provider.toggle(&mut ()).unwrap();
//! assert_eq!(provider.active_name(), "darkly");
//! ```
//!
//! # Failure policy
//!
//! Theme loading and switching fail fast with [`ThemeError`]: an incomplete
//! theme never becomes active. Per-color resolution only reports soft
//! conditions ([`LowContrast`]) alongside a usable result.

pub mod catalog;
pub mod error;
pub mod palette;
pub mod presets;
pub mod provider;
pub mod resolve;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use catalog::ThemeCatalog;
pub use error::{Result, ThemeError};
pub use palette::ThemePalette;
pub use presets::BuiltinTheme;
pub use provider::{ListenerId, PaletteSubscriber, ThemeChanged, ThemeProvider};
pub use resolve::{
    canonical_modifiers, readable_on, resolve, resolve_on, state_colors, ColorSet, LowContrast,
    Modifier, ResolvedColors, MIN_CONTRAST, SUBTLE_BACKGROUND_WEIGHT,
};
pub use theme::{ColorScheme, ThemeDefinition, ThemePair};
pub use tokens::*;
