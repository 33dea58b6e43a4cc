//! Bootstyle
//!
//! Turns short style descriptors (`"success-outline"`, `"info[subtle]"`)
//! into fully resolved widget styles registered under stable names, and
//! rebuilds them all when the theme changes.
//!
//! # Quick Start
//!
//! ```rust
//! use bootstyle::{RecordingBackend, StyleEngine, EngineConfig, WidgetClass};
//!
//! let backend = RecordingBackend::new();
//! let mut engine =
//!     StyleEngine::with_backend(&EngineConfig::default(), Box::new(backend.clone())).unwrap();
//!
//! let name = engine.resolve_name("success-outline", WidgetClass::Button);
//! assert!(name.as_str().ends_with(".success.Outline.TButton"));
//!
//! // Same name, new colors
//! engine.set_theme("darkly").unwrap();
//! assert_eq!(engine.spec(&name).unwrap().theme, "darkly");
//! assert_eq!(backend.batch_count(), 2);
//! ```
//!
//! # Pipeline
//!
//! 1. [`descriptor::parse`] turns a descriptor into a canonical [`StyleKey`]
//! 2. [`bootstyle_theme::resolve`] applies modifiers against the active palette
//! 3. [`builder::build`] maps the variant onto per-state colors and geometry
//! 4. [`StyleRegistry`] caches the result under a content-derived
//!    [`StyleName`] and hands it to the [`StyleBackend`]

pub mod backend;
pub mod builder;
pub mod config;
pub mod descriptor;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod key;
pub mod registry;
pub mod vocab;

pub use backend::{NullBackend, RecordingBackend, StyleBackend};
pub use builder::{build, BuiltStyle, ResolvedStyleSpec, StateColors, StateStyle};
pub use config::{EngineConfig, ThemeConfig, ThemeSources};
pub use descriptor::{parse, Descriptor, DescriptorError, ParsedDescriptor};
pub use diagnostics::{Diagnostic, DiagnosticLog};
pub use engine::StyleEngine;
pub use error::{EngineError, Result};
pub use key::{ExtraValue, Extras, StyleKey};
pub use registry::{StyleName, StyleRegistry, StyleRegistryEntry};
pub use vocab::{Capabilities, Token, Variant, Vocabulary, WidgetClass, WidgetSpec};

pub use bootstyle_core::Color;
pub use bootstyle_theme::{ColorScheme, ColorToken, Modifier, ThemeChanged, ThemeDefinition, ThemeError};
