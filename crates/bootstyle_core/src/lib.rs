//! Bootstyle Core
//!
//! Foundational value types shared by the bootstyle crates:
//!
//! - **Color**: RGBA color with hex parsing/formatting
//! - **Lightness math**: HSL lightness shifts and mixing used by modifiers
//! - **Contrast**: WCAG relative luminance and contrast ratio
//!
//! # Example
//!
//! ```rust
//! use bootstyle_core::Color;
//!
//! let primary = Color::parse_hex("#2780e3").unwrap();
//! let hover = primary.shift_lightness(0.08);
//!
//! assert_eq!(primary.to_hex_string(), "#2780e3");
//! assert!(hover.lightness() > primary.lightness());
//! assert!(Color::BLACK.contrast_ratio(Color::WHITE) > 20.9);
//! ```

pub mod color;

pub use color::{Color, ColorParseError};
