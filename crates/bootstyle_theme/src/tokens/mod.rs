//! Design tokens for theming
//!
//! - Color tokens (semantic intents plus theme-declared custom tokens)
//! - Shade ramps (9 precomputed steps per token)

mod color;
mod shade;

pub use color::*;
pub use shade::*;
