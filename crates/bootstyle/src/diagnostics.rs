//! Non-fatal problems found while resolving styles
//!
//! Per-widget resolution never fails. Anything that had to be repaired or
//! ignored is reported here and logged through `tracing`.

use crate::vocab::{Variant, WidgetClass};
use bootstyle_theme::{ColorToken, LowContrast};
use std::collections::VecDeque;
use std::fmt;

/// Most diagnostics kept before the oldest are dropped
pub const DIAGNOSTIC_CAPACITY: usize = 1024;

#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    /// A descriptor piece matched nothing in the vocabulary, or lost to an
    /// earlier token of the same kind
    UnrecognizedToken { token: String, descriptor: String },
    /// The requested color is unknown; `fallback` was used instead
    UnknownColorToken { token: String, fallback: ColorToken },
    /// The widget class does not support the variant
    UnsupportedVariantForWidget {
        variant: Variant,
        widget: WidgetClass,
        fallback: Variant,
    },
    /// A `Muted` foreground could not reach the contrast target
    LowContrastWarning(LowContrast),
    /// An extra was ignored
    UnsupportedExtra {
        widget: WidgetClass,
        key: String,
        reason: &'static str,
    },
}

impl Diagnostic {
    /// Log through `tracing`
    pub fn emit(&self) {
        match self {
            Diagnostic::UnrecognizedToken { .. } => tracing::debug!("{}", self),
            _ => tracing::warn!("{}", self),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnrecognizedToken { token, descriptor } => {
                write!(f, "unrecognized token {token:?} in descriptor {descriptor:?}")
            }
            Diagnostic::UnknownColorToken { token, fallback } => {
                write!(f, "unknown color token {token:?}, using {fallback}")
            }
            Diagnostic::UnsupportedVariantForWidget {
                variant,
                widget,
                fallback,
            } => write!(
                f,
                "variant {variant} is not supported by {widget}, using {fallback}"
            ),
            Diagnostic::LowContrastWarning(detail) => write!(f, "{detail}"),
            Diagnostic::UnsupportedExtra {
                widget,
                key,
                reason,
            } => write!(f, "extra {key:?} ignored for {widget}: {reason}"),
        }
    }
}

/// Bounded buffer of diagnostics, oldest first
#[derive(Clone, Debug, Default)]
pub struct DiagnosticLog {
    entries: VecDeque<Diagnostic>,
    dropped: usize,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit and record a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        diagnostic.emit();
        if self.entries.len() == DIAGNOSTIC_CAPACITY {
            self.entries.pop_front();
            self.dropped += 1;
        }
        self.entries.push_back(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.push(diagnostic);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of diagnostics discarded because the buffer was full
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Drain everything recorded so far
    pub fn take(&mut self) -> Vec<Diagnostic> {
        self.entries.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_bounded() {
        let mut log = DiagnosticLog::new();
        for i in 0..DIAGNOSTIC_CAPACITY + 3 {
            log.push(Diagnostic::UnrecognizedToken {
                token: i.to_string(),
                descriptor: String::new(),
            });
        }
        assert_eq!(log.len(), DIAGNOSTIC_CAPACITY);
        assert_eq!(log.dropped(), 3);
        assert_eq!(
            log.iter().next(),
            Some(&Diagnostic::UnrecognizedToken {
                token: "3".into(),
                descriptor: String::new(),
            })
        );

        assert_eq!(log.take().len(), DIAGNOSTIC_CAPACITY);
        assert!(log.is_empty());
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::UnsupportedVariantForWidget {
            variant: Variant::Striped,
            widget: WidgetClass::Button,
            fallback: Variant::Solid,
        };
        assert_eq!(
            d.to_string(),
            "variant striped is not supported by TButton, using solid"
        );
    }
}
