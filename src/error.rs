//! Unified error types for brand-alignment.
//!
//! The scoring core only fails on malformed input or programmer errors
//! (an unrecognized product tier). Business outcomes such as "every category
//! is healthy" are values, never errors.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for brand-alignment operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AlignmentError {
    /// Request body could not be read or decoded
    #[error("Failed to read assessment input: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// Errors while rendering a finished payload
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A product tier name that is not one of baseline/extended/full/complete.
    ///
    /// This is a caller bug, not a user-input problem, and is kept apart from
    /// `Validation` so boundary handlers can tell the two apart.
    #[error("Unknown product tier '{0}' (expected baseline, extended, full or complete)")]
    UnknownProductTier(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors (missing, non-finite or unknown ratings)
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Request must contain either 'ratings' or 'scores'")]
    MissingScores,

    #[error("Request contains both 'ratings' and 'scores'")]
    AmbiguousScores,
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for brand-alignment operations
pub type Result<T> = std::result::Result<T, AlignmentError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl AlignmentError {
    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create a validation error for a missing sub-criterion
    pub fn missing_rating(sub_criterion: impl AsRef<str>) -> Self {
        Self::Validation(format!(
            "missing rating for sub-criterion '{}'",
            sub_criterion.as_ref()
        ))
    }

    /// Create a validation error for a non-finite rating
    pub fn non_finite_rating(sub_criterion: impl AsRef<str>, value: f64) -> Self {
        Self::Validation(format!(
            "rating for '{}' is not a finite number ({value})",
            sub_criterion.as_ref()
        ))
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// True for errors caused by the caller's code rather than by the data.
    #[must_use]
    pub const fn is_programmer_error(&self) -> bool {
        matches!(self, Self::UnknownProductTier(_))
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for AlignmentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AlignmentError {
    fn from(err: serde_json::Error) -> Self {
        Self::input(
            "JSON deserialization",
            InputErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to any context already carried by the
/// error, so a chain reads outermost first: `"request: ratings: base"`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on the error path.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<AlignmentError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: AlignmentError, new_ctx: &str) -> AlignmentError {
    match err {
        AlignmentError::Input {
            context: existing,
            source,
        } => AlignmentError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AlignmentError::Report {
            context: existing,
            source,
        } => AlignmentError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AlignmentError::Io {
            path,
            message,
            source,
        } => AlignmentError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        // The tier name is the whole message; context would obscure it.
        AlignmentError::UnknownProductTier(name) => AlignmentError::UnknownProductTier(name),
        AlignmentError::Config(msg) => AlignmentError::Config(chain_context(new_ctx, &msg)),
        AlignmentError::Validation(msg) => {
            AlignmentError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| AlignmentError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| AlignmentError::Validation(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlignmentError::missing_rating("clarity");
        let display = err.to_string();
        assert!(display.contains("clarity"), "{display}");
        assert!(display.contains("Validation"), "{display}");

        let err = AlignmentError::UnknownProductTier("platinum".to_string());
        assert!(err.to_string().contains("platinum"));
    }

    #[test]
    fn test_programmer_error_is_distinguishable() {
        assert!(AlignmentError::UnknownProductTier("x".into()).is_programmer_error());
        assert!(!AlignmentError::validation("bad rating").is_programmer_error());
    }

    #[test]
    fn test_non_finite_message() {
        let err = AlignmentError::non_finite_rating("testimonials", f64::NAN);
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AlignmentError::io("/path/to/request.json", io_err);

        assert!(err.to_string().contains("/path/to/request.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(AlignmentError::input("base", InputErrorKind::MissingScores))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(AlignmentError::Input { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Input error, got {other:?}"),
        }
    }

    #[test]
    fn test_context_does_not_rewrite_unknown_tier() {
        let err: Result<()> = Err(AlignmentError::UnknownProductTier("gold".into()));
        match err.context("assembling") {
            Err(AlignmentError::UnknownProductTier(name)) => assert_eq!(name, "gold"),
            other => panic!("Expected UnknownProductTier, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(AlignmentError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_option_context() {
        let none_value: Option<i32> = None;
        match none_value.context_none("missing value") {
            Err(AlignmentError::Validation(msg)) => assert_eq!(msg, "missing value"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
        assert_eq!(Some(7).context_none("unused").ok(), Some(7));
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
