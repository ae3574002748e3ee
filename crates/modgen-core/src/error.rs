//! Unified error handling for modgen-core.
//!
//! Wraps domain and application errors behind one type so callers can ask
//! any failure for suggestions and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for modgen-core operations.
#[derive(Debug, Error, Clone)]
pub enum ModgenError {
    /// Configuration and naming rule violations.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration failures: missing files, rendering, writes.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Tool setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ModgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your settings file and MODGEN__* environment variables".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in modgen".into(),
                "Re-run with -vv and include the output when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Every configuration violation carried by this error, if any.
    pub fn violations(&self) -> &[String] {
        match self {
            Self::Domain(e) => e.violations(),
            _ => &[],
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::StoreLockError))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ModgenResult<T> = Result<T, ModgenError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> ModgenResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> ModgenResult<T> {
        self.map_err(|e| ModgenError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
