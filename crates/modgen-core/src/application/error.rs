//! Application layer errors.
//!
//! These errors represent failures in orchestration, not configuration
//! rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A referenced configuration or fragment file does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// A configuration file exists but is not a JSON document.
    #[error("Cannot read {path}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    /// Rendering failed. This is a generator/template mismatch, not a user
    /// error.
    #[error("Template '{template}' failed to render: {reason}")]
    Template { template: String, reason: String },

    /// Storage failure while writing the module.
    #[error("Failed to write {path}: {reason}")]
    WriteFailure { path: PathBuf, reason: String },

    /// Module directory already exists.
    #[error("Module already exists at {path}")]
    ModuleExists { path: PathBuf },

    #[error("Template '{name}' not found")]
    PresetNotFound { name: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Preset store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigNotFound { path } => vec![
                format!("No file at: {}", path.display()),
                "Check the --config path".into(),
            ],
            Self::InvalidDocument { .. } => {
                vec!["The file must contain a single JSON object".into()]
            }
            Self::Template { template, .. } => vec![
                format!("Template '{}' does not match the configuration model", template),
                "Re-run with -v for the full diagnostic".into(),
            ],
            Self::WriteFailure { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were left in place".into(),
            ],
            Self::ModuleExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to write into it anyway".into(),
                "Or choose a different module code".into(),
            ],
            Self::PresetNotFound { .. } => vec![
                "Try: modgen templates to see available templates".into(),
            ],
            Self::StoreLockError => vec![
                "The preset store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigNotFound { .. } | Self::PresetNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidDocument { .. } | Self::ModuleExists { .. } => ErrorCategory::Validation,
            Self::Template { .. } | Self::WriteFailure { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
