// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports are re-rendered by several callers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration violations
    // ========================================================================
    /// Structural validation failed. Carries every violation found.
    #[error("configuration has {} schema violation(s)", errors.len())]
    SchemaViolation { errors: Vec<String> },

    /// Cross-field rules failed on a structurally valid configuration.
    #[error("configuration has {} business rule violation(s)", errors.len())]
    BusinessRuleViolation { errors: Vec<String> },

    #[error("unknown screen kind '{0}'")]
    UnknownScreenKind(String),

    #[error("unknown field type '{0}'")]
    UnknownFieldType(String),

    #[error("invalid locale '{0}'")]
    InvalidLocale(String),

    #[error("invalid preset '{name}': {reason}")]
    InvalidPreset { name: String, reason: String },

    // ========================================================================
    // Engine setup
    // ========================================================================
    #[error("helper '{name}' is already registered")]
    DuplicateHelper { name: String },

    #[error("helper '{name}' expects {expected} argument(s), got {given}")]
    HelperArity {
        name: String,
        expected: usize,
        given: usize,
    },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// The violation list for configuration errors, empty otherwise.
    pub fn violations(&self) -> &[String] {
        match self {
            Self::SchemaViolation { errors } | Self::BusinessRuleViolation { errors } => errors,
            _ => &[],
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SchemaViolation { .. } => vec![
                "Fix every listed path in the configuration file".into(),
                "Required top-level keys: module, entity, screens, fields".into(),
                "Try: modgen validate --config <file>".into(),
            ],
            Self::BusinessRuleViolation { errors } => {
                let mut out = vec!["The configuration is well-formed but inconsistent".into()];
                if errors.iter().any(|e| e.contains("businessService")) {
                    out.push("Add workflow.businessService or disable the workflow".into());
                }
                if errors.iter().any(|e| e.contains("Workflow must be enabled")) {
                    out.push("Enable the workflow or disable the inbox screen".into());
                }
                if errors.iter().any(|e| e.contains("options or mdms")) {
                    out.push("Give choice fields an options list or an mdms source".into());
                }
                if errors.iter().any(|e| e.contains("Duplicate field names")) {
                    out.push("Rename or remove the repeated fields".into());
                }
                out
            }
            Self::UnknownScreenKind(_) => {
                vec!["Valid screen kinds: create, search, inbox, view, response".into()]
            }
            Self::UnknownFieldType(_) => vec![format!(
                "Valid field types: {}",
                crate::domain::FieldType::names().join(", ")
            )],
            Self::InvalidLocale(_) => vec!["Locales look like en_IN or hi_IN".into()],
            Self::InvalidPreset { name, .. } => vec![
                format!("Preset '{}' cannot be used as-is", name),
                "Check its template.json metadata and config".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SchemaViolation { .. }
            | Self::BusinessRuleViolation { .. }
            | Self::UnknownScreenKind(_)
            | Self::UnknownFieldType(_)
            | Self::InvalidLocale(_)
            | Self::InvalidPreset { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::DuplicateHelper { .. } | Self::HelperArity { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}
