//! Error handling for the modgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use modgen_core::error::ModgenError;

pub use modgen_core::error::ErrorCategory as CoreCategory;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments parsed but do not make sense together.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// `validate` found problems.
    #[error("{} has {} configuration error(s)", .path.display(), .errors.len())]
    InvalidConfig { path: PathBuf, errors: Vec<String> },

    /// Settings could not be read, parsed, or written.
    #[error("Settings error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    #[error("Generation failed: {0}")]
    Core(#[from] ModgenError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],
            Self::InvalidConfig { .. } => vec![
                "Fix every listed error, then run validate again".into(),
                "Start from a preset: modgen templates".into(),
            ],
            Self::ConfigError { .. } => vec![
                "Check the settings file passed with --settings".into(),
                "Environment variables use the MODGEN__SECTION__KEY form".into(),
                "Use 'modgen init --force' to write fresh defaults".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::IoError { .. } => vec![
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Individual rule violations, shown one bullet each.
    pub fn violations(&self) -> &[String] {
        match self {
            Self::InvalidConfig { errors, .. } => errors,
            Self::Core(core) => core.violations(),
            _ => &[],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::InvalidConfig { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        for violation in self.violations() {
            output.push_str(&format!("    {} {}\n", "•".red(), violation));
        }

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }
        output
    }

    /// Plain-text version of [`Self::format_colored`].
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        for violation in self.violations() {
            out.push_str(&format!("  - {violation}\n"));
        }

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }
        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!(error = %self, "user error"),
            ErrorCategory::NotFound => tracing::warn!(error = %self, "not found"),
            ErrorCategory::Configuration => tracing::error!(error = %self, "settings error"),
            ErrorCategory::Internal => tracing::error!(error = %self, "internal error"),
        }
        if let Some(source) = self.source() {
            tracing::debug!("caused by: {source}");
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use modgen_core::application::ApplicationError;
    use modgen_core::domain::DomainError;
    use std::io;

    fn schema_error() -> CliError {
        CliError::Core(
            DomainError::SchemaViolation {
                errors: vec![
                    "module.code: must match ^[a-z0-9-]+$".into(),
                    "fields: is required".into(),
                ],
            }
            .into(),
        )
    }

    #[test]
    fn violations_become_bullets() {
        let text = schema_error().format_plain(false);
        assert!(text.contains("  - module.code: must match ^[a-z0-9-]+$\n"));
        assert!(text.contains("  - fields: is required\n"));
    }

    #[test]
    fn exit_codes_follow_categories() {
        assert_eq!(schema_error().exit_code(), 2);
        assert_eq!(
            CliError::Core(
                ApplicationError::ConfigNotFound {
                    path: "x.json".into()
                }
                .into()
            )
            .exit_code(),
            3
        );
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn module_exists_suggests_force() {
        let err = CliError::Core(
            ApplicationError::ModuleExists {
                path: "out/vehicle-mgmt".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 2);
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn verbose_output_shows_the_source_chain() {
        let err = CliError::IoError {
            message: "writing settings".into(),
            source: io::Error::other("disk full"),
        };
        let verbose = err.format_plain(true);
        assert!(verbose.contains("Caused by: disk full"));
        assert!(!verbose.contains("--verbose"));
        assert!(!err.format_plain(false).contains("disk full"));
    }
}
