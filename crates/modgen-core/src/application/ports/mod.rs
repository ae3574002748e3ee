//! Application ports (traits) for external dependencies.
//!
//! The application layer calls these; `modgen-adapters` implements them.
//!
//! - `Filesystem`: directory creation and file writes for the assembler
//! - `TemplateRenderer`: the composition engine
//! - `PresetStore`: stored configuration seeds

use std::path::Path;

use serde_json::Value;

use crate::application::templates::TemplateId;
use crate::domain::Preset;
use crate::error::ModgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modgen_adapters::filesystem::LocalFilesystem` (production)
/// - `modgen_adapters::filesystem::MemoryFilesystem` (dry runs, tests)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ModgenResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ModgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the template composition engine.
///
/// Implementations are pure string-in, string-out: no knowledge of where
/// output goes. Helpers are fixed when the renderer is constructed.
///
/// Implemented by `modgen_adapters::renderer::JinjaRenderer`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render one of the built-in templates.
    fn render(&self, template: TemplateId, context: &Value) -> ModgenResult<String>;

    /// Render an ad-hoc template source. `name` only appears in errors.
    fn render_source(&self, name: &str, source: &str, context: &Value) -> ModgenResult<String>;
}

/// Port for preset storage and retrieval.
///
/// Implemented by:
/// - `modgen_adapters::preset_store::BuiltinPresets` (compiled in)
/// - `modgen_adapters::preset_store::FsPresetStore` (`<dir>/<name>/template.json`)
#[cfg_attr(test, mockall::automock)]
pub trait PresetStore: Send + Sync {
    /// All presets, sorted by id.
    fn list(&self) -> ModgenResult<Vec<Preset>>;

    /// A preset by id. `PresetNotFound` when absent.
    fn get(&self, id: &str) -> ModgenResult<Preset>;

    /// Store a preset under its id, replacing any previous one.
    fn save(&self, preset: &Preset) -> ModgenResult<()>;
}
