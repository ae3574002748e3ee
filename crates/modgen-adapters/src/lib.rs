//! Infrastructure adapters for modgen.
//!
//! This crate implements the ports defined in `modgen_core::application::ports`
//! and owns every piece of I/O: the template engine and its library, the
//! filesystems, configuration files and preset stores.

pub mod builtin_templates;
pub mod config_loader;
pub mod filesystem;
pub mod preset_store;
pub mod renderer;

pub use config_loader::{load_config, load_document};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use preset_store::{FsPresetStore, InMemoryPresetStore};
pub use renderer::JinjaRenderer;
