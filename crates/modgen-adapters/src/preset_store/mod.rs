//! Preset stores.
//!
//! - [`InMemoryPresetStore`]: thread-safe map, optionally seeded with the
//!   presets compiled into this crate
//! - [`FsPresetStore`]: `<dir>/<id>/template.json` on disk

mod fs;
mod memory;

pub use fs::FsPresetStore;
pub use memory::{BUILTIN_PRESETS, InMemoryPresetStore};

/// File name of a stored preset inside its directory.
pub const PRESET_FILE: &str = "template.json";
