//! Filesystem preset store.
//!
//! ```text
//! presets/
//! ├── hrms/
//! │   └── template.json
//! └── my-team/
//!     └── template.json
//! ```
//!
//! The directory name is the preset id. Directories whose `template.json`
//! is missing or unreadable are skipped with a warning when listing.

use std::{
    fs,
    path::{Path, PathBuf},
};

use modgen_core::{
    application::{ApplicationError, ports::PresetStore},
    domain::Preset,
    error::{Context, ModgenResult},
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use super::PRESET_FILE;

#[derive(Debug, Clone)]
pub struct FsPresetStore {
    root: PathBuf,
}

impl FsPresetStore {
    /// A store rooted at `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file_for(&self, id: &str) -> PathBuf {
        self.root.join(id).join(PRESET_FILE)
    }

    fn load(&self, id: &str, path: &Path) -> ModgenResult<Preset> {
        let json = fs::read_to_string(path).map_err(|e| ApplicationError::InvalidDocument {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Preset::parse(id, &json)?)
    }
}

impl PresetStore for FsPresetStore {
    #[instrument(skip(self), fields(dir = %self.root.display()))]
    fn list(&self) -> ModgenResult<Vec<Preset>> {
        if !self.root.is_dir() {
            debug!("preset directory absent");
            return Ok(Vec::new());
        }

        let mut presets = Vec::new();
        let entries = WalkDir::new(&self.root)
            .min_depth(2)
            .max_depth(2)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file() && e.file_name() == PRESET_FILE);

        for entry in entries {
            let Some(id) = entry
                .path()
                .parent()
                .and_then(Path::file_name)
                .and_then(|n| n.to_str())
            else {
                continue;
            };
            match self.load(id, entry.path()) {
                Ok(preset) => presets.push(preset),
                Err(e) => warn!(preset = id, error = %e, "skipping unreadable preset"),
            }
        }
        Ok(presets)
    }

    fn get(&self, id: &str) -> ModgenResult<Preset> {
        let path = self.file_for(id);
        if !path.is_file() {
            return Err(ApplicationError::PresetNotFound {
                name: id.to_string(),
            }
            .into());
        }
        self.load(id, &path)
    }

    #[instrument(skip(self, preset), fields(preset = %preset.id))]
    fn save(&self, preset: &Preset) -> ModgenResult<()> {
        let path = self.file_for(&preset.id);
        let write_failure = |e: std::io::Error| ApplicationError::WriteFailure {
            path: path.clone(),
            reason: e.to_string(),
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(write_failure)?;
        }
        let json = serde_json::to_string_pretty(preset).context("serializing preset")?;
        fs::write(&path, json + "\n").map_err(write_failure)?;
        debug!(path = %path.display(), "preset written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_root_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsPresetStore::new(dir.path().join("absent"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn save_then_get_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsPresetStore::new(dir.path());
        let preset = Preset::from_config("fleet", "Fleet seed", json!({"module": {"code": "fleet"}}));
        store.save(&preset).unwrap();

        assert!(dir.path().join("fleet/template.json").is_file());
        let loaded = store.get("fleet").unwrap();
        assert_eq!(loaded, preset);
        assert_eq!(store.list().unwrap(), vec![preset]);
    }

    #[test]
    fn broken_presets_are_skipped_when_listing() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("broken")).unwrap();
        fs::write(dir.path().join("broken/template.json"), "{").unwrap();
        let store = FsPresetStore::new(dir.path());
        assert!(store.list().unwrap().is_empty());
        assert!(store.get("broken").is_err());
        assert_eq!(
            store.get("other").unwrap_err().category(),
            modgen_core::error::ErrorCategory::NotFound
        );
    }
}
