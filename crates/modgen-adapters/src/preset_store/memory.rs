//! In-memory preset store with the built-in presets.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use modgen_core::{
    application::{ApplicationError, ports::PresetStore},
    domain::Preset,
    error::ModgenResult,
};
use tracing::debug;

/// `(id, template.json)` pairs compiled into the binary.
pub const BUILTIN_PRESETS: [(&str, &str); 3] = [
    ("basic", include_str!("../../presets/basic.json")),
    ("hrms", include_str!("../../presets/hrms.json")),
    ("mdms-master", include_str!("../../presets/mdms-master.json")),
];

/// Thread-safe in-memory preset store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPresetStore {
    inner: Arc<RwLock<BTreeMap<String, Preset>>>,
}

impl InMemoryPresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with the built-in presets loaded.
    pub fn with_builtin() -> ModgenResult<Self> {
        let store = Self::new();
        for (id, json) in BUILTIN_PRESETS {
            let preset = Preset::parse(id, json)?;
            store.save(&preset)?;
        }
        debug!(count = BUILTIN_PRESETS.len(), "built-in presets loaded");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PresetStore for InMemoryPresetStore {
    fn list(&self) -> ModgenResult<Vec<Preset>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.values().cloned().collect())
    }

    fn get(&self, id: &str) -> ModgenResult<Preset> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.get(id).cloned().ok_or_else(|| {
            ApplicationError::PresetNotFound {
                name: id.to_string(),
            }
            .into()
        })
    }

    fn save(&self, preset: &Preset) -> ModgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(preset.id.clone(), preset.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_presets_are_valid() {
        let store = InMemoryPresetStore::with_builtin().unwrap();
        assert_eq!(store.len(), BUILTIN_PRESETS.len());
        for preset in store.list().unwrap() {
            let report = preset.validate();
            assert!(report.valid, "{}: {:?}", preset.id, report.errors);
        }
    }

    #[test]
    fn listing_is_sorted_by_id() {
        let store = InMemoryPresetStore::with_builtin().unwrap();
        let ids: Vec<String> = store.list().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["basic", "hrms", "mdms-master"]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = InMemoryPresetStore::new();
        assert!(store.is_empty());
        let err = store.get("nope").unwrap_err();
        assert_eq!(
            err.category(),
            modgen_core::error::ErrorCategory::NotFound
        );
    }
}
