//! Preset Service - stored configuration seeds.
//!
//! Reads through an ordered list of stores. The first store is the writable
//! one and shadows later stores on id collisions.

use std::collections::BTreeMap;

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::PresetStore},
    domain::{ModuleConfig, Preset, PresetSummary, ValidationReport},
    error::{ModgenError, ModgenResult},
};

pub struct PresetService {
    primary: Box<dyn PresetStore>,
    fallbacks: Vec<Box<dyn PresetStore>>,
}

impl PresetService {
    pub fn new(primary: Box<dyn PresetStore>) -> Self {
        Self {
            primary,
            fallbacks: Vec::new(),
        }
    }

    /// Consult `store` after every store added before it.
    pub fn with_fallback(mut self, store: Box<dyn PresetStore>) -> Self {
        self.fallbacks.push(store);
        self
    }

    fn stores(&self) -> impl Iterator<Item = &dyn PresetStore> {
        std::iter::once(self.primary.as_ref()).chain(self.fallbacks.iter().map(|s| s.as_ref()))
    }

    /// Every visible preset, sorted by id.
    pub fn list_detailed(&self) -> ModgenResult<Vec<Preset>> {
        let mut by_id: BTreeMap<String, Preset> = BTreeMap::new();
        for store in self.stores() {
            for preset in store.list()? {
                by_id.entry(preset.id.clone()).or_insert(preset);
            }
        }
        Ok(by_id.into_values().collect())
    }

    pub fn list(&self) -> ModgenResult<Vec<PresetSummary>> {
        Ok(self.list_detailed()?.iter().map(Preset::summary).collect())
    }

    #[instrument(skip(self))]
    pub fn get(&self, id: &str) -> ModgenResult<Preset> {
        for store in self.stores() {
            match store.get(id) {
                Ok(preset) => {
                    debug!(preset = %preset.id, "preset found");
                    return Ok(preset);
                }
                Err(ModgenError::Application(ApplicationError::PresetNotFound { .. })) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(ApplicationError::PresetNotFound {
            name: id.to_string(),
        }
        .into())
    }

    /// Metadata and configuration checks for a stored preset.
    pub fn validate(&self, id: &str) -> ModgenResult<ValidationReport> {
        Ok(self.get(id)?.validate())
    }

    /// Store `config` as a new preset in the primary store.
    #[instrument(skip(self, config), fields(module = %config.module.code))]
    pub fn save_from_config(
        &self,
        id: &str,
        description: &str,
        config: &ModuleConfig,
    ) -> ModgenResult<Preset> {
        let preset = Preset::from_config(id, description, config.to_document());
        self.primary.save(&preset)?;
        info!(preset = id, "preset saved");
        Ok(preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockPresetStore;
    use mockall::predicate::eq;
    use serde_json::json;

    fn preset(id: &str, name: &str) -> Preset {
        Preset {
            name: name.into(),
            ..Preset::from_config(id, "seed", json!({}))
        }
    }

    fn not_found(id: &str) -> ModgenError {
        ApplicationError::PresetNotFound { name: id.into() }.into()
    }

    #[test]
    fn primary_shadows_fallback() {
        let mut primary = MockPresetStore::new();
        primary
            .expect_list()
            .returning(|| Ok(vec![preset("basic", "Mine")]));
        let mut builtin = MockPresetStore::new();
        builtin
            .expect_list()
            .returning(|| Ok(vec![preset("workflow", "Workflow"), preset("basic", "Builtin")]));

        let service = PresetService::new(Box::new(primary)).with_fallback(Box::new(builtin));
        let listed = service.list().unwrap();
        let ids: Vec<&str> = listed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["basic", "workflow"]);
        assert_eq!(listed[0].name, "Mine");
    }

    #[test]
    fn get_falls_through_on_not_found_only() {
        let mut primary = MockPresetStore::new();
        primary
            .expect_get()
            .with(eq("workflow"))
            .returning(|id| Err(not_found(id)));
        let mut builtin = MockPresetStore::new();
        builtin
            .expect_get()
            .with(eq("workflow"))
            .returning(|id| Ok(preset(id, "Workflow")));

        let service = PresetService::new(Box::new(primary)).with_fallback(Box::new(builtin));
        assert_eq!(service.get("workflow").unwrap().name, "Workflow");
    }

    #[test]
    fn missing_everywhere_is_not_found() {
        let mut primary = MockPresetStore::new();
        primary.expect_get().returning(|id| Err(not_found(id)));
        let service = PresetService::new(Box::new(primary));
        let err = service.get("nope").unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::NotFound);
    }

    #[test]
    fn store_errors_are_not_masked() {
        let mut primary = MockPresetStore::new();
        primary
            .expect_get()
            .returning(|_| Err(ApplicationError::StoreLockError.into()));
        let mut builtin = MockPresetStore::new();
        builtin.expect_get().never();
        let service = PresetService::new(Box::new(primary)).with_fallback(Box::new(builtin));
        assert!(service.get("basic").unwrap_err().is_retryable());
    }

    #[test]
    fn save_writes_to_primary() {
        let config = crate::application::generators::test_support::vehicle();
        let mut primary = MockPresetStore::new();
        primary
            .expect_save()
            .withf(|p: &Preset| p.id == "fleet" && p.config["module"]["code"] == "vehicle-mgmt")
            .times(1)
            .returning(|_| Ok(()));
        let service = PresetService::new(Box::new(primary));
        let saved = service.save_from_config("fleet", "", &config).unwrap();
        assert_eq!(saved.description, "Custom template");
        assert!(saved.validate().valid);
    }
}
