//! Stored configuration seeds ("templates" on the command line).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    error::DomainError,
    validation::{ConfigValidator, ValidationReport},
};

pub const DEFAULT_PRESET_CATEGORY: &str = "custom";

/// A named module configuration that new modules can start from.
///
/// `id` is the lookup key (the directory name for filesystem presets) and is
/// never part of the stored JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(skip)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub author: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub config: Value,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_category() -> String {
    DEFAULT_PRESET_CATEGORY.to_string()
}

/// Listing row for a preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub category: String,
    pub author: String,
}

impl Preset {
    /// Wrap a configuration document as a new preset.
    pub fn from_config(id: impl Into<String>, description: impl Into<String>, config: Value) -> Self {
        let id = id.into();
        let description = description.into();
        Self {
            name: id.clone(),
            id,
            description: if description.is_empty() {
                "Custom template".to_string()
            } else {
                description
            },
            version: default_version(),
            author: String::new(),
            category: default_category(),
            config,
        }
    }

    /// Parse a stored `template.json`.
    pub fn parse(id: &str, json: &str) -> Result<Self, DomainError> {
        let mut preset: Preset =
            serde_json::from_str(json).map_err(|e| DomainError::InvalidPreset {
                name: id.to_string(),
                reason: e.to_string(),
            })?;
        preset.id = id.to_string();
        Ok(preset)
    }

    pub fn summary(&self) -> PresetSummary {
        PresetSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            version: self.version.clone(),
            category: self.category.clone(),
            author: self.author.clone(),
        }
    }

    /// Metadata checks followed by full configuration validation.
    pub fn validate(&self) -> ValidationReport {
        let mut errors = Vec::new();
        if self.name.is_empty() {
            errors.push("preset.name: is required".to_string());
        }
        if self.description.is_empty() {
            errors.push("preset.description: is required".to_string());
        }
        if self.config.is_null() {
            errors.push("preset.config: is required".to_string());
        } else {
            errors.extend(ConfigValidator::validate_module_config(&self.config).errors);
        }
        ValidationReport::from_errors(errors)
    }
}
