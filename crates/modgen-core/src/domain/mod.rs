//! Core domain layer for modgen.
//!
//! Pure logic: naming rules, the configuration model, its schema and the
//! validator. No filesystem, no templating, no logging subscriber. Those
//! live behind the ports in the application layer.
//!
//! ## Invariants
//!
//! - **Deterministic**: the same document always yields the same errors in
//!   the same order, and the same derived names.
//! - **Read-only config**: a [`ModuleConfig`] is never mutated after it has
//!   been validated.
//! - **One naming implementation**: everything derives case forms and
//!   localization keys through [`naming`].
pub mod entities;
pub mod error;
pub mod naming;
pub mod schema;
pub mod validation;
pub mod value_objects;

pub use entities::{
    AuthConfig, DerivedNamingContext, EntityInfo, FieldConfig, FieldNaming, FieldOption,
    FieldValidation, GenerationManifest, I18nSettings, MdmsSource, ModuleConfig, ModuleDocument,
    ModuleInfo, NameVariants, Preset, PresetSummary, RelativePath, ScreenConfig, Screens,
    Workflow,
};
pub use error::{DomainError, ErrorCategory};
pub use validation::{ConfigValidator, ValidationReport};
pub use value_objects::{FieldType, Locale, ScreenKind};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ========================================================================
    // End-to-end validation of the reference configuration
    // ========================================================================

    fn vehicle() -> serde_json::Value {
        json!({
            "module": {"name": "Vehicle Management", "code": "vehicle-mgmt", "description": "x", "version": "1.0.0"},
            "entity": {"name": "Vehicle", "apiPath": "/vehicle-service/v1", "primaryKey": "vehicleId", "displayField": "registrationNumber"},
            "screens": {"search": {"enabled": true, "roles": ["ADMIN"]}},
            "fields": [{"name": "registrationNumber", "type": "text", "label": "Registration Number", "required": true, "searchable": true}],
            "api": {"search": "/vehicle/_search"},
            "auth": {"required": true, "roles": ["ADMIN"]},
            "workflow": {"enabled": false},
            "i18n": {"prefix": "VEHICLE_", "generateKeys": true}
        })
    }

    #[test]
    fn validated_config_derives_expected_key() {
        let config = ModuleConfig::from_value(&vehicle()).unwrap();
        let naming = DerivedNamingContext::derive(&config);
        assert_eq!(
            naming.key("registrationNumber"),
            Some("VEHICLE_REGISTRATION_NUMBER")
        );
    }

    #[test]
    fn from_value_and_report_agree() {
        let mut doc = vehicle();
        doc["fields"][0]["type"] = json!("dropdown");
        let report = ConfigValidator::validate_module_config(&doc);
        let err = ModuleConfig::from_value(&doc).unwrap_err();
        assert_eq!(report.errors, err.violations());
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
