use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    entities::module_config::{FieldConfig, ModuleDocument},
    error::DomainError,
    naming,
    schema::{self, ROOT_PATH},
    value_objects::{FieldType, ScreenKind},
};

/// Outcome of validating a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Centralized configuration validation.
///
/// Structural checks run first. Business rules only run on a document that
/// is structurally clean, so they can rely on the typed model.
///
/// Nothing here panics or returns `Err` for bad input: problems are data.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Presence, type, pattern and enum checks against the module schema.
    pub fn validate_structure(value: &Value) -> ValidationReport {
        ValidationReport::from_errors(schema::check(value))
    }

    /// Cross-field rules over a structurally valid document.
    pub fn validate_business_rules(doc: &ModuleDocument) -> Vec<String> {
        let mut errors = Vec::new();

        check_workflow(doc, &mut errors);
        for (i, field) in doc.fields.iter().enumerate() {
            check_field(i, field, &mut errors);
        }
        check_key_collisions(doc, &mut errors);
        check_reserved_keys(doc, &mut errors);
        check_duplicate_names(&doc.fields, &mut errors);
        check_screen_roles(doc, &mut errors);
        check_api_paths(&doc.api, &mut errors);
        check_auth(doc, &mut errors);
        check_i18n(doc, &mut errors);

        errors
    }

    /// Structural check, then business rules when the structure is clean.
    pub fn validate_module_config(value: &Value) -> ValidationReport {
        match Self::check(value) {
            Ok(_) => ValidationReport::from_errors(Vec::new()),
            Err(err) => ValidationReport::from_errors(err.violations().to_vec()),
        }
    }

    /// Like [`validate_module_config`](Self::validate_module_config) but
    /// hands back the parsed document on success.
    pub fn check(value: &Value) -> Result<ModuleDocument, DomainError> {
        let structural = Self::validate_structure(value);
        if !structural.valid {
            return Err(DomainError::SchemaViolation {
                errors: structural.errors,
            });
        }

        let doc: ModuleDocument =
            serde_json::from_value(value.clone()).map_err(|e| DomainError::SchemaViolation {
                errors: vec![format!("{ROOT_PATH}: {e}")],
            })?;

        let errors = Self::validate_business_rules(&doc);
        if errors.is_empty() {
            Ok(doc)
        } else {
            Err(DomainError::BusinessRuleViolation { errors })
        }
    }
}

fn workflow_enabled(doc: &ModuleDocument) -> bool {
    doc.workflow.as_ref().is_some_and(|w| w.enabled)
}

fn check_workflow(doc: &ModuleDocument, errors: &mut Vec<String>) {
    if let Some(workflow) = &doc.workflow {
        let has_service = workflow
            .business_service
            .as_deref()
            .is_some_and(|s| !s.is_empty());
        if workflow.enabled && !has_service {
            errors.push("workflow.businessService is required when workflow is enabled".into());
        }
    }

    if doc.screens.is_enabled(ScreenKind::Inbox) && !workflow_enabled(doc) {
        errors.push("screens.inbox.enabled: Workflow must be enabled to use inbox screen".into());
    }
}

fn as_f64(n: &Option<serde_json::Number>) -> Option<f64> {
    n.as_ref().and_then(serde_json::Number::as_f64)
}

fn check_field(i: usize, field: &FieldConfig, errors: &mut Vec<String>) {
    let path = format!("fields[{i}]");

    if field.field_type.requires_choices() && !field.has_choices() {
        errors.push(format!(
            "{path}.{}: dropdown/radio/multiselect fields must have either options or mdms configuration",
            field.name
        ));
    }

    let Some(validation) = &field.validation else {
        return;
    };

    if let (Some(min), Some(max)) = (as_f64(&validation.min), as_f64(&validation.max)) {
        if min > max {
            errors.push(format!(
                "{path}.{}: validation.min cannot be greater than validation.max",
                field.name
            ));
        }
    }
    if let (Some(min), Some(max)) = (validation.min_length, validation.max_length) {
        if min > max {
            errors.push(format!(
                "{path}.{}: validation.minLength cannot be greater than validation.maxLength",
                field.name
            ));
        }
    }

    match field.field_type {
        FieldType::Amount if validation.min.is_none() => {
            errors.push(format!(
                "{path}.{}: amount fields must define validation.min",
                field.name
            ));
        }
        FieldType::MobileNumber if validation.min.is_none() || validation.max.is_none() => {
            errors.push(format!(
                "{path}.{}: mobileNumber fields must define validation.min and validation.max",
                field.name
            ));
        }
        _ => {}
    }
}

fn check_key_collisions(doc: &ModuleDocument, errors: &mut Vec<String>) {
    // name -> first field that produced the segment
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for (i, field) in doc.fields.iter().enumerate() {
        let segment = naming::localization_segment(&field.name);
        match seen.get(segment.as_str()) {
            Some(first) if *first != field.name => errors.push(format!(
                "fields[{i}].name: '{}' derives the same localization key ({segment}) as '{first}'",
                field.name
            )),
            Some(_) => {}
            None => {
                seen.insert(segment, &field.name);
            }
        }
    }
}

/// Field keys must not overwrite keys the bundle writes for the module.
fn check_reserved_keys(doc: &ModuleDocument, errors: &mut Vec<String>) {
    let sections: Vec<String> = [ScreenKind::Create, ScreenKind::View]
        .into_iter()
        .filter(|kind| doc.screens.is_enabled(*kind))
        .flat_map(|kind| doc.screens.sections(kind))
        .collect();
    let reserved = naming::reserved_localization_segments(
        &doc.entity.name,
        sections.iter().map(String::as_str),
        workflow_enabled(doc),
    );

    for (i, field) in doc.fields.iter().enumerate() {
        let segment = naming::localization_segment(&field.name);
        let mut derived = vec![
            segment.clone(),
            format!("{segment}_ERROR"),
            format!("{segment}_PLACEHOLDER"),
            format!("{segment}_HELP"),
        ];
        derived.extend(
            field
                .options
                .iter()
                .flatten()
                .map(|option| format!("{segment}_{}", option.code)),
        );
        if let Some(hit) = derived.iter().find(|key| reserved.contains(key.as_str())) {
            errors.push(format!(
                "fields[{i}].name: '{}' derives the localization key {hit}, which the module bundle already defines",
                field.name
            ));
        }
    }
}

fn check_duplicate_names(fields: &[FieldConfig], errors: &mut Vec<String>) {
    let mut seen = BTreeSet::new();
    let mut duplicates: Vec<&str> = Vec::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) && !duplicates.contains(&field.name.as_str()) {
            duplicates.push(&field.name);
        }
    }
    if !duplicates.is_empty() {
        errors.push(format!(
            "Duplicate field names found: {}",
            duplicates.join(", ")
        ));
    }
}

fn check_screen_roles(doc: &ModuleDocument, errors: &mut Vec<String>) {
    for (kind, screen) in doc.screens.enabled() {
        if screen.roles.as_ref().is_some_and(Vec::is_empty) {
            errors.push(format!(
                "screens.{kind}.roles: must be a non-empty array when screen is enabled"
            ));
        }
    }
}

fn check_api_paths(api: &BTreeMap<String, String>, errors: &mut Vec<String>) {
    for (operation, path) in api {
        if !path.starts_with('/') {
            errors.push(format!("api.{operation}: API paths must start with '/'"));
        }
    }
}

fn check_auth(doc: &ModuleDocument, errors: &mut Vec<String>) {
    if let Some(auth) = &doc.auth {
        if auth.required && auth.roles.is_empty() {
            errors.push("auth.roles: must be defined when authentication is required".into());
        }
    }
}

fn check_i18n(doc: &ModuleDocument, errors: &mut Vec<String>) {
    let Some(prefix) = doc.i18n.as_ref().and_then(|i| i.prefix.as_deref()) else {
        return;
    };
    if !prefix.ends_with('_') {
        errors.push("i18n.prefix: must end with underscore (_)".into());
    }
    if !prefix.chars().all(|c| c.is_ascii_uppercase() || c == '_') {
        errors.push("i18n.prefix: must contain only uppercase letters and underscores".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vehicle() -> Value {
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

    fn push_field(doc: &mut Value, field: Value) {
        doc["fields"].as_array_mut().unwrap().push(field);
    }

    fn errors(value: &Value) -> Vec<String> {
        ConfigValidator::validate_module_config(value).errors
    }

    #[test]
    fn vehicle_config_is_valid() {
        let report = ConfigValidator::validate_module_config(&vehicle());
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn enabled_workflow_needs_business_service() {
        let mut doc = vehicle();
        doc["workflow"] = json!({"enabled": true});
        let report = ConfigValidator::validate_module_config(&doc);
        assert!(!report.valid);
        assert!(report.errors.iter().any(|e| e.contains("businessService")));
    }

    #[test]
    fn inbox_needs_workflow() {
        let mut doc = vehicle();
        doc["screens"]["inbox"] = json!({"enabled": true});
        let errs = errors(&doc);
        assert_eq!(
            errs,
            vec!["screens.inbox.enabled: Workflow must be enabled to use inbox screen"]
        );
    }

    #[test]
    fn dropdown_needs_options_or_mdms() {
        let mut doc = vehicle();
        push_field(
            &mut doc,
            json!({"name": "status", "type": "dropdown", "label": "Status", "required": false}),
        );
        assert!(errors(&doc)[0].contains("options or mdms"));

        doc["fields"][1]["options"] = json!([{"code": "ACTIVE", "name": "Active"}]);
        assert!(errors(&doc).is_empty());

        doc["fields"][1].as_object_mut().unwrap().remove("options");
        doc["fields"][1]["mdms"] = json!({"masterName": "Status", "moduleName": "common"});
        assert!(errors(&doc).is_empty());
    }

    #[test]
    fn min_greater_than_max_is_reported() {
        let mut doc = vehicle();
        doc["fields"][0]["validation"] = json!({"min": 10, "max": 2, "minLength": 5, "maxLength": 3});
        assert_eq!(
            errors(&doc),
            vec![
                "fields[0].registrationNumber: validation.min cannot be greater than validation.max",
                "fields[0].registrationNumber: validation.minLength cannot be greater than validation.maxLength",
            ]
        );
    }

    #[test]
    fn amount_and_mobile_number_bounds() {
        let mut doc = vehicle();
        push_field(
            &mut doc,
            json!({"name": "fee", "type": "amount", "label": "Fee", "required": true, "validation": {"max": 10}}),
        );
        push_field(
            &mut doc,
            json!({"name": "mobileNumber", "type": "mobileNumber", "label": "Mobile", "required": true, "validation": {"min": 6000000000u64}}),
        );
        assert_eq!(
            errors(&doc),
            vec![
                "fields[1].fee: amount fields must define validation.min",
                "fields[2].mobileNumber: mobileNumber fields must define validation.min and validation.max",
            ]
        );
    }

    #[test]
    fn duplicate_field_names_are_listed_once() {
        let mut doc = vehicle();
        let status = json!({"name": "status", "type": "text", "label": "Status", "required": false});
        doc["fields"] = json!([status.clone(), status.clone(), status, vehicle()["fields"][0].clone()]);
        let errs = errors(&doc);
        assert_eq!(errs, vec!["Duplicate field names found: status"]);
    }

    #[test]
    fn colliding_localization_keys_are_reported() {
        let mut doc = vehicle();
        push_field(
            &mut doc,
            json!({"name": "RegistrationNumber", "type": "text", "label": "Again", "required": false}),
        );
        let errs = errors(&doc);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].starts_with("fields[1].name: 'RegistrationNumber'"));
        assert!(errs[0].contains("REGISTRATION_NUMBER"));
    }

    #[test]
    fn field_keys_cannot_shadow_bundle_keys() {
        let mut doc = vehicle();
        push_field(
            &mut doc,
            json!({"name": "title", "type": "text", "label": "Title", "required": false}),
        );
        push_field(
            &mut doc,
            json!({"name": "submit", "type": "text", "label": "Submit", "required": false}),
        );
        push_field(
            &mut doc,
            json!({"name": "moduleName", "type": "text", "label": "Module", "required": false}),
        );
        assert_eq!(
            errors(&doc),
            vec![
                "fields[1].name: 'title' derives the localization key TITLE, which the module bundle already defines",
                "fields[2].name: 'submit' derives the localization key SUBMIT, which the module bundle already defines",
                "fields[3].name: 'moduleName' derives the localization key MODULE_NAME, which the module bundle already defines",
            ]
        );
    }

    #[test]
    fn section_and_workflow_keys_are_reserved_only_when_used() {
        let mut doc = vehicle();
        push_field(
            &mut doc,
            json!({"name": "comments", "type": "text", "label": "Comments", "required": false}),
        );
        push_field(
            &mut doc,
            json!({"name": "ownershipSection", "type": "text", "label": "Ownership", "required": false}),
        );
        assert!(errors(&doc).is_empty());

        doc["screens"]["create"] =
            json!({"enabled": true, "roles": ["ADMIN"], "sections": ["basic", "ownership"]});
        doc["workflow"] = json!({"enabled": true, "businessService": "vehicle-approval"});
        let errs = errors(&doc);
        assert_eq!(errs.len(), 2, "{errs:?}");
        assert!(errs[0].starts_with("fields[1].name: 'comments' derives the localization key COMMENTS"));
        assert!(errs[1].contains("OWNERSHIP_SECTION"));
    }

    #[test]
    fn enabled_screen_with_empty_roles() {
        let mut doc = vehicle();
        doc["screens"]["create"] = json!({"enabled": true, "roles": []});
        doc["screens"]["view"] = json!({"enabled": false, "roles": []});
        assert_eq!(
            errors(&doc),
            vec!["screens.create.roles: must be a non-empty array when screen is enabled"]
        );
    }

    #[test]
    fn custom_api_paths_need_leading_slash() {
        let mut doc = vehicle();
        doc["api"]["export"] = json!("vehicle/_export");
        assert_eq!(
            errors(&doc),
            vec!["api.export: API paths must start with '/'"]
        );
    }

    #[test]
    fn required_auth_needs_roles() {
        let mut doc = vehicle();
        doc["auth"] = json!({"required": true});
        assert_eq!(
            errors(&doc),
            vec!["auth.roles: must be defined when authentication is required"]
        );
    }

    #[test]
    fn business_rules_do_not_run_on_broken_structure() {
        let mut doc = vehicle();
        doc["workflow"] = json!({"enabled": true});
        doc["entity"]["apiPath"] = json!("no-slash");
        let errs = errors(&doc);
        assert_eq!(errs, vec!["entity.apiPath: must match pattern ^/"]);
    }

    #[test]
    fn i18n_prefix_rules_apply_to_typed_documents() {
        let mut doc: ModuleDocument = serde_json::from_value(vehicle()).unwrap();
        doc.i18n.as_mut().unwrap().prefix = Some("vehicle".into());
        assert_eq!(
            ConfigValidator::validate_business_rules(&doc),
            vec![
                "i18n.prefix: must end with underscore (_)",
                "i18n.prefix: must contain only uppercase letters and underscores",
            ]
        );
    }

    #[test]
    fn validation_never_panics_on_odd_shapes() {
        for value in [
            json!(null),
            json!([]),
            json!({"module": [], "fields": "x"}),
            json!({"screens": {"inbox": 3}}),
        ] {
            let report = ConfigValidator::validate_module_config(&value);
            assert!(!report.valid);
            assert!(!report.errors.is_empty());
        }
    }

    #[test]
    fn error_order_is_reproducible() {
        let mut doc = vehicle();
        doc["workflow"] = json!({"enabled": true});
        doc["screens"]["inbox"] = json!({"enabled": true, "roles": []});
        doc["api"]["view"] = json!("/ok");
        let first = errors(&doc);
        let second = errors(&doc);
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                "workflow.businessService is required when workflow is enabled",
                "screens.inbox.roles: must be a non-empty array when screen is enabled",
            ]
        );
    }
}
