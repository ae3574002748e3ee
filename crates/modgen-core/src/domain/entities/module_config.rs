//! The module configuration model.
//!
//! Two shapes exist on purpose:
//!
//! - [`ModuleDocument`] mirrors the JSON document one-to-one. It is what the
//!   business rules inspect, so states like "workflow enabled without a
//!   business service" are still representable here and can be reported.
//! - [`ModuleConfig`] is the validated value every generator consumes. It is
//!   only built through [`ModuleConfig::from_value`] /
//!   [`ModuleConfig::from_document`], which run the full validator first.
//!   Defaults are resolved and the workflow is a sum type.
//!
//! Keys the model does not name are preserved in `extra` maps and flattened
//! back on serialization, so templates can still reach them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::domain::{
    error::DomainError,
    naming,
    validation::ConfigValidator,
    value_objects::{FieldType, ScreenKind},
};

pub const DEFAULT_MODULE_VERSION: &str = "1.0.0";

// ── Shared sections ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    DEFAULT_MODULE_VERSION.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityInfo {
    pub name: String,
    pub api_path: String,
    pub primary_key: String,
    pub display_field: String,
}

/// Per-screen settings. Kind-specific keys beyond the typed ones land in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenConfig {
    pub enabled: bool,
    pub roles: Option<Vec<String>>,
    pub filters: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
    pub sections: Option<Vec<String>>,
    pub business_service: Option<String>,
    pub min_search_fields: Option<u64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ScreenConfig {
    pub fn enabled_with_roles(roles: &[&str]) -> Self {
        Self {
            enabled: true,
            roles: Some(roles.iter().map(|r| r.to_string()).collect()),
            filters: None,
            types: None,
            sections: None,
            business_service: None,
            min_search_fields: None,
            extra: BTreeMap::new(),
        }
    }
}

/// The screen table, one optional slot per [`ScreenKind`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Screens {
    pub create: Option<ScreenConfig>,
    pub search: Option<ScreenConfig>,
    pub inbox: Option<ScreenConfig>,
    pub view: Option<ScreenConfig>,
    pub response: Option<ScreenConfig>,
}

impl Screens {
    pub fn get(&self, kind: ScreenKind) -> Option<&ScreenConfig> {
        match kind {
            ScreenKind::Create => self.create.as_ref(),
            ScreenKind::Search => self.search.as_ref(),
            ScreenKind::Inbox => self.inbox.as_ref(),
            ScreenKind::View => self.view.as_ref(),
            ScreenKind::Response => self.response.as_ref(),
        }
    }

    /// Configured screens in [`ScreenKind`] declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ScreenKind, &ScreenConfig)> {
        ScreenKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|cfg| (kind, cfg)))
    }

    /// Enabled screens in declaration order.
    pub fn enabled(&self) -> impl Iterator<Item = (ScreenKind, &ScreenConfig)> {
        self.iter().filter(|(_, cfg)| cfg.enabled)
    }

    pub fn is_enabled(&self, kind: ScreenKind) -> bool {
        self.get(kind).is_some_and(|cfg| cfg.enabled)
    }

    /// Section names of a screen, [`DEFAULT_SECTION`] when none are set.
    pub fn sections(&self, kind: ScreenKind) -> Vec<String> {
        self.get(kind)
            .and_then(|cfg| cfg.sections.clone())
            .filter(|sections| !sections.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_SECTION.to_string()])
    }
}

/// Section used by create and view screens that configure none.
pub const DEFAULT_SECTION: &str = "basic";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MdmsSource {
    pub master_name: String,
    pub module_name: String,
    pub locale_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    pub pattern: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub min: Option<Number>,
    pub max: Option<Number>,
    pub step: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    pub required: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub filterable: bool,
    #[serde(default)]
    pub show_in_results: bool,
    #[serde(default)]
    pub show_in_view: bool,
    #[serde(default)]
    pub show_in_inbox_results: bool,
    #[serde(default)]
    pub inbox_searchable: bool,
    #[serde(default)]
    pub inline: bool,
    pub description: Option<String>,
    pub key: Option<String>,
    pub help_text: Option<String>,
    pub validation: Option<FieldValidation>,
    pub options: Option<Vec<FieldOption>>,
    pub mdms: Option<MdmsSource>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FieldConfig {
    pub fn new(name: &str, field_type: FieldType, label: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            label: label.to_string(),
            required,
            searchable: false,
            filterable: false,
            show_in_results: false,
            show_in_view: false,
            show_in_inbox_results: false,
            inbox_searchable: false,
            inline: false,
            description: None,
            key: None,
            help_text: None,
            validation: None,
            options: None,
            mdms: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn has_choices(&self) -> bool {
        self.options.as_ref().is_some_and(|o| !o.is_empty()) || self.mdms.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub required: bool,
    #[serde(default)]
    pub roles: Vec<String>,
}

// ── Document shape ────────────────────────────────────────────────────────────

/// `workflow` exactly as written in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowDoc {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_service: Option<String>,
}

/// `i18n` exactly as written in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nDoc {
    pub prefix: Option<String>,
    pub generate_keys: Option<bool>,
}

/// A structurally valid configuration document, before business rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDocument {
    pub module: ModuleInfo,
    pub entity: EntityInfo,
    pub screens: Screens,
    pub fields: Vec<FieldConfig>,
    #[serde(default)]
    pub api: BTreeMap<String, String>,
    pub auth: Option<AuthConfig>,
    pub workflow: Option<WorkflowDoc>,
    pub i18n: Option<I18nDoc>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

// ── Validated model ───────────────────────────────────────────────────────────

/// Workflow wiring. An enabled workflow always names its business service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "WorkflowDoc")]
pub enum Workflow {
    Disabled,
    Enabled { business_service: String },
}

impl Workflow {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled { .. })
    }

    pub fn business_service(&self) -> Option<&str> {
        match self {
            Self::Enabled { business_service } => Some(business_service),
            Self::Disabled => None,
        }
    }
}

impl From<Workflow> for WorkflowDoc {
    fn from(workflow: Workflow) -> Self {
        match workflow {
            Workflow::Disabled => WorkflowDoc {
                enabled: false,
                business_service: None,
            },
            Workflow::Enabled { business_service } => WorkflowDoc {
                enabled: true,
                business_service: Some(business_service),
            },
        }
    }
}

impl TryFrom<WorkflowDoc> for Workflow {
    type Error = DomainError;

    fn try_from(doc: WorkflowDoc) -> Result<Self, Self::Error> {
        match (doc.enabled, doc.business_service) {
            (false, _) => Ok(Self::Disabled),
            (true, Some(service)) if !service.is_empty() => Ok(Self::Enabled {
                business_service: service,
            }),
            (true, _) => Err(DomainError::BusinessRuleViolation {
                errors: vec![
                    "workflow.businessService is required when workflow is enabled".into(),
                ],
            }),
        }
    }
}

/// Resolved localization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nSettings {
    pub prefix: String,
    pub generate_keys: bool,
}

/// A validated module configuration. Read-only for the whole generation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleConfig {
    pub module: ModuleInfo,
    pub entity: EntityInfo,
    pub screens: Screens,
    pub fields: Vec<FieldConfig>,
    pub api: BTreeMap<String, String>,
    pub auth: AuthConfig,
    pub workflow: Workflow,
    pub i18n: I18nSettings,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ModuleConfig {
    /// Validate a raw JSON document and build the typed configuration.
    ///
    /// Returns `SchemaViolation` or `BusinessRuleViolation` carrying every
    /// problem found.
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        let document = ConfigValidator::check(value)?;
        Self::from_document(document)
    }

    /// Build from an already-parsed document, running the business rules.
    pub fn from_document(document: ModuleDocument) -> Result<Self, DomainError> {
        let errors = ConfigValidator::validate_business_rules(&document);
        if !errors.is_empty() {
            return Err(DomainError::BusinessRuleViolation { errors });
        }

        let workflow = Workflow::try_from(document.workflow.unwrap_or_default())?;
        let i18n_doc = document.i18n.unwrap_or_default();
        let i18n = I18nSettings {
            prefix: i18n_doc
                .prefix
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| naming::default_prefix_for(&document.entity.name)),
            generate_keys: i18n_doc.generate_keys.unwrap_or(true),
        };

        Ok(Self {
            module: document.module,
            entity: document.entity,
            screens: document.screens,
            fields: document.fields,
            api: document.api,
            auth: document.auth.unwrap_or_default(),
            workflow,
            i18n,
            extra: document.extra,
        })
    }

    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field_type(&self, field_type: FieldType) -> bool {
        self.fields.iter().any(|f| f.field_type == field_type)
    }

    /// Business service for workflow-backed screens, falling back to the
    /// `<entity>-approval` convention when the workflow is disabled.
    pub fn business_service_or_default(&self) -> String {
        self.workflow
            .business_service()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}-approval", naming::to_kebab_case(&self.entity.name)))
    }

    /// Convert back into the document shape, for storing as a preset.
    ///
    /// Unset optional keys are dropped so the result validates again.
    pub fn to_document(&self) -> Value {
        strip_nulls(serde_json::to_value(self).unwrap_or(Value::Null))
    }
}

fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vehicle() -> Value {
        json!({
            "module": {"name": "Vehicle Management", "code": "vehicle-mgmt", "description": "x"},
            "entity": {"name": "Vehicle", "apiPath": "/vehicle-service/v1", "primaryKey": "vehicleId", "displayField": "registrationNumber"},
            "screens": {"search": {"enabled": true, "roles": ["ADMIN"]}},
            "fields": [{"name": "registrationNumber", "type": "text", "label": "Registration Number", "required": true, "searchable": true, "helpText": "As printed"}],
            "documents": {"enabled": true}
        })
    }

    #[test]
    fn defaults_are_resolved() {
        let config = ModuleConfig::from_value(&vehicle()).unwrap();
        assert_eq!(config.module.version, "1.0.0");
        assert_eq!(config.i18n.prefix, "VEHICLE_");
        assert!(config.i18n.generate_keys);
        assert_eq!(config.workflow, Workflow::Disabled);
        assert!(!config.auth.required);
    }

    #[test]
    fn unknown_keys_survive_round_trip() {
        let config = ModuleConfig::from_value(&vehicle()).unwrap();
        assert_eq!(config.extra.get("documents"), Some(&json!({"enabled": true})));
        let value = config.to_document();
        assert_eq!(value["documents"]["enabled"], json!(true));
        assert_eq!(value["fields"][0]["helpText"], json!("As printed"));
        assert!(value["fields"][0].get("validation").is_none());
        assert_eq!(ModuleConfig::from_value(&value).unwrap(), config);
    }

    #[test]
    fn workflow_serializes_as_document_shape() {
        let enabled = Workflow::Enabled {
            business_service: "vehicle-approval".into(),
        };
        assert_eq!(
            serde_json::to_value(&enabled).unwrap(),
            json!({"enabled": true, "businessService": "vehicle-approval"})
        );
        assert_eq!(
            serde_json::to_value(Workflow::Disabled).unwrap(),
            json!({"enabled": false})
        );
    }

    #[test]
    fn enabled_workflow_without_service_is_unrepresentable() {
        let doc = WorkflowDoc {
            enabled: true,
            business_service: None,
        };
        let err = Workflow::try_from(doc).unwrap_err();
        assert!(err.violations()[0].contains("businessService"));
    }

    #[test]
    fn screens_iterate_in_declared_order() {
        let screens = Screens {
            view: Some(ScreenConfig::enabled_with_roles(&["A"])),
            create: Some(ScreenConfig::enabled_with_roles(&["A"])),
            ..Screens::default()
        };
        let kinds: Vec<_> = screens.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![ScreenKind::Create, ScreenKind::View]);
    }

    #[test]
    fn business_service_falls_back_to_convention() {
        let config = ModuleConfig::from_value(&vehicle()).unwrap();
        assert_eq!(config.business_service_or_default(), "vehicle-approval");
    }
}
