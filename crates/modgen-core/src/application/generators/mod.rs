//! Domain generators.
//!
//! Each generator builds a data context from a validated [`ModuleConfig`]
//! and hands one template to the [`TemplateRenderer`]. Generators check no
//! rules of their own and never touch the filesystem; the assembler decides
//! where output goes.
//!
//! Every context has the same base: the configuration serialized with its
//! unset options as `null`, plus `naming` ([`DerivedNamingContext`]).
//! Generator-local values are added at the top level next to them.

mod i18n;
mod project;
mod screens;
mod services;
mod test_suite;
mod utils;

pub mod layout;

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::application::{ports::TemplateRenderer, templates::TemplateId};
use crate::domain::{DerivedNamingContext, ModuleConfig, RelativePath};
use crate::error::{Context, ModgenResult};

pub use i18n::{LocalizationBundle, translate};

/// Output of a multi-file generator: where it belongs and what it says.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: RelativePath,
    pub content: String,
}

impl GeneratedFile {
    pub fn new(path: RelativePath, content: String) -> Self {
        Self { path, content }
    }
}

/// The generator family, sharing one configured renderer.
#[derive(Clone)]
pub struct GeneratorSuite {
    renderer: Arc<dyn TemplateRenderer>,
}

impl GeneratorSuite {
    pub fn new(renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &dyn TemplateRenderer {
        self.renderer.as_ref()
    }

    fn render(
        &self,
        template: TemplateId,
        config: &ModuleConfig,
        locals: Value,
    ) -> ModgenResult<String> {
        let context = build_context(config, locals)?;
        self.renderer.render(template, &context)
    }
}

impl std::fmt::Debug for GeneratorSuite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorSuite").finish_non_exhaustive()
    }
}

/// Base template context for `config`, with `locals` merged on top.
///
/// Non-object `locals` are ignored.
pub fn build_context(config: &ModuleConfig, locals: Value) -> ModgenResult<Value> {
    let mut base = match serde_json::to_value(config).context("serializing module config")? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    base.insert(
        "naming".into(),
        serde_json::to_value(DerivedNamingContext::derive(config))
            .context("serializing naming context")?,
    );
    base.insert(
        "business_service".into(),
        Value::String(config.business_service_or_default()),
    );
    if let Value::Object(extra) = locals {
        base.extend(extra);
    }
    Ok(Value::Object(base))
}

#[cfg(test)]
pub(crate) mod test_support {
    use serde_json::{Value, json};

    use crate::domain::ModuleConfig;

    pub fn vehicle_value() -> Value {
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

    pub fn vehicle() -> ModuleConfig {
        ModuleConfig::from_value(&vehicle_value()).unwrap()
    }

    /// Vehicle with every screen, a workflow and a dropdown field.
    pub fn full_vehicle() -> ModuleConfig {
        let mut value = vehicle_value();
        value["screens"] = json!({
            "create": {"enabled": true, "roles": ["ADMIN"]},
            "search": {"enabled": true, "roles": ["ADMIN"]},
            "inbox": {"enabled": true, "roles": ["APPROVER"]},
            "view": {"enabled": true, "roles": ["ADMIN"]},
            "response": {"enabled": true, "roles": ["ADMIN"]}
        });
        value["workflow"] = json!({"enabled": true, "businessService": "vehicle-approval"});
        value["fields"].as_array_mut().unwrap().push(json!({
            "name": "fuelType", "type": "dropdown", "label": "Fuel Type", "required": false,
            "helpText": "Primary fuel",
            "options": [{"code": "PETROL", "name": "Petrol"}, {"code": "DIESEL", "name": "Diesel"}]
        }));
        ModuleConfig::from_value(&value).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn context_keeps_unset_options_as_null() {
        let config = test_support::vehicle();
        let ctx = build_context(&config, json!({"screen": "search"})).unwrap();
        assert!(ctx["screens"]["create"].is_null());
        assert!(ctx["fields"][0]["validation"].is_null());
        assert_eq!(ctx["screen"], "search");
        assert_eq!(
            ctx["naming"]["keys"]["registrationNumber"],
            "VEHICLE_REGISTRATION_NUMBER"
        );
        assert_eq!(ctx["business_service"], "vehicle-approval");
    }

    #[test]
    fn context_is_deterministic() {
        let config = test_support::full_vehicle();
        let a = serde_json::to_string(&build_context(&config, json!({})).unwrap()).unwrap();
        let b = serde_json::to_string(&build_context(&config, json!({})).unwrap()).unwrap();
        assert_eq!(a, b);
    }
}
