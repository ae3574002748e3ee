use serde_json::{Value, json};
use tracing::instrument;

use super::GeneratorSuite;
use crate::application::templates::TemplateId;
use crate::domain::ModuleConfig;
use crate::error::ModgenResult;

/// `{kind, title, component, route}` for every enabled screen, in order.
pub(super) fn enabled_screens(config: &ModuleConfig) -> Value {
    let screens: Vec<Value> = config
        .screens
        .enabled()
        .map(|(kind, screen)| {
            json!({
                "kind": kind.as_str(),
                "title": kind.title(),
                "component": format!("{}{}", config.entity.name, kind.title()),
                "route": kind.as_str(),
                "has_config": kind.has_config(),
                "roles": screen.roles.clone().unwrap_or_default(),
            })
        })
        .collect();
    Value::Array(screens)
}

impl GeneratorSuite {
    pub fn package_json(&self, config: &ModuleConfig) -> ModgenResult<String> {
        self.render(TemplateId::PackageJson, config, json!({}))
    }

    pub fn webpack_config(&self, config: &ModuleConfig) -> ModgenResult<String> {
        self.render(TemplateId::WebpackConfig, config, json!({}))
    }

    /// `src/Module.js`: component registry and routes for enabled screens.
    pub fn module_entry(&self, config: &ModuleConfig) -> ModgenResult<String> {
        self.render(
            TemplateId::ModuleEntry,
            config,
            json!({ "enabled_screens": enabled_screens(config) }),
        )
    }

    #[instrument(skip_all, fields(module = %config.module.code))]
    pub fn readme(&self, config: &ModuleConfig) -> ModgenResult<String> {
        self.render(
            TemplateId::Readme,
            config,
            json!({ "enabled_screens": enabled_screens(config) }),
        )
    }
}
