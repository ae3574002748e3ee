use std::str::FromStr;

use serde_json::{Value, json};
use tracing::{debug, instrument};

use super::GeneratorSuite;
use super::project::enabled_screens;
use crate::application::templates::TemplateId;
use crate::domain::{FieldConfig, ModuleConfig, ScreenKind};
use crate::error::ModgenResult;

const DEFAULT_MIN_SEARCH_FIELDS: u64 = 1;
/// The section a field is placed in on the create form: its own `section`
/// key when that names a configured section, otherwise the first one.
fn field_section<'a>(field: &FieldConfig, sections: &'a [String]) -> Option<&'a str> {
    let own = field.extra.get("section").and_then(Value::as_str);
    sections
        .iter()
        .find(|s| Some(s.as_str()) == own)
        .or_else(|| sections.first())
        .map(String::as_str)
}

/// Create-form sections with the fields each one holds. Every field appears
/// in exactly one section.
fn form_sections(config: &ModuleConfig, sections: &[String]) -> Vec<Value> {
    sections
        .iter()
        .map(|section| {
            let fields: Vec<&FieldConfig> = config
                .fields
                .iter()
                .filter(|f| field_section(f, sections) == Some(section.as_str()))
                .collect();
            json!({ "name": section, "fields": fields })
        })
        .collect()
}

fn screen_locals(kind: ScreenKind, config: &ModuleConfig) -> Value {
    let screen = config.screens.get(kind);
    let sections = config.screens.sections(kind);
    json!({
        "screen": {
            "kind": kind.as_str(),
            "title": kind.title(),
            "component": format!("{}{}", config.entity.name, kind.title()),
            "config": screen,
            "roles": screen.and_then(|s| s.roles.clone()).unwrap_or_default(),
            "min_search_fields": screen
                .and_then(|s| s.min_search_fields)
                .unwrap_or(DEFAULT_MIN_SEARCH_FIELDS),
            "form_sections": form_sections(config, &sections),
            "sections": sections,
        },
        "enabled_screens": enabled_screens(config),
    })
}

impl GeneratorSuite {
    /// Screen configuration file for `kind`.
    ///
    /// `None` for kinds without a configuration template (`response`).
    #[instrument(skip_all, fields(screen = %kind))]
    pub fn screen_config(
        &self,
        kind: ScreenKind,
        config: &ModuleConfig,
    ) -> ModgenResult<Option<String>> {
        let Some(template) = TemplateId::screen_config(kind) else {
            debug!("no configuration template for screen");
            return Ok(None);
        };
        self.render(template, config, screen_locals(kind, config))
            .map(Some)
    }

    /// Dispatch by name. Unknown names produce no output.
    pub fn screen_config_named(
        &self,
        kind: &str,
        config: &ModuleConfig,
    ) -> ModgenResult<Option<String>> {
        match ScreenKind::from_str(kind) {
            Ok(kind) => self.screen_config(kind, config),
            Err(_) => {
                debug!(kind, "skipping unknown screen kind");
                Ok(None)
            }
        }
    }

    /// The employee page component for `kind`.
    pub fn screen_page(&self, kind: ScreenKind, config: &ModuleConfig) -> ModgenResult<String> {
        self.render(
            TemplateId::ScreenPage(kind),
            config,
            screen_locals(kind, config),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generators::test_support;
    use crate::application::ports::MockTemplateRenderer;
    use mockall::predicate::eq;
    use std::sync::Arc;

    #[test]
    fn response_screen_has_no_config() {
        let renderer = MockTemplateRenderer::new();
        let suite = GeneratorSuite::new(Arc::new(renderer));
        let out = suite
            .screen_config(ScreenKind::Response, &test_support::vehicle())
            .unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn unknown_screen_name_is_skipped() {
        let suite = GeneratorSuite::new(Arc::new(MockTemplateRenderer::new()));
        let out = suite
            .screen_config_named("dashboard", &test_support::vehicle())
            .unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn search_config_uses_search_template_and_screen_locals() {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .with(eq(TemplateId::SearchConfig), mockall::predicate::always())
            .times(1)
            .returning(|_, ctx| {
                assert_eq!(ctx["screen"]["kind"], "search");
                assert_eq!(ctx["screen"]["min_search_fields"], 1);
                assert_eq!(ctx["screen"]["roles"][0], "ADMIN");
                Ok("rendered".into())
            });
        let suite = GeneratorSuite::new(Arc::new(renderer));
        let out = suite
            .screen_config_named("search", &test_support::vehicle())
            .unwrap();
        assert_eq!(out.as_deref(), Some("rendered"));
    }

    fn sectioned(fields: Value) -> ModuleConfig {
        let mut value = test_support::vehicle_value();
        value["screens"]["create"] =
            json!({"enabled": true, "sections": ["basic", "ownership"]});
        value["fields"] = fields;
        ModuleConfig::from_value(&value).unwrap()
    }

    #[test]
    fn fields_land_in_one_section_each() {
        let config = sectioned(json!([
            {"name": "registrationNumber", "type": "text", "label": "Registration Number", "required": true},
            {"name": "ownerName", "type": "text", "label": "Owner Name", "required": true, "section": "ownership"},
            {"name": "colour", "type": "text", "label": "Colour", "required": false, "section": "paint"}
        ]));
        let locals = screen_locals(ScreenKind::Create, &config);
        let names = |i: usize| -> Vec<String> {
            locals["screen"]["form_sections"][i]["fields"]
                .as_array()
                .unwrap()
                .iter()
                .map(|f| f["name"].as_str().unwrap().to_string())
                .collect()
        };

        assert_eq!(locals["screen"]["form_sections"][0]["name"], "basic");
        assert_eq!(names(0), ["registrationNumber", "colour"]);
        assert_eq!(locals["screen"]["form_sections"][1]["name"], "ownership");
        assert_eq!(names(1), ["ownerName"]);
    }

    #[test]
    fn unsectioned_screens_default_to_basic() {
        let config = test_support::vehicle();
        assert_eq!(config.screens.sections(ScreenKind::Create), ["basic"]);
        let locals = screen_locals(ScreenKind::Create, &config);
        assert_eq!(locals["screen"]["form_sections"][0]["fields"][0]["name"], "registrationNumber");
    }
}
