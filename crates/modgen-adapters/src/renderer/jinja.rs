//! minijinja-backed renderer.

use minijinja::value::{Rest, Value};
use minijinja::{AutoEscape, Environment, Error, ErrorKind, UndefinedBehavior};
use tracing::{debug, error, instrument};

use modgen_core::{
    application::{ApplicationError, Helper, HelperRegistry, TemplateId, ports::TemplateRenderer},
    error::ModgenResult,
};

use crate::builtin_templates;

/// Renders the built-in library plus ad-hoc sources.
///
/// Undefined values may be tested and iterated but not printed or
/// dereferenced, so a template that relies on a key the context lacks fails
/// loudly instead of emitting an empty string.
#[derive(Debug)]
pub struct JinjaRenderer {
    env: Environment<'static>,
}

impl JinjaRenderer {
    /// Build an engine with every helper in `helpers` available both as a
    /// function (`pascal_case(x)`) and as a filter (`x|pascal_case`).
    pub fn new(helpers: &HelperRegistry) -> ModgenResult<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for helper in helpers.iter().copied() {
            env.add_function(helper.name(), bind(helper));
            env.add_filter(helper.name(), bind(helper));
        }

        for (name, source) in builtin_templates::all() {
            env.add_template(name, source)
                .map_err(|err| template_error(name, &err))?;
        }
        debug!(helpers = helpers.len(), "template engine ready");

        Ok(Self { env })
    }
}

fn bind(helper: Helper) -> impl Fn(Rest<Value>) -> Result<String, Error> + Send + Sync + 'static {
    move |args: Rest<Value>| {
        let strings: Vec<String> = args.iter().map(as_text).collect();
        let refs: Vec<&str> = strings.iter().map(String::as_str).collect();
        helper
            .call(&refs)
            .map_err(|err| Error::new(ErrorKind::InvalidOperation, err.to_string()))
    }
}

/// Undefined and none become the empty string.
fn as_text(value: &Value) -> String {
    if value.is_undefined() || value.is_none() {
        String::new()
    } else if let Some(s) = value.as_str() {
        s.to_string()
    } else {
        value.to_string()
    }
}

fn template_error(template: &str, err: &Error) -> ApplicationError {
    error!(template, error = %err, "template failed");
    ApplicationError::Template {
        template: template.to_string(),
        reason: err.to_string(),
    }
}

impl TemplateRenderer for JinjaRenderer {
    #[instrument(skip(self, context), fields(template = %template))]
    fn render(&self, template: TemplateId, context: &serde_json::Value) -> ModgenResult<String> {
        let name = template.name();
        let compiled = self
            .env
            .get_template(name)
            .map_err(|err| template_error(name, &err))?;
        Ok(compiled
            .render(context)
            .map_err(|err| template_error(name, &err))?)
    }

    fn render_source(
        &self,
        name: &str,
        source: &str,
        context: &serde_json::Value,
    ) -> ModgenResult<String> {
        Ok(self
            .env
            .render_named_str(name, source, context)
            .map_err(|err| template_error(name, &err))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modgen_core::error::ModgenError;
    use serde_json::json;

    fn renderer() -> JinjaRenderer {
        JinjaRenderer::new(&HelperRegistry::with_naming_helpers()).unwrap()
    }

    #[test]
    fn helpers_work_as_functions_and_filters() {
        let out = renderer()
            .render_source(
                "inline",
                "{{ pascal_case(name) }} {{ name|kebab_case }} {{ localization_key(field, prefix) }}",
                &json!({"name": "vehicle type", "field": "ownerName", "prefix": "FLEET_"}),
            )
            .unwrap();
        assert_eq!(out, "VehicleType vehicle-type FLEET_OWNER_NAME");
    }

    #[test]
    fn missing_helper_argument_renders_as_empty() {
        let out = renderer()
            .render_source("inline", "[{{ camel_case(nothing) }}]", &json!({"nothing": null}))
            .unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn printing_an_undefined_value_fails() {
        let err = renderer()
            .render_source("broken", "{{ entity.name }}", &json!({}))
            .unwrap_err();
        match err {
            ModgenError::Application(ApplicationError::Template { template, .. }) => {
                assert_eq!(template, "broken")
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn syntax_errors_name_the_template() {
        let err = renderer()
            .render_source("unclosed", "{% if x %}open", &json!({"x": true}))
            .unwrap_err();
        assert!(err.to_string().contains("unclosed"));
    }

    #[test]
    fn arity_errors_surface_as_template_errors() {
        let err = renderer()
            .render_source("arity", "{{ pascal_case() }}", &json!({}))
            .unwrap_err();
        assert!(err.to_string().contains("pascal_case"));
    }

    #[test]
    fn output_is_not_escaped() {
        let out = renderer()
            .render_source("raw", "{{ v }}", &json!({"v": "<a href=\"x\">&</a>"}))
            .unwrap();
        assert_eq!(out, "<a href=\"x\">&</a>");
    }
}
