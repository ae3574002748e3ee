use serde_json::json;
use tracing::instrument;

use super::{GeneratedFile, GeneratorSuite, layout};
use crate::application::templates::TemplateId;
use crate::domain::{DomainError, ModuleConfig, RelativePath};
use crate::error::ModgenResult;

fn fixed(path: &str) -> Result<RelativePath, DomainError> {
    RelativePath::try_new(path)
}

impl GeneratorSuite {
    /// Jest setup, mocks, one component test per enabled screen, utility
    /// and API tests, and a workflow test when the workflow is enabled.
    #[instrument(skip_all, fields(module = %config.module.code))]
    pub fn test_suite(&self, config: &ModuleConfig) -> ModgenResult<Vec<GeneratedFile>> {
        let mut files = vec![
            GeneratedFile::new(
                fixed("__tests__/setup.js")?,
                self.render(TemplateId::TestSetup, config, json!({}))?,
            ),
            GeneratedFile::new(
                fixed("__tests__/mocks/mockData.js")?,
                self.render(TemplateId::MockData, config, json!({}))?,
            ),
            GeneratedFile::new(
                fixed("jest.config.js")?,
                self.render(TemplateId::JestConfig, config, json!({}))?,
            ),
        ];

        for (kind, _) in config.screens.enabled() {
            let locals = json!({
                "screen": {
                    "kind": kind.as_str(),
                    "title": kind.title(),
                    "component": format!("{}{}", config.entity.name, kind.title()),
                }
            });
            files.push(GeneratedFile::new(
                layout::screen_test(kind, config)?,
                self.render(TemplateId::ScreenTest, config, locals)?,
            ));
        }

        files.push(GeneratedFile::new(
            fixed("__tests__/utils/createUtils.test.js")?,
            self.render(TemplateId::CreateUtilsTest, config, json!({}))?,
        ));
        files.push(GeneratedFile::new(
            fixed("__tests__/integration/api.test.js")?,
            self.render(TemplateId::ApiTest, config, json!({}))?,
        ));
        if config.workflow.is_enabled() {
            files.push(GeneratedFile::new(
                fixed("__tests__/integration/workflow.test.js")?,
                self.render(TemplateId::WorkflowTest, config, json!({}))?,
            ));
        }
        Ok(files)
    }
}
