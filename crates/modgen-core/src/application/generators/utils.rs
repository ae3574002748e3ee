use serde_json::json;
use tracing::instrument;

use super::{GeneratedFile, GeneratorSuite, layout};
use crate::application::templates::TemplateId;
use crate::domain::{FieldType, ModuleConfig};
use crate::error::ModgenResult;

impl GeneratorSuite {
    /// Form data → API request transforms.
    pub fn create_utils(&self, config: &ModuleConfig) -> ModgenResult<String> {
        self.render(
            TemplateId::CreateUtils,
            config,
            json!({
                "has_mobile_number": config.has_field_type(FieldType::MobileNumber),
                "has_multiselect": config.has_field_type(FieldType::MultiSelect),
            }),
        )
    }

    /// Search form → request criteria transforms.
    pub fn search_utils(&self, config: &ModuleConfig) -> ModgenResult<String> {
        self.render(TemplateId::SearchUtils, config, json!({}))
    }

    /// API response → view/table shapes.
    pub fn response_utils(&self, config: &ModuleConfig) -> ModgenResult<String> {
        self.render(TemplateId::ResponseUtils, config, json!({}))
    }

    pub fn utils_index(&self, config: &ModuleConfig) -> ModgenResult<String> {
        self.render(TemplateId::UtilsIndex, config, json!({}))
    }

    /// Every utility file, in write order.
    #[instrument(skip_all, fields(module = %config.module.code))]
    pub fn utils_bundle(&self, config: &ModuleConfig) -> ModgenResult<Vec<GeneratedFile>> {
        Ok(vec![
            GeneratedFile::new(layout::util("createUtils.js")?, self.create_utils(config)?),
            GeneratedFile::new(layout::util("searchUtils.js")?, self.search_utils(config)?),
            GeneratedFile::new(layout::util("responseUtils.js")?, self.response_utils(config)?),
            GeneratedFile::new(layout::util("index.js")?, self.utils_index(config)?),
        ])
    }
}
