use serde_json::{Value, json};
use tracing::instrument;

use super::{GeneratedFile, GeneratorSuite, layout};
use crate::application::templates::TemplateId;
use crate::domain::ModuleConfig;
use crate::error::ModgenResult;

/// `[{operation, constant, path}]` over the api map, in key order.
fn endpoints(config: &ModuleConfig) -> Value {
    config
        .api
        .iter()
        .map(|(operation, path)| {
            json!({
                "operation": operation,
                "constant": crate::domain::naming::to_constant_case(operation),
                "path": path,
            })
        })
        .collect()
}

impl GeneratorSuite {
    /// React-query style hook wrapping the module's API operations.
    pub fn service_hook(&self, config: &ModuleConfig) -> ModgenResult<String> {
        self.render(
            TemplateId::ServiceHook,
            config,
            json!({ "endpoints": endpoints(config) }),
        )
    }

    pub fn api_endpoints(&self, config: &ModuleConfig) -> ModgenResult<String> {
        self.render(
            TemplateId::ApiEndpoints,
            config,
            json!({ "endpoints": endpoints(config) }),
        )
    }

    #[instrument(skip_all, fields(module = %config.module.code))]
    pub fn services_bundle(&self, config: &ModuleConfig) -> ModgenResult<Vec<GeneratedFile>> {
        Ok(vec![
            GeneratedFile::new(layout::service_hook(config)?, self.service_hook(config)?),
            GeneratedFile::new(layout::api_endpoints()?, self.api_endpoints(config)?),
        ])
    }
}
