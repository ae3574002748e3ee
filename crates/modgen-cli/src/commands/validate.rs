//! `modgen validate` - check a configuration without generating anything.

use tracing::instrument;

use modgen_adapters::load_document;
use modgen_core::prelude::*;

use crate::{
    cli::ValidateArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(config = %args.config.display()))]
pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let document = load_document(&args.config)?;
    // Errors are reported against the document as written; only a clean
    // document is re-checked with the built-in defaults layered in, which is
    // what `create` would see.
    let mut report = ConfigValidator::validate_module_config(&document);
    let request = ResolveRequest {
        explicit: Some(document),
        ..ResolveRequest::default()
    };
    let resolved = ConfigResolver::new().resolve_document(&request);
    if report.valid {
        report = ConfigValidator::validate_module_config(&resolved);
    }

    if output.is_json() {
        output.json(&report)?;
    }
    if !report.valid {
        return Err(CliError::InvalidConfig {
            path: args.config,
            errors: report.errors,
        });
    }
    if output.is_json() {
        return Ok(());
    }

    let module = ModuleConfig::from_value(&resolved).map_err(ModgenError::from)?;
    output.success(&format!("{} is valid", args.config.display()))?;
    output.bullet(&format!(
        "module {} ({}) v{}",
        module.module.name, module.module.code, module.module.version
    ))?;
    output.bullet(&format!("entity {}", module.entity.name))?;
    let screens: Vec<&str> = module.screens.enabled().map(|(kind, _)| kind.as_str()).collect();
    output.bullet(&format!("screens: {}", screens.join(", ")))?;
    output.bullet(&format!("{} field(s)", module.fields.len()))?;
    Ok(())
}
