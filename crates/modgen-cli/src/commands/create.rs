//! `modgen create` - generate a complete module.
//!
//! Layers, lowest first: API fragment, preset, configuration file, flags.
//! With only flags, a configuration is synthesized for `--entity`.

use tracing::{debug, info, instrument};

use modgen_adapters::{LocalFilesystem, MemoryFilesystem, load_document};
use modgen_core::{application::ApplicationError, error::ModgenError, prelude::*};

use super::{generator_suite, output_root, parse_locales, preset_service};
use crate::{
    cli::CreateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(&args, &config)?;
    let module = ConfigResolver::new().resolve(&request)?;
    debug!(module = %module.module.code, entity = %module.entity.name, "configuration resolved");

    let options = GenerateOptions {
        output_root: output_root(args.output.as_deref(), &config),
        locales: parse_locales(&args.locales, &config)?,
        include_tests: config.defaults.include_tests && !args.skip_tests,
        force: args.force,
    };
    let module_dir = ModuleAssembler::module_dir(&module, &options);
    // The in-memory filesystem cannot see what is already on disk.
    if args.dry_run && !args.force && module_dir.exists() {
        return Err(ModgenError::from(ApplicationError::ModuleExists { path: module_dir }).into());
    }

    let filesystem: Box<dyn Filesystem> = if args.dry_run {
        Box::new(MemoryFilesystem::new())
    } else {
        Box::new(LocalFilesystem::new())
    };
    let assembler = ModuleAssembler::new(generator_suite()?, filesystem);

    let spinner = output.spinner(&format!("Generating {}...", module.module.name));
    let result = assembler.assemble(&module, &options);
    spinner.finish_and_clear();
    let manifest = result?;
    info!(files = manifest.file_count(), "create finished");

    if output.is_json() {
        output.json(&manifest)?;
        return Ok(());
    }

    if args.dry_run {
        output.header(&format!("Dry run: would create {}", module_dir.display()))?;
    } else {
        output.success(&format!(
            "Module '{}' created at {}",
            module.module.name,
            module_dir.display()
        ))?;
    }
    for file in &manifest.files {
        output.bullet(&file.to_slash_string())?;
    }
    for warning in &manifest.warnings {
        output.warning(warning)?;
    }
    output.info(&format!("{} file(s)", manifest.file_count()))?;

    Ok(())
}

fn build_request(args: &CreateArgs, config: &AppConfig) -> CliResult<ResolveRequest> {
    let api_fragment = args.api_fragment.as_deref().map(load_document).transpose()?;
    let explicit = args.config.as_deref().map(load_document).transpose()?;

    let preset = match (&args.template, &explicit, &args.entity) {
        (Some(id), _, _) => Some(preset_service(config)?.get(id)?.config),
        // Flags alone: start from a synthesized configuration.
        (None, None, Some(entity)) => {
            let kind = args
                .screens
                .first()
                .copied()
                .map(ScreenKind::from)
                .unwrap_or(ScreenKind::Search);
            Some(ConfigResolver::synthesize(entity, kind))
        }
        (None, None, None) => {
            return Err(CliError::InvalidInput {
                message: "one of --config, --template or --entity is required".into(),
            });
        }
        (None, Some(_), _) => None,
    };

    let screens = if args.screens.is_empty() {
        None
    } else {
        Some(args.screens.iter().copied().map(ScreenKind::from).collect())
    };

    Ok(ResolveRequest {
        api_fragment,
        preset,
        explicit,
        overrides: Overrides {
            name: args.name.clone(),
            code: args.code.clone(),
            entity: args.entity.clone(),
            screens,
        },
    })
}
