//! Command handlers.
//!
//! Each handler translates its arguments into core calls and reports the
//! result through the [`OutputManager`]. Adapter wiring shared by several
//! commands lives here.

pub mod completions;
pub mod create;
pub mod i18n;
pub mod init;
pub mod screen;
pub mod templates;
pub mod utils;
pub mod validate;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use modgen_adapters::{
    FsPresetStore, InMemoryPresetStore, JinjaRenderer, LocalFilesystem, load_document,
};
use modgen_core::{
    application::GeneratedFile,
    error::ModgenError,
    prelude::*,
};

use crate::{
    cli::SourceArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Generators backed by the template engine with the naming helpers.
pub(crate) fn generator_suite() -> CliResult<GeneratorSuite> {
    let renderer = JinjaRenderer::new(&HelperRegistry::with_naming_helpers())?;
    Ok(GeneratorSuite::new(Arc::new(renderer)))
}

/// Presets from the settings' preset directory, then the built-in ones.
pub(crate) fn preset_service(config: &AppConfig) -> CliResult<PresetService> {
    let builtin = InMemoryPresetStore::with_builtin()?;
    let service = match &config.defaults.preset_dir {
        Some(dir) => {
            debug!(dir = %dir.display(), "using preset directory");
            PresetService::new(Box::new(FsPresetStore::new(dir.clone())))
                .with_fallback(Box::new(builtin))
        }
        None => PresetService::new(Box::new(builtin)),
    };
    Ok(service)
}

/// Parse `--locales`, falling back to the settings.
pub(crate) fn parse_locales(requested: &[String], config: &AppConfig) -> CliResult<Vec<Locale>> {
    let codes = if requested.is_empty() {
        &config.defaults.locales
    } else {
        requested
    };
    if codes.is_empty() {
        return Ok(Locale::defaults());
    }
    codes
        .iter()
        .map(|code| Locale::new(code.trim()).map_err(|e| CliError::Core(e.into())))
        .collect()
}

/// The configuration named by `--config`, or one synthesized for
/// `--entity` with `kind` enabled.
pub(crate) fn load_or_synthesize(source: &SourceArgs, kind: ScreenKind) -> CliResult<ModuleConfig> {
    match (&source.config, &source.entity) {
        (Some(path), _) => load_module(path),
        (None, Some(entity)) => {
            let document = ConfigResolver::synthesize(entity, kind);
            Ok(ModuleConfig::from_value(&document).map_err(ModgenError::from)?)
        }
        (None, None) => Err(CliError::InvalidInput {
            message: "either --entity or --config is required".into(),
        }),
    }
}

/// Load and validate a configuration file through the resolver, so that
/// built-in defaults apply the same way they do for `create`.
pub(crate) fn load_module(path: &Path) -> CliResult<ModuleConfig> {
    let request = ResolveRequest {
        explicit: Some(load_document(path)?),
        ..ResolveRequest::default()
    };
    Ok(ConfigResolver::new().resolve(&request)?)
}

pub(crate) fn output_root(requested: Option<&Path>, config: &AppConfig) -> PathBuf {
    requested
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.defaults.output_dir.clone())
}

/// Write generator output under `<root>/<module.code>` and list each file.
pub(crate) fn write_files(
    files: &[GeneratedFile],
    module: &ModuleConfig,
    root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let fs = LocalFilesystem::new();
    let module_dir = root.join(&module.module.code);
    for file in files {
        let path = module_dir.join(file.path.as_path());
        if let Some(parent) = path.parent() {
            fs.create_dir_all(parent)?;
        }
        fs.write_file(&path, &file.content)?;
        output.bullet(&path.display().to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_locales_win_over_settings() {
        let config = AppConfig::default();
        let locales = parse_locales(&["pa_IN".to_string()], &config).unwrap();
        assert_eq!(locales, vec![Locale::new("pa_IN").unwrap()]);
    }

    #[test]
    fn settings_locales_are_the_fallback() {
        let locales = parse_locales(&[], &AppConfig::default()).unwrap();
        assert_eq!(locales, Locale::defaults());
    }

    #[test]
    fn bad_locale_is_a_user_error() {
        let err = parse_locales(&["en IN".to_string()], &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn entity_source_synthesizes_a_module() {
        let source = SourceArgs {
            entity: Some("Vehicle".into()),
            config: None,
            output: None,
        };
        let module = load_or_synthesize(&source, ScreenKind::Search).unwrap();
        assert_eq!(module.module.code, "vehicle-mgmt");
        assert!(module.screens.is_enabled(ScreenKind::Search));
    }
}
