//! `modgen init` - write the default settings file.

use std::path::PathBuf;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let settings_path: PathBuf = args.path.unwrap_or_else(AppConfig::settings_path);

    if settings_path.exists() && !args.force {
        output.warning(&format!(
            "Settings already exist at {}  (use --force to overwrite)",
            settings_path.display(),
        ))?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default settings: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = settings_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create settings directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(&settings_path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write settings to '{}'", settings_path.display()),
        source: e,
    })?;

    output.success(&format!("Settings created at {}", settings_path.display()))?;
    Ok(())
}
