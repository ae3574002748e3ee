//! `modgen i18n` - localization bundles for a configuration.

use tracing::instrument;

use super::{generator_suite, load_module, output_root, parse_locales, write_files};
use crate::{cli::I18nArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(config = %args.config.display()))]
pub fn execute(args: I18nArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let module = load_module(&args.config)?;
    let locales = parse_locales(&args.locales, &config)?;
    let files = generator_suite()?.localization_files(&module, &locales)?;

    output.header(&format!("Localization for {}", module.module.name))?;
    let root = output_root(args.output.as_deref(), &config);
    write_files(&files, &module, &root, &output)?;
    output.success(&format!(
        "Generated {} bundle(s) plus localization config",
        locales.len()
    ))?;
    Ok(())
}
