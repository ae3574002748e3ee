//! `modgen screen` - the configuration and page for one screen kind.

use tracing::{info, instrument};

use modgen_core::{
    application::{GeneratedFile, generators::layout},
    error::ModgenError,
    prelude::*,
};

use super::{generator_suite, load_or_synthesize, output_root, write_files};
use crate::{cli::ScreenArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(screen = ?args.kind))]
pub fn execute(args: ScreenArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let kind = ScreenKind::from(args.kind);
    let module = load_or_synthesize(&args.source, kind)?;
    let files = screen_files(&generator_suite()?, kind, &module)?;

    output.header(&format!("{} {} screen", module.entity.name, kind.title()))?;
    let root = output_root(args.source.output.as_deref(), &config);
    write_files(&files, &module, &root, &output)?;
    info!(files = files.len(), "screen generated");
    output.success(&format!("Generated {} file(s)", files.len()))?;
    Ok(())
}

fn screen_files(
    suite: &GeneratorSuite,
    kind: ScreenKind,
    module: &ModuleConfig,
) -> CliResult<Vec<GeneratedFile>> {
    let mut files = Vec::with_capacity(2);
    if let Some(content) = suite.screen_config(kind, module)? {
        let path = layout::screen_config(kind, module).map_err(ModgenError::from)?;
        files.push(GeneratedFile::new(path, content));
    }
    let path = layout::screen_page(kind, module).map_err(ModgenError::from)?;
    files.push(GeneratedFile::new(path, suite.screen_page(kind, module)?));
    Ok(files)
}
