//! `modgen utils` - the utility files.

use tracing::instrument;

use modgen_core::prelude::*;

use super::{generator_suite, load_or_synthesize, output_root, write_files};
use crate::{cli::SourceArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(args: SourceArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let module = load_or_synthesize(&args, ScreenKind::Create)?;
    let files = generator_suite()?.utils_bundle(&module)?;

    output.header(&format!("{} utilities", module.entity.name))?;
    let root = output_root(args.output.as_deref(), &config);
    write_files(&files, &module, &root, &output)?;
    output.success(&format!("Generated {} file(s)", files.len()))?;
    Ok(())
}
