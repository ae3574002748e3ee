//! `modgen templates` - list the module presets.

use serde::Serialize;

use modgen_core::domain::{Preset, PresetSummary};

use super::preset_service;
use crate::{
    cli::{ListFormat, TemplatesArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// JSON shape of `--detailed` listings: the summary plus the preset's own
/// configuration.
#[derive(Serialize)]
struct DetailedEntry<'a> {
    #[serde(flatten)]
    summary: PresetSummary,
    config: &'a serde_json::Value,
}

pub fn execute(args: TemplatesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let presets = preset_service(&config)?.list_detailed()?;

    match args.format {
        ListFormat::Json => {
            if args.detailed {
                let entries: Vec<DetailedEntry<'_>> = presets
                    .iter()
                    .map(|p| DetailedEntry {
                        summary: p.summary(),
                        config: &p.config,
                    })
                    .collect();
                output.json(&entries)?;
            } else {
                let summaries: Vec<PresetSummary> = presets.iter().map(Preset::summary).collect();
                output.json(&summaries)?;
            }
        }
        ListFormat::List => {
            for preset in &presets {
                output.print(&preset.id)?;
            }
        }
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for preset in &presets {
                output.print(&format!(
                    "  {:<16} {} @ {}",
                    preset.id, preset.name, preset.version
                ))?;
                if args.detailed {
                    output.print(&format!("      {}", preset.description))?;
                    output.print(&format!("      category: {}", preset.category))?;
                    if !preset.author.is_empty() {
                        output.print(&format!("      author:   {}", preset.author))?;
                    }
                }
            }
        }
    }

    Ok(())
}
