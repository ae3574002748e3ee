//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

use modgen_core::domain::ScreenKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modgen",
    bin_name = "modgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "DIGIT UI module generator",
    long_about = "modgen turns a JSON module configuration into a complete DIGIT UI \
                  module: screen configs, pages, utilities, services, localization \
                  bundles and tests.",
    after_help = "EXAMPLES:\n\
        \x20 modgen create --config vehicle.json\n\
        \x20 modgen create --entity Vehicle --screens create,search\n\
        \x20 modgen validate --config vehicle.json\n\
        \x20 modgen templates --detailed",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a complete module.
    #[command(
        visible_alias = "new",
        about = "Generate a complete module",
        after_help = "EXAMPLES:\n\
            \x20 modgen create --config vehicle.json --output ./packages\n\
            \x20 modgen create --template hrms --code hr-onboarding\n\
            \x20 modgen create --entity Vehicle --screens create,search --dry-run"
    )]
    Create(CreateArgs),

    /// Check a configuration without generating anything.
    #[command(
        about = "Validate a module configuration",
        long_about = "Validate a module configuration.\n\n\
            Errors are reported against the document as written, so a missing \
            section is reported as missing (`module: is required`). A clean \
            document is then checked again with the built-in defaults applied, \
            exactly as `create` would resolve it.",
        after_help = "EXAMPLES:\n\
            \x20 modgen validate --config vehicle.json\n\
            \x20 modgen validate -c vehicle.json --output-format json"
    )]
    Validate(ValidateArgs),

    /// Generate the config and page for one screen.
    #[command(
        about = "Generate one screen",
        after_help = "EXAMPLES:\n\
            \x20 modgen screen search --entity Vehicle\n\
            \x20 modgen screen inbox --config vehicle.json --output ./packages"
    )]
    Screen(ScreenArgs),

    /// Generate the utility files.
    #[command(about = "Generate utility files")]
    Utils(SourceArgs),

    /// Generate localization bundles.
    #[command(
        about = "Generate localization bundles",
        after_help = "EXAMPLES:\n\
            \x20 modgen i18n --config vehicle.json --locales en_IN,hi_IN,pa_IN"
    )]
    I18n(I18nArgs),

    /// List module presets.
    #[command(
        visible_alias = "list",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 modgen templates\n\
            \x20 modgen templates --detailed\n\
            \x20 modgen templates --format json"
    )]
    Templates(TemplatesArgs),

    /// Write a default settings file.
    #[command(
        about = "Initialise settings",
        after_help = "EXAMPLES:\n\
            \x20 modgen init\n\
            \x20 modgen init --path ./modgen.toml --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modgen completions bash > ~/.local/share/bash-completion/completions/modgen\n\
            \x20 modgen completions zsh  > ~/.zfunc/_modgen\n\
            \x20 modgen completions fish > ~/.config/fish/completions/modgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `modgen create`.
#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .multiple(true)
        .args(["config", "template", "entity"])
))]
pub struct CreateArgs {
    /// Module configuration document.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Preset to start from.
    #[arg(short = 't', long = "template", value_name = "PRESET")]
    pub template: Option<String>,

    /// Configuration fragment produced by an API-spec importer.
    #[arg(long = "api-fragment", value_name = "FILE")]
    pub api_fragment: Option<PathBuf>,

    /// Module display name.
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,

    /// Module code; also the output directory name.
    #[arg(long = "code")]
    pub code: Option<String>,

    /// Entity name, PascalCase.
    #[arg(short = 'e', long = "entity")]
    pub entity: Option<String>,

    /// Enable exactly these screens.
    #[arg(long = "screens", value_enum, value_delimiter = ',', num_args = 1..)]
    pub screens: Vec<ScreenChoice>,

    /// Parent directory of the module.
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Locales to generate bundles for.
    #[arg(long = "locales", value_delimiter = ',', num_args = 1..)]
    pub locales: Vec<String>,

    /// Do not generate the jest suite.
    #[arg(long = "skip-tests")]
    pub skip_tests: bool,

    /// Write into an existing module directory.
    #[arg(long = "force", help = "Overwrite files in an existing module directory")]
    pub force: bool,

    /// Run the pipeline in memory and report what would be written.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── validate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Module configuration document.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: PathBuf,
}

// ── screen / utils / i18n ─────────────────────────────────────────────────────

/// Where a single-artifact command gets its configuration from.
#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .args(["entity", "config"])
))]
pub struct SourceArgs {
    /// Synthesize a configuration for this entity.
    #[arg(short = 'e', long = "entity")]
    pub entity: Option<String>,

    /// Module configuration document.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Parent directory of the module.
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ScreenArgs {
    /// Screen kind.
    #[arg(value_enum)]
    pub kind: ScreenChoice,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args)]
pub struct I18nArgs {
    /// Module configuration document.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: PathBuf,

    /// Locales to generate bundles for.
    #[arg(long = "locales", value_delimiter = ',', num_args = 1..)]
    pub locales: Vec<String>,

    /// Parent directory of the module.
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,
}

// ── templates ─────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Include description, category and author.
    #[arg(long = "detailed")]
    pub detailed: bool,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `templates` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the settings. Defaults to the platform config directory.
    #[arg(long = "path", value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing settings file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing settings")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ScreenChoice {
    Create,
    Search,
    Inbox,
    View,
    Response,
}

impl From<ScreenChoice> for ScreenKind {
    fn from(choice: ScreenChoice) -> Self {
        match choice {
            ScreenChoice::Create => ScreenKind::Create,
            ScreenChoice::Search => ScreenKind::Search,
            ScreenChoice::Inbox => ScreenKind::Inbox,
            ScreenChoice::View => ScreenKind::View,
            ScreenChoice::Response => ScreenKind::Response,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
