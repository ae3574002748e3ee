//! Module Assembler - the generation pipeline.
//!
//! Runs a fixed, linear sequence of stages against one read-only
//! [`ModuleConfig`]:
//!
//! ```text
//! directories → package-metadata → build-config → entry-point
//!   → screen-configs → screen-components → utilities → services
//!   → localization (if i18n.generateKeys) → tests (if enabled) → docs
//! ```
//!
//! No stage reads another stage's output. The first failure aborts the
//! pipeline; files already written stay where they are.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        generators::{GeneratedFile, GeneratorSuite, layout},
        ports::Filesystem,
    },
    domain::{GenerationManifest, Locale, ModuleConfig, RelativePath, ScreenKind},
    error::ModgenResult,
};

/// Caller-controlled knobs for one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Parent of the module directory. The module lands in
    /// `<output_root>/<module.code>`.
    pub output_root: PathBuf,
    pub locales: Vec<Locale>,
    pub include_tests: bool,
    /// Write into an existing module directory.
    pub force: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
            locales: Locale::defaults(),
            include_tests: true,
            force: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Directories,
    PackageMetadata,
    BuildConfig,
    EntryPoint,
    ScreenConfigs,
    ScreenComponents,
    Utilities,
    Services,
    Localization,
    Tests,
    Docs,
}

impl Stage {
    pub const ALL: [Stage; 11] = [
        Self::Directories,
        Self::PackageMetadata,
        Self::BuildConfig,
        Self::EntryPoint,
        Self::ScreenConfigs,
        Self::ScreenComponents,
        Self::Utilities,
        Self::Services,
        Self::Localization,
        Self::Tests,
        Self::Docs,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Directories => "directories",
            Self::PackageMetadata => "package-metadata",
            Self::BuildConfig => "build-config",
            Self::EntryPoint => "entry-point",
            Self::ScreenConfigs => "screen-configs",
            Self::ScreenComponents => "screen-components",
            Self::Utilities => "utilities",
            Self::Services => "services",
            Self::Localization => "localization",
            Self::Tests => "tests",
            Self::Docs => "docs",
        }
    }

    /// The stages a pass runs for `config` under `options`, in order.
    pub fn plan(config: &ModuleConfig, options: &GenerateOptions) -> Vec<Stage> {
        Self::ALL
            .into_iter()
            .filter(|stage| match stage {
                Self::Localization => config.i18n.generate_keys,
                Self::Tests => options.include_tests,
                _ => true,
            })
            .collect()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen combinations that generate fine but are probably not intended.
pub fn dependency_warnings(config: &ModuleConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    for (kind, _) in config.screens.enabled() {
        match kind {
            ScreenKind::Search if !config.fields.iter().any(|f| f.searchable) => {
                warnings.push(
                    "screens.search: enabled but no field is marked searchable".to_string(),
                );
            }
            ScreenKind::View if config.field(&config.entity.primary_key).is_none() => {
                warnings.push(format!(
                    "screens.view: entity.primaryKey '{}' is not a declared field",
                    config.entity.primary_key
                ));
            }
            ScreenKind::Response => {
                warnings.push(
                    "screens.response: no configuration generator, only the page is generated"
                        .to_string(),
                );
            }
            _ => {}
        }
    }
    warnings
}

/// Orchestrates directory creation and the generators.
pub struct ModuleAssembler {
    generators: GeneratorSuite,
    filesystem: Box<dyn Filesystem>,
}

impl ModuleAssembler {
    pub fn new(generators: GeneratorSuite, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            generators,
            filesystem,
        }
    }

    pub fn generators(&self) -> &GeneratorSuite {
        &self.generators
    }

    /// Directory the module for `config` is written to.
    pub fn module_dir(config: &ModuleConfig, options: &GenerateOptions) -> PathBuf {
        options.output_root.join(&config.module.code)
    }

    /// Run the whole pipeline.
    #[instrument(
        skip_all,
        fields(
            module = %config.module.code,
            output = %options.output_root.display()
        )
    )]
    pub fn assemble(
        &self,
        config: &ModuleConfig,
        options: &GenerateOptions,
    ) -> ModgenResult<GenerationManifest> {
        let root = Self::module_dir(config, options);
        if self.filesystem.exists(&root) && !options.force {
            return Err(ApplicationError::ModuleExists { path: root }.into());
        }

        let mut manifest = GenerationManifest::new();
        for warning in dependency_warnings(config) {
            warn!(%warning, "screen dependency");
            manifest.warn(warning);
        }

        self.filesystem.create_dir_all(&root)?;
        for stage in Stage::plan(config, options) {
            debug!(%stage, "running stage");
            self.run_stage(stage, config, options, &root, &mut manifest)?;
        }

        info!(files = manifest.file_count(), "module generated");
        Ok(manifest)
    }

    fn run_stage(
        &self,
        stage: Stage,
        config: &ModuleConfig,
        options: &GenerateOptions,
        root: &Path,
        manifest: &mut GenerationManifest,
    ) -> ModgenResult<()> {
        let g = &self.generators;
        match stage {
            Stage::Directories => {
                for dir in layout::DIRECTORIES {
                    self.filesystem.create_dir_all(&root.join(dir))?;
                }
            }
            Stage::PackageMetadata => {
                self.write(root, manifest, layout::package_json()?, &g.package_json(config)?)?;
            }
            Stage::BuildConfig => {
                self.write(root, manifest, layout::webpack_config()?, &g.webpack_config(config)?)?;
            }
            Stage::EntryPoint => {
                self.write(root, manifest, layout::module_entry()?, &g.module_entry(config)?)?;
            }
            Stage::ScreenConfigs => {
                for (kind, _) in config.screens.enabled() {
                    if let Some(content) = g.screen_config(kind, config)? {
                        self.write(root, manifest, layout::screen_config(kind, config)?, &content)?;
                    }
                }
            }
            Stage::ScreenComponents => {
                for (kind, _) in config.screens.enabled() {
                    let content = g.screen_page(kind, config)?;
                    self.write(root, manifest, layout::screen_page(kind, config)?, &content)?;
                }
            }
            Stage::Utilities => self.write_all(root, manifest, g.utils_bundle(config)?)?,
            Stage::Services => self.write_all(root, manifest, g.services_bundle(config)?)?,
            Stage::Localization => {
                self.write_all(root, manifest, g.localization_files(config, &options.locales)?)?;
            }
            Stage::Tests => self.write_all(root, manifest, g.test_suite(config)?)?,
            Stage::Docs => {
                self.write(root, manifest, layout::readme()?, &g.readme(config)?)?;
            }
        }
        Ok(())
    }

    fn write_all(
        &self,
        root: &Path,
        manifest: &mut GenerationManifest,
        files: Vec<GeneratedFile>,
    ) -> ModgenResult<()> {
        for file in files {
            self.write(root, manifest, file.path, &file.content)?;
        }
        Ok(())
    }

    fn write(
        &self,
        root: &Path,
        manifest: &mut GenerationManifest,
        path: RelativePath,
        content: &str,
    ) -> ModgenResult<()> {
        let full = root.join(path.as_path());
        if let Some(parent) = full.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&full, content)?;
        debug!(path = %path, "wrote file");
        manifest.record_file(path);
        Ok(())
    }
}
