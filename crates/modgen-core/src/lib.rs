//! modgen core - hexagonal architecture for the module generator.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             modgen-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │ (ConfigResolver → ModuleAssembler)      │
//! │   GeneratorSuite renders each artifact  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, TemplateRenderer, Presets) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      modgen-adapters (Infrastructure)   │
//! │ (JinjaRenderer, LocalFilesystem, ...)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Domain Layer (Pure Logic)      │
//! │ (ModuleConfig, schema, naming, rules)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modgen_core::prelude::*;
//!
//! let config = ModuleConfig::from_value(&document)?;
//! let generators = GeneratorSuite::new(renderer);
//! let assembler = ModuleAssembler::new(generators, filesystem);
//! let manifest = assembler.assemble(&config, &GenerateOptions::default())?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfigResolver, GenerateOptions, GeneratorSuite, HelperRegistry, ModuleAssembler,
        Overrides, PresetService, ResolveRequest, TemplateId,
        ports::{Filesystem, PresetStore, TemplateRenderer},
    };
    pub use crate::domain::{
        ConfigValidator, DerivedNamingContext, GenerationManifest, Locale, ModuleConfig, Preset,
        ScreenKind, ValidationReport,
    };
    pub use crate::error::{ModgenError, ModgenResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
