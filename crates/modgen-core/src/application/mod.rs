//! Application layer for modgen.
//!
//! This layer contains:
//! - **Generators**: one per artifact family, config in, rendered text out
//! - **Services**: use case orchestration (ModuleAssembler, ConfigResolver, PresetService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Helpers**: the registry handed to the renderer at construction
//! - **Errors**: application-specific error types
//!
//! Rules about what a configuration may say live in `crate::domain`.

pub mod error;
pub mod generators;
pub mod helpers;
pub mod ports;
pub mod services;
pub mod templates;

pub use services::{
    ConfigResolver, GenerateOptions, ModuleAssembler, Overrides, PresetService, ResolveRequest,
    Stage,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, PresetStore, TemplateRenderer};

pub use error::ApplicationError;
pub use generators::{GeneratedFile, GeneratorSuite, LocalizationBundle};
pub use helpers::{Helper, HelperRegistry};
pub use templates::TemplateId;
