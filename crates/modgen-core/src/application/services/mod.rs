//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a module" or "resolve a config".

pub mod config_resolver;
pub mod module_assembler;
pub mod preset_service;

pub use config_resolver::{ConfigResolver, Overrides, ResolveRequest};
pub use module_assembler::{GenerateOptions, ModuleAssembler, Stage, dependency_warnings};
pub use preset_service::PresetService;
