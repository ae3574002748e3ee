pub mod common;
pub mod manifest;
pub mod module_config;
pub mod naming_context;
pub mod preset;

pub use common::RelativePath;
pub use manifest::GenerationManifest;
pub use module_config::{
    AuthConfig, EntityInfo, FieldConfig, FieldOption, FieldValidation, I18nDoc, I18nSettings,
    MdmsSource, ModuleConfig, ModuleDocument, ModuleInfo, ScreenConfig, Screens, Workflow,
    WorkflowDoc,
};
pub use naming_context::{DerivedNamingContext, FieldNaming, NameVariants};
pub use preset::{Preset, PresetSummary};
