//! Where each generated file lives inside the module directory.

use crate::domain::{DomainError, Locale, ModuleConfig, RelativePath, ScreenKind};

/// Directories created before any file is written, parents first.
pub const DIRECTORIES: [&str; 11] = [
    "src",
    "src/configs",
    "src/pages/employee",
    "src/components",
    "src/utils",
    "src/hooks",
    "src/services",
    "localization",
    "__tests__",
    "__tests__/components",
    "__tests__/utils",
];

fn path(p: impl Into<std::path::PathBuf>) -> Result<RelativePath, DomainError> {
    RelativePath::try_new(p)
}

pub fn package_json() -> Result<RelativePath, DomainError> {
    path("package.json")
}

pub fn webpack_config() -> Result<RelativePath, DomainError> {
    path("webpack.config.js")
}

pub fn module_entry() -> Result<RelativePath, DomainError> {
    path("src/Module.js")
}

pub fn screen_config(kind: ScreenKind, config: &ModuleConfig) -> Result<RelativePath, DomainError> {
    path(format!(
        "src/configs/{}{}Config.js",
        config.entity.name,
        kind.title()
    ))
}

pub fn screen_page(kind: ScreenKind, config: &ModuleConfig) -> Result<RelativePath, DomainError> {
    path(format!(
        "src/pages/employee/{}{}.js",
        config.entity.name,
        kind.title()
    ))
}

pub fn util(file: &str) -> Result<RelativePath, DomainError> {
    path(format!("src/utils/{file}"))
}

pub fn service_hook(config: &ModuleConfig) -> Result<RelativePath, DomainError> {
    path(format!("src/hooks/use{}.js", config.entity.name))
}

pub fn api_endpoints() -> Result<RelativePath, DomainError> {
    path("src/services/apiEndpoints.js")
}

pub fn locale_bundle(locale: &Locale) -> Result<RelativePath, DomainError> {
    path(format!("localization/{locale}.json"))
}

pub fn localization_config() -> Result<RelativePath, DomainError> {
    path("localization/config.js")
}

pub fn readme() -> Result<RelativePath, DomainError> {
    path("README.md")
}

pub fn screen_test(kind: ScreenKind, config: &ModuleConfig) -> Result<RelativePath, DomainError> {
    path(format!(
        "__tests__/components/{}{}.test.js",
        config.entity.name,
        kind.title()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generators::test_support;

    #[test]
    fn screen_files_are_named_after_entity() {
        let config = test_support::vehicle();
        assert_eq!(
            screen_config(ScreenKind::Search, &config).unwrap().to_string(),
            "src/configs/VehicleSearchConfig.js"
        );
        assert_eq!(
            screen_page(ScreenKind::View, &config).unwrap().to_string(),
            "src/pages/employee/VehicleView.js"
        );
        assert_eq!(
            service_hook(&config).unwrap().to_string(),
            "src/hooks/useVehicle.js"
        );
    }
}
