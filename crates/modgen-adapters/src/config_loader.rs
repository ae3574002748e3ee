//! JSON document loading for `--config` and `--api-fragment` files.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, instrument};

use modgen_core::{
    application::ApplicationError,
    domain::ModuleConfig,
    error::ModgenResult,
};

/// Read `path` as a single JSON object. The document is not validated.
#[instrument(fields(path = %path.display()))]
pub fn load_document(path: &Path) -> ModgenResult<Value> {
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => ApplicationError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => ApplicationError::InvalidDocument {
            path: path.to_path_buf(),
            reason: err.to_string(),
        },
    })?;

    let document: Value =
        serde_json::from_str(&text).map_err(|err| ApplicationError::InvalidDocument {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

    if !document.is_object() {
        return Err(ApplicationError::InvalidDocument {
            path: path.to_path_buf(),
            reason: "top-level value is not an object".into(),
        }
        .into());
    }
    debug!(bytes = text.len(), "document loaded");
    Ok(document)
}

/// Read and validate a module configuration.
pub fn load_config(path: &Path) -> ModgenResult<ModuleConfig> {
    let document = load_document(path)?;
    Ok(ModuleConfig::from_value(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use modgen_core::error::ModgenError;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_document(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(
            err,
            ModgenError::Application(ApplicationError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn malformed_json_is_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.json", "{ \"module\": ");
        let err = load_document(&path).unwrap_err();
        assert!(matches!(
            err,
            ModgenError::Application(ApplicationError::InvalidDocument { .. })
        ));
    }

    #[test]
    fn arrays_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "list.json", "[1, 2]");
        let err = load_document(&path).unwrap_err();
        assert!(err.to_string().contains("not an object"));
    }

    #[test]
    fn schema_errors_come_from_the_validator() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.json", "{}");
        let err = load_config(&path).unwrap_err();
        assert!(!err.violations().is_empty());
    }
}
