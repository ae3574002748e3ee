use serde::Serialize;

use crate::domain::entities::common::RelativePath;

/// What a generation pass produced.
///
/// `files` are relative to the module directory, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationManifest {
    pub files: Vec<RelativePath>,
    pub warnings: Vec<String>,
}

impl GenerationManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_file(&mut self, path: RelativePath) {
        self.files.push(path);
    }

    pub fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.iter().any(|f| f.to_slash_string() == path)
    }
}
