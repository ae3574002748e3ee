//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use modgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ModgenError, ModgenResult},
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
///
/// Writes replace existing files. Nothing is ever removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ModgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ModgenResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ModgenError {
    ApplicationError::WriteFailure {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
