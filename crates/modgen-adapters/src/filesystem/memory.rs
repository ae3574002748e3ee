//! In-memory filesystem adapter for dry runs and tests.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use modgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ModgenResult,
};

/// In-memory filesystem. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// A file's content, if it was written.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All written files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Total size of everything written.
    pub fn total_bytes(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.files.values().map(String::len).sum())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ModgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ModgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::WriteFailure {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_include_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out/mod/src")).unwrap();
        assert!(fs.exists(Path::new("out")));
        assert!(fs.exists(Path::new("out/mod")));
        assert!(!fs.exists(Path::new("out/mod/src/x.js")));
    }

    #[test]
    fn write_needs_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("out/x.js"), "x").is_err());

        fs.create_dir_all(Path::new("out")).unwrap();
        fs.write_file(Path::new("out/x.js"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("out/x.js")).as_deref(), Some("x"));
        assert_eq!(fs.list_files(), vec![PathBuf::from("out/x.js")]);
        assert_eq!(fs.total_bytes(), 1);
    }

    #[test]
    fn clones_share_contents() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.create_dir_all(Path::new("a")).unwrap();
        assert!(other.exists(Path::new("a")));
    }
}
