use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The single-key persistence seam under the assessment store.
///
/// Mirrors the one-slot storage area the tool keeps its whole collection in:
/// one logical key, read and replaced wholesale. Injecting this keeps the
/// store testable without touching the filesystem.
pub trait StorageBackend {
    /// Read the stored payload, `None` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored payload.
    fn write(&mut self, contents: &str) -> Result<()>;

    /// Drop the stored payload entirely.
    fn remove(&mut self) -> Result<()>;
}

/// File-backed storage: one JSON file, written atomically so a failed write
/// never leaves a truncated collection behind.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileBackend { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create data directory at {}", parent.display())
                })?;
            }
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read data file at {}", self.path.display()))?;
        Ok(Some(contents))
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut file = AtomicWriteFile::open(&self.path).with_context(|| {
            format!("Failed to open atomic write file at {}", self.path.display())
        })?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write data file at {}", self.path.display()))?;
        file.commit()
            .with_context(|| format!("Failed to save data file at {}", self.path.display()))?;

        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).with_context(|| {
                format!("Failed to remove data file at {}", self.path.display())
            })?;
        }
        Ok(())
    }
}

/// In-memory storage for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    contents: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        self.contents = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_file_backend_read_missing_is_none() {
        let path = env::temp_dir().join("wcc_assess_test_missing_backend.json");
        let _ = fs::remove_file(&path);

        let backend = FileBackend::new(&path);
        assert!(backend.read().unwrap().is_none());
    }

    #[test]
    fn test_file_backend_write_read_remove() {
        let path = env::temp_dir().join("wcc_assess_test_backend_rw.json");
        let _ = fs::remove_file(&path);

        let mut backend = FileBackend::new(&path);
        backend.write("[]").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("[]"));

        backend.remove().unwrap();
        assert!(backend.read().unwrap().is_none());
    }

    #[test]
    fn test_file_backend_remove_missing_is_noop() {
        let path = env::temp_dir().join("wcc_assess_test_backend_rm.json");
        let _ = fs::remove_file(&path);

        let mut backend = FileBackend::new(&path);
        backend.remove().unwrap();
    }

    #[test]
    fn test_file_backend_creates_parent_dir() {
        let dir = env::temp_dir().join("wcc_assess_test_nested_dir");
        let _ = fs::remove_dir_all(&dir);

        let mut backend = FileBackend::new(dir.join("data.json"));
        backend.write("[]").unwrap();
        assert!(dir.join("data.json").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_memory_backend() {
        let mut backend = MemoryBackend::new();
        assert!(backend.read().unwrap().is_none());

        backend.write("payload").unwrap();
        assert_eq!(backend.read().unwrap().as_deref(), Some("payload"));

        backend.remove().unwrap();
        assert!(backend.read().unwrap().is_none());
    }
}
