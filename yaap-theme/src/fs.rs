//! Filesystem seam
//!
//! Every component touches the disk through [`FileSystem`] so the generation
//! logic stays independent of where files actually land.

use crate::error::{Result, ThemeError};
use std::io::Write;
use std::path::Path;

/// Filesystem operations used by the scaffolder.
pub trait FileSystem {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Recursively create `path` and its missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Read the whole file.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the file content. The parent directory must exist.
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;
}

/// Local disk implementation with atomic writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new `LocalFs`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }
        builder
            .create(path)
            .map_err(|e| ThemeError::io(path, e))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).map_err(|e| ThemeError::io(path, e))
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let existing = std::fs::metadata(path).ok().map(|meta| meta.permissions());

        // Temp file lives next to the target so the rename stays on one filesystem
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| ThemeError::io(path, e))?;
        tmp.write_all(content).map_err(|e| ThemeError::io(path, e))?;
        tmp.as_file().sync_all().map_err(|e| ThemeError::io(path, e))?;
        tmp.persist(path).map_err(|e| ThemeError::io(path, e.error))?;

        // NamedTempFile creates 0600; a replaced file keeps its mode, a new one is 0644
        if let Some(permissions) = existing {
            std::fs::set_permissions(path, permissions).map_err(|e| ThemeError::io(path, e))?;
        } else {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o644))
                    .map_err(|e| ThemeError::io(path, e))?;
            }
        }

        Ok(())
    }
}
