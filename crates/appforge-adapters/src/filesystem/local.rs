//! Local filesystem adapter using std::fs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use appforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ForgeError, ForgeResult},
};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_to_string(&self, path: &Path) -> ForgeResult<String> {
        fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ForgeResult<()> {
        if let Some(parent) = to.parent() {
            self.create_dir_all(parent)?;
        }
        fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> ForgeResult<Vec<PathBuf>> {
        let mut copied = Vec::new();

        for entry in WalkDir::new(from).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: e.path().unwrap_or(from).to_path_buf(),
                reason: format!("Failed to walk directory: {e}"),
            })?;

            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|_| ForgeError::Internal {
                    message: format!(
                        "walkdir yielded {} outside {}",
                        entry.path().display(),
                        from.display()
                    ),
                })?;
            let dest = to.join(relative);

            if entry.file_type().is_dir() {
                self.create_dir_all(&dest)?;
            } else {
                fs::copy(entry.path(), &dest)
                    .map_err(|e| map_io_error(entry.path(), e, "copy file"))?;
                copied.push(relative.to_path_buf());
            }
        }

        Ok(copied)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn rename(&self, from: &Path, to: &Path) -> ForgeResult<()> {
        fs::rename(from, to).map_err(|e| map_io_error(to, e, "move directory"))
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ForgeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
