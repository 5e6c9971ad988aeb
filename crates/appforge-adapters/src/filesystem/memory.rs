//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use appforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ForgeResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// `ProjectAssembler`.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn with_file(self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.write() {
            let path = path.as_ref();
            if let Some(parent) = path.parent() {
                inner.add_dir_all(parent);
            }
            inner.files.insert(path.to_path_buf(), content.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// List all directories, sorted.
    pub fn list_dirs(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn read(&self) -> ForgeResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?)
    }

    fn write(&self) -> ForgeResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?)
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        self.write()?.add_dir_all(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        let mut inner = self.write()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ForgeResult<String> {
        self.read()?.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            }
            .into()
        })
    }

    fn copy_file(&self, from: &Path, to: &Path) -> ForgeResult<()> {
        let content = self.read_to_string(from)?;
        let mut inner = self.write()?;
        if let Some(parent) = to.parent() {
            inner.add_dir_all(parent);
        }
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn copy_dir_all(&self, from: &Path, to: &Path) -> ForgeResult<Vec<PathBuf>> {
        let mut inner = self.write()?;

        let files: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(path, content)| {
                path.strip_prefix(from)
                    .ok()
                    .map(|relative| (relative.to_path_buf(), content.clone()))
            })
            .collect();
        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|dir| dir.strip_prefix(from).ok().map(|r| to.join(r)))
            .collect();

        for dir in dirs {
            inner.add_dir_all(&dir);
        }
        for (relative, content) in &files {
            inner.files.insert(to.join(relative), content.clone());
        }

        Ok(files.into_iter().map(|(relative, _)| relative).collect())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn rename(&self, from: &Path, to: &Path) -> ForgeResult<()> {
        let mut inner = self.write()?;

        if inner.files.contains_key(to) || inner.directories.contains(to) {
            return Err(ApplicationError::FilesystemError {
                path: to.to_path_buf(),
                reason: "Destination already exists".into(),
            }
            .into());
        }

        let moved_files: Vec<PathBuf> = inner
            .files
            .keys()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for path in moved_files {
            if let (Some(content), Ok(relative)) =
                (inner.files.remove(&path), path.strip_prefix(from))
            {
                inner.files.insert(to.join(relative), content);
            }
        }

        let moved_dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter(|p| p.starts_with(from))
            .cloned()
            .collect();
        for dir in moved_dirs {
            inner.directories.remove(&dir);
            if let Ok(relative) = dir.strip_prefix(from) {
                let moved = to.join(relative);
                inner.add_dir_all(&moved);
            }
        }

        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        let mut inner = self.write()?;
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/b.txt"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/a/b.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn copy_dir_all_copies_nested_files() {
        let fs = MemoryFilesystem::new()
            .with_file("/tpl/src/theme.ts", "theme")
            .with_file("/tpl/src/ui/Button.tsx", "button")
            .with_file("/tpl/package.json", "{}");

        let copied = fs
            .copy_dir_all(Path::new("/tpl/src"), Path::new("/out/src"))
            .unwrap();

        assert_eq!(
            copied,
            vec![PathBuf::from("theme.ts"), PathBuf::from("ui/Button.tsx")]
        );
        assert_eq!(fs.read_file(Path::new("/out/src/ui/Button.tsx")).as_deref(), Some("button"));
        assert!(fs.is_dir(Path::new("/out/src/ui")));
        assert!(!fs.exists(Path::new("/out/src/package.json")));
    }

    #[test]
    fn rename_moves_everything_under_prefix() {
        let fs = MemoryFilesystem::new()
            .with_file("/out/.staging-app-1/package.json", "{}")
            .with_file("/out/.staging-app-1/src/modules/m/M.tsx", "m");

        fs.rename(Path::new("/out/.staging-app-1"), Path::new("/out/app-1"))
            .unwrap();

        assert!(!fs.exists(Path::new("/out/.staging-app-1")));
        assert!(fs.is_dir(Path::new("/out/app-1/src/modules/m")));
        assert_eq!(
            fs.read_file(Path::new("/out/app-1/src/modules/m/M.tsx")).as_deref(),
            Some("m")
        );
    }

    #[test]
    fn rename_refuses_existing_destination() {
        let fs = MemoryFilesystem::new()
            .with_file("/a/f", "1")
            .with_file("/b/f", "2");
        assert!(fs.rename(Path::new("/a"), Path::new("/b")).is_err());
    }

    #[test]
    fn remove_dir_all_drops_subtree() {
        let fs = MemoryFilesystem::new()
            .with_file("/out/x/f", "1")
            .with_file("/out/y/f", "2");

        fs.remove_dir_all(Path::new("/out/x")).unwrap();

        assert!(!fs.exists(Path::new("/out/x")));
        assert!(fs.exists(Path::new("/out/y/f")));
    }
}
