use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use appforge_core::{
    application::{
        ApplicationError,
        ports::{TemplateAssets, TemplateName},
    },
    error::ForgeResult,
};
use tracing::debug;

/// Templates read from a directory at render time.
///
/// A missing file means "not provided here", so a partial override directory
/// layered over [`BuiltinAssets`](super::BuiltinAssets) only replaces what it
/// contains.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    dir: PathBuf,
}

impl DirectoryAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_of(&self, name: TemplateName) -> PathBuf {
        self.dir.join(name.file_name())
    }
}

impl TemplateAssets for DirectoryAssets {
    fn load(&self, name: TemplateName) -> ForgeResult<Option<String>> {
        let path = self.path_of(name);
        match fs::read_to_string(&path) {
            Ok(source) => {
                debug!(template = %name, path = %path.display(), "Loaded template override");
                Ok(Some(source))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApplicationError::FilesystemError {
                path,
                reason: format!("Failed to read template: {e}"),
            }
            .into()),
        }
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_template_by_file_name() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("readme.md.j2"), "# {{ APP_NAME }}").unwrap();

        let assets = DirectoryAssets::new(temp.path());
        assert_eq!(
            assets.load(TemplateName::Readme).unwrap().as_deref(),
            Some("# {{ APP_NAME }}")
        );
    }

    #[test]
    fn missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let assets = DirectoryAssets::new(temp.path());
        assert_eq!(assets.load(TemplateName::ModuleService).unwrap(), None);
    }
}
