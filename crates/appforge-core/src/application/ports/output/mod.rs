//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `appforge-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::RenderContext;
use crate::error::ForgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `appforge_adapters::filesystem::LocalFilesystem` (production)
/// - `appforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ForgeResult<String>;

    /// Copy one file byte for byte, creating the destination's parents.
    fn copy_file(&self, from: &Path, to: &Path) -> ForgeResult<()>;

    /// Copy a directory tree. Returns the copied files relative to `from`.
    fn copy_dir_all(&self, from: &Path, to: &Path) -> ForgeResult<Vec<PathBuf>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Move a file or directory. Both paths are on the same filesystem.
    fn rename(&self, from: &Path, to: &Path) -> ForgeResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()>;
}

/// The templates the assembler renders by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    /// The module's screen component (`<Component>.tsx`).
    ModuleComponent,
    /// The module's API client (`<id>Service.ts`).
    ModuleService,
    /// The project README.
    Readme,
}

impl TemplateName {
    pub const ALL: [TemplateName; 3] = [Self::ModuleComponent, Self::ModuleService, Self::Readme];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ModuleComponent => "module-component",
            Self::ModuleService => "module-service",
            Self::Readme => "readme",
        }
    }

    /// File name of the template asset, as looked up in a templates directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::ModuleComponent => "module-component.tsx.j2",
            Self::ModuleService => "module-service.ts.j2",
            Self::Readme => "readme.md.j2",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for template rendering.
///
/// Implemented by:
/// - `appforge_adapters::renderer::JinjaRenderer` (minijinja)
///
/// Placeholders missing from the context render as empty text.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render one of the named templates.
    fn render(&self, name: TemplateName, context: &RenderContext) -> ForgeResult<String>;

    /// Render template text that came from somewhere else (the template root).
    fn render_str(&self, source: &str, context: &RenderContext) -> ForgeResult<String>;
}

/// Port for the source text behind each [`TemplateName`].
///
/// Implemented by:
/// - `appforge_adapters::assets::BuiltinAssets` (compiled in)
/// - `appforge_adapters::assets::DirectoryAssets` (user overrides)
/// - `appforge_adapters::assets::LayeredAssets` (overrides over built-ins)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateAssets: Send + Sync {
    /// Source text, or `None` when this provider has no such template.
    fn load(&self, name: TemplateName) -> ForgeResult<Option<String>>;

    /// Where the templates come from, for logs and error messages.
    fn describe(&self) -> String;
}
