//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not in the
//! domain transformations. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while assembling a project.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A named renderer template has no asset behind it.
    #[error("Template '{name}' not found in {source_description}")]
    TemplateNotFound {
        name: String,
        source_description: String,
    },

    /// A file the template root must provide is absent.
    #[error("Template root is missing required file {path}")]
    TemplateFileMissing { path: PathBuf },

    /// Template rendering failed.
    #[error("Rendering '{template}' failed: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A manifest copied from the template root is not valid JSON.
    #[error("Cannot parse manifest {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned by a panicking thread.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { name, .. } => vec![
                format!("No asset for template '{}'", name),
                "The installation is incomplete; reinstall appforge".into(),
                "Or point --templates-dir at a directory containing the asset".into(),
            ],
            Self::TemplateFileMissing { path } => vec![
                format!("Restore {}", path.display()),
                "Check --template-root / APPFORGE_TEMPLATE_ROOT".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Template '{}' has a syntax error", template),
                "Fix the override in --templates-dir or remove it to use the built-in".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ManifestParse { path, .. } => vec![
                format!("{} in the template root is not valid JSON", path.display()),
            ],
            Self::LockPoisoned => vec!["An earlier operation panicked; restart the process".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::TemplateFileMissing { .. } => {
                ErrorCategory::NotFound
            }
            Self::RenderingFailed { .. } | Self::ManifestParse { .. } => {
                ErrorCategory::Configuration
            }
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
