// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (results are reduced to plain messages at the engine boundary)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid module definition '{module_id}': {reason}")]
    InvalidModule { module_id: String, reason: String },

    #[error("Invalid generation request: {0}")]
    InvalidRequest(String),

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("'{value}' is not a valid {field}: use lowercase letters, digits and single hyphens")]
    InvalidSlug { field: &'static str, value: String },

    // ========================================================================
    // Template manifest errors
    // ========================================================================
    #[error("{manifest} is missing required field '{path}'")]
    ManifestFieldMissing {
        manifest: &'static str,
        path: String,
    },

    #[error("{manifest} is malformed: {reason}")]
    ManifestMalformed {
        manifest: &'static str,
        reason: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidModule { module_id, reason } => vec![
                format!("Module '{}' was rejected: {}", module_id, reason),
                "Every module needs an id, a name and an api.endpoint + api.method".into(),
                "Try: appforge modules to see well-formed built-in modules".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Provide a value for '{}'", field),
                "appName, appSlug and module are mandatory".into(),
            ],
            Self::InvalidSlug { field, .. } => vec![
                format!("Rename the {} to kebab-case", field),
                "Examples: test-app, rizz-text-bot, image-generator".into(),
            ],
            Self::ManifestFieldMissing { manifest, path } => vec![
                format!("The template root's {} has no '{}'", manifest, path),
                "The template root is incomplete; restore it from a known-good copy".into(),
            ],
            Self::ManifestMalformed { manifest, .. } => vec![
                format!("Check that the template root's {} is a JSON object", manifest),
            ],
            Self::InvalidRequest(msg) => vec![
                "Check the generation request".into(),
                format!("Details: {}", msg),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidModule { .. }
            | Self::InvalidRequest(_)
            | Self::MissingRequiredField { .. }
            | Self::InvalidSlug { .. } => ErrorCategory::Validation,
            Self::ManifestFieldMissing { .. } | Self::ManifestMalformed { .. } => {
                ErrorCategory::Template
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Template,
}
