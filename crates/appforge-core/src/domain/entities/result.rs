use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Outcome of one generation call, as handed back to the caller.
///
/// `error` is present iff `success` is false; `repo_url` only on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub success: bool,
    pub app_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResult {
    pub fn succeeded(app_id: impl Into<String>, location: &Path) -> Self {
        Self {
            success: true,
            app_id: app_id.into(),
            repo_url: Some(file_url(location)),
            error: None,
        }
    }

    pub fn failed(app_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            app_id: app_id.into(),
            repo_url: None,
            error: Some(error.into()),
        }
    }

    /// Local path behind a `file://` repo URL.
    pub fn local_path(&self) -> Option<PathBuf> {
        self.repo_url
            .as_deref()
            .and_then(|url| url.strip_prefix("file://"))
            .map(PathBuf::from)
    }
}

/// `file://` URL of `path`, resolved against the current directory when
/// relative so the path never reads as a URL host.
fn file_url(path: &Path) -> String {
    let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", path.display())
}
