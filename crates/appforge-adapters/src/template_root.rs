//! Template root discovery.
//!
//! The template root is the static Expo project every generated app starts
//! from. When it is not configured explicitly it is searched for in this
//! order, stopping at the first existing directory:
//!
//! 1. **`$APPFORGE_TEMPLATE_ROOT`**: environment variable override.
//! 2. **`./templates/expo-template`**: relative to the current working directory.
//! 3. **`<executable-dir>/templates/expo-template`**: next to an installed binary.
//! 4. **`../templates/expo-template`**: convenient when running from `target/`.
//!
//! ```env
//! APPFORGE_TEMPLATE_ROOT=./templates/expo-template
//! ```

use std::path::{Path, PathBuf};

use appforge_core::application::services::{ENTRY_POINT, REQUIRED_FILES, TEMPLATE_SUFFIX};
use tracing::{debug, info, instrument, warn};

/// Environment variable naming the template root.
pub const TEMPLATE_ROOT_ENV: &str = "APPFORGE_TEMPLATE_ROOT";

/// Template root location relative to the workspace / install directory.
pub const DEFAULT_TEMPLATE_DIR: &str = "templates/expo-template";

/// Find the template root using the order described in the module docs.
///
/// Returns `None` (with a `WARN` log) when no candidate exists; the caller
/// should ask the user for `--template-root`.
#[instrument]
pub fn discover_template_root() -> Option<PathBuf> {
    for candidate in search_paths() {
        debug!(path = %candidate.display(), "checking candidate template root");

        if candidate.is_dir() {
            info!(path = %candidate.display(), "template root found");
            return Some(candidate);
        }
    }

    warn!(
        "no template root found; checked ${TEMPLATE_ROOT_ENV}, ./{DEFAULT_TEMPLATE_DIR}, \
         <exe>/{DEFAULT_TEMPLATE_DIR}, and ../{DEFAULT_TEMPLATE_DIR}"
    );
    None
}

/// The candidates [`discover_template_root`] probes, in order.
pub fn search_paths() -> Vec<PathBuf> {
    let env_dir = std::env::var(TEMPLATE_ROOT_ENV).ok();
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    candidate_paths(env_dir, exe_dir)
}

/// Required files absent from `root`, in layout order. The entry point also
/// counts as present when only its `.j2` template exists.
pub fn missing_required_files(root: &Path) -> Vec<&'static str> {
    REQUIRED_FILES
        .iter()
        .copied()
        .filter(|file| {
            let templated = *file == ENTRY_POINT
                && root.join(format!("{file}{TEMPLATE_SUFFIX}")).is_file();
            !root.join(file).is_file() && !templated
        })
        .collect()
}

/// Build the ordered list of candidate paths to probe.
fn candidate_paths(env_dir: Option<String>, exe_dir: Option<PathBuf>) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);

    if let Some(dir) = env_dir.filter(|d| !d.trim().is_empty()) {
        paths.push(PathBuf::from(dir));
    }

    paths.push(PathBuf::from(DEFAULT_TEMPLATE_DIR));

    if let Some(exe_dir) = exe_dir {
        paths.push(exe_dir.join(DEFAULT_TEMPLATE_DIR));
    }

    paths.push(Path::new("..").join(DEFAULT_TEMPLATE_DIR));

    paths
}
