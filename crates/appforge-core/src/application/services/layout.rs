//! Where the assembler reads from and writes to.

use std::path::{Path, PathBuf};

/// Files every template root must provide.
pub const REQUIRED_FILES: [&str; 3] = ["package.json", "app.json", "App.tsx"];

/// Files copied when present; their absence is logged.
pub const OPTIONAL_FILES: [&str; 2] = ["tsconfig.json", "babel.config.js"];

/// Directory trees copied when present; their absence is logged.
pub const OPTIONAL_DIRS: [&str; 1] = ["src"];

/// The entry-point source file of every project.
pub const ENTRY_POINT: &str = "App.tsx";

/// Suffix marking a template root file as a template. Only `App.tsx.j2` is
/// rendered into `App.tsx`; a plain `App.tsx` is copied verbatim.
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Template root layout plus the output root generated apps land in.
///
/// Required entries fail the generation when missing; optional ones are
/// skipped with a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLayout {
    template_root: PathBuf,
    output_root: PathBuf,
    required_files: Vec<String>,
    optional_files: Vec<String>,
    optional_dirs: Vec<String>,
    entry_point: String,
}

impl TemplateLayout {
    /// The Expo template layout.
    ///
    /// A relative output root is resolved against the current directory so
    /// generated paths and `file://` URLs are absolute.
    pub fn new(template_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        let output_root = output_root.into();
        Self {
            template_root: template_root.into(),
            output_root: std::path::absolute(&output_root).unwrap_or(output_root),
            required_files: REQUIRED_FILES.iter().map(|s| s.to_string()).collect(),
            optional_files: OPTIONAL_FILES.iter().map(|s| s.to_string()).collect(),
            optional_dirs: OPTIONAL_DIRS.iter().map(|s| s.to_string()).collect(),
            entry_point: ENTRY_POINT.to_string(),
        }
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn required_files(&self) -> &[String] {
        &self.required_files
    }

    pub fn optional_files(&self) -> &[String] {
        &self.optional_files
    }

    pub fn optional_dirs(&self) -> &[String] {
        &self.optional_dirs
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    /// Template-root file name that opts the entry point into rendering.
    pub fn entry_point_template(&self) -> String {
        format!("{}{TEMPLATE_SUFFIX}", self.entry_point)
    }

    /// Whether `file` may be supplied by its template instead.
    pub fn is_entry_point(&self, file: &str) -> bool {
        file == self.entry_point
    }

    /// Final location of a generated app.
    pub fn app_dir(&self, app_id: &str) -> PathBuf {
        self.output_root.join(format!("app-{app_id}"))
    }

    /// Hidden sibling of [`Self::app_dir`] that generation writes into.
    pub fn staging_dir(&self, app_id: &str) -> PathBuf {
        self.output_root.join(format!(".staging-app-{app_id}"))
    }
}

/// Module sources live under `src/modules/<id>` inside the project.
pub fn module_dir(project_root: &Path, module_id: &str) -> PathBuf {
    project_root.join("src").join("modules").join(module_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expo_defaults() {
        let layout = TemplateLayout::new("/t", "/out");
        assert_eq!(layout.required_files(), ["package.json", "app.json", "App.tsx"]);
        assert_eq!(layout.optional_files(), ["tsconfig.json", "babel.config.js"]);
        assert_eq!(layout.optional_dirs(), ["src"]);
        assert_eq!(layout.entry_point(), "App.tsx");
        assert_eq!(layout.entry_point_template(), "App.tsx.j2");
        assert!(layout.is_entry_point("App.tsx"));
        assert!(!layout.is_entry_point("app.json"));
    }

    #[test]
    fn relative_output_root_is_made_absolute() {
        let layout = TemplateLayout::new("/t", "generated-apps");
        assert!(layout.output_root().is_absolute());
        assert!(layout.output_root().ends_with("generated-apps"));
        assert_eq!(
            layout.app_dir("42"),
            std::env::current_dir().unwrap().join("generated-apps/app-42")
        );
    }

    #[test]
    fn staging_is_a_hidden_sibling() {
        let layout = TemplateLayout::new("/t", "/out");
        assert_eq!(layout.app_dir("42"), PathBuf::from("/out/app-42"));
        assert_eq!(layout.staging_dir("42"), PathBuf::from("/out/.staging-app-42"));
        assert_eq!(
            layout.app_dir("42").parent(),
            layout.staging_dir("42").parent()
        );
    }

    #[test]
    fn module_dir_nests_under_src() {
        assert_eq!(
            module_dir(Path::new("/p"), "rizz-text-bot"),
            PathBuf::from("/p/src/modules/rizz-text-bot")
        );
    }
}
