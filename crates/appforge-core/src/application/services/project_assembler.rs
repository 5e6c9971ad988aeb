//! Project Assembler - the app generation use case.
//!
//! This service coordinates one generation end to end:
//! 1. Validate the module
//! 2. Copy the template root into a staging directory
//! 3. Render the entry point and the module sources
//! 4. Patch `package.json` and `app.json`
//! 5. Render the README
//! 6. Publish the staging directory with a single rename
//!
//! A failure at any step removes the staging directory, so a half-built
//! project is never visible under its final name.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateName, TemplateRenderer},
        services::layout::{TemplateLayout, module_dir},
    },
    domain::{
        APP_MANIFEST, AppGenerationRequest, AppPatch, DomainError, DomainValidator,
        GenerationResult, ModuleDefinition, PACKAGE_MANIFEST, PackagePatch, RenderContext,
        merge_app_manifest, merge_package_manifest, to_manifest_string,
    },
    error::ForgeResult,
};

const README: &str = "README.md";

/// A successfully published app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedApp {
    pub app_id: String,
    /// Final project directory.
    pub path: PathBuf,
    /// Files written, relative to `path`.
    pub files: Vec<PathBuf>,
}

impl GeneratedApp {
    pub fn to_result(&self) -> GenerationResult {
        GenerationResult::succeeded(&self.app_id, &self.path)
    }
}

/// App generation service.
///
/// Holds no per-request state; one instance can serve concurrent callers.
pub struct ProjectAssembler {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    layout: TemplateLayout,
}

impl ProjectAssembler {
    /// Create a new assembler with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use appforge_core::application::{ProjectAssembler, TemplateLayout};
    ///
    /// let assembler = ProjectAssembler::new(
    ///     Box::new(renderer),   // impl TemplateRenderer
    ///     Box::new(filesystem), // impl Filesystem
    ///     TemplateLayout::new("templates/expo-template", "generated-apps"),
    /// );
    /// let result = assembler.generate(&request);
    /// ```
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        layout: TemplateLayout,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            layout,
        }
    }

    pub fn layout(&self) -> &TemplateLayout {
        &self.layout
    }

    /// Generate an app, reducing any failure to `success: false`.
    ///
    /// Requests rejected before an id is allocated report an empty `app_id`.
    pub fn generate(&self, request: &AppGenerationRequest) -> GenerationResult {
        let module = match checked_module(request) {
            Ok(module) => module,
            Err(e) => {
                warn!(error = %e, "Rejected generation request");
                return GenerationResult::failed("", e.to_string());
            }
        };

        let app_id = new_app_id();
        match self.assemble(&app_id, module, request) {
            Ok(app) => app.to_result(),
            Err(e) => GenerationResult::failed(app_id, e.to_string()),
        }
    }

    /// Generate an app, keeping the typed error.
    pub fn try_generate(&self, request: &AppGenerationRequest) -> ForgeResult<GeneratedApp> {
        let module = checked_module(request)?;
        self.assemble(&new_app_id(), module, request)
    }

    #[instrument(
        skip_all,
        fields(app_id = %app_id, app_slug = %request.app_slug, module = %module.id)
    )]
    fn assemble(
        &self,
        app_id: &str,
        module: &ModuleDefinition,
        request: &AppGenerationRequest,
    ) -> ForgeResult<GeneratedApp> {
        let staging = self.layout.staging_dir(app_id);
        let target = self.layout.app_dir(app_id);

        debug!(staging = %staging.display(), "Creating staging directory");
        self.filesystem.create_dir_all(&staging)?;

        let outcome = self
            .populate(&staging, module, request)
            .and_then(|files| self.publish(&staging, &target).map(|()| files));

        match outcome {
            Ok(files) => {
                info!(
                    path = %target.display(),
                    files = files.len(),
                    "App generated"
                );
                Ok(GeneratedApp {
                    app_id: app_id.to_string(),
                    path: target,
                    files,
                })
            }
            Err(e) => {
                warn!(error = %e, "Generation failed, rolling back");
                self.rollback(&staging);
                Err(e)
            }
        }
    }

    /// Fill `root` with the complete project. Returns the files written.
    fn populate(
        &self,
        root: &Path,
        module: &ModuleDefinition,
        request: &AppGenerationRequest,
    ) -> ForgeResult<Vec<PathBuf>> {
        let mut files = self.copy_template_root(root)?;

        let context = RenderContext::for_module(module, request);
        self.render_entry_point(root, &context)?;
        files.extend(self.write_module_sources(root, module, &context)?);

        self.patch_package_manifest(root, module, &request.app_slug)?;
        self.patch_app_manifest(root, request)?;

        files.push(self.write_readme(root, module, request)?);
        Ok(files)
    }

    fn copy_template_root(&self, root: &Path) -> ForgeResult<Vec<PathBuf>> {
        let template_root = self.layout.template_root();
        let mut copied = Vec::new();

        for file in self.layout.required_files() {
            let from = template_root.join(file);
            if self.filesystem.exists(&from) {
                self.filesystem.copy_file(&from, &root.join(file))?;
            } else if !self.has_entry_point_template(file) {
                return Err(ApplicationError::TemplateFileMissing { path: from }.into());
            }
            copied.push(PathBuf::from(file));
        }

        for file in self.layout.optional_files() {
            let from = template_root.join(file);
            if self.filesystem.exists(&from) {
                self.filesystem.copy_file(&from, &root.join(file))?;
                copied.push(PathBuf::from(file));
            } else {
                warn!(file = %file, template_root = %template_root.display(), "Optional template file missing, skipping");
            }
        }

        for dir in self.layout.optional_dirs() {
            let from = template_root.join(dir);
            if self.filesystem.is_dir(&from) {
                let nested = self.filesystem.copy_dir_all(&from, &root.join(dir))?;
                copied.extend(nested.into_iter().map(|p| Path::new(dir).join(p)));
            } else {
                warn!(dir = %dir, template_root = %template_root.display(), "Optional template directory missing, skipping");
            }
        }

        debug!(files = copied.len(), "Copied template root");
        Ok(copied)
    }

    fn has_entry_point_template(&self, file: &str) -> bool {
        self.layout.is_entry_point(file)
            && self.filesystem.exists(
                &self
                    .layout
                    .template_root()
                    .join(self.layout.entry_point_template()),
            )
    }

    /// Render `App.tsx.j2` into `App.tsx` when the template root ships one.
    /// A plain entry point stays exactly as copied.
    fn render_entry_point(&self, root: &Path, context: &RenderContext) -> ForgeResult<()> {
        let entry_point = self.layout.entry_point();
        let template = self
            .layout
            .template_root()
            .join(self.layout.entry_point_template());
        if !self.filesystem.exists(&template) {
            debug!(entry_point, "Entry point copied verbatim");
            return Ok(());
        }

        let source = self.filesystem.read_to_string(&template)?;
        let rendered = self.renderer.render_str(&source, context)?;
        self.filesystem.write_file(&root.join(entry_point), &rendered)?;

        debug!(entry_point, "Rendered entry point");
        Ok(())
    }

    fn write_module_sources(
        &self,
        root: &Path,
        module: &ModuleDefinition,
        context: &RenderContext,
    ) -> ForgeResult<Vec<PathBuf>> {
        let dir = module_dir(root, &module.id);
        self.filesystem.create_dir_all(&dir)?;

        let sources = [
            (
                TemplateName::ModuleComponent,
                format!("{}.tsx", module.component_name()),
            ),
            (
                TemplateName::ModuleService,
                format!("{}.ts", module.service_name()),
            ),
        ];

        let relative_dir = module_dir(Path::new(""), &module.id);
        let mut written = Vec::with_capacity(sources.len());
        for (template, file_name) in sources {
            let content = self.renderer.render(template, context)?;
            self.filesystem.write_file(&dir.join(&file_name), &content)?;
            written.push(relative_dir.join(file_name));
        }

        debug!(dir = %dir.display(), "Wrote module sources");
        Ok(written)
    }

    fn patch_package_manifest(
        &self,
        root: &Path,
        module: &ModuleDefinition,
        app_slug: &str,
    ) -> ForgeResult<()> {
        let patch = PackagePatch::new(app_slug).with_dependencies(module.dependency_specs());
        debug!(
            additions = patch.dependency_additions.len(),
            "Merging package manifest"
        );
        self.rewrite_manifest(&root.join(PACKAGE_MANIFEST), |existing| {
            merge_package_manifest(existing, &patch)
        })
    }

    fn patch_app_manifest(&self, root: &Path, request: &AppGenerationRequest) -> ForgeResult<()> {
        let patch = AppPatch::from(request.identity());
        debug!(bundle_id = %patch.ios_bundle_id, "Merging app manifest");
        self.rewrite_manifest(&root.join(APP_MANIFEST), |existing| {
            merge_app_manifest(existing, &patch)
        })
    }

    fn rewrite_manifest(
        &self,
        path: &Path,
        merge: impl FnOnce(Value) -> Result<Value, DomainError>,
    ) -> ForgeResult<()> {
        let text = self.filesystem.read_to_string(path)?;
        let existing: Value =
            serde_json::from_str(&text).map_err(|e| ApplicationError::ManifestParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let merged = merge(existing)?;
        self.filesystem.write_file(path, &to_manifest_string(&merged))
    }

    fn write_readme(
        &self,
        root: &Path,
        module: &ModuleDefinition,
        request: &AppGenerationRequest,
    ) -> ForgeResult<PathBuf> {
        let context = RenderContext::for_readme(module, request);
        let readme = self.renderer.render(TemplateName::Readme, &context)?;
        self.filesystem.write_file(&root.join(README), &readme)?;
        Ok(PathBuf::from(README))
    }

    fn publish(&self, staging: &Path, target: &Path) -> ForgeResult<()> {
        if self.filesystem.exists(target) {
            return Err(ApplicationError::FilesystemError {
                path: target.to_path_buf(),
                reason: "output directory already exists".into(),
            }
            .into());
        }
        self.filesystem.rename(staging, target)
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, staging: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(staging) {
            warn!(
                error = %e,
                path = %staging.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

fn checked_module(request: &AppGenerationRequest) -> ForgeResult<&ModuleDefinition> {
    let module = request.module()?;
    DomainValidator::validate_module(module)?;
    Ok(module)
}

fn new_app_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockFilesystem, MockTemplateRenderer};
    use crate::error::ForgeError;
    use std::sync::{Arc, Mutex};

    type Writes = Arc<Mutex<Vec<(PathBuf, String)>>>;

    const TEMPLATE_ROOT: &str = "/tpl";
    const OUTPUT_ROOT: &str = "/out";

    fn module() -> ModuleDefinition {
        serde_json::from_value(serde_json::json!({
            "id": "rizz-text-bot",
            "name": "Rizz",
            "dependencies": ["openai-client@^1.0.0"],
            "api": { "endpoint": "https://x/rizz", "method": "POST" }
        }))
        .unwrap()
    }

    fn request() -> AppGenerationRequest {
        AppGenerationRequest::new("Test App", "test-app", module())
    }

    fn layout() -> TemplateLayout {
        TemplateLayout::new(TEMPLATE_ROOT, OUTPUT_ROOT)
    }

    fn echo_renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|name, _| Ok(format!("// {name}")));
        renderer
            .expect_render_str()
            .returning(|source, _| Ok(source.to_string()));
        renderer
    }

    /// A filesystem whose template root holds everything and whose writes
    /// all succeed. Writes are recorded.
    fn working_filesystem(writes: Writes) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .returning(|p: &Path| p.starts_with(TEMPLATE_ROOT));
        fs.expect_is_dir()
            .returning(|p: &Path| p.starts_with(TEMPLATE_ROOT));
        fs.expect_copy_file().returning(|_, _| Ok(()));
        fs.expect_copy_dir_all()
            .returning(|_, _| Ok(vec![PathBuf::from("theme.ts")]));
        fs.expect_read_to_string().returning(|p: &Path| {
            let text = match p.file_name().and_then(|n| n.to_str()) {
                Some("package.json") => r#"{"name":"expo-template","dependencies":{"expo":"~50.0.0"}}"#,
                Some("app.json") => r#"{"expo":{"name":"t","ios":{},"android":{}}}"#,
                _ => "export default function App() {}",
            };
            Ok(text.to_string())
        });
        fs.expect_write_file().returning(move |p, content| {
            writes
                .lock()
                .unwrap()
                .push((p.to_path_buf(), content.to_string()));
            Ok(())
        });
        fs
    }

    fn written(writes: &Writes, file_name: &str) -> Option<String> {
        writes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(p, _)| p.file_name().and_then(|n| n.to_str()) == Some(file_name))
            .map(|(_, c)| c.clone())
    }

    #[test]
    fn happy_path_publishes_staging_dir() {
        let writes = Writes::default();
        let mut fs = working_filesystem(writes.clone());
        fs.expect_rename()
            .withf(|from: &Path, to: &Path| {
                from.parent() == Some(Path::new(OUTPUT_ROOT))
                    && to.parent() == Some(Path::new(OUTPUT_ROOT))
                    && from.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with(".staging-app-"))
                    && to.file_name().and_then(|n| n.to_str()).is_some_and(|n| n.starts_with("app-"))
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_remove_dir_all().never();

        let assembler = ProjectAssembler::new(Box::new(echo_renderer()), Box::new(fs), layout());
        let app = assembler.try_generate(&request()).unwrap();

        assert_eq!(app.path, PathBuf::from(format!("/out/app-{}", app.app_id)));
        assert!(app.files.contains(&PathBuf::from("src/modules/rizz-text-bot/RizzTextBot.tsx")));
        assert!(app.files.contains(&PathBuf::from(
            "src/modules/rizz-text-bot/rizz-text-botService.ts"
        )));
        assert!(app.files.contains(&PathBuf::from("src/theme.ts")));
        assert!(app.files.contains(&PathBuf::from("README.md")));

        let package: Value =
            serde_json::from_str(&written(&writes, "package.json").unwrap()).unwrap();
        assert_eq!(package["name"], "test-app");
        assert_eq!(package["dependencies"]["openai-client"], "^1.0.0");
        assert_eq!(package["dependencies"]["expo"], "~50.0.0");

        let app_json: Value = serde_json::from_str(&written(&writes, "app.json").unwrap()).unwrap();
        assert_eq!(app_json["expo"]["ios"]["bundleIdentifier"], "com.jarvis.test-app");
        assert_eq!(app_json["expo"]["scheme"], "test-app");

        assert_eq!(written(&writes, "README.md").as_deref(), Some("// readme"));
    }

    #[test]
    fn generate_reports_file_url() {
        let mut fs = working_filesystem(Writes::default());
        fs.expect_rename().returning(|_, _| Ok(()));

        let assembler = ProjectAssembler::new(Box::new(echo_renderer()), Box::new(fs), layout());
        let result = assembler.generate(&request());

        assert!(result.success);
        assert!(result.error.is_none());
        assert_eq!(
            result.repo_url,
            Some(format!("file:///out/app-{}", result.app_id))
        );
    }

    #[test]
    fn invalid_module_touches_nothing() {
        let mut request = request();
        if let Some(module) = request.module.as_mut() {
            module.api.endpoint.clear();
        }

        // No expectations: any filesystem call panics.
        let assembler = ProjectAssembler::new(
            Box::new(MockTemplateRenderer::new()),
            Box::new(MockFilesystem::new()),
            layout(),
        );

        let result = assembler.generate(&request);
        assert!(!result.success);
        assert_eq!(result.app_id, "");
        assert!(result.error.unwrap().contains("api.endpoint"));

        let err = assembler.try_generate(&request).unwrap_err();
        assert!(err.is_user_error());
    }

    #[test]
    fn missing_module_is_rejected() {
        let request = AppGenerationRequest {
            app_name: "Test App".into(),
            app_slug: "test-app".into(),
            ..Default::default()
        };
        let assembler = ProjectAssembler::new(
            Box::new(MockTemplateRenderer::new()),
            Box::new(MockFilesystem::new()),
            layout(),
        );

        let err = assembler.try_generate(&request).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Domain(DomainError::MissingRequiredField { field: "module" })
        ));
    }

    #[test]
    fn missing_required_file_rolls_back() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .returning(|p: &Path| !p.ends_with("app.json"));
        fs.expect_copy_file().returning(|_, _| Ok(()));
        fs.expect_rename().never();
        fs.expect_remove_dir_all()
            .withf(|p: &Path| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(".staging-app-"))
            })
            .times(1)
            .returning(|_| Ok(()));

        let assembler = ProjectAssembler::new(
            Box::new(MockTemplateRenderer::new()),
            Box::new(fs),
            layout(),
        );

        let err = assembler.try_generate(&request()).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::TemplateFileMissing { ref path })
                if path == Path::new("/tpl/app.json")
        ));
    }

    #[test]
    fn missing_optional_file_is_skipped() {
        let writes = Writes::default();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|p: &Path| {
            p.starts_with(TEMPLATE_ROOT) && !p.ends_with("tsconfig.json")
        });
        fs.expect_is_dir().returning(|_| false);
        fs.expect_copy_file()
            .withf(|from: &Path, _: &Path| !from.ends_with("tsconfig.json"))
            .returning(|_, _| Ok(()));
        fs.expect_copy_dir_all().never();
        fs.expect_read_to_string().returning(|p: &Path| {
            Ok(if p.ends_with("app.json") {
                r#"{"expo":{"ios":{},"android":{}}}"#.to_string()
            } else {
                "{}".to_string()
            })
        });
        let recorder = writes.clone();
        fs.expect_write_file().returning(move |p, c| {
            recorder.lock().unwrap().push((p.to_path_buf(), c.to_string()));
            Ok(())
        });
        fs.expect_rename().times(1).returning(|_, _| Ok(()));

        let assembler = ProjectAssembler::new(Box::new(echo_renderer()), Box::new(fs), layout());
        let app = assembler.try_generate(&request()).unwrap();

        assert!(!app.files.contains(&PathBuf::from("tsconfig.json")));
        assert!(app.files.contains(&PathBuf::from("babel.config.js")));
    }

    #[test]
    fn renderer_failure_rolls_back() {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render_str()
            .returning(|source, _| Ok(source.to_string()));
        renderer.expect_render().returning(|name, _| {
            Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
                source_description: "test assets".into(),
            }
            .into())
        });

        let mut fs = working_filesystem(Writes::default());
        fs.expect_rename().never();
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));

        let assembler = ProjectAssembler::new(Box::new(renderer), Box::new(fs), layout());
        let result = assembler.generate(&request());

        assert!(!result.success);
        assert!(!result.app_id.is_empty());
        assert!(result.error.unwrap().contains("module-component"));
    }

    #[test]
    fn malformed_app_manifest_rolls_back() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .returning(|p: &Path| p.starts_with(TEMPLATE_ROOT));
        fs.expect_is_dir().returning(|_| false);
        fs.expect_copy_file().returning(|_, _| Ok(()));
        fs.expect_read_to_string().returning(|p: &Path| {
            Ok(if p.ends_with("app.json") {
                r#"{"expo":{"android":{}}}"#.to_string()
            } else {
                "{}".to_string()
            })
        });
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_rename().never();
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));

        let assembler = ProjectAssembler::new(Box::new(echo_renderer()), Box::new(fs), layout());
        let err = assembler.try_generate(&request()).unwrap_err();

        assert!(matches!(
            err,
            ForgeError::Domain(DomainError::ManifestFieldMissing { ref path, .. }) if path == "expo.ios"
        ));
    }

    #[test]
    fn unparseable_manifest_is_reported_with_path() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .returning(|p: &Path| p.starts_with(TEMPLATE_ROOT));
        fs.expect_is_dir().returning(|_| false);
        fs.expect_copy_file().returning(|_, _| Ok(()));
        fs.expect_read_to_string().returning(|p: &Path| {
            Ok(if p.ends_with("package.json") {
                "{ not json".to_string()
            } else {
                String::new()
            })
        });
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_remove_dir_all().returning(|_| Ok(()));

        let assembler = ProjectAssembler::new(Box::new(echo_renderer()), Box::new(fs), layout());
        let err = assembler.try_generate(&request()).unwrap_err();

        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::ManifestParse { ref path, .. })
                if path.ends_with("package.json")
        ));
    }

    #[test]
    fn rollback_failure_keeps_original_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_remove_dir_all().returning(|p: &Path| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "busy".into(),
            }
            .into())
        });

        let assembler = ProjectAssembler::new(
            Box::new(MockTemplateRenderer::new()),
            Box::new(fs),
            layout(),
        );
        let err = assembler.try_generate(&request()).unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Application(ApplicationError::TemplateFileMissing { .. })
        ));
    }

    #[test]
    fn plain_entry_point_is_copied_verbatim() {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render_str().never();
        renderer
            .expect_render()
            .returning(|name, _| Ok(name.to_string()));

        let writes = Writes::default();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|p: &Path| {
            p.starts_with(TEMPLATE_ROOT) && !p.ends_with("App.tsx.j2")
        });
        fs.expect_is_dir().returning(|_| false);
        fs.expect_copy_file().returning(|_, _| Ok(()));
        fs.expect_read_to_string()
            .withf(|p: &Path| !p.ends_with("App.tsx"))
            .returning(|p: &Path| {
                Ok(if p.ends_with("app.json") {
                    r#"{"expo":{"ios":{},"android":{}}}"#.to_string()
                } else {
                    "{}".to_string()
                })
            });
        let recorder = writes.clone();
        fs.expect_write_file().returning(move |p, c| {
            recorder.lock().unwrap().push((p.to_path_buf(), c.to_string()));
            Ok(())
        });
        fs.expect_rename().returning(|_, _| Ok(()));

        let assembler = ProjectAssembler::new(Box::new(renderer), Box::new(fs), layout());
        let app = assembler.try_generate(&request()).unwrap();

        assert!(app.files.contains(&PathBuf::from("App.tsx")));
        assert_eq!(written(&writes, "App.tsx"), None);
    }

    #[test]
    fn entry_point_template_satisfies_required_file() {
        let writes = Writes::default();
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|p: &Path| {
            p.starts_with(TEMPLATE_ROOT) && !p.ends_with("App.tsx")
        });
        fs.expect_is_dir().returning(|_| false);
        fs.expect_copy_file()
            .withf(|from: &Path, _: &Path| !from.ends_with("App.tsx"))
            .returning(|_, _| Ok(()));
        fs.expect_read_to_string().returning(|p: &Path| {
            let text = match p.file_name().and_then(|n| n.to_str()) {
                Some("app.json") => r#"{"expo":{"ios":{},"android":{}}}"#,
                Some("App.tsx.j2") => "<{{ MODULE_COMPONENT }} />",
                _ => "{}",
            };
            Ok(text.to_string())
        });
        let recorder = writes.clone();
        fs.expect_write_file().returning(move |p, c| {
            recorder.lock().unwrap().push((p.to_path_buf(), c.to_string()));
            Ok(())
        });
        fs.expect_rename().returning(|_, _| Ok(()));

        let assembler = ProjectAssembler::new(Box::new(echo_renderer()), Box::new(fs), layout());
        let app = assembler.try_generate(&request()).unwrap();

        assert!(app.files.contains(&PathBuf::from("App.tsx")));
        assert_eq!(
            written(&writes, "App.tsx").as_deref(),
            Some("<{{ MODULE_COMPONENT }} />")
        );
    }
}
