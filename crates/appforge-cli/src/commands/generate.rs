//! Implementation of the `appforge generate` command.
//!
//! Responsibility: turn CLI arguments into an `AppGenerationRequest`, wire
//! the adapters into a `ProjectAssembler`, and display the result.  No
//! generation logic lives here.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use appforge_adapters::{
    BuiltinAssets, BuiltinRegistry, JinjaRenderer, LayeredAssets, LocalFilesystem,
    discover_template_root, missing_required_files, search_paths,
};
use appforge_core::{
    application::{GeneratedApp, ProjectAssembler, TemplateLayout, ports::TemplateAssets},
    domain::{AppGenerationRequest, DomainValidator, GenerationResult, ModuleDefinition},
};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute `appforge generate`.
///
/// Dispatch sequence:
/// 1. Build the request from `--request` / `--module` / `--module-file` plus flags
/// 2. Validate it before the engine sees it
/// 3. Resolve template root, output root and template overrides
/// 4. Confirm with the user unless `--yes`, `--quiet` or non-interactive
/// 5. Generate and print the result
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1-2. Request
    let registry = BuiltinRegistry::load()?;
    let request = build_request(&args, &registry)?;
    DomainValidator::validate_request(&request).map_err(|e| CliError::Core(e.into()))?;

    let identity = request.identity();
    debug!(
        app = %identity.name,
        slug = %identity.slug,
        bundle_id = %identity.ios_bundle_id,
        package = %identity.android_package,
        "Request resolved"
    );

    // 3. Locations
    let template_root = resolve_template_root(&args, &config)?;
    let output_root = args
        .output
        .clone()
        .unwrap_or_else(|| config.generator.output_root.clone());
    let templates_dir = args
        .templates_dir
        .clone()
        .or_else(|| config.generator.templates_dir.clone());

    let missing = missing_required_files(&template_root);
    if !missing.is_empty() {
        warn!(root = %template_root.display(), missing = ?missing, "Incomplete template root");
        if !output.is_json() {
            output.warning(&format!(
                "Template root {} is missing {}",
                template_root.display(),
                missing.join(", ")
            ))?;
        }
    }

    // 4. Confirm
    if !global.quiet && !args.yes && !output.is_json() {
        show_plan(&request, &template_root, &output_root, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Generate
    let assembler = build_assembler(&template_root, &output_root, templates_dir.as_deref());

    info!(
        slug = %identity.slug,
        output_root = %output_root.display(),
        "Generation started"
    );
    let spinner = output.spinner(&format!("Generating '{}'...", identity.name));
    let outcome = assembler.try_generate(&request);
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    match outcome {
        Ok(app) => report_success(&app, &request, global.verbose > 0, &output),
        Err(err) => {
            if output.is_json() {
                output.json(&GenerationResult::failed("", err.to_string()))?;
            }
            Err(CliError::Core(err))
        }
    }
}

// ── Request construction ──────────────────────────────────────────────────────

/// Start from `--request` (or an empty request), then apply the module
/// source and every identity flag that was given.
fn build_request(args: &GenerateArgs, registry: &BuiltinRegistry) -> CliResult<AppGenerationRequest> {
    let mut request = match &args.request {
        Some(path) => read_json::<AppGenerationRequest>(path)?,
        None => AppGenerationRequest::default(),
    };

    if let Some(module) = resolve_module(args, registry)? {
        request.module = Some(module);
    }

    override_field(&mut request.app_name, &args.name);
    override_field(&mut request.app_slug, &args.slug);
    override_option(&mut request.bundle_id, &args.bundle_id);
    override_option(&mut request.package_name, &args.package_name);
    override_option(&mut request.app_scheme, &args.scheme);
    override_option(&mut request.description, &args.description);
    override_option(&mut request.icon_url, &args.icon_url);

    Ok(request)
}

fn resolve_module(
    args: &GenerateArgs,
    registry: &BuiltinRegistry,
) -> CliResult<Option<ModuleDefinition>> {
    if let Some(id) = &args.module {
        let module = registry
            .get(id)
            .cloned()
            .ok_or_else(|| CliError::ModuleNotFound {
                id: id.clone(),
                available: registry.ids().map(str::to_owned).collect(),
            })?;
        return Ok(Some(module));
    }

    match &args.module_file {
        Some(path) => Ok(Some(read_json::<ModuleDefinition>(path)?)),
        None => Ok(None),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> CliResult<T> {
    let text = fs::read_to_string(path)
        .with_cli_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_cli_context(|| format!("{} is not valid JSON", path.display()))
}

fn override_field(field: &mut String, value: &Option<String>) {
    if let Some(value) = value {
        *field = value.clone();
    }
}

fn override_option(field: &mut Option<String>, value: &Option<String>) {
    if value.is_some() {
        field.clone_from(value);
    }
}

// ── Wiring ────────────────────────────────────────────────────────────────────

/// `--template-root`, then config, then discovery.
fn resolve_template_root(args: &GenerateArgs, config: &AppConfig) -> CliResult<PathBuf> {
    if let Some(root) = args
        .template_root
        .clone()
        .or_else(|| config.generator.template_root.clone())
    {
        return Ok(root);
    }

    discover_template_root().ok_or_else(|| CliError::TemplateRootNotFound {
        searched: search_paths(),
    })
}

fn build_assembler(
    template_root: &Path,
    output_root: &Path,
    templates_dir: Option<&Path>,
) -> ProjectAssembler {
    let assets: Box<dyn TemplateAssets> = match templates_dir {
        Some(dir) => Box::new(LayeredAssets::with_overrides(dir)),
        None => Box::new(BuiltinAssets::new()),
    };
    debug!(assets = %assets.describe(), "Template assets selected");

    ProjectAssembler::new(
        Box::new(JinjaRenderer::new(assets)),
        Box::new(LocalFilesystem::new()),
        TemplateLayout::new(template_root, output_root),
    )
}

// ── Presentation ──────────────────────────────────────────────────────────────

fn show_plan(
    request: &AppGenerationRequest,
    template_root: &Path,
    output_root: &Path,
    output: &OutputManager,
) -> CliResult<()> {
    let identity = request.identity();
    let module = request.module().map_err(|e| CliError::Core(e.into()))?;

    output.header("App configuration:")?;
    output.print(&format!("  Name:        {}", identity.name))?;
    output.print(&format!("  Slug:        {}", identity.slug))?;
    output.print(&format!("  iOS bundle:  {}", identity.ios_bundle_id))?;
    output.print(&format!("  Android:     {}", identity.android_package))?;
    output.print(&format!("  Scheme:      {}", identity.scheme))?;
    output.print(&format!("  Module:      {} ({})", module.name, module.id))?;
    output.print(&format!("  Template:    {}", template_root.display()))?;
    output.print(&format!("  Output root: {}", output_root.display()))?;
    output.print("")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    use std::io::IsTerminal as _;

    // Nothing to ask on a pipe; proceed as if `--yes` was given.
    if !std::io::stdin().is_terminal() {
        return Ok(true);
    }

    dialoguer::Confirm::new()
        .with_prompt("Generate this app?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "Failed to read confirmation".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    Ok(true)
}

/// JSON shape printed by `--output-format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateReport {
    #[serde(flatten)]
    result: GenerationResult,
    path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<PathBuf>>,
}

fn report_success(
    app: &GeneratedApp,
    request: &AppGenerationRequest,
    verbose: bool,
    output: &OutputManager,
) -> CliResult<()> {
    info!(app_id = %app.app_id, path = %app.path.display(), "Generation completed");

    if output.is_json() {
        output.json(&GenerateReport {
            result: app.to_result(),
            path: app.path.clone(),
            files: verbose.then(|| app.files.clone()),
        })?;
        return Ok(());
    }

    output.success(&format!("App '{}' generated!", request.app_name))?;
    output.print(&format!("  App id:  {}", app.app_id))?;
    output.print(&format!("  Path:    {}", app.path.display()))?;
    output.print(&format!("  Files:   {}", app.files.len()))?;

    if verbose {
        for file in &app.files {
            output.print(&format!("    {}", file.display()))?;
        }
    }

    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", app.path.display()))?;
    output.print("  npm install")?;
    output.print("  npx expo start")?;

    Ok(())
}
