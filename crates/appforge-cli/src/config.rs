//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `APPS_OUTPUT_PATH` (output root only)
//! 3. `APPFORGE_*` environment variables, `__` between nesting levels
//!    (`APPFORGE_GENERATOR__OUTPUT_ROOT=./out`)
//! 4. TOML config file (`--config` or the platform config dir)
//! 5. Built-in defaults (always present)

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Legacy variable naming the output root.
pub const OUTPUT_PATH_ENV: &str = "APPS_OUTPUT_PATH";

/// Prefix for structured environment overrides.
pub const ENV_PREFIX: &str = "APPFORGE";

/// Output root used when nothing else is configured.
pub const DEFAULT_OUTPUT_ROOT: &str = "generated-apps";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where templates come from and where apps go.
    pub generator: GeneratorConfig,

    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base Expo project; auto-discovered when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_root: Option<PathBuf>,

    pub output_root: PathBuf,

    /// Renderer template overrides, layered over the built-ins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_root: None,
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            templates_dir: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file and the process environment.
    ///
    /// `config_file` is the path passed via `--config`; `None` falls back to
    /// [`Self::config_path`].  A missing file is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        let output_path = std::env::var(OUTPUT_PATH_ENV).ok().filter(|v| !v.is_empty());
        Self::build(&path, None, output_path)
    }

    /// Layer the sources.  `env` replaces the process environment when given.
    fn build(
        file: &Path,
        env: Option<HashMap<String, String>>,
        output_path: Option<String>,
    ) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialise default config")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(File::from(file).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .set_override_option("generator.output_root", output_path)
            .context("Failed to apply APPS_OUTPUT_PATH")?
            .build()
            .with_context(|| format!("Failed to read configuration from {}", file.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has an invalid shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.appforge.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "appforge", "appforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".appforge.toml"))
    }
}
