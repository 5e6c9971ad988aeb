//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;

pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "appforge",
    bin_name = "appforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Generate Expo apps from module definitions",
    long_about = "appforge turns a module definition and an app identity into a \
                  complete Expo / React Native project tree.",
    after_help = "EXAMPLES:\n\
        \x20 appforge generate --module rizz-text-bot --name \"Rizz Bot\" --slug rizz-bot\n\
        \x20 appforge generate --module-file ./my-module.json --name \"My App\" --slug my-app -o ./apps\n\
        \x20 appforge generate --request ./request.json --output-format json\n\
        \x20 appforge modules\n\
        \x20 appforge completions bash > /usr/share/bash-completion/completions/appforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate an app from a module.
    #[command(
        visible_alias = "gen",
        about = "Generate an app project",
        after_help = "EXAMPLES:\n\
            \x20 appforge generate --module image-generator --name \"Pix\" --slug pix\n\
            \x20 appforge gen --module rizz-text-bot --name \"Rizz\" --slug rizz --bundle-id com.acme.rizz\n\
            \x20 appforge gen --request ./request.json -o ./apps"
    )]
    Generate(GenerateArgs),

    /// List the built-in modules.
    #[command(
        visible_alias = "ls",
        about = "List available modules",
        after_help = "EXAMPLES:\n\
            \x20 appforge modules\n\
            \x20 appforge modules --format json"
    )]
    Modules(ModulesArgs),

    /// Initialise an appforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 appforge init\n\
            \x20 appforge init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 appforge completions bash > ~/.local/share/bash-completion/completions/appforge\n\
            \x20 appforge completions zsh  > ~/.zfunc/_appforge\n\
            \x20 appforge completions fish > ~/.config/fish/completions/appforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the appforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 appforge config get generator.output_root\n\
            \x20 appforge config list\n\
            \x20 appforge config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `appforge generate`.
///
/// Exactly one module source is required: a registry id, a module JSON file,
/// or a full request file.  Identity flags override fields of `--request`.
#[derive(Debug, Args)]
#[command(group(
    clap::ArgGroup::new("source")
        .required(true)
        .args(["module", "module_file", "request"]),
))]
pub struct GenerateArgs {
    /// Built-in module id.
    #[arg(
        short = 'm',
        long = "module",
        value_name = "ID",
        help = "Module id from the built-in registry (see `appforge modules`)"
    )]
    pub module: Option<String>,

    /// Module definition JSON file.
    #[arg(
        long = "module-file",
        value_name = "PATH",
        help = "Read the module definition from a JSON file"
    )]
    pub module_file: Option<PathBuf>,

    /// Full generation request JSON file.
    #[arg(
        long = "request",
        value_name = "PATH",
        help = "Read a complete AppGenerationRequest from a JSON file"
    )]
    pub request: Option<PathBuf>,

    /// Display name of the app.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "App display name")]
    pub name: Option<String>,

    /// URL-safe app slug.
    #[arg(short = 's', long = "slug", value_name = "SLUG", help = "App slug (e.g. my-app)")]
    pub slug: Option<String>,

    #[arg(long = "bundle-id", value_name = "ID", help = "iOS bundle identifier")]
    pub bundle_id: Option<String>,

    #[arg(long = "package-name", value_name = "NAME", help = "Android package name")]
    pub package_name: Option<String>,

    #[arg(long = "scheme", value_name = "SCHEME", help = "Deep-link URL scheme")]
    pub scheme: Option<String>,

    #[arg(long = "description", value_name = "TEXT", help = "App description")]
    pub description: Option<String>,

    #[arg(long = "icon-url", value_name = "URL", help = "App icon URL")]
    pub icon_url: Option<String>,

    /// Where `app-<id>` directories are created.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output root (default: generator.output_root or ./generated-apps)"
    )]
    pub output: Option<PathBuf>,

    /// Base Expo project to copy.
    #[arg(
        long = "template-root",
        value_name = "DIR",
        help = "Template root directory (default: auto-discovered)"
    )]
    pub template_root: Option<PathBuf>,

    /// Directory of renderer template overrides.
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        help = "Directory with module-component.tsx.j2 / module-service.ts.j2 / readme.md.j2 overrides"
    )]
    pub templates_dir: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and generate immediately")]
    pub yes: bool,
}

// ── modules ───────────────────────────────────────────────────────────────────

/// Arguments for `appforge modules`.
#[derive(Debug, Args)]
pub struct ModulesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `modules` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array of module definitions.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `appforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `appforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `appforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generator.output_root`.
        key: String,
    },

    /// Print all configuration values.
    List,

    /// Print the path to the active configuration file.
    Path,
}
