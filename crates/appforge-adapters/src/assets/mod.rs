//! Template asset providers.
//!
//! The renderer asks a [`TemplateAssets`] provider for the source text of
//! each named template. Three providers ship:
//!
//! - [`BuiltinAssets`]: compiled into the binary, always complete
//! - [`DirectoryAssets`]: `<dir>/<TemplateName::file_name()>`, for overrides
//! - [`LayeredAssets`]: first provider that has the template wins
//!
//! [`TemplateAssets`]: appforge_core::application::ports::TemplateAssets

mod builtin;
mod directory;
mod layered;

pub use builtin::BuiltinAssets;
pub use directory::DirectoryAssets;
pub use layered::LayeredAssets;
