//! Infrastructure adapters for appforge.
//!
//! This crate implements the ports defined in `appforge-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod assets;
pub mod filesystem;
pub mod registry;
pub mod renderer;
pub mod template_root;

// Re-export commonly used adapters
pub use assets::{BuiltinAssets, DirectoryAssets, LayeredAssets};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use registry::BuiltinRegistry;
pub use renderer::JinjaRenderer;
pub use template_root::{discover_template_root, missing_required_files, search_paths};
