//! Application layer for appforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectAssembler)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Naming rules and manifest merges live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GeneratedApp, ProjectAssembler, TemplateLayout};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateAssets, TemplateName, TemplateRenderer};

pub use error::ApplicationError;
