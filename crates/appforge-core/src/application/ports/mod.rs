//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `appforge-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateRenderer`: Named and inline template rendering
//!   - `TemplateAssets`: Source text of the named templates
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `ProjectAssembler::generate` / `try_generate`, called by the CLI

pub mod output;

pub use output::{Filesystem, TemplateAssets, TemplateName, TemplateRenderer};
