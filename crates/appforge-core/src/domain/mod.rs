// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for appforge.
//!
//! This module contains the pure data transformations of app generation:
//! the module/request/result model, name normalization, the render context
//! and the manifest merges. All I/O (reading the template root, rendering
//! named templates, writing the project) is handled via ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Data crates only**: std + serde/serde_json for the wire model, chrono for timestamps
//! - **Value objects**: All domain objects are Clone + PartialEq
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod manifest;
pub mod naming;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    AppGenerationRequest, AppIdentity, DEFAULT_BUNDLE_PREFIX, GenerationResult, ModuleApi,
    ModuleDefinition, ModuleInput, ModuleOutput, ModuleRoute, RenderContext, keys,
};

pub use error::{DomainError, ErrorCategory};

pub use manifest::{
    APP_MANIFEST, AppPatch, PACKAGE_MANIFEST, PackagePatch, merge_app_manifest,
    merge_package_manifest, to_manifest_string,
};

pub use naming::{DependencySpec, is_valid_slug, parse_dependency_spec, to_identifier_case};

pub use validation::DomainValidator;
