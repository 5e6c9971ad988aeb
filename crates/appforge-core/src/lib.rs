//! appforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the appforge
//! mobile app generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          appforge-cli (CLI)             │
//! │      (Builds requests, shows results)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ProjectAssembler)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │  (Driven: Filesystem, Renderer, Assets) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    appforge-adapters (Infrastructure)   │
//! │ (LocalFilesystem, JinjaRenderer, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ModuleDefinition, manifests, naming)   │
//! │         No I/O, no adapters             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use appforge_core::prelude::*;
//!
//! let request = AppGenerationRequest::new("Test App", "test-app", module);
//! request.validate()?;
//!
//! let assembler = ProjectAssembler::new(
//!     Box::new(renderer),
//!     Box::new(filesystem),
//!     TemplateLayout::new("templates/expo-template", "generated-apps"),
//! );
//! let result = assembler.generate(&request);
//! assert!(result.success);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GeneratedApp, ProjectAssembler, TemplateLayout,
        ports::{Filesystem, TemplateAssets, TemplateName, TemplateRenderer},
    };
    pub use crate::domain::{
        AppGenerationRequest, AppIdentity, GenerationResult, ModuleApi, ModuleDefinition,
        ModuleInput, ModuleOutput, RenderContext,
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
