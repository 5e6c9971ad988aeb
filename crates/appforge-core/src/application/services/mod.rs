//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate an app for this module".

pub mod layout;
pub mod project_assembler;

pub use layout::{
    ENTRY_POINT, OPTIONAL_DIRS, OPTIONAL_FILES, REQUIRED_FILES, TEMPLATE_SUFFIX, TemplateLayout,
};
pub use project_assembler::{GeneratedApp, ProjectAssembler};
