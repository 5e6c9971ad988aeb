pub mod module;
pub mod render_context;
pub mod request;
pub mod result;

pub use module::{ModuleApi, ModuleDefinition, ModuleInput, ModuleOutput, ModuleRoute};
pub use render_context::{RenderContext, keys};
pub use request::{AppGenerationRequest, AppIdentity, DEFAULT_BUNDLE_PREFIX};
pub use result::GenerationResult;
