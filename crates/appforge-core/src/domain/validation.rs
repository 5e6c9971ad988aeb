use crate::domain::{
    entities::{AppGenerationRequest, ModuleDefinition},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    /// Engine-side check of the module shape the generator depends on.
    pub fn validate_module(module: &ModuleDefinition) -> Result<(), DomainError> {
        module.validate()
    }

    /// Caller-side check: `appName`, `appSlug` and `module` must be present.
    pub fn validate_request(request: &AppGenerationRequest) -> Result<(), DomainError> {
        request.validate()
    }
}
