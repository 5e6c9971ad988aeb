//! Built-in module registry.
//!
//! The modules the generator can build without a module file. Definitions
//! are compiled in as JSON and validated when the registry loads.

use appforge_core::{
    domain::{DomainValidator, ModuleDefinition},
    error::{ForgeError, ForgeResult},
};
use tracing::debug;

const BUILTIN_MODULES: &str = include_str!("../assets/modules.json");

/// In-memory registry of module definitions.
#[derive(Debug, Clone)]
pub struct BuiltinRegistry {
    modules: Vec<ModuleDefinition>,
}

impl BuiltinRegistry {
    /// Load the bundled modules.
    pub fn load() -> ForgeResult<Self> {
        Self::from_json(BUILTIN_MODULES)
    }

    /// Parse and validate a JSON array of module definitions.
    pub fn from_json(json: &str) -> ForgeResult<Self> {
        let modules: Vec<ModuleDefinition> =
            serde_json::from_str(json).map_err(|e| ForgeError::Configuration {
                message: format!("invalid module registry: {e}"),
            })?;

        for module in &modules {
            DomainValidator::validate_module(module)?;
        }

        debug!(count = modules.len(), "module registry loaded");
        Ok(Self { modules })
    }

    pub fn list(&self) -> &[ModuleDefinition] {
        &self.modules
    }

    pub fn get(&self, id: &str) -> Option<&ModuleDefinition> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.id.as_str())
    }
}
