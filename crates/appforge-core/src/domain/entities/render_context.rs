//! Placeholder context handed to the template renderer.

use chrono::{Datelike, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::entities::{module::ModuleDefinition, request::AppGenerationRequest};

/// Placeholder keys understood by the bundled templates.
///
/// Keys are `SCREAMING_SNAKE_CASE`; values are strings except `INPUTS`,
/// `OUTPUTS` (lists of records) and `API_HEADERS` (an object).
pub mod keys {
    pub const MODULE_NAME: &str = "MODULE_NAME";
    pub const MODULE_COMPONENT: &str = "MODULE_COMPONENT";
    pub const MODULE_DESCRIPTION: &str = "MODULE_DESCRIPTION";
    pub const API_ENDPOINT: &str = "API_ENDPOINT";
    pub const API_METHOD: &str = "API_METHOD";
    pub const API_HEADERS: &str = "API_HEADERS";
    pub const INPUTS: &str = "INPUTS";
    pub const OUTPUTS: &str = "OUTPUTS";
    pub const APP_NAME: &str = "APP_NAME";
    pub const APP_SLUG: &str = "APP_SLUG";
    pub const APP_DESCRIPTION: &str = "APP_DESCRIPTION";
    pub const GENERATED_AT: &str = "GENERATED_AT";
    pub const YEAR: &str = "YEAR";
}

/// Context for template rendering.
///
/// A value object: `with_*` methods consume and return a new context. The
/// generation timestamp (`GENERATED_AT`, `YEAR`) is filled in at construction
/// so every file rendered from one context agrees on it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    values: Map<String, Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        let now = Utc::now();
        let mut values = Map::new();
        values.insert(keys::GENERATED_AT.into(), Value::String(now.to_rfc3339()));
        values.insert(keys::YEAR.into(), Value::String(now.year().to_string()));
        Self { values }
    }

    /// Context for the component, service and entry-point templates.
    ///
    /// `MODULE_NAME` is the module *id* here; inputs and outputs pass through
    /// verbatim as lists of records.
    pub fn for_module(module: &ModuleDefinition, request: &AppGenerationRequest) -> Self {
        Self::new()
            .with_variable(keys::MODULE_NAME, &module.id)
            .with_variable(keys::MODULE_COMPONENT, module.component_name())
            .with_variable(keys::MODULE_DESCRIPTION, &module.description)
            .with_variable(keys::API_ENDPOINT, &module.api.endpoint)
            .with_variable(keys::API_METHOD, &module.api.method)
            .with_serialized(keys::API_HEADERS, &module.api.headers)
            .with_serialized(keys::INPUTS, &module.inputs)
            .with_serialized(keys::OUTPUTS, &module.outputs)
            .with_variable(keys::APP_NAME, &request.app_name)
            .with_variable(keys::APP_SLUG, &request.app_slug)
    }

    /// Context for the README, where `MODULE_NAME` is the human-readable name.
    pub fn for_readme(module: &ModuleDefinition, request: &AppGenerationRequest) -> Self {
        Self::new()
            .with_variable(keys::APP_NAME, &request.app_name)
            .with_variable(keys::APP_SLUG, &request.app_slug)
            .with_variable(keys::APP_DESCRIPTION, request.app_description())
            .with_variable(keys::MODULE_NAME, &module.name)
            .with_variable(keys::MODULE_DESCRIPTION, &module.description)
    }

    /// Add or override a string variable.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl AsRef<str>) -> Self {
        self.values
            .insert(key.into(), Value::String(value.as_ref().to_string()));
        self
    }

    /// Add or override a structured variable.
    pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    fn with_serialized<T: Serialize + ?Sized>(self, key: &str, value: &T) -> Self {
        // Module records are plain data; serialization cannot fail for them.
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.with_value(key, value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String value of a variable, `None` if absent or structured.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// The whole context as a JSON object, ready for a template engine.
    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}
