use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{error::DomainError, naming};

/// A reusable, declaratively described feature unit.
///
/// The wire shape is camelCase JSON, matching what the module registry
/// publishes. Only `id`, `name` and `api` are mandatory on the wire; every
/// list defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDefinition {
    /// Slug-safe identity. Used as a directory name and as the base of the
    /// generated component identifier.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub inputs: Vec<ModuleInput>,
    #[serde(default)]
    pub outputs: Vec<ModuleOutput>,
    #[serde(default)]
    pub routes: Vec<ModuleRoute>,
    /// Raw specifiers such as `openai-client@^1.0.0`.
    #[serde(default)]
    pub dependencies: Vec<String>,
    pub api: ModuleApi,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInput {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleOutput {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRoute {
    pub screen: String,
    pub component: String,
}

/// The backend call a module makes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleApi {
    pub endpoint: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl ModuleDefinition {
    /// Identifier-cased component name (`rizz-text-bot` → `RizzTextBot`).
    pub fn component_name(&self) -> String {
        naming::to_identifier_case(&self.id)
    }

    /// File stem of the generated service (`rizz-text-botService`).
    pub fn service_name(&self) -> String {
        format!("{}Service", self.id)
    }

    /// Parsed dependency specifiers, in declaration order.
    pub fn dependency_specs(&self) -> impl Iterator<Item = naming::DependencySpec> + '_ {
        self.dependencies
            .iter()
            .map(|raw| naming::parse_dependency_spec(raw))
    }

    /// Check the fields the generator relies on.
    ///
    /// The registry is trusted for everything else; this only guards against
    /// definitions that would produce unusable paths or empty API bindings.
    pub fn validate(&self) -> Result<(), DomainError> {
        if !naming::is_valid_slug(&self.id) {
            return Err(DomainError::InvalidSlug {
                field: "module id",
                value: self.id.clone(),
            });
        }

        let reject = |reason: &str| DomainError::InvalidModule {
            module_id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(reject("name is empty"));
        }
        if self.api.endpoint.trim().is_empty() {
            return Err(reject("api.endpoint is empty"));
        }
        if self.api.method.trim().is_empty() {
            return Err(reject("api.method is empty"));
        }
        if let Some(raw) = self.dependencies.iter().find(|d| d.trim().is_empty()) {
            return Err(reject(&format!("blank dependency specifier {raw:?}")));
        }

        Ok(())
    }
}
