use serde::{Deserialize, Serialize};

use crate::domain::{entities::module::ModuleDefinition, error::DomainError, naming};

/// Reverse-DNS prefix used when a request omits its bundle id / package name.
pub const DEFAULT_BUNDLE_PREFIX: &str = "com.jarvis";

/// Everything needed to generate one application.
///
/// `bundle_id`, `package_name` and `app_scheme` are optional; [`identity`]
/// resolves them from `app_slug`. `module` is optional only so that a request
/// without one can be deserialized and rejected by [`validate`] with a proper
/// message instead of a serde error.
///
/// [`identity`]: AppGenerationRequest::identity
/// [`validate`]: AppGenerationRequest::validate
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppGenerationRequest {
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub app_slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<ModuleDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Resolved application identity written into the app manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub name: String,
    pub slug: String,
    pub ios_bundle_id: String,
    pub android_package: String,
    pub scheme: String,
}

impl AppGenerationRequest {
    pub fn new(
        app_name: impl Into<String>,
        app_slug: impl Into<String>,
        module: ModuleDefinition,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            app_slug: app_slug.into(),
            module: Some(module),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_bundle_id(mut self, bundle_id: impl Into<String>) -> Self {
        self.bundle_id = Some(bundle_id.into());
        self
    }

    pub fn with_package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.app_scheme = Some(scheme.into());
        self
    }

    /// Caller-side validation: `appName`, `appSlug` and `module` must be present.
    ///
    /// The slug must also be kebab-case since it becomes the package name.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.app_name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "appName" });
        }
        if self.app_slug.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "appSlug" });
        }
        if !naming::is_valid_slug(&self.app_slug) {
            return Err(DomainError::InvalidSlug {
                field: "appSlug",
                value: self.app_slug.clone(),
            });
        }
        match &self.module {
            Some(module) => module.validate(),
            None => Err(DomainError::MissingRequiredField { field: "module" }),
        }
    }

    /// The module, or a `MissingRequiredField` error.
    pub fn module(&self) -> Result<&ModuleDefinition, DomainError> {
        self.module
            .as_ref()
            .ok_or(DomainError::MissingRequiredField { field: "module" })
    }

    /// Resolve identity fields, defaulting the optional ones from the slug.
    ///
    /// Empty strings count as absent.
    pub fn identity(&self) -> AppIdentity {
        let or_default = |value: &Option<String>, fallback: String| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };
        let reverse_dns = format!("{DEFAULT_BUNDLE_PREFIX}.{}", self.app_slug);

        AppIdentity {
            name: self.app_name.clone(),
            slug: self.app_slug.clone(),
            ios_bundle_id: or_default(&self.bundle_id, reverse_dns.clone()),
            android_package: or_default(&self.package_name, reverse_dns),
            scheme: or_default(&self.app_scheme, self.app_slug.clone()),
        }
    }

    /// README description, falling back to `"A <module name> app"`.
    pub fn app_description(&self) -> String {
        match self.description.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => format!(
                "A {} app",
                self.module.as_ref().map_or("", |m| m.name.as_str())
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::module::ModuleApi;

    fn module() -> ModuleDefinition {
        ModuleDefinition {
            id: "rizz-text-bot".into(),
            name: "Rizz".into(),
            description: String::new(),
            icon: None,
            inputs: vec![],
            outputs: vec![],
            routes: vec![],
            dependencies: vec![],
            api: ModuleApi {
                endpoint: "https://x/rizz".into(),
                method: "POST".into(),
                headers: Default::default(),
            },
        }
    }

    #[test]
    fn identity_defaults_from_slug() {
        let identity = AppGenerationRequest::new("Test App", "test-app", module()).identity();

        assert_eq!(identity.name, "Test App");
        assert_eq!(identity.ios_bundle_id, "com.jarvis.test-app");
        assert_eq!(identity.android_package, "com.jarvis.test-app");
        assert_eq!(identity.scheme, "test-app");
    }

    #[test]
    fn explicit_identity_fields_win() {
        let identity = AppGenerationRequest::new("Test", "test", module())
            .with_bundle_id("com.acme.test")
            .with_package_name("com.acme.test_android")
            .with_scheme("acme")
            .identity();

        assert_eq!(identity.ios_bundle_id, "com.acme.test");
        assert_eq!(identity.android_package, "com.acme.test_android");
        assert_eq!(identity.scheme, "acme");
    }

    #[test]
    fn blank_identity_fields_count_as_absent() {
        let identity = AppGenerationRequest::new("Test", "test", module())
            .with_bundle_id("")
            .identity();
        assert_eq!(identity.ios_bundle_id, "com.jarvis.test");
    }

    #[test]
    fn validate_requires_name_slug_and_module() {
        let mut request = AppGenerationRequest::new("", "test", module());
        assert_eq!(
            request.validate(),
            Err(DomainError::MissingRequiredField { field: "appName" })
        );

        request.app_name = "Test".into();
        request.module = None;
        assert_eq!(
            request.validate(),
            Err(DomainError::MissingRequiredField { field: "module" })
        );
    }

    #[test]
    fn validate_rejects_non_slug() {
        let request = AppGenerationRequest::new("Test", "Test App", module());
        assert!(matches!(
            request.validate(),
            Err(DomainError::InvalidSlug { field: "appSlug", .. })
        ));
    }

    #[test]
    fn request_without_module_deserializes_then_fails_validation() {
        let request: AppGenerationRequest =
            serde_json::from_str(r#"{"appName":"A","appSlug":"a"}"#).unwrap();
        assert!(request.module().is_err());
        assert!(request.validate().is_err());
    }

    #[test]
    fn description_falls_back_to_module_name() {
        let request = AppGenerationRequest::new("Test", "test", module());
        assert_eq!(request.app_description(), "A Rizz app");
        assert_eq!(
            request.with_description("Flirt better").app_description(),
            "Flirt better"
        );
    }
}
