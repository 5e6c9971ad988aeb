//! Structural patches for the template's JSON manifests.
//!
//! Both merges take the parsed document by value and return the patched one.
//! They only touch the fields they name; everything else, nested or not, is
//! carried through untouched.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::domain::{entities::request::AppIdentity, error::DomainError, naming::DependencySpec};

pub const PACKAGE_MANIFEST: &str = "package.json";
pub const APP_MANIFEST: &str = "app.json";

/// Patch for `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackagePatch {
    pub name: String,
    /// Dependency name → version range. Additions win on collision.
    pub dependency_additions: BTreeMap<String, String>,
}

impl PackagePatch {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependency_additions: BTreeMap::new(),
        }
    }

    /// Collect parsed specifiers; a later duplicate overrides an earlier one.
    pub fn with_dependencies(mut self, specs: impl IntoIterator<Item = DependencySpec>) -> Self {
        for spec in specs {
            self.dependency_additions
                .insert(spec.name, spec.version_range);
        }
        self
    }
}

/// Patch for `app.json`: the five identity paths under `expo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPatch {
    pub name: String,
    pub slug: String,
    pub ios_bundle_id: String,
    pub android_package: String,
    pub scheme: String,
}

impl From<AppIdentity> for AppPatch {
    fn from(identity: AppIdentity) -> Self {
        Self {
            name: identity.name,
            slug: identity.slug,
            ios_bundle_id: identity.ios_bundle_id,
            android_package: identity.android_package,
            scheme: identity.scheme,
        }
    }
}

/// Set `name` and union the dependency map.
///
/// A manifest without `dependencies` gets one. Idempotent: applying the same
/// patch twice gives the same document as applying it once.
pub fn merge_package_manifest(existing: Value, patch: &PackagePatch) -> Result<Value, DomainError> {
    let mut root = into_object(existing, PACKAGE_MANIFEST)?;

    root.insert("name".into(), Value::String(patch.name.clone()));

    let deps = root
        .entry("dependencies")
        .or_insert_with(|| Value::Object(Map::new()));
    let deps = deps
        .as_object_mut()
        .ok_or_else(|| DomainError::ManifestMalformed {
            manifest: PACKAGE_MANIFEST,
            reason: "'dependencies' is not an object".into(),
        })?;

    for (name, range) in &patch.dependency_additions {
        deps.insert(name.clone(), Value::String(range.clone()));
    }

    Ok(Value::Object(root))
}

/// Overwrite `expo.{name,slug,scheme}`, `expo.ios.bundleIdentifier` and
/// `expo.android.package`.
///
/// `expo`, `expo.ios` and `expo.android` must already exist as objects; a
/// template whose manifest lacks them is broken and fails with
/// [`DomainError::ManifestFieldMissing`].
pub fn merge_app_manifest(existing: Value, patch: &AppPatch) -> Result<Value, DomainError> {
    let mut root = into_object(existing, APP_MANIFEST)?;

    let expo = object_at(&mut root, "expo", "expo")?;
    expo.insert("name".into(), Value::String(patch.name.clone()));
    expo.insert("slug".into(), Value::String(patch.slug.clone()));
    expo.insert("scheme".into(), Value::String(patch.scheme.clone()));

    object_at(expo, "ios", "expo.ios")?.insert(
        "bundleIdentifier".into(),
        Value::String(patch.ios_bundle_id.clone()),
    );
    object_at(expo, "android", "expo.android")?.insert(
        "package".into(),
        Value::String(patch.android_package.clone()),
    );

    Ok(Value::Object(root))
}

/// Serialize a manifest the way npm and Expo tooling write them.
pub fn to_manifest_string(value: &Value) -> String {
    // Serializing a `Value` to a String cannot fail.
    let mut out = serde_json::to_string_pretty(value).unwrap_or_default();
    out.push('\n');
    out
}

fn into_object(value: Value, manifest: &'static str) -> Result<Map<String, Value>, DomainError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DomainError::ManifestMalformed {
            manifest,
            reason: format!("expected a JSON object at the root, found {}", kind_of(&other)),
        }),
    }
}

fn object_at<'a>(
    parent: &'a mut Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a mut Map<String, Value>, DomainError> {
    parent
        .get_mut(key)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| DomainError::ManifestFieldMissing {
            manifest: APP_MANIFEST,
            path: path.to_string(),
        })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::naming::parse_dependency_spec;
    use serde_json::json;

    fn package() -> Value {
        json!({
            "name": "expo-template",
            "version": "1.0.0",
            "main": "node_modules/expo/AppEntry.js",
            "scripts": { "start": "expo start" },
            "dependencies": {
                "expo": "~50.0.0",
                "openai-client": "^0.9.0"
            }
        })
    }

    fn app() -> Value {
        json!({
            "expo": {
                "name": "template",
                "slug": "template",
                "version": "1.0.0",
                "orientation": "portrait",
                "splash": { "image": "./assets/splash.png", "backgroundColor": "#ffffff" },
                "ios": { "supportsTablet": true },
                "android": { "adaptiveIcon": { "backgroundColor": "#ffffff" } }
            },
            "extra": { "a": 1 }
        })
    }

    fn app_patch() -> AppPatch {
        AppPatch {
            name: "Test App".into(),
            slug: "test-app".into(),
            ios_bundle_id: "com.jarvis.test-app".into(),
            android_package: "com.jarvis.test-app".into(),
            scheme: "test-app".into(),
        }
    }

    // ── package.json ──────────────────────────────────────────────────────

    #[test]
    fn package_merge_sets_name_and_unions_dependencies() {
        let patch = PackagePatch::new("test-app").with_dependencies([
            parse_dependency_spec("openai-client@^1.0.0"),
            parse_dependency_spec("lodash"),
        ]);

        let merged = merge_package_manifest(package(), &patch).unwrap();

        assert_eq!(merged["name"], json!("test-app"));
        assert_eq!(
            merged["dependencies"],
            json!({ "expo": "~50.0.0", "openai-client": "^1.0.0", "lodash": "latest" })
        );
    }

    #[test]
    fn package_merge_passes_other_fields_through() {
        let merged = merge_package_manifest(package(), &PackagePatch::new("x")).unwrap();
        assert_eq!(merged["scripts"], package()["scripts"]);
        assert_eq!(merged["main"], package()["main"]);
        assert_eq!(merged["version"], json!("1.0.0"));
    }

    #[test]
    fn package_merge_is_idempotent() {
        let patch =
            PackagePatch::new("a").with_dependencies([parse_dependency_spec("axios@^1.6.0")]);

        let once = merge_package_manifest(package(), &patch).unwrap();
        let twice = merge_package_manifest(once.clone(), &patch).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn package_merge_creates_missing_dependencies() {
        let merged = merge_package_manifest(
            json!({ "name": "bare" }),
            &PackagePatch::new("bare").with_dependencies([parse_dependency_spec("a@1")]),
        )
        .unwrap();
        assert_eq!(merged["dependencies"], json!({ "a": "1" }));
    }

    #[test]
    fn later_duplicate_addition_wins() {
        let patch = PackagePatch::new("a").with_dependencies([
            parse_dependency_spec("dup@1"),
            parse_dependency_spec("dup@2"),
        ]);
        assert_eq!(patch.dependency_additions["dup"], "2");
    }

    #[test]
    fn package_merge_rejects_non_object_dependencies() {
        let err = merge_package_manifest(
            json!({ "dependencies": ["expo"] }),
            &PackagePatch::new("a"),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::ManifestMalformed { .. }));
    }

    #[test]
    fn package_merge_rejects_non_object_root() {
        let err = merge_package_manifest(json!([1, 2]), &PackagePatch::new("a")).unwrap_err();
        assert!(matches!(
            err,
            DomainError::ManifestMalformed { reason, .. } if reason.contains("an array")
        ));
    }

    // ── app.json ──────────────────────────────────────────────────────────

    #[test]
    fn app_merge_patches_the_five_paths() {
        let merged = merge_app_manifest(app(), &app_patch()).unwrap();
        let expo = &merged["expo"];

        assert_eq!(expo["name"], json!("Test App"));
        assert_eq!(expo["slug"], json!("test-app"));
        assert_eq!(expo["scheme"], json!("test-app"));
        assert_eq!(expo["ios"]["bundleIdentifier"], json!("com.jarvis.test-app"));
        assert_eq!(expo["android"]["package"], json!("com.jarvis.test-app"));
    }

    #[test]
    fn app_merge_preserves_everything_else() {
        let original = app();
        let merged = merge_app_manifest(original.clone(), &app_patch()).unwrap();

        assert_eq!(merged["extra"], json!({ "a": 1 }));
        assert_eq!(merged["expo"]["splash"], original["expo"]["splash"]);
        assert_eq!(merged["expo"]["orientation"], json!("portrait"));
        assert_eq!(merged["expo"]["ios"]["supportsTablet"], json!(true));
        assert_eq!(
            merged["expo"]["android"]["adaptiveIcon"],
            original["expo"]["android"]["adaptiveIcon"]
        );
    }

    #[test]
    fn app_merge_keeps_key_order() {
        let merged = merge_app_manifest(app(), &app_patch()).unwrap();
        let keys: Vec<_> = merged["expo"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            &keys[..7],
            ["name", "slug", "version", "orientation", "splash", "ios", "android"]
        );
    }

    #[test]
    fn app_merge_requires_nested_objects() {
        for (manifest, missing) in [
            (json!({ "name": "x" }), "expo"),
            (json!({ "expo": { "android": {} } }), "expo.ios"),
            (json!({ "expo": { "ios": {} } }), "expo.android"),
            (json!({ "expo": { "ios": "nope", "android": {} } }), "expo.ios"),
        ] {
            let err = merge_app_manifest(manifest, &app_patch()).unwrap_err();
            assert_eq!(
                err,
                DomainError::ManifestFieldMissing {
                    manifest: APP_MANIFEST,
                    path: missing.into(),
                }
            );
        }
    }

    #[test]
    fn manifest_string_is_pretty_with_trailing_newline() {
        let s = to_manifest_string(&json!({ "a": { "b": 1 } }));
        assert_eq!(s, "{\n  \"a\": {\n    \"b\": 1\n  }\n}\n");
    }
}
