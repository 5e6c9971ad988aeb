//! Name normalization: identifier casing, slug checks, dependency specs.
//!
//! Everything here is pure and total. Callers decide what an invalid slug
//! means; these helpers only answer questions about strings.

use std::fmt;

/// Version range used when a dependency specifier carries none.
pub const LATEST: &str = "latest";

/// Convert a kebab-case slug into an identifier (`rizz-text-bot` → `RizzTextBot`).
///
/// Splits on `-`, upper-cases the first character of every non-empty segment
/// and joins the segments without a separator. Only the first character of a
/// segment is touched, so digits and other non-letters pass through as-is.
pub fn to_identifier_case(slug: &str) -> String {
    slug.split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Whether `value` is a kebab-case slug: `^[a-z0-9]+(-[a-z0-9]+)*$`.
///
/// Slugs double as directory names and identifier bases, so anything that is
/// unsafe for either is rejected.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// A parsed `name@range` dependency specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    pub name: String,
    pub version_range: String,
}

impl fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version_range)
    }
}

/// Split a raw dependency specifier into name and version range.
///
/// The split happens at the first `@` found from index 1 onwards, so a scoped
/// package keeps its leading `@`:
///
/// | input               | name          | version range |
/// |---------------------|---------------|---------------|
/// | `openai-client@^1`  | `openai-client` | `^1`        |
/// | `lodash`            | `lodash`      | `latest`      |
/// | `@scope/pkg@1.2.0`  | `@scope/pkg`  | `1.2.0`       |
/// | `@scope/pkg`        | `@scope/pkg`  | `latest`      |
///
/// An empty range (`lodash@`) is treated as `latest`.
pub fn parse_dependency_spec(spec: &str) -> DependencySpec {
    let split_at = spec
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '@')
        .map(|(idx, _)| idx);

    match split_at {
        Some(idx) => {
            let range = &spec[idx + 1..];
            DependencySpec {
                name: spec[..idx].to_string(),
                version_range: if range.is_empty() {
                    LATEST.to_string()
                } else {
                    range.to_string()
                },
            }
        }
        None => DependencySpec {
            name: spec.to_string(),
            version_range: LATEST.to_string(),
        },
    }
}
