//! Dependency version resolution for build manifests.
//!
//! [`resolve`] parses manifest text and replaces property references in
//! dependency versions with the values declared in `<properties>`:
//!
//! | `<version>` | Resolved version |
//! |---|---|
//! | absent | [`DEFAULT_VERSION`] (`"Default"`) |
//! | `${key}`, key declared | the property's value, verbatim |
//! | `${key}`, key not declared | [`UNRESOLVED_VERSION`] (`"N/A"`) |
//! | anything else | the text, verbatim |
//!
//! Substitution is exactly one level deep: a property whose value is itself a
//! `${...}` reference is returned as-is, which also rules out reference cycles.
//!
//! The two sentinels describe different situations but the upstream format makes
//! them look alike in output. [`ResolvedDependency::resolution`] keeps the
//! distinction for callers that need to report it.
//!
//! # Example
//!
//! ```rust,no_run
//! use devboard_cli::resolver::resolve;
//!
//! let resolved = resolve(
//!     "<project>
//!        <properties><my.version>1.0.0</my.version></properties>
//!        <dependencies>
//!          <dependency><artifactId>dep1</artifactId><version>${my.version}</version></dependency>
//!        </dependencies>
//!      </project>",
//! )?;
//! assert_eq!(resolved.dependencies[0].version, "1.0.0");
//! # Ok::<(), devboard_cli::core::DevboardError>(())
//! ```

use crate::constants::{DEFAULT_VERSION, PROPERTY_REF_CLOSE, PROPERTY_REF_OPEN, UNRESOLVED_VERSION};
use crate::core::Result;
use crate::manifest::{DependencyDeclaration, ManifestDocument, ParentRef};
use serde::Serialize;

/// Output of [`resolve`]: the parent reference and resolved dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedManifest {
    pub parent: Option<ParentRef>,
    pub dependencies: Vec<ResolvedDependency>,
}

/// A dependency with its final version string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedDependency {
    pub artifact_id: String,
    pub version: String,
    /// How `version` was obtained. Not part of the serialized output.
    #[serde(skip)]
    pub resolution: VersionResolution,
}

/// Provenance of a resolved version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionResolution {
    /// The `<version>` text was used verbatim.
    Literal,
    /// A `${key}` reference was replaced by the declared property.
    Property {
        key: String,
    },
    /// No `<version>` element; reported as [`DEFAULT_VERSION`].
    Default,
    /// A `${key}` reference named an undeclared property; reported as
    /// [`UNRESOLVED_VERSION`].
    Unresolved {
        key: String,
    },
}

impl ResolvedManifest {
    /// Dependencies whose property reference could not be resolved.
    pub fn unresolved(&self) -> impl Iterator<Item = &ResolvedDependency> {
        self.dependencies
            .iter()
            .filter(|dep| matches!(dep.resolution, VersionResolution::Unresolved { .. }))
    }
}

/// Parse manifest text and resolve every dependency version.
///
/// # Errors
///
/// Propagates the parse and schema errors of [`ManifestDocument::parse`]. No
/// partial result is returned.
pub fn resolve(raw_document: &str) -> Result<ResolvedManifest> {
    let document = ManifestDocument::parse(raw_document)?;
    Ok(resolve_document(&document))
}

/// Resolve the dependencies of an already parsed manifest.
///
/// Output order matches declaration order and duplicates are preserved.
#[must_use]
pub fn resolve_document(document: &ManifestDocument) -> ResolvedManifest {
    ResolvedManifest {
        parent: document.parent.clone(),
        dependencies: document
            .dependencies
            .iter()
            .map(|declaration| resolve_dependency(document, declaration))
            .collect(),
    }
}

fn resolve_dependency(
    document: &ManifestDocument,
    declaration: &DependencyDeclaration,
) -> ResolvedDependency {
    let (version, resolution) = match declaration.raw_version.as_deref() {
        None => (DEFAULT_VERSION.to_string(), VersionResolution::Default),
        Some(raw) => match property_key(raw) {
            Some(key) => match document.property(key) {
                Some(value) => (
                    value.to_string(),
                    VersionResolution::Property {
                        key: key.to_string(),
                    },
                ),
                None => (
                    UNRESOLVED_VERSION.to_string(),
                    VersionResolution::Unresolved {
                        key: key.to_string(),
                    },
                ),
            },
            None => (raw.to_string(), VersionResolution::Literal),
        },
    };

    ResolvedDependency {
        artifact_id: declaration.artifact_id.clone(),
        version,
        resolution,
    }
}

/// Extract the key of a `${key}` property reference.
///
/// Returns `None` when `raw` is not wrapped in the reference markers. The check
/// is purely syntactic, so `${}` yields an empty key.
#[must_use]
pub fn property_key(raw: &str) -> Option<&str> {
    raw.strip_prefix(PROPERTY_REF_OPEN)?.strip_suffix(PROPERTY_REF_CLOSE)
}
