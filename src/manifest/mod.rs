//! Build-manifest parsing.
//!
//! This module turns the raw text of a Maven-style `pom.xml`, as returned verbatim
//! by the repository-contents endpoint, into a typed [`ManifestDocument`]. Only the
//! three parts the dashboard needs are extracted:
//!
//! ```xml
//! <project>
//!   <properties>
//!     <my.version>1.0.0</my.version>
//!   </properties>
//!   <parent>
//!     <artifactId>parent-artifact</artifactId>
//!     <version>2.0.0</version>
//!   </parent>
//!   <dependencies>
//!     <dependency>
//!       <artifactId>dep1</artifactId>
//!       <version>${my.version}</version>
//!     </dependency>
//!   </dependencies>
//! </project>
//! ```
//!
//! # Rules
//!
//! - The root element must be `<project>`. A leading DOCTYPE declaration is
//!   accepted.
//! - `<properties>` is optional; only the first occurrence is read, and a key
//!   declared twice keeps its last value.
//! - `<parent>` is optional; when present both `artifactId` and `version` are
//!   required and are taken verbatim.
//! - `<dependencies>` is required. An empty section is valid and yields no
//!   dependencies; a missing one is a [`DevboardError::SchemaError`].
//! - Each `<dependency>` requires `artifactId`; `version` is optional.
//!
//! Version references are left untouched here; see [`crate::resolver`].

pub mod helpers;


use crate::core::{DevboardError, Result};
use helpers::{children_named, first_child, element_text, required_child, required_text};
use roxmltree::{Document, Node, ParsingOptions};
use serde::Serialize;
use std::collections::BTreeMap;

const ROOT_ELEMENT: &str = "project";

/// Parsed representation of one build manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDocument {
    /// Declared properties; last declaration wins on duplicate keys.
    pub properties: BTreeMap<String, String>,
    /// Parent module reference, if declared.
    pub parent: Option<ParentRef>,
    /// Dependencies in declaration order.
    pub dependencies: Vec<DependencyDeclaration>,
}

/// Reference to the parent module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentRef {
    pub artifact_id: String,
    pub version: String,
}

/// One `<dependency>` as declared, before version resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyDeclaration {
    pub artifact_id: String,
    /// Text of the `<version>` element; `None` when the element is absent.
    pub raw_version: Option<String>,
}

impl ManifestDocument {
    /// Parse manifest markup.
    ///
    /// # Errors
    ///
    /// - [`DevboardError::ManifestParseError`] when the text is not well-formed
    /// - [`DevboardError::SchemaError`] when the root is not `<project>`, when
    ///   `<dependencies>` is missing, or when a required child of `<parent>` or
    ///   `<dependency>` is missing
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use devboard_cli::manifest::ManifestDocument;
    ///
    /// let doc = ManifestDocument::parse(
    ///     "<project><dependencies><dependency><artifactId>a</artifactId></dependency></dependencies></project>",
    /// )?;
    /// assert_eq!(doc.dependencies[0].raw_version, None);
    /// # Ok::<(), devboard_cli::core::DevboardError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let document = Document::parse_with_options(text, parsing_options())?;
        let root = document.root_element();

        if root.tag_name().name() != ROOT_ELEMENT {
            return Err(DevboardError::SchemaError {
                element: ROOT_ELEMENT.to_string(),
            });
        }

        let properties = first_child(root, "properties").map(parse_properties).unwrap_or_default();

        let parent = first_child(root, "parent").map(ParentRef::from_element).transpose()?;

        let dependencies_path = format!("{ROOT_ELEMENT}/dependencies");
        let dependencies = children_named(required_child(root, "dependencies", ROOT_ELEMENT)?, "dependency")
            .enumerate()
            .map(|(i, node)| {
                DependencyDeclaration::from_element(
                    node,
                    &format!("{dependencies_path}/dependency[{}]", i + 1),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            properties,
            parent,
            dependencies,
        })
    }

    /// Look up a declared property.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

impl ParentRef {
    fn from_element(node: Node<'_, '_>) -> Result<Self> {
        let path = format!("{ROOT_ELEMENT}/parent");
        Ok(Self {
            artifact_id: required_text(node, "artifactId", &path)?,
            version: required_text(node, "version", &path)?,
        })
    }
}

impl DependencyDeclaration {
    fn from_element(node: Node<'_, '_>, path: &str) -> Result<Self> {
        Ok(Self {
            artifact_id: required_text(node, "artifactId", path)?,
            raw_version: helpers::child_text(node, "version"),
        })
    }
}

// Manifests may carry a `<!DOCTYPE project>` line.
fn parsing_options() -> ParsingOptions {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    options
}

// Every element child is a property; the element name is the key.
fn parse_properties(node: Node<'_, '_>) -> BTreeMap<String, String> {
    node.children()
        .filter(Node::is_element)
        .map(|property| (property.tag_name().name().to_string(), element_text(property)))
        .collect()
}
