//! Element accessors for manifest markup.
//!
//! Every element in a manifest may legally repeat, so a naive lookup yields a
//! sequence even for sections that are semantically singular. These helpers make
//! the intent explicit at each call site:
//! - [`children_named`] - all matching children, in document order
//! - [`first_child`] - the first match, if any
//! - [`required_child`] - the first match, or a [`DevboardError::SchemaError`]
//!   naming the missing element
//!
//! Names are compared by local name, so `<dependencies>` in the default Maven
//! namespace matches `"dependencies"`.

use crate::core::{DevboardError, Result};
use roxmltree::Node;

/// All element children of `node` named `name`, in document order.
pub fn children_named<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| child.is_element() && child.tag_name().name() == name)
}

/// First element child of `node` named `name`.
pub fn first_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    children_named(node, name).next()
}

/// First element child of `node` named `name`, or a schema error.
///
/// `path` is the path of `node` itself and is used to name the missing element,
/// e.g. `required_child(root, "dependencies", "project")` fails with
/// `project/dependencies`.
pub fn required_child<'a, 'input>(
    node: Node<'a, 'input>,
    name: &str,
    path: &str,
) -> Result<Node<'a, 'input>> {
    first_child(node, name).ok_or_else(|| DevboardError::SchemaError {
        element: format!("{path}/{name}"),
    })
}

/// Text content of an element: its direct text children concatenated, untrimmed.
///
/// An empty element (`<version/>` or `<version></version>`) yields an empty string.
#[must_use]
pub fn element_text(node: Node<'_, '_>) -> String {
    node.children().filter(Node::is_text).filter_map(|child| child.text()).collect()
}

/// Text of the first child named `name`, if that child exists.
pub fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    first_child(node, name).map(element_text)
}

/// Text of the first child named `name`, or a schema error naming it.
pub fn required_text(node: Node<'_, '_>, name: &str, path: &str) -> Result<String> {
    required_child(node, name, path).map(element_text)
}
