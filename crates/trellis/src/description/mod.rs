//! Building widget trees from declarative descriptions.
//!
//! A description is a document tree ([`Value`]) in which every widget is a
//! single-key map, `{kind: attributes}`:
//!
//! ```yaml
//! column:
//!   padding: 10
//!   children:
//!     - label:
//!         text: Name
//!     - input:
//!         id: name
//!         hint: your name
//! ```
//!
//! Building never stops at the first problem. Each structural error is
//! collected with its source position, the offending widget is left out, and
//! the rest of the tree is still built.

use thiserror::Error;

use crate::{Core, NodeId, error::Result};

/// Attribute interpretation shared by every widget kind.
pub mod attrs;
/// Per-kind builders.
pub mod kinds;
/// The document model.
pub mod node;
/// YAML front-end.
pub mod yaml;

pub use node::{Data, Mark, Value};

/// A located problem in a description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {message}")]
pub struct DeserializationError {
    /// Line, from 1.
    pub line: usize,
    /// Column, from 1.
    pub column: usize,
    /// What went wrong.
    pub message: String,
}

impl DeserializationError {
    /// Construct an error at a mark.
    pub fn new(mark: Mark, message: impl Into<String>) -> Self {
        Self {
            line: mark.line,
            column: mark.column,
            message: message.into(),
        }
    }

    /// Where the error is.
    pub fn mark(&self) -> Mark {
        Mark::new(self.line, self.column)
    }
}

/// Build the widget described by `value`, a single-key map naming the kind.
/// Returns the new detached root, or `None` if the widget itself could not be
/// built. Problems are appended to `errors`.
pub fn deserialize(
    core: &mut Core,
    value: &Value,
    errors: &mut Vec<DeserializationError>,
) -> Option<NodeId> {
    let Some(entries) = value.as_map() else {
        errors.push(DeserializationError::new(value.mark, "Widget name is not a map"));
        return None;
    };
    let [(kind, attrs)] = entries else {
        errors.push(DeserializationError::new(
            value.mark,
            "Widget map contains more that one name key",
        ));
        return None;
    };
    deserialize_kind(core, kind, attrs, errors)
}

/// Build a widget from an already separated kind key and attribute node.
pub fn deserialize_kind(
    core: &mut Core,
    kind: &Value,
    attrs: &Value,
    errors: &mut Vec<DeserializationError>,
) -> Option<NodeId> {
    let build: kinds::Builder = match kind.as_str() {
        Some("row") => kinds::row,
        Some("column") => kinds::column,
        Some("container") => kinds::container,
        Some("input") => kinds::input,
        Some("sized-box") => kinds::sized_box,
        Some("label") => kinds::label,
        Some("button") => kinds::button,
        Some("textarea") => kinds::textarea,
        Some("checkbox") => kinds::checkbox,
        _ => {
            errors.push(DeserializationError::new(kind.mark, "unknown Widget type"));
            return None;
        }
    };
    build(core, attrs, errors)
}

/// Parse YAML text and build the widget it describes. Syntax errors end the
/// attempt with a single located error; structural errors are collected as in
/// [`deserialize`].
pub fn from_yaml(
    core: &mut Core,
    text: &str,
    errors: &mut Vec<DeserializationError>,
) -> Option<NodeId> {
    match yaml::load(text) {
        Ok(value) => deserialize(core, &value, errors),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

/// Like [`from_yaml`], but all-or-nothing: any error frees whatever was built
/// and returns the first error.
pub fn from_yaml_strict(core: &mut Core, text: &str) -> Result<NodeId> {
    let mut errors = Vec::new();
    let root = from_yaml(core, text, &mut errors);
    match (root, errors.into_iter().next()) {
        (Some(root), None) => Ok(root),
        (root, first) => {
            if let Some(root) = root {
                core.remove_subtree(root)?;
            }
            let e = first
                .unwrap_or_else(|| DeserializationError::new(Mark::new(1, 1), "no widget"));
            tracing::debug!(error = %e, "description rejected");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Error, widgets::Container};

    /// Load `text` into a fresh arena.
    fn build(text: &str) -> (Core, Option<NodeId>, Vec<DeserializationError>) {
        let mut core = Core::new();
        let mut errors = Vec::new();
        let root = from_yaml(&mut core, text, &mut errors);
        (core, root, errors)
    }

    #[test]
    fn unknown_kind_is_located() {
        let (core, root, errors) = build("row:\n  children:\n    - foo:\n        text: hi\n");
        assert_eq!(
            errors,
            vec![DeserializationError {
                line: 3,
                column: 7,
                message: "unknown Widget type".into()
            }]
        );
        assert_eq!(errors[0].to_string(), "3:7: unknown Widget type");
        let root = root.and_then(|r| core.node(r));
        assert!(root.is_some_and(|n| n.children().is_empty()));
    }

    #[test]
    fn shape_errors() {
        let (_, root, errors) = build("- row:\n");
        assert!(root.is_none());
        assert_eq!(errors[0].message, "Widget name is not a map");

        let (_, root, errors) = build("row:\ncolumn:\n");
        assert!(root.is_none());
        assert_eq!(errors[0].message, "Widget map contains more that one name key");
        assert_eq!(errors[0].mark(), Mark::new(1, 1));

        let (_, root, errors) = build("row: 12\n");
        assert!(root.is_none());
        assert_eq!(errors[0].message, "Expected widget node to be a YAML map");
    }

    #[test]
    fn failed_children_are_omitted() {
        let (core, root, errors) = build(
            "column:\n  children:\n    - label:\n        text: a\n    - nope:\n    - label:\n        text: b\n",
        );
        assert_eq!(errors.len(), 1);
        let children = root.and_then(|r| core.node(r)).map(|n| n.children().len());
        assert_eq!(children, Some(2));
    }

    #[test]
    fn strict_frees_partial_trees() {
        let mut core = Core::new();
        let r = from_yaml_strict(&mut core, "row:\n  children:\n    - label:\n    - foo:\n");
        assert!(matches!(r, Err(Error::Description(ref e)) if e.line == 4));
        assert!(core.is_empty());

        let root = from_yaml_strict(&mut core, "row:\n");
        assert!(root.is_ok_and(|r| core.widget::<Container>(r).is_ok()));
    }
}
