use std::result::Result as StdResult;

use thiserror::Error;

use crate::{NodeId, description::DeserializationError};

/// Result type for trellis operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// The node is not present in the arena.
    #[error("node not found: {0:?}")]
    NodeNotFound(NodeId),

    /// The node's widget is already checked out for another call.
    #[error("widget is busy: {0:?}")]
    WidgetBusy(NodeId),

    /// A typed access named the wrong widget type.
    #[error("expected widget type {expected}, found {found}")]
    WrongWidgetType {
        /// Requested type name.
        expected: &'static str,
        /// Name reported by the stored widget.
        found: &'static str,
    },

    /// Attaching the child would make a node its own ancestor.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    WouldCreateCycle {
        /// Proposed parent.
        parent: NodeId,
        /// Proposed child.
        child: NodeId,
    },

    /// The child already has a parent.
    #[error("node already attached: {0:?}")]
    AlreadyAttached(NodeId),

    #[error("focus: {0}")]
    /// Focus-related failure.
    Focus(String),

    #[error("description: {0}")]
    /// A declarative description could not be loaded.
    Description(#[source] DeserializationError),
}

impl From<DeserializationError> for Error {
    fn from(e: DeserializationError) -> Self {
        Self::Description(e)
    }
}
