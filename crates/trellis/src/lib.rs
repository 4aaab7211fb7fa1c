//! Trellis: a small retained-mode widget toolkit.
//!
//! Widgets live in an arena owned by [`Core`] and form a tree. Each frame the
//! tree is laid out with box constraints, drawn through a [`render::Renderer`],
//! and fed window events that are routed to click and key handlers. Trees can
//! be built in code or loaded from a YAML description.
//!
//! # Quick Start
//!
//! The main entry points are:
//! - [`App`] - Drives a tree: dispatch, layout, and drawing
//! - [`Core`] - The node arena
//! - [`Widget`] - The trait implemented by all widgets
//!
//! # Module Organization
//!
//! - [`geom`] - Geometry primitives (Point, Expanse, Rect, Edges)
//! - [`layout`] - Constraints and alignment policies
//! - [`widgets`] - Built-in widget implementations
//! - [`description`] - Building trees from YAML

#![warn(missing_docs)]

// Internal core module - re-export specific items below
mod core;

// Public modules
pub mod description;
pub mod editor;
pub mod layout;
pub mod widget;
pub mod widgets;

pub use geom;

#[cfg(any(test, feature = "testing"))]
pub use core::testing;
// Re-export core application types
pub use core::{App, AppConfig, Core, LayoutCx, NodeId, TypedId};
pub use core::{backend, error, event, node, render};

pub use error::{Error, Result};
pub use widget::Widget;
