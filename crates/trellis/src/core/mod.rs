//! Core types: the node arena, dispatch, and the seams to the platform.

// Core modules - public
/// The run-loop seam to a platform window.
pub mod backend;
/// Core error types.
pub mod error;
/// Input event types.
pub mod event;
/// Node data.
pub mod node;
/// Rendering interfaces.
pub mod render;
/// Testing utilities.
#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Core modules - internal
/// Application driver.
pub mod app;
/// Layout context handed to widgets.
pub mod context;
/// Focus tracking.
pub mod focus;
/// Node ID types.
pub mod id;
/// The node arena.
pub mod world;

// Public exports from internal modules
pub use app::{App, AppConfig};
pub use context::LayoutCx;
pub use id::{NodeId, TypedId};
pub use world::Core;
