//! Input events: the window-level stream delivered by an
//! [`EventSource`](crate::backend::EventSource), and the per-widget events the
//! dispatcher hands to handlers.

use std::path::PathBuf;

use crate::{
    NodeId,
    geom::{Expanse, Point},
};

pub mod key;
pub mod mouse;

/// Press/release transitions shared by keys and buttons.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Action {
    /// Key or button went down.
    Pressed,
    /// Key or button went up.
    Released,
}

/// Window-level events, in the order the platform produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A key went down.
    KeyPressed {
        /// Key and modifiers.
        key: key::Key,
        /// True when generated by auto-repeat.
        repeat: bool,
    },
    /// A key went up.
    KeyReleased {
        /// Key and modifiers.
        key: key::Key,
    },
    /// The pointer moved to a new window position.
    MouseMoved(Point),
    /// The wheel scrolled by (dx, dy).
    MouseScrolled(Point),
    /// A mouse button went down at the last known pointer position.
    MouseButtonPressed {
        /// Button.
        button: mouse::Button,
        /// Modifiers held.
        mods: key::Mods,
    },
    /// A mouse button went up.
    MouseButtonReleased {
        /// Button.
        button: mouse::Button,
        /// Modifiers held.
        mods: key::Mods,
    },
    /// The framebuffer changed size.
    WindowResized(Expanse),
    /// The window was minimized.
    WindowMinimized,
    /// The user asked to close the window.
    WindowClosed,
    /// Files were dropped onto the window.
    FilesDropped(Vec<PathBuf>),
}

/// A pointer press or release routed to a widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    /// Node the event was delivered to.
    pub target: NodeId,
    /// Pointer position in window coordinates.
    pub position: Point,
    /// Button.
    pub button: mouse::Button,
    /// Transition.
    pub action: Action,
    /// Modifiers held.
    pub mods: key::Mods,
}

/// A key press or release routed to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Node the event was delivered to.
    pub target: NodeId,
    /// Key and modifiers.
    pub key: key::Key,
    /// Transition.
    pub action: Action,
    /// True when generated by auto-repeat.
    pub repeat: bool,
}

impl KeyEvent {
    /// True for presses, including repeats.
    pub fn is_press(&self) -> bool {
        self.action == Action::Pressed
    }
}
