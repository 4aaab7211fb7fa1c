use crate::{
    core::{
        event::{ClickEvent, KeyEvent},
        id::NodeId,
        world::Core,
    },
    geom::{Expanse, Point, Rect},
    layout::Fixed,
    widget::Widget,
};

/// A click handler. Returns true if it handled the event.
pub type ClickHandler = Box<dyn FnMut(&mut Core, &ClickEvent) -> bool>;

/// A key handler. Returns true if it handled the event.
pub type KeyHandler = Box<dyn FnMut(&mut Core, &KeyEvent) -> bool>;

/// Node data stored in the arena.
pub struct Node {
    /// Widget behavior and state. Empty while the widget is checked out for a
    /// call.
    pub(crate) widget: Option<Box<dyn Widget>>,
    /// Cached widget name, readable while the widget is checked out.
    pub(crate) name: &'static str,

    /// Parent in the arena tree.
    pub(crate) parent: Option<NodeId>,
    /// Children in the arena tree, in paint and layout order.
    pub(crate) children: Vec<NodeId>,

    /// Top-left corner in window coordinates, assigned by the parent.
    pub(crate) position: Point,
    /// Size settled by the most recent layout.
    pub(crate) size: Expanse,
    /// Sizing flags the parent reads when splitting space.
    pub(crate) fixed: Fixed,

    /// User-assigned identifier; empty when unset.
    pub(crate) id: String,
    /// Can this node take keyboard focus?
    pub(crate) focusable: bool,
    /// Does this node currently hold focus?
    pub(crate) focused: bool,
    /// Is this node laid out, drawn and hit-tested?
    pub(crate) display: bool,

    /// Click handlers, fired in registration order.
    pub(crate) click_handlers: Vec<ClickHandler>,
    /// Key handlers, fired in registration order.
    pub(crate) key_handlers: Vec<KeyHandler>,
}

impl Node {
    /// Construct a detached node around a widget.
    pub(crate) fn new(widget: Box<dyn Widget>) -> Self {
        Self {
            name: widget.name(),
            widget: Some(widget),
            parent: None,
            children: Vec::new(),
            position: Point::zero(),
            size: Expanse::default(),
            fixed: Fixed::default(),
            id: String::new(),
            focusable: false,
            focused: false,
            display: true,
            click_handlers: Vec::new(),
            key_handlers: Vec::new(),
        }
    }

    /// The widget's type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the node's parent, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Return the node's children.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Top-left corner in window coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Size from the last layout.
    pub fn size(&self) -> Expanse {
        self.size
    }

    /// Screen rectangle from the last layout.
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Sizing flags.
    pub fn fixed(&self) -> Fixed {
        self.fixed
    }

    /// User-assigned identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Can this node take focus?
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Does this node hold focus?
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Is this node displayed?
    pub fn is_displayed(&self) -> bool {
        self.display
    }

    /// Are any click handlers registered?
    pub fn has_click_handlers(&self) -> bool {
        !self.click_handlers.is_empty()
    }

    /// Are any key handlers registered?
    pub fn has_key_handlers(&self) -> bool {
        !self.key_handlers.is_empty()
    }
}
