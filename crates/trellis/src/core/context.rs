use crate::{
    core::{id::NodeId, world::Core},
    error::Result,
    geom::{Expanse, Point},
    layout::{Constraints, Fixed},
};

/// The view of the arena a widget gets while it lays itself out: its own
/// node, and the ability to lay out and place its children.
pub struct LayoutCx<'a> {
    /// Arena.
    pub(crate) core: &'a mut Core,
    /// Node being laid out.
    pub(crate) node: NodeId,
}

impl<'a> LayoutCx<'a> {
    /// Construct a context for laying out `node`.
    pub(crate) fn new(core: &'a mut Core, node: NodeId) -> Self {
        Self { core, node }
    }

    /// The node being laid out.
    pub fn node_id(&self) -> NodeId {
        self.node
    }

    /// This node's position, as assigned by its parent.
    pub fn position(&self) -> Point {
        self.core
            .nodes
            .get(self.node)
            .map(|n| n.position)
            .unwrap_or_default()
    }

    /// A snapshot of this node's children.
    pub fn children(&self) -> Vec<NodeId> {
        self.core
            .nodes
            .get(self.node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Is the child displayed?
    pub fn is_displayed(&self, child: NodeId) -> bool {
        self.core.nodes.get(child).is_some_and(|n| n.display)
    }

    /// The child's sizing flags, as set by its most recent layout.
    pub fn fixed(&self, child: NodeId) -> Fixed {
        self.core
            .nodes
            .get(child)
            .map(|n| n.fixed)
            .unwrap_or_default()
    }

    /// Set this node's own sizing flags.
    pub fn set_fixed(&mut self, fixed: Fixed) {
        if let Some(n) = self.core.nodes.get_mut(self.node) {
            n.fixed = fixed;
        }
    }

    /// Lay out a child and return its size.
    pub fn layout_child(&mut self, child: NodeId, c: Constraints) -> Result<Expanse> {
        self.core.layout(child, c)
    }

    /// Place a child. Call before laying the child out so it can place its
    /// own children relative to the new position.
    pub fn place_child(&mut self, child: NodeId, position: Point) -> Result<()> {
        self.core.set_position(child, position)
    }
}
