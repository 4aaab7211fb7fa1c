//! The widget trait.

use std::any::Any;

use crate::{
    Core, LayoutCx, NodeId,
    core::node::Node,
    error::Result,
    geom::Expanse,
    layout::Constraints,
    render::Renderer,
};

/// Widgets are the behavior attached to nodes in the [`Core`] arena. Tree
/// structure, geometry, focus and handlers live on the node; the widget holds
/// only its own state.
pub trait Widget: Any {
    /// A short type name for diagnostics and typed lookups.
    fn name(&self) -> &'static str;

    /// Called once, right after the widget is inserted into the arena. This
    /// is where a widget marks its node focusable and registers its own
    /// handlers, which capture `id` rather than a reference to the widget.
    fn on_mount(&mut self, _core: &mut Core, _id: NodeId) -> Result<()> {
        Ok(())
    }

    /// Settle this node's size within `c` and return it. Containers lay out
    /// and position their children through `cx` before returning. The core
    /// stores the returned size on the node.
    ///
    /// Calling layout twice with the same constraints must produce the same
    /// sizes and positions throughout the subtree.
    fn layout(&mut self, cx: &mut LayoutCx<'_>, c: Constraints) -> Result<Expanse>;

    /// Paint this widget. Children are painted afterwards by the core, in
    /// order, so they occlude their parent.
    fn draw(&self, node: &Node, r: &mut dyn Renderer);
}

/// Downcast a widget trait object.
pub(crate) fn downcast_ref<'a, W: Widget>(
    widget: &'a (dyn Widget + 'static),
) -> Option<&'a W> {
    (widget as &dyn Any).downcast_ref::<W>()
}

/// Downcast a mutable widget trait object.
pub(crate) fn downcast_mut<'a, W: Widget>(
    widget: &'a mut (dyn Widget + 'static),
) -> Option<&'a mut W> {
    (widget as &mut dyn Any).downcast_mut::<W>()
}
