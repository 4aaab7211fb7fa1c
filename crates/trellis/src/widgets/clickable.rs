use crate::{
    Core, LayoutCx, NodeId,
    core::node::Node,
    error::Result,
    geom::Expanse,
    layout::Constraints,
    render::Renderer,
    widget::Widget,
};

/// Callback fired with the wrapped child's id.
pub type ClickCallback = Box<dyn FnMut(&mut Core, NodeId)>;

/// Makes any widget clickable. Wraps exactly one child, occupies exactly the
/// child's bounds, and paints nothing of its own.
pub struct Clickable {
    /// Wrapped node.
    child: NodeId,
    /// Callback, moved onto the node at mount.
    callback: Option<ClickCallback>,
}

impl Clickable {
    /// Wrap a detached node.
    pub fn new(child: impl Into<NodeId>, f: impl FnMut(&mut Core, NodeId) + 'static) -> Self {
        Self {
            child: child.into(),
            callback: Some(Box::new(f)),
        }
    }

    /// The wrapped node.
    pub fn child(&self) -> NodeId {
        self.child
    }
}

impl Widget for Clickable {
    fn name(&self) -> &'static str {
        "clickable"
    }

    fn on_mount(&mut self, core: &mut Core, id: NodeId) -> Result<()> {
        core.add_child(id, self.child)?;
        if let Some(mut f) = self.callback.take() {
            let child = self.child;
            core.on_click(id, move |core, _| {
                f(core, child);
                true
            })?;
        }
        Ok(())
    }

    fn layout(&mut self, cx: &mut LayoutCx<'_>, c: Constraints) -> Result<Expanse> {
        let pos = cx.position();
        cx.place_child(self.child, pos)?;
        let size = cx.layout_child(self.child, c)?;
        let fixed = cx.fixed(self.child);
        cx.set_fixed(fixed);
        Ok(size)
    }

    fn draw(&self, _node: &Node, _r: &mut dyn Renderer) {}
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::{
        event::{Action, ClickEvent, key, mouse::Button},
        geom::Point,
        widgets::SizedBox,
    };

    #[test]
    fn tracks_child_and_reports_it() -> Result<()> {
        let mut core = Core::new();
        let child = core.add(SizedBox::new(30.0, 20.0))?;
        let hits = Rc::new(RefCell::new(Vec::new()));
        let h = hits.clone();
        let c = core.add(Clickable::new(child, move |_, id| h.borrow_mut().push(id)))?;
        core.set_position(c, Point::new(5.0, 6.0))?;
        let size = core.layout(c, Constraints::unbounded())?;
        assert_eq!(size, Expanse::new(30.0, 20.0));
        assert_eq!(core.get(child)?.position(), Point::new(5.0, 6.0));
        assert!(core.get(c)?.fixed().width);

        let ev = ClickEvent {
            target: c.into(),
            position: Point::new(6.0, 7.0),
            button: Button::Left,
            action: Action::Pressed,
            mods: key::Empty,
        };
        assert!(core.fire_click(c, &ev)?);
        assert_eq!(*hits.borrow(), vec![NodeId::from(child)]);
        Ok(())
    }
}
