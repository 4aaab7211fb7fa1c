use crate::{
    core::{
        error::{Error, Result},
        id::NodeId,
        world::Core,
    },
    geom::Point,
};

impl Core {
    /// Clear the focused flag on every node under `root`.
    pub fn clear_focus(&mut self, root: impl Into<NodeId>) {
        self.visit(root, &mut |core, id| {
            core.nodes[id].focused = false;
            true
        });
    }

    /// The focused node under `root`, if any. Read from the node flags on
    /// every call, so focus moved by a handler is seen immediately.
    pub fn focused(&self, root: impl Into<NodeId>) -> Option<NodeId> {
        let mut stack = vec![root.into()];
        while let Some(id) = stack.pop() {
            let node = self.nodes.get(id)?;
            if node.focused {
                return Some(id);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Give focus to `target`, clearing it everywhere else under `root`.
    /// Fails if the node is missing, hidden, or not focusable.
    pub fn set_focus(&mut self, root: impl Into<NodeId>, target: impl Into<NodeId>) -> Result<()> {
        let target = target.into();
        if !self.get(target)?.focusable {
            return Err(Error::Focus(format!("node {target:?} is not focusable")));
        }
        if !self.is_visible(target) {
            return Err(Error::Focus(format!("node {target:?} is hidden")));
        }
        self.clear_focus(root);
        self.get_mut(target)?.focused = true;
        tracing::trace!(?target, "focus set");
        Ok(())
    }

    /// Move focus to the first visible focusable node under `root`, in visit
    /// order, whose rectangle contains `p`. Focus is cleared everywhere first,
    /// so a press that lands on nothing focusable leaves nothing focused.
    pub fn focus_at(&mut self, root: impl Into<NodeId>, p: Point) -> Option<NodeId> {
        let root = root.into();
        self.clear_focus(root);
        let mut found = None;
        self.visit(root, &mut |core, id| {
            let node = &core.nodes[id];
            if node.focusable && node.rect().contains(p) && core.is_visible(id) {
                found = Some(id);
                return false;
            }
            true
        });
        if let Some(id) = found {
            self.nodes[id].focused = true;
            tracing::trace!(?id, x = p.x, y = p.y, "focus moved by pointer");
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geom::Expanse,
        layout::Constraints,
        widgets::{Container, Input, Label},
    };

    #[test]
    fn focus_is_unique() -> Result<()> {
        let mut core = Core::new();
        let row = core.add(Container::row())?;
        let a = core.add_child_widget(row, Input::new())?;
        let b = core.add_child_widget(row, Input::new())?;
        core.layout(row, Constraints::loose(Expanse::new(400.0, 100.0)))?;

        core.set_focus(row, a)?;
        core.set_focus(row, b)?;
        assert_eq!(core.focused(row), Some(b.into()));
        assert!(!core.get(a)?.is_focused());

        assert_eq!(core.focus_at(row, Point::new(10.0, 10.0)), Some(a.into()));
        assert!(!core.get(b)?.is_focused());

        assert_eq!(core.focus_at(row, Point::new(390.0, 90.0)), None);
        assert_eq!(core.focused(row), None);
        Ok(())
    }

    #[test]
    fn unfocusable_rejected() -> Result<()> {
        let mut core = Core::new();
        let row = core.add(Container::row())?;
        let l = core.add_child_widget(row, Label::new("x"))?;
        assert!(matches!(core.set_focus(row, l), Err(Error::Focus(_))));
        Ok(())
    }
}
