use std::{any::type_name, mem};

use slotmap::SlotMap;

use crate::{
    core::{
        context::LayoutCx,
        error::{Error, Result},
        event::{ClickEvent, KeyEvent},
        id::{NodeId, TypedId},
        node::Node,
    },
    geom::{Expanse, Point},
    layout::Constraints,
    render::Renderer,
    widget::{self, Widget},
};

/// The node arena. Every widget in a UI lives here, addressed by [`NodeId`].
/// Parents own their children through the child list; the parent link is a
/// plain id used only for upward queries.
pub struct Core {
    /// Node storage.
    pub(crate) nodes: SlotMap<NodeId, Node>,
}

impl Default for Core {
    fn default() -> Self {
        Self::new()
    }
}

impl Core {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Is the arena empty?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return a node, if it exists.
    pub fn node(&self, id: impl Into<NodeId>) -> Option<&Node> {
        self.nodes.get(id.into())
    }

    /// Return a node or a `NodeNotFound` error.
    pub fn get(&self, id: impl Into<NodeId>) -> Result<&Node> {
        let id = id.into();
        self.nodes.get(id).ok_or(Error::NodeNotFound(id))
    }

    /// Return a mutable node or a `NodeNotFound` error.
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes.get_mut(id).ok_or(Error::NodeNotFound(id))
    }

    /// Does the node exist?
    pub fn contains(&self, id: impl Into<NodeId>) -> bool {
        self.nodes.contains_key(id.into())
    }

    /// Insert a widget as a detached node without running its mount hook.
    pub fn create_detached(&mut self, widget: Box<dyn Widget>) -> NodeId {
        self.nodes.insert(Node::new(widget))
    }

    /// Insert a widget as a detached node and run its mount hook.
    pub fn add<W: Widget>(&mut self, widget: W) -> Result<TypedId<W>> {
        let id = self.create_detached(Box::new(widget));
        if let Err(e) = self.with_widget_mut(id, |w, core| w.on_mount(core, id))? {
            self.remove_subtree(id)?;
            return Err(e);
        }
        Ok(TypedId::new(id))
    }

    /// Insert a widget and attach it as the last child of `parent`.
    pub fn add_child_widget<W: Widget>(
        &mut self,
        parent: impl Into<NodeId>,
        widget: W,
    ) -> Result<TypedId<W>> {
        let parent = parent.into();
        self.get(parent)?;
        let id = self.add(widget)?;
        self.add_child(parent, id)?;
        Ok(id)
    }

    /// Insert a widget and attach a list of existing detached nodes as its
    /// children.
    pub fn add_with_children<W: Widget>(
        &mut self,
        widget: W,
        children: impl IntoIterator<Item = NodeId>,
    ) -> Result<TypedId<W>> {
        let id = self.add(widget)?;
        for child in children {
            self.add_child(id, child)?;
        }
        Ok(id)
    }

    /// Attach a detached node as the last child of `parent`.
    pub fn add_child(&mut self, parent: impl Into<NodeId>, child: impl Into<NodeId>) -> Result<()> {
        let parent = parent.into();
        let child = child.into();
        self.get(parent)?;
        if self.get(child)?.parent.is_some() {
            return Err(Error::AlreadyAttached(child));
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(Error::WouldCreateCycle { parent, child });
        }
        self.get_mut(child)?.parent = Some(parent);
        self.get_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Detach a node from its parent, keeping the subtree alive.
    pub fn detach(&mut self, child: impl Into<NodeId>) -> Result<()> {
        let child = child.into();
        let Some(parent) = self.get(child)?.parent else {
            return Ok(());
        };
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|id| *id != child);
        }
        self.get_mut(child)?.parent = None;
        Ok(())
    }

    /// Replace the children of `parent`. Previous children not in the new
    /// list are detached but stay alive; use [`Self::clear_children`] to free
    /// them.
    pub fn set_children(&mut self, parent: impl Into<NodeId>, children: Vec<NodeId>) -> Result<()> {
        let parent = parent.into();
        let old = mem::take(&mut self.get_mut(parent)?.children);
        for id in old {
            if let Some(node) = self.nodes.get_mut(id) {
                node.parent = None;
            }
        }
        for child in children {
            if let Some(prev) = self.get(child)?.parent {
                if prev == parent {
                    continue;
                }
                self.detach(child)?;
            }
            self.add_child(parent, child)?;
        }
        Ok(())
    }

    /// Remove every child subtree of `parent` from the arena.
    pub fn clear_children(&mut self, parent: impl Into<NodeId>) -> Result<()> {
        let parent = parent.into();
        let children = self.get(parent)?.children.clone();
        for child in children {
            self.remove_subtree(child)?;
        }
        Ok(())
    }

    /// Remove a node and all its descendants from the arena, dropping their
    /// widgets and handlers.
    pub fn remove_subtree(&mut self, root: impl Into<NodeId>) -> Result<()> {
        let root = root.into();
        self.detach(root)?;
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.remove(id) {
                stack.extend(node.children);
            }
        }
        Ok(())
    }

    /// Is `ancestor` a proper ancestor of `node`?
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.nodes.get(node).and_then(|n| n.parent);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id).and_then(|n| n.parent);
        }
        false
    }

    /// Is the node and every ancestor displayed?
    pub fn is_visible(&self, id: impl Into<NodeId>) -> bool {
        let mut current = Some(id.into());
        while let Some(id) = current {
            let Some(node) = self.nodes.get(id) else {
                return false;
            };
            if !node.display {
                return false;
            }
            current = node.parent;
        }
        true
    }

    /// Show or hide a node. Hidden nodes take no space, are not drawn, and
    /// receive no events.
    pub fn set_display(&mut self, id: impl Into<NodeId>, display: bool) -> Result<()> {
        self.get_mut(id.into())?.display = display;
        Ok(())
    }

    /// Assign the node's identifier.
    pub fn set_id(&mut self, id: impl Into<NodeId>, name: impl Into<String>) -> Result<()> {
        self.get_mut(id.into())?.id = name.into();
        Ok(())
    }

    /// Mark the node as able to take focus.
    pub fn set_focusable(&mut self, id: impl Into<NodeId>, focusable: bool) -> Result<()> {
        let node = self.get_mut(id.into())?;
        node.focusable = focusable;
        if !focusable {
            node.focused = false;
        }
        Ok(())
    }

    /// Move a node. Layout overwrites positions set here for any node with a
    /// parent.
    pub fn set_position(&mut self, id: impl Into<NodeId>, position: Point) -> Result<()> {
        self.get_mut(id.into())?.position = position;
        Ok(())
    }

    /// Append a click handler.
    pub fn on_click(
        &mut self,
        id: impl Into<NodeId>,
        handler: impl FnMut(&mut Self, &ClickEvent) -> bool + 'static,
    ) -> Result<()> {
        self.get_mut(id.into())?
            .click_handlers
            .push(Box::new(handler));
        Ok(())
    }

    /// Append a key handler.
    pub fn on_key(
        &mut self,
        id: impl Into<NodeId>,
        handler: impl FnMut(&mut Self, &KeyEvent) -> bool + 'static,
    ) -> Result<()> {
        self.get_mut(id.into())?.key_handlers.push(Box::new(handler));
        Ok(())
    }

    /// Run every click handler on the node, in order. Returns true if any of
    /// them handled the event.
    pub fn fire_click(&mut self, id: impl Into<NodeId>, event: &ClickEvent) -> Result<bool> {
        let id = id.into();
        let mut handlers = mem::take(&mut self.get_mut(id)?.click_handlers);
        let mut handled = false;
        for h in &mut handlers {
            handled |= h(self, event);
        }
        restore_handlers(self.nodes.get_mut(id).map(|n| &mut n.click_handlers), handlers);
        Ok(handled)
    }

    /// Run every key handler on the node, in order. Returns true if any of
    /// them handled the event.
    pub fn fire_key(&mut self, id: impl Into<NodeId>, event: &KeyEvent) -> Result<bool> {
        let id = id.into();
        let mut handlers = mem::take(&mut self.get_mut(id)?.key_handlers);
        let mut handled = false;
        for h in &mut handlers {
            handled |= h(self, event);
        }
        restore_handlers(self.nodes.get_mut(id).map(|n| &mut n.key_handlers), handlers);
        Ok(handled)
    }

    /// Take a mutable reference to a widget for a single call. The widget is
    /// out of its slot for the duration, so re-entrant access to the same
    /// node fails with `WidgetBusy`.
    pub(crate) fn with_widget_mut<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut (dyn Widget + 'static), &mut Self) -> R,
    ) -> Result<R> {
        let mut widget = self.get_mut(id)?.widget.take().ok_or(Error::WidgetBusy(id))?;
        let out = f(widget.as_mut(), self);
        if let Some(node) = self.nodes.get_mut(id) {
            node.widget = Some(widget);
        }
        Ok(out)
    }

    /// Run a closure against a concrete widget type.
    pub fn with_widget<W: Widget, R>(
        &mut self,
        id: impl Into<NodeId>,
        f: impl FnOnce(&mut W, &mut Self) -> R,
    ) -> Result<R> {
        let id = id.into();
        self.with_widget_mut(id, |w, core| {
            let found = w.name();
            match widget::downcast_mut::<W>(w) {
                Some(w) => Ok(f(w, core)),
                None => Err(Error::WrongWidgetType {
                    expected: type_name::<W>(),
                    found,
                }),
            }
        })?
    }

    /// Borrow a concrete widget.
    pub fn widget<W: Widget>(&self, id: impl Into<NodeId>) -> Result<&W> {
        let id = id.into();
        let node = self.get(id)?;
        let w = node.widget.as_deref().ok_or(Error::WidgetBusy(id))?;
        widget::downcast_ref::<W>(w).ok_or(Error::WrongWidgetType {
            expected: type_name::<W>(),
            found: node.name,
        })
    }

    /// Lay out a subtree and store the resulting size on its root.
    pub fn layout(&mut self, id: impl Into<NodeId>, c: Constraints) -> Result<Expanse> {
        let id = id.into();
        let size = self.with_widget_mut(id, |w, core| {
            let mut cx = LayoutCx::new(core, id);
            w.layout(&mut cx, c)
        })??;
        self.get_mut(id)?.size = size;
        Ok(size)
    }

    /// Paint a subtree: the node, then its children in order. Hidden
    /// subtrees are skipped.
    pub fn draw(&self, id: impl Into<NodeId>, r: &mut dyn Renderer) -> Result<()> {
        let id = id.into();
        let node = self.get(id)?;
        if !node.display {
            return Ok(());
        }
        let w = node.widget.as_deref().ok_or(Error::WidgetBusy(id))?;
        w.draw(node, r);
        for child in &node.children {
            self.draw(*child, r)?;
        }
        Ok(())
    }

    /// Walk a subtree, children before their parent, calling `f` on each
    /// node. `f` returns false to stop the walk, in which case `visit`
    /// returns false too. Each node's child list is snapshotted before its
    /// children are visited, and nodes removed mid-walk are skipped.
    pub fn visit(
        &mut self,
        id: impl Into<NodeId>,
        f: &mut dyn FnMut(&mut Self, NodeId) -> bool,
    ) -> bool {
        let id = id.into();
        let Some(node) = self.nodes.get(id) else {
            return true;
        };
        let children = node.children.clone();
        for child in children {
            if !self.visit(child, f) {
                return false;
            }
        }
        if !self.nodes.contains_key(id) {
            return true;
        }
        f(self, id)
    }

    /// Find the first node under `root`, in visit order, with the given
    /// identifier.
    pub fn find_by_id(&mut self, root: impl Into<NodeId>, name: &str) -> Option<NodeId> {
        let mut found = None;
        self.visit(root, &mut |core, id| {
            if core.nodes[id].id == name {
                found = Some(id);
                return false;
            }
            true
        });
        found
    }

    /// Find the first node under `root`, in visit order, holding a widget of
    /// type `W`.
    pub fn find_by_type<W: Widget>(&mut self, root: impl Into<NodeId>) -> Option<TypedId<W>> {
        let mut found = None;
        self.visit(root, &mut |core, id| {
            if core.widget::<W>(id).is_ok() {
                found = Some(TypedId::new(id));
                return false;
            }
            true
        });
        found
    }
}

/// Put handlers back after firing, keeping any registered during the call.
fn restore_handlers<H>(slot: Option<&mut Vec<H>>, mut handlers: Vec<H>) {
    match slot {
        Some(slot) => {
            handlers.append(slot);
            *slot = handlers;
        }
        None => tracing::warn!("node removed by its own handler, dropping handlers"),
    }
}
