use crate::{
    backend::EventSource,
    core::{
        error::{Error, Result},
        id::{NodeId, TypedId},
        world::Core,
    },
    event::{Action, ClickEvent, Event, KeyEvent, key, mouse},
    geom::{Expanse, Point},
    layout::Constraints,
    render::Renderer,
    widget::Widget,
};

/// Settings for an [`App`].
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Window title, for platform integrations that show one.
    pub title: String,
    /// Initial window size.
    pub size: Expanse,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "trellis".into(),
            size: Expanse::new(1280.0, 720.0),
        }
    }
}

impl AppConfig {
    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial size.
    pub fn with_size(mut self, w: f32, h: f32) -> Self {
        self.size = Expanse::new(w, h);
        self
    }
}

/// Owns a widget tree and drives it: routes window events to widgets, then
/// lays out and draws the tree once per frame.
pub struct App {
    /// Node arena.
    core: Core,
    /// Root of the tree.
    root: NodeId,
    /// Settings.
    config: AppConfig,
    /// Current window size.
    size: Expanse,
    /// Last pointer position.
    mouse: Point,
    /// Set once the window asks to close.
    should_close: bool,
}

impl App {
    /// Wrap a tree rooted at `root`.
    pub fn new(core: Core, root: impl Into<NodeId>, config: AppConfig) -> Self {
        Self {
            core,
            root: root.into(),
            size: config.size,
            config,
            mouse: Point::zero(),
            should_close: false,
        }
    }

    /// The node arena.
    pub fn core(&self) -> &Core {
        &self.core
    }

    /// Mutable access to the node arena.
    pub fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Root of the tree.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Settings.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Current window size.
    pub fn size(&self) -> Expanse {
        self.size
    }

    /// Last pointer position.
    pub fn mouse(&self) -> Point {
        self.mouse
    }

    /// Has the window asked to close?
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// The focused node, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.core.focused(self.root)
    }

    /// Focus a node. Returns false, leaving focus unchanged, if the node is
    /// missing, hidden, or not focusable.
    pub fn focus(&mut self, id: impl Into<NodeId>) -> bool {
        let id = id.into();
        match self.core.set_focus(self.root, id) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "focus request refused");
                false
            }
        }
    }

    /// The first node, in visit order, with the given identifier.
    pub fn get_by_id(&mut self, id: &str) -> Option<NodeId> {
        self.core.find_by_id(self.root, id)
    }

    /// The first node, in visit order, holding a `W`.
    pub fn get_by_type<W: Widget>(&mut self) -> Option<TypedId<W>> {
        self.core.find_by_type::<W>(self.root)
    }

    /// Attach a detached node under `parent`.
    pub fn add_child(&mut self, parent: impl Into<NodeId>, child: impl Into<NodeId>) -> Result<()> {
        self.core.add_child(parent, child)
    }

    /// Free every child subtree of `parent`.
    pub fn clear_children(&mut self, parent: impl Into<NodeId>) -> Result<()> {
        self.core.clear_children(parent)
    }

    /// Route one window event.
    pub fn handle_event(&mut self, event: &Event, r: &mut dyn Renderer) -> Result<()> {
        match event {
            Event::MouseMoved(p) => self.mouse = *p,
            Event::MouseButtonPressed { button, mods } => {
                self.press(*button, *mods)?;
            }
            Event::MouseButtonReleased { button, .. } => {
                tracing::trace!(?button, "button released");
            }
            Event::MouseScrolled(delta) => {
                tracing::trace!(dx = delta.x, dy = delta.y, "scrolled");
            }
            Event::KeyPressed { key, repeat } => {
                self.key(*key, Action::Pressed, *repeat)?;
            }
            Event::KeyReleased { key } => {
                self.key(*key, Action::Released, false)?;
            }
            Event::WindowResized(size) => {
                tracing::debug!(w = size.w, h = size.h, "window resized");
                self.size = *size;
                r.resize(*size);
            }
            Event::WindowMinimized => tracing::debug!("window minimized"),
            Event::WindowClosed => {
                tracing::debug!("window close requested");
                self.should_close = true;
            }
            Event::FilesDropped(paths) => {
                tracing::debug!(count = paths.len(), "files dropped");
            }
        }
        Ok(())
    }

    /// Pointer press: move focus, then deliver a click to the first
    /// containing node with click handlers. If its handlers all decline, the
    /// next containing node with handlers gets a turn.
    fn press(&mut self, button: mouse::Button, mods: key::Mods) -> Result<bool> {
        let p = self.mouse;
        self.core.focus_at(self.root, p);

        let mut handled = false;
        let mut err = None;
        self.core.visit(self.root, &mut |core, id| {
            let node = &core.nodes[id];
            if !node.has_click_handlers() || !node.rect().contains(p) || !core.is_visible(id) {
                return true;
            }
            let ev = ClickEvent {
                target: id,
                position: p,
                button,
                action: Action::Pressed,
                mods,
            };
            tracing::trace!(?id, x = p.x, y = p.y, "click");
            match core.fire_click(id, &ev) {
                Ok(h) => {
                    handled = h;
                    !h
                }
                Err(e) => {
                    err = Some(e);
                    false
                }
            }
        });
        err.map_or(Ok(handled), Err)
    }

    /// Key press or release: the focused node gets it directly. With nothing
    /// focused, nodes with key handlers are offered it in visit order until
    /// one takes it. The fallback scan is depth-first, so the deepest handler
    /// wins.
    fn key(&mut self, key: key::Key, action: Action, repeat: bool) -> Result<bool> {
        let make = |target| KeyEvent {
            target,
            key,
            action,
            repeat,
        };
        if let Some(target) = self.focused().filter(|id| self.core.is_visible(*id)) {
            tracing::trace!(?target, ?key, "key to focused node");
            return self.core.fire_key(target, &make(target));
        }

        let mut handled = false;
        let mut err: Option<Error> = None;
        self.core.visit(self.root, &mut |core, id| {
            if !core.nodes[id].has_key_handlers() || !core.is_visible(id) {
                return true;
            }
            tracing::trace!(?id, ?key, "key to first handler");
            match core.fire_key(id, &make(id)) {
                Ok(h) => {
                    handled = h;
                    !h
                }
                Err(e) => {
                    err = Some(e);
                    false
                }
            }
        });
        err.map_or(Ok(handled), Err)
    }

    /// Lay out the whole tree against the window bounds.
    pub fn layout(&mut self) -> Result<Expanse> {
        self.core.set_position(self.root, Point::zero())?;
        self.core
            .layout(self.root, Constraints::new(0.0, 0.0, self.size.w, self.size.h))
    }

    /// Draw the whole tree.
    pub fn draw(&self, r: &mut dyn Renderer) -> Result<()> {
        self.core.draw(self.root, r)
    }

    /// One frame: drain events, route them, lay out, draw, present.
    pub fn tick(&mut self, source: &mut dyn EventSource, r: &mut dyn Renderer) -> Result<()> {
        for event in source.poll() {
            self.handle_event(&event, r)?;
        }
        self.layout()?;
        self.draw(r)?;
        source.present();
        Ok(())
    }

    /// Tick until the window asks to close.
    pub fn run(&mut self, source: &mut dyn EventSource, r: &mut dyn Renderer) -> Result<()> {
        while !self.should_close {
            self.tick(source, r)?;
        }
        Ok(())
    }
}
