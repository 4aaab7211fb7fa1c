use super::render::RecordingRenderer;
use crate::{
    App, AppConfig, Core, NodeId,
    error::Result,
    event::{
        Event,
        key::{self, Key},
        mouse::Button,
    },
    geom::{Expanse, Point},
};

/// Holds an [`App`] and a [`RecordingRenderer`]. Tests drive the UI with
/// pointer and key events; every event is followed by a frame (layout and
/// draw), so the record always reflects the latest state.
pub struct Harness {
    /// The app under test.
    pub app: App,
    /// The renderer frames are drawn into.
    pub render: RecordingRenderer,
}

impl Harness {
    /// Wrap a tree in an 800x600 window and draw the first frame.
    pub fn new(core: Core, root: impl Into<NodeId>) -> Result<Self> {
        Self::with_size(core, root, Expanse::new(800.0, 600.0))
    }

    /// Wrap a tree in a window of the given size and draw the first frame.
    pub fn with_size(core: Core, root: impl Into<NodeId>, size: Expanse) -> Result<Self> {
        let config = AppConfig::default().with_size(size.w, size.h);
        let (_, render) = RecordingRenderer::create();
        let mut h = Self {
            app: App::new(core, root, config),
            render,
        };
        h.frame()?;
        Ok(h)
    }

    /// The node arena.
    pub fn core(&self) -> &Core {
        self.app.core()
    }

    /// Mutable access to the node arena.
    pub fn core_mut(&mut self) -> &mut Core {
        self.app.core_mut()
    }

    /// Root of the tree.
    pub fn root(&self) -> NodeId {
        self.app.root()
    }

    /// Clear the record, then lay out and draw.
    pub fn frame(&mut self) -> Result<()> {
        self.render.clear();
        self.app.layout()?;
        self.app.draw(&mut self.render)
    }

    /// Dispatch one event, then run a frame.
    pub fn event(&mut self, event: &Event) -> Result<()> {
        self.app.handle_event(event, &mut self.render)?;
        self.frame()
    }

    /// Move the pointer to `p`, press and release the left button.
    pub fn click(&mut self, p: impl Into<Point>) -> Result<()> {
        self.event(&Event::MouseMoved(p.into()))?;
        self.event(&Event::MouseButtonPressed {
            button: Button::Left,
            mods: key::Empty,
        })?;
        self.event(&Event::MouseButtonReleased {
            button: Button::Left,
            mods: key::Empty,
        })
    }

    /// Press and release a key.
    pub fn key(&mut self, k: impl Into<Key>) -> Result<()> {
        let key = k.into();
        self.event(&Event::KeyPressed { key, repeat: false })?;
        self.event(&Event::KeyReleased { key })
    }

    /// Press and release a sequence of keys.
    pub fn keys<K: Into<Key>>(&mut self, keys: impl IntoIterator<Item = K>) -> Result<()> {
        for k in keys {
            self.key(k)?;
        }
        Ok(())
    }

    /// Type a string, one key per character. Uppercase ASCII letters are
    /// sent as shifted lowercase keys.
    pub fn type_str(&mut self, s: &str) -> Result<()> {
        for c in s.chars() {
            if c.is_ascii_uppercase() {
                self.key(key::Shift + c.to_ascii_lowercase())?;
            } else {
                self.key(c)?;
            }
        }
        Ok(())
    }

    /// Text drawn in the latest frame.
    pub fn texts(&self) -> Vec<String> {
        self.render.texts()
    }
}
