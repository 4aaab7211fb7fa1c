use crate::{
    Core, LayoutCx, NodeId,
    core::node::Node,
    error::Result,
    event::{KeyEvent, key::KeyCode},
    geom::{Expanse, Point},
    layout::{Constraints, Fixed},
    render::{Color, Effect, Renderer},
    widget::Widget,
    widgets::{DEFAULT_FONT_SIZE, line_width},
};

/// Callback fired with the new text after each edit.
pub type ChangeCallback = Box<dyn FnMut(&mut Core, &str)>;

/// Fill color while focused.
const FOCUSED: Color = Color::rgba(0xAA22_22FF);
/// Fill color while unfocused.
const UNFOCUSED: Color = Color::rgba(0x2222_22FF);

/// A single-line text field. It takes keys only while focused.
pub struct Input {
    /// Current text.
    text: String,
    /// Placeholder shown while empty.
    hint: String,
    /// Font size.
    font_size: f32,
    /// Text color.
    color: Color,
    /// Change callback.
    on_change: Option<ChangeCallback>,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    /// An empty field.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            hint: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::WHITE,
            on_change: None,
        }
    }

    /// Set the initial text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the placeholder.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the text color.
    pub fn with_color(mut self, c: Color) -> Self {
        self.color = c;
        self
    }

    /// Run `f` with the new text after every edit.
    pub fn with_on_change(mut self, f: impl FnMut(&mut Core, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text without firing the change callback.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Placeholder.
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Apply a key press. Returns true if the key was consumed; the change
    /// callback fires only when the text actually changed.
    fn handle_key(&mut self, core: &mut Core, id: NodeId, ev: &KeyEvent) -> bool {
        if !ev.is_press() || !core.node(id).is_some_and(Node::is_focused) {
            return false;
        }
        match ev.key.key {
            KeyCode::Backspace => {
                if self.text.pop().is_none() {
                    return true;
                }
            }
            _ => match ev.key.text() {
                Some(c) => self.text.push(c),
                None => return false,
            },
        }
        if let Some(cb) = self.on_change.as_mut() {
            cb(core, &self.text);
        }
        true
    }
}

impl Widget for Input {
    fn name(&self) -> &'static str {
        "input"
    }

    fn on_mount(&mut self, core: &mut Core, id: NodeId) -> Result<()> {
        core.set_focusable(id, true)?;
        core.on_key(id, move |core, ev| {
            core.with_widget(id, |input: &mut Self, core| input.handle_key(core, id, ev))
                .unwrap_or(false)
        })
    }

    fn layout(&mut self, cx: &mut LayoutCx<'_>, c: Constraints) -> Result<Expanse> {
        cx.set_fixed(Fixed {
            width: false,
            height: true,
        });
        let w = if c.max_width.is_finite() {
            c.max_width
        } else {
            c.constrain_width(line_width(&self.text, self.font_size))
        };
        Ok(Expanse::new(w, c.constrain_height(self.font_size * 2.0)))
    }

    fn draw(&self, node: &Node, r: &mut dyn Renderer) {
        let fill = if node.is_focused() { FOCUSED } else { UNFOCUSED };
        r.draw_quad(node.position(), node.size(), fill, Some(Effect::Rounded));

        let half = self.font_size / 2.0;
        let at = node.position() + Point::new(half, half);
        if self.text.is_empty() && !self.hint.is_empty() {
            let mut hint = self.color;
            hint.a *= 0.5;
            r.draw_text(&self.hint, at, self.font_size, hint);
        } else {
            r.draw_text(&self.text, at, self.font_size, self.color);
        }

        if node.is_focused() {
            let x = line_width(&self.text, self.font_size);
            r.draw_quad(
                at + Point::new(x, 0.0),
                Expanse::new(self.font_size * 0.2, self.font_size),
                self.color,
                None,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::event::{Action, key::Key};

    /// Deliver a key press to `id`.
    fn press(core: &mut Core, id: NodeId, key: impl Into<Key>) -> Result<bool> {
        core.fire_key(
            id,
            &KeyEvent {
                target: id,
                key: key.into(),
                action: Action::Pressed,
                repeat: false,
            },
        )
    }

    #[test]
    fn backspace_on_empty_changes_nothing() -> Result<()> {
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        let mut core = Core::new();
        let id = core.add(Input::new().with_on_change(move |_, _| c.set(c.get() + 1)))?;
        core.set_focus(id, id)?;

        assert!(press(&mut core, id.into(), KeyCode::Backspace)?);
        assert_eq!(calls.get(), 0);

        press(&mut core, id.into(), 'a')?;
        press(&mut core, id.into(), KeyCode::Backspace)?;
        assert_eq!(calls.get(), 2);
        assert_eq!(core.widget::<Input>(id)?.text(), "");
        Ok(())
    }

    #[test]
    fn natural_width_counts_display_columns() -> Result<()> {
        let mut core = Core::new();
        let id = core.add(Input::new().with_text("日本"))?;
        let size = core.layout(id, Constraints::unbounded())?;
        assert_eq!(size.w, line_width("日本", DEFAULT_FONT_SIZE));
        assert_eq!(size.w, 96.0);
        Ok(())
    }
}
