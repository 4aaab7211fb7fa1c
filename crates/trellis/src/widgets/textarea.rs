use crate::{
    Core, LayoutCx, NodeId,
    core::node::Node,
    editor::Editor,
    error::Result,
    event::{KeyEvent, key::KeyCode},
    geom::{Expanse, Point},
    layout::Constraints,
    render::{Color, Effect, Renderer},
    widget::Widget,
    widgets::{DEFAULT_FONT_SIZE, input::ChangeCallback, line_width, text_extent},
};

/// Fill color while focused.
const FOCUSED: Color = Color::rgba(0xAA22_22FF);
/// Fill color while unfocused, also used for the caret.
const UNFOCUSED: Color = Color::rgba(0x2222_22FF);

/// What a key press did to the buffer.
enum Outcome {
    /// Not ours.
    Ignored,
    /// Cursor or selection moved.
    Moved,
    /// Text changed.
    Edited,
}

/// A multi-line text editor. It fills the space it is offered and takes
/// keys only while focused. A read-only text area still allows navigation.
pub struct TextArea {
    /// Buffer and cursor.
    editor: Editor,
    /// Font size.
    font_size: f32,
    /// Text color.
    color: Color,
    /// Accept edits?
    editable: bool,
    /// Change callback.
    on_change: Option<ChangeCallback>,
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new("")
    }
}

impl TextArea {
    /// An editable text area holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            editor: Editor::new(text),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::BLACK,
            editable: true,
            on_change: None,
        }
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

    /// Allow or forbid edits.
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Run `f` with the new text after every edit.
    pub fn with_on_change(mut self, f: impl FnMut(&mut Core, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Current text.
    pub fn text(&self) -> &str {
        self.editor.text()
    }

    /// Replace the text without firing the change callback.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.editor.set_text(text);
    }

    /// Does this text area accept edits?
    pub fn editable(&self) -> bool {
        self.editable
    }

    /// The underlying editor.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Mutable access to the underlying editor.
    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    /// Apply a navigation key.
    fn navigate(&mut self, ev: &KeyEvent) -> Outcome {
        let mods = ev.key.mods;
        let e = &mut self.editor;
        let motion: fn(&mut Editor) = match ev.key.key {
            KeyCode::Up => Editor::move_line_up,
            KeyCode::Down => Editor::move_line_down,
            KeyCode::Left if mods.ctrl => Editor::move_word_left,
            KeyCode::Left => Editor::move_char_left,
            KeyCode::Right if mods.ctrl => Editor::move_word_right,
            KeyCode::Right => Editor::move_char_right,
            KeyCode::Home if mods.ctrl => Editor::move_to_begin,
            KeyCode::Home => Editor::move_to_line_begin,
            KeyCode::End if mods.ctrl => Editor::move_to_end,
            KeyCode::End => Editor::move_to_line_end,
            KeyCode::PageUp => Editor::move_paragraph_up,
            KeyCode::PageDown => Editor::move_paragraph_down,
            KeyCode::Char('c') if mods.ctrl => {
                e.clipboard_copy();
                return Outcome::Moved;
            }
            _ => return Outcome::Ignored,
        };
        e.update_selection(mods.shift);
        motion(e);
        Outcome::Moved
    }

    /// Apply an editing key.
    fn edit(&mut self, ev: &KeyEvent) -> Outcome {
        let e = &mut self.editor;
        match ev.key.key {
            KeyCode::Backspace => {
                if e.text().is_empty() {
                    return Outcome::Moved;
                }
                e.backspace();
            }
            KeyCode::Delete => e.delete_char(),
            KeyCode::Enter => e.insert_char('\n'),
            KeyCode::Tab => e.insert_str("  "),
            KeyCode::Char('v') if ev.key.mods.ctrl => e.clipboard_paste(),
            _ => match ev.key.text() {
                Some(c) => e.insert_char(c),
                None => return Outcome::Ignored,
            },
        }
        e.update_selection(false);
        Outcome::Edited
    }

    /// Apply a key press. Returns true if the key was used.
    fn handle_key(&mut self, core: &mut Core, id: NodeId, ev: &KeyEvent) -> bool {
        if !ev.is_press() || !core.node(id).is_some_and(Node::is_focused) {
            return false;
        }
        let outcome = match self.navigate(ev) {
            Outcome::Ignored if self.editable => self.edit(ev),
            o => o,
        };
        match outcome {
            Outcome::Ignored => false,
            Outcome::Moved => true,
            Outcome::Edited => {
                if let Some(cb) = self.on_change.as_mut() {
                    cb(core, self.editor.text());
                }
                true
            }
        }
    }
}

impl Widget for TextArea {
    fn name(&self) -> &'static str {
        "textarea"
    }

    fn on_mount(&mut self, core: &mut Core, id: NodeId) -> Result<()> {
        core.set_focusable(id, true)?;
        core.on_key(id, move |core, ev| {
            core.with_widget(id, |ta: &mut Self, core| ta.handle_key(core, id, ev))
                .unwrap_or(false)
        })
    }

    fn layout(&mut self, _cx: &mut LayoutCx<'_>, c: Constraints) -> Result<Expanse> {
        let (widest, _) = text_extent(self.editor.text(), self.font_size);
        let natural = Expanse::new(
            widest + self.font_size,
            (self.editor.lines().len() + 1) as f32 * self.font_size,
        );
        let pick = |max: f32, n: f32| if max.is_finite() { max } else { n };
        Ok(c.constrain(Expanse::new(
            pick(c.max_width, natural.w),
            pick(c.max_height, natural.h),
        )))
    }

    fn draw(&self, node: &Node, r: &mut dyn Renderer) {
        let focused = node.is_focused();
        r.draw_quad(
            node.position(),
            node.size(),
            if focused { FOCUSED } else { UNFOCUSED },
            Some(Effect::Rounded),
        );

        let half = self.font_size / 2.0;
        let origin = node.position() + Point::new(half, half);
        for (row, line) in self.editor.lines().iter().enumerate() {
            let at = origin + Point::new(0.0, row as f32 * self.font_size);
            r.draw_text(
                &self.editor.text()[line.begin..line.end],
                at,
                self.font_size,
                self.color,
            );
        }

        if focused {
            let row = self.editor.cursor_row();
            let begin = self.editor.lines().get(row).map_or(0, |l| l.begin);
            let before = self
                .editor
                .text()
                .get(begin..self.editor.cursor())
                .unwrap_or_default();
            r.draw_quad(
                origin
                    + Point::new(
                        line_width(before, self.font_size),
                        self.font_size * row as f32,
                    ),
                Expanse::new(self.font_size * 0.2, self.font_size),
                UNFOCUSED,
                None,
            );
        }
    }
}
