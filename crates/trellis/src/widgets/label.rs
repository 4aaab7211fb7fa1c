use crate::{
    LayoutCx,
    core::node::Node,
    error::Result,
    geom::{Edges, Expanse, Point},
    layout::{Constraints, Fixed},
    render::{Color, Renderer},
    widget::Widget,
    widgets::{DEFAULT_FONT_SIZE, text_extent},
};

/// Static text. A label's height is fixed by its line count; it stretches to
/// the available width unless told to fit its content.
#[derive(Debug, Clone)]
pub struct Label {
    /// Text, possibly spanning several lines.
    text: String,
    /// Font size.
    font_size: f32,
    /// Text color.
    color: Color,
    /// Space around the text.
    margin: Edges,
    /// Size the width to the text instead of filling.
    fit_content: bool,
}

impl Label {
    /// A label with default font and color.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::BLACK,
            margin: Edges::default(),
            fit_content: false,
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

    /// Set the margin.
    pub fn with_margin(mut self, m: Edges) -> Self {
        self.margin = m;
        self
    }

    /// Size the width to the text.
    pub fn with_fit_content(mut self, fit: bool) -> Self {
        self.fit_content = fit;
        self
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Font size.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

impl Widget for Label {
    fn name(&self) -> &'static str {
        "label"
    }

    fn layout(&mut self, cx: &mut LayoutCx<'_>, c: Constraints) -> Result<Expanse> {
        cx.set_fixed(Fixed {
            width: self.fit_content,
            height: true,
        });
        let (content, lines) = text_extent(&self.text, self.font_size);
        let w = if self.fit_content || !c.max_width.is_finite() {
            c.constrain_width(content + self.font_size + self.margin.horizontal())
        } else {
            c.max_width
        };
        let h = c.constrain_height(self.font_size * (lines + 1) as f32 + self.margin.vertical());
        Ok(Expanse::new(w, h))
    }

    fn draw(&self, node: &Node, r: &mut dyn Renderer) {
        let half = self.font_size / 2.0;
        let origin = node.position() + Point::new(self.margin.left + half, self.margin.top + half);
        for (i, line) in self.text.split('\n').enumerate() {
            let at = Point::new(origin.x, origin.y + i as f32 * self.font_size);
            r.draw_text(line, at, self.font_size, self.color);
        }
    }
}
