use crate::{
    Core, LayoutCx, NodeId,
    core::node::{ClickHandler, Node},
    error::Result,
    event::ClickEvent,
    geom::{Edges, Expanse, Point},
    layout::{Constraints, Fixed},
    render::{Color, Renderer},
    widget::Widget,
    widgets::{DEFAULT_FONT_SIZE, line_width},
};

/// A filled box with centered text that runs a callback when clicked.
pub struct Button {
    /// Label text.
    text: String,
    /// Font size.
    font_size: f32,
    /// Text color.
    color: Color,
    /// Fill color.
    background: Color,
    /// Space between the node bounds and the filled box.
    margin: Edges,
    /// Declared width; infinite when unset.
    width: f32,
    /// Declared height; infinite when unset.
    height: f32,
    /// Size to the text instead of filling.
    fit_content: bool,
    /// Click callback, moved onto the node at mount.
    on_click: Option<ClickHandler>,
}

impl Button {
    /// A button with default styling and no action.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::WHITE,
            background: Color::DARK_GRAY,
            margin: Edges::default(),
            width: f32::INFINITY,
            height: f32::INFINITY,
            fit_content: false,
            on_click: None,
        }
    }

    /// Run `f` when the button is clicked.
    pub fn with_on_click(mut self, mut f: impl FnMut(&mut Core, &ClickEvent) + 'static) -> Self {
        self.on_click = Some(Box::new(move |core, ev| {
            f(core, ev);
            true
        }));
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

    /// Set the fill color.
    pub fn with_background(mut self, c: Color) -> Self {
        self.background = c;
        self
    }

    /// Set the margin.
    pub fn with_margin(mut self, m: Edges) -> Self {
        self.margin = m;
        self
    }

    /// Declare a width, making the button width-fixed.
    pub fn with_width(mut self, w: f32) -> Self {
        self.width = w;
        self
    }

    /// Declare a height, making the button height-fixed.
    pub fn with_height(mut self, h: f32) -> Self {
        self.height = h;
        self
    }

    /// Size to the text on both axes.
    pub fn with_fit_content(mut self, fit: bool) -> Self {
        self.fit_content = fit;
        self
    }

    /// Label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Natural size of the label plus margin.
    fn content_size(&self) -> Expanse {
        Expanse::new(
            line_width(&self.text, self.font_size) + self.font_size + self.margin.horizontal(),
            self.font_size * 2.0 + self.margin.vertical(),
        )
    }
}

impl Widget for Button {
    fn name(&self) -> &'static str {
        "button"
    }

    fn on_mount(&mut self, core: &mut Core, id: NodeId) -> Result<()> {
        if let Some(h) = self.on_click.take() {
            core.on_click(id, h)?;
        }
        Ok(())
    }

    fn layout(&mut self, cx: &mut LayoutCx<'_>, c: Constraints) -> Result<Expanse> {
        cx.set_fixed(Fixed {
            width: self.fit_content || self.width.is_finite(),
            height: self.fit_content || self.height.is_finite(),
        });
        let content = self.content_size();
        let pick = |declared: f32, natural: f32, max: f32| {
            if declared.is_finite() {
                declared
            } else if self.fit_content || !max.is_finite() {
                natural
            } else {
                max
            }
        };
        Ok(c.constrain(Expanse::new(
            pick(self.width, content.w, c.max_width),
            pick(self.height, content.h, c.max_height),
        )))
    }

    fn draw(&self, node: &Node, r: &mut dyn Renderer) {
        let m = self.margin;
        let pos = node.position() + Point::new(m.left, m.top);
        let inner = Expanse::new(
            (node.size().w - m.horizontal()).max(0.0),
            (node.size().h - m.vertical()).max(0.0),
        );
        r.draw_quad(pos, inner, self.background, None);

        let text_w = line_width(&self.text, self.font_size);
        let offset = Point::new(
            ((inner.w - text_w) / 2.0).max(0.0),
            ((inner.h - self.font_size) / 2.0).max(0.0),
        );
        r.draw_text(&self.text, pos + offset, self.font_size, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_unless_declared() -> Result<()> {
        let mut core = Core::new();
        let b = core.add(Button::new("ok"))?;
        let c = Constraints::loose(Expanse::new(200.0, 100.0));
        assert_eq!(core.layout(b, c)?, Expanse::new(200.0, 100.0));
        assert_eq!(core.get(b)?.fixed(), Fixed::default());

        let b = core.add(Button::new("ok").with_width(50.0))?;
        assert_eq!(core.layout(b, c)?, Expanse::new(50.0, 100.0));
        assert_eq!(core.get(b)?.fixed(), Fixed { width: true, height: false });
        Ok(())
    }

    #[test]
    fn fit_content() -> Result<()> {
        let mut core = Core::new();
        let b = core.add(Button::new("ok").with_font_size(14.0).with_fit_content(true))?;
        let size = core.layout(b, Constraints::loose(Expanse::new(200.0, 100.0)))?;
        assert_eq!(size, Expanse::new(24.0 + 14.0, 28.0));
        Ok(())
    }
}
