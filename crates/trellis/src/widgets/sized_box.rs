use crate::{
    LayoutCx,
    core::node::Node,
    error::Result,
    geom::Expanse,
    layout::{Constraints, Fixed},
    render::{Color, Renderer},
    widget::Widget,
};

/// A box of a set size. It ignores the space it is offered, which makes it
/// useful as a spacer or a swatch.
#[derive(Debug, Clone)]
pub struct SizedBox {
    /// Declared size.
    size: Expanse,
    /// Fill color.
    color: Color,
}

impl SizedBox {
    /// A transparent box.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Expanse::new(width, height),
            color: Color::TRANSPARENT,
        }
    }

    /// Set the fill color.
    pub fn with_color(mut self, c: Color) -> Self {
        self.color = c;
        self
    }

    /// Declared size.
    pub fn size(&self) -> Expanse {
        self.size
    }
}

impl Widget for SizedBox {
    fn name(&self) -> &'static str {
        "sized-box"
    }

    fn layout(&mut self, cx: &mut LayoutCx<'_>, _c: Constraints) -> Result<Expanse> {
        cx.set_fixed(Fixed::BOTH);
        Ok(self.size)
    }

    fn draw(&self, node: &Node, r: &mut dyn Renderer) {
        r.draw_quad(node.position(), node.size(), self.color, None);
    }
}
