use crate::{
    Core, LayoutCx, NodeId,
    core::node::Node,
    error::Result,
    geom::{Edges, Expanse, Point},
    layout::{Constraints, Fixed},
    render::{Color, Renderer},
    widget::Widget,
};

/// Callback fired with the new value after each toggle.
pub type ToggleCallback = Box<dyn FnMut(&mut Core, bool)>;

/// A box that toggles between checked and unchecked when clicked.
pub struct CheckBox {
    /// Checked state.
    value: bool,
    /// Check mark color.
    color: Color,
    /// Fill color.
    background: Color,
    /// Border color.
    border: Color,
    /// Space between the node bounds and the border.
    margin: Edges,
    /// Declared width.
    width: f32,
    /// Declared height.
    height: f32,
    /// Toggle callback.
    on_change: Option<ToggleCallback>,
}

impl Default for CheckBox {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckBox {
    /// Default edge length.
    pub const SIZE: f32 = 40.0;

    /// An unchecked 40x40 box.
    pub fn new() -> Self {
        Self {
            value: false,
            color: Color::WHITE,
            background: Color::BLACK,
            border: Color::DARK_GRAY,
            margin: Edges::default(),
            width: Self::SIZE,
            height: Self::SIZE,
            on_change: None,
        }
    }

    /// Set the initial state.
    pub fn with_value(mut self, v: bool) -> Self {
        self.value = v;
        self
    }

    /// Set the check mark color.
    pub fn with_color(mut self, c: Color) -> Self {
        self.color = c;
        self
    }

    /// Set the fill color.
    pub fn with_background(mut self, c: Color) -> Self {
        self.background = c;
        self
    }

    /// Set the border color.
    pub fn with_border(mut self, c: Color) -> Self {
        self.border = c;
        self
    }

    /// Set the margin.
    pub fn with_margin(mut self, m: Edges) -> Self {
        self.margin = m;
        self
    }

    /// Set the size. An infinite component makes that axis flexible.
    pub fn with_size(mut self, w: f32, h: f32) -> Self {
        self.width = w;
        self.height = h;
        self
    }

    /// Run `f` with the new value after every toggle.
    pub fn with_on_change(mut self, f: impl FnMut(&mut Core, bool) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Checked state.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Set the state without firing the callback.
    pub fn set_value(&mut self, v: bool) {
        self.value = v;
    }

    /// Flip the state and report it.
    fn toggle(&mut self, core: &mut Core) {
        self.value = !self.value;
        if let Some(cb) = self.on_change.as_mut() {
            cb(core, self.value);
        }
    }
}

impl Widget for CheckBox {
    fn name(&self) -> &'static str {
        "checkbox"
    }

    fn on_mount(&mut self, core: &mut Core, id: NodeId) -> Result<()> {
        core.on_click(id, move |core, _| {
            core.with_widget(id, |cb: &mut Self, core| cb.toggle(core))
                .is_ok()
        })
    }

    fn layout(&mut self, cx: &mut LayoutCx<'_>, c: Constraints) -> Result<Expanse> {
        cx.set_fixed(Fixed {
            width: self.width.is_finite(),
            height: self.height.is_finite(),
        });
        let w = if self.width.is_finite() { self.width } else { c.max_width };
        let h = if self.height.is_finite() { self.height } else { c.max_height };
        Ok(Expanse::new(w, h))
    }

    fn draw(&self, node: &Node, r: &mut dyn Renderer) {
        let m = self.margin;
        let pos = node.position() + Point::new(m.left, m.top);
        let size = Expanse::new(
            (node.size().w - m.horizontal()).max(0.0),
            (node.size().h - m.vertical()).max(0.0),
        );
        let inset = |frac: f32| {
            (
                pos + Point::new(size.w * frac / 2.0, size.h * frac / 2.0),
                Expanse::new(size.w * (1.0 - frac), size.h * (1.0 - frac)),
            )
        };

        if self.background != self.border {
            r.draw_quad(pos, size, self.border, None);
        }
        let (p, s) = inset(0.25);
        r.draw_quad(p, s, self.background, None);
        if self.value {
            let (p, s) = inset(0.6);
            r.draw_quad(p, s, self.color, None);
        }
    }
}
