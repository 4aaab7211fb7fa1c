//! Stacking containers: [`Container`], plus the row and column variants.

use crate::{
    LayoutCx, NodeId,
    core::node::Node,
    error::Result,
    geom::{Axis, Edges, Expanse, Point},
    layout::{Alignment, AxisAlign, Constraints, Fixed, clamp},
    render::{Color, Renderer},
    widget::Widget,
};

/// How a container combines its children's extents on the axis
/// perpendicular to stacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossExtent {
    /// The widest child sets the extent.
    Max,
    /// Extents add up, and space on that axis is shared among flexible
    /// children.
    Sum,
}

/// A widget that stacks its children along one axis.
///
/// Children whose size on an axis does not depend on the space offered (see
/// [`Fixed`]) keep their size. The remaining space is split evenly among the
/// flexible children. When every child on an axis is fixed, the leftover space
/// is distributed according to the axis policy instead.
#[derive(Debug, Clone)]
pub struct Container {
    /// Widget name.
    name: &'static str,
    /// Stacking axis.
    axis: Axis,
    /// Perpendicular extent policy.
    cross_extent: CrossExtent,
    /// Fill color.
    background: Color,
    /// Inner padding.
    padding: Edges,
    /// Fill policy.
    alignment: Alignment,
    /// Leftover placement along the stacking axis.
    main_axis: AxisAlign,
    /// Leftover placement across the stacking axis.
    cross_axis: AxisAlign,
    /// Declared width; infinite when unset.
    width: f32,
    /// Declared height; infinite when unset.
    height: f32,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    /// A vertical container that sums its children's widths.
    pub fn new() -> Self {
        Self {
            name: "container",
            axis: Axis::Vertical,
            cross_extent: CrossExtent::Sum,
            background: Color::TRANSPARENT,
            padding: Edges::default(),
            alignment: Alignment::None,
            main_axis: AxisAlign::Start,
            cross_axis: AxisAlign::Start,
            width: f32::INFINITY,
            height: f32::INFINITY,
        }
    }

    /// Children side by side, left to right.
    pub fn row() -> Self {
        Self {
            name: "row",
            axis: Axis::Horizontal,
            cross_extent: CrossExtent::Max,
            ..Self::new()
        }
    }

    /// Children stacked top to bottom.
    pub fn column() -> Self {
        Self {
            name: "column",
            axis: Axis::Vertical,
            cross_extent: CrossExtent::Max,
            ..Self::new()
        }
    }

    /// Set the fill color.
    pub fn with_background(mut self, c: Color) -> Self {
        self.background = c;
        self
    }

    /// Set the inner padding.
    pub fn with_padding(mut self, p: Edges) -> Self {
        self.padding = p;
        self
    }

    /// Set the fill policy.
    pub fn with_alignment(mut self, a: Alignment) -> Self {
        self.alignment = a;
        self
    }

    /// Set leftover placement along the stacking axis.
    pub fn with_main_axis(mut self, a: AxisAlign) -> Self {
        self.main_axis = a;
        self
    }

    /// Set leftover placement across the stacking axis.
    pub fn with_cross_axis(mut self, a: AxisAlign) -> Self {
        self.cross_axis = a;
        self
    }

    /// Declare a width. A declared width makes the container width-fixed.
    pub fn with_width(mut self, w: f32) -> Self {
        self.width = w;
        self
    }

    /// Declare a height. A declared height makes the container height-fixed.
    pub fn with_height(mut self, h: f32) -> Self {
        self.height = h;
        self
    }

    /// Stacking axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Fill color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Replace the fill color.
    pub fn set_background(&mut self, c: Color) {
        self.background = c;
    }

    /// Inner padding.
    pub fn padding(&self) -> Edges {
        self.padding
    }

    /// Fill policy.
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Lower bound on one axis. Filling only applies when there is a finite
    /// maximum to fill to.
    fn min_along(&self, axis: Axis, incoming: f32, max: f32) -> f32 {
        if self.alignment.fills(axis) && max.is_finite() {
            max
        } else {
            incoming.min(max)
        }
    }

    /// Policy for leftover space on an axis.
    fn policy(&self, axis: Axis) -> AxisAlign {
        if axis == self.axis {
            self.main_axis
        } else {
            self.cross_axis
        }
    }

    /// The content origin for a container placed at `pos`.
    fn position_in(&self, pos: Point) -> Point {
        Point::new(pos.x + self.padding.left, pos.y + self.padding.top)
    }

    /// Does this container share space among children on `axis`?
    fn divides(&self, axis: Axis) -> bool {
        axis == self.axis || self.cross_extent == CrossExtent::Sum
    }
}

/// Per-axis bookkeeping from the measurement pass.
#[derive(Default)]
struct FixedTally {
    /// Sum of fixed extents.
    sum: f32,
    /// Largest fixed extent.
    max: f32,
    /// Number of fixed children.
    count: usize,
}

impl Widget for Container {
    fn name(&self) -> &'static str {
        self.name
    }

    fn layout(&mut self, cx: &mut LayoutCx<'_>, c: Constraints) -> Result<Expanse> {
        let max = Expanse::new(c.max_width.min(self.width), c.max_height.min(self.height));
        cx.set_fixed(Fixed {
            width: self.width.is_finite(),
            height: self.height.is_finite(),
        });
        let min = Expanse::new(
            self.min_along(Axis::Horizontal, c.min_width, max.w),
            self.min_along(Axis::Vertical, c.min_height, max.h),
        );
        let avail = Constraints::loose(max).deflate(self.padding).max();

        let children: Vec<NodeId> = cx
            .children()
            .into_iter()
            .filter(|id| cx.is_displayed(*id))
            .collect();
        let visible = children.len();
        let slots = visible.max(1) as f32;

        // Measure once to learn which children are fixed, and how big.
        let provisional = avail.with_along(self.axis, avail.along(self.axis) / slots);
        let mut tally = [FixedTally::default(), FixedTally::default()];
        for child in &children {
            let size = cx.layout_child(*child, Constraints::loose(provisional))?;
            let fixed = cx.fixed(*child);
            for (axis, t) in [Axis::Horizontal, Axis::Vertical].into_iter().zip(&mut tally) {
                if fixed.along(axis) {
                    let v = size.along(axis);
                    t.sum += v;
                    t.max = t.max.max(v);
                    t.count += 1;
                }
            }
        }

        let mut start = self.position_in(cx.position());
        let mut per_child = avail;
        let mut extra = Expanse::default();
        for (axis, t) in [Axis::Horizontal, Axis::Vertical].into_iter().zip(&tally) {
            let divides = self.divides(axis);
            let used = if divides { t.sum } else { t.max };
            let remaining = (avail.along(axis) - used).max(0.0);
            let mut flexible = visible - t.count;
            if flexible == 0 {
                flexible = 1;
                let leftover = if remaining.is_finite() { remaining } else { 0.0 };
                let policy = self.policy(axis);
                start = start.with_along(axis, start.along(axis) + policy.offset(leftover));
                if policy != AxisAlign::Start {
                    extra = extra.with_along(axis, leftover);
                }
            }
            if divides {
                per_child = per_child.with_along(axis, remaining / flexible as f32);
            }
        }

        // Final pass: place and size each child for real.
        let mut cursor = start;
        let mut total = Expanse::default();
        for child in &children {
            cx.place_child(*child, cursor)?;
            let size = cx.layout_child(*child, Constraints::loose(per_child))?;
            let main = size.along(self.axis);
            cursor = cursor.with_along(self.axis, cursor.along(self.axis) + main);
            total = total.with_along(self.axis, total.along(self.axis) + main);

            let cross = self.axis.cross();
            let c_ext = size.along(cross);
            let t = match self.cross_extent {
                CrossExtent::Max => total.along(cross).max(c_ext),
                CrossExtent::Sum => total.along(cross) + c_ext,
            };
            total = total.with_along(cross, t);
        }

        let pad = self.padding.total();
        Ok(Expanse::new(
            clamp(total.w + extra.w + pad.w, min.w, max.w),
            clamp(total.h + extra.h + pad.h, min.h, max.h),
        ))
    }

    fn draw(&self, node: &Node, r: &mut dyn Renderer) {
        if self.background.a > 0.0 {
            r.draw_quad(node.position(), node.size(), self.background, None);
        }
    }
}
