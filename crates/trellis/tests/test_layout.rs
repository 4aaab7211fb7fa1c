//! Integration tests for constraint layout.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use trellis::{
        Core, NodeId,
        error::Result,
        geom::{Expanse, Point},
        layout::{Alignment, Constraints},
        render::Color,
        testing::{DrawOp, RecordingRenderer},
        widgets::{Container, Label, SizedBox},
    };

    /// Fill `row` with boxes of the given widths.
    fn row_of(core: &mut Core, row: Container, widths: &[f32]) -> Result<(NodeId, Vec<NodeId>)> {
        let row = core.add(row)?;
        let mut kids = Vec::new();
        for w in widths {
            kids.push(core.add_child_widget(row, SizedBox::new(*w, 30.0))?.into());
        }
        Ok((row.into(), kids))
    }

    /// A row, a column or a summing container, picked by `kind`.
    fn container_of(kind: usize) -> Container {
        match kind % 3 {
            0 => Container::row(),
            1 => Container::column(),
            _ => Container::new(),
        }
    }

    /// Every node's position and size, in visit order.
    fn geometry(core: &mut Core, root: NodeId) -> Vec<(Point, Expanse)> {
        let mut out = Vec::new();
        core.visit(root, &mut |core, id| {
            if let Some(n) = core.node(id) {
                out.push((n.position(), n.size()));
            }
            true
        });
        out
    }

    #[test]
    fn row_of_fixed_boxes() -> Result<()> {
        let mut core = Core::new();
        let (row, kids) = row_of(&mut core, Container::row(), &[100.0, 150.0, 200.0])?;
        core.set_position(row, Point::new(10.0, 20.0))?;
        let size = core.layout(row, Constraints::loose(Expanse::new(1000.0, 100.0)))?;

        assert_eq!(size, Expanse::new(450.0, 30.0));
        assert_eq!(core.get(kids[0])?.position(), Point::new(10.0, 20.0));
        assert_eq!(core.get(kids[1])?.position(), Point::new(110.0, 20.0));
        assert_eq!(core.get(kids[2])?.position(), Point::new(260.0, 20.0));
        Ok(())
    }

    #[test]
    fn empty_centered_column_fills() -> Result<()> {
        let mut core = Core::new();
        let col = core.add(Container::column().with_alignment(Alignment::Center))?;
        let size = core.layout(col, Constraints::new(0.0, 0.0, 500.0, 500.0))?;
        assert_eq!(size, Expanse::new(500.0, 500.0));
        Ok(())
    }

    #[test]
    fn hidden_children_take_no_space() -> Result<()> {
        let mut core = Core::new();
        let (row, kids) = row_of(&mut core, Container::row(), &[40.0, 50.0, 60.0])?;
        core.set_display(kids[1], false)?;
        let size = core.layout(row, Constraints::loose(Expanse::new(500.0, 100.0)))?;
        assert_eq!(size.w, 100.0);
        assert_eq!(core.get(kids[2])?.position().x, 40.0);
        Ok(())
    }

    #[test]
    fn flexible_labels_share_a_column() -> Result<()> {
        let mut core = Core::new();
        let col = core.add(Container::column().with_alignment(Alignment::Center))?;
        let a = core.add_child_widget(col, Label::new("one"))?;
        let b = core.add_child_widget(col, Label::new("two\nlines"))?;
        core.layout(col, Constraints::loose(Expanse::new(300.0, 400.0)))?;

        assert_eq!(core.get(a)?.size(), Expanse::new(300.0, 56.0));
        assert_eq!(core.get(b)?.size(), Expanse::new(300.0, 84.0));
        assert_eq!(core.get(b)?.position(), Point::new(0.0, 56.0));
        Ok(())
    }

    #[test]
    fn layout_is_idempotent() -> Result<()> {
        let mut core = Core::new();
        let root = core.add(Container::column().with_alignment(Alignment::Center))?;
        let (row, _) = row_of(&mut core, Container::row(), &[10.0, 20.0])?;
        core.add_child(root, row)?;
        let inner = core.add_child_widget(root, Container::new())?;
        core.add_child_widget(inner, Label::new("text"))?;
        core.add_child_widget(inner, SizedBox::new(5.0, 5.0))?;

        let c = Constraints::loose(Expanse::new(640.0, 480.0));
        let first = core.layout(root, c)?;
        let g1 = geometry(&mut core, root.into());
        let second = core.layout(root, c)?;
        let g2 = geometry(&mut core, root.into());
        assert_eq!(first, second);
        assert_eq!(g1, g2);
        Ok(())
    }

    #[test]
    fn draws_parents_before_children_and_skips_hidden() -> Result<()> {
        let mut core = Core::new();
        let root = core.add(Container::column().with_background(Color::BLUE))?;
        core.add_child_widget(root, SizedBox::new(10.0, 10.0).with_color(Color::RED))?;
        let hidden = core.add_child_widget(root, Label::new("secret"))?;
        core.set_display(hidden, false)?;
        core.layout(root, Constraints::loose(Expanse::new(100.0, 100.0)))?;

        let (buf, mut r) = RecordingRenderer::create();
        core.draw(root, &mut r)?;
        let colors: Vec<Color> = r
            .record()
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Quad { color, .. } => Some(*color),
                DrawOp::Text { .. } => None,
            })
            .collect();
        assert_eq!(colors, vec![Color::BLUE, Color::RED]);
        assert!(!r.contains_text("secret"));
        assert_eq!(buf.lock().map(|b| b.ops.len()).unwrap_or(0), 2);
        Ok(())
    }

    proptest! {
        #[test]
        fn fixed_children_sum(widths in proptest::collection::vec(1.0f32..100.0, 0..8)) {
            let mut core = Core::new();
            let (row, kids) = row_of(&mut core, Container::row(), &widths).unwrap();
            let size = core.layout(row, Constraints::loose(Expanse::new(1000.0, 100.0))).unwrap();
            let sum: f32 = widths.iter().sum();
            prop_assert!((size.w - sum).abs() < 1e-3);

            let mut x = 0.0;
            for (k, w) in kids.iter().zip(&widths) {
                let pos = core.get(*k).unwrap().position();
                prop_assert!((pos.x - x).abs() < 1e-3);
                x += w;
            }
        }

        #[test]
        fn size_respects_bounds(
            max_w in 0.0f32..800.0,
            max_h in 0.0f32..800.0,
            open_w in any::<bool>(),
            open_h in any::<bool>(),
            min_frac in 0.0f32..=1.0,
            widths in proptest::collection::vec(0.0f32..300.0, 0..6),
            align in 0usize..4,
            kind in 0usize..3,
            nested in any::<bool>(),
        ) {
            let alignment = [
                Alignment::None,
                Alignment::Horizontal,
                Alignment::Vertical,
                Alignment::Center,
            ][align];
            let base = container_of(kind);
            let mut core = Core::new();
            let (root, _) = row_of(&mut core, base.with_alignment(alignment), &widths).unwrap();
            if nested {
                let inner = container_of(kind + 1).with_alignment(alignment);
                let (inner, _) = row_of(&mut core, inner, &widths).unwrap();
                core.add_child(root, inner).unwrap();
            }

            let max_w = if open_w { f32::INFINITY } else { max_w };
            let max_h = if open_h { f32::INFINITY } else { max_h };
            let min_w = if open_w { 400.0 * min_frac } else { max_w * min_frac };
            let min_h = if open_h { 400.0 * min_frac } else { max_h * min_frac };
            let c = Constraints::new(min_w, min_h, max_w, max_h);
            let size = core.layout(root, c).unwrap();

            prop_assert!(size.w.is_finite() && size.h.is_finite());
            prop_assert!(size.w >= min_w && size.w <= max_w);
            prop_assert!(size.h >= min_h && size.h <= max_h);
            if alignment == Alignment::Center && !open_w && !open_h {
                prop_assert_eq!(size, Expanse::new(max_w, max_h));
            }
            prop_assert_eq!(core.layout(root, c).unwrap(), size);
        }
    }
}
