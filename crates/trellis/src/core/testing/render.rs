use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    geom::{Expanse, Point},
    render::{Color, Effect, Renderer},
};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A filled rectangle.
    Quad {
        /// Top-left corner.
        position: Point,
        /// Extent.
        size: Expanse,
        /// Fill.
        color: Color,
        /// Treatment.
        effect: Option<Effect>,
    },
    /// A run of text.
    Text {
        /// The text.
        text: String,
        /// Top-left corner.
        position: Point,
        /// Font size.
        font_size: f32,
        /// Color.
        color: Color,
    },
}

/// Everything a [`RecordingRenderer`] has seen.
#[derive(Debug, Default)]
pub struct RecordBuf {
    /// Draw calls, in order.
    pub ops: Vec<DrawOp>,
    /// Sizes passed to `resize`, in order.
    pub resizes: Vec<Expanse>,
}

impl RecordBuf {
    /// Text of every recorded text draw, in order.
    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                DrawOp::Quad { .. } => None,
            })
            .collect()
    }

    /// Number of recorded quads.
    pub fn quads(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Quad { .. }))
            .count()
    }

    /// Does any recorded text contain `s`?
    pub fn contains(&self, s: &str) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text { text, .. } if text.contains(s)))
    }
}

/// A renderer for testing, which records draw calls instead of painting.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    /// Shared record.
    pub buf: Arc<Mutex<RecordBuf>>,
}

impl RecordingRenderer {
    /// Create a renderer and a handle to its record, which stays readable
    /// after the renderer is moved into an app or harness.
    pub fn create() -> (Arc<Mutex<RecordBuf>>, Self) {
        let buf = Arc::new(Mutex::new(RecordBuf::default()));
        (buf.clone(), Self { buf })
    }

    /// Lock the record.
    pub fn record(&self) -> MutexGuard<'_, RecordBuf> {
        self.buf.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        let mut buf = self.record();
        buf.ops.clear();
        buf.resizes.clear();
    }

    /// Text of every recorded text draw.
    pub fn texts(&self) -> Vec<String> {
        self.record().texts()
    }

    /// Does any recorded text contain `s`?
    pub fn contains_text(&self, s: &str) -> bool {
        self.record().contains(s)
    }
}

impl Renderer for RecordingRenderer {
    fn draw_quad(&mut self, position: Point, size: Expanse, color: Color, effect: Option<Effect>) {
        self.record().ops.push(DrawOp::Quad {
            position,
            size,
            color,
            effect,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, font_size: f32, color: Color) {
        self.record().ops.push(DrawOp::Text {
            text: text.to_string(),
            position,
            font_size,
            color,
        });
    }

    fn resize(&mut self, size: Expanse) {
        self.record().resizes.push(size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_through_the_shared_handle() {
        let (buf, mut r) = RecordingRenderer::create();
        r.draw_quad(Point::zero(), Expanse::new(1.0, 1.0), Color::RED, None);
        r.draw_text("hi", Point::zero(), 10.0, Color::BLACK);
        r.resize(Expanse::new(5.0, 5.0));
        {
            let b = buf.lock().unwrap_or_else(PoisonError::into_inner);
            assert_eq!(b.quads(), 1);
            assert_eq!(b.texts(), vec!["hi".to_string()]);
            assert_eq!(b.resizes, vec![Expanse::new(5.0, 5.0)]);
        }
        r.clear();
        assert!(r.texts().is_empty());
    }
}
