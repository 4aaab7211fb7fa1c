//! Built-in widgets.

use unicode_width::UnicodeWidthStr;

/// Push button.
pub mod button;
/// Toggle box.
pub mod checkbox;
/// Click decorator.
pub mod clickable;
/// Stacking containers.
pub mod container;
/// Single-line text field.
pub mod input;
/// Static text.
pub mod label;
/// Fixed-size box.
pub mod sized_box;
/// Multi-line editor.
pub mod textarea;

pub use button::Button;
pub use checkbox::CheckBox;
pub use clickable::Clickable;
pub use container::{Container, CrossExtent};
pub use input::Input;
pub use label::Label;
pub use sized_box::SizedBox;
pub use textarea::TextArea;

/// Font size used when none is given.
pub const DEFAULT_FONT_SIZE: f32 = 28.0;

/// Advance of one character cell. Text is never measured by the renderer;
/// every cell is assumed to be this wide.
pub(crate) fn char_width(font_size: f32) -> f32 {
    font_size - font_size / 7.0
}

/// Approximate width of a single line of text.
pub(crate) fn line_width(line: &str, font_size: f32) -> f32 {
    line.width() as f32 * char_width(font_size)
}

/// Approximate extent of a block of text: the widest line, and one line
/// height per line.
pub(crate) fn text_extent(text: &str, font_size: f32) -> (f32, usize) {
    let mut widest = 0.0_f32;
    let mut lines = 0;
    for line in text.split('\n') {
        widest = widest.max(line_width(line, font_size));
        lines += 1;
    }
    (widest, lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics() {
        assert_eq!(char_width(28.0), 24.0);
        assert_eq!(line_width("abc", 28.0), 72.0);
        assert_eq!(text_extent("ab\nabcd", 14.0), (48.0, 2));
        assert_eq!(text_extent("", 14.0), (0.0, 1));
    }
}
