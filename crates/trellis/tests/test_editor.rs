//! Integration tests for the text editing core.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use trellis::editor::Editor;

    /// Line spans as tuples.
    fn spans(e: &Editor) -> Vec<(usize, usize)> {
        e.lines().iter().map(|l| (l.begin, l.end)).collect()
    }

    #[test]
    fn insert_in_first_line() {
        let mut e = Editor::new("ab\ncd");
        e.set_cursor(1);
        e.insert_char('X');
        assert_eq!(e.text(), "aXb\ncd");
        assert_eq!(e.cursor(), 2);
        assert_eq!(spans(&e), vec![(0, 3), (4, 6)]);
    }

    #[test]
    fn empty_buffer_has_one_line() {
        let e = Editor::new("");
        assert_eq!(spans(&e), vec![(0, 0)]);
        assert_eq!((e.cursor_row(), e.cursor_column()), (0, 0));
    }

    #[test]
    fn trailing_newline_opens_a_line() {
        let mut e = Editor::new("a\n");
        e.move_to_end();
        assert_eq!(spans(&e), vec![(0, 1), (2, 2)]);
        assert_eq!(e.cursor_row(), 1);
    }

    /// Short ASCII texts with newlines.
    fn text_strategy() -> impl Strategy<Value = String> {
        "[a-z0-9 .\n]{0,40}"
    }

    proptest! {
        #[test]
        fn set_text_round_trips(text in text_strategy()) {
            let mut e = Editor::new("seed");
            e.set_text(text.clone());
            prop_assert_eq!(e.text(), text.as_str());
            prop_assert_eq!(e.cursor(), 0);
        }

        #[test]
        fn insert_then_backspace_restores(
            text in text_strategy(),
            at in 0usize..=40,
            c in proptest::char::range('a', 'z'),
        ) {
            let mut e = Editor::new(text.clone());
            e.set_cursor(at);
            let before = e.cursor();
            e.insert_char(c);
            prop_assert_eq!(e.cursor(), before + 1);
            e.backspace();
            prop_assert_eq!(e.text(), text.as_str());
            prop_assert_eq!(e.cursor(), before);
        }

        #[test]
        fn lines_cover_the_buffer(text in text_strategy()) {
            let e = Editor::new(text.clone());
            let joined: Vec<&str> = e.lines().iter().map(|l| &text[l.begin..l.end]).collect();
            prop_assert_eq!(joined.join("\n"), text.clone());
            prop_assert_eq!(e.lines().len(), text.matches('\n').count() + 1);
        }

        #[test]
        fn line_end_lands_on_line_end(text in text_strategy(), at in 0usize..=40) {
            let mut e = Editor::new(text);
            e.set_cursor(at);
            let row = e.cursor_row();
            e.move_to_line_end();
            prop_assert_eq!(e.cursor(), e.lines()[row].end);
            prop_assert_eq!(e.cursor_row(), row);
        }

        #[test]
        fn cursor_stays_in_bounds(
            text in text_strategy(),
            moves in proptest::collection::vec(0u8..8, 0..30),
        ) {
            let mut e = Editor::new(text);
            for m in moves {
                match m {
                    0 => e.move_char_left(),
                    1 => e.move_char_right(),
                    2 => e.move_line_up(),
                    3 => e.move_line_down(),
                    4 => e.move_word_left(),
                    5 => e.move_word_right(),
                    6 => e.move_paragraph_up(),
                    _ => e.move_paragraph_down(),
                }
                prop_assert!(e.cursor() <= e.text().len());
                prop_assert!(e.cursor_row() < e.lines().len());
            }
        }
    }
}
