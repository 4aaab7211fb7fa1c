//! YAML front-end: turns YAML text into a [`Value`] tree.

use std::collections::HashMap;

use yaml_rust2::{
    parser::{Event, MarkedEventReceiver, Parser},
    scanner::{Marker, TScalarStyle},
};

use super::{
    DeserializationError,
    node::{Mark, Value},
};

impl From<Marker> for Mark {
    fn from(m: Marker) -> Self {
        Self::new(m.line(), m.col() + 1)
    }
}

/// A collection under construction.
enum Frame {
    /// Open sequence.
    Sequence {
        /// Items so far.
        items: Vec<Value>,
        /// Where it started.
        mark: Mark,
        /// Anchor id, 0 for none.
        anchor: usize,
    },
    /// Open map.
    Map {
        /// Complete entries so far.
        entries: Vec<(Value, Value)>,
        /// A key waiting for its value.
        key: Option<Value>,
        /// Where it started.
        mark: Mark,
        /// Anchor id, 0 for none.
        anchor: usize,
    },
}

/// Assembles parser events into a tree.
#[derive(Default)]
struct Builder {
    /// Open collections, innermost last.
    stack: Vec<Frame>,
    /// Anchored nodes, for aliases.
    anchors: HashMap<usize, Value>,
    /// The finished document.
    root: Option<Value>,
    /// First structural error.
    error: Option<DeserializationError>,
}

impl Builder {
    /// Record an anchor, then hand the finished node to its parent.
    fn finish(&mut self, v: Value, anchor: usize) {
        if anchor > 0 {
            self.anchors.insert(anchor, v.clone());
        }
        match self.stack.last_mut() {
            None => {
                if self.root.is_none() {
                    self.root = Some(v);
                }
            }
            Some(Frame::Sequence { items, .. }) => items.push(v),
            Some(Frame::Map {
                entries, key, mark, ..
            }) => match key.take() {
                Some(k) => entries.push((k, v)),
                None => {
                    // Block maps are reported at their first key's colon.
                    let earlier = (v.mark.line, v.mark.column) < (mark.line, mark.column);
                    if entries.is_empty() && earlier {
                        *mark = v.mark;
                    }
                    *key = Some(v);
                }
            },
        }
    }
}

/// Plain scalars YAML reads as null.
fn is_null(value: &str, style: TScalarStyle) -> bool {
    style == TScalarStyle::Plain && matches!(value, "~" | "null" | "Null" | "NULL" | "")
}

impl MarkedEventReceiver for Builder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        let mark = Mark::from(marker);
        match ev {
            Event::Scalar(value, style, anchor, _) => {
                let v = if is_null(&value, style) {
                    Value::null(mark)
                } else {
                    Value::scalar(value, mark)
                };
                self.finish(v, anchor);
            }
            Event::SequenceStart(anchor, _) => self.stack.push(Frame::Sequence {
                items: Vec::new(),
                mark,
                anchor,
            }),
            Event::MappingStart(anchor, _) => self.stack.push(Frame::Map {
                entries: Vec::new(),
                key: None,
                mark,
                anchor,
            }),
            Event::SequenceEnd | Event::MappingEnd => match self.stack.pop() {
                Some(Frame::Sequence {
                    items,
                    mark,
                    anchor,
                }) => self.finish(Value::sequence(items, mark), anchor),
                Some(Frame::Map {
                    entries,
                    mark,
                    anchor,
                    ..
                }) => self.finish(Value::map(entries, mark), anchor),
                None => {
                    self.error.get_or_insert(DeserializationError::new(
                        mark,
                        "collection end without a start",
                    ));
                }
            },
            Event::Alias(id) => match self.anchors.get(&id).cloned() {
                Some(v) => self.finish(Value { mark, ..v }, 0),
                None => {
                    self.error.get_or_insert(DeserializationError::new(
                        mark,
                        "alias to an unknown anchor",
                    ));
                    self.finish(Value::null(mark), 0);
                }
            },
            _ => {}
        }
    }
}

/// Parse the first document in `text`. An empty document is a null value at
/// 1:1.
pub fn load(text: &str) -> Result<Value, DeserializationError> {
    let mut builder = Builder::default();
    let mut parser = Parser::new_from_str(text);
    parser.load(&mut builder, false).map_err(|e| {
        DeserializationError::new(Mark::from(*e.marker()), e.info().to_string())
    })?;
    if let Some(e) = builder.error {
        return Err(e);
    }
    Ok(builder
        .root
        .unwrap_or_else(|| Value::null(Mark::new(1, 1))))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::description::node::Data;

    #[test]
    fn marks_are_one_based() -> Result<(), DeserializationError> {
        let v = load("row:\n  id: top\n  children:\n    - label:\n        text: hi\n")?;
        assert_eq!(v.mark, Mark::new(1, 1));
        let row = v.get("row").ok_or_else(|| DeserializationError::new(v.mark, "no row"))?;
        assert_eq!(row.get("id").map(|v| v.mark), Some(Mark::new(2, 7)));

        let children = row.get("children").and_then(Value::as_sequence);
        let first = children.and_then(|c| c.first());
        assert_eq!(first.map(|v| v.mark), Some(Mark::new(4, 7)));
        let text = first
            .and_then(|c| c.get("label"))
            .and_then(|l| l.get("text"))
            .and_then(Value::as_str);
        assert_eq!(text, Some("hi"));
        Ok(())
    }

    #[test]
    fn maps_start_at_their_first_key() -> Result<(), DeserializationError> {
        let v = load("row:\ncolumn:\n")?;
        assert_eq!(v.mark, Mark::new(1, 1));
        let v = load("a:\n  - b: 1\n    c: 2\n")?;
        let item = v.get("a").and_then(Value::as_sequence).and_then(|s| s.first());
        assert_eq!(item.map(|i| i.mark), Some(Mark::new(2, 5)));
        Ok(())
    }

    #[test]
    fn nulls_and_quoting() -> Result<(), DeserializationError> {
        let v = load("a:\nb: ~\nc: 'null'\nd: [1, 2]\n")?;
        assert!(v.get("a").is_some_and(Value::is_null));
        assert!(v.get("b").is_some_and(Value::is_null));
        assert_eq!(v.get("c").and_then(Value::as_str), Some("null"));
        assert_eq!(v.get("d").and_then(Value::as_sequence).map(<[_]>::len), Some(2));
        assert_eq!(load("")?.data, Data::Null);
        Ok(())
    }

    #[test]
    fn aliases_copy_the_anchored_node() -> Result<(), DeserializationError> {
        let v = load("a: &pad 10\nb: *pad\n")?;
        assert_eq!(v.get("b").and_then(Value::as_str), Some("10"));
        Ok(())
    }

    #[test]
    fn syntax_errors_are_located() {
        let Err(e) = load("a: [1, 2\nb: 3\n") else {
            panic!("expected a syntax error");
        };
        assert!(e.line >= 1);
        assert!(e.column >= 1);
        assert!(!e.message.is_empty());
    }
}
