use std::fmt;

/// A 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Mark {
    /// Line, from 1.
    pub line: usize,
    /// Column, from 1.
    pub column: usize,
}

impl Mark {
    /// Construct a mark.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The shape of a document node.
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// An empty or explicitly null node.
    Null,
    /// A leaf string. Numbers and booleans stay strings until an attribute
    /// helper interprets them.
    Scalar(String),
    /// An ordered list.
    Sequence(Vec<Value>),
    /// An ordered list of key/value pairs. Duplicate keys are kept.
    Map(Vec<(Value, Value)>),
}

/// A document node with the position it was read from. Front-ends produce
/// these; the widget builders consume them without knowing the source format.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    /// Contents.
    pub data: Data,
    /// Source position.
    pub mark: Mark,
}

impl Value {
    /// A null node.
    pub fn null(mark: Mark) -> Self {
        Self {
            data: Data::Null,
            mark,
        }
    }

    /// A scalar node.
    pub fn scalar(s: impl Into<String>, mark: Mark) -> Self {
        Self {
            data: Data::Scalar(s.into()),
            mark,
        }
    }

    /// A sequence node.
    pub fn sequence(items: Vec<Self>, mark: Mark) -> Self {
        Self {
            data: Data::Sequence(items),
            mark,
        }
    }

    /// A map node.
    pub fn map(entries: Vec<(Self, Self)>, mark: Mark) -> Self {
        Self {
            data: Data::Map(entries),
            mark,
        }
    }

    /// Is this node null?
    pub fn is_null(&self) -> bool {
        matches!(self.data, Data::Null)
    }

    /// The scalar text, if this is a scalar.
    pub fn as_str(&self) -> Option<&str> {
        match &self.data {
            Data::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// The items, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match &self.data {
            Data::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, if this is a map.
    pub fn as_map(&self) -> Option<&[(Self, Self)]> {
        match &self.data {
            Data::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// The value of the first entry whose key is the scalar `key`. Returns
    /// `None` for anything that is not a map.
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_map()?
            .iter()
            .find(|(k, _)| k.as_str() == Some(key))
            .map(|(_, v)| v)
    }

    /// A short name for the node's shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self.data {
            Data::Null => "null",
            Data::Scalar(_) => "scalar",
            Data::Sequence(_) => "sequence",
            Data::Map(_) => "map",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        let m = Mark::new(1, 1);
        let v = Value::map(
            vec![
                (Value::scalar("a", m), Value::scalar("1", m)),
                (Value::scalar("a", m), Value::scalar("2", m)),
                (Value::scalar("b", m), Value::null(m)),
            ],
            m,
        );
        assert_eq!(v.get("a").and_then(Value::as_str), Some("1"));
        assert!(v.get("b").is_some_and(Value::is_null));
        assert!(v.get("c").is_none());
        assert!(Value::scalar("x", m).get("a").is_none());
        assert_eq!(v.as_map().map(<[_]>::len), Some(3));
        assert_eq!(Mark::new(3, 7).to_string(), "3:7");
    }
}
