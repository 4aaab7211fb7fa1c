//! Attribute helpers. Each takes the attribute's node, if present, and the
//! value to use when it is absent or null. A malformed attribute records an
//! error and also yields the default.

use crate::{
    Core, NodeId,
    description::{DeserializationError, Value, deserialize, deserialize_kind},
    geom::Edges,
    layout::{Alignment, AxisAlign},
    render::Color,
};

/// Scalar text of a present, non-null node. Anything else that is present
/// records an error.
fn scalar<'a>(
    node: Option<&'a Value>,
    what: &str,
    errors: &mut Vec<DeserializationError>,
) -> Option<&'a str> {
    let node = node.filter(|n| !n.is_null())?;
    let s = node.as_str();
    if s.is_none() {
        errors.push(DeserializationError::new(
            node.mark,
            format!("expected {what}, found a {}", node.kind()),
        ));
    }
    s
}

/// Record an error at `node` and return the default.
fn reject<T>(
    node: Option<&Value>,
    message: String,
    default: T,
    errors: &mut Vec<DeserializationError>,
) -> T {
    if let Some(node) = node {
        errors.push(DeserializationError::new(node.mark, message));
    }
    default
}

/// A color: a name (red, green, blue, purple, white, black, transparent), or
/// six hex digits written `0xRRGGBB` or `#RRGGBB`.
pub fn color(node: Option<&Value>, default: Color, errors: &mut Vec<DeserializationError>) -> Color {
    let Some(s) = scalar(node, "a color", errors) else {
        return default;
    };
    let parsed = match s {
        "red" => Some(Color::RED),
        "green" => Some(Color::GREEN),
        "blue" => Some(Color::BLUE),
        "purple" => Some(Color::PURPLE),
        "white" => Some(Color::WHITE),
        "black" => Some(Color::BLACK),
        "transparent" => Some(Color::TRANSPARENT),
        _ => s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix('#'))
            .and_then(Color::from_hex),
    };
    parsed.unwrap_or_else(|| reject(node, format!("unknown color: {s}"), default, errors))
}

/// A node identifier. Non-scalar identifiers are ignored.
pub fn id(node: Option<&Value>) -> String {
    node.and_then(Value::as_str).unwrap_or_default().to_string()
}

/// Free text.
pub fn text(node: Option<&Value>, default: &str, errors: &mut Vec<DeserializationError>) -> String {
    scalar(node, "text", errors).unwrap_or(default).to_string()
}

/// A number. `inf` is accepted.
pub fn number(node: Option<&Value>, default: f32, errors: &mut Vec<DeserializationError>) -> f32 {
    let Some(s) = scalar(node, "a number", errors) else {
        return default;
    };
    s.trim()
        .parse()
        .unwrap_or_else(|_| reject(node, format!("expected a number: {s}"), default, errors))
}

/// `true` or `false`.
pub fn boolean(node: Option<&Value>, default: bool, errors: &mut Vec<DeserializationError>) -> bool {
    match scalar(node, "a boolean", errors) {
        None => default,
        Some("true") => true,
        Some("false") => false,
        Some(s) => reject(node, format!("expected a boolean: {s}"), default, errors),
    }
}

/// Padding or margin: one number for all sides, two for vertical and
/// horizontal, or four for top, right, bottom and left.
pub fn edges(node: Option<&Value>, default: Edges, errors: &mut Vec<DeserializationError>) -> Edges {
    let Some(items) = node.and_then(Value::as_sequence) else {
        let v = number(node, f32::NAN, errors);
        return if v.is_nan() { default } else { Edges::all(v) };
    };
    let before = errors.len();
    let n: Vec<f32> = items.iter().map(|i| number(Some(i), 0.0, errors)).collect();
    if errors.len() > before {
        return default;
    }
    match n[..] {
        [v] => Edges::all(v),
        [v, h] => Edges::symmetric(v, h),
        [t, r, b, l] => Edges::new(t, r, b, l),
        _ => reject(
            node,
            format!("expected 1, 2 or 4 values, found {}", n.len()),
            default,
            errors,
        ),
    }
}

/// A main or cross axis policy: `start`, `end` or `center`.
pub fn axis_align(
    node: Option<&Value>,
    default: AxisAlign,
    errors: &mut Vec<DeserializationError>,
) -> AxisAlign {
    match scalar(node, "an axis policy", errors) {
        None => default,
        Some("start") => AxisAlign::Start,
        Some("end") => AxisAlign::End,
        Some("center") => AxisAlign::Center,
        Some(s) => reject(node, format!("unknown axis policy: {s}"), default, errors),
    }
}

/// A container alignment: `none`, `horizontal`, `vertical` or `center`.
pub fn alignment(
    node: Option<&Value>,
    default: Alignment,
    errors: &mut Vec<DeserializationError>,
) -> Alignment {
    match scalar(node, "an alignment", errors) {
        None => default,
        Some("none") => Alignment::None,
        Some("horizontal") => Alignment::Horizontal,
        Some("vertical") => Alignment::Vertical,
        Some("center") => Alignment::Center,
        Some(s) => reject(node, format!("unknown alignment: {s}"), default, errors),
    }
}

/// Child widgets: a sequence of widget maps, or a map whose entries are each
/// a widget. Children that fail to build are left out.
pub fn children(
    core: &mut Core,
    node: Option<&Value>,
    errors: &mut Vec<DeserializationError>,
) -> Vec<NodeId> {
    let Some(node) = node.filter(|n| !n.is_null()) else {
        return Vec::new();
    };
    if let Some(items) = node.as_sequence() {
        items
            .iter()
            .filter_map(|child| deserialize(core, child, errors))
            .collect()
    } else if let Some(entries) = node.as_map() {
        entries
            .iter()
            .filter_map(|(kind, attrs)| deserialize_kind(core, kind, attrs, errors))
            .collect()
    } else {
        errors.push(DeserializationError::new(
            node.mark,
            "Expected children field to be a sequence!",
        ));
        Vec::new()
    }
}
