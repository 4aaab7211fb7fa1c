//! One builder per widget kind. Every builder takes the attribute node of a
//! `{kind: attributes}` entry, which must be a map or null, and accepts `id`
//! and `display` on top of its own attributes. Defaults for attributes that
//! are absent live in this file.

use crate::{
    Core, NodeId,
    description::{DeserializationError, Value, attrs},
    geom::Edges,
    layout::{Alignment, AxisAlign},
    render::Color,
    widget::Widget,
    widgets::{
        Button, CheckBox, Container, DEFAULT_FONT_SIZE, Input, Label, SizedBox, TextArea,
    },
};

/// Signature shared by every builder.
pub type Builder = fn(&mut Core, &Value, &mut Vec<DeserializationError>) -> Option<NodeId>;

/// Alignment of containers built from descriptions.
const CONTAINER_ALIGNMENT: Alignment = Alignment::Center;
/// Margin around a described button.
const BUTTON_MARGIN: f32 = 28.0;
/// Edge length of a described sized box.
const SIZED_BOX_SIZE: f32 = 0.0;
/// Fill of a described sized box.
const SIZED_BOX_COLOR: Color = Color::WHITE;

/// Check that the attribute node is a map or null.
fn check(attrs: &Value, errors: &mut Vec<DeserializationError>) -> bool {
    let ok = attrs.is_null() || attrs.as_map().is_some();
    if !ok {
        errors.push(DeserializationError::new(
            attrs.mark,
            "Expected widget node to be a YAML map",
        ));
    }
    ok
}

/// Insert the widget with its children, then apply the common attributes.
fn insert<W: Widget>(
    core: &mut Core,
    widget: W,
    children: Vec<NodeId>,
    attrs: &Value,
    errors: &mut Vec<DeserializationError>,
) -> Option<NodeId> {
    let name = attrs::id(attrs.get("id"));
    let display = attrs::boolean(attrs.get("display"), true, errors);
    let result = core.add_with_children(widget, children).and_then(|id| {
        let id = NodeId::from(id);
        core.set_id(id, name)?;
        core.set_display(id, display)?;
        Ok(id)
    });
    match result {
        Ok(id) => Some(id),
        Err(e) => {
            errors.push(DeserializationError::new(attrs.mark, e.to_string()));
            None
        }
    }
}

/// Shared body of the three container kinds.
fn stack(
    core: &mut Core,
    base: Container,
    attrs: &Value,
    errors: &mut Vec<DeserializationError>,
) -> Option<NodeId> {
    if !check(attrs, errors) {
        return None;
    }
    let children = attrs::children(core, attrs.get("children"), errors);
    let c = base
        .with_background(attrs::color(attrs.get("color"), Color::TRANSPARENT, errors))
        .with_padding(attrs::edges(attrs.get("padding"), Edges::default(), errors))
        .with_alignment(attrs::alignment(attrs.get("alignment"), CONTAINER_ALIGNMENT, errors))
        .with_main_axis(attrs::axis_align(attrs.get("main-axis"), AxisAlign::Start, errors))
        .with_cross_axis(attrs::axis_align(attrs.get("cross-axis"), AxisAlign::Start, errors))
        .with_width(attrs::number(attrs.get("width"), f32::INFINITY, errors))
        .with_height(attrs::number(attrs.get("height"), f32::INFINITY, errors));
    insert(core, c, children, attrs, errors)
}

/// `row`: children side by side.
pub fn row(core: &mut Core, attrs: &Value, errors: &mut Vec<DeserializationError>) -> Option<NodeId> {
    stack(core, Container::row(), attrs, errors)
}

/// `column`: children top to bottom.
pub fn column(
    core: &mut Core,
    attrs: &Value,
    errors: &mut Vec<DeserializationError>,
) -> Option<NodeId> {
    stack(core, Container::column(), attrs, errors)
}

/// `container`: children top to bottom, sharing both axes.
pub fn container(
    core: &mut Core,
    attrs: &Value,
    errors: &mut Vec<DeserializationError>,
) -> Option<NodeId> {
    stack(core, Container::new(), attrs, errors)
}

/// `input`: a text field. Attributes: `text`, `hint`, `font-size`, `color`.
pub fn input(
    core: &mut Core,
    attrs: &Value,
    errors: &mut Vec<DeserializationError>,
) -> Option<NodeId> {
    if !check(attrs, errors) {
        return None;
    }
    let w = Input::new()
        .with_text(attrs::text(attrs.get("text"), "", errors))
        .with_hint(attrs::text(attrs.get("hint"), "", errors))
        .with_font_size(attrs::number(attrs.get("font-size"), DEFAULT_FONT_SIZE, errors))
        .with_color(attrs::color(attrs.get("color"), Color::WHITE, errors));
    insert(core, w, Vec::new(), attrs, errors)
}

/// `sized-box`: attributes `width`, `height`, `color`.
pub fn sized_box(
    core: &mut Core,
    attrs: &Value,
    errors: &mut Vec<DeserializationError>,
) -> Option<NodeId> {
    if !check(attrs, errors) {
        return None;
    }
    let w = SizedBox::new(
        attrs::number(attrs.get("width"), SIZED_BOX_SIZE, errors),
        attrs::number(attrs.get("height"), SIZED_BOX_SIZE, errors),
    )
    .with_color(attrs::color(attrs.get("color"), SIZED_BOX_COLOR, errors));
    insert(core, w, Vec::new(), attrs, errors)
}

/// `label`: attributes `text`, `font-size`, `color`, `margin`, `fit-content`.
pub fn label(
    core: &mut Core,
    attrs: &Value,
    errors: &mut Vec<DeserializationError>,
) -> Option<NodeId> {
    if !check(attrs, errors) {
        return None;
    }
    let w = Label::new(attrs::text(attrs.get("text"), "", errors))
        .with_font_size(attrs::number(attrs.get("font-size"), DEFAULT_FONT_SIZE, errors))
        .with_color(attrs::color(attrs.get("color"), Color::BLACK, errors))
        .with_margin(attrs::edges(attrs.get("margin"), Edges::default(), errors))
        .with_fit_content(attrs::boolean(attrs.get("fit-content"), false, errors));
    insert(core, w, Vec::new(), attrs, errors)
}

/// `button`: attributes `text`, `font-size`, `color`, `background`, `margin`,
/// `width`, `height`, `fit-content`. Actions are attached afterwards, by id.
pub fn button(
    core: &mut Core,
    attrs: &Value,
    errors: &mut Vec<DeserializationError>,
) -> Option<NodeId> {
    if !check(attrs, errors) {
        return None;
    }
    let w = Button::new(attrs::text(attrs.get("text"), "", errors))
        .with_font_size(attrs::number(attrs.get("font-size"), DEFAULT_FONT_SIZE, errors))
        .with_color(attrs::color(attrs.get("color"), Color::WHITE, errors))
        .with_background(attrs::color(attrs.get("background"), Color::DARK_GRAY, errors))
        .with_margin(attrs::edges(attrs.get("margin"), Edges::all(BUTTON_MARGIN), errors))
        .with_width(attrs::number(attrs.get("width"), f32::INFINITY, errors))
        .with_height(attrs::number(attrs.get("height"), f32::INFINITY, errors))
        .with_fit_content(attrs::boolean(attrs.get("fit-content"), false, errors));
    insert(core, w, Vec::new(), attrs, errors)
}

/// `textarea`: attributes `text`, `font-size`, `color`, `editable`.
pub fn textarea(
    core: &mut Core,
    attrs: &Value,
    errors: &mut Vec<DeserializationError>,
) -> Option<NodeId> {
    if !check(attrs, errors) {
        return None;
    }
    let w = TextArea::new(attrs::text(attrs.get("text"), "", errors))
        .with_font_size(attrs::number(attrs.get("font-size"), DEFAULT_FONT_SIZE, errors))
        .with_color(attrs::color(attrs.get("color"), Color::BLACK, errors))
        .with_editable(attrs::boolean(attrs.get("editable"), true, errors));
    insert(core, w, Vec::new(), attrs, errors)
}

/// `checkbox`: attributes `value`, `color`, `background`, `border-color`,
/// `margin`, `width`, `height`.
pub fn checkbox(
    core: &mut Core,
    attrs: &Value,
    errors: &mut Vec<DeserializationError>,
) -> Option<NodeId> {
    if !check(attrs, errors) {
        return None;
    }
    let w = CheckBox::new()
        .with_value(attrs::boolean(attrs.get("value"), false, errors))
        .with_color(attrs::color(attrs.get("color"), Color::WHITE, errors))
        .with_background(attrs::color(attrs.get("background"), Color::BLACK, errors))
        .with_border(attrs::color(attrs.get("border-color"), Color::DARK_GRAY, errors))
        .with_margin(attrs::edges(attrs.get("margin"), Edges::default(), errors))
        .with_size(
            attrs::number(attrs.get("width"), CheckBox::SIZE, errors),
            attrs::number(attrs.get("height"), CheckBox::SIZE, errors),
        );
    insert(core, w, Vec::new(), attrs, errors)
}
