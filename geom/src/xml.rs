//! Conversion between rectangles/sizes and XML element trees.
//!
//! The XML document layer itself lives elsewhere. This module only knows the minimal [`Element`] shape it exchanges with that layer:
//! a name, a text value and child elements.

use crate::algebra;
use crate::error::{GeomError, Result};
use crate::rect::{Rect, RectLike};
use crate::scalar::ScalarKind;
use crate::size::{Size, SizeLike};

/// An XML element with text content and child elements. Attributes are not needed here.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Element {
    pub name: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    /// Creates a new instance without text or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Creates a new instance with text content.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Appends a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Finds the first child element with the provided name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Reads the text of a child element as a number.
    fn child_number(&self, name: &str) -> Result<f64> {
        let child = self.child(name)
            .ok_or_else(|| GeomError::domain(format!("Element <{}> has no <{}> child.", self.name, name)))?;
        let text = child.text.trim();
        text.parse()
            .map_err(|_| GeomError::type_error(format!("The <{name}> child of <{}> is not a number: {text:?}.", self.name)))
    }
}

/// Appends `x`, `y`, `width` and `height` children to `node`.
pub fn rect_to_xml(r: &(impl RectLike + ?Sized), node: &mut Element) {
    node.push(Element::with_text("x", r.x().to_string()));
    node.push(Element::with_text("y", r.y().to_string()));
    node.push(Element::with_text("width", r.width().to_string()));
    node.push(Element::with_text("height", r.height().to_string()));
}

/// Reads the `x`, `y`, `width` and `height` children of `node` into a new integer rectangle.
///
/// # Errors
/// [`GeomError::Domain`] if a child is missing, [`GeomError::Type`] if a child's text is not a number. All four children are read
/// before the rectangle is built.
pub fn rect_from_xml(node: &Element) -> Result<Rect<'static>> {
    let x = node.child_number("x")?;
    let y = node.child_number("y")?;
    let width = node.child_number("width")?;
    let height = node.child_number("height")?;

    let mut rect = Rect::new(ScalarKind::Int16);
    rect.set_x(x);
    rect.set_y(y);
    rect.set_width(width);
    rect.set_height(height);
    log::trace!("Read {rect:?} from <{}>.", node.name);
    Ok(rect)
}

/// Appends `width` and `height` children to `node`.
pub fn size_to_xml(s: &(impl SizeLike + ?Sized), node: &mut Element) {
    node.push(Element::with_text("width", s.width().to_string()));
    node.push(Element::with_text("height", s.height().to_string()));
}

/// Reads the `width` and `height` children of `node` into a new integer size.
pub fn size_from_xml(node: &Element) -> Result<Size<'static>> {
    let width = node.child_number("width")?;
    let height = node.child_number("height")?;

    let mut size = Size::new(ScalarKind::Int16, 0.0, 0.0);
    size.set_width(width)?;
    size.set_height(height)?;
    Ok(size)
}

/// Writes a rectangle as an element named `name`. Convenience around [`rect_to_xml`].
pub fn rect_element(name: &str, r: &(impl RectLike + ?Sized)) -> Element {
    let mut node = Element::new(name);
    rect_to_xml(r, &mut node);
    node
}

/// Returns whether the rectangle read back from `node` equals `r` within [`crate::EPSILON`].
pub fn matches_rect(node: &Element, r: &(impl RectLike + ?Sized)) -> bool {
    rect_from_xml(node)
        .map(|read| algebra::fuzzy_eq_rect(&read, r))
        .unwrap_or(false)
}
