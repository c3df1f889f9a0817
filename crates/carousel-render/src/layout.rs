//! Slide geometry shared by the live canvas and export.
//!
//! Element `x`/`y` is the center. Text is laid out line by line around that
//! center; gradients follow CSS `linear-gradient(<angle>)`.

use carousel_core::{Element, TextAlign, TextStyle};
use kurbo::{Point, Rect, Size, Vec2};

/// Top-left corner of an element.
pub fn element_top_left(element: &Element) -> Point {
    Point::new(
        element.x - element.width / 2.0,
        element.y - element.height / 2.0,
    )
}

/// Drawing rectangle of an element.
pub fn element_rect(element: &Element) -> Rect {
    Rect::from_origin_size(element_top_left(element), element.size())
}

/// A single laid-out line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Anchor point: x follows the alignment edge, y is the line's vertical middle.
    pub anchor: Point,
}

/// Multi-line text placed within an element.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub style: TextStyle,
    /// Distance between consecutive line middles.
    pub line_height: f64,
    pub lines: Vec<TextLine>,
}

impl TextLayout {
    /// Height of the whole block.
    pub fn total_height(&self) -> f64 {
        self.line_height * self.lines.len() as f64
    }
}

/// Lay out an element's text content. Returns `None` when there is nothing to draw.
///
/// Lines are split on `\n` without wrapping. Missing styles fall back to
/// [`TextStyle::default`].
pub fn layout_text(element: &Element) -> Option<TextLayout> {
    let content = element.content.as_deref().filter(|c| !c.is_empty())?;
    let style = element.style.clone().unwrap_or_default();

    let line_height = style.font_size * style.effective_line_height();
    let count = content.split('\n').count() as f64;
    let first_middle = element.y - (line_height * count) / 2.0 + line_height / 2.0;
    let x = match style.text_align {
        TextAlign::Left => element.x - element.width / 2.0,
        TextAlign::Center => element.x,
        TextAlign::Right => element.x + element.width / 2.0,
    };

    let lines = content
        .split('\n')
        .enumerate()
        .map(|(i, line)| TextLine {
            text: line.to_string(),
            anchor: Point::new(x, first_middle + i as f64 * line_height),
        })
        .collect();

    Some(TextLayout {
        style,
        line_height,
        lines,
    })
}

/// Start and end points of a CSS linear gradient over a canvas.
///
/// 0° points up and 90° right. The gradient line runs through the center with
/// length `|w·sin θ| + |h·cos θ|`, so the corners land exactly on the stops.
pub fn gradient_endpoints(direction_degrees: f64, canvas: Size) -> (Point, Point) {
    let theta = direction_degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    let length = (canvas.width * sin).abs() + (canvas.height * cos).abs();
    let half = Vec2::new(sin, -cos) * (length / 2.0);
    let center = Point::new(canvas.width / 2.0, canvas.height / 2.0);
    (center - half, center + half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::ElementPatch;

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!((actual.x - x).abs() < 1e-9, "x: {} != {}", actual.x, x);
        assert!((actual.y - y).abs() < 1e-9, "y: {} != {}", actual.y, y);
    }

    fn text(content: &str, align: TextAlign) -> Element {
        Element::text(
            Point::new(540.0, 300.0),
            Size::new(600.0, 100.0),
            content,
            TextStyle::new(20.0, 400, "#fff").with_align(align),
        )
    }

    #[test]
    fn test_top_left() {
        let element = text("a", TextAlign::Left);
        assert_point(element_top_left(&element), 240.0, 250.0);
    }

    #[test]
    fn test_multiline_layout() {
        let layout = layout_text(&text("one\ntwo\nthree", TextAlign::Center)).unwrap();
        assert!((layout.line_height - 28.0).abs() < 1e-9);
        assert!((layout.total_height() - 84.0).abs() < 1e-9);
        assert_eq!(layout.lines.len(), 3);
        assert_point(layout.lines[0].anchor, 540.0, 272.0);
        assert_point(layout.lines[1].anchor, 540.0, 300.0);
        assert_point(layout.lines[2].anchor, 540.0, 328.0);
        assert_eq!(layout.lines[2].text, "three");
    }

    #[test]
    fn test_alignment_anchor() {
        let left = layout_text(&text("a", TextAlign::Left)).unwrap();
        let right = layout_text(&text("a", TextAlign::Right)).unwrap();
        assert_point(left.lines[0].anchor, 240.0, 300.0);
        assert_point(right.lines[0].anchor, 840.0, 300.0);
    }

    #[test]
    fn test_line_height_override() {
        let mut element = text("a\nb", TextAlign::Center);
        element.style.as_mut().unwrap().line_height = Some(2.0);
        let layout = layout_text(&element).unwrap();
        assert!((layout.line_height - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_unstyled_text_uses_defaults() {
        let mut element = Element::new(carousel_core::ElementKind::Text, Point::new(100.0, 100.0), Size::new(200.0, 50.0));
        element.apply_patch(&ElementPatch::new().with_content("hi"));
        let layout = layout_text(&element).unwrap();
        assert!((layout.style.font_size - 16.0).abs() < f64::EPSILON);
        assert_eq!(layout.style.font_family, "Inter");
        assert_eq!(layout.style.color, "#ffffff");
        assert!((layout.line_height - 22.4).abs() < 1e-9);
        assert_point(layout.lines[0].anchor, 0.0, 100.0);
    }

    #[test]
    fn test_empty_text_is_skipped() {
        assert!(layout_text(&text("", TextAlign::Center)).is_none());
    }

    #[test]
    fn test_gradient_directions() {
        let square = Size::new(1080.0, 1080.0);
        let (start, end) = gradient_endpoints(180.0, square);
        assert_point(start, 540.0, 0.0);
        assert_point(end, 540.0, 1080.0);

        let (start, end) = gradient_endpoints(90.0, square);
        assert_point(start, 0.0, 540.0);
        assert_point(end, 1080.0, 540.0);

        let (start, end) = gradient_endpoints(0.0, Size::new(1080.0, 1920.0));
        assert_point(start, 540.0, 1920.0);
        assert_point(end, 540.0, 0.0);
    }

    #[test]
    fn test_diagonal_gradient_reaches_corners() {
        let (start, end) = gradient_endpoints(135.0, Size::new(1080.0, 1080.0));
        assert_point(start, 0.0, 0.0);
        assert_point(end, 1080.0, 1080.0);
    }
}
