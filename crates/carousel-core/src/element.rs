//! Slide elements: positioned text, image, shape, logo and icon primitives.

use crate::error::CoreResult;
use crate::icon::IconName;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// Minimum element width reachable through interactive resize.
pub const MIN_ELEMENT_WIDTH: f64 = 50.0;
/// Minimum element height reachable through interactive resize.
pub const MIN_ELEMENT_HEIGHT: f64 = 30.0;

/// Kind of element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Shape,
    Logo,
    Icon,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text styling for text-bearing elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Font size in canvas pixels.
    pub font_size: f64,
    /// CSS-style numeric weight (100..=900).
    pub font_weight: u16,
    pub font_family: String,
    /// CSS color string, usually `#rrggbb`.
    pub color: String,
    pub text_align: TextAlign,
    /// Line height as a multiple of the font size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

impl TextStyle {
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;
    pub const DEFAULT_FONT_WEIGHT: u16 = 400;
    pub const DEFAULT_FONT_FAMILY: &'static str = "Inter";
    pub const DEFAULT_COLOR: &'static str = "#ffffff";
    /// Line height used when the style does not override it.
    pub const DEFAULT_LINE_HEIGHT: f64 = 1.4;

    /// Create a style with the given size, weight and color.
    pub fn new(font_size: f64, font_weight: u16, color: impl Into<String>) -> Self {
        Self {
            font_size,
            font_weight,
            color: color.into(),
            ..Self::default()
        }
    }

    /// Set the font family.
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the text alignment.
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    /// Set the line height multiplier.
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Set the letter spacing.
    pub fn with_letter_spacing(mut self, letter_spacing: f64) -> Self {
        self.letter_spacing = Some(letter_spacing);
        self
    }

    /// Line height multiplier, falling back to the default.
    pub fn effective_line_height(&self) -> f64 {
        self.line_height.unwrap_or(Self::DEFAULT_LINE_HEIGHT)
    }

    /// Field-merge a patch into this style. Fields absent from the patch are kept.
    pub fn merge(&mut self, patch: &StylePatch) {
        if let Some(font_size) = patch.font_size {
            self.font_size = font_size;
        }
        if let Some(font_weight) = patch.font_weight {
            self.font_weight = font_weight;
        }
        if let Some(font_family) = &patch.font_family {
            self.font_family = font_family.clone();
        }
        if let Some(color) = &patch.color {
            self.color = color.clone();
        }
        if let Some(text_align) = patch.text_align {
            self.text_align = text_align;
        }
        if let Some(line_height) = patch.line_height {
            self.line_height = Some(line_height);
        }
        if let Some(letter_spacing) = patch.letter_spacing {
            self.letter_spacing = Some(letter_spacing);
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: Self::DEFAULT_FONT_SIZE,
            font_weight: Self::DEFAULT_FONT_WEIGHT,
            font_family: Self::DEFAULT_FONT_FAMILY.to_string(),
            color: Self::DEFAULT_COLOR.to_string(),
            text_align: TextAlign::default(),
            line_height: None,
            letter_spacing: None,
        }
    }
}

/// Partial text style used by element updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePatch {
    pub font_size: Option<f64>,
    pub font_weight: Option<u16>,
    pub font_family: Option<String>,
    pub color: Option<String>,
    pub text_align: Option<TextAlign>,
    pub line_height: Option<f64>,
    pub letter_spacing: Option<f64>,
}

impl From<TextStyle> for StylePatch {
    fn from(style: TextStyle) -> Self {
        Self {
            font_size: Some(style.font_size),
            font_weight: Some(style.font_weight),
            font_family: Some(style.font_family),
            color: Some(style.color),
            text_align: Some(style.text_align),
            line_height: style.line_height,
            letter_spacing: style.letter_spacing,
        }
    }
}

/// A partial element update. Every field that is `Some` overwrites the
/// element's value, except `style`, which is field-merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub content: Option<String>,
    pub style: Option<StylePatch>,
    pub image_url: Option<String>,
    pub icon_name: Option<IconName>,
    pub icon_color: Option<String>,
    pub opacity: Option<f64>,
}

impl ElementPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a patch from a JSON object using the element's field names.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Patch that moves an element's center.
    pub fn position(point: Point) -> Self {
        Self {
            x: Some(point.x),
            y: Some(point.y),
            ..Self::default()
        }
    }

    /// Patch that resizes an element.
    pub fn size(size: Size) -> Self {
        Self {
            width: Some(size.width),
            height: Some(size.height),
            ..Self::default()
        }
    }

    /// Set the text content.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the style patch.
    pub fn with_style(mut self, style: StylePatch) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the image source.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Check whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A positioned visual primitive on a slide.
///
/// `x`/`y` is the element's *center* in canvas space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<IconName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Element {
    /// Create a bare element of the given kind.
    pub fn new(kind: ElementKind, center: Point, size: Size) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            x: center.x,
            y: center.y,
            width: size.width,
            height: size.height,
            content: None,
            style: None,
            image_url: None,
            icon_name: None,
            icon_color: None,
            opacity: None,
        }
    }

    /// Create a text element.
    pub fn text(center: Point, size: Size, content: impl Into<String>, style: TextStyle) -> Self {
        let mut element = Self::new(ElementKind::Text, center, size);
        element.content = Some(content.into());
        element.style = Some(style);
        element
    }

    /// Create an image element. `image_url` may be a data URI or a remote URL;
    /// `None` renders as a placeholder until a source arrives.
    pub fn image(center: Point, size: Size, image_url: Option<String>) -> Self {
        let mut element = Self::new(ElementKind::Image, center, size);
        element.image_url = image_url;
        element
    }

    /// Create an icon element.
    pub fn icon(center: Point, size: Size, icon: IconName, color: impl Into<String>) -> Self {
        let mut element = Self::new(ElementKind::Icon, center, size);
        element.icon_name = Some(icon);
        element.icon_color = Some(color.into());
        element
    }

    /// Center point in canvas space.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Size in canvas units.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Axis-aligned bounds in canvas space.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center(), self.size())
    }

    /// Test whether a canvas-space point lies on the element.
    pub fn hit_test(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Merge a patch into this element.
    ///
    /// When both the element and the patch carry a style, the style is merged
    /// field by field. When the element has no style yet, the patch is applied
    /// on top of [`TextStyle::default`].
    pub fn apply_patch(&mut self, patch: &ElementPatch) {
        if let Some(x) = patch.x {
            self.x = x;
        }
        if let Some(y) = patch.y {
            self.y = y;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
        if let Some(content) = &patch.content {
            self.content = Some(content.clone());
        }
        if let Some(style_patch) = &patch.style {
            self.style
                .get_or_insert_with(TextStyle::default)
                .merge(style_patch);
        }
        if let Some(image_url) = &patch.image_url {
            self.image_url = Some(image_url.clone());
        }
        if let Some(icon_name) = patch.icon_name {
            self.icon_name = Some(icon_name);
        }
        if let Some(icon_color) = &patch.icon_color {
            self.icon_color = Some(icon_color.clone());
        }
        if let Some(opacity) = patch.opacity {
            self.opacity = Some(opacity);
        }
    }

    /// Clone this element under a freshly generated id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            ..self.clone()
        }
    }
}
