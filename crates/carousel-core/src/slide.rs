//! Slides and their backgrounds.

use crate::element::{Element, ElementId};
use crate::theme::SlidePalette;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for slides.
pub type SlideId = Uuid;

/// Two-stop linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    /// Color at the start of the gradient line.
    pub from: String,
    /// Color at the end of the gradient line.
    pub to: String,
    /// CSS gradient angle in degrees (0 = towards the top, 90 = towards the right).
    pub direction: f64,
}

/// Slide background fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Background {
    Solid { color: String },
    Gradient { gradient: LinearGradient },
}

impl Background {
    /// Solid color background.
    pub fn solid(color: impl Into<String>) -> Self {
        Background::Solid {
            color: color.into(),
        }
    }

    /// Linear gradient background.
    pub fn gradient(from: impl Into<String>, to: impl Into<String>, direction: f64) -> Self {
        Background::Gradient {
            gradient: LinearGradient {
                from: from.into(),
                to: to.into(),
                direction,
            },
        }
    }
}

/// An ordered container of elements. Element order is paint order, first is bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub id: SlideId,
    pub elements: Vec<Element>,
    pub background: Background,
    /// Theme-derived colors, written when a theme is applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<SlidePalette>,
}

impl Slide {
    /// Create an empty slide.
    pub fn new(background: Background) -> Self {
        Self {
            id: Uuid::new_v4(),
            elements: Vec::new(),
            background,
            palette: None,
        }
    }

    /// Create a slide with the given elements.
    pub fn with_elements(background: Background, elements: Vec<Element>) -> Self {
        Self {
            elements,
            ..Self::new(background)
        }
    }

    /// Deep copy with a fresh slide id and fresh ids for every element.
    pub fn instantiate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            elements: self.elements.iter().map(Element::duplicate).collect(),
            background: self.background.clone(),
            palette: self.palette.clone(),
        }
    }

    /// Get an element by ID.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| element.id == id)
    }

    /// Remove an element, preserving the order of the rest.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|element| element.id == id)?;
        Some(self.elements.remove(index))
    }

    /// Topmost element containing a canvas-space point.
    pub fn element_at(&self, point: kurbo::Point) -> Option<&Element> {
        self.elements.iter().rev().find(|element| element.hit_test(point))
    }

    /// Check if the slide has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::TextStyle;
    use kurbo::{Point, Size};

    fn slide_with_two() -> Slide {
        let a = Element::text(Point::new(100.0, 100.0), Size::new(100.0, 100.0), "a", TextStyle::default());
        let b = Element::text(Point::new(150.0, 150.0), Size::new(100.0, 100.0), "b", TextStyle::default());
        Slide::with_elements(Background::solid("#000000"), vec![a, b])
    }

    #[test]
    fn test_instantiate_fresh_ids() {
        let slide = slide_with_two();
        let copy = slide.instantiate();
        assert_ne!(copy.id, slide.id);
        for (orig, dup) in slide.elements.iter().zip(&copy.elements) {
            assert_ne!(orig.id, dup.id);
            assert_eq!(orig.content, dup.content);
        }
    }

    #[test]
    fn test_element_at_prefers_top() {
        let slide = slide_with_two();
        let hit = slide.element_at(Point::new(125.0, 125.0)).unwrap();
        assert_eq!(hit.content.as_deref(), Some("b"));
        let hit = slide.element_at(Point::new(60.0, 60.0)).unwrap();
        assert_eq!(hit.content.as_deref(), Some("a"));
        assert!(slide.element_at(Point::new(500.0, 500.0)).is_none());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut slide = slide_with_two();
        let first = slide.elements[0].id;
        let c = Element::text(Point::ZERO, Size::new(60.0, 40.0), "c", TextStyle::default());
        slide.elements.push(c);
        slide.remove_element(first);
        let contents: Vec<_> = slide.elements.iter().map(|e| e.content.clone().unwrap()).collect();
        assert_eq!(contents, vec!["b", "c"]);
    }

    #[test]
    fn test_background_json_shape() {
        let bg = Background::gradient("#0f172a", "#020617", 180.0);
        let value = serde_json::to_value(&bg).unwrap();
        assert_eq!(value["type"], "gradient");
        assert_eq!(value["gradient"]["from"], "#0f172a");

        let solid: Background = serde_json::from_str(r##"{"type":"solid","color":"#fff"}"##).unwrap();
        assert_eq!(solid, Background::solid("#fff"));
    }
}
