//! Renderer trait abstraction.

use carousel_core::{CanvasSize, EditorState, ElementId, Slide};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error, PartialEq)]
pub enum RendererError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Slide {index} out of range ({count} slides)")]
    SlideOutOfRange { index: usize, count: usize },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// What the frame is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Live canvas: image placeholders, selection outline and resize handle.
    #[default]
    Edit,
    /// Final output: document content only.
    Export,
}

/// Context for rendering a single slide.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub slide: &'a Slide,
    pub canvas_size: &'a CanvasSize,
    pub mode: RenderMode,
    /// Element to decorate with selection chrome in edit mode.
    pub selected: Option<ElementId>,
    pub selection_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(slide: &'a Slide, canvas_size: &'a CanvasSize) -> Self {
        Self {
            slide,
            canvas_size,
            mode: RenderMode::Edit,
            selected: None,
            selection_color: Color::from_rgba8(56, 189, 248, 255),
        }
    }

    /// Context for the active slide with the current selection.
    pub fn for_active_slide(state: &'a EditorState) -> Self {
        Self::new(state.active_slide(), state.canvas_size()).with_selection(state.selected_element_id())
    }

    /// Export context for slide `index`.
    pub fn for_export(state: &'a EditorState, index: usize) -> RenderResult<Self> {
        let slide = state.slides().get(index).ok_or(RendererError::SlideOutOfRange {
            index,
            count: state.slides().len(),
        })?;
        Ok(Self::new(slide, state.canvas_size()).with_mode(RenderMode::Export))
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_selection(mut self, selected: Option<ElementId>) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }
}

/// Trait for rendering backends.
///
/// A backend turns one slide into its own command representation. Geometry
/// must follow the [`layout`](crate::layout) contract so that edit-time and
/// export-time output agree.
pub trait Renderer {
    /// Build the commands for one slide.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}
