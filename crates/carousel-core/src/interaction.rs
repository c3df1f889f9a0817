//! Drag and resize gestures.
//!
//! While a gesture is active every pointer move issues a silent element
//! update. Pointer-up issues exactly one checkpointed update carrying the
//! final geometry, so a single undo reverts the whole gesture.

use crate::camera::Camera;
use crate::element::{Element, ElementId, ElementPatch, MIN_ELEMENT_HEIGHT, MIN_ELEMENT_WIDTH};
use crate::state::EditorState;
use kurbo::{Point, Size};

/// Side length of the resize handle, in canvas units.
pub const RESIZE_HANDLE_SIZE: f64 = 20.0;
/// Hit radius around the resize handle's center, in canvas units.
pub const RESIZE_HANDLE_HIT_RADIUS: f64 = 10.0;

/// Center of an element's bottom-right resize handle in canvas space.
pub fn resize_handle_position(element: &Element) -> Point {
    let bounds = element.bounds();
    Point::new(
        bounds.x1 - RESIZE_HANDLE_SIZE / 2.0,
        bounds.y1 - RESIZE_HANDLE_SIZE / 2.0,
    )
}

/// Check if a canvas-space point hits an element's resize handle.
pub fn hit_test_resize_handle(element: &Element, point: Point) -> bool {
    let handle = resize_handle_position(element);
    let dx = (point.x - handle.x).abs();
    let dy = (point.y - handle.y).abs();
    dx <= RESIZE_HANDLE_HIT_RADIUS && dy <= RESIZE_HANDLE_HIT_RADIUS
}

/// Captured start of a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    pub element_id: ElementId,
    /// Element center when the drag started.
    pub element_start: Point,
    /// Pointer position in canvas space when the drag started.
    pub pointer_start: Point,
}

/// Captured start of a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeAnchor {
    pub element_id: ElementId,
    /// Element size when the resize started.
    pub start_size: Size,
    /// Raw pointer position in screen space when the resize started.
    pub pointer_start: Point,
}

/// Gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging(DragAnchor),
    Resizing(ResizeAnchor),
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }
}

/// Turns pointer input into element geometry updates.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    interaction: Interaction,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Start dragging an element of the active slide and select it.
    /// Refused while another gesture is active or if the element is missing.
    pub fn begin_drag(
        &mut self,
        state: &mut EditorState,
        camera: &Camera,
        id: ElementId,
        screen_point: Point,
    ) -> bool {
        if !self.interaction.is_idle() {
            log::warn!("Ignoring drag start on {id}: gesture already active");
            return false;
        }
        let Some(element) = state.active_slide().element(id) else {
            return false;
        };
        let anchor = DragAnchor {
            element_id: id,
            element_start: element.center(),
            pointer_start: camera.screen_to_canvas(screen_point),
        };
        state.select_element(Some(id));
        self.interaction = Interaction::Dragging(anchor);
        log::debug!("Drag start on {id}");
        true
    }

    /// Start resizing the selected element.
    /// Refused while another gesture is active or if `id` is not the selection.
    pub fn begin_resize(&mut self, state: &mut EditorState, id: ElementId, screen_point: Point) -> bool {
        if !self.interaction.is_idle() {
            log::warn!("Ignoring resize start on {id}: gesture already active");
            return false;
        }
        if state.selected_element_id() != Some(id) {
            log::warn!("Ignoring resize start on {id}: element is not selected");
            return false;
        }
        let Some(element) = state.active_slide().element(id) else {
            return false;
        };
        self.interaction = Interaction::Resizing(ResizeAnchor {
            element_id: id,
            start_size: element.size(),
            pointer_start: screen_point,
        });
        log::debug!("Resize start on {id}");
        true
    }

    /// Apply pointer motion to the active gesture as a silent update.
    pub fn pointer_move(&mut self, state: &mut EditorState, camera: &Camera, screen_point: Point) {
        match self.interaction {
            Interaction::Idle => {}
            Interaction::Dragging(anchor) => {
                let pointer = camera.screen_to_canvas(screen_point);
                let target = drag_position(&anchor, pointer, state.canvas_size().size());
                state.update_element(anchor.element_id, &ElementPatch::position(target));
            }
            Interaction::Resizing(anchor) => {
                let delta = camera.screen_delta_to_canvas(screen_point - anchor.pointer_start);
                let size = resize_size(&anchor, delta);
                state.update_element(anchor.element_id, &ElementPatch::size(size));
            }
        }
    }

    /// Finish the active gesture with one checkpointed update.
    pub fn pointer_up(&mut self, state: &mut EditorState) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Idle => {}
            Interaction::Dragging(anchor) => {
                let id = anchor.element_id;
                let Some(end) = state.active_slide().element(id).map(Element::center) else {
                    log::debug!("Drag end on {id}: element gone");
                    return;
                };
                // Rewind silently so the checkpoint records the pre-drag position.
                state.update_element(id, &ElementPatch::position(anchor.element_start));
                state.update_element_with_history(id, &ElementPatch::position(end));
                log::debug!("Drag end on {id} at ({}, {})", end.x, end.y);
            }
            Interaction::Resizing(anchor) => {
                let id = anchor.element_id;
                let Some(end) = state.active_slide().element(id).map(Element::size) else {
                    log::debug!("Resize end on {id}: element gone");
                    return;
                };
                state.update_element(id, &ElementPatch::size(anchor.start_size));
                state.update_element_with_history(id, &ElementPatch::size(end));
                log::debug!("Resize end on {id} at {}x{}", end.width, end.height);
            }
        }
    }

    /// Drop the active gesture without writing history. Geometry stays where
    /// the last move left it.
    pub fn cancel(&mut self) {
        self.interaction = Interaction::Idle;
    }
}

/// Element center for a drag, clamped per axis to the canvas.
fn drag_position(anchor: &DragAnchor, pointer: Point, canvas: Size) -> Point {
    let target = anchor.element_start + (pointer - anchor.pointer_start);
    Point::new(
        target.x.min(canvas.width).max(0.0),
        target.y.min(canvas.height).max(0.0),
    )
}

/// Element size for a resize, floored at the minimum element size.
fn resize_size(anchor: &ResizeAnchor, delta: kurbo::Vec2) -> Size {
    Size::new(
        (anchor.start_size.width + delta.x).max(MIN_ELEMENT_WIDTH),
        (anchor.start_size.height + delta.y).max(MIN_ELEMENT_HEIGHT),
    )
}
