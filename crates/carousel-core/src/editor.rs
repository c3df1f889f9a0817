//! Editor runtime: state, view transform and gesture routing together.

use crate::camera::Camera;
use crate::config::EditorConfig;
use crate::element::{Element, ElementId, ElementPatch, TextAlign, TextStyle};
use crate::error::CoreResult;
use crate::icon::IconName;
use crate::image::data_uri_from_bytes;
use crate::input::{MouseButton, PointerEvent};
use crate::interaction::{Interaction, InteractionController, hit_test_resize_handle};
use crate::state::EditorState;
use crate::templates::Template;
use kurbo::{Point, Rect, Size};

/// An editing session as the presentation layer sees it.
#[derive(Debug, Clone)]
pub struct Editor {
    pub state: EditorState,
    pub camera: Camera,
    controller: InteractionController,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        let camera = Camera::with_zoom(config.view_scale);
        Self {
            state: EditorState::new(config),
            camera,
            controller: InteractionController::new(),
        }
    }

    /// Current gesture.
    pub fn interaction(&self) -> &Interaction {
        self.controller.interaction()
    }

    /// Route a pointer event. Returns true if it started, advanced or ended a
    /// gesture, or changed the selection.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => self.pointer_down(position),
            PointerEvent::Down { .. } => false,
            PointerEvent::Move { position } => {
                if self.controller.interaction().is_idle() {
                    return false;
                }
                self.controller.pointer_move(&mut self.state, &self.camera, position);
                true
            }
            PointerEvent::Up { .. } => {
                if self.controller.interaction().is_idle() {
                    return false;
                }
                self.controller.pointer_up(&mut self.state);
                true
            }
        }
    }

    fn pointer_down(&mut self, screen_point: Point) -> bool {
        if !self.controller.interaction().is_idle() {
            return false;
        }
        let canvas_point = self.camera.screen_to_canvas(screen_point);

        let handle_hit = self
            .state
            .selected_element()
            .filter(|element| hit_test_resize_handle(element, canvas_point))
            .map(|element| element.id);
        if let Some(id) = handle_hit {
            return self.controller.begin_resize(&mut self.state, id, screen_point);
        }

        let body_hit = self
            .state
            .active_slide()
            .element_at(canvas_point)
            .map(|element| element.id);
        match body_hit {
            Some(id) => self
                .controller
                .begin_drag(&mut self.state, &self.camera, id, screen_point),
            None => {
                let had_selection = self.state.selected_element_id().is_some();
                self.state.select_element(None);
                had_selection
            }
        }
    }

    /// Undo, abandoning any gesture in progress.
    pub fn undo(&mut self) -> bool {
        self.controller.cancel();
        self.state.undo()
    }

    /// Redo, abandoning any gesture in progress.
    pub fn redo(&mut self) -> bool {
        self.controller.cancel();
        self.state.redo()
    }

    /// Set the view scale (screen pixels per canvas unit), clamped to the camera's range.
    pub fn set_view_scale(&mut self, scale: f64) {
        self.camera.set_zoom(scale);
        log::debug!("View scale {}", self.camera.zoom);
    }

    /// Scale the view by `factor` around a screen point.
    pub fn zoom_at(&mut self, screen_point: Point, factor: f64) {
        self.camera.zoom_at(screen_point, factor);
    }

    /// Scale and center the canvas inside a viewport.
    pub fn fit_to_viewport(&mut self, viewport: Size, padding: f64) {
        self.camera.fit_canvas(self.state.canvas_size(), viewport, padding);
    }

    /// Screen-space bounds of an element on the active slide, for overlays.
    pub fn screen_bounds(&self, id: ElementId) -> Option<Rect> {
        let bounds = self.state.active_slide().element(id)?.bounds();
        Some(Rect::from_points(
            self.camera.canvas_to_screen(bounds.origin()),
            self.camera.canvas_to_screen(Point::new(bounds.x1, bounds.y1)),
        ))
    }

    fn canvas_center(&self) -> Point {
        let canvas = self.state.canvas_size();
        Point::new(canvas.width / 2.0, canvas.height / 2.0)
    }

    /// Add a "New Text" element at the canvas center.
    pub fn add_text(&mut self) -> ElementId {
        let color = self.state.theme().default_text_color();
        let style = TextStyle::new(32.0, 500, color).with_align(TextAlign::Center);
        let element = Element::text(self.canvas_center(), Size::new(600.0, 60.0), "New Text", style);
        self.state.add_element(element)
    }

    /// Add a three-point bullet list at the canvas center.
    pub fn add_bullet_list(&mut self) -> ElementId {
        let color = if self.state.theme().mode.is_dark() {
            "#e5e7eb"
        } else {
            "#0f172a"
        };
        let style = TextStyle::new(26.0, 400, color).with_line_height(1.5);
        let element = Element::text(
            self.canvas_center(),
            Size::new(800.0, 200.0),
            "• First point\n• Second point\n• Third point",
            style,
        );
        self.state.add_element(element)
    }

    /// Embed uploaded image bytes as a new image element at the canvas center.
    pub fn add_image(&mut self, bytes: &[u8]) -> CoreResult<ElementId> {
        let uri = data_uri_from_bytes(bytes)?;
        let element = Element::image(self.canvas_center(), Size::new(400.0, 300.0), Some(uri));
        Ok(self.state.add_element(element))
    }

    /// Replace an image element's source once its bytes arrive. Silent.
    pub fn load_image(&mut self, id: ElementId, bytes: &[u8]) -> CoreResult<bool> {
        let uri = data_uri_from_bytes(bytes)?;
        Ok(self
            .state
            .update_element(id, &ElementPatch::new().with_image_url(uri)))
    }

    /// Add an icon in the theme's primary color at the canvas center.
    pub fn add_icon(&mut self, icon: IconName) -> ElementId {
        let color = self.state.theme().primary_color.clone();
        let element = Element::icon(self.canvas_center(), Size::new(120.0, 120.0), icon, color);
        self.state.add_element(element)
    }

    /// Append a slide built from a template for the current canvas and theme mode.
    pub fn add_slide_from_template(&mut self, template: &Template) {
        let slide = template.create_slide(self.state.canvas_size(), self.state.theme().mode);
        self.state.add_slide_from_template(&slide);
    }
}
