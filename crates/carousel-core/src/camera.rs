//! View transform between screen space and canvas space.

use crate::config::{CanvasSize, DEFAULT_VIEW_SCALE};
use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Uniform scale plus the on-screen position of the canvas origin.
///
/// `canvas = (screen - offset) / zoom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Screen position of the canvas's top-left corner.
    pub offset: Vec2,
    /// Screen pixels per canvas unit.
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: DEFAULT_VIEW_SCALE,
            min_zoom: 0.1,
            max_zoom: 4.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera at the given scale with the canvas at the screen origin.
    pub fn with_zoom(zoom: f64) -> Self {
        let mut camera = Self::default();
        camera.set_zoom(zoom);
        camera
    }

    /// Canvas-to-screen transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Screen-to-canvas transform.
    pub fn inverse_transform(&self) -> Affine {
        Affine::scale(1.0 / self.zoom) * Affine::translate(-self.offset)
    }

    pub fn screen_to_canvas(&self, screen_point: Point) -> Point {
        self.inverse_transform() * screen_point
    }

    pub fn canvas_to_screen(&self, canvas_point: Point) -> Point {
        self.transform() * canvas_point
    }

    /// Convert a screen-space displacement to canvas units. Independent of `offset`.
    pub fn screen_delta_to_canvas(&self, delta: Vec2) -> Vec2 {
        delta / self.zoom
    }

    /// Set the zoom, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Zoom around a screen point, keeping the canvas point under it fixed.
    pub fn zoom_at(&mut self, screen_point: Point, factor: f64) {
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        let canvas_point = self.screen_to_canvas(screen_point);
        self.zoom = new_zoom;
        let moved = self.canvas_to_screen(canvas_point);
        self.offset += screen_point - moved;
    }

    /// Scale and center the canvas inside a viewport, leaving `padding` on each side.
    pub fn fit_canvas(&mut self, canvas: &CanvasSize, viewport: Size, padding: f64) {
        let available = Size::new(
            (viewport.width - padding * 2.0).max(1.0),
            (viewport.height - padding * 2.0).max(1.0),
        );
        let scale = (available.width / canvas.width).min(available.height / canvas.height);
        self.set_zoom(scale);
        self.offset = Vec2::new(
            (viewport.width - canvas.width * self.zoom) / 2.0,
            (viewport.height - canvas.height * self.zoom) / 2.0,
        );
    }
}
