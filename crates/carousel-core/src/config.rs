//! Canvas sizes and editor session configuration.

use crate::history::MAX_HISTORY;
use crate::theme::Theme;
use kurbo::Size;
use serde::{Deserialize, Serialize};

/// Page name used for a fresh session.
pub const DEFAULT_PAGE_NAME: &str = "@yourusername";

/// View scale the editing canvas starts at.
pub const DEFAULT_VIEW_SCALE: f64 = 0.5;

/// Fixed output dimensions of every slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
    pub name: String,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64, name: impl Into<String>) -> Self {
        Self {
            width,
            height,
            name: name.into(),
        }
    }

    /// Square feed post, 1080×1080.
    pub fn post() -> Self {
        Self::new(1080.0, 1080.0, "Post")
    }

    /// Portrait feed post, 1080×1350.
    pub fn portrait() -> Self {
        Self::new(1080.0, 1350.0, "Portrait")
    }

    /// Full-screen story, 1080×1920.
    pub fn story() -> Self {
        Self::new(1080.0, 1920.0, "Story")
    }

    /// All built-in presets.
    pub fn presets() -> Vec<CanvasSize> {
        vec![Self::post(), Self::portrait(), Self::story()]
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::post()
    }
}

/// Settings a new editing session starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    pub canvas_size: CanvasSize,
    pub theme: Theme,
    pub page_name: String,
    /// Maximum number of retained history entries.
    pub history_limit: usize,
    /// Initial screen pixels per canvas unit.
    pub view_scale: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_size: CanvasSize::default(),
            theme: Theme::default(),
            page_name: DEFAULT_PAGE_NAME.to_string(),
            history_limit: MAX_HISTORY,
            view_scale: DEFAULT_VIEW_SCALE,
        }
    }
}

impl EditorConfig {
    pub fn with_canvas_size(mut self, canvas_size: CanvasSize) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn with_view_scale(mut self, scale: f64) -> Self {
        self.view_scale = scale;
        self
    }
}
