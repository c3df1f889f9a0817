//! Carousel Studio Core Library
//!
//! Document model, snapshot history, mutation API and drag/resize interaction
//! for the carousel slide editor.

pub mod camera;
pub mod config;
pub mod editor;
pub mod element;
pub mod error;
pub mod history;
pub mod icon;
pub mod image;
pub mod input;
pub mod interaction;
pub mod slide;
pub mod state;
pub mod templates;
pub mod theme;

pub use camera::Camera;
pub use config::{CanvasSize, EditorConfig};
pub use editor::Editor;
pub use element::{Element, ElementId, ElementKind, ElementPatch, StylePatch, TextAlign, TextStyle};
pub use error::{CoreError, CoreResult};
pub use history::{History, HistoryEntry, MAX_HISTORY};
pub use icon::{IconCategory, IconName};
pub use input::{MouseButton, PointerEvent};
pub use interaction::{Interaction, InteractionController};
pub use slide::{Background, LinearGradient, Slide, SlideId};
pub use state::EditorState;
pub use templates::{Template, TemplateCategory, TemplateKind, TextRole};
pub use theme::{SlidePalette, Theme, ThemeMode};
