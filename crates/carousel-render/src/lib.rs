//! Carousel Studio Render Library
//!
//! Renderer abstraction plus the layout contract every backend follows, so the
//! live canvas and exported images place elements identically.

pub mod color;
pub mod display_list;
pub mod export;
pub mod layout;
mod renderer;

pub use color::parse_color;
pub use display_list::{DisplayList, DisplayListRenderer, DrawCommand};
pub use export::{ARCHIVE_NAME, ExportPlan, ExportedSlide, slide_file_name};
pub use layout::{TextLayout, TextLine, element_top_left, gradient_endpoints, layout_text};
pub use renderer::{RenderContext, RenderMode, RenderResult, Renderer, RendererError};
