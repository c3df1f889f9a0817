//! Export planning: which files the rasterizer writes and what goes in them.

use crate::display_list::{DisplayList, DisplayListRenderer};
use crate::renderer::{RenderContext, RenderResult, Renderer};
use carousel_core::EditorState;

/// File name of the archive holding every exported slide.
pub const ARCHIVE_NAME: &str = "instagram-carousel.zip";

/// File name of slide `index` (0-based) in an export.
pub fn slide_file_name(index: usize) -> String {
    format!("slide-{}.png", index + 1)
}

/// One output image.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedSlide {
    pub file_name: String,
    pub display_list: DisplayList,
}

/// Everything an export backend needs, in output order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPlan {
    /// Present when the slides are bundled into an archive.
    pub archive_name: Option<String>,
    pub slides: Vec<ExportedSlide>,
}

impl ExportPlan {
    /// Plan a single-image export of slide `index`.
    pub fn single(state: &EditorState, index: usize) -> RenderResult<Self> {
        Ok(Self {
            archive_name: None,
            slides: vec![export_slide(state, index)?],
        })
    }

    /// Plan an archive export of every slide.
    pub fn all(state: &EditorState) -> RenderResult<Self> {
        let slides = (0..state.slides().len())
            .map(|index| export_slide(state, index))
            .collect::<RenderResult<Vec<_>>>()?;
        log::debug!("Planned export of {} slides", slides.len());
        Ok(Self {
            archive_name: Some(ARCHIVE_NAME.to_string()),
            slides,
        })
    }
}

fn export_slide(state: &EditorState, index: usize) -> RenderResult<ExportedSlide> {
    let ctx = RenderContext::for_export(state, index)?;
    let mut renderer = DisplayListRenderer::new();
    renderer.build_scene(&ctx)?;
    Ok(ExportedSlide {
        file_name: slide_file_name(index),
        display_list: renderer.into_display_list(),
    })
}
