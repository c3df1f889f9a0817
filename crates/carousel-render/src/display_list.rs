//! Backend-neutral draw commands for a slide.

use crate::color::{parse_color, with_opacity};
use crate::layout::{TextLayout, element_rect, gradient_endpoints, layout_text};
use crate::renderer::{RenderContext, RenderMode, RenderResult, Renderer};
use carousel_core::interaction::{RESIZE_HANDLE_SIZE, resize_handle_position};
use carousel_core::{Background, Element, ElementId, ElementKind, IconName};
use kurbo::{Rect, Size};
use peniko::{Brush, Color, Gradient};

/// One drawing operation in canvas space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Slide background over the full canvas.
    Background { rect: Rect, brush: Brush },
    Text {
        element: ElementId,
        layout: TextLayout,
        color: Color,
    },
    Image {
        element: ElementId,
        rect: Rect,
        source: String,
        opacity: f64,
    },
    Icon {
        element: ElementId,
        rect: Rect,
        icon: IconName,
        color: Color,
    },
    /// Stand-in for an image without a source. Edit mode only.
    Placeholder { element: ElementId, rect: Rect },
    SelectionOutline { rect: Rect, color: Color },
    ResizeHandle { rect: Rect, color: Color },
}

/// Commands for one slide in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    pub size: Size,
    pub commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// A renderer that records draw commands instead of rasterizing.
#[derive(Debug, Default)]
pub struct DisplayListRenderer {
    list: DisplayList,
}

impl DisplayListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands from the last successful build.
    pub fn display_list(&self) -> &DisplayList {
        &self.list
    }

    pub fn into_display_list(self) -> DisplayList {
        self.list
    }

    fn background(&self, background: &Background, size: Size) -> RenderResult<DrawCommand> {
        let brush = match background {
            Background::Solid { color } => Brush::Solid(parse_color(color)?),
            Background::Gradient { gradient } => {
                let (start, end) = gradient_endpoints(gradient.direction, size);
                let stops = [parse_color(&gradient.from)?, parse_color(&gradient.to)?];
                Brush::Gradient(Gradient::new_linear(start, end).with_stops(stops))
            }
        };
        Ok(DrawCommand::Background {
            rect: Rect::from_origin_size((0.0, 0.0), size),
            brush,
        })
    }

    fn element(&self, element: &Element, mode: RenderMode) -> RenderResult<Option<DrawCommand>> {
        let rect = element_rect(element);
        let command = match element.kind {
            ElementKind::Text => match layout_text(element) {
                Some(layout) => {
                    let color = with_opacity(parse_color(&layout.style.color)?, element.opacity);
                    Some(DrawCommand::Text {
                        element: element.id,
                        layout,
                        color,
                    })
                }
                None => None,
            },
            ElementKind::Image => match &element.image_url {
                Some(source) => Some(DrawCommand::Image {
                    element: element.id,
                    rect,
                    source: source.clone(),
                    opacity: element.opacity.unwrap_or(1.0),
                }),
                None if mode == RenderMode::Edit => Some(DrawCommand::Placeholder {
                    element: element.id,
                    rect,
                }),
                None => None,
            },
            ElementKind::Icon => match element.icon_name {
                Some(icon) => {
                    let color = element.icon_color.as_deref().unwrap_or("#ffffff");
                    Some(DrawCommand::Icon {
                        element: element.id,
                        rect,
                        icon,
                        color: with_opacity(parse_color(color)?, element.opacity),
                    })
                }
                None => None,
            },
            ElementKind::Shape | ElementKind::Logo => None,
        };
        Ok(command)
    }
}

impl Renderer for DisplayListRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        let size = ctx.canvas_size.size();
        let mut commands = vec![self.background(&ctx.slide.background, size)?];

        for element in &ctx.slide.elements {
            if let Some(command) = self.element(element, ctx.mode)? {
                commands.push(command);
            }
        }

        if ctx.mode == RenderMode::Edit {
            let selected = ctx.selected.and_then(|id| ctx.slide.element(id));
            if let Some(element) = selected {
                commands.push(DrawCommand::SelectionOutline {
                    rect: element_rect(element),
                    color: ctx.selection_color,
                });
                let handle = Rect::from_center_size(
                    resize_handle_position(element),
                    (RESIZE_HANDLE_SIZE, RESIZE_HANDLE_SIZE),
                );
                commands.push(DrawCommand::ResizeHandle {
                    rect: handle,
                    color: ctx.selection_color,
                });
            }
        }

        log::trace!("Built {} draw commands", commands.len());
        self.list = DisplayList { size, commands };
        Ok(())
    }
}
