//! CSS hex color parsing.

use crate::renderer::{RenderResult, RendererError};
use peniko::Color;

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` into a color.
pub fn parse_color(input: &str) -> RenderResult<Color> {
    let invalid = || RendererError::InvalidColor(input.to_string());
    let hex = input.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);

    let rgba = match hex.len() {
        3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
        4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
        6 => (byte(0), byte(2), byte(4), Ok(255)),
        8 => (byte(0), byte(2), byte(4), byte(6)),
        _ => return Err(invalid()),
    };
    match rgba {
        (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Color::from_rgba8(r, g, b, a)),
        _ => Err(invalid()),
    }
}

/// Multiply a color's alpha by an element opacity in `0.0..=1.0`.
pub fn with_opacity(color: Color, opacity: Option<f64>) -> Color {
    match opacity {
        Some(opacity) => color.multiply_alpha(opacity.clamp(0.0, 1.0) as f32),
        None => color,
    }
}
