//! Pointer events in screen coordinates.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event for unified mouse/touch handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Move { position: Point },
    Up { position: Point, button: MouseButton },
}

impl PointerEvent {
    /// Screen position of the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position, .. } => position,
        }
    }

    /// Shorthand for a primary-button press.
    pub fn down(position: impl Into<Point>) -> Self {
        PointerEvent::Down {
            position: position.into(),
            button: MouseButton::Left,
        }
    }

    pub fn moved(position: impl Into<Point>) -> Self {
        PointerEvent::Move {
            position: position.into(),
        }
    }

    /// Shorthand for a primary-button release.
    pub fn up(position: impl Into<Point>) -> Self {
        PointerEvent::Up {
            position: position.into(),
            button: MouseButton::Left,
        }
    }
}
