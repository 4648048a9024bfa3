//! Pointer event vocabulary consumed by the annotation surface.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer buttons the surface distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    /// The main button: draws, erases, places and drags.
    Primary,
    /// The secondary button: deletes the text label under the pointer.
    Secondary,
}

/// A pointer event in surface-local coordinates.
///
/// The host delivers these in gesture order (down strictly before moves
/// strictly before up); the surface never reorders them. `Leave` is reported
/// when the pointer exits the drawing area and ends a pen or eraser gesture
/// the same way `Up` does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: PointerButton,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
    },
    Leave,
}

impl PointerEvent {
    /// Convenience constructor for a primary-button press.
    pub fn down(position: Point) -> Self {
        Self::Down {
            position,
            button: PointerButton::Primary,
        }
    }
}
