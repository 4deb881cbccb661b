//! Input events for canvas interaction.

use serde::{Deserialize, Serialize};

use crate::Frame;

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    /// Button pressed / finger down.
    Down,
    /// Pointer moved.
    Move,
    /// Button released / finger up.
    Up,
}

/// A single pointer event in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Phase of this event.
    pub phase: PointerPhase,
    /// X position in page coordinates.
    pub x: f32,
    /// Y position in page coordinates.
    pub y: f32,
}

impl PointerEvent {
    /// Pointer pressed at a point.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self {
            phase: PointerPhase::Down,
            x,
            y,
        }
    }

    /// Pointer moved to a point.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self {
            phase: PointerPhase::Move,
            x,
            y,
        }
    }

    /// Pointer released at a point.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self {
            phase: PointerPhase::Up,
            x,
            y,
        }
    }
}

/// Corner handle of the selected element used for resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeHandle {
    /// Top-left corner; moves the left and top edges.
    TopLeft,
    /// Top-right corner; moves the right and top edges.
    TopRight,
    /// Bottom-left corner; moves the left and bottom edges.
    BottomLeft,
    /// Bottom-right corner; moves the right and bottom edges.
    BottomRight,
}

impl ResizeHandle {
    /// All four handles, in hit-test order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Position of this handle on a frame.
    #[must_use]
    pub fn position(self, frame: &Frame) -> (f32, f32) {
        match self {
            Self::TopLeft => (frame.x, frame.y),
            Self::TopRight => (frame.right(), frame.y),
            Self::BottomLeft => (frame.x, frame.bottom()),
            Self::BottomRight => (frame.right(), frame.bottom()),
        }
    }

    /// Whether dragging this handle moves the left edge.
    #[must_use]
    pub const fn moves_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    /// Whether dragging this handle moves the top edge.
    #[must_use]
    pub const fn moves_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }
}

/// Horizontal alignment command for the selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlignDirection {
    /// Against the left page margin.
    Left,
    /// Centered on the page.
    Center,
    /// Against the right page margin.
    Right,
}

/// All input events the canvas can receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum InputEvent {
    /// Raw pointer press, move or release.
    Pointer(PointerEvent),

    /// Double click / double tap; requests an in-place text edit.
    DoubleClick {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },

    /// Alignment command from the toolbar.
    Align(AlignDirection),
}
