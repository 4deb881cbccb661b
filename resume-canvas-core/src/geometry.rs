//! Grid snapping and alignment-guide geometry.

use serde::{Deserialize, Serialize};

use crate::CanvasConfig;

/// Round a coordinate or dimension to the nearest multiple of `grid`.
///
/// Halfway values round away from zero, so `snap(d) + snap(-d) == 0` and a
/// top/left resize keeps the opposite edge exactly where it was whenever the
/// gesture started on the grid.
#[must_use]
pub fn snap(value: f32, grid: f32) -> f32 {
    if grid <= 0.0 {
        return value;
    }
    (value / grid).round() * grid
}

/// Position and size of an element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// X position (pixels from left).
    pub x: f32,
    /// Y position (pixels from top).
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Frame {
    /// Create a frame from position and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point lies within this frame (edges inclusive).
    #[must_use]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Snap position and size independently to the grid.
    #[must_use]
    pub fn snapped(self, grid: f32) -> Self {
        Self {
            x: snap(self.x, grid),
            y: snap(self.y, grid),
            width: snap(self.width, grid),
            height: snap(self.height, grid),
        }
    }
}

/// Alignment guides shown while an element is being dragged.
///
/// Guides are advisory: they never alter the snapped position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Guides {
    /// X coordinate of a vertical guide line, if shown.
    pub vertical: Option<f32>,
    /// Y coordinate of a horizontal guide line, if shown.
    pub horizontal: Option<f32>,
}

impl Guides {
    /// Compute guide visibility for a snapped position.
    ///
    /// A vertical page-center guide appears when `x` is within one grid unit
    /// of the horizontal center; likewise for `y` and the horizontal guide.
    #[must_use]
    pub fn for_position(x: f32, y: f32, config: &CanvasConfig) -> Self {
        let center_x = config.center_x();
        let center_y = config.center_y();
        Self {
            vertical: ((x - center_x).abs() < config.grid_size).then_some(center_x),
            horizontal: ((y - center_y).abs() < config.grid_size).then_some(center_y),
        }
    }

    /// Whether any guide is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertical.is_none() && self.horizontal.is_none()
    }

    /// Hide both guides.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
