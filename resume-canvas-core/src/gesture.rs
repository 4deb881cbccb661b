//! Drag/resize gesture state machine and its geometry.
//!
//! A gesture captures the pointer and element geometry once, at pointer-down.
//! Every move recomputes from those origins and the absolute pointer
//! position, so coalesced or dropped move events cannot accumulate error.

use serde::{Deserialize, Serialize};

use crate::geometry::snap;
use crate::{AlignDirection, CanvasConfig, ElementId, Frame, ResizeHandle};

/// Active gesture on one canvas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum GestureState {
    /// No pointer interaction in progress.
    #[default]
    Idle,
    /// Moving an element.
    Dragging {
        /// Element being moved.
        element: ElementId,
        /// Pointer position at pointer-down.
        pointer_origin: (f32, f32),
        /// Element position at pointer-down.
        element_origin: (f32, f32),
    },
    /// Resizing the selected element from one corner.
    Resizing {
        /// Element being resized.
        element: ElementId,
        /// Corner being dragged.
        handle: ResizeHandle,
        /// Pointer position at pointer-down.
        pointer_origin: (f32, f32),
        /// Element geometry at pointer-down.
        frame_origin: Frame,
    },
}

impl GestureState {
    /// Whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The element the gesture acts on, if any.
    #[must_use]
    pub fn element(&self) -> Option<&ElementId> {
        match self {
            Self::Idle => None,
            Self::Dragging { element, .. } | Self::Resizing { element, .. } => Some(element),
        }
    }
}

/// Snapped element position for a drag.
///
/// Position = element origin + (pointer − pointer origin), each axis snapped
/// independently.
#[must_use]
pub fn drag_position(
    element_origin: (f32, f32),
    pointer_origin: (f32, f32),
    pointer: (f32, f32),
    grid: f32,
) -> (f32, f32) {
    let dx = pointer.0 - pointer_origin.0;
    let dy = pointer.1 - pointer_origin.1;
    (
        snap(element_origin.0 + dx, grid),
        snap(element_origin.1 + dy, grid),
    )
}

/// Snapped frame for a resize from `handle` by pointer displacement `(dx, dy)`.
///
/// Width and height are clamped to the configured minimums before snapping.
/// When the handle moves the left or top edge, the snapped position is
/// chosen first and the size is taken from the fixed opposite edge, so that
/// edge moves by at most half a grid unit (not at all when it started on the
/// grid). Edges the handle does not move keep their exact coordinate.
#[must_use]
pub fn resize_frame(
    handle: ResizeHandle,
    origin: Frame,
    displacement: (f32, f32),
    config: &CanvasConfig,
) -> Frame {
    let (dx, dy) = displacement;
    let grid = config.grid_size;

    let (x, width) = resize_axis(
        handle.moves_left(),
        origin.x,
        origin.width,
        dx,
        config.min_width,
        grid,
    );
    let (y, height) = resize_axis(
        handle.moves_top(),
        origin.y,
        origin.height,
        dy,
        config.min_height,
        grid,
    );

    Frame::new(x, y, width, height)
}

fn resize_axis(
    moves_start: bool,
    start: f32,
    length: f32,
    delta: f32,
    min: f32,
    grid: f32,
) -> (f32, f32) {
    if !moves_start {
        let length = snap_at_least((length + delta).max(min), min, grid);
        return (start, length);
    }

    let end = start + length;
    let raw = (length - delta).max(min);
    let mut start = snap(end - raw, grid);
    if end - start < min {
        start -= grid;
    }
    (start, snap_at_least(end - start, min, grid))
}

fn snap_at_least(value: f32, min: f32, grid: f32) -> f32 {
    let snapped = snap(value, grid);
    if snapped < min {
        snapped + grid
    } else {
        snapped
    }
}

/// Snapped x position that aligns an element of `width` on the page.
#[must_use]
pub fn aligned_x(direction: AlignDirection, width: f32, config: &CanvasConfig) -> f32 {
    let x = match direction {
        AlignDirection::Left => config.margin,
        AlignDirection::Center => config.center_x() - width / 2.0,
        AlignDirection::Right => config.page_width - config.margin - width,
    };
    snap(x, config.grid_size)
}
