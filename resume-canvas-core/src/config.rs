//! Page and grid configuration for a canvas instance.

use serde::{Deserialize, Serialize};

use crate::{CanvasError, CanvasResult};

/// Letter page width at 96 dpi (8.5in).
pub const PAGE_WIDTH: f32 = 816.0;

/// Letter page height at 96 dpi (11in).
pub const PAGE_HEIGHT: f32 = 1056.0;

/// Default snapping grid unit in pixels.
pub const GRID_SIZE: f32 = 8.0;

/// Configuration shared by the layout projector, the gesture state machine
/// and the surface draw list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    /// Page width in pixels.
    pub page_width: f32,
    /// Page height in pixels.
    pub page_height: f32,
    /// Grid unit every position and size snaps to.
    pub grid_size: f32,
    /// Margin applied on every side of the page.
    pub margin: f32,
    /// Gap between the sidebar and the main column.
    pub column_gap: f32,
    /// Sidebar width as a fraction of the page width.
    pub sidebar_ratio: f32,
    /// Smallest width a resize can produce (before snapping).
    pub min_width: f32,
    /// Smallest height a resize can produce (before snapping).
    pub min_height: f32,
    /// Distance from a corner within which a pointer grabs the resize handle.
    pub handle_radius: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
            grid_size: GRID_SIZE,
            margin: 48.0,
            column_gap: 24.0,
            sidebar_ratio: 0.38,
            min_width: 60.0,
            min_height: 20.0,
            handle_radius: 8.0,
        }
    }
}

impl CanvasConfig {
    /// Sidebar column width.
    #[must_use]
    pub fn sidebar_width(&self) -> f32 {
        self.page_width * self.sidebar_ratio
    }

    /// Main column width: the page minus both margins, the sidebar and the gap.
    #[must_use]
    pub fn main_width(&self) -> f32 {
        self.page_width - self.margin * 2.0 - self.sidebar_width() - self.column_gap
    }

    /// Left edge of the main column.
    #[must_use]
    pub fn main_x(&self) -> f32 {
        self.margin + self.sidebar_width() + self.column_gap
    }

    /// Horizontal page center.
    #[must_use]
    pub fn center_x(&self) -> f32 {
        self.page_width / 2.0
    }

    /// Vertical page center.
    #[must_use]
    pub fn center_y(&self) -> f32 {
        self.page_height / 2.0
    }

    /// Check that the configuration describes a usable page.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> CanvasResult<()> {
        if !positive(self.page_width) || !positive(self.page_height) {
            return Err(CanvasError::InvalidConfig(format!(
                "page size must be positive, got {}x{}",
                self.page_width, self.page_height
            )));
        }
        if !positive(self.grid_size) {
            return Err(CanvasError::InvalidConfig(format!(
                "grid size must be positive, got {}",
                self.grid_size
            )));
        }
        if !positive(self.sidebar_ratio) || self.sidebar_ratio >= 1.0 {
            return Err(CanvasError::InvalidConfig(format!(
                "sidebar ratio must be within (0, 1), got {}",
                self.sidebar_ratio
            )));
        }
        if self.margin < 0.0 || self.column_gap < 0.0 {
            return Err(CanvasError::InvalidConfig(
                "margin and column gap must not be negative".to_string(),
            ));
        }
        if self.main_width() <= 0.0 {
            return Err(CanvasError::InvalidConfig(format!(
                "main column has no room: width {}",
                self.main_width()
            )));
        }
        if self.min_width < 0.0 || self.min_height < 0.0 || self.handle_radius < 0.0 {
            return Err(CanvasError::InvalidConfig(
                "minimum sizes and handle radius must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a configuration from JSON. Missing fields take
    /// their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails
    /// [`CanvasConfig::validate`].
    pub fn from_json(json: &str) -> CanvasResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
