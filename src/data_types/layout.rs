use serde::{Deserialize, Serialize};

/// Size of one grid cell as measured by the hosting application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub outer_width: f32,
    pub outer_height: f32,
}

impl ViewportSize {
    /// Negative inputs are floored at zero.
    pub fn new(outer_width: f32, outer_height: f32) -> Self {
        Self {
            outer_width: outer_width.max(0.0),
            outer_height: outer_height.max(0.0),
        }
    }

    /// Compares dimensions only.
    pub fn same_dimensions(&self, other: &ViewportSize) -> bool {
        self.outer_width == other.outer_width && self.outer_height == other.outer_height
    }
}

/// Pixel insets of the drawable area inside a panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margin {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Insets used by the instrument range chart; the wide left side holds instrument labels.
    pub const fn range_chart() -> Self {
        Self::new(60.0, 20.0, 40.0, 180.0)
    }
}

/// Limits and permissions for grid span changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    pub row_span: u32,
    pub column_span: u32,
    pub row_limit: u32,
    pub column_limit: u32,
    pub can_resize_rows: bool,
    pub can_resize_columns: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            row_span: 1,
            column_span: 1,
            row_limit: 12,
            column_limit: 2,
            can_resize_rows: true,
            can_resize_columns: true,
        }
    }
}
