// File: crates/linegraph-core/src/types.rs
// Summary: Shared types and constants (data points, viewport size, paddings, fixed layout factors).

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Horizontal squeeze applied to the x mapping so the last point is not flush with the right edge.
pub const GLOBAL_X_SCALE: f32 = 0.92;
/// Vertical scale factor applied to the y mapping.
pub const GLOBAL_Y_SCALE: f32 = 1.0;
/// The seeded pan offset is pulled back by `viewport_width / INITIAL_OFFSET_DIVISOR`.
pub const INITIAL_OFFSET_DIVISOR: f32 = 54.0;

/// Default surface width in pixels.
pub const WIDTH: f32 = 1024.0;
/// Default surface height in pixels.
pub const HEIGHT: f32 = 400.0;

/// One sample of a series. Series keep insertion order; x is expected to be non-decreasing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Viewport size in pixels, supplied by the host every frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> ChartResult<()> {
        let ok = self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0;
        if ok {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport { width: self.width, height: self.height })
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Layout padding, in pixels.
/// `horizontal_extra` is both the left inset of the plot and extra reserve added to the content width.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub horizontal_extra: f32,
}

impl Padding {
    pub const fn new(top: f32, right: f32, bottom: f32, horizontal_extra: f32) -> Self {
        Self { top, right, bottom, horizontal_extra }
    }

    pub fn validate(&self) -> ChartResult<()> {
        let fields = [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("horizontal_extra", self.horizontal_extra),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(ChartError::InvalidConfig(format!("padding.{name} must be a non-negative number, got {v}")));
            }
        }
        Ok(())
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(16.0, 0.0, 24.0, 0.0)
    }
}
