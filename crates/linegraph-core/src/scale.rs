// File: crates/linegraph-core/src/scale.rs
// Summary: Data-to-screen mapping with padding, pan offset, and scroll bounds.

use crate::axis::{y_axis_extent, AxisConfig, ScaleResult};
use crate::geometry::{RectF32, ScreenPoint};
use crate::types::{DataPoint, Padding, Size, GLOBAL_X_SCALE, GLOBAL_Y_SCALE, INITIAL_OFFSET_DIVISOR};

/// Maps data points to pixels for one redraw.
///
/// x: `(x - x_min) * ppx / unit + left - offset`
/// y: `bottom - (y - y_min) * ppy`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    inv_unit: f64,
    ppx: f64,
    ppy: f64,
    left: f32,
    top: f32,
    bottom: f32,
    width: f32,
    right_pad: f32,
    horizontal_extra: f32,
    offset: f32,
}

impl CoordinateMapper {
    pub fn new(
        x_scale: &ScaleResult,
        y_scale: &ScaleResult,
        x_axis: &AxisConfig,
        y_axis: &AxisConfig,
        viewport: Size,
        padding: &Padding,
        offset: f32,
    ) -> Self {
        let inv_unit = 1.0 / x_axis.unit;
        // A single distinct x collapses the span; map it as one unit wide.
        let x_span = match x_scale.span() {
            s if s.is_finite() && s > 0.0 => s,
            _ => 1.0,
        };
        let ppx = viewport.width as f64 / (x_span * inv_unit) * GLOBAL_X_SCALE as f64;

        let left = padding.horizontal_extra;
        let bottom = viewport.height - padding.bottom;
        let extent = y_axis_extent(y_scale, y_axis);
        let ppy = ((bottom - padding.top) as f64 / extent) * GLOBAL_Y_SCALE as f64;

        Self {
            x_min: x_scale.min,
            x_max: x_scale.max,
            y_min: y_scale.min,
            y_max: y_scale.max,
            inv_unit,
            ppx,
            ppy,
            left,
            top: padding.top,
            bottom,
            width: viewport.width,
            right_pad: padding.right,
            horizontal_extra: padding.horizontal_extra,
            offset,
        }
    }

    /// Same mapping with a different pan offset.
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    #[inline]
    pub fn to_screen(&self, p: DataPoint) -> ScreenPoint {
        let px = (p.x - self.x_min) * self.ppx * self.inv_unit + self.left as f64 - self.offset as f64;
        let py = self.bottom as f64 - (p.y - self.y_min) * self.ppy;
        ScreenPoint::new(px as f32, py as f32)
    }

    /// Horizontal pixels per data unit (before the `1/unit` factor).
    pub fn pixels_per_x_unit(&self) -> f32 { self.ppx as f32 }
    pub fn pixels_per_y_unit(&self) -> f32 { self.ppy as f32 }
    pub fn offset(&self) -> f32 { self.offset }
    pub fn left(&self) -> f32 { self.left }
    pub fn top(&self) -> f32 { self.top }
    pub fn bottom(&self) -> f32 { self.bottom }

    /// Distance between consecutive whole x units on screen, used for grid spacing.
    pub fn grid_x_step(&self) -> f32 {
        (self.ppx * self.inv_unit) as f32
    }

    /// Full width of the plotted content including the left inset, right padding and extra reserve.
    pub fn content_width(&self) -> f32 {
        let last = (self.x_max - self.x_min) * self.inv_unit * self.ppx;
        last as f32 + self.left + self.right_pad + self.horizontal_extra
    }

    /// Area covered by the data range, clipped on the right by the padding strip.
    pub fn grid_region(&self) -> RectF32 {
        let top = self.bottom as f64 - (self.y_max - self.y_min) * self.ppy;
        RectF32::from_ltrb(self.left, top as f32, self.width - self.right_pad, self.bottom)
    }
}

/// How far the content can be scrolled: `max(0, content - viewport)`.
pub fn compute_max_scroll_offset(content_width: f32, viewport_width: f32) -> f32 {
    if content_width > viewport_width { content_width - viewport_width } else { 0.0 }
}

/// Offset used while following the latest data: scrolled to the end, pulled back by `width / 54`.
pub fn initial_offset(max_scroll_offset: f32, viewport_width: f32) -> f32 {
    max_scroll_offset - viewport_width / INITIAL_OFFSET_DIVISOR
}
