// File: crates/linegraph-core/src/grid.rs
// Summary: Background grid drawn behind the lines.

use serde::{Deserialize, Serialize};

use crate::geometry::{RectF32, ScreenPoint};
use crate::render::{Color, DrawList, Primitive, Stroke, StrokeCap};

/// Vertical grid lines closer than this are thinned out by skipping whole x units.
const MIN_VERTICAL_SPACING_PX: f32 = 8.0;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    pub color: Color,
    pub line_width: f32,
    /// Horizontal lines, evenly spaced from the region top to its bottom.
    pub steps: usize,
    /// Also draw a vertical line at every whole x unit.
    pub vertical: bool,
}

impl Grid {
    /// `x_step` is the pixel distance between whole x units.
    pub fn draw(&self, list: &mut DrawList, region: RectF32, x_step: f32) {
        let stroke = Stroke { color: self.color, width: self.line_width, cap: StrokeCap::Butt, dash: None };
        for y in linspace(region.top as f64, region.bottom as f64, self.steps.max(2)) {
            let y = y as f32;
            list.push(Primitive::Line {
                from: ScreenPoint::new(region.left, y),
                to: ScreenPoint::new(region.right, y),
                stroke: stroke.clone(),
            });
        }

        if !self.vertical || !x_step.is_finite() || x_step <= 0.0 || region.width() <= 0.0 {
            return;
        }
        let skip = (MIN_VERTICAL_SPACING_PX / x_step).ceil().max(1.0);
        let spacing = x_step * skip;
        let count = (region.width() / spacing).floor() as usize;
        for i in 0..=count {
            let x = region.left + spacing * i as f32;
            list.push(Primitive::Line {
                from: ScreenPoint::new(x, region.top),
                to: ScreenPoint::new(x, region.bottom),
                stroke: stroke.clone(),
            });
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self { color: Color::rgb(40, 40, 45), line_width: 1.0, steps: 5, vertical: false }
    }
}
