// File: crates/linegraph-core/src/axis.rs
// Summary: Axis configuration and step computation from the data range.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::types::DataPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisKind {
    X,
    Y,
}

/// How the raw range of one axis is divided into scale steps.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub step_count: u32,
    pub round_to_int: bool,
    /// Scale factor for x values; x distances are divided by it before mapping.
    pub unit: f64,
}

impl AxisConfig {
    pub const fn new(step_count: u32, round_to_int: bool, unit: f64) -> Self {
        Self { step_count, round_to_int, unit }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.step_count == 0 {
            return Err(ChartError::InvalidConfig("axis step_count must be positive".into()));
        }
        if !self.unit.is_finite() || self.unit <= 0.0 {
            return Err(ChartError::InvalidConfig(format!("axis unit must be a positive number, got {}", self.unit)));
        }
        Ok(())
    }

    /// Steps the y range is divided by: one less than `step_count`, never below one.
    pub fn y_divisor(&self) -> f64 {
        if self.step_count > 1 { (self.step_count - 1) as f64 } else { 1.0 }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self::new(5, true, 1.0)
    }
}

/// Raw data extremes of one axis plus the step size derived from them.
/// Contract: `step > 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleResult {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ScaleResult {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Compute `(min, max, step)` for one axis across every point of every series.
///
/// Fails with `InvalidInput` when there are no points or a coordinate is not finite,
/// and with `InvalidConfig` when the axis settings are out of range. When the range is
/// degenerate (max == min on y) the step falls back to one whole unit with
/// `round_to_int`, otherwise to `1 / divisor` so the y extent stays one unit.
pub fn compute_scale<'a, I>(series: I, axis: &AxisConfig, kind: AxisKind) -> ChartResult<ScaleResult>
where
    I: IntoIterator<Item = &'a [DataPoint]>,
{
    axis.validate()?;

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for points in series {
        for p in points {
            let v = match kind {
                AxisKind::X => p.x,
                AxisKind::Y => p.y,
            };
            if !v.is_finite() {
                return Err(ChartError::InvalidInput(format!("non-finite {kind:?} coordinate {v}")));
            }
            min = min.min(v);
            max = max.max(v);
            any = true;
        }
    }
    if !any {
        return Err(ChartError::InvalidInput(format!("cannot scale {kind:?} axis without data points")));
    }

    let (raw, divisor) = match kind {
        AxisKind::X => {
            let total_steps = (max - min) + 1.0;
            let divisor = axis.step_count as f64;
            (total_steps / divisor, divisor)
        }
        AxisKind::Y => {
            let divisor = axis.y_divisor();
            ((max - min) / divisor, divisor)
        }
    };
    let step = if axis.round_to_int { raw.ceil() } else { raw };
    let degenerate = max == min || !step.is_finite() || step <= 0.0;
    let step = if degenerate {
        let floor = if axis.round_to_int { 1.0 } else { 1.0 / divisor };
        debug!(?kind, min, max, raw, floor, "degenerate axis range, substituting step floor");
        floor
    } else {
        step
    };

    Ok(ScaleResult { min, max, step })
}

/// Height of the y axis in data units: `y_divisor * step` (never zero).
pub fn y_axis_extent(scale: &ScaleResult, axis: &AxisConfig) -> f64 {
    let extent = axis.y_divisor() * scale.step;
    if extent.is_finite() && extent > 0.0 { extent } else { 1.0 }
}
