// File: crates/linegraph-core/src/config.rs
// Summary: Plot configuration tree (lines, styles, axes, padding, selection) with JSON loading.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::AxisConfig;
use crate::error::{ChartError, ChartResult};
use crate::grid::Grid;
use crate::render::{Color, StrokeCap};
use crate::style::{AreaUnderLine, Connection, Highlight, Intersection, MaxMinLabel};
use crate::types::{DataPoint, Padding};

/// One plotted series and the styles it is drawn with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Line {
    pub points: Vec<DataPoint>,
    pub connection: Option<Connection>,
    pub intersection: Option<Intersection>,
    pub highlight: Option<Highlight>,
    pub area_under_line: Option<AreaUnderLine>,
    pub max_min_label: Option<MaxMinLabel>,
    /// Alpha of the segments after the drag lock while selecting.
    pub shadow_alpha: f32,
}

impl Line {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points, ..Self::default() }
    }

    pub fn from_xy(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::new(points.into_iter().map(DataPoint::from).collect())
    }

    pub fn with_connection(mut self, connection: Option<Connection>) -> Self {
        self.connection = connection;
        self
    }

    pub fn with_intersection(mut self, intersection: Option<Intersection>) -> Self {
        self.intersection = intersection;
        self
    }

    pub fn with_highlight(mut self, highlight: Option<Highlight>) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn with_area(mut self, area: Option<AreaUnderLine>) -> Self {
        self.area_under_line = area;
        self
    }

    pub fn with_max_min_label(mut self, label: Option<MaxMinLabel>) -> Self {
        self.max_min_label = label;
        self
    }

    pub fn with_shadow_alpha(mut self, alpha: f32) -> Self {
        self.shadow_alpha = alpha;
        self
    }
}

impl Default for Line {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            connection: Some(Connection::default()),
            intersection: Some(Intersection::default()),
            highlight: Some(Highlight::default()),
            area_under_line: None,
            max_min_label: None,
            shadow_alpha: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub enabled: bool,
    /// Vertical guide drawn through the first locked point.
    pub highlight: Option<Connection>,
    /// A drag must be confirmed this long after pointer-down at the latest.
    pub detection_time_ms: u64,
}

impl SelectionConfig {
    pub fn detection_timeout(&self) -> Duration {
        Duration::from_millis(self.detection_time_ms)
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            highlight: Some(
                Connection::new(Color::GREEN, 2.0)
                    .with_cap(StrokeCap::Round)
                    .with_dash(vec![10.0, 15.0]),
            ),
            detection_time_ms: 100,
        }
    }
}

/// Everything one render call needs besides the viewport size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinePlot {
    pub lines: Vec<Line>,
    pub grid: Option<Grid>,
    pub selection: SelectionConfig,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub padding: Padding,
    pub zoom_allowed: bool,
}

impl LinePlot {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines, ..Self::default() }
    }

    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let plot: Self = serde_json::from_str(json)?;
        plot.validate()?;
        debug!(lines = plot.lines.len(), "loaded plot config");
        Ok(plot)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the preconditions of a redraw: sane axes and padding, and no empty line.
    pub fn validate(&self) -> ChartResult<()> {
        self.x_axis.validate()?;
        self.y_axis.validate()?;
        self.padding.validate()?;
        if self.lines.is_empty() {
            return Err(ChartError::InvalidInput("plot has no lines".into()));
        }
        if let Some(i) = self.lines.iter().position(|l| l.points.is_empty()) {
            return Err(ChartError::InvalidInput(format!("line {i} has no data points")));
        }
        Ok(())
    }

    pub fn all_points(&self) -> impl Iterator<Item = &[DataPoint]> {
        self.lines.iter().map(|l| l.points.as_slice())
    }
}

impl Default for LinePlot {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            grid: Some(Grid::default()),
            selection: SelectionConfig::default(),
            x_axis: AxisConfig::default(),
            y_axis: AxisConfig::default(),
            padding: Padding::default(),
            zoom_allowed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_fills_defaults() {
        let plot = LinePlot::from_json_str(
            r#"{ "lines": [ { "points": [ {"x": 0, "y": 1}, {"x": 1, "y": 2} ], "intersection": null } ],
                 "selection": { "detection_time_ms": 250 } }"#,
        )
        .unwrap();
        assert_eq!(plot.lines.len(), 1);
        assert!(plot.lines[0].intersection.is_none());
        assert!(plot.lines[0].connection.is_some());
        assert!(plot.selection.enabled);
        assert_eq!(plot.selection.detection_timeout(), Duration::from_millis(250));
        assert_eq!(plot.x_axis, AxisConfig::default());
    }

    #[test]
    fn empty_line_fails_validation() {
        let plot = LinePlot::new(vec![Line::from_xy([(0.0, 1.0)]), Line::new(Vec::new())]);
        assert!(matches!(plot.validate(), Err(ChartError::InvalidInput(msg)) if msg.contains("line 1")));
    }

    #[test]
    fn bad_json_is_parse_error() {
        assert!(matches!(LinePlot::from_json_str("{ lines: "), Err(ChartError::Parse(_))));
    }

    #[test]
    fn json_roundtrip_keeps_styles() {
        let plot = LinePlot::new(vec![Line::from_xy([(0.0, 1.0), (1.0, 3.0)]).with_area(Some(AreaUnderLine::default()))]);
        let text = plot.to_json_string().unwrap();
        assert_eq!(LinePlot::from_json_str(&text).unwrap(), plot);
    }
}
