// File: crates/linegraph-core/src/style.rs
// Summary: Optional per-line drawing capabilities (connection, intersection, highlight, area, label).
// Notes:
// - Each style is an `Option` slot on its owner; an absent slot skips its draw step.

use serde::{Deserialize, Serialize};

use crate::geometry::ScreenPoint;
use crate::render::{Color, Dash, DrawList, Primitive, Stroke, StrokeCap};

/// Segment between two consecutive points; also used for the selection guide line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Connection {
    pub color: Color,
    pub stroke_width: f32,
    pub cap: StrokeCap,
    pub dash: Option<Dash>,
}

impl Connection {
    pub fn new(color: Color, stroke_width: f32) -> Self {
        Self { color, stroke_width, ..Self::default() }
    }

    pub fn with_dash(mut self, intervals: Vec<f32>) -> Self {
        self.dash = Some(Dash { intervals, phase: 0.0 });
        self
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn draw(&self, list: &mut DrawList, from: ScreenPoint, to: ScreenPoint, alpha: f32) {
        list.push(Primitive::Line {
            from,
            to,
            stroke: Stroke {
                color: self.color.with_alpha_f32(alpha),
                width: self.stroke_width,
                cap: self.cap,
                dash: self.dash.clone(),
            },
        });
    }
}

impl Default for Connection {
    fn default() -> Self {
        Self { color: Color::GREEN, stroke_width: 2.0, cap: StrokeCap::Butt, dash: None }
    }
}

/// Marker drawn on every point that is not drag-locked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intersection {
    pub color: Color,
    pub radius: f32,
    pub alpha: f32,
    /// Outline width; `None` draws a filled dot.
    pub stroke_width: Option<f32>,
}

impl Intersection {
    pub fn draw(&self, list: &mut DrawList, center: ScreenPoint) {
        let color = self.color.with_alpha_f32(self.alpha);
        let (fill, stroke) = match self.stroke_width {
            None => (Some(color), None),
            Some(width) => (None, Some(Stroke { color, width, cap: StrokeCap::Butt, dash: None })),
        };
        list.push(Primitive::Circle { center, radius: self.radius, fill, stroke });
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self { color: Color::GREEN, radius: 6.0, alpha: 1.0, stroke_width: None }
    }
}

/// Marker drawn on the drag-locked point of a line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    pub color: Color,
    pub radius: f32,
    pub alpha: f32,
    pub border_color: Color,
    pub border_enable: bool,
    pub border_width: f32,
}

impl Highlight {
    pub fn draw(&self, list: &mut DrawList, center: ScreenPoint) {
        list.push(Primitive::Circle {
            center,
            radius: self.radius,
            fill: Some(self.color.with_alpha_f32(self.alpha)),
            stroke: None,
        });
        if self.border_enable {
            list.push(Primitive::Circle {
                center,
                radius: self.radius,
                fill: None,
                stroke: Some(Stroke {
                    color: self.border_color.with_alpha_f32(self.alpha),
                    width: self.border_width,
                    cap: StrokeCap::Butt,
                    dash: None,
                }),
            });
        }
    }
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            color: Color::GREEN,
            radius: 6.0,
            alpha: 1.0,
            border_color: Color::WHITE,
            border_enable: false,
            border_width: 2.0,
        }
    }
}

/// Fill between the line and the plot bottom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaUnderLine {
    pub color: Color,
    pub alpha: f32,
}

impl AreaUnderLine {
    /// `outline` is the closed polygon: bottom under the first point, the line, then back along the bottom.
    pub fn draw(&self, list: &mut DrawList, outline: Vec<ScreenPoint>) {
        list.push(Primitive::Path { points: outline, fill: self.color.with_alpha_f32(self.alpha) });
    }
}

impl Default for AreaUnderLine {
    fn default() -> Self {
        Self { color: Color::GREEN, alpha: 0.3 }
    }
}

/// Text placed above the highest and below the lowest point of a line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaxMinLabel {
    pub color: Color,
    pub text_size: f32,
    pub prefix: String,
    /// (dx, dy): label is shifted left by dx and up by dy from the max point.
    pub max_label_xy: (f32, f32),
    /// (dx, dy): label is shifted left by dx and down by dy from the min point.
    pub min_label_xy: (f32, f32),
}

impl MaxMinLabel {
    pub fn format(&self, y: f64) -> String {
        format!("{}{}", self.prefix, y)
    }

    pub fn draw(&self, list: &mut DrawList, text: String, x: f32, y: f32) {
        list.push(Primitive::Text {
            text,
            baseline: ScreenPoint::new(x, y),
            size: self.text_size,
            color: self.color,
        });
    }
}

impl Default for MaxMinLabel {
    fn default() -> Self {
        Self {
            color: Color::GRAY,
            text_size: 14.0,
            prefix: "$".to_string(),
            max_label_xy: (10.0, 50.0),
            min_label_xy: (10.0, 60.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_applies_alpha() {
        let mut list = DrawList::new();
        Connection::new(Color::rgb(10, 20, 30), 3.0).draw(&mut list, ScreenPoint::new(0.0, 0.0), ScreenPoint::new(1.0, 1.0), 0.2);
        match &list.primitives()[0] {
            Primitive::Line { stroke, .. } => {
                assert_eq!(stroke.color.a, 51);
                assert_eq!(stroke.width, 3.0);
            }
            other => panic!("unexpected primitive {other:?}"),
        }
    }

    #[test]
    fn highlight_border_is_optional() {
        let mut list = DrawList::new();
        let mut h = Highlight::default();
        h.draw(&mut list, ScreenPoint::new(5.0, 5.0));
        assert_eq!(list.len(), 1);
        h.border_enable = true;
        h.draw(&mut list, ScreenPoint::new(5.0, 5.0));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn label_uses_prefix() {
        assert_eq!(MaxMinLabel::default().format(5.5), "$5.5");
    }
}
