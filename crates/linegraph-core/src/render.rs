// File: crates/linegraph-core/src/render.rs
// Summary: Device-independent draw primitives and the renderer trait backends implement.

use serde::{Deserialize, Serialize};

use crate::geometry::{RectF32, ScreenPoint};

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Scale the alpha channel by `alpha` (clamped to 0..=1).
    pub fn with_alpha_f32(self, alpha: f32) -> Self {
        let f = alpha.clamp(0.0, 1.0);
        Self { a: (self.a as f32 * f).round() as u8, ..self }
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const GRAY: Self = Self::rgb(136, 136, 136);
    pub const GREEN: Self = Self::rgb(40, 200, 120);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Dash pattern: alternating on/off lengths in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dash {
    pub intervals: Vec<f32>,
    #[serde(default)]
    pub phase: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub cap: StrokeCap,
    pub dash: Option<Dash>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        stroke: Stroke,
    },
    /// Filled polygon through `points`.
    Path {
        points: Vec<ScreenPoint>,
        fill: Color,
    },
    Circle {
        center: ScreenPoint,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Rect {
        rect: RectF32,
        color: Color,
    },
    /// Left-aligned text; `baseline` is the start of the text baseline.
    Text {
        text: String,
        baseline: ScreenPoint,
        size: f32,
        color: Color,
    },
}

/// Ordered primitives for one redraw; later entries paint over earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    primitives: Vec<Primitive>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// A backend that can paint a draw list.
pub trait Renderer {
    type Error;

    fn render(&mut self, list: &DrawList) -> Result<(), Self::Error>;
}
