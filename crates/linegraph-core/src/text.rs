// File: crates/linegraph-core/src/text.rs
// Summary: Text width measurement used to keep max/min labels inside the surface.

/// Measures the advance width of a single-line label.
pub trait TextMeasure {
    fn measure_width(&self, text: &str, size: f32) -> f32;
}

/// Backend-free estimate: every char is `size * glyph_ratio` wide.
#[derive(Clone, Copy, Debug)]
pub struct ApproxTextMeasure {
    pub glyph_ratio: f32,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self { glyph_ratio: 0.55 }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn measure_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size.max(0.0) * self.glyph_ratio
    }
}
