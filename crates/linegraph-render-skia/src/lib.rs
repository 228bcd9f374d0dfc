// File: crates/linegraph-render-skia/src/lib.rs
// Summary: Skia backend: replays a core DrawList onto a canvas and encodes headless PNGs from a CPU raster surface.

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::{debug, warn};

use linegraph_core::{Color, DrawList, Primitive, RenderOptions, Renderer, Stroke, StrokeCap};

pub mod text;

pub use text::TextShaper;

/// Paints draw lists onto a borrowed Skia canvas.
pub struct SkiaRenderer<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
}

impl<'a> SkiaRenderer<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper) -> Self {
        Self { canvas, shaper }
    }

    fn draw(&self, primitive: &Primitive) {
        match primitive {
            Primitive::Line { from, to, stroke } => {
                let paint = stroke_paint(stroke);
                self.canvas.draw_line((from.x, from.y), (to.x, to.y), &paint);
            }
            Primitive::Path { points, fill } => {
                let Some((first, rest)) = points.split_first() else { return };
                let mut path = skia::Path::new();
                path.move_to((first.x, first.y));
                for p in rest {
                    path.line_to((p.x, p.y));
                }
                path.close();
                self.canvas.draw_path(&path, &fill_paint(*fill));
            }
            Primitive::Circle { center, radius, fill, stroke } => {
                if let Some(fill) = fill {
                    self.canvas.draw_circle((center.x, center.y), *radius, &fill_paint(*fill));
                }
                if let Some(stroke) = stroke {
                    self.canvas.draw_circle((center.x, center.y), *radius, &stroke_paint(stroke));
                }
            }
            Primitive::Rect { rect, color } => {
                let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
                self.canvas.draw_rect(r, &fill_paint(*color));
            }
            Primitive::Text { text, baseline, size, color } => {
                self.shaper.draw_left(self.canvas, text, baseline.x, baseline.y, *size, to_sk_color(*color));
            }
        }
    }
}

impl Renderer for SkiaRenderer<'_> {
    type Error = anyhow::Error;

    fn render(&mut self, list: &DrawList) -> Result<()> {
        for primitive in list.iter() {
            self.draw(primitive);
        }
        Ok(())
    }
}

pub fn to_sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn fill_paint(color: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(to_sk_color(color));
    paint
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(to_sk_color(stroke.color));
    paint.set_stroke_cap(match stroke.cap {
        StrokeCap::Butt => skia::paint::Cap::Butt,
        StrokeCap::Round => skia::paint::Cap::Round,
        StrokeCap::Square => skia::paint::Cap::Square,
    });
    if let Some(dash) = &stroke.dash {
        // odd trailing interval is dropped
        let intervals = &dash.intervals[..dash.intervals.len() & !1];
        match intervals.len() {
            0 => warn!(intervals = ?dash.intervals, "dash pattern needs two intervals, drawing solid"),
            _ => match skia::PathEffect::dash(intervals, dash.phase) {
                Some(effect) => {
                    paint.set_path_effect(effect);
                }
                None => warn!(intervals = ?dash.intervals, "invalid dash pattern, drawing solid"),
            },
        }
    }
    paint
}

/// Render `list` on a fresh CPU raster surface and encode it as PNG.
pub fn render_to_png_bytes(list: &DrawList, opts: &RenderOptions) -> Result<Vec<u8>> {
    let (w, h) = (opts.size.width.ceil() as i32, opts.size.height.ceil() as i32);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
    let shaper = TextShaper::new();
    {
        let canvas = surface.canvas();
        canvas.clear(to_sk_color(opts.background));
        SkiaRenderer::new(canvas, &shaper).render(list)?;
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    debug!(width = w, height = h, primitives = list.len(), bytes = data.len(), "encoded png");
    Ok(data.as_bytes().to_vec())
}

/// Render `list` to a PNG file, creating parent directories as needed.
pub fn render_to_png(list: &DrawList, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = render_to_png_bytes(list, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_channels_map_to_argb() {
        let c = to_sk_color(Color::from_argb(10, 20, 30, 40));
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (10, 20, 30, 40));
    }

    #[test]
    fn single_dash_interval_falls_back_to_solid() {
        let stroke = Stroke {
            color: Color::WHITE,
            width: 2.0,
            cap: StrokeCap::Round,
            dash: Some(linegraph_core::Dash { intervals: vec![4.0], phase: 0.0 }),
        };
        let paint = stroke_paint(&stroke);
        assert!(paint.path_effect().is_none());
        assert_eq!(paint.stroke_width(), 2.0);
    }

    #[test]
    fn odd_dash_pattern_drops_last_interval() {
        let stroke = Stroke {
            color: Color::WHITE,
            width: 1.0,
            cap: StrokeCap::Butt,
            dash: Some(linegraph_core::Dash { intervals: vec![10.0, 15.0, 20.0], phase: 0.0 }),
        };
        assert!(stroke_paint(&stroke).path_effect().is_some());
    }
}
