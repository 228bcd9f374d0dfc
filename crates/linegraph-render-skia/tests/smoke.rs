// File: crates/linegraph-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use linegraph_core::{render_frame, Line, LinePlot, MaxMinLabel, RenderOptions, Size, ViewState};
use linegraph_render_skia::{render_to_png, render_to_png_bytes, TextShaper};

#[test]
fn render_smoke_png() {
    let plot = LinePlot::new(vec![Line::from_xy([(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)])
        .with_max_min_label(Some(MaxMinLabel::default()))]);
    let opts = RenderOptions::default();
    let shaper = TextShaper::new();
    let frame = render_frame(&plot, &opts, ViewState::new(), &shaper).expect("frame");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    render_to_png(&frame.list, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = render_to_png_bytes(&frame.list, &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (opts.size.width as u32, opts.size.height as u32));
}

#[test]
fn fractional_size_rounds_up() {
    let plot = LinePlot::new(vec![Line::from_xy([(0.0, 1.0), (1.0, 2.0)])]);
    let opts = RenderOptions { size: Size::new(120.5, 80.2), ..RenderOptions::default() };
    let frame = render_frame(&plot, &opts, ViewState::new(), &TextShaper::new()).expect("frame");
    let bytes = render_to_png_bytes(&frame.list, &opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode");
    assert_eq!((img.width(), img.height()), (121, 81));
}
