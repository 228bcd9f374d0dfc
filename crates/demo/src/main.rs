// File: crates/demo/src/main.rs
// Summary: Demo loads an x,y CSV (or generates a wave), replays a scripted drag through the event queue,
// logs the selection callbacks and writes idle/dragging PNG frames.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use linegraph_core::{
    AreaUnderLine, DataPoint, Line, LineGraph, LinePlot, MaxMinLabel, PointerEvent, RenderOptions, SelectionListener,
};
use linegraph_render_skia::{render_to_png, TextShaper};

/// x values at or above this are read as unix seconds.
const EPOCH_SECS_THRESHOLD: f64 = 1e9;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,linegraph_core=debug")))
        .init();

    let mut args = std::env::args().skip(1);
    let csv_arg = args.next();
    let config_arg = args.next();

    let points = match csv_arg.as_deref() {
        Some(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            info!(path = %path.display(), used_alt, "loading series");
            load_xy_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            warn!("no CSV given, using a generated series");
            generated_series(120)
        }
    };
    if points.is_empty() {
        anyhow::bail!("no rows loaded, check headers/delimiter.");
    }
    info!(rows = points.len(), "series ready");

    let plot = build_plot(points, config_arg.as_deref())?;
    let x_is_time = plot.lines[0].points.first().is_some_and(|p| p.x >= EPOCH_SECS_THRESHOLD);
    let mut graph = LineGraph::new(plot).context("invalid plot")?;
    let mut listener = Readout { x_is_time, selections: 0 };

    let opts = RenderOptions::default();
    let shaper = TextShaper::new();
    let out_dir = PathBuf::from("target/out");

    let idle = graph.redraw(&opts, &shaper, &mut listener)?;
    let out = out_dir.join("linegraph_idle.png");
    render_to_png(&idle.list, &opts, &out)?;
    info!(path = %out.display(), offset = idle.view.offset, "wrote idle frame");

    // Scripted drag: press, confirm within the detection window, sweep right, release.
    let w = opts.size.width;
    let mut queue = VecDeque::new();
    queue.push_back(PointerEvent::Down { x: w * 0.25, y: 100.0, at: Duration::from_millis(0) });
    queue.push_back(PointerEvent::Move { x: w * 0.26, y: 100.0, at: Duration::from_millis(16) });
    graph.drain_events(&mut queue, &mut listener);
    graph.redraw(&opts, &shaper, &mut listener)?;

    for (i, frac) in [0.4_f32, 0.55, 0.7].into_iter().enumerate() {
        let at = Duration::from_millis(32 + 16 * i as u64);
        queue.push_back(PointerEvent::Move { x: w * frac, y: 100.0, at });
        graph.drain_events(&mut queue, &mut listener);
        let frame = graph.redraw(&opts, &shaper, &mut listener)?;
        if i == 1 {
            let out = out_dir.join("linegraph_drag.png");
            render_to_png(&frame.list, &opts, &out)?;
            info!(path = %out.display(), locks = frame.locks.len(), "wrote dragging frame");
        }
    }

    queue.push_back(PointerEvent::Up { x: w * 0.7, y: 100.0, at: Duration::from_millis(120) });
    graph.drain_events(&mut queue, &mut listener);
    graph.redraw(&opts, &shaper, &mut listener)?;
    info!(selections = listener.selections, "session done");
    Ok(())
}

/// Logs selection callbacks; x is shown as a UTC time when the series is time-based.
struct Readout {
    x_is_time: bool,
    selections: usize,
}

impl Readout {
    fn label(&self, x: f64) -> String {
        if !self.x_is_time {
            return format!("#{x}");
        }
        DateTime::<Utc>::from_timestamp(x as i64, 0)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| format!("{x}"))
    }
}

impl SelectionListener for Readout {
    fn on_selection_start(&mut self) {
        info!("selection start");
    }

    fn on_selection_end(&mut self) {
        info!("selection end");
    }

    fn on_selection(&mut self, x: f32, points: &[DataPoint]) {
        self.selections += 1;
        for p in points {
            info!(pointer_x = x, at = %self.label(p.x), value = p.y, "selected");
        }
    }
}

/// Apply the CSV points to the styles of an optional JSON config.
fn build_plot(points: Vec<DataPoint>, config_path: Option<&str>) -> Result<LinePlot> {
    let Some(path) = config_path else {
        let line = Line::new(points)
            .with_area(Some(AreaUnderLine::default()))
            .with_max_min_label(Some(MaxMinLabel::default()));
        return Ok(LinePlot::new(vec![line]));
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    // The config may ship without points; only styles are taken from it.
    let mut plot: LinePlot = serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?;
    match plot.lines.first_mut() {
        Some(line) => line.points = points,
        None => plot.lines.push(Line::new(points)),
    }
    plot.lines.retain(|l| !l.points.is_empty());
    Ok(plot)
}

fn generated_series(n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            DataPoint::new(x, 50.0 + (x * 0.15).sin() * 20.0 + (x * 0.05).cos() * 8.0)
        })
        .collect()
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load `x,y` rows. Recognised x headers are time-like; without one, rows are indexed.
fn load_xy_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(&["x", "time", "timestamp", "open_time", "date", "datetime"]);
    let i_y = idx(&["y", "value", "close", "c", "price"]).or(if headers.len() == 1 { Some(0) } else { None });
    let Some(i_y) = i_y else {
        anyhow::bail!("no y column among {headers:?}");
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let x = i_x.and_then(|ix| rec.get(ix)).and_then(parse_time_to_f64).unwrap_or(row as f64);
        match rec.get(i_y).and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(y) if y.is_finite() => out.push(DataPoint::new(x, y)),
            _ => warn!(row, "skipping row without a numeric y"),
        }
    }
    Ok(out)
}

fn parse_time_to_f64(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        if n > 10_i64.pow(12) {
            return Some(n as f64 / 1000.0);
        } // epoch ms -> sec
        return Some(n as f64);
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.timestamp() as f64);
    }
    s.parse::<f64>().ok()
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
