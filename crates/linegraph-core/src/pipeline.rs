// File: crates/linegraph-core/src/pipeline.rs
// Summary: One redraw: scale, map, hit-test, and emit primitives in a fixed order.
// Notes:
// - Order: grid, then per line (area, segment k→k+1 then marker k, max/min labels), masking rects,
//   selection overlay. Backends paint the list front to back.
// - The pipeline is pure apart from the returned `ViewState`; callbacks are fired by the controller.

use tracing::debug;

use crate::axis::{compute_scale, AxisKind};
use crate::config::{Line, LinePlot};
use crate::error::{ChartError, ChartResult};
use crate::extrema::{find_extrema, label_x};
use crate::geometry::{RectF32, ScreenPoint};
use crate::render::{Color, DrawList, Primitive};
use crate::scale::{compute_max_scroll_offset, CoordinateMapper};
use crate::selection::{locate, DragLock, DragLocks, PlottedLine};
use crate::text::TextMeasure;
use crate::types::{DataPoint, Size};
use crate::view::ViewState;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub size: Size,
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: Size::default(),
            background: Color::rgb(18, 18, 20), // near-black
        }
    }
}

/// What the user is pointing at after a redraw while dragging.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSnapshot {
    /// Pointer x.
    pub drag_x: f32,
    /// Screen x of the first lock, where the guide line is drawn.
    pub snapped_x: f32,
    pub points: Vec<DataPoint>,
}

#[derive(Clone, Debug)]
pub struct Frame {
    pub list: DrawList,
    pub view: ViewState,
    pub locks: DragLocks,
    pub selection: Option<SelectionSnapshot>,
}

/// Build the draw list for `config` at `opts.size`, starting from `view`.
pub fn render_frame(
    config: &LinePlot,
    opts: &RenderOptions,
    mut view: ViewState,
    measure: &dyn TextMeasure,
) -> ChartResult<Frame> {
    config.validate()?;
    opts.size.validate()?;
    let size = opts.size;
    let padding = &config.padding;
    if padding.top + padding.bottom >= size.height {
        return Err(ChartError::InvalidConfig(format!(
            "vertical padding {} + {} leaves no plot height in a {} px viewport",
            padding.top, padding.bottom, size.height
        )));
    }

    let x_scale = compute_scale(config.all_points(), &config.x_axis, AxisKind::X)?;
    let y_scale = compute_scale(config.all_points(), &config.y_axis, AxisKind::Y)?;
    let unscrolled = CoordinateMapper::new(&x_scale, &y_scale, &config.x_axis, &config.y_axis, size, padding, 0.0);
    let max_scroll = compute_max_scroll_offset(unscrolled.content_width(), size.width);
    let offset = view.resolve_offset(max_scroll, size.width);
    let mapper = unscrolled.with_offset(offset);

    let screen: Vec<Vec<ScreenPoint>> = config
        .lines
        .iter()
        .map(|line| line.points.iter().map(|&p| mapper.to_screen(p)).collect())
        .collect();

    let locks = if view.is_dragging {
        let plotted: Vec<PlottedLine<'_>> = config
            .lines
            .iter()
            .zip(&screen)
            .map(|(line, screen)| PlottedLine { points: &line.points, screen })
            .collect();
        locate(view.drag_x, &plotted, mapper.pixels_per_x_unit())
    } else {
        DragLocks::default()
    };

    let visible_band = RectF32::from_ltrb(0.0, 0.0, size.width - padding.right, size.height);
    let visible = |x: f32| visible_band.contains_x(x);
    let mut list = DrawList::new();

    if let Some(grid) = &config.grid {
        grid.draw(&mut list, mapper.grid_region(), mapper.grid_x_step());
    }

    for (i, (line, pts)) in config.lines.iter().zip(&screen).enumerate() {
        let lock = locks.get(i);
        let alpha = segment_alpha(line, view.is_dragging, &locks, lock, &visible);
        draw_line(&mut list, line, pts, mapper.bottom(), alpha, lock);

        if !view.is_dragging {
            if let Some(label) = &line.max_min_label {
                let ext = find_extrema(&line.points)?;
                let gap = padding.horizontal_extra;

                let (max_p, max_s) = (line.points[ext.max_index], pts[ext.max_index]);
                let text = label.format(max_p.y);
                let w = measure.measure_width(&text, label.text_size);
                let x = label_x(w, size.width, max_s.x - label.max_label_xy.0, gap);
                label.draw(&mut list, text, x, max_s.y - label.max_label_xy.1);

                let (min_p, min_s) = (line.points[ext.min_index], pts[ext.min_index]);
                let text = label.format(min_p.y);
                let w = measure.measure_width(&text, label.text_size);
                let x = label_x(w, size.width, min_s.x - label.min_label_xy.0, gap);
                label.draw(&mut list, text, x, min_s.y + label.min_label_xy.1);
            }
        }
    }

    // left column and right padding strip
    list.push(Primitive::Rect { rect: RectF32::from_ltwh(0.0, 0.0, 0.0, size.height), color: opts.background });
    list.push(Primitive::Rect {
        rect: RectF32::from_ltwh(size.width - padding.right, 0.0, padding.right, size.height),
        color: opts.background,
    });

    let mut selection = None;
    if view.is_dragging {
        if let Some(first) = locks.first() {
            let x = first.screen.x;
            if visible(x) {
                if let Some(guide) = &config.selection.highlight {
                    guide.draw(&mut list, ScreenPoint::new(x, mapper.bottom()), ScreenPoint::new(x, 0.0), 1.0);
                }
            }
            selection = Some(SelectionSnapshot { drag_x: view.drag_x, snapped_x: x, points: locks.points() });
        }
        for lock in locks.iter().filter(|l| visible(l.screen.x)) {
            let line = &config.lines[lock.line];
            if let Some(conn) = &line.connection {
                let pts = &screen[lock.line];
                for k in 1..=lock.index {
                    conn.draw(&mut list, pts[k - 1], pts[k], 1.0);
                }
            }
            if let Some(highlight) = &line.highlight {
                highlight.draw(&mut list, lock.screen);
            }
        }
    }

    debug!(
        lines = config.lines.len(),
        primitives = list.len(),
        offset,
        max_scroll,
        locks = locks.len(),
        "frame built"
    );
    Ok(Frame { list, view, locks, selection })
}

/// Alpha of the regular segment pass; the overlay repaints locked prefixes at full alpha.
fn segment_alpha(
    line: &Line,
    dragging: bool,
    locks: &DragLocks,
    lock: Option<&DragLock>,
    visible: &impl Fn(f32) -> bool,
) -> f32 {
    if !dragging || locks.is_empty() {
        return 1.0;
    }
    match lock {
        Some(l) if !visible(l.screen.x) => 1.0,
        _ => line.shadow_alpha,
    }
}

fn draw_line(
    list: &mut DrawList,
    line: &Line,
    pts: &[ScreenPoint],
    bottom: f32,
    alpha: f32,
    lock: Option<&DragLock>,
) {
    if let (Some(area), Some(first), Some(last)) = (&line.area_under_line, pts.first(), pts.last()) {
        let mut outline = Vec::with_capacity(pts.len() + 3);
        outline.push(ScreenPoint::new(first.x, bottom));
        outline.extend_from_slice(pts);
        outline.push(ScreenPoint::new(last.x, bottom));
        outline.push(ScreenPoint::new(first.x, bottom));
        area.draw(list, outline);
    }

    // each marker sits above both of its segments
    for (k, &p) in pts.iter().enumerate() {
        if let (Some(conn), Some(&next)) = (&line.connection, pts.get(k + 1)) {
            conn.draw(list, p, next, alpha);
        }
        // the locked point gets a highlight in the overlay instead
        if lock.is_some_and(|l| l.index == k) {
            continue;
        }
        if let Some(marker) = &line.intersection {
            marker.draw(list, p);
        }
    }
}
