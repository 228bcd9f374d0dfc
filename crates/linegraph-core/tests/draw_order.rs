// File: crates/linegraph-core/tests/draw_order.rs
// Purpose: Pin the primitive order of idle and dragging frames.

use linegraph_core::{
    render_frame, ApproxTextMeasure, AreaUnderLine, Grid, Line, LinePlot, MaxMinLabel, Primitive, RenderOptions, Size,
    ViewState,
};

fn plot() -> LinePlot {
    let mut plot = LinePlot::new(vec![
        Line::from_xy([(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)])
            .with_area(Some(AreaUnderLine::default()))
            .with_max_min_label(Some(MaxMinLabel::default())),
        Line::from_xy([(0.0, 2.0), (1.0, 1.0), (2.0, 0.0)]),
    ]);
    plot.grid = Some(Grid { steps: 3, ..Grid::default() });
    plot
}

fn opts() -> RenderOptions {
    RenderOptions { size: Size::new(300.0, 200.0), ..RenderOptions::default() }
}

fn shape(list: &[Primitive]) -> String {
    list.iter()
        .map(|p| match p {
            Primitive::Line { .. } => 'L',
            Primitive::Path { .. } => 'P',
            Primitive::Circle { .. } => 'C',
            Primitive::Rect { .. } => 'R',
            Primitive::Text { .. } => 'T',
        })
        .collect()
}

#[test]
fn idle_frame_order() {
    let frame = render_frame(&plot(), &opts(), ViewState::new(), &ApproxTextMeasure::default()).unwrap();
    // grid, line A (area, segment then marker per point, labels), line B, masks
    assert_eq!(shape(frame.list.primitives()), "LLLPLCLCCTTLCLCCRR");
    assert_eq!(frame.list.texts().collect::<Vec<_>>(), vec!["$3", "$1"]);
}

#[test]
fn dragging_frame_order_and_alpha() {
    let config = plot();
    let measure = ApproxTextMeasure::default();
    let idle = render_frame(&config, &opts(), ViewState::new(), &measure).unwrap();
    let mut view = idle.view;
    view.begin_drag(145.0);
    let frame = render_frame(&config, &opts(), view, &measure).unwrap();

    // locked markers are skipped; overlay adds guide, full-alpha prefix and highlight per line
    assert_eq!(shape(frame.list.primitives()), "LLLPLCLCLCLCRRLLCLC");
    assert_eq!(frame.locks.len(), 2);

    let strokes: Vec<u8> = frame
        .list
        .iter()
        .filter_map(|p| match p {
            Primitive::Line { stroke, .. } if stroke.dash.is_none() && stroke.width == 2.0 => Some(stroke.color.a),
            _ => None,
        })
        .collect();
    // line A: 2 shadowed, line B: 2 shadowed, overlay: 1 + 1 at full alpha
    assert_eq!(strokes, vec![128, 128, 128, 128, 255, 255]);

    let sel = frame.selection.unwrap();
    assert_eq!(sel.drag_x, 145.0);
    assert_eq!(sel.points.len(), 2);
}

#[test]
fn off_screen_lock_keeps_full_alpha_and_no_guide() {
    let mut config = plot();
    config.padding.right = 200.0;
    let measure = ApproxTextMeasure::default();
    let idle = render_frame(&config, &opts(), ViewState::new(), &measure).unwrap();
    let mut view = idle.view;
    // pointer on the last point, which sits under the right padding strip
    let last_x = match idle.list.iter().filter(|p| matches!(p, Primitive::Circle { .. })).nth(2) {
        Some(Primitive::Circle { center, .. }) => center.x,
        _ => panic!("missing marker"),
    };
    assert!(last_x > 100.0);
    view.begin_drag(last_x);
    let frame = render_frame(&config, &opts(), view, &measure).unwrap();
    assert!(frame.list.iter().all(|p| match p {
        Primitive::Line { stroke, .. } => stroke.color.a == 255 || stroke.width == 1.0,
        _ => true,
    }));
    assert!(!frame.list.iter().any(|p| matches!(p, Primitive::Line { stroke, .. } if stroke.dash.is_some())));
    assert!(frame.selection.is_some());
}

#[test]
fn bare_line_still_reports_selection() {
    let bare = Line::from_xy([(0.0, 1.0), (1.0, 3.0), (2.0, 2.0)])
        .with_connection(None)
        .with_intersection(None)
        .with_highlight(None);
    let mut config = LinePlot::new(vec![bare]);
    config.grid = None;
    config.selection.highlight = None;
    let measure = ApproxTextMeasure::default();
    let idle = render_frame(&config, &opts(), ViewState::new(), &measure).unwrap();
    assert_eq!(shape(idle.list.primitives()), "RR");

    let mut view = idle.view;
    view.begin_drag(145.0);
    let frame = render_frame(&config, &opts(), view, &measure).unwrap();
    assert_eq!(shape(frame.list.primitives()), "RR");
    assert_eq!(frame.locks.len(), 1);
    let sel = frame.selection.unwrap();
    assert_eq!(sel.points, vec![linegraph_core::DataPoint::new(1.0, 3.0)]);
}
