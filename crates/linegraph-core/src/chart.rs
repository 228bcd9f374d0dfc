// File: crates/linegraph-core/src/chart.rs
// Summary: LineGraph controller: owns config, view state and the gesture recognizer; routes events and redraws.

use std::collections::VecDeque;

use tracing::debug;

use crate::config::LinePlot;
use crate::error::ChartResult;
use crate::gesture::{GestureOutput, GestureRecognizer, PointerEvent};
use crate::pipeline::{render_frame, Frame, RenderOptions};
use crate::text::TextMeasure;
use crate::types::DataPoint;
use crate::view::ViewState;

/// Receives selection callbacks. Every method defaults to a no-op.
pub trait SelectionListener {
    fn on_selection_start(&mut self) {}
    fn on_selection_end(&mut self) {}
    /// `x` is the pointer x; `points` holds one locked point per line, in line order.
    fn on_selection(&mut self, _x: f32, _points: &[DataPoint]) {}
}

/// Listener that ignores every callback.
pub struct NoopListener;

impl SelectionListener for NoopListener {}

pub struct LineGraph {
    config: LinePlot,
    view: ViewState,
    recognizer: GestureRecognizer,
    /// Set by a drag move, consumed by the next redraw.
    selection_dirty: bool,
}

impl LineGraph {
    pub fn new(config: LinePlot) -> ChartResult<Self> {
        config.validate()?;
        let recognizer = GestureRecognizer::new(&config.selection, config.zoom_allowed);
        Ok(Self { config, view: ViewState::new(), recognizer, selection_dirty: false })
    }

    pub fn config(&self) -> &LinePlot {
        &self.config
    }

    /// Replace the whole configuration; the next redraw recomputes everything.
    pub fn set_config(&mut self, config: LinePlot) -> ChartResult<()> {
        config.validate()?;
        self.recognizer.configure(&config.selection, config.zoom_allowed);
        debug!(lines = config.lines.len(), "plot config replaced");
        self.config = config;
        Ok(())
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_dragging(&self) -> bool {
        self.view.is_dragging
    }

    pub fn pan_by(&mut self, dx: f32) {
        self.view.pan_by(dx);
    }

    pub fn follow_latest(&mut self) {
        self.view.follow_latest();
    }

    pub fn handle_event(&mut self, event: PointerEvent, listener: &mut dyn SelectionListener) {
        for output in self.recognizer.handle(event) {
            match output {
                GestureOutput::DragStart { x } => {
                    debug!(x, "selection started");
                    self.view.begin_drag(x);
                    listener.on_selection_start();
                }
                GestureOutput::DragMove { x } => {
                    self.view.drag_x = x;
                    self.selection_dirty = true;
                }
                GestureOutput::DragEnd => {
                    debug!("selection ended");
                    self.view.reset_drag();
                    self.selection_dirty = false;
                    listener.on_selection_end();
                }
                GestureOutput::Zoom { scale } => {
                    // scale is never applied
                    debug!(scale, "zoom gesture ignored");
                }
            }
        }
    }

    /// Process every queued event in order.
    pub fn drain_events(&mut self, queue: &mut VecDeque<PointerEvent>, listener: &mut dyn SelectionListener) {
        while let Some(event) = queue.pop_front() {
            self.handle_event(event, listener);
        }
    }

    /// Build a frame; fires `on_selection` when a drag moved since the last redraw and something is locked.
    pub fn redraw(
        &mut self,
        opts: &RenderOptions,
        measure: &dyn TextMeasure,
        listener: &mut dyn SelectionListener,
    ) -> ChartResult<Frame> {
        let frame = render_frame(&self.config, opts, self.view, measure)?;
        self.view = frame.view;
        if std::mem::take(&mut self.selection_dirty) {
            if let Some(sel) = &frame.selection {
                listener.on_selection(sel.drag_x, &sel.points);
            }
        }
        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::config::Line;
    use crate::text::ApproxTextMeasure;
    use crate::types::Size;

    #[derive(Default)]
    struct Recorder {
        starts: usize,
        ends: usize,
        selections: Vec<(f32, Vec<DataPoint>)>,
    }

    impl SelectionListener for Recorder {
        fn on_selection_start(&mut self) {
            self.starts += 1;
        }
        fn on_selection_end(&mut self) {
            self.ends += 1;
        }
        fn on_selection(&mut self, x: f32, points: &[DataPoint]) {
            self.selections.push((x, points.to_vec()));
        }
    }

    fn graph() -> LineGraph {
        LineGraph::new(LinePlot::new(vec![Line::from_xy((0..10).map(|i| (i as f64, (i * i) as f64)))])).unwrap()
    }

    fn opts() -> RenderOptions {
        RenderOptions { size: Size::new(300.0, 200.0), ..RenderOptions::default() }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn start_then_end_without_redraw_never_selects() {
        let mut g = graph();
        let mut rec = Recorder::default();
        let mut queue = VecDeque::from(vec![
            PointerEvent::Down { x: 100.0, y: 50.0, at: ms(0) },
            PointerEvent::Move { x: 101.0, y: 50.0, at: ms(10) },
            PointerEvent::Up { x: 101.0, y: 50.0, at: ms(20) },
        ]);
        g.drain_events(&mut queue, &mut rec);
        g.redraw(&opts(), &ApproxTextMeasure::default(), &mut rec).unwrap();
        assert_eq!((rec.starts, rec.ends), (1, 1));
        assert!(rec.selections.is_empty());
        assert!(!g.is_dragging());
        assert_eq!(g.view().drag_x, 0.0);
    }

    #[test]
    fn selection_fires_once_per_move() {
        let mut g = graph();
        let mut rec = Recorder::default();
        let measure = ApproxTextMeasure::default();
        g.redraw(&opts(), &measure, &mut rec).unwrap();
        g.handle_event(PointerEvent::Down { x: 150.0, y: 50.0, at: ms(0) }, &mut rec);
        g.handle_event(PointerEvent::Move { x: 150.0, y: 50.0, at: ms(5) }, &mut rec);
        let frame = g.redraw(&opts(), &measure, &mut rec).unwrap();
        assert!(frame.selection.is_some());
        g.redraw(&opts(), &measure, &mut rec).unwrap();
        assert_eq!(rec.selections.len(), 1);
        assert_eq!(rec.selections[0].0, 150.0);
        assert_eq!(rec.selections[0].1.len(), 1);
    }

    #[test]
    fn zoom_leaves_view_untouched() {
        let mut config = LinePlot::new(vec![Line::from_xy([(0.0, 1.0), (1.0, 2.0)])]);
        config.zoom_allowed = true;
        let mut g = LineGraph::new(config).unwrap();
        let before = *g.view();
        g.handle_event(PointerEvent::Pinch { scale: 3.0, at: ms(0) }, &mut NoopListener);
        assert_eq!(*g.view(), before);
    }

    #[test]
    fn invalid_config_is_refused() {
        let mut g = graph();
        assert!(g.set_config(LinePlot::default()).is_err());
        assert_eq!(g.config().lines.len(), 1);
    }
}
