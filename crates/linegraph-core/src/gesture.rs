// File: crates/linegraph-core/src/gesture.rs
// Summary: Drag/zoom disambiguation as an explicit state machine over pointer events.
// Notes:
// - A drag must be confirmed by a move within the detection timeout after pointer-down;
//   a touch that starts moving later is treated as a non-drag until it is released.
// - Timestamps are durations since any fixed epoch chosen by the host.

use std::time::Duration;

use tracing::trace;

use crate::config::SelectionConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32, at: Duration },
    Move { x: f32, y: f32, at: Duration },
    Up { x: f32, y: f32, at: Duration },
    /// The host cancelled the pointer stream (e.g. another view took it).
    Cancel,
    /// Two-finger scale gesture; `scale` is relative to the previous pinch event.
    Pinch { scale: f32, at: Duration },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureState {
    Idle,
    Pending { down_x: f32, down_at: Duration },
    Dragging,
    Zooming,
    /// Pointer is down but the drag window has passed; waits for release.
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutput {
    DragStart { x: f32 },
    DragMove { x: f32 },
    DragEnd,
    Zoom { scale: f32 },
}

#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    state: GestureState,
    drag_allowed: bool,
    zoom_allowed: bool,
    detection_timeout: Duration,
}

impl GestureRecognizer {
    pub fn new(selection: &SelectionConfig, zoom_allowed: bool) -> Self {
        Self {
            state: GestureState::Idle,
            drag_allowed: selection.enabled,
            zoom_allowed,
            detection_timeout: selection.detection_timeout(),
        }
    }

    /// Pick up new settings; an in-flight gesture keeps running.
    pub fn configure(&mut self, selection: &SelectionConfig, zoom_allowed: bool) {
        self.drag_allowed = selection.enabled;
        self.zoom_allowed = zoom_allowed;
        self.detection_timeout = selection.detection_timeout();
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging)
    }

    pub fn handle(&mut self, event: PointerEvent) -> Vec<GestureOutput> {
        let mut out = Vec::new();
        let next = match (self.state, event) {
            (GestureState::Dragging, PointerEvent::Move { x, .. }) => {
                out.push(GestureOutput::DragMove { x });
                GestureState::Dragging
            }
            (GestureState::Dragging, PointerEvent::Up { .. } | PointerEvent::Cancel) => {
                out.push(GestureOutput::DragEnd);
                GestureState::Idle
            }
            (GestureState::Dragging, PointerEvent::Pinch { scale, .. }) if self.zoom_allowed => {
                out.push(GestureOutput::DragEnd);
                out.push(GestureOutput::Zoom { scale });
                GestureState::Zooming
            }
            (GestureState::Dragging, _) => GestureState::Dragging,

            (GestureState::Pending { down_x, down_at }, PointerEvent::Move { x, at, .. }) => {
                let elapsed = at.saturating_sub(down_at);
                if self.drag_allowed && elapsed <= self.detection_timeout {
                    out.push(GestureOutput::DragStart { x: down_x });
                    out.push(GestureOutput::DragMove { x });
                    GestureState::Dragging
                } else {
                    GestureState::Rejected
                }
            }

            (_, PointerEvent::Pinch { scale, .. }) if self.zoom_allowed => {
                out.push(GestureOutput::Zoom { scale });
                GestureState::Zooming
            }
            (_, PointerEvent::Up { .. } | PointerEvent::Cancel) => GestureState::Idle,
            (GestureState::Idle | GestureState::Pending { .. }, PointerEvent::Down { x, at, .. }) => {
                GestureState::Pending { down_x: x, down_at: at }
            }
            (state, _) => state,
        };
        if next != self.state {
            trace!(from = ?self.state, to = ?next, "gesture transition");
        }
        self.state = next;
        out
    }
}
