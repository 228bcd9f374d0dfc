// File: crates/linegraph-core/src/view.rs
// First-class view state: pan offset, scroll bounds, and the drag pointer, carried between redraws.

use crate::geometry::clamp;
use crate::scale::initial_offset;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Horizontal scroll displacement applied to every plotted x.
    pub offset: f32,
    /// Upper bound of `offset`, recomputed on every redraw.
    pub max_scroll_offset: f32,
    /// Pointer x while dragging.
    pub drag_x: f32,
    pub is_dragging: bool,
    /// When set, every redraw re-seeds `offset` so the latest data stays in view.
    pub follow_latest: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self { offset: 0.0, max_scroll_offset: 0.0, drag_x: 0.0, is_dragging: false, follow_latest: true }
    }

    /// Resolve the offset for this redraw given the freshly computed scroll bound.
    pub fn resolve_offset(&mut self, max_scroll_offset: f32, viewport_width: f32) -> f32 {
        self.max_scroll_offset = max_scroll_offset;
        self.offset = if self.follow_latest {
            initial_offset(max_scroll_offset, viewport_width)
        } else {
            clamp(self.offset, 0.0, max_scroll_offset)
        };
        self.offset
    }

    /// Scroll by `dx` pixels (positive reveals later data); stops following the latest data.
    pub fn pan_by(&mut self, dx: f32) {
        self.follow_latest = false;
        self.offset = clamp(self.offset + dx, 0.0, self.max_scroll_offset);
    }

    pub fn set_offset(&mut self, offset: f32) {
        self.follow_latest = false;
        self.offset = clamp(offset, 0.0, self.max_scroll_offset);
    }

    pub fn follow_latest(&mut self) {
        self.follow_latest = true;
    }

    pub fn begin_drag(&mut self, x: f32) {
        self.is_dragging = true;
        self.drag_x = x;
    }

    pub fn reset_drag(&mut self) {
        self.is_dragging = false;
        self.drag_x = 0.0;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn following_seeds_biased_offset() {
        let mut v = ViewState::new();
        let off = v.resolve_offset(200.0, 540.0);
        assert!((off - 190.0).abs() < 1e-5);
        assert_eq!(v.max_scroll_offset, 200.0);
    }

    #[test]
    fn manual_pan_is_clamped() {
        let mut v = ViewState::new();
        v.resolve_offset(100.0, 540.0);
        v.pan_by(500.0);
        assert_eq!(v.offset, 100.0);
        v.pan_by(-1000.0);
        assert_eq!(v.offset, 0.0);
        assert!(!v.follow_latest);
        // bound shrinks on the next redraw
        v.set_offset(80.0);
        assert_eq!(v.resolve_offset(50.0, 540.0), 50.0);
    }

    #[test]
    fn reset_drag_clears_pointer() {
        let mut v = ViewState::new();
        v.begin_drag(42.0);
        assert!(v.is_dragging);
        v.reset_drag();
        assert!(!v.is_dragging);
        assert_eq!(v.drag_x, 0.0);
    }
}
