// File: crates/linegraph-core/src/selection.rs
// Summary: Drag-lock hit testing: the plotted point of each line under the pointer.

use crate::geometry::ScreenPoint;
use crate::types::DataPoint;

/// A line's points together with their mapped pixel positions.
#[derive(Clone, Copy, Debug)]
pub struct PlottedLine<'a> {
    pub points: &'a [DataPoint],
    pub screen: &'a [ScreenPoint],
}

/// The point of one line currently under the drag pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragLock {
    /// Declaration index of the line in the plot config.
    pub line: usize,
    /// Index of the locked point within the line.
    pub index: usize,
    pub point: DataPoint,
    pub screen: ScreenPoint,
}

/// At most one lock per line, ordered by line index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragLocks {
    locks: Vec<DragLock>,
}

impl DragLocks {
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn first(&self) -> Option<&DragLock> {
        self.locks.first()
    }

    pub fn get(&self, line: usize) -> Option<&DragLock> {
        self.locks.iter().find(|l| l.line == line)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DragLock> {
        self.locks.iter()
    }

    /// Locked data points in line declaration order.
    pub fn points(&self) -> Vec<DataPoint> {
        self.locks.iter().map(|l| l.point).collect()
    }

    pub fn clear(&mut self) {
        self.locks.clear();
    }
}

/// True when `drag_x` lies strictly within half an x step of `px`.
#[inline]
pub fn is_drag_locked(drag_x: f32, px: f32, x_offset: f32) -> bool {
    drag_x > px - x_offset / 2.0 && drag_x < px + x_offset / 2.0
}

/// Find the first point of every line whose hit window contains `drag_x`.
/// Lines with no hit are absent from the result.
pub fn locate(drag_x: f32, lines: &[PlottedLine<'_>], x_offset: f32) -> DragLocks {
    let locks = lines
        .iter()
        .enumerate()
        .filter_map(|(line, plotted)| {
            plotted
                .screen
                .iter()
                .zip(plotted.points)
                .position(|(s, _)| is_drag_locked(drag_x, s.x, x_offset))
                .map(|index| DragLock {
                    line,
                    index,
                    point: plotted.points[index],
                    screen: plotted.screen[index],
                })
        })
        .collect();
    DragLocks { locks }
}
