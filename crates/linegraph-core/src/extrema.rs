// File: crates/linegraph-core/src/extrema.rs
// Summary: Max/min lookup for label placement.

use crate::error::{ChartError, ChartResult};
use crate::types::DataPoint;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extrema {
    pub max_index: usize,
    pub min_index: usize,
}

/// Index of the first point with the largest y and of the first with the smallest y.
pub fn find_extrema(points: &[DataPoint]) -> ChartResult<Extrema> {
    let first = points
        .first()
        .ok_or_else(|| ChartError::InvalidInput("cannot find extrema of an empty series".into()))?;
    let (mut max_index, mut min_index) = (0usize, 0usize);
    let (mut max_y, mut min_y) = (first.y, first.y);
    for (i, p) in points.iter().enumerate().skip(1) {
        // strict comparisons keep the first occurrence on ties
        if p.y > max_y {
            max_y = p.y;
            max_index = i;
        }
        if p.y < min_y {
            min_y = p.y;
            min_index = i;
        }
    }
    Ok(Extrema { max_index, min_index })
}

/// Left x of a label centred on `item_x + horizontal_gap`, pushed back inside `[0, surface_width]`.
pub fn label_x(text_width: f32, surface_width: f32, item_x: f32, horizontal_gap: f32) -> f32 {
    let center = item_x + horizontal_gap;
    let half = text_width / 2.0;
    if center + half > surface_width {
        surface_width - text_width
    } else if center - half < 0.0 {
        0.0
    } else {
        center - half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let pts: Vec<DataPoint> = [(0.0, 1.0), (1.0, 5.0), (2.0, 5.0), (3.0, 0.0)]
            .into_iter()
            .map(DataPoint::from)
            .collect();
        let e = find_extrema(&pts).unwrap();
        assert_eq!(e, Extrema { max_index: 1, min_index: 3 });
    }

    #[test]
    fn single_point_is_both() {
        let e = find_extrema(&[DataPoint::new(4.0, 2.0)]).unwrap();
        assert_eq!((e.max_index, e.min_index), (0, 0));
    }

    #[test]
    fn empty_series_fails() {
        assert!(matches!(find_extrema(&[]), Err(ChartError::InvalidInput(_))));
    }

    #[test]
    fn label_is_clamped_to_surface() {
        assert_eq!(label_x(20.0, 100.0, 50.0, 0.0), 40.0);
        assert_eq!(label_x(20.0, 100.0, 95.0, 0.0), 80.0);
        assert_eq!(label_x(20.0, 100.0, 2.0, 0.0), 0.0);
        assert_eq!(label_x(20.0, 100.0, 40.0, 10.0), 40.0);
    }
}
