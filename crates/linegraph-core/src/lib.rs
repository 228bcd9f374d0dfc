// File: crates/linegraph-core/src/lib.rs
// Summary: Core library entry point; exports the public API for line plots, selection, and draw lists.

pub mod error;
pub mod types;
pub mod geometry;
pub mod axis;
pub mod scale;
pub mod extrema;
pub mod selection;
pub mod render;
pub mod text;
pub mod style;
pub mod grid;
pub mod config;
pub mod view;
pub mod gesture;
pub mod pipeline;
pub mod chart;

pub use error::{ChartError, ChartResult};
pub use types::{DataPoint, Padding, Size, GLOBAL_X_SCALE, INITIAL_OFFSET_DIVISOR};
pub use geometry::{RectF32, ScreenPoint};
pub use axis::{compute_scale, AxisConfig, AxisKind, ScaleResult};
pub use scale::{compute_max_scroll_offset, initial_offset, CoordinateMapper};
pub use extrema::{find_extrema, Extrema};
pub use selection::{is_drag_locked, locate, DragLock, DragLocks, PlottedLine};
pub use render::{Color, Dash, DrawList, Primitive, Renderer, Stroke, StrokeCap};
pub use text::{ApproxTextMeasure, TextMeasure};
pub use style::{AreaUnderLine, Connection, Highlight, Intersection, MaxMinLabel};
pub use grid::Grid;
pub use config::{Line, LinePlot, SelectionConfig};
pub use view::ViewState;
pub use gesture::{GestureOutput, GestureRecognizer, GestureState, PointerEvent};
pub use pipeline::{render_frame, Frame, RenderOptions, SelectionSnapshot};
pub use chart::{LineGraph, NoopListener, SelectionListener};
