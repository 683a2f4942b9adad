// File: crates/trend-core/src/axis.rs
// Summary: Tick generation for the value (Y) and sample-index (X) axes.

use crate::error::ChartError;
use crate::format::{format_date, format_number};
use crate::grid::linspace;
use crate::scale::{Point, ValueRange, ValueScale};

/// Number of Y ticks (four intervals).
pub const Y_TICK_COUNT: usize = 5;
/// Target number of X intervals; the step is `n / X_TICK_INTERVALS`.
pub const X_TICK_INTERVALS: usize = 8;

/// A labeled axis mark. `position` is a y pixel for value ticks and an x pixel for date ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Five ticks from `range.min` to `range.min + span`, labels abbreviated.
pub fn y_ticks(range: &ValueRange, scale: &ValueScale) -> Vec<Tick> {
    let lo = range.min as f64;
    linspace(lo, lo + range.span(), Y_TICK_COUNT)
        .into_iter()
        .map(|v| Tick { position: scale.to_px(v), label: format_number(v.round() as i64) })
        .collect()
}

/// Indices of labeled samples: every `step`-th one, plus the last one if the step skips it.
pub fn x_tick_indices(count: usize) -> Vec<usize> {
    if count == 0 { return Vec::new(); }
    let step = (count / X_TICK_INTERVALS).max(1);
    let mut idx: Vec<usize> = (0..count).step_by(step).collect();
    let last = count - 1;
    if last % step != 0 {
        idx.push(last);
    }
    idx
}

/// Date-labeled ticks under the chosen points. Fails on the first unparseable date.
pub fn x_ticks(points: &[Point]) -> Result<Vec<Tick>, ChartError> {
    x_tick_indices(points.len())
        .into_iter()
        .map(|i| -> Result<Tick, ChartError> {
            let p = &points[i];
            Ok(Tick { position: p.x, label: format_date(&p.date)? })
        })
        .collect()
}
