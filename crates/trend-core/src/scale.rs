// File: crates/trend-core/src/scale.rs
// Summary: Index (X) and value (Y) scales that project samples into the plot rectangle.

use crate::geometry::PlotRect;
use crate::series::Sample;

/// Value bounds of a non-empty series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueRange {
    pub min: u64,
    pub max: u64,
}

impl ValueRange {
    /// `max` is floored to 1; returns `None` for an empty series.
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        let min = samples.iter().map(|s| s.total).min()?;
        let max = samples.iter().map(|s| s.total).max()?.max(1);
        Some(Self { min, max })
    }

    /// `max - min`, floored to 1 so a flat series never divides by zero.
    pub fn span(&self) -> f64 {
        self.max.saturating_sub(self.min).max(1) as f64
    }
}

/// Horizontal scale spacing samples uniformly by index, not by date.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f64,
    pub width_px: f64,
    pub count: usize,
}

impl IndexScale {
    pub fn new(rect: &PlotRect, count: usize) -> Self {
        Self { left_px: rect.left, width_px: rect.width, count }
    }
    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        let denom = self.count.saturating_sub(1).max(1) as f64;
        self.left_px + (index as f64 / denom) * self.width_px
    }
}

/// Vertical linear scale; higher values land closer to the top.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f64,
    pub height_px: f64,
    pub vmin: f64,
    pub span: f64,
}

impl ValueScale {
    pub fn new_linear(rect: &PlotRect, range: &ValueRange) -> Self {
        Self { top_px: rect.top, height_px: rect.height, vmin: range.min as f64, span: range.span() }
    }
    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        self.top_px + self.height_px - ((value - self.vmin) / self.span) * self.height_px
    }
}

/// A sample projected into plot coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub value: u64,
    pub date: String,
}

/// One point per sample, in sample order.
pub fn project_points(samples: &[Sample], xs: &IndexScale, ys: &ValueScale) -> Vec<Point> {
    samples
        .iter()
        .enumerate()
        .map(|(i, s)| Point {
            x: xs.to_px(i),
            y: ys.to_px(s.total as f64),
            value: s.total,
            date: s.date.clone(),
        })
        .collect()
}
