// File: crates/trend-core/src/lib.rs
// Summary: Core library entry point; exports the download-trend layout and SVG rendering API.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod stats;
pub mod theme;
pub mod format;
pub mod svg;
pub mod error;

pub use chart::{render, render_empty, render_with, ChartLayout, RenderOptions};
pub use series::Sample;
pub use axis::Tick;
pub use scale::{Point, ValueRange};
pub use stats::Summary;
pub use theme::Theme;
pub use format::{format_date, format_number};
pub use error::ChartError;
