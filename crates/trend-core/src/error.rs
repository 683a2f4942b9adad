// File: crates/trend-core/src/error.rs
// Summary: Errors surfaced by the rendering engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A sample date could not be parsed as `YYYY-MM-DD` or RFC 3339.
    #[error("invalid sample date '{date}': {source}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
}
