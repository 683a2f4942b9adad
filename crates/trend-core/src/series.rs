// File: crates/trend-core/src/series.rs
// Summary: Sample model for per-repository download counts.
// Notes:
// - A series is just an ordered `&[Sample]` owned by the caller. The engine reads it in the
//   order given and never sorts it.

use serde::{Deserialize, Serialize};

/// One observation: the download total recorded on `date`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// Calendar date, `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: String,
    pub total: u64,
}

impl Sample {
    pub fn new(date: impl Into<String>, total: u64) -> Self {
        Self { date: date.into(), total }
    }
}
