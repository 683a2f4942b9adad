// File: crates/trend-core/src/stats.rs
// Summary: Latest total and change against the previous sample.

use crate::format::{format_number, sign_prefix};
use crate::series::Sample;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub current: u64,
    /// Second-to-last total, or `current` for a single-sample series.
    pub previous: u64,
    pub change: i64,
    /// Percent change rounded to one decimal; `None` when `previous` is zero.
    pub change_percent: Option<f64>,
}

impl Summary {
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        let current = samples.last()?.total;
        let previous = match samples.len() {
            0 | 1 => current,
            n => samples[n - 2].total,
        };
        let change = i64::try_from(i128::from(current) - i128::from(previous))
            .unwrap_or(if current >= previous { i64::MAX } else { i64::MIN });
        let change_percent = (previous > 0)
            .then(|| (change as f64 / previous as f64 * 100.0 * 10.0).round() / 10.0);
        Some(Self { current, previous, change, change_percent })
    }

    /// Zero counts as positive, so an unchanged series shows `+0`.
    pub fn is_positive(&self) -> bool {
        self.change >= 0
    }

    /// `-13.3`, or a bare `0` when there is no previous total to compare against.
    pub fn percent_label(&self) -> String {
        match self.change_percent {
            Some(p) => format!("{:.1}", p),
            None => "0".to_string(),
        }
    }

    /// e.g. `+1.5K (+12.0%)` or `-20 (-13.3%)`.
    pub fn change_label(&self) -> String {
        let sign = sign_prefix(self.is_positive());
        format!("{sign}{} ({sign}{}%)", format_number(self.change), self.percent_label())
    }
}
