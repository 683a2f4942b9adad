// File: crates/trend-core/src/grid.rs
// Summary: Evenly spaced value helper for tick layout.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn five_steps_cover_both_ends() {
        assert_eq!(linspace(100.0, 150.0, 5), vec![100.0, 112.5, 125.0, 137.5, 150.0]);
    }
}
