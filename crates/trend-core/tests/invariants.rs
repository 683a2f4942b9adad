// File: crates/trend-core/tests/invariants.rs
// Purpose: Structural properties of rendered documents across series shapes.

use trend_core::{render, render_empty, ChartLayout, RenderOptions, Sample};

fn daily(totals: &[u64]) -> Vec<Sample> {
    totals
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let d = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(i as i64);
            Sample::new(d.format("%Y-%m-%d").to_string(), t)
        })
        .collect()
}

fn attr_of<'a>(svg: &'a str, marker: &str, attr: &str) -> &'a str {
    let line = svg.lines().find(|l| l.contains(marker)).expect("element present");
    let key = format!(" {attr}=\"");
    let start = line.find(&key).expect("attribute present") + key.len();
    let end = start + line[start..].find('"').unwrap();
    &line[start..end]
}

#[test]
fn markers_and_segments_match_sample_count() {
    for n in [1usize, 2, 3, 8, 9, 17, 50, 365] {
        let totals: Vec<u64> = (0..n as u64).map(|i| i * 37 % 101 + i * 3).collect();
        let svg = render("o", "r", &daily(&totals)).unwrap();
        assert_eq!(svg.matches("<circle ").count(), n, "markers for n={n}");
        let d = attr_of(&svg, "class=\"trend-line\"", "d");
        assert_eq!(d.matches('M').count(), 1);
        assert_eq!(d.matches('L').count(), n - 1, "segments for n={n}");
    }
}

#[test]
fn empty_series_yields_placeholder() {
    for (owner, repo) in [("octo", "widgets"), ("a<b", "c&d"), ("", "")] {
        let svg = render(owner, repo, &[]).unwrap();
        assert_eq!(svg, render_empty(&RenderOptions::default(), owner, repo));
        assert!(svg.contains("No download data yet"));
        assert!(!svg.contains("<path"));
        assert!(!svg.contains("<circle"));
    }
    let svg = render("a<b", "c&d", &[]).unwrap();
    assert!(svg.contains("a&lt;b/c&amp;d"));
}

#[test]
fn single_sample_sits_on_left_edge_without_change() {
    let layout = ChartLayout::compute(&RenderOptions::default(), &daily(&[42])).unwrap().unwrap();
    assert_eq!(layout.points[0].x, 70.0);
    assert_eq!(layout.summary.change, 0);
    assert_eq!(layout.summary.change_percent, Some(0.0));
    assert_eq!(layout.x_ticks.len(), 1);
}

#[test]
fn y_ticks_always_five_and_increasing() {
    for totals in [vec![5u64], vec![0, 0, 0], vec![10, 2_000_000], vec![3, 1, 4, 1, 5, 9, 2, 6]] {
        let layout = ChartLayout::compute(&RenderOptions::default(), &daily(&totals)).unwrap().unwrap();
        assert_eq!(layout.y_ticks.len(), 5);
        // Larger values sit higher, i.e. at smaller y.
        assert!(layout.y_ticks.windows(2).all(|w| w[1].position < w[0].position));
        assert_eq!(layout.y_ticks[0].position, layout.plot.bottom());
        assert_eq!(layout.y_ticks[4].position, layout.plot.top);
    }
}

#[test]
fn last_sample_always_labeled() {
    for n in 1..=60usize {
        let layout = ChartLayout::compute(&RenderOptions::default(), &daily(&vec![7; n])).unwrap().unwrap();
        let last_x = layout.points.last().unwrap().x;
        assert_eq!(layout.x_ticks.last().unwrap().position, last_x, "n={n}");
        let step = (n / 8).max(1);
        let expected = (n + step - 1) / step + usize::from((n - 1) % step != 0);
        assert_eq!(layout.x_ticks.len(), expected, "n={n}");
    }
}

#[test]
fn flat_series_sits_on_plot_bottom() {
    let layout = ChartLayout::compute(&RenderOptions::default(), &daily(&[250; 6])).unwrap().unwrap();
    assert!(layout.points.iter().all(|p| p.y == layout.plot.bottom()));
    assert_eq!(layout.y_ticks[0].label, "250");
    assert_eq!(layout.y_ticks[4].label, "251");
}

#[test]
fn rendering_is_deterministic() {
    let s = daily(&[1, 10, 100, 1_000, 10_000, 100_000, 1_000_000]);
    assert_eq!(render("o", "r", &s).unwrap(), render("o", "r", &s).unwrap());
}

#[test]
fn malformed_labeled_date_propagates() {
    let s = vec![Sample::new("2024-13-01", 1)];
    let err = render("o", "r", &s).unwrap_err();
    assert!(err.to_string().contains("2024-13-01"));
}
