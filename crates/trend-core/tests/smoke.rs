// File: crates/trend-core/tests/smoke.rs
// Purpose: End-to-end render of a short weekly series, written to disk for eyeballing.

use trend_core::{render, ChartLayout, RenderOptions, Sample};

fn weekly() -> Vec<Sample> {
    vec![
        Sample::new("2024-01-01", 100),
        Sample::new("2024-01-08", 150),
        Sample::new("2024-01-15", 130),
    ]
}

#[test]
fn render_smoke_svg() {
    let svg = render("octo", "widgets", &weekly()).expect("render should succeed");
    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains(">octo/widgets</text>"));
    assert!(svg.contains(">130 downloads</text>"));
    assert!(svg.contains(">-20 (-13.3%)</text>"));
    assert!(svg.contains("fill=\"#f85149\""), "drop should use the negative accent");

    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    std::fs::write(&out, &svg).unwrap();
    assert!(std::fs::metadata(&out).unwrap().len() > 0);
}

#[test]
fn weekly_scenario_layout() {
    let layout = ChartLayout::compute(&RenderOptions::default(), &weekly()).unwrap().unwrap();
    let s = layout.summary;
    assert_eq!((s.current, s.previous, s.change), (130, 150, -20));
    assert_eq!(s.percent_label(), "-13.3");
    assert_eq!(layout.points.len(), 3);
    assert_eq!(layout.x_ticks.len(), 3);
}

#[test]
fn growth_uses_positive_accent() {
    let samples = vec![Sample::new("2024-05-01", 1_200), Sample::new("2024-05-02", 1_800)];
    let svg = render("octo", "widgets", &samples).unwrap();
    assert!(svg.contains(">1.8K downloads</text>"));
    assert!(svg.contains(">+600 (+50.0%)</text>"));
    assert!(svg.contains("fill=\"#3fb950\""));
    assert!(!svg.contains("fill=\"#f85149\""));
}

#[test]
fn header_counts_round_half_up() {
    let samples = vec![Sample::new("2024-05-01", 1_000), Sample::new("2024-05-02", 2_250)];
    let svg = render("octo", "widgets", &samples).unwrap();
    assert!(svg.contains(">2.3K downloads</text>"));
    assert!(svg.contains(">+1.3K (+125.0%)</text>"));
}
