use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use trend_core::{render, Sample};

fn build_series(n: usize) -> Vec<Sample> {
    let start = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let d = start + chrono::Duration::days(i as i64);
            let total = (i as f64 * 0.05).sin().abs() * 5_000.0 + i as f64 * 12.0;
            Sample::new(d.format("%Y-%m-%d").to_string(), total as u64)
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    for &n in &[100usize, 5_000usize] {
        group.bench_function(format!("daily_{n}"), |b| {
            let series = build_series(n);
            b.iter(|| -> Result<()> {
                let svg = render("octo", "widgets", &series)?;
                black_box(svg);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
