// File: crates/trend-core/src/chart.rs
// Summary: Download-trend chart layout and SVG document assembly.

use log::debug;

use crate::axis::{x_ticks, y_ticks, Tick};
use crate::error::ChartError;
use crate::format::{coord, format_number, saturating_i64};
use crate::geometry::PlotRect;
use crate::scale::{project_points, IndexScale, Point, ValueRange, ValueScale};
use crate::series::Sample;
use crate::stats::Summary;
use crate::svg::{Document, Element};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::github_dark(),
        }
    }
}

impl RenderOptions {
    /// Canvas minus padding.
    pub fn plot_rect(&self) -> PlotRect {
        PlotRect::from_ltwh(
            self.insets.left as f64,
            self.insets.top as f64,
            self.width.saturating_sub(self.insets.hsum()) as f64,
            self.height.saturating_sub(self.insets.vsum()) as f64,
        )
    }
}

/// Everything derived from a non-empty series before it becomes markup.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotRect,
    pub range: ValueRange,
    pub points: Vec<Point>,
    pub line_path: String,
    pub area_path: String,
    pub y_ticks: Vec<Tick>,
    pub x_ticks: Vec<Tick>,
    pub summary: Summary,
}

impl ChartLayout {
    /// `Ok(None)` for an empty series.
    pub fn compute(opts: &RenderOptions, samples: &[Sample]) -> Result<Option<Self>, ChartError> {
        let (Some(range), Some(summary)) = (ValueRange::from_samples(samples), Summary::from_samples(samples))
        else {
            return Ok(None);
        };
        let plot = opts.plot_rect();
        let xs = IndexScale::new(&plot, samples.len());
        let ys = ValueScale::new_linear(&plot, &range);

        let points = project_points(samples, &xs, &ys);
        let line_path = line_path(&points);
        let area_path = area_path(&points, plot.bottom());
        let y_ticks = y_ticks(&range, &ys);
        let x_ticks = x_ticks(&points)?;

        Ok(Some(Self { plot, range, points, line_path, area_path, y_ticks, x_ticks, summary }))
    }
}

/// `M x y L x y ...` through every point in order.
pub fn line_path(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        d.push_str(if i == 0 { "M" } else { "L" });
        d.push(' ');
        d.push_str(&coord(p.x));
        d.push(' ');
        d.push_str(&coord(p.y));
    }
    d
}

/// The line path closed down to `baseline` and back under the first point.
pub fn area_path(points: &[Point], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    format!(
        "{} L {} {} L {} {} Z",
        line_path(points),
        coord(last.x),
        coord(baseline),
        coord(first.x),
        coord(baseline),
    )
}

/// Render with the fixed 800x400 layout and dark palette.
pub fn render(owner: &str, repo: &str, samples: &[Sample]) -> Result<String, ChartError> {
    render_with(&RenderOptions::default(), owner, repo, samples)
}

/// Render `samples` for `owner/repo`. An empty series yields the placeholder document.
/// Fails only when a labeled sample carries an unparseable date.
pub fn render_with(
    opts: &RenderOptions,
    owner: &str,
    repo: &str,
    samples: &[Sample],
) -> Result<String, ChartError> {
    let Some(layout) = ChartLayout::compute(opts, samples)? else {
        debug!("{owner}/{repo}: no samples, rendering placeholder");
        return Ok(render_empty(opts, owner, repo));
    };
    debug!(
        "{owner}/{repo}: {} points, {} x ticks, range [{}, {}]",
        layout.points.len(),
        layout.x_ticks.len(),
        layout.range.min,
        layout.range.max
    );
    Ok(build_document(opts, owner, repo, &layout).to_string())
}

/// Background plus a centered "no data yet" message.
pub fn render_empty(opts: &RenderOptions, owner: &str, repo: &str) -> String {
    let t = &opts.theme;
    let mut doc = Document::new(opts.width, opts.height);
    doc.push(background(opts));
    doc.push(
        Element::new("text")
            .attr("x", opts.width as f64 / 2.0)
            .attr("y", opts.height as f64 / 2.0)
            .attr("text-anchor", "middle")
            .attr("font-family", FONT_STACK)
            .attr("font-size", 16)
            .attr("fill", t.axis_label)
            .text(format!("No download data yet for {owner}/{repo}")),
    );
    doc.to_string()
}

fn background(opts: &RenderOptions) -> Element {
    Element::new("rect")
        .attr("width", opts.width)
        .attr("height", opts.height)
        .attr("rx", 12)
        .attr("fill", opts.theme.background)
        .attr("stroke", opts.theme.border)
        .attr("stroke-width", 1)
}

fn style(t: &Theme) -> Element {
    let css = format!(
        ".title {{ font: 600 18px {FONT_STACK}; fill: {title}; }} \
         .stat {{ font: 600 14px {FONT_STACK}; }} \
         .axis-label {{ font: 11px {FONT_STACK}; fill: {axis}; }} \
         .trend-line {{ animation: grow 1.5s ease-out forwards; }} \
         .marker {{ opacity: 0; animation: fade 0.4s ease-out 1.2s forwards; }} \
         @keyframes grow {{ from {{ clip-path: inset(0 100% 0 0); }} to {{ clip-path: inset(0 0 0 0); }} }} \
         @keyframes fade {{ from {{ opacity: 0; }} to {{ opacity: 1; }} }}",
        title = t.title,
        axis = t.axis_label,
    );
    Element::new("style").text(css)
}

fn defs(t: &Theme) -> Element {
    let gradient = Element::new("linearGradient")
        .attr("id", "area-gradient")
        .attr("x1", 0)
        .attr("y1", 0)
        .attr("x2", 0)
        .attr("y2", 1)
        .child(
            Element::new("stop")
                .attr("offset", "0%")
                .attr("stop-color", t.line_stroke)
                .attr("stop-opacity", 0.4),
        )
        .child(
            Element::new("stop")
                .attr("offset", "100%")
                .attr("stop-color", t.line_stroke)
                .attr("stop-opacity", 0),
        );
    let glow = Element::new("filter")
        .attr("id", "glow")
        .attr("x", "-20%")
        .attr("y", "-20%")
        .attr("width", "140%")
        .attr("height", "140%")
        .child(Element::new("feGaussianBlur").attr("stdDeviation", 3).attr("result", "blur"))
        .child(
            Element::new("feMerge")
                .child(Element::new("feMergeNode").attr("in", "blur"))
                .child(Element::new("feMergeNode").attr("in", "SourceGraphic")),
        );
    Element::new("defs").child(style(t)).child(gradient).child(glow)
}

fn build_document(opts: &RenderOptions, owner: &str, repo: &str, layout: &ChartLayout) -> Document {
    let t = &opts.theme;
    let plot = &layout.plot;
    let summary = &layout.summary;
    let mut doc = Document::new(opts.width, opts.height);

    doc.push(defs(t));
    doc.push(background(opts));

    // Header: title centered, total on the left, change on the right.
    doc.push(
        Element::new("text")
            .attr("x", opts.width as f64 / 2.0)
            .attr("y", 30)
            .attr("text-anchor", "middle")
            .attr("class", "title")
            .text(format!("{owner}/{repo}")),
    );
    doc.push(
        Element::new("text")
            .attr("x", coord(plot.left))
            .attr("y", 48)
            .attr("class", "stat")
            .attr("fill", t.marker)
            .text(format!("{} downloads", format_number(saturating_i64(summary.current)))),
    );
    doc.push(
        Element::new("text")
            .attr("x", coord(plot.right()))
            .attr("y", 48)
            .attr("text-anchor", "end")
            .attr("class", "stat")
            .attr("fill", t.change_color(summary.is_positive()))
            .text(summary.change_label()),
    );

    for tick in &layout.y_ticks {
        doc.push(
            Element::new("line")
                .attr("x1", coord(plot.left))
                .attr("y1", coord(tick.position))
                .attr("x2", coord(plot.right()))
                .attr("y2", coord(tick.position))
                .attr("stroke", t.grid)
                .attr("stroke-dasharray", "4 4")
                .attr("stroke-opacity", 0.5),
        );
        doc.push(
            Element::new("text")
                .attr("x", coord(plot.left - 10.0))
                .attr("y", coord(tick.position + 4.0))
                .attr("text-anchor", "end")
                .attr("class", "axis-label")
                .text(tick.label.as_str()),
        );
    }

    for tick in &layout.x_ticks {
        doc.push(
            Element::new("text")
                .attr("x", coord(tick.position))
                .attr("y", coord(plot.bottom() + 20.0))
                .attr("text-anchor", "middle")
                .attr("class", "axis-label")
                .text(tick.label.as_str()),
        );
    }

    doc.push(
        Element::new("path")
            .attr("class", "trend-area")
            .attr("d", layout.area_path.as_str())
            .attr("fill", "url(#area-gradient)"),
    );
    doc.push(
        Element::new("path")
            .attr("class", "trend-line")
            .attr("d", layout.line_path.as_str())
            .attr("fill", "none")
            .attr("stroke", t.line_stroke)
            .attr("stroke-width", 2.5)
            .attr("stroke-linejoin", "round")
            .attr("stroke-linecap", "round")
            .attr("filter", "url(#glow)"),
    );

    for p in &layout.points {
        doc.push(
            Element::new("circle")
                .attr("class", "marker")
                .attr("cx", coord(p.x))
                .attr("cy", coord(p.y))
                .attr("r", 3.5)
                .attr("fill", t.marker)
                .attr("stroke", t.background)
                .attr("stroke-width", 1.5),
        );
    }

    // Axis rules: left and bottom edges of the plot.
    doc.push(
        Element::new("line")
            .attr("x1", coord(plot.left))
            .attr("y1", coord(plot.top))
            .attr("x2", coord(plot.left))
            .attr("y2", coord(plot.bottom()))
            .attr("stroke", t.border)
            .attr("stroke-width", 1),
    );
    doc.push(
        Element::new("line")
            .attr("x1", coord(plot.left))
            .attr("y1", coord(plot.bottom()))
            .attr("x2", coord(plot.right()))
            .attr("y2", coord(plot.bottom()))
            .attr("stroke", t.border)
            .attr("stroke-width", 1),
    );

    doc
}
