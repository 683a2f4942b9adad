// File: crates/trend-core/src/theme.rs
// Summary: Fixed dark palette used by the SVG document.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: &'static str,
    pub border: &'static str,
    pub grid: &'static str,
    pub line_stroke: &'static str,
    pub marker: &'static str,
    pub title: &'static str,
    pub axis_label: &'static str,
    pub positive: &'static str,
    pub negative: &'static str,
}

impl Theme {
    /// GitHub-style dark palette. These hex values are part of the output contract.
    pub const fn github_dark() -> Self {
        Self {
            background: "#0d1117",
            border: "#30363d",
            grid: "#30363d",
            line_stroke: "#3b82f6",
            marker: "#58a6ff",
            title: "#c9d1d9",
            axis_label: "#8b949e",
            positive: "#3fb950",
            negative: "#f85149",
        }
    }

    /// Accent for the change annotation.
    pub fn change_color(&self, positive: bool) -> &'static str {
        if positive { self.positive } else { self.negative }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::github_dark()
    }
}
