// File: crates/trend-core/src/types.rs
// Summary: Shared constants (canvas size, plot padding).

/// Canvas width in SVG user units.
pub const WIDTH: u32 = 800;
/// Canvas height in SVG user units.
pub const HEIGHT: u32 = 400;

/// Padding between the canvas edge and the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(70, 40, 60, 50)
    }
}
