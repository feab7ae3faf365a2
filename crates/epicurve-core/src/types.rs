// File: crates/epicurve-core/src/types.rs
// Summary: Shared layout types and constants (surface size, margins, breakpoint).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Viewports narrower than this render with the compact (mobile) layout.
pub const MOBILE_BREAKPOINT: i32 = 600;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
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
        // Top leaves room for milestone labels, bottom for the source footnote.
        Self::new(56, 64, 72, 64)
    }
}

/// Drawing surface geometry: outer size plus the margins around the plot rect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
}

impl Viewport {
    pub const fn new(width: i32, height: i32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    pub fn plot_left(&self) -> f32 { self.insets.left as f32 }
    pub fn plot_right(&self) -> f32 { (self.width - self.insets.right as i32) as f32 }
    pub fn plot_top(&self) -> f32 { self.insets.top as f32 }
    pub fn plot_bottom(&self) -> f32 { (self.height - self.insets.bottom as i32) as f32 }

    pub fn plot_width(&self) -> f32 {
        (self.plot_right() - self.plot_left()).max(0.0)
    }
    pub fn plot_height(&self) -> f32 {
        (self.plot_bottom() - self.plot_top()).max(0.0)
    }

    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT
    }

    /// Number of date ticks on the bottom axis for this width.
    pub fn x_tick_count(&self) -> usize {
        if self.is_mobile() { 4 } else { 6 }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
