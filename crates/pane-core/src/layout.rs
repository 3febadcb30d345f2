//! Layout Arbiter
//!
//! Decides which panes are visible and how wide they are, from the detail
//! flag and the viewport class alone.

/// Coarse viewport bucket driving responsive layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Narrow,
    #[default]
    Wide,
}

impl ViewportClass {
    /// `Narrow` at or below the breakpoint, like a `max-width` media query
    pub fn classify(width_px: f64, breakpoint_px: u32) -> Self {
        if width_px <= f64::from(breakpoint_px) {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == ViewportClass::Narrow
    }
}

/// Width assignment for one pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSize {
    Fixed(u32),
    /// Whatever the fixed panes leave over
    Remaining,
    /// Percentage of the space left of the sidebar; not normalized against siblings
    Percent(u8),
    /// Stacked above the main pane, full width
    Overlay,
    Hidden,
}

impl PaneSize {
    pub fn is_visible(self) -> bool {
        self != PaneSize::Hidden
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub sidebar: PaneSize,
    pub main: PaneSize,
    pub detail: PaneSize,
}

/// Main pane share while the detail pane is open on a wide viewport
pub const MAIN_SPLIT_PERCENT: u8 = 50;
/// Detail pane share while open on a wide viewport
pub const DETAIL_SPLIT_PERCENT: u8 = 33;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutArbiter {
    sidebar_width_px: u32,
}

impl LayoutArbiter {
    pub fn new(sidebar_width_px: u32) -> Self {
        Self { sidebar_width_px }
    }

    pub fn arrange(&self, is_detail_open: bool, viewport: ViewportClass) -> PaneLayout {
        let sidebar = PaneSize::Fixed(self.sidebar_width_px);
        match (is_detail_open, viewport) {
            (false, _) => PaneLayout {
                sidebar,
                main: PaneSize::Remaining,
                detail: PaneSize::Hidden,
            },
            (true, ViewportClass::Wide) => PaneLayout {
                sidebar,
                main: PaneSize::Percent(MAIN_SPLIT_PERCENT),
                detail: PaneSize::Percent(DETAIL_SPLIT_PERCENT),
            },
            (true, ViewportClass::Narrow) => PaneLayout {
                sidebar,
                main: PaneSize::Remaining,
                detail: PaneSize::Overlay,
            },
        }
    }
}
