//! Core types for spark-carousel.
//!
//! These types define the foundation that everything builds on.
//! They flow between the controllers and the host surfaces and define what
//! both sides agree on.

// =============================================================================
// Slider Kind
// =============================================================================

/// Which layout policy a slider instance follows.
///
/// The two kinds differ in how many items are visible at once and in how the
/// width of one item is derived (see [`crate::slider::geometry`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKind {
    /// Responsive grid of cards: 1, 2 or 3 visible depending on viewport width.
    MultiItem,
    /// One item fills the view regardless of viewport width.
    SingleItem,
}

// =============================================================================
// Item Metrics
// =============================================================================

/// Rendered geometry of one slider item, measured by the surface.
///
/// Measured at call time from live layout - item size can depend on viewport
/// width through responsive styling, so these values must never be cached.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemMetrics {
    /// Bounding-box width in pixels.
    pub width: f32,
    /// Left-margin spacing between items in pixels.
    pub margin_left: f32,
}

impl ItemMetrics {
    /// Create metrics from a width and inter-item spacing.
    pub const fn new(width: f32, margin_left: f32) -> Self {
        Self { width, margin_left }
    }

    /// The full horizontal footprint of the item (width + spacing).
    pub fn full_width(&self) -> f32 {
        self.width + self.margin_left
    }
}

// =============================================================================
// Navigation Controls (bitflags)
// =============================================================================

/// One navigation control of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
}

bitflags::bitflags! {
    /// Which navigation controls a surface actually provides.
    ///
    /// Either control may be absent; the position engine only drives the
    /// controls that are present. Combine with bitwise OR:
    /// `Controls::PREVIOUS | Controls::NEXT`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Controls: u8 {
        const NONE = 0;
        const PREVIOUS = 1 << 0;
        const NEXT = 1 << 1;
    }
}

impl Control {
    /// The capability flag corresponding to this control.
    pub const fn flag(self) -> Controls {
        match self {
            Self::Previous => Controls::PREVIOUS,
            Self::Next => Controls::NEXT,
        }
    }
}

// =============================================================================
// Slider Options
// =============================================================================

/// Default auto-advance interval in milliseconds.
pub const AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Default quiet period for the resize debounce in milliseconds.
pub const RESIZE_DEBOUNCE_MS: u64 = 200;

/// Per-instance timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderOptions {
    /// Interval between autoplay ticks.
    pub autoplay_interval_ms: u64,
    /// Quiet period before a resize burst triggers a re-render.
    pub resize_debounce_ms: u64,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: AUTOPLAY_INTERVAL_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }
}
