//! Geometry Resolver - Items-per-view tiers and live item measurement.
//!
//! Everything here is recomputed on demand. Viewport width comes from the
//! viewport signal, item geometry from the surface at call time; nothing is
//! cached across passes, so results stay correct under reflow.

use crate::surface::SliderSurface;
use crate::types::SliderKind;

// =============================================================================
// GEOMETRY CONSTANTS
// =============================================================================

/// Widths at or below this show a single item (multi-item kind).
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Widths at or below this (and above mobile) show two items.
pub const TABLET_BREAKPOINT: f32 = 992.0;

/// Wrapper padding subtracted from the container width for the
/// single-item kind.
pub const SINGLE_ITEM_PADDING: f32 = 30.0;

// =============================================================================
// RESOLUTION
// =============================================================================

/// How many items are visible at once for a slider kind at a viewport width.
///
/// Fixed breakpoint tiers, not a continuous function; a width exactly on a
/// breakpoint resolves to the smaller count.
pub fn items_per_view(kind: SliderKind, viewport_width: f32) -> usize {
    match kind {
        SliderKind::SingleItem => 1,
        SliderKind::MultiItem => {
            if viewport_width <= MOBILE_BREAKPOINT {
                1
            } else if viewport_width <= TABLET_BREAKPOINT {
                2
            } else {
                3
            }
        }
    }
}

/// Full horizontal footprint of one item in pixels.
///
/// Single-item kind: the container's content width minus the wrapper padding
/// allowance (one item always fills the view). Multi-item kind: the first
/// item's rendered width plus its left-margin spacing, measured live.
pub fn item_full_width(kind: SliderKind, surface: &dyn SliderSurface) -> f32 {
    match kind {
        SliderKind::SingleItem => surface.container_width() - SINGLE_ITEM_PADDING,
        SliderKind::MultiItem => surface
            .measure_item(0)
            .map(|item| item.full_width())
            .unwrap_or(0.0),
    }
}

/// Highest valid index: `index + items_per_view <= item_count`, or 0 when
/// everything already fits.
pub fn max_index(item_count: usize, items_per_view: usize) -> usize {
    item_count.saturating_sub(items_per_view)
}

// =============================================================================
// TESTS
// =============================================================================
