//! Surface Traits - Capability interfaces to the host rendering environment.
//!
//! The controllers never touch real markup. Everything they need from the
//! page is expressed as two narrow traits:
//!
//! - [`SliderSurface`] - one carousel: its items, measurements, track and
//!   navigation controls
//! - [`PageSurface`] - the page around it: sections, nav links, mobile menu
//!
//! A host adapter implements these against its own widget tree; tests inject
//! fakes with scripted measurements. Surfaces take `&self` everywhere - the
//! controllers hold them behind `Rc` and call from timer and listener
//! callbacks.

use crate::types::{Control, Controls, ItemMetrics};

// =============================================================================
// SLIDER SURFACE
// =============================================================================

/// Host-side view of one carousel.
///
/// Measurement methods must read live layout at call time: item size can
/// change with viewport width through responsive styling, and the position
/// engine deliberately re-measures on every pass.
pub trait SliderSurface {
    /// Number of items in the track.
    fn item_count(&self) -> usize;

    /// Live geometry of the item at `index`, or `None` if it does not exist.
    fn measure_item(&self, index: usize) -> Option<ItemMetrics>;

    /// Visible content width of the slider container in pixels.
    fn container_width(&self) -> f32;

    /// Which navigation controls this surface provides.
    ///
    /// Surfaces without a previous/next control report the flag absent and
    /// never receive enablement calls for it.
    fn controls(&self) -> Controls {
        Controls::PREVIOUS | Controls::NEXT
    }

    /// Apply a horizontal track displacement in pixels.
    ///
    /// `px` is the distance the track is shifted left of its resting
    /// position; 0 means fully reset.
    fn set_offset(&self, px: f32);

    /// Enable or disable one navigation control.
    ///
    /// Only called for controls reported by [`SliderSurface::controls`].
    fn set_control_enabled(&self, control: Control, enabled: bool);
}

// =============================================================================
// PAGE SURFACE
// =============================================================================

/// Host-side view of the page chrome: sections, nav links, mobile menu.
pub trait PageSurface {
    /// Ids of the page's sections in document order.
    fn section_ids(&self) -> Vec<String>;

    /// Top position of a section in pixels from the page origin, or `None`
    /// for an unknown id.
    fn section_top(&self, id: &str) -> Option<f32>;

    /// Smoothly scroll the viewport to a section. Unknown ids are ignored.
    fn scroll_to_section(&self, id: &str);

    /// Show or hide the mobile navigation menu.
    fn set_menu_open(&self, open: bool);

    /// Highlight the nav link for a section, or clear the highlight.
    fn set_active_link(&self, id: Option<&str>);
}

// =============================================================================
// TEST FIXTURES
// =============================================================================
