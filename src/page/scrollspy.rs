//! Scrollspy - Active-section highlight from scroll position.
//!
//! On every scroll turn the host reports the page offset; the active section
//! is recomputed from live section positions and pushed to the surface.
//! Nothing is cached between turns - section positions move under reflow
//! just like slider items do.

use spark_signals::{Signal, signal};

use super::nav;

/// How far above a section's top the highlight switches over, matching the
/// fixed header height.
pub const ACTIVATION_OFFSET_PX: f32 = 80.0;

thread_local! {
    static ACTIVE_SECTION: Signal<Option<String>> = signal(None);
}

/// The section currently highlighted, if any.
pub fn active_section() -> Option<String> {
    ACTIVE_SECTION.with(|active| active.get())
}

/// Recompute the highlight for a page offset and push it to the surface.
///
/// The active section is the last one in document order whose top (minus
/// the activation offset) has scrolled past; above the first section there
/// is no highlight at all.
pub fn handle_scroll(page_y_offset: f32) {
    let Some(surface) = nav::surface() else {
        return;
    };

    let mut current: Option<String> = None;
    for id in surface.section_ids() {
        if let Some(top) = surface.section_top(&id) {
            if page_y_offset >= top - ACTIVATION_OFFSET_PX {
                current = Some(id);
            }
        }
    }

    ACTIVE_SECTION.with(|active| {
        if active.get() != current {
            active.set(current.clone());
        }
    });
    surface.set_active_link(current.as_deref());
}

/// Clear the highlight state (for unmount and tests).
pub fn reset_scrollspy() {
    ACTIVE_SECTION.with(|active| active.set(None));
}

// =============================================================================
// TESTS
// =============================================================================
