//! Autoplay Timer - Self-resetting auto-advance for a slider instance.
//!
//! A two-state machine per instance: **Running** (an interval token is held)
//! and **Stopped**. Manual navigation and resize handling both wrap their
//! work in `stop` / `start`, so a tick never overlaps a manual transition
//! and autoplay always resumes afterwards.
//!
//! A tick advances by one full page and wraps to the start at the end;
//! manual navigation clamps instead. The asymmetry is deliberate: buttons
//! feel bounded, the idle animation loops.

use tracing::{debug, trace};

use super::geometry;
use super::position;
use super::registry::{self, SliderId};
use crate::{timer, viewport};

// =============================================================================
// STATE MACHINE
// =============================================================================

/// Transition to Running: schedule the repeating tick.
///
/// Clears any existing interval first, so calling `start` twice leaves
/// exactly one active timer. When everything already fits the view there is
/// nothing to animate and the instance stays Stopped.
pub fn start(id: SliderId) {
    let Some(state) = registry::get(id) else {
        return;
    };

    if let Some(existing) = state.autoplay.take() {
        timer::clear(existing);
    }

    let items_per_view = geometry::items_per_view(state.kind, viewport::width());
    if state.surface.item_count() <= items_per_view {
        trace!(slider = ?id, "autoplay idle: nothing to scroll");
        return;
    }

    let interval = timer::set_interval(state.options.autoplay_interval_ms, move || tick(id));
    state.autoplay.set(Some(interval));
    debug!(slider = ?id, interval_ms = state.options.autoplay_interval_ms, "autoplay running");
}

/// Transition to Stopped: cancel the pending tick. Safe when already
/// Stopped.
pub fn stop(id: SliderId) {
    let Some(state) = registry::get(id) else {
        return;
    };
    if let Some(interval) = state.autoplay.take() {
        timer::clear(interval);
        debug!(slider = ?id, "autoplay stopped");
    }
}

/// Whether the instance currently holds a live interval.
pub fn is_running(id: SliderId) -> bool {
    registry::get(id)
        .and_then(|state| state.autoplay.get())
        .is_some_and(timer::is_scheduled)
}

// =============================================================================
// TICK
// =============================================================================

/// One auto-advance turn: wrap at the end, otherwise jump a full page.
///
/// Geometry is re-derived here on every tick; the viewport may have crossed
/// a breakpoint since the interval was armed.
fn tick(id: SliderId) {
    let Some(state) = registry::get(id) else {
        return;
    };

    let items_per_view = geometry::items_per_view(state.kind, viewport::width());
    let max_index = geometry::max_index(state.surface.item_count(), items_per_view);

    let index = state.index.get();
    if index >= max_index {
        state.index.set(0);
    } else {
        state.index.set((index + items_per_view).min(max_index));
    }

    position::render(id);
}

// =============================================================================
// TESTS
// =============================================================================
