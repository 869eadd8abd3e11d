//! Position Engine - Current index, clamping, and rendering to the surface.
//!
//! Owns the one clamping rule every index assignment goes through, and the
//! render pass that turns an index into a track offset plus control states.
//!
//! Geometry is re-derived on every pass. Items-per-view changes between
//! renders whenever the viewport crosses a breakpoint; holding on to a
//! stored max index would let the current index drift out of bounds, so
//! nothing here stores one.

use std::cell::Cell;
use std::rc::Rc;

use spark_signals::signal;
use tracing::debug;

use super::autoplay;
use super::geometry;
use super::registry::{self, SliderId, SliderState};
use crate::surface::SliderSurface;
use crate::types::{Control, Controls, SliderKind, SliderOptions};
use crate::{timer, viewport};

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Create a controller for one carousel.
///
/// Returns `None` (and registers nothing) when the surface has no items -
/// a malformed or empty container skips enhancement silently rather than
/// failing the page. On success the instance is rendered once, subscribed
/// to viewport resizes, and autoplay is started.
pub fn create(
    kind: SliderKind,
    surface: Rc<dyn SliderSurface>,
    options: SliderOptions,
) -> Option<SliderId> {
    if surface.item_count() == 0 {
        debug!(?kind, "slider skipped: no items");
        return None;
    }

    let id = registry::insert(SliderState {
        kind,
        surface,
        index: signal(0),
        autoplay: Cell::new(None),
        resize_debounce: Cell::new(None),
        resize_listener: Cell::new(None),
        options,
    });

    let listener = viewport::on_resize(move || on_viewport_resize(id));
    if let Some(state) = registry::get(id) {
        state.resize_listener.set(Some(listener));
    }

    render(id);
    autoplay::start(id);
    Some(id)
}

/// Tear down a controller: stop its timers, drop its resize subscription,
/// release its state. Safe on a dead id.
pub fn destroy(id: SliderId) {
    let Some(state) = registry::remove(id) else {
        return;
    };
    if let Some(interval) = state.autoplay.take() {
        timer::clear(interval);
    }
    if let Some(timeout) = state.resize_debounce.take() {
        timer::clear(timeout);
    }
    if let Some(listener) = state.resize_listener.take() {
        viewport::remove_listener(listener);
    }
}

/// Current index of a live instance.
pub fn current_index(id: SliderId) -> Option<usize> {
    registry::get(id).map(|state| state.index.get())
}

// =============================================================================
// CLAMPING
// =============================================================================

/// Clamp an index into `[0, max(0, item_count - items_per_view)]`.
///
/// The single clamping rule used everywhere an index is set.
pub fn clamp_index(index: usize, item_count: usize, items_per_view: usize) -> usize {
    index.min(geometry::max_index(item_count, items_per_view))
}

// =============================================================================
// RENDER
// =============================================================================

/// Recompute geometry, clamp the index, and push offset + control states to
/// the surface.
pub fn render(id: SliderId) {
    let Some(state) = registry::get(id) else {
        return;
    };

    let items_per_view = geometry::items_per_view(state.kind, viewport::width());
    let item_count = state.surface.item_count();
    let max_index = geometry::max_index(item_count, items_per_view);

    let index = clamp_index(state.index.get(), item_count, items_per_view);
    if state.index.get() != index {
        state.index.set(index);
    }

    let present = state.surface.controls();

    // Everything fits: no movement is possible at all, not merely a bound
    // case. Park the track and disable both controls.
    if item_count <= items_per_view {
        set_control(&*state.surface, present, Control::Previous, false);
        set_control(&*state.surface, present, Control::Next, false);
        state.surface.set_offset(0.0);
        return;
    }

    let item_full_width = geometry::item_full_width(state.kind, &*state.surface);
    state.surface.set_offset(item_full_width * index as f32);

    set_control(&*state.surface, present, Control::Previous, index > 0);
    set_control(&*state.surface, present, Control::Next, index < max_index);
}

fn set_control(surface: &dyn SliderSurface, present: Controls, control: Control, enabled: bool) {
    if present.contains(control.flag()) {
        surface.set_control_enabled(control, enabled);
    }
}

// =============================================================================
// MANUAL NAVIGATION
// =============================================================================

/// Advance by one full page, clamped at the end.
///
/// Manual navigation never wraps; only autoplay loops back to the start.
pub fn next(id: SliderId) {
    let Some(state) = registry::get(id) else {
        return;
    };
    autoplay::stop(id);

    let items_per_view = geometry::items_per_view(state.kind, viewport::width());
    let max_index = geometry::max_index(state.surface.item_count(), items_per_view);
    state
        .index
        .set((state.index.get() + items_per_view).min(max_index));

    render(id);
    autoplay::start(id);
}

/// Step back by one full page, clamped at the start.
pub fn previous(id: SliderId) {
    let Some(state) = registry::get(id) else {
        return;
    };
    autoplay::stop(id);

    let items_per_view = geometry::items_per_view(state.kind, viewport::width());
    state
        .index
        .set(state.index.get().saturating_sub(items_per_view));

    render(id);
    autoplay::start(id);
}

// =============================================================================
// RESIZE
// =============================================================================

/// Per-instance resize handler: pause autoplay immediately, then coalesce
/// the burst - the re-render and restart only happen once the quiet period
/// elapses. The pending timeout is replaced on every event, so no layout
/// reads occur during a drag-resize.
fn on_viewport_resize(id: SliderId) {
    let Some(state) = registry::get(id) else {
        return;
    };
    autoplay::stop(id);

    if let Some(pending) = state.resize_debounce.take() {
        timer::clear(pending);
    }
    let timeout = timer::set_timeout(state.options.resize_debounce_ms, move || {
        if let Some(state) = registry::get(id) {
            state.resize_debounce.set(None);
        }
        render(id);
        autoplay::start(id);
    });
    state.resize_debounce.set(Some(timeout));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::registry::reset_sliders;
    use crate::surface::testing::TestSurface;
    use crate::types::ItemMetrics;

    fn setup(width: f32) {
        reset_sliders();
        timer::reset();
        viewport::reset_viewport();
        viewport::set_width(width);
    }

    fn create_multi(surface: Rc<TestSurface>) -> SliderId {
        create(SliderKind::MultiItem, surface, SliderOptions::default())
            .expect("slider should be created")
    }

    #[test]
    fn test_create_skips_empty_surface() {
        setup(1200.0);

        let surface = TestSurface::new(0);
        assert!(create(SliderKind::MultiItem, surface, SliderOptions::default()).is_none());
        assert_eq!(registry::slider_count(), 0);
        assert_eq!(viewport::listener_count(), 0);
    }

    #[test]
    fn test_clamp_index_rule() {
        assert_eq!(clamp_index(0, 6, 3), 0);
        assert_eq!(clamp_index(3, 6, 3), 3);
        assert_eq!(clamp_index(9, 6, 3), 3);
        assert_eq!(clamp_index(5, 3, 3), 0);
        assert_eq!(clamp_index(5, 2, 3), 0);
    }

    #[test]
    fn test_initial_render_at_zero() {
        setup(1200.0);

        let surface = TestSurface::new(6);
        let id = create_multi(surface.clone());

        assert_eq!(current_index(id), Some(0));
        assert_eq!(surface.last_offset(), Some(0.0));
        assert_eq!(surface.control_enabled(Control::Previous), Some(false));
        assert_eq!(surface.control_enabled(Control::Next), Some(true));
    }

    #[test]
    fn test_next_jumps_a_full_page_and_clamps() {
        setup(1200.0); // 3 per view, 6 items -> max index 3

        let surface = TestSurface::new(6);
        let id = create_multi(surface.clone());

        next(id);
        assert_eq!(current_index(id), Some(3));
        assert_eq!(surface.control_enabled(Control::Previous), Some(true));
        assert_eq!(surface.control_enabled(Control::Next), Some(false));

        // Already at the end: clamps, never wraps.
        next(id);
        assert_eq!(current_index(id), Some(3));
        assert_eq!(surface.control_enabled(Control::Next), Some(false));
    }

    #[test]
    fn test_previous_clamps_at_zero() {
        setup(1200.0);

        let surface = TestSurface::new(6);
        let id = create_multi(surface.clone());

        next(id);
        previous(id);
        assert_eq!(current_index(id), Some(0));

        previous(id);
        assert_eq!(current_index(id), Some(0));
        assert_eq!(surface.control_enabled(Control::Previous), Some(false));
    }

    #[test]
    fn test_offset_is_index_times_item_full_width() {
        setup(1200.0);

        let surface = TestSurface::new(6);
        surface.item.set(ItemMetrics::new(200.0, 15.0));
        let id = create_multi(surface.clone());

        next(id);
        assert_eq!(surface.last_offset(), Some(215.0 * 3.0));
    }

    #[test]
    fn test_single_item_walks_one_by_one() {
        setup(1200.0); // Width irrelevant for the single-item kind

        let surface = TestSurface::new(4);
        surface.container_width.set(830.0);
        let id = create(
            SliderKind::SingleItem,
            surface.clone(),
            SliderOptions::default(),
        )
        .expect("slider should be created");

        next(id);
        next(id);
        next(id);
        assert_eq!(current_index(id), Some(3));
        assert_eq!(surface.control_enabled(Control::Next), Some(false));
        assert_eq!(surface.last_offset(), Some(800.0 * 3.0));

        // A fourth next leaves the index parked at the end.
        next(id);
        assert_eq!(current_index(id), Some(3));
    }

    #[test]
    fn test_everything_fits_short_circuit() {
        setup(1200.0); // 3 per view

        let surface = TestSurface::new(3);
        let id = create_multi(surface.clone());

        // Force a stale index, then render: offset must land at exactly 0
        // and both controls must be disabled, regardless of prior state.
        if let Some(state) = registry::get(id) {
            state.index.set(7);
        }
        render(id);

        assert_eq!(current_index(id), Some(0));
        assert_eq!(surface.last_offset(), Some(0.0));
        assert_eq!(surface.control_enabled(Control::Previous), Some(false));
        assert_eq!(surface.control_enabled(Control::Next), Some(false));
    }

    #[test]
    fn test_absent_controls_are_never_driven() {
        setup(1200.0);

        let surface = TestSurface::new(6);
        surface.controls.set(Controls::NEXT);
        let id = create_multi(surface.clone());

        next(id);
        next(id);

        assert!(
            surface
                .control_calls
                .borrow()
                .iter()
                .all(|(control, _)| *control == Control::Next)
        );
        // Navigation itself still works without the missing control.
        assert_eq!(current_index(id), Some(3));
    }

    #[test]
    fn test_render_rederives_items_per_view() {
        setup(1200.0); // 3 per view, 5 items -> max index 2

        let surface = TestSurface::new(5);
        let id = create_multi(surface.clone());

        next(id);
        assert_eq!(current_index(id), Some(2));

        // Narrow to one per view: max index becomes 4, index 2 is still
        // valid, and both controls open up.
        viewport::set_width(600.0);
        render(id);

        assert_eq!(current_index(id), Some(2));
        assert_eq!(surface.control_enabled(Control::Previous), Some(true));
        assert_eq!(surface.control_enabled(Control::Next), Some(true));
    }

    #[test]
    fn test_render_clamps_after_shrink() {
        setup(600.0); // 1 per view, 5 items -> max index 4

        let surface = TestSurface::new(5);
        let id = create_multi(surface.clone());

        next(id);
        next(id);
        next(id);
        next(id);
        assert_eq!(current_index(id), Some(4));

        // Drop items out of the track: index must clamp on the next pass.
        surface.item_count.set(3);
        viewport::set_width(1200.0); // 3 per view -> max index 0
        render(id);

        assert_eq!(current_index(id), Some(0));
        assert_eq!(surface.last_offset(), Some(0.0));
    }

    #[test]
    fn test_debounced_resize_renders_once() {
        setup(1200.0);

        let surface = TestSurface::new(6);
        let id = create_multi(surface.clone());
        let renders_before = surface.render_count();

        // Two rapid resize events inside the quiet period.
        viewport::dispatch_resize(1000.0);
        timer::advance(100);
        viewport::dispatch_resize(600.0);

        // Quiet period not yet over for the second event.
        timer::advance(199);
        assert_eq!(surface.render_count(), renders_before);

        timer::advance(1);
        assert_eq!(surface.render_count(), renders_before + 1);
        assert_eq!(current_index(id), Some(0));
        assert!(autoplay::is_running(id));
    }

    #[test]
    fn test_resize_pauses_autoplay_until_quiet() {
        setup(1200.0);

        let surface = TestSurface::new(6);
        let id = create_multi(surface);
        assert!(autoplay::is_running(id));

        viewport::dispatch_resize(900.0);
        assert!(!autoplay::is_running(id));

        timer::advance(200);
        assert!(autoplay::is_running(id));
    }

    #[test]
    fn test_destroy_clears_everything() {
        setup(1200.0);

        let surface = TestSurface::new(6);
        let id = create_multi(surface);

        viewport::dispatch_resize(900.0); // Leaves a pending debounce
        destroy(id);

        assert_eq!(registry::slider_count(), 0);
        assert_eq!(viewport::listener_count(), 0);
        assert_eq!(timer::active_count(), 0);

        // All operations are no-ops on a dead id.
        destroy(id);
        next(id);
        previous(id);
        render(id);
        assert_eq!(current_index(id), None);
    }

    #[test]
    fn test_two_instances_are_independent() {
        setup(1200.0);

        let grid = TestSurface::new(6);
        let list = TestSurface::new(4);
        let grid_id = create_multi(grid.clone());
        let list_id = create(
            SliderKind::SingleItem,
            list.clone(),
            SliderOptions::default(),
        )
        .expect("slider should be created");

        next(grid_id);
        assert_eq!(current_index(grid_id), Some(3));
        assert_eq!(current_index(list_id), Some(0));

        next(list_id);
        assert_eq!(current_index(grid_id), Some(3));
        assert_eq!(current_index(list_id), Some(1));
    }
}
