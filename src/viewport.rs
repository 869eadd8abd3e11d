//! Viewport State - Window width signal and resize notification stream.
//!
//! Holds the one piece of truly global geometry: the viewport width. Sliders
//! read it on every pass (breakpoint tiers are derived, never stored) and
//! subscribe to resize notifications to debounce their re-renders.
//!
//! The host wires its real resize events to [`dispatch_resize`]; tests drive
//! it directly.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{Signal, signal};
use tracing::trace;

// =============================================================================
// WIDTH SIGNAL
// =============================================================================

thread_local! {
    /// Current viewport width in pixels. 0 until the host reports a size.
    static VIEWPORT_WIDTH: Signal<f32> = signal(0.0);
}

/// Current viewport width in pixels.
pub fn width() -> f32 {
    VIEWPORT_WIDTH.with(|s| s.get())
}

/// Update the viewport width without notifying resize listeners.
///
/// Use this for the initial size report; live resizes go through
/// [`dispatch_resize`].
pub fn set_width(width: f32) {
    VIEWPORT_WIDTH.with(|s| {
        if s.get() != width {
            s.set(width);
        }
    });
}

// =============================================================================
// RESIZE LISTENERS
// =============================================================================

/// Token identifying a registered resize listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

thread_local! {
    static RESIZE_LISTENERS: RefCell<Vec<(ListenerId, Rc<dyn Fn()>)>> =
        const { RefCell::new(Vec::new()) };

    static NEXT_LISTENER_ID: Cell<u64> = const { Cell::new(0) };
}

/// Register a callback for resize notifications. Returns a token for
/// [`remove_listener`].
pub fn on_resize(callback: impl Fn() + 'static) -> ListenerId {
    let id = NEXT_LISTENER_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        ListenerId(id)
    });
    RESIZE_LISTENERS.with(|listeners| {
        listeners.borrow_mut().push((id, Rc::new(callback)));
    });
    id
}

/// Unregister a resize listener. Safe on a token that was already removed.
pub fn remove_listener(id: ListenerId) {
    RESIZE_LISTENERS.with(|listeners| {
        listeners.borrow_mut().retain(|(listener, _)| *listener != id);
    });
}

/// Number of registered resize listeners.
pub fn listener_count() -> usize {
    RESIZE_LISTENERS.with(|listeners| listeners.borrow().len())
}

/// Report a new viewport width and notify every listener.
///
/// Listeners run outside the registry borrow, so a listener may register or
/// remove listeners (and timers) reentrantly.
pub fn dispatch_resize(width: f32) {
    trace!(width, "viewport resize");
    set_width(width);

    let callbacks: Vec<Rc<dyn Fn()>> = RESIZE_LISTENERS.with(|listeners| {
        listeners
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect()
    });
    for callback in callbacks {
        callback();
    }
}

/// Reset width and listeners (for testing).
pub fn reset_viewport() {
    VIEWPORT_WIDTH.with(|s| s.set(0.0));
    RESIZE_LISTENERS.with(|listeners| listeners.borrow_mut().clear());
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup() {
        reset_viewport();
    }

    #[test]
    fn test_width_signal() {
        setup();

        assert_eq!(width(), 0.0);
        set_width(1200.0);
        assert_eq!(width(), 1200.0);
    }

    #[test]
    fn test_dispatch_updates_width_and_notifies() {
        setup();

        let seen = Rc::new(Cell::new(0.0));
        let seen_clone = seen.clone();
        let _listener = on_resize(move || seen_clone.set(width()));

        dispatch_resize(600.0);
        assert_eq!(width(), 600.0);
        assert_eq!(seen.get(), 600.0); // Width updated before listeners ran
    }

    #[test]
    fn test_remove_listener() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let listener = on_resize(move || count_clone.set(count_clone.get() + 1));

        dispatch_resize(800.0);
        assert_eq!(count.get(), 1);

        remove_listener(listener);
        dispatch_resize(900.0);
        assert_eq!(count.get(), 1);
        assert_eq!(listener_count(), 0);

        remove_listener(listener); // Safe twice
    }

    #[test]
    fn test_listener_may_remove_itself() {
        setup();

        let id_cell = Rc::new(Cell::new(None));
        let id_clone = id_cell.clone();
        let listener = on_resize(move || {
            if let Some(id) = id_clone.get() {
                remove_listener(id);
            }
        });
        id_cell.set(Some(listener));

        dispatch_resize(500.0);
        assert_eq!(listener_count(), 0);

        dispatch_resize(400.0); // No listener left, no panic
    }
}
