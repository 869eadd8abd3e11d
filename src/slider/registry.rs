//! Slider Registry - Per-instance state storage and id allocation.
//!
//! Instances live in a thread-local map keyed by a monotonic id. Ids are
//! never recycled: timer and listener callbacks capture their `SliderId`,
//! and a callback racing a `destroy` must find nothing rather than a
//! stranger's state.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use spark_signals::Signal;
use tracing::debug;

use crate::surface::SliderSurface;
use crate::timer::TimerId;
use crate::types::{SliderKind, SliderOptions};
use crate::viewport::ListenerId;

// =============================================================================
// INSTANCE STATE
// =============================================================================

/// Handle to one slider instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliderId(u64);

/// All mutable state owned by one slider instance.
///
/// Interior mutability throughout: the state is shared behind `Rc` with
/// timer and resize callbacks, and every field is owned exclusively by this
/// instance's own handlers.
pub(crate) struct SliderState {
    pub(crate) kind: SliderKind,
    pub(crate) surface: Rc<dyn SliderSurface>,
    /// Current 0-based index of the leftmost visible item.
    pub(crate) index: Signal<usize>,
    /// Active autoplay interval, if Running.
    pub(crate) autoplay: Cell<Option<TimerId>>,
    /// Pending resize-debounce timeout, replaced on every resize event.
    pub(crate) resize_debounce: Cell<Option<TimerId>>,
    /// This instance's viewport resize subscription.
    pub(crate) resize_listener: Cell<Option<ListenerId>>,
    pub(crate) options: SliderOptions,
}

// =============================================================================
// REGISTRY
// =============================================================================

thread_local! {
    static SLIDERS: RefCell<HashMap<u64, Rc<SliderState>>> = RefCell::new(HashMap::new());

    /// Counter for id allocation. Monotonic, never recycled.
    static NEXT_SLIDER_ID: Cell<u64> = const { Cell::new(0) };
}

/// Store a new instance and hand back its id.
pub(crate) fn insert(state: SliderState) -> SliderId {
    let id = NEXT_SLIDER_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        SliderId(id)
    });
    SLIDERS.with(|sliders| {
        sliders.borrow_mut().insert(id.0, Rc::new(state));
    });
    debug!(slider = id.0, "slider registered");
    id
}

/// Look up an instance. `None` for destroyed or never-created ids.
///
/// Hands out a clone of the `Rc` so the registry borrow is released before
/// the caller touches the state; handlers re-enter the registry freely.
pub(crate) fn get(id: SliderId) -> Option<Rc<SliderState>> {
    SLIDERS.with(|sliders| sliders.borrow().get(&id.0).cloned())
}

/// Remove an instance, returning its state for teardown.
pub(crate) fn remove(id: SliderId) -> Option<Rc<SliderState>> {
    let state = SLIDERS.with(|sliders| sliders.borrow_mut().remove(&id.0));
    if state.is_some() {
        debug!(slider = id.0, "slider released");
    }
    state
}

/// Number of live slider instances.
pub fn slider_count() -> usize {
    SLIDERS.with(|sliders| sliders.borrow().len())
}

/// Drop all instances (for testing). Does not touch timers or listeners;
/// test setups reset those services alongside.
pub fn reset_sliders() {
    SLIDERS.with(|sliders| sliders.borrow_mut().clear());
}

// =============================================================================
// TESTS
// =============================================================================
