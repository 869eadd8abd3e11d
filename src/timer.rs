//! Timer Service - Cancellable timeouts and intervals on a host-driven clock.
//!
//! Provides the deferred-call primitive the controllers are built on:
//! - `set_timeout` / `set_interval` return an opaque [`TimerId`] token
//! - `clear` cancels a token (replace-on-reschedule is the caller's pattern)
//! - `advance` pumps the clock and fires due callbacks run-to-completion
//!
//! # Pattern
//!
//! The host owns real time. From its event loop it calls `advance(elapsed_ms)`
//! and every due callback runs on that turn, on the calling thread, in
//! deadline order. Nothing fires from a background thread, nothing is queued:
//! clearing a token always wins over a pending fire.
//!
//! Callbacks may schedule and clear timers freely, including their own.
//! An interval is re-armed before its callback runs, so a callback that
//! clears its own token stops the repetition.
//!
//! # Example
//!
//! ```ignore
//! use spark_carousel::timer;
//!
//! let id = timer::set_interval(5000, || println!("tick"));
//!
//! timer::advance(12_000); // fires twice
//! timer::clear(id);       // no further ticks
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::trace;

// =============================================================================
// TYPES
// =============================================================================

/// Opaque token identifying a scheduled timer.
///
/// Tokens are never reused within a thread, so a stale token held after its
/// timer fired or was cleared is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Clone, Copy)]
enum Schedule {
    /// Fire once, then forget.
    Once,
    /// Re-arm every `period` milliseconds.
    Every(u64),
}

struct TimerEntry {
    id: TimerId,
    deadline: u64,
    schedule: Schedule,
    callback: Rc<dyn Fn()>,
}

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    /// Virtual clock in milliseconds.
    static CLOCK: Cell<u64> = const { Cell::new(0) };

    /// Counter for token allocation. Monotonic, never recycled.
    static NEXT_TIMER_ID: Cell<u64> = const { Cell::new(0) };

    /// Pending timers. Unordered; `advance` selects by deadline.
    static TIMERS: RefCell<Vec<TimerEntry>> = const { RefCell::new(Vec::new()) };
}

fn allocate_id() -> TimerId {
    NEXT_TIMER_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        TimerId(id)
    })
}

// =============================================================================
// SCHEDULING
// =============================================================================

/// Schedule `callback` to fire once, `delay_ms` from now.
pub fn set_timeout(delay_ms: u64, callback: impl Fn() + 'static) -> TimerId {
    let id = allocate_id();
    let deadline = now() + delay_ms;
    TIMERS.with(|timers| {
        timers.borrow_mut().push(TimerEntry {
            id,
            deadline,
            schedule: Schedule::Once,
            callback: Rc::new(callback),
        });
    });
    trace!(timer = id.0, delay_ms, "timeout scheduled");
    id
}

/// Schedule `callback` to fire every `period_ms` milliseconds.
///
/// A zero period is inert: a token is returned but nothing is scheduled
/// (guards against a zero-delay spin in `advance`).
pub fn set_interval(period_ms: u64, callback: impl Fn() + 'static) -> TimerId {
    let id = allocate_id();
    if period_ms == 0 {
        return id;
    }
    let deadline = now() + period_ms;
    TIMERS.with(|timers| {
        timers.borrow_mut().push(TimerEntry {
            id,
            deadline,
            schedule: Schedule::Every(period_ms),
            callback: Rc::new(callback),
        });
    });
    trace!(timer = id.0, period_ms, "interval scheduled");
    id
}

/// Cancel a timer. Safe to call with a token that already fired or was
/// already cleared.
pub fn clear(id: TimerId) {
    let removed = TIMERS.with(|timers| {
        let mut timers = timers.borrow_mut();
        let before = timers.len();
        timers.retain(|entry| entry.id != id);
        timers.len() != before
    });
    if removed {
        trace!(timer = id.0, "timer cleared");
    }
}

/// Check whether a token still has a pending fire.
pub fn is_scheduled(id: TimerId) -> bool {
    TIMERS.with(|timers| timers.borrow().iter().any(|entry| entry.id == id))
}

/// Number of currently scheduled timers.
pub fn active_count() -> usize {
    TIMERS.with(|timers| timers.borrow().len())
}

/// Current virtual time in milliseconds.
pub fn now() -> u64 {
    CLOCK.with(|clock| clock.get())
}

// =============================================================================
// CLOCK PUMP
// =============================================================================

/// Advance the clock by `ms`, firing every callback that comes due.
///
/// Callbacks run in deadline order (ties broken by scheduling order), each to
/// completion before the next. The borrow on the timer table is released
/// while a callback runs, so callbacks may schedule and clear timers; a
/// timeout scheduled inside a callback still fires on this same pump if its
/// deadline falls within the window.
pub fn advance(ms: u64) {
    let target = now() + ms;

    loop {
        // Earliest due entry. Token order breaks deadline ties so intervals
        // scheduled first fire first.
        let due = TIMERS.with(|timers| {
            timers
                .borrow()
                .iter()
                .filter(|entry| entry.deadline <= target)
                .min_by_key(|entry| (entry.deadline, entry.id.0))
                .map(|entry| (entry.id, entry.deadline, entry.callback.clone()))
        });

        let Some((id, deadline, callback)) = due else {
            break;
        };

        CLOCK.with(|clock| clock.set(deadline));

        // Re-arm or retire before running, so the callback observes its own
        // timer in the post-fire state (clearing self inside the callback
        // stops an interval).
        TIMERS.with(|timers| {
            let mut timers = timers.borrow_mut();
            if let Some(pos) = timers.iter().position(|entry| entry.id == id) {
                match timers[pos].schedule {
                    Schedule::Once => {
                        timers.remove(pos);
                    }
                    Schedule::Every(period) => {
                        timers[pos].deadline = deadline + period;
                    }
                }
            }
        });

        callback();
    }

    CLOCK.with(|clock| clock.set(target));
}

/// Drop all timers and rewind the clock (for testing).
pub fn reset() {
    TIMERS.with(|timers| timers.borrow_mut().clear());
    CLOCK.with(|clock| clock.set(0));
}

// =============================================================================
// TESTS
// =============================================================================
