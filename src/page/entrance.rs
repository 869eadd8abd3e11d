//! Entrance Hook - Optional scroll-entrance animation initializer.
//!
//! Some hosts ship an entrance-animation engine, some don't. A host that has
//! one registers it here; startup then initializes it exactly once with the
//! configured settings. With nothing registered the hook is a silent no-op.

use std::cell::{Cell, RefCell};

use tracing::debug;

/// Default entrance animation duration in milliseconds.
pub const ENTRANCE_DURATION_MS: u64 = 1000;

/// Settings handed to the registered animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceConfig {
    /// Animation duration per element.
    pub duration_ms: u64,
    /// Animate only on the first time an element scrolls into view.
    pub play_once: bool,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            duration_ms: ENTRANCE_DURATION_MS,
            play_once: true,
        }
    }
}

thread_local! {
    static ANIMATOR: RefCell<Option<Box<dyn Fn(&EntranceConfig)>>> = const { RefCell::new(None) };

    static INITIALIZED: Cell<bool> = const { Cell::new(false) };
}

/// Register the host's animation initializer. Replaces any previous one.
pub fn register_animator(animator: impl Fn(&EntranceConfig) + 'static) {
    ANIMATOR.with(|slot| {
        *slot.borrow_mut() = Some(Box::new(animator));
    });
}

/// Initialize entrance animations once.
///
/// The first call invokes the registered animator (if any) with `config`;
/// later calls do nothing. Without an animator this is a silent skip.
pub fn init(config: &EntranceConfig) {
    if INITIALIZED.with(|done| done.replace(true)) {
        return;
    }
    ANIMATOR.with(|slot| {
        if let Some(animator) = slot.borrow().as_ref() {
            animator(config);
            debug!(duration_ms = config.duration_ms, once = config.play_once, "entrance animations initialized");
        }
    });
}

/// Forget the animator and allow `init` to run again (for unmount and
/// tests).
pub fn reset_entrance() {
    ANIMATOR.with(|slot| *slot.borrow_mut() = None);
    INITIALIZED.with(|done| done.set(false));
}

// =============================================================================
// TESTS
// =============================================================================
