//! Nav - Smooth-scroll anchor links and the mobile menu toggle.
//!
//! The host forwards nav-link clicks and menu-toggle presses; this module
//! owns the menu-open signal and the delayed close after following a link,
//! and asks the surface for the actual scrolling.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{Signal, signal};
use tracing::debug;

use crate::surface::PageSurface;
use crate::timer::{self, TimerId};

/// Delay before the mobile menu hides after a link is followed, so the
/// scroll visibly starts while the menu is still up.
pub const MENU_CLOSE_DELAY_MS: u64 = 300;

// =============================================================================
// NAV CONTEXT
// =============================================================================

struct NavContext {
    surface: Rc<dyn PageSurface>,
    /// Pending delayed menu close, replaced on every link click.
    close_timer: Cell<Option<TimerId>>,
}

thread_local! {
    static NAV: RefCell<Option<Rc<NavContext>>> = const { RefCell::new(None) };

    /// Whether the mobile menu is currently shown.
    static MENU_OPEN: Signal<bool> = signal(false);
}

fn context() -> Option<Rc<NavContext>> {
    NAV.with(|nav| nav.borrow().clone())
}

/// The page surface the nav (and scrollspy) currently drive, if installed.
pub(crate) fn surface() -> Option<Rc<dyn PageSurface>> {
    context().map(|ctx| ctx.surface.clone())
}

/// Install the page surface the nav handlers drive. Replaces any previous
/// installation.
pub fn install(surface: Rc<dyn PageSurface>) {
    NAV.with(|nav| {
        *nav.borrow_mut() = Some(Rc::new(NavContext {
            surface,
            close_timer: Cell::new(None),
        }));
    });
}

/// Tear down the nav context and its pending timer (for unmount and tests).
pub fn reset_nav() {
    if let Some(ctx) = context() {
        if let Some(pending) = ctx.close_timer.take() {
            timer::clear(pending);
        }
    }
    NAV.with(|nav| *nav.borrow_mut() = None);
    MENU_OPEN.with(|open| open.set(false));
}

// =============================================================================
// MENU
// =============================================================================

/// Whether the mobile menu is currently shown.
pub fn is_menu_open() -> bool {
    MENU_OPEN.with(|open| open.get())
}

/// Flip the mobile menu and push the new state to the surface.
pub fn toggle_menu() {
    let Some(ctx) = context() else {
        return;
    };
    let open = !is_menu_open();
    MENU_OPEN.with(|signal| signal.set(open));
    ctx.surface.set_menu_open(open);
    debug!(open, "menu toggled");
}

// =============================================================================
// LINK CLICKS
// =============================================================================

/// Follow a nav link.
///
/// Only in-page fragment hrefs (`#about`) are handled: the surface scrolls
/// smoothly to the section, and an open mobile menu is closed shortly
/// after. Anything else is left to the host's default navigation.
pub fn handle_link_click(href: &str) {
    let Some(ctx) = context() else {
        return;
    };
    let Some(fragment) = href.strip_prefix('#') else {
        return;
    };

    ctx.surface.scroll_to_section(fragment);

    if is_menu_open() {
        if let Some(pending) = ctx.close_timer.take() {
            timer::clear(pending);
        }
        let ctx_for_close = ctx.clone();
        let timeout = timer::set_timeout(MENU_CLOSE_DELAY_MS, move || {
            ctx_for_close.close_timer.set(None);
            MENU_OPEN.with(|signal| signal.set(false));
            ctx_for_close.surface.set_menu_open(false);
        });
        ctx.close_timer.set(Some(timeout));
    }
}

// =============================================================================
// TESTS
// =============================================================================
