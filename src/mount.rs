//! Mount API - Page bootstrap and teardown.
//!
//! One call wires the whole enhancement: install the nav context, fire the
//! entrance hook, create a controller per slider surface. The returned
//! handle tears everything down again.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use spark_carousel::{mount, types::SliderKind, viewport};
//!
//! viewport::set_width(1280.0);
//! let handle = mount::mount_page(
//!     page_adapter,
//!     vec![
//!         (SliderKind::MultiItem, course_adapter),
//!         (SliderKind::SingleItem, testimonial_adapter),
//!     ],
//!     mount::PageOptions::default(),
//! );
//!
//! // ... pump spark_carousel::timer::advance() from the event loop ...
//!
//! handle.unmount();
//! ```

use std::rc::Rc;

use tracing::debug;

use crate::page::{entrance, nav, scrollspy};
use crate::slider::{self, SliderId};
use crate::surface::{PageSurface, SliderSurface};
use crate::types::{SliderKind, SliderOptions};

// =============================================================================
// OPTIONS
// =============================================================================

/// Configuration for one page mount.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageOptions {
    /// Timing applied to every slider created by this mount.
    pub slider: SliderOptions,
    /// Settings for the entrance-animation hook.
    pub entrance: entrance::EntranceConfig,
}

// =============================================================================
// MOUNT HANDLE
// =============================================================================

/// Handle returned by [`mount_page`] that allows unmounting.
pub struct MountHandle {
    sliders: Vec<SliderId>,
}

impl MountHandle {
    /// The sliders created by this mount, in the order they were given.
    /// Surfaces with no items were skipped and do not appear here.
    pub fn sliders(&self) -> &[SliderId] {
        &self.sliders
    }

    /// Tear down: destroy every slider (cancelling its timers and resize
    /// subscription), clear the nav context and scroll highlight, and allow
    /// the entrance hook to run again on a future mount.
    ///
    /// Dropping the handle without calling this leaves the enhancement
    /// running until the host thread ends - page-unload semantics.
    pub fn unmount(self) {
        for id in &self.sliders {
            slider::destroy(*id);
        }
        nav::reset_nav();
        scrollspy::reset_scrollspy();
        entrance::reset_entrance();
        debug!("page unmounted");
    }
}

// =============================================================================
// MOUNT
// =============================================================================

/// Enhance a page: nav + entrance hook + one controller per slider surface.
///
/// The host should report the viewport width (`viewport::set_width`) before
/// mounting so the initial render sees real breakpoints.
pub fn mount_page(
    page: Rc<dyn PageSurface>,
    sliders: Vec<(SliderKind, Rc<dyn SliderSurface>)>,
    options: PageOptions,
) -> MountHandle {
    nav::install(page);
    entrance::init(&options.entrance);

    let sliders: Vec<SliderId> = sliders
        .into_iter()
        .filter_map(|(kind, surface)| slider::create(kind, surface, options.slider))
        .collect();

    debug!(sliders = sliders.len(), "page mounted");
    MountHandle { sliders }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::testing::{TestPage, TestSurface};
    use crate::{timer, viewport};

    fn setup() {
        slider::reset_sliders();
        timer::reset();
        viewport::reset_viewport();
        nav::reset_nav();
        scrollspy::reset_scrollspy();
        entrance::reset_entrance();
        viewport::set_width(1200.0);
    }

    fn page() -> Rc<TestPage> {
        TestPage::new(&[("home", 0.0), ("courses", 900.0)])
    }

    #[test]
    fn test_mount_creates_both_sliders() {
        setup();

        let courses = TestSurface::new(6);
        let testimonials = TestSurface::new(4);
        let handle = mount_page(
            page(),
            vec![
                (SliderKind::MultiItem, courses.clone()),
                (SliderKind::SingleItem, testimonials.clone()),
            ],
            PageOptions::default(),
        );

        assert_eq!(handle.sliders().len(), 2);
        assert_eq!(slider::slider_count(), 2);
        assert_eq!(courses.render_count(), 1);
        assert_eq!(testimonials.render_count(), 1);
    }

    #[test]
    fn test_mount_skips_empty_surfaces() {
        setup();

        let empty = TestSurface::new(0);
        let full = TestSurface::new(6);
        let handle = mount_page(
            page(),
            vec![
                (SliderKind::MultiItem, empty),
                (SliderKind::MultiItem, full),
            ],
            PageOptions::default(),
        );

        assert_eq!(handle.sliders().len(), 1);
        assert_eq!(slider::slider_count(), 1);
    }

    #[test]
    fn test_mount_fires_entrance_hook_once() {
        setup();

        let seen = Rc::new(std::cell::Cell::new(0));
        let seen_clone = seen.clone();
        entrance::register_animator(move |_| seen_clone.set(seen_clone.get() + 1));

        let handle = mount_page(page(), Vec::new(), PageOptions::default());
        assert_eq!(seen.get(), 1);
        handle.unmount();
    }

    #[test]
    fn test_unmount_leaves_no_timers_or_listeners() {
        setup();

        let courses = TestSurface::new(6);
        let testimonials = TestSurface::new(4);
        let handle = mount_page(
            page(),
            vec![
                (SliderKind::MultiItem, courses),
                (SliderKind::SingleItem, testimonials),
            ],
            PageOptions::default(),
        );

        // Leave a pending debounce and menu-close behind.
        viewport::dispatch_resize(700.0);
        nav::toggle_menu();
        nav::handle_link_click("#home");

        handle.unmount();
        assert_eq!(slider::slider_count(), 0);
        assert_eq!(viewport::listener_count(), 0);
        assert_eq!(timer::active_count(), 0);
        assert!(!nav::is_menu_open());
    }

    #[test]
    fn test_mounted_page_end_to_end() {
        setup();

        let courses = TestSurface::new(6);
        let handle = mount_page(
            page(),
            vec![(SliderKind::MultiItem, courses.clone())],
            PageOptions::default(),
        );
        let id = handle.sliders()[0];

        // Autoplay pages through, wraps, keeps going.
        timer::advance(5000);
        assert_eq!(slider::current_index(id), Some(3));
        timer::advance(5000);
        assert_eq!(slider::current_index(id), Some(0));

        // A resize burst re-renders once and resumes autoplay.
        let renders = courses.render_count();
        viewport::dispatch_resize(900.0);
        viewport::dispatch_resize(600.0);
        timer::advance(200);
        assert_eq!(courses.render_count(), renders + 1);

        // Scrollspy follows the scroll.
        scrollspy::handle_scroll(850.0);
        assert_eq!(scrollspy::active_section(), Some("courses".to_string()));

        handle.unmount();
    }
}
