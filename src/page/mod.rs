//! Page Module - Enhancements around the sliders.
//!
//! The rest of the page behavior, all thin event plumbing over the
//! [`crate::surface::PageSurface`] capability:
//!
//! - **Nav** - smooth-scroll anchor links and the mobile menu toggle
//! - **Scrollspy** - active-section highlight from scroll position
//! - **Entrance** - optional entrance-animation hook, invoked once at startup

pub mod entrance;
pub mod nav;
pub mod scrollspy;
