//! # spark-carousel
//!
//! Reactive carousel and page-enhancement controllers for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! The crate is headless: all markup, styling and real pixels belong to a
//! host adapter behind two capability traits. The controllers own state and
//! policy and run single-threaded, one event turn at a time:
//!
//! ```text
//! host event (click / resize / scroll / clock pump)
//!     → controller turn (mutate index, recompute geometry)
//!         → surface calls (offset, control states, menu, highlight)
//! ```
//!
//! Timers never fire on background threads; the host pumps
//! [`timer::advance`] from its own loop and every due callback runs on that
//! turn. Geometry (items-per-view, item width) is re-derived on every pass
//! from the viewport signal and live surface measurement - nothing is cached
//! across turns, so controllers stay correct under reflow.
//!
//! ## Modules
//!
//! - [`types`] - Core types (SliderKind, ItemMetrics, Controls, options)
//! - [`surface`] - Capability traits the host implements
//! - [`timer`] - Cancellable timeouts/intervals on the host-driven clock
//! - [`viewport`] - Viewport width signal and resize notification stream
//! - [`slider`] - The carousel controller (geometry, position, autoplay)
//! - [`page`] - Nav smooth-scroll, mobile menu, scrollspy, entrance hook
//! - [`mount`] - Page bootstrap and teardown

pub mod mount;
pub mod page;
pub mod slider;
pub mod surface;
pub mod timer;
pub mod types;
pub mod viewport;

// Re-export commonly used items
pub use types::*;

pub use surface::{PageSurface, SliderSurface};

pub use slider::{
    SliderId, clamp_index, create as create_slider, current_index, destroy as destroy_slider,
    next, previous, render, reset_sliders, slider_count,
};

pub use slider::autoplay::{
    is_running as autoplay_running, start as start_autoplay, stop as stop_autoplay,
};

pub use page::{
    entrance::{EntranceConfig, init as init_entrance, register_animator},
    nav::{handle_link_click, install as install_nav, is_menu_open, toggle_menu},
    scrollspy::{active_section, handle_scroll},
};

pub use mount::{MountHandle, PageOptions, mount_page};

pub use viewport::{
    ListenerId, dispatch_resize, on_resize, remove_listener, set_width as set_viewport_width,
    width as viewport_width,
};

pub use timer::{TimerId, advance, clear as clear_timer, now, set_interval, set_timeout};
