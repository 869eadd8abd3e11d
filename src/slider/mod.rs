//! Slider Module - The carousel controller.
//!
//! One controller instance per carousel on the page. Each instance owns:
//!
//! - **Geometry** - items-per-view from viewport width, item width from
//!   live measurement ([`geometry`])
//! - **Position** - current index, clamping, render to the surface
//!   ([`position`], backed by [`registry`])
//! - **Autoplay** - self-resetting auto-advance interval ([`autoplay`])
//!
//! Control flow: a navigation call or autoplay tick mutates the index, the
//! position engine recomputes the clamped index and offset and pushes both to
//! the surface, then autoplay is restarted. Resize notifications follow the
//! same path through a per-instance debounce.

pub mod autoplay;
pub mod geometry;
mod position;
mod registry;

pub use position::{clamp_index, create, current_index, destroy, next, previous, render};
pub use registry::{SliderId, reset_sliders, slider_count};
