//! A headless fullscreen slide controller: one full-viewport slide at a time, driven by mouse
//! wheel, touch swipes, arrow keys and navigation dots.
//!
//! For the browser (DOM) bindings, see the `slidedeck-web` crate.
//!
//! This crate owns the input-to-transition logic: index bounds, the post-transition cooldown
//! ("freeze"), the unlock window that lets the page scroll past the last slide, and the CSS class
//! lifecycle (`active`, `fadeInUp`, `fadeInDown`, `fadeOutUp`, `fadeOutDown`) of every slide and
//! navigation dot.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the page scroll offset, through a [`ViewportPort`]
//! - input events, wrapped in [`InputEvent`]
//! - a monotonic millisecond clock, passed to every time-dependent call
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod nav;
mod options;
mod state;
mod timers;
mod types;
mod viewport;

#[cfg(test)]
mod tests;

pub use controller::{SlideController, TouchTrack};
pub use error::SetupError;
pub use nav::NavigationDots;
pub use options::{
    DEFAULT_FREEZE_TIME_MS, DEFAULT_SCROLL_THRESHOLD, DEFAULT_SWIPE_THRESHOLD, LeaveCallback,
    SlideCallback, SlideControllerOptions,
};
pub use state::SliderState;
pub use types::{
    ClassSet, Direction, InputEvent, Key, KeyInput, SlideClass, TouchInput, WheelInput,
};
pub use viewport::{MemoryViewport, ScrollRestoration, ViewportPort};
