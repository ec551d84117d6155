//! Browser (DOM) bindings for the `slidedeck` crate.
//!
//! `slidedeck` is UI-agnostic and owns the slide state machine. This crate wires it to a real
//! page:
//!
//! - a [`WindowViewport`] backed by `window` scrolling and `history.scrollRestoration`
//! - markup discovery, navigation-dot creation and DOM event listeners ([`mount`])
//! - class mirroring onto slide/dot elements and `setTimeout`-driven cooldown ticks
//!
//! Expected markup (selectors are configurable through [`MountOptions`]):
//!
//! ```html
//! <div id="fullscreen-slide-container">
//!   <section class="fullscreen-slide">...</section>
//!   <section class="fullscreen-slide">...</section>
//!   <nav class="fullscreen-slider-nav"></nav>
//! </div>
//! ```
#![forbid(unsafe_code)]

mod mount;
mod viewport;


pub use mount::{MountOptions, SliderHandle, mount};
pub use viewport::WindowViewport;

pub use slidedeck;
