#![forbid(unsafe_code)]

//! `hostpane-web` binds the host-detail page's DOM to the deterministic
//! interaction model in `hostpane-core`.
//!
//! The page contract, consumed at initialization:
//! - `#advanced_actions` — the slide-revealed panel (starts hidden)
//! - `#toggle_advanced_actions` — the control whose clicks toggle the panel
//! - first `.switches` and first `.host-services` — the two regions whose
//!   opacity fades on hover
//!
//! Absent elements are tolerated: their behavior is skipped and a warning is
//! logged; initialization never throws. All DOM access lives behind
//! `cfg(target_arch = "wasm32")`; the patch-to-CSS formatting in [`style`]
//! stays native and unit-testable.
//!
//! Host usage (after DOM construction):
//!
//! ```js
//! import init, { HostPane } from "./hostpane_web.js";
//! await init();
//! const pane = new HostPane();
//! ```
//!
//! A `requestAnimationFrame` loop runs only while an animation is in flight
//! and parks itself once the model goes idle.

pub mod style;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::HostPane;
