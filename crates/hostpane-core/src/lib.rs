#![forbid(unsafe_code)]

//! `hostpane-core` models the host-detail page interactions without touching
//! a browser.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes interaction events
//!   (toggle clicks, pointer enter/leave).
//! - **Deterministic time**: the host advances the clock explicitly via
//!   `Duration` deltas; nothing reads a wall clock.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.
//!
//! The model owns two independent behaviors: a slide-revealed advanced-actions
//! panel ([`slide::SlidePanel`]) and per-region hover opacity faders
//! ([`hover::HoverFader`]). [`model::PageModel`] composes them and emits
//! [`model::VisualPatch`] values describing the style mutations the host
//! should apply. The wrapping web crate binds real DOM events and writes the
//! patches to element styles.

pub mod config;
pub mod easing;
pub mod hover;
pub mod model;
pub mod slide;
pub mod tween;

pub use config::FxConfig;
pub use model::{InteractionEvent, PageModel, Region, VisualPatch};
pub use slide::{SlidePanel, SlideState};
