#![forbid(unsafe_code)]

//! Timing and opacity configuration for the page animations.

use std::time::Duration;

use crate::easing::{EasingFn, ease_in_out_sine};

/// Animation settings shared by the slide panel and the hover faders.
///
/// Defaults: 500ms for both animations, regions fading between 0.5 and
/// 1.0, sinusoidal in/out easing.
#[derive(Debug, Clone, Copy)]
pub struct FxConfig {
    /// Duration of the panel slide reveal/hide.
    pub slide_duration: Duration,
    /// Duration of a region opacity fade.
    pub fade_duration: Duration,
    /// Region opacity while the pointer is outside.
    pub faded_opacity: f32,
    /// Region opacity while the pointer is inside.
    pub full_opacity: f32,
    /// Easing curve applied to both animations.
    pub easing: EasingFn,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            slide_duration: Duration::from_millis(500),
            fade_duration: Duration::from_millis(500),
            faded_opacity: 0.5,
            full_opacity: 1.0,
            easing: ease_in_out_sine,
        }
    }
}

impl FxConfig {
    /// Set the slide duration (builder pattern).
    #[must_use]
    pub fn with_slide_duration(mut self, d: Duration) -> Self {
        self.slide_duration = d;
        self
    }

    /// Set the fade duration (builder pattern).
    #[must_use]
    pub fn with_fade_duration(mut self, d: Duration) -> Self {
        self.fade_duration = d;
        self
    }

    /// Set the opacity bounds (builder pattern).
    ///
    /// Both values are clamped to `[0.0, 1.0]`; if `faded > full` the pair
    /// is swapped so the bounds stay ordered.
    #[must_use]
    pub fn with_opacity_bounds(mut self, faded: f32, full: f32) -> Self {
        let faded = faded.clamp(0.0, 1.0);
        let full = full.clamp(0.0, 1.0);
        if faded <= full {
            self.faded_opacity = faded;
            self.full_opacity = full;
        } else {
            self.faded_opacity = full;
            self.full_opacity = faded;
        }
        self
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }
}
