#![forbid(unsafe_code)]

//! Easing curves for the page animations.
//!
//! All curves map `[0.0, 1.0]` to `[0.0, 1.0]` with `f(0) = 0` and
//! `f(1) = 1`, and are monotonic non-decreasing. Inputs outside the unit
//! interval are the caller's responsibility; [`crate::tween::Tween`] always
//! clamps before calling.

/// An easing function: normalized time in, normalized progress out.
pub type EasingFn = fn(f32) -> f32;

/// Identity easing.
#[must_use]
pub fn linear(t: f32) -> f32 {
    t
}

/// Quadratic ease-in: slow start, fast finish.
#[must_use]
pub fn ease_in(t: f32) -> f32 {
    t * t
}

/// Quadratic ease-out: fast start, slow finish.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// Sinusoidal ease-in-out, the default for both page animations.
#[must_use]
pub fn ease_in_out_sine(t: f32) -> f32 {
    (1.0 - (std::f32::consts::PI * t).cos()) / 2.0
}
