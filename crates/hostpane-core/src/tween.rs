#![forbid(unsafe_code)]

//! Scalar tween with mid-flight retargeting.
//!
//! A [`Tween`] interpolates a value from a start toward a target over a fixed
//! duration through an easing curve. Retargeting restarts the interpolation
//! from the *current* value, so a new request supersedes the visual target of
//! any in-flight animation without snapping — the same interruption behavior
//! browsers give CSS transitions.
//!
//! # Invariants
//!
//! 1. `value()` always lies between `from` and `target` (inclusive).
//! 2. A completed tween reports exactly its target and stays there.
//! 3. Zero duration is clamped to 1ns to avoid division by zero.
//! 4. `retarget()` to the current target is a no-op (the tween keeps its
//!    elapsed progress instead of restarting).

use std::time::Duration;

use crate::easing::{EasingFn, ease_in_out_sine};

/// A scalar interpolation toward a target value.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    target: f32,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Create a tween from `from` toward `target` over `duration`.
    ///
    /// A zero duration is clamped to 1ns.
    #[must_use]
    pub fn new(from: f32, target: f32, duration: Duration) -> Self {
        Self {
            from,
            target,
            elapsed: Duration::ZERO,
            duration: clamp_duration(duration),
            easing: ease_in_out_sine,
        }
    }

    /// Create a tween already settled at `value`.
    #[must_use]
    pub fn settled(value: f32, duration: Duration) -> Self {
        let duration = clamp_duration(duration);
        Self {
            from: value,
            target: value,
            elapsed: duration,
            duration,
            easing: ease_in_out_sine,
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Current interpolated value.
    #[must_use]
    pub fn value(&self) -> f32 {
        if self.is_complete() {
            return self.target;
        }
        let t = (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.target - self.from) * (self.easing)(t)
    }

    /// The value the tween is converging to.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the tween has reached its target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt`. No-op once complete.
    pub fn tick(&mut self, dt: Duration) {
        if self.is_complete() {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// Restart the interpolation from the current value toward `target`.
    ///
    /// Retargeting to the value already being converged to is a no-op, so
    /// repeated identical requests do not reset progress.
    pub fn retarget(&mut self, target: f32) {
        if (target - self.target).abs() < f32::EPSILON {
            return;
        }
        self.from = self.value();
        self.target = target;
        self.elapsed = Duration::ZERO;
    }
}

fn clamp_duration(d: Duration) -> Duration {
    if d.is_zero() { Duration::from_nanos(1) } else { d }
}
