#![forbid(unsafe_code)]

//! Hover-driven opacity fader for an action-button region.
//!
//! Pointer-enter fades the region toward full opacity, pointer-leave back
//! toward the faded bound. Each region owns its own fader; nothing is shared.
//! The fader is seeded with the region's stylesheet opacity so no value is
//! written before the first pointer event.
//!
//! Last-event-wins: a new pointer event retargets the in-flight tween from
//! its current value, so rapid enter/leave alternation always converges to
//! the most recent event's bound.

use std::time::Duration;

use crate::config::FxConfig;
use crate::tween::Tween;

/// Opacity fader bound to one region's pointer events.
#[derive(Debug, Clone)]
pub struct HoverFader {
    tween: Tween,
    faded: f32,
    full: f32,
}

impl HoverFader {
    /// Create a fader settled at `initial` (the stylesheet opacity at bind
    /// time, clamped to `[0.0, 1.0]`).
    #[must_use]
    pub fn new(initial: f32, config: &FxConfig) -> Self {
        Self {
            tween: Tween::settled(initial.clamp(0.0, 1.0), config.fade_duration)
                .easing(config.easing),
            faded: config.faded_opacity,
            full: config.full_opacity,
        }
    }

    /// Pointer entered the region: fade toward full opacity.
    pub fn pointer_enter(&mut self) {
        self.tween.retarget(self.full);
    }

    /// Pointer left the region: fade toward the faded bound.
    pub fn pointer_leave(&mut self) {
        self.tween.retarget(self.faded);
    }

    /// Advance the fade by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.tween.tick(dt);
    }

    /// Current opacity.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.tween.value()
    }

    /// The opacity the fader is converging to.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.tween.target()
    }

    /// Whether a fade is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.tween.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(fader: &mut HoverFader) {
        for _ in 0..64 {
            fader.tick(Duration::from_millis(16));
        }
    }

    #[test]
    fn enter_fades_to_full() {
        let mut fader = HoverFader::new(0.5, &FxConfig::default());
        fader.pointer_enter();
        assert_eq!(fader.target(), 1.0);
        settle(&mut fader);
        assert_eq!(fader.opacity(), 1.0);
    }

    #[test]
    fn leave_fades_back_to_faded() {
        let mut fader = HoverFader::new(0.5, &FxConfig::default());
        fader.pointer_enter();
        settle(&mut fader);
        fader.pointer_leave();
        settle(&mut fader);
        assert_eq!(fader.opacity(), 0.5);
    }

    #[test]
    fn rapid_alternation_settles_on_last_event() {
        let mut fader = HoverFader::new(0.5, &FxConfig::default());
        for _ in 0..10 {
            fader.pointer_enter();
            fader.tick(Duration::from_millis(5));
            fader.pointer_leave();
            fader.tick(Duration::from_millis(5));
        }
        fader.pointer_enter();
        settle(&mut fader);
        assert_eq!(fader.opacity(), 1.0);
    }

    #[test]
    fn initial_opacity_is_clamped() {
        let fader = HoverFader::new(3.0, &FxConfig::default());
        assert_eq!(fader.opacity(), 1.0);
    }

    #[test]
    fn repeated_enter_does_not_restart_fade() {
        let mut fader = HoverFader::new(0.5, &FxConfig::default());
        fader.pointer_enter();
        fader.tick(Duration::from_millis(250));
        let mid = fader.opacity();
        fader.pointer_enter();
        fader.tick(Duration::from_millis(1));
        assert!(fader.opacity() >= mid);
    }
}
