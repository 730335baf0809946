#![forbid(unsafe_code)]

//! Slide reveal state machine for the advanced-actions panel.
//!
//! The panel starts hidden and flips between hidden and open on each toggle.
//! Progress is the revealed height fraction in `[0.0, 1.0]`; the host maps it
//! to pixels against the panel's content height.
//!
//! # Invariants
//!
//! 1. A fresh panel is `Hidden` with progress 0.
//! 2. `toggle()` is its own inverse: after an even number of toggles the
//!    settled state is `Hidden`, after an odd number `Open`.
//! 3. A toggle while animating reverses direction from the current progress
//!    (no snap to either end).

use std::time::Duration;

use crate::config::FxConfig;
use crate::tween::Tween;

/// Observable state of the slide panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    /// Fully collapsed; progress 0.
    Hidden,
    /// Animating toward open.
    Opening,
    /// Fully revealed; progress 1.
    Open,
    /// Animating toward hidden.
    Closing,
}

/// A vertically revealed panel driven by toggle clicks.
#[derive(Debug, Clone)]
pub struct SlidePanel {
    tween: Tween,
    open_target: bool,
}

impl SlidePanel {
    /// Create a hidden panel using the config's slide duration and easing.
    #[must_use]
    pub fn new(config: &FxConfig) -> Self {
        Self {
            tween: Tween::settled(0.0, config.slide_duration).easing(config.easing),
            open_target: false,
        }
    }

    /// Flip the panel's settle target and start animating toward it.
    pub fn toggle(&mut self) {
        self.open_target = !self.open_target;
        self.tween.retarget(if self.open_target { 1.0 } else { 0.0 });
    }

    /// Advance the animation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.tween.tick(dt);
    }

    /// Revealed height fraction in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.tween.value()
    }

    /// Current state, derived from target and animation completion.
    #[must_use]
    pub fn state(&self) -> SlideState {
        match (self.open_target, self.tween.is_complete()) {
            (false, true) => SlideState::Hidden,
            (true, true) => SlideState::Open,
            (true, false) => SlideState::Opening,
            (false, false) => SlideState::Closing,
        }
    }

    /// Whether a reveal/hide animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.tween.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(panel: &mut SlidePanel) {
        for _ in 0..64 {
            panel.tick(Duration::from_millis(16));
        }
    }

    #[test]
    fn starts_hidden() {
        let panel = SlidePanel::new(&FxConfig::default());
        assert_eq!(panel.state(), SlideState::Hidden);
        assert_eq!(panel.progress(), 0.0);
        assert!(!panel.is_animating());
    }

    #[test]
    fn toggle_opens_then_hides() {
        let mut panel = SlidePanel::new(&FxConfig::default());
        panel.toggle();
        assert_eq!(panel.state(), SlideState::Opening);
        settle(&mut panel);
        assert_eq!(panel.state(), SlideState::Open);
        assert_eq!(panel.progress(), 1.0);

        panel.toggle();
        assert_eq!(panel.state(), SlideState::Closing);
        settle(&mut panel);
        assert_eq!(panel.state(), SlideState::Hidden);
        assert_eq!(panel.progress(), 0.0);
    }

    #[test]
    fn even_toggle_count_settles_hidden() {
        let mut panel = SlidePanel::new(&FxConfig::default());
        for _ in 0..4 {
            panel.toggle();
            settle(&mut panel);
        }
        assert_eq!(panel.state(), SlideState::Hidden);
    }

    #[test]
    fn midflight_toggle_reverses_without_snap() {
        let mut panel = SlidePanel::new(&FxConfig::default());
        panel.toggle();
        panel.tick(Duration::from_millis(100));
        let mid = panel.progress();
        assert!(mid > 0.0 && mid < 1.0);

        panel.toggle();
        assert_eq!(panel.state(), SlideState::Closing);
        assert_eq!(panel.progress(), mid);
        settle(&mut panel);
        assert_eq!(panel.state(), SlideState::Hidden);
    }
}
