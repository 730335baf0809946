#![forbid(unsafe_code)]

//! Page-level interaction model.
//!
//! [`PageModel`] composes the slide panel and the per-region hover faders.
//! The host pushes [`InteractionEvent`]s as DOM events arrive, then ticks the
//! model once per animation frame; each tick returns the [`VisualPatch`]es
//! whose values changed since the last tick.
//!
//! Panel and regions are individually optional. A page missing any of them
//! still yields a working model for the rest; events addressed to an absent
//! part are no-ops. Whether to diagnose the absence is the binding layer's
//! concern, not the model's.
//!
//! # Invariants
//!
//! 1. `tick()` emits a patch only when the corresponding value changed.
//! 2. `PanelVisible` is emitted exactly when the panel crosses the
//!    hidden/non-hidden edge. The show edge precedes any `PanelProgress`
//!    patch of its tick (the host must restore layout before sizing); the
//!    hide edge follows the final one.
//! 3. The two regions never affect each other's opacity.
//! 4. `is_idle()` implies a subsequent `tick()` emits nothing until the next
//!    event.

use std::time::Duration;

#[cfg(feature = "tracing")]
use tracing::debug;

use crate::config::FxConfig;
use crate::hover::HoverFader;
use crate::slide::{SlidePanel, SlideState};

/// The two independently faded action-button regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The switches cluster.
    Switches,
    /// The host-services cluster.
    HostServices,
}

/// An interaction pushed by the host as DOM events arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    /// The advanced-actions toggle control was clicked.
    ToggleClicked,
    /// The pointer entered a region.
    PointerEnter(Region),
    /// The pointer left a region.
    PointerLeave(Region),
}

/// A style mutation for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualPatch {
    /// Revealed height fraction of the panel, in `[0.0, 1.0]`.
    PanelProgress {
        /// Fraction of the panel's content height to reveal.
        fraction: f32,
    },
    /// The panel crossed the hidden/non-hidden edge.
    PanelVisible {
        /// `false` means the panel can be removed from layout entirely.
        visible: bool,
    },
    /// A region's opacity changed.
    RegionOpacity {
        /// Which region to update.
        region: Region,
        /// New opacity in `[0.0, 1.0]`.
        opacity: f32,
    },
}

struct RegionFader {
    fader: HoverFader,
    last_emitted: f32,
}

/// Host-driven model of the whole page's interactive behavior.
pub struct PageModel {
    config: FxConfig,
    panel: Option<SlidePanel>,
    switches: Option<RegionFader>,
    host_services: Option<RegionFader>,
    last_progress: f32,
    last_visible: bool,
}

impl std::fmt::Debug for PageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageModel")
            .field("has_panel", &self.panel.is_some())
            .field("has_switches", &self.switches.is_some())
            .field("has_host_services", &self.host_services.is_some())
            .field("panel_state", &self.panel.as_ref().map(SlidePanel::state))
            .finish()
    }
}

impl PageModel {
    /// Create a model with no panel and no regions; attach parts with the
    /// `with_*` builders as the page's bindings resolve.
    #[must_use]
    pub fn new(config: FxConfig) -> Self {
        Self {
            config,
            panel: None,
            switches: None,
            host_services: None,
            last_progress: 0.0,
            last_visible: false,
        }
    }

    /// Attach the slide panel (builder pattern). Starts hidden.
    #[must_use]
    pub fn with_panel(mut self) -> Self {
        self.panel = Some(SlidePanel::new(&self.config));
        self
    }

    /// Attach a region fader seeded with its stylesheet opacity
    /// (builder pattern).
    #[must_use]
    pub fn with_region(mut self, region: Region, initial_opacity: f32) -> Self {
        let fader = HoverFader::new(initial_opacity, &self.config);
        let slot = RegionFader {
            last_emitted: fader.opacity(),
            fader,
        };
        match region {
            Region::Switches => self.switches = Some(slot),
            Region::HostServices => self.host_services = Some(slot),
        }
        self
    }

    /// Patches establishing the initial state: the panel, if present, starts
    /// hidden. Regions are left to their stylesheet opacity.
    #[must_use]
    pub fn initial_patches(&self) -> Vec<VisualPatch> {
        if self.panel.is_some() {
            vec![
                VisualPatch::PanelVisible { visible: false },
                VisualPatch::PanelProgress { fraction: 0.0 },
            ]
        } else {
            Vec::new()
        }
    }

    /// Apply an interaction event. Events addressed to an absent panel or
    /// region are no-ops.
    pub fn apply(&mut self, event: InteractionEvent) {
        #[cfg(feature = "tracing")]
        debug!(?event, "interaction");
        match event {
            InteractionEvent::ToggleClicked => {
                if let Some(panel) = &mut self.panel {
                    panel.toggle();
                }
            }
            InteractionEvent::PointerEnter(region) => {
                if let Some(slot) = self.region_mut(region) {
                    slot.fader.pointer_enter();
                }
            }
            InteractionEvent::PointerLeave(region) => {
                if let Some(slot) = self.region_mut(region) {
                    slot.fader.pointer_leave();
                }
            }
        }
    }

    /// Advance all animations by `dt` and return the patches whose values
    /// changed.
    pub fn tick(&mut self, dt: Duration) -> Vec<VisualPatch> {
        let mut patches = Vec::new();

        if let Some(panel) = &mut self.panel {
            panel.tick(dt);
            let visible = panel.state() != SlideState::Hidden;
            let crossed = visible != self.last_visible;
            self.last_visible = visible;
            if crossed && visible {
                patches.push(VisualPatch::PanelVisible { visible: true });
            }
            let progress = panel.progress();
            if progress != self.last_progress {
                self.last_progress = progress;
                patches.push(VisualPatch::PanelProgress { fraction: progress });
            }
            if crossed && !visible {
                patches.push(VisualPatch::PanelVisible { visible: false });
            }
        }

        for region in [Region::Switches, Region::HostServices] {
            if let Some(slot) = self.region_mut(region) {
                slot.fader.tick(dt);
                let opacity = slot.fader.opacity();
                if opacity != slot.last_emitted {
                    slot.last_emitted = opacity;
                    patches.push(VisualPatch::RegionOpacity { region, opacity });
                }
            }
        }

        patches
    }

    /// Whether no animation is in flight. Lets the host park its frame loop
    /// until the next interaction.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        let panel_idle = self.panel.as_ref().is_none_or(|p| !p.is_animating());
        let switches_idle = self
            .switches
            .as_ref()
            .is_none_or(|s| !s.fader.is_animating());
        let services_idle = self
            .host_services
            .as_ref()
            .is_none_or(|s| !s.fader.is_animating());
        panel_idle && switches_idle && services_idle
    }

    /// Panel state, if a panel is attached.
    #[must_use]
    pub fn panel_state(&self) -> Option<SlideState> {
        self.panel.as_ref().map(SlidePanel::state)
    }

    /// A region's current opacity, if that region is attached.
    #[must_use]
    pub fn region_opacity(&self, region: Region) -> Option<f32> {
        match region {
            Region::Switches => self.switches.as_ref(),
            Region::HostServices => self.host_services.as_ref(),
        }
        .map(|slot| slot.fader.opacity())
    }

    fn region_mut(&mut self, region: Region) -> Option<&mut RegionFader> {
        match region {
            Region::Switches => self.switches.as_mut(),
            Region::HostServices => self.host_services.as_mut(),
        }
    }
}
