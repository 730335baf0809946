#![forbid(unsafe_code)]

//! `wasm-bindgen` exports: event listener wiring and the frame loop.
//!
//! The hosting page constructs a [`HostPane`] once the DOM is ready. Clicks
//! and pointer crossings are translated into [`InteractionEvent`]s; a
//! `requestAnimationFrame` loop ticks the model while any animation is in
//! flight and applies the resulting patches to element styles, then parks
//! itself until the next interaction.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use hostpane_core::FxConfig;
use hostpane_core::model::{InteractionEvent, PageModel, Region, VisualPatch};
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use crate::dom::{PageBindings, computed_opacity};
use crate::style;

/// Upper bound on a single frame delta. Background tabs can starve rAF for
/// seconds; a capped delta fast-forwards the animation instead of warping.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

type RafSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn install_panic_hook() {
    use std::sync::Once;
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let global = js_sys::global();
            if let Ok(console) = js_sys::Reflect::get(&global, &"console".into()) {
                if let Ok(error) = js_sys::Reflect::get(&console, &"error".into()) {
                    if let Ok(f) = error.dyn_into::<js_sys::Function>() {
                        let _ = f.call1(&console, &JsValue::from_str(&format!("{info}")));
                    }
                }
            }
        }));
    });
}

struct Inner {
    model: PageModel,
    bindings: PageBindings,
    /// Panel content height in px, re-measured each time the panel un-hides.
    panel_content_height: f64,
    raf_scheduled: bool,
    last_timestamp: Option<f64>,
}

impl Inner {
    /// One animation frame: convert the timestamp delta to a tick, apply the
    /// resulting patches. Returns whether another frame is needed.
    fn frame(&mut self, timestamp: f64) -> bool {
        let dt = match self.last_timestamp {
            Some(prev) if timestamp > prev => {
                Duration::from_secs_f64((timestamp - prev) / 1000.0).min(MAX_FRAME_DELTA)
            }
            _ => Duration::ZERO,
        };
        self.last_timestamp = Some(timestamp);

        for patch in self.model.tick(dt) {
            self.apply_patch(patch);
        }
        !self.model.is_idle()
    }

    fn apply_patch(&mut self, patch: VisualPatch) {
        match patch {
            VisualPatch::PanelVisible { visible } => {
                if let Some(panel) = &self.bindings.panel {
                    let _ = panel
                        .style()
                        .set_property("display", style::panel_display(visible));
                    if visible {
                        // Only measurable while part of layout.
                        let measured = f64::from(panel.scroll_height());
                        if measured > 0.0 {
                            self.panel_content_height = measured;
                        }
                    }
                }
            }
            VisualPatch::PanelProgress { fraction } => {
                if let Some(panel) = &self.bindings.panel {
                    let _ = panel.style().set_property(
                        "height",
                        &style::panel_height_css(fraction, self.panel_content_height),
                    );
                }
            }
            VisualPatch::RegionOpacity { region, opacity } => {
                let element = match region {
                    Region::Switches => self.bindings.switches.as_ref(),
                    Region::HostServices => self.bindings.host_services.as_ref(),
                };
                if let Some(element) = element {
                    let _ = element
                        .style()
                        .set_property("opacity", &style::opacity_css(opacity));
                }
            }
        }
    }
}

/// Request the next animation frame with the closure stored in `slot`.
fn request_frame(slot: &RafSlot) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = slot.borrow().as_ref() {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Start the frame loop if an animation is in flight and no frame is pending.
fn kick(inner: &Rc<RefCell<Inner>>, slot: &RafSlot) {
    {
        let mut state = inner.borrow_mut();
        if state.raf_scheduled || state.model.is_idle() {
            return;
        }
        state.raf_scheduled = true;
        state.last_timestamp = None;
    }
    request_frame(slot);
}

/// The host-detail page interaction binder.
///
/// Construct once, after DOM construction. Listener closures are leaked into
/// the page (`Closure::forget`) — they live as long as the document, which is
/// as long as this behavior is wanted.
#[wasm_bindgen]
pub struct HostPane {
    inner: Rc<RefCell<Inner>>,
    #[allow(dead_code)]
    raf: RafSlot,
}

#[wasm_bindgen]
impl HostPane {
    /// Resolve the page bindings, establish the initial hidden state, and
    /// attach all listeners. Missing elements disable their own behavior
    /// only; construction fails only when there is no window/document at all.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<HostPane, JsValue> {
        install_panic_hook();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let bindings = PageBindings::resolve(&document);
        let config = FxConfig::default();

        let mut model = PageModel::new(config);
        if bindings.panel.is_some() {
            model = model.with_panel();
        }
        for (region, element) in [
            (Region::Switches, bindings.switches.as_ref()),
            (Region::HostServices, bindings.host_services.as_ref()),
        ] {
            if let Some(element) = element {
                let initial = computed_opacity(element).unwrap_or(config.faded_opacity);
                model = model.with_region(region, initial);
            }
        }

        // Measure before hiding; scrollHeight reads 0 under display:none.
        let panel_content_height = bindings
            .panel
            .as_ref()
            .map_or(0.0, |p| f64::from(p.scroll_height()));

        let inner = Rc::new(RefCell::new(Inner {
            model,
            bindings,
            panel_content_height,
            raf_scheduled: false,
            last_timestamp: None,
        }));

        // The panel clips its content while sliding.
        if let Some(panel) = &inner.borrow().bindings.panel {
            let _ = panel.style().set_property("overflow", "hidden");
        }
        {
            let mut state = inner.borrow_mut();
            for patch in state.model.initial_patches() {
                state.apply_patch(patch);
            }
        }

        let raf: RafSlot = Rc::new(RefCell::new(None));
        {
            let inner = inner.clone();
            let slot = raf.clone();
            *raf.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
                let keep_going = inner.borrow_mut().frame(timestamp);
                if keep_going {
                    request_frame(&slot);
                } else {
                    let mut state = inner.borrow_mut();
                    state.raf_scheduled = false;
                    state.last_timestamp = None;
                }
            }) as Box<dyn FnMut(f64)>));
        }

        setup_listeners(&inner, &raf);
        debug!("host-detail interactions attached");

        Ok(HostPane { inner, raf })
    }

    /// Whether all animations have settled (the frame loop is parked).
    #[wasm_bindgen(js_name = isIdle)]
    pub fn is_idle(&self) -> bool {
        self.inner.borrow().model.is_idle()
    }
}

fn setup_listeners(inner: &Rc<RefCell<Inner>>, raf: &RafSlot) {
    // Toggle click. prevent_default keeps the control's anchor from
    // navigating.
    if let Some(toggle) = inner.borrow().bindings.toggle.clone() {
        let inner = inner.clone();
        let slot = raf.clone();
        let closure = Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();
            inner.borrow_mut().model.apply(InteractionEvent::ToggleClicked);
            kick(&inner, &slot);
        }));
        let _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    for (region, element) in [
        (Region::Switches, inner.borrow().bindings.switches.clone()),
        (
            Region::HostServices,
            inner.borrow().bindings.host_services.clone(),
        ),
    ] {
        let Some(element) = element else {
            continue;
        };

        for (name, event) in [
            ("mouseenter", InteractionEvent::PointerEnter(region)),
            ("mouseleave", InteractionEvent::PointerLeave(region)),
        ] {
            let inner = inner.clone();
            let slot = raf.clone();
            let closure =
                Closure::<dyn FnMut(MouseEvent)>::wrap(Box::new(move |_event: MouseEvent| {
                    inner.borrow_mut().model.apply(event);
                    kick(&inner, &slot);
                }));
            let _ = element.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}
