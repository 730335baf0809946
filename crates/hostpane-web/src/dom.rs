#![forbid(unsafe_code)]

//! DOM bindings for the host-detail page, resolved once at initialization.
//!
//! Every lookup happens here, up front, so handlers never query the DOM and
//! the absent-element case is a visible `None` instead of a failed lookup
//! deep inside a callback. Missing elements are warned about and skipped;
//! resolution itself never fails.

use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// The fixed set of elements the page contract provides.
#[derive(Debug, Clone, Default)]
pub struct PageBindings {
    /// `#advanced_actions` — the slide-revealed panel.
    pub panel: Option<HtmlElement>,
    /// `#toggle_advanced_actions` — the toggle control.
    pub toggle: Option<HtmlElement>,
    /// First `.switches` — the switches action cluster.
    pub switches: Option<HtmlElement>,
    /// First `.host-services` — the host-services action cluster.
    pub host_services: Option<HtmlElement>,
}

impl PageBindings {
    /// Resolve all bindings against `document`. Absent elements resolve to
    /// `None` with a warning.
    #[must_use]
    pub fn resolve(document: &Document) -> Self {
        Self {
            panel: by_id(document, "advanced_actions"),
            toggle: by_id(document, "toggle_advanced_actions"),
            switches: by_selector(document, ".switches"),
            host_services: by_selector(document, ".host-services"),
        }
    }
}

fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    let Some(element) = document.get_element_by_id(id) else {
        warn!(id, "element not found; its behavior is disabled");
        return None;
    };
    match element.dyn_into::<HtmlElement>() {
        Ok(el) => Some(el),
        Err(_) => {
            warn!(id, "element is not an HtmlElement; its behavior is disabled");
            None
        }
    }
}

fn by_selector(document: &Document, selector: &str) -> Option<HtmlElement> {
    let found = document.query_selector(selector).ok().flatten();
    let Some(element) = found else {
        warn!(selector, "element not found; its behavior is disabled");
        return None;
    };
    element.dyn_into::<HtmlElement>().ok()
}

/// Read an element's computed opacity, the seed for its hover fader.
///
/// Returns `None` when the computed style is unavailable or unparseable
/// (the caller falls back to the configured faded bound).
#[must_use]
pub fn computed_opacity(element: &HtmlElement) -> Option<f32> {
    let style = web_sys::window()?.get_computed_style(element).ok()??;
    style.get_property_value("opacity").ok()?.parse().ok()
}
