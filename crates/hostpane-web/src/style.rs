#![forbid(unsafe_code)]

//! Patch-to-CSS formatting.
//!
//! Kept free of `web-sys` so the write path is unit-testable off wasm. The
//! wasm layer feeds these strings straight into `CssStyleDeclaration`.

/// CSS value for a region's opacity. Clamped to `[0.0, 1.0]`.
#[must_use]
pub fn opacity_css(opacity: f32) -> String {
    format!("{}", opacity.clamp(0.0, 1.0))
}

/// CSS height for the panel at `fraction` of its content height.
///
/// Rounded to whole pixels; sub-pixel heights just shimmer.
#[must_use]
pub fn panel_height_css(fraction: f32, content_height_px: f64) -> String {
    let px = (f64::from(fraction.clamp(0.0, 1.0)) * content_height_px.max(0.0)).round();
    format!("{px}px")
}

/// CSS `display` value for the panel's visibility edge. An empty string
/// clears the inline override and falls back to the stylesheet.
#[must_use]
pub fn panel_display(visible: bool) -> &'static str {
    if visible { "" } else { "none" }
}
