//! Scroll progress of an element through the viewport.

use serde::Deserialize;

/// Element bounds relative to the viewport top, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

/// Progress for the offset pair `["start start", "end end"]`.
///
/// `0` when the element's top sits at the viewport top, `1` when its bottom
/// sits at the viewport bottom. The result is clamped to `[0, 1]`. A zero
/// scroll range reports `1`.
pub fn scroll_progress(element: ElementBox, viewport_height: f64) -> f64 {
    let range = element.height - viewport_height;
    if !element.top.is_finite() || !range.is_finite() {
        return 0.0;
    }
    if range == 0.0 {
        return 1.0;
    }
    (-element.top / range).clamp(0.0, 1.0)
}
