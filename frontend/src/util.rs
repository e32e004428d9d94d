use std::fmt::Display;

use gloo_console::error;
use itinerary_lib::day::ActivityCategory;
use wasm_bindgen::JsValue;
use web_sys::js_sys::Reflect;

pub fn category_glyph(category: ActivityCategory) -> &'static str {
    match category {
        ActivityCategory::Sunrise => "🌅",
        ActivityCategory::Sunset => "🌇",
        ActivityCategory::Lodging => "🏨",
        ActivityCategory::Water => "🌊",
        ActivityCategory::Mountain => "⛰",
        ActivityCategory::Nature => "🌴",
        ActivityCategory::Cafe => "☕",
        ActivityCategory::Ride => "🚲",
        ActivityCategory::Fire => "🔥",
        ActivityCategory::Highlight => "✨",
        ActivityCategory::Transit => "⚡",
        ActivityCategory::Race => "🏁",
        ActivityCategory::Photo => "📷",
        ActivityCategory::Viewing => "👁",
        ActivityCategory::Safety => "🛡",
        ActivityCategory::Walking => "👣",
        ActivityCategory::Dining => "🍴",
    }
}

/// The UI only offers valid choices, so a rejected action is a bug.
/// Debug builds stop on it, release builds log it and keep running.
pub fn report_violation(err: impl Display) {
    if cfg!(debug_assertions) {
        panic!("Rejected action: {err}");
    }
    error!(format!("Rejected action: {err}"));
}

/// Whether the Leaflet script (global `L`) made it onto the page.
pub fn leaflet_available() -> bool {
    Reflect::has(&gloo_utils::window(), &JsValue::from_str("L")).unwrap_or(false)
}
