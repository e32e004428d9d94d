use itinerary_lib::{projection::OverlayInfo, selection::MapMode};
use yew::prelude::*;

/// Info card in the bottom-left corner of the map.
pub fn overlay_card(info: OverlayInfo<'_>, mode: MapMode) -> Html {
    let glyph = match mode {
        MapMode::Illustrative => "●",
        MapMode::Geodetic => "➤",
    };

    match info {
        OverlayInfo::Activity { day, activity } => html! {
            <div class="overlay-card">
                <div class="overlay-heading">
                    <span class="overlay-dot" style={format!("color: {};", day.color)}>{glyph}</span>
                    <h3 class="display">{format!("Day {}", day.day)}</h3>
                </div>
                <p class="overlay-name">{activity.name.clone()}</p>
                <p class="overlay-detail">{activity.time.clone()}</p>
            </div>
        },
        OverlayInfo::Hotel { hotel } => html! {
            <div class="overlay-card">
                <div class="overlay-heading">
                    <span class="overlay-dot" style={format!("color: {};", hotel.color)}>{"🏨"}</span>
                    <h3 class="display">{"Hotel Selected"}</h3>
                </div>
                <p class="overlay-name">{hotel.name.clone()}</p>
                <p class="overlay-detail">{hotel.area.clone()}</p>
            </div>
        },
        OverlayInfo::Place { location } => html! {
            <div class="overlay-card">
                <div class="overlay-heading">
                    <span class="overlay-dot">{"📍"}</span>
                    <h3 class="display">{"Nearby"}</h3>
                </div>
                <p class="overlay-name">{location.name.clone()}</p>
            </div>
        },
        OverlayInfo::Prompt(prompt) => html! {
            <div class="overlay-card overlay-prompt">
                <p>{prompt.to_owned()}</p>
            </div>
        },
    }
}
