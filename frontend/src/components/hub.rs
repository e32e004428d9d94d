use std::rc::Rc;

use itinerary_lib::{catalog::Catalog, trip::{Trip, TripId}};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct HubProps {
    pub catalog: Rc<Catalog>,
    pub on_select: Callback<TripId>,
}

#[function_component]
pub fn Hub(props: &HubProps) -> Html {
    html! {
        <div class="hub">
            <div class="hub-title">
                <h1>{"TRAVEL"}</h1>
                <h2>{"COMMAND CENTER"}</h2>
                <p>{"Select your destination"}</p>
            </div>
            <div class="hub-cards">
                { for props.catalog.trips().map(|trip| trip_card(trip, &props.on_select)) }
            </div>
        </div>
    }
}

fn trip_card(trip: &Trip, on_select: &Callback<TripId>) -> Html {
    let id = trip.id;
    let profile = &trip.profile;
    let onclick = on_select.reform(move |_: MouseEvent| id);

    html! {
        <div class={classes!("trip-card", profile.variant.css_class())}
             style={format!("--accent: {};", profile.accent_color)}
             onclick={onclick}>
            <div class="trip-card-dates">{profile.date_range.clone()}</div>
            <h3>{profile.title.clone()}</h3>
            <p class="trip-card-subtitle">{profile.subtitle.clone()}</p>
            <ul>
                { for profile.highlights.iter().map(|line| html! { <li>{line.clone()}</li> }) }
            </ul>
            <div class="trip-card-launch">{"Launch Trip ›"}</div>
        </div>
    }
}
