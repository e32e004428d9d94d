use itinerary_lib::location::RelativePosition;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub background_image: String,
    pub marker: Option<RelativePosition>,
    /// Secondary pin for a selected hotel or food place.
    pub pin: Option<RelativePosition>,
    pub color: String,
}

/// Static background image with a marker placed in percent of its size.
/// A missing image leaves the themed background colour in its place.
#[function_component]
pub fn IllustrativeMap(props: &Props) -> Html {
    let image_failed = use_state(|| false);

    let onerror = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| image_failed.set(true))
    };

    html! {
        <div class="illustrative-map">
            if !*image_failed {
                <img class="illustrative-bg" src={props.background_image.clone()} alt="" onerror={onerror} />
            }
            <div class="illustrative-shade" />
            if let Some(position) = props.marker {
                <div class="marker" style={format!("{} --marker-color: {};", position.to_css(), props.color)}>
                    <div class="marker-glow" />
                    <div class="marker-ring" />
                    <div class="marker-dot" />
                </div>
            }
            if let (None, Some(position)) = (props.marker, props.pin) {
                <div class="pin" style={position.to_css()}>{"📍"}</div>
            }
        </div>
    }
}
