use itinerary_lib::profile::TripProfile;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct HeaderProps {
    pub profile: TripProfile,
    pub on_back: Callback<()>,
}

#[function_component]
pub fn Header(props: &HeaderProps) -> Html {
    let on_back = props.on_back.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_back.emit(()));
    let profile = &props.profile;

    html! {
        <div class="header">
            <button class="back-btn" onclick={onclick}>{"←"}</button>
            <div>
                <h1 class="display">
                    <span class="header-title">{profile.title.clone()}</span>
                    <span class="header-accent">{profile.accent.clone()}</span>
                </h1>
                <p class="header-tagline">{profile.tagline.clone()}</p>
            </div>
            <div class="badges">
                { for profile.badges.iter().map(|badge| html! { <span class="badge">{badge.clone()}</span> }) }
            </div>
        </div>
    }
}
