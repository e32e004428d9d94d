use crate::components::{
    header::Header,
    hub::Hub,
    illustrative_map::IllustrativeMap,
    map_component::MapComponent,
    overlay::overlay_card,
    panel::Panel,
};
use gloo_console::{error, info};
use itinerary_lib::{
    location::GeoPoint,
    projection::ViewProjection,
    selection::MapMode,
    store::{Action, Store},
    trip::TripId,
};
use yew::prelude::*;

mod components;
mod util;

enum MainMsg {
    Dispatch(Action),
    ToggleCollapsed,
}

struct Model {
    store: Result<Store, String>,
    collapsed: bool,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let store = Store::load().map_err(|err| {
            error!(format!("Failed to load trips: {err}"));
            err.to_string()
        });

        Self {
            store,
            collapsed: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::Dispatch(action) => {
                let Ok(store) = &mut self.store else {
                    return false;
                };
                info!(format!("Action: {:?}", action));
                if let Err(err) = store.dispatch(action) {
                    util::report_violation(err);
                    return false;
                }
            }
            MainMsg::ToggleCollapsed => {
                self.collapsed = !self.collapsed;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let store = match &self.store {
            Ok(store) => store,
            Err(err) => {
                return html! {
                    <div class="load-error">
                        <h1>{"Trips could not be loaded"}</h1>
                        <p>{err.clone()}</p>
                    </div>
                };
            }
        };

        let on_action = ctx.link().callback(MainMsg::Dispatch);

        let Some(view) = store.projection() else {
            let on_select = on_action.reform(|trip: TripId| Action::SelectTrip(Some(trip)));
            return html! { <Hub catalog={store.catalog().clone()} on_select={on_select} /> };
        };

        let trip = view.trip;
        let selection = store.selection();
        let collapsed = self.collapsed;
        let on_collapse = ctx.link().callback(|()| MainMsg::ToggleCollapsed);

        html! {
            <div class={classes!("detail", trip.profile.variant.css_class())}
                 style={format!("--display-font: '{}';", trip.profile.display_font)}>
                <Header
                    profile={trip.profile.clone()}
                    on_back={on_action.reform(|()| Action::SelectTrip(None))}
                />
                <div class="detail-body">
                    <div class="map-area">
                        <MapModeToggle mode={selection.map_mode()} on_action={on_action.clone()} />
                        {render_map(&view, selection.map_mode())}
                        {overlay_card(view.overlay(), selection.map_mode())}
                    </div>
                    if !collapsed {
                        <Panel
                            catalog={store.catalog().clone()}
                            trip={trip.id}
                            tab={selection.active_tab()}
                            open_day={selection.selected_day()}
                            current_index={view.current_index}
                            selected_hotel={selection.selected_hotel().map(str::to_owned)}
                            highlighted={selection.highlighted_location().map(str::to_owned)}
                            checklist={store.active_checklist().cloned().unwrap_or_default()}
                            on_action={on_action.clone()}
                        />
                    }
                    <CollapseBtn collapsed={collapsed} on_click={on_collapse} />
                </div>
            </div>
        }
    }
}

fn render_map(view: &ViewProjection<'_>, mode: MapMode) -> Html {
    let trip = view.trip;
    let accent = view
        .active_day
        .map(|day| day.color.clone())
        .unwrap_or_else(|| trip.profile.accent_color.clone());

    match mode {
        MapMode::Illustrative => {
            // Hotels and food places get a pin of their own when no activity is shown.
            let pin = view
                .hotel_location()
                .or(view.highlighted_location)
                .map(|location| location.position);

            html! {
                <IllustrativeMap
                    key={trip.id.to_string()}
                    background_image={trip.map.background_image.clone()}
                    marker={view.illustrative_position}
                    pin={pin}
                    color={accent}
                />
            }
        }
        MapMode::Geodetic => {
            let route: Vec<GeoPoint> = view.route().points().map(GeoPoint::from).collect();

            html! {
                <MapComponent
                    key={trip.id.to_string()}
                    view={view.geodetic_view()}
                    activity={view.activity_key()}
                    route={route}
                    route_color={accent}
                    tile_url={trip.map.tile_url.clone()}
                    attribution={trip.map.attribution.clone()}
                    fly_duration={trip.map.fly_duration_secs}
                />
            }
        }
    }
}

#[derive(PartialEq, Properties, Clone)]
struct MapModeToggleProps {
    mode: MapMode,
    on_action: Callback<Action>,
}

#[function_component]
fn MapModeToggle(props: &MapModeToggleProps) -> Html {
    let button = |mode: MapMode, label: &'static str| {
        let onclick = props.on_action.reform(move |_: MouseEvent| Action::SetMapMode(mode));
        let active = (props.mode == mode).then_some("active");
        html! {
            <button class={classes!("mode-btn", active)} onclick={onclick}>{label}</button>
        }
    };

    html! {
        <div class="mode-toggle">
            {button(MapMode::Illustrative, "Vibe Map")}
            {button(MapMode::Geodetic, "GPS Map")}
        </div>
    }
}

#[derive(PartialEq, Properties, Clone)]
struct CollapseBtnProps {
    collapsed: bool,
    on_click: Callback<()>,
}

#[function_component]
fn CollapseBtn(props: &CollapseBtnProps) -> Html {
    let on_click_clone = props.on_click.clone();

    let onclick = Callback::from(move |_: MouseEvent| {
        on_click_clone.emit(());
    });

    html! {
        <button onclick={onclick} class="collapse-btn">
            {if props.collapsed { "◀" } else { "▶" }}
        </button>
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
