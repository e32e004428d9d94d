use std::rc::Rc;

use itinerary_lib::{
    catalog::Catalog,
    checklist::ChecklistState,
    day::Day,
    food::FoodItem,
    selection::Tab,
    store::Action,
    trip::{Trip, TripId},
};
use yew::prelude::*;

use crate::util::category_glyph;

pub struct Panel {}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub catalog: Rc<Catalog>,
    pub trip: TripId,
    pub tab: Tab,
    pub open_day: Option<u32>,
    /// Activity shown on the map for the open day, explicit or defaulted.
    pub current_index: Option<usize>,
    pub selected_hotel: Option<String>,
    pub highlighted: Option<String>,
    pub checklist: ChecklistState,
    pub on_action: Callback<Action>,
}

impl Panel {
    fn tabs(&self, ctx: &Context<Self>) -> Html {
        let active = ctx.props().tab;

        html! {
            <div class="tabs">
                { for Tab::ALL.into_iter().map(|tab| {
                    let onclick = ctx.props().on_action.reform(move |_: MouseEvent| Action::SelectTab(tab));
                    html! {
                        <button class={classes!("tab", (tab == active).then_some("active"))} onclick={onclick}>
                            {tab.label()}
                        </button>
                    }
                }) }
            </div>
        }
    }

    fn itinerary(&self, ctx: &Context<Self>, trip: &Trip) -> Html {
        let notes = &trip.profile.notes;

        html! { <>
            if !notes.is_empty() {
                <div class="card notes">
                    <h3 class="display">{"Pre-Trip Logistics"}</h3>
                    { for notes.iter().map(|note| html! { <p>{note.clone()}</p> }) }
                </div>
            }
            { for trip.days.iter().map(|day| self.day_card(ctx, day)) }
        </> }
    }

    fn day_card(&self, ctx: &Context<Self>, day: &Day) -> Html {
        let props = ctx.props();
        let number = day.day;
        let open = props.open_day == Some(number);
        let on_toggle = ctx.props().on_action.reform(move |_: MouseEvent| Action::ToggleDay(number));

        html! {
            <div class={classes!("card", "day-card", open.then_some("open"))}>
                <div class="day-header" onclick={on_toggle}>
                    <div>
                        <span class="day-dot" style={format!("background-color: {};", day.color)} />
                        <span class="day-number display">{format!("DAY {}", number)}</span>
                        <span class="day-date">{format!("• {}", day.date)}</span>
                        <h3>{day.title.clone()}</h3>
                    </div>
                    <span class={classes!("chevron", open.then_some("rotated"))}>{"›"}</span>
                </div>
                if open {
                    <div class="activities">
                        { for day.activities.iter().enumerate().map(|(index, activity)| {
                            let active = props.current_index == Some(index);
                            let onclick = ctx.props().on_action.reform(move |_: MouseEvent| Action::SelectActivity(index));
                            html! {
                                <div class={classes!("activity", active.then_some("active"))} onclick={onclick}>
                                    <span class="activity-icon" style={format!("color: {};", day.color)}>
                                        {category_glyph(activity.category)}
                                    </span>
                                    <div>
                                        <p class="activity-name">
                                            {activity.name.clone()}
                                            <a href={activity.search_url()}
                                               target="_blank"
                                               rel="noopener noreferrer"
                                               onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                                                {"↗"}
                                            </a>
                                        </p>
                                        <p class="activity-time">{activity.time.clone()}</p>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                }
            </div>
        }
    }

    fn hotels(&self, ctx: &Context<Self>, trip: &Trip) -> Html {
        let selected = ctx.props().selected_hotel.as_deref();

        html! { <>
            { for trip.hotels.iter().map(|hotel| {
                let location_id = hotel.location_id.clone();
                let onclick = ctx.props().on_action.reform(move |_: MouseEvent| Action::ToggleHotel(location_id.clone()));
                let active = selected == Some(hotel.location_id.as_str());
                html! {
                    <div class={classes!("card", "hotel-card", active.then_some("active"))} onclick={onclick}>
                        <span class="hotel-icon" style={format!("color: {};", hotel.color)}>
                            {category_glyph(hotel.category)}
                        </span>
                        <div>
                            <h3>{hotel.name.clone()}</h3>
                            <p class="hotel-area">{hotel.area.clone()}</p>
                            <span class="hotel-dates">{hotel.dates.clone()}</span>
                            <span class="hotel-room">{hotel.room.clone()}</span>
                        </div>
                    </div>
                }
            }) }
        </> }
    }

    fn food(&self, ctx: &Context<Self>, trip: &Trip) -> Html {
        html! { <>
            { for trip.food.iter().map(|category| html! {
                <div class="card food-card">
                    <h3 class="display">{category.name.clone()}</h3>
                    { for category.items.iter().map(|item| self.food_item(ctx, item)) }
                </div>
            }) }
        </> }
    }

    fn food_item(&self, ctx: &Context<Self>, item: &FoodItem) -> Html {
        let highlighted = item.location_id.is_some()
            && ctx.props().highlighted.as_deref() == item.location_id.as_deref();
        let onclick = item.location_id.clone().map(|location_id| {
            ctx.props()
                .on_action
                .reform(move |_: MouseEvent| Action::HighlightLocation(Some(location_id.clone())))
        });

        html! {
            <div class={classes!("food-item", onclick.is_some().then_some("clickable"), highlighted.then_some("active"))}
                 onclick={onclick}>
                <p class="food-name">{item.name.clone()}</p>
                if let Some(description) = &item.description {
                    <p class="food-detail">{description.clone()}</p>
                }
                if let Some(area) = &item.area {
                    <p class="food-detail">{area.clone()}</p>
                }
            </div>
        }
    }

    fn checklist(&self, ctx: &Context<Self>, trip: &Trip) -> Html {
        let state = &ctx.props().checklist;
        let (done, total) = state.progress();

        html! {
            <div class="card checklist">
                <h3 class="display">{format!("Pre-Trip Checklist ({done}/{total})")}</h3>
                { for trip.checklist.iter().map(|item| {
                    let checked = state.is_checked(&item.id);
                    let id = item.id.clone();
                    let onclick = ctx.props().on_action.reform(move |_: MouseEvent| Action::ToggleChecklistItem(id.clone()));
                    html! {
                        <div class={classes!("checklist-item", checked.then_some("checked"))} onclick={onclick}>
                            <span class="checkbox">{if checked { "☑" } else { "☐" }}</span>
                            <span class="checklist-label">{item.label.clone()}</span>
                        </div>
                    }
                }) }
            </div>
        }
    }
}

impl Component for Panel {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Panel {}
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let trip = props.catalog.trip(props.trip);

        let content = match props.tab {
            Tab::Itinerary => self.itinerary(ctx, trip),
            Tab::Hotels => self.hotels(ctx, trip),
            Tab::Food => self.food(ctx, trip),
            Tab::Checklist => self.checklist(ctx, trip),
        };

        html! {
            <div class="panel">
                {self.tabs(ctx)}
                <div class="panel-content">
                    {content}
                </div>
            </div>
        }
    }
}
