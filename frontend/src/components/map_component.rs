use gloo_console::{info, warn};
use gloo_utils::document;
use itinerary_lib::{
    location::GeoPoint,
    projection::{ActivityKey, GeodeticMarker, GeodeticView, should_fly},
};
use leaflet::{
    LatLng, Map, MapOptions, Marker, Polyline, PolylineOptions, Popup, PopupOptions, TileLayer,
    TileLayerOptions,
};
use wasm_bindgen::{JsCast, JsValue, prelude::wasm_bindgen};
use web_sys::{
    HtmlElement, Node,
    js_sys::{Array, Object, Reflect},
};
use yew::prelude::*;

use crate::util::leaflet_available;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(thread_local_v2)]
    static TOLERANT_RENDERER: JsValue;
}

struct LeafletMap {
    map: Map,
    container: HtmlElement,
    marker: Option<Marker>,
    route: Option<Polyline>,
}

pub struct MapComponent {
    leaflet: Option<LeafletMap>,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub view: GeodeticView,
    /// A change of key makes the map fly to the new centre.
    pub activity: Option<ActivityKey>,
    pub route: Vec<GeoPoint>,
    pub route_color: String,
    pub tile_url: String,
    pub attribution: String,
    pub fly_duration: f64,
}

impl LeafletMap {
    fn create() -> Option<Self> {
        if !leaflet_available() {
            warn!("Leaflet is not loaded, the GPS map is unavailable");
            return None;
        }

        let container: HtmlElement = document().create_element("div").ok()?.dyn_into().ok()?;
        container.set_class_name("map");
        let map = Map::new_with_element(&container, &MapOptions::default());

        Some(Self {
            map,
            container,
            marker: None,
            route: None,
        })
    }

    fn add_tile_layer(&self, props: &Props) {
        let opts = TileLayerOptions::new();
        opts.set_attribution(props.attribution.clone());
        opts.set_update_when_idle(true);
        TileLayer::new_options(&props.tile_url, &opts).add_to(&self.map);
    }

    fn fly_to(&self, center: GeoPoint, zoom: f64, duration: f64) {
        let options = Object::new();
        if Reflect::set(&options, &JsValue::from_str("duration"), &JsValue::from_f64(duration)).is_err() {
            self.map.set_view(&lat_lng(center), zoom);
            return;
        }
        self.map.fly_to_with_options(&lat_lng(center), zoom, &options);
    }

    fn sync_marker(&mut self, marker: Option<&GeodeticMarker>) {
        if let Some(old) = self.marker.take() {
            old.remove();
        }

        if let Some(marker) = marker {
            let popup = Popup::new(&PopupOptions::default(), None);
            popup.set_content(&marker.popup.to_html().into());

            let pin = Marker::new(&lat_lng(marker.position));
            pin.bind_popup(&popup);
            pin.add_to(&self.map);
            self.marker = Some(pin);
        }
    }

    fn sync_route(&mut self, route: &[GeoPoint], color: &str) {
        if let Some(old) = self.route.take() {
            old.remove();
        }

        if route.len() < 2 {
            return;
        }

        let opts = PolylineOptions::new();
        opts.set_color(color.to_owned());
        opts.set_weight(4.0);
        opts.set_smooth_factor(1.5);
        opts.set_renderer(TOLERANT_RENDERER.with(JsValue::clone));

        let points = route.iter().copied().map(lat_lng);
        let polyline = Polyline::new_with_options(&Array::from_iter(points), &opts);
        polyline.add_to(&self.map);
        self.route = Some(polyline);
    }
}

impl MapComponent {
    fn render_map(&self) -> Html {
        match &self.leaflet {
            Some(leaflet) => {
                let node: &Node = &leaflet.container.clone().into();
                Html::VRef(node.clone())
            }
            None => html! {
                <div class="map-unavailable">
                    <p>{"The GPS map could not be loaded. Switch to the Vibe Map to keep browsing."}</p>
                </div>
            },
        }
    }
}

impl Component for MapComponent {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            leaflet: LeafletMap::create(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(leaflet) = &mut self.leaflet else {
            return;
        };

        let props = ctx.props();
        leaflet.map.set_view(&lat_lng(props.view.center), props.view.zoom);
        leaflet.add_tile_layer(props);
        leaflet.sync_marker(props.view.marker.as_ref());
        leaflet.sync_route(&props.route, &props.route_color);
        leaflet.map.invalidate_size(false);
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let Some(leaflet) = &mut self.leaflet else {
            return false;
        };
        leaflet.map.invalidate_size(false);
        let props = ctx.props();

        if should_fly(old_props.activity, props.activity) {
            info!(format!("Flying to {:?}", props.activity));
            leaflet.fly_to(props.view.center, props.view.zoom, props.fly_duration);
        }

        if props.view.marker != old_props.view.marker {
            leaflet.sync_marker(props.view.marker.as_ref());
        }

        if props.route != old_props.route || props.route_color != old_props.route_color {
            leaflet.sync_route(&props.route, &props.route_color);
        }

        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="map">
                {self.render_map()}
            </div>
        }
    }
}

fn lat_lng(point: GeoPoint) -> LatLng {
    LatLng::new(point.lat, point.lng)
}
