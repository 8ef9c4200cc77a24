// ============================================================================
// MAP MODAL COMPONENT
// ============================================================================
// Owns the Leaflet map lifecycle: init on first render, overlays on prop
// changes, teardown on close
// ============================================================================

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::map::{self, collection_styles, RouteOverlay};
use crate::models::{FeatureCollection, RouteResult};
use crate::utils::constants::MAP_CONTAINER_ID;

#[derive(Properties, PartialEq)]
pub struct MapModalProps {
    pub geojson: Option<FeatureCollection>,
    pub route: Option<RouteResult>,
    pub on_close: Callback<()>,
}

pub enum Msg {
    Close,
    MapReady,
}

pub struct MapModal {
    map_ready: bool,
}

impl Component for MapModal {
    type Message = Msg;
    type Properties = MapModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { map_ready: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Close => {
                ctx.props().on_close.emit(());
                false
            }
            Msg::MapReady => {
                self.map_ready = true;
                self.push_overlays(ctx.props(), true);
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if self.map_ready {
            // Refit only when the collection itself changed, route updates
            // keep the current viewport
            let refit = old_props.geojson != ctx.props().geojson;
            self.push_overlays(ctx.props(), refit);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();

            // Let the modal lay out before Leaflet attaches to the container
            Timeout::new(100, move || {
                log::info!("🗺️ Initializing campus map");
                map::init_campus_map(
                    MAP_CONTAINER_ID,
                    CONFIG.map_config.default_center_lat,
                    CONFIG.map_config.default_center_lng,
                    CONFIG.map_config.default_zoom,
                );
                map::invalidate_map_size();
                link.send_message(Msg::MapReady);
            })
            .forget();
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        map::destroy_campus_map();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = ctx.props().geojson.is_none();

        html! {
            <div class="modal active">
                <div class="modal-overlay" onclick={ctx.link().callback(|_| Msg::Close)}></div>
                <div class="modal-content map-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <div class="modal-header">
                        <h2>{"Campus Map"}</h2>
                        <button
                            class="btn-close"
                            onclick={ctx.link().callback(|_| Msg::Close)}
                        >
                            {"✕"}
                        </button>
                    </div>

                    <div class="modal-body map-body">
                        <div id={MAP_CONTAINER_ID} class="map-container"></div>
                        {
                            if loading {
                                html! {
                                    <div class="map-loading">
                                        <p>{"Loading map..."}</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </div>
        }
    }
}

impl MapModal {
    /// Push the feature collection, styles, bounds and route to the JS glue
    fn push_overlays(&self, props: &MapModalProps, refit: bool) {
        let Some(collection) = &props.geojson else {
            return;
        };

        let styles = collection_styles(collection, props.route.as_ref());
        let geojson_json = serde_json::to_string(collection).unwrap_or_default();
        let styles_json = serde_json::to_string(&styles).unwrap_or_default();
        map::set_campus_geojson(&geojson_json, &styles_json);

        if refit {
            if let Some(bounds) = collection.bounds() {
                let bounds_json = serde_json::to_string(&bounds).unwrap_or_default();
                map::fit_map_bounds(&bounds_json, CONFIG.ui_config.fit_bounds_padding);
            }
        }

        match &props.route {
            Some(route) if !route.path.is_empty() => {
                let overlay = RouteOverlay::from_route(route);
                map::draw_route(&serde_json::to_string(&overlay).unwrap_or_default());
            }
            _ => map::clear_route(),
        }
    }
}
