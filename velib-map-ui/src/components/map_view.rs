//! Leaflet map container and the effects that keep it in sync.

use crate::js_bridge;
use crate::loaders::start_polling;
use crate::state::AppState;
use dioxus::prelude::*;
use futures::StreamExt;
use velib_map::marker::SelectTarget;
use velib_map::Selection;

/// DOM id of the Leaflet container.
pub const MAP_CONTAINER_ID: &str = "map";

/// The map itself. Mounting it starts polling.
#[component]
pub fn MapView() -> Element {
    let mut state = use_context::<AppState>();

    // Marker clicks arrive from JS; resolve them on the Dioxus side
    let select = use_coroutine(move |mut rx: UnboundedReceiver<SelectTarget>| async move {
        while let Some(target) = rx.next().await {
            let found = Selection::find(&target, &state.stations.peek(), &state.trips.peek());
            match found {
                Some(selection) => state.selection.set(Some(selection)),
                None => log::warn!("Clicked marker {:?} is no longer loaded", target),
            }
        }
    });

    use_hook(move || {
        js_bridge::register_select_handler(move |json: String| {
            match serde_json::from_str::<SelectTarget>(&json) {
                Ok(target) => select.send(target),
                Err(e) => log::error!("Bad marker target {}: {}", json, e),
            }
        });
        start_polling(state);
    });

    use_effect(move || {
        js_bridge::init_map(MAP_CONTAINER_ID, &state.config.peek());
    });

    use_effect(move || {
        js_bridge::render_layer(&state.station_layer.read());
    });

    use_effect(move || {
        js_bridge::render_layer(&state.bike_layer.read());
    });

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            style: "width: 100%; height: 100%; min-height: 500px;",
        }
    }
}
