//! Typed wrappers around the Leaflet map via `js_sys::eval()`.
//!
//! The map functions live in `assets/js/velib-map.js` and are evaluated as
//! globals (no ES modules) once Leaflet has loaded. Marker clicks come back
//! into Rust through a `window.__velibSelect` callback.

use velib_map::config::DashboardConfig;
use velib_map::{LayerKind, OverlayLayer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Embed the map JS at compile time
static MAP_JS: &str = include_str!("../assets/js/velib-map.js");

/// Name of the global callback invoked with a JSON `SelectTarget`.
const SELECT_CALLBACK: &str = "__velibSelect";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Velib JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Load the map script and create the map in `container_id`.
///
/// Waits for Leaflet and the container element, evaluates the map script at
/// global scope, promotes its functions to `window.*`, then builds the map
/// with the light tile layer and one layer group per [`LayerKind`].
pub fn init_map(container_id: &str, config: &DashboardConfig) {
    // Re-evaluating the script would reset the map globals.
    let store_js = format!(
        "if (typeof window.initVelibMap === 'undefined') {{ window.__velibMapScript = {}; }}",
        js_string(MAP_JS)
    );
    let _ = js_sys::eval(&store_js);

    let config_json = serde_json::json!({
        "center": [config.center.0, config.center.1],
        "zoom": config.zoom,
        "tileUrl": config.tile_url,
        "attribution": config.attribution,
        "layers": [
            LayerKind::Stations.group_name(),
            LayerKind::Bikes.group_name(),
        ],
    })
    .to_string();

    call_js(&format!(
        r#"
        (function() {{
            var waitForLeaflet = setInterval(function() {{
                if (typeof L !== 'undefined' && document.getElementById({container})) {{
                    clearInterval(waitForLeaflet);
                    if (window.__velibMapScript) {{
                        (0, eval)(window.__velibMapScript);
                        delete window.__velibMapScript;
                        if (typeof initVelibMap !== 'undefined') window.initVelibMap = initVelibMap;
                        if (typeof renderVelibLayer !== 'undefined') window.renderVelibLayer = renderVelibLayer;
                    }}
                    window.initVelibMap({container}, {config});
                    console.log('Velib map initialized');
                }}
            }}, 100);
        }})();
        "#,
        container = js_string(container_id),
        config = js_string(&config_json),
    ));
}

/// Replace the markers of `layer`'s group on the map.
///
/// Polls until the map is ready, so layers fetched before Leaflet finished
/// loading are still drawn.
pub fn render_layer(layer: &OverlayLayer) {
    let markers_json = match layer.to_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize {:?} layer: {}", layer.kind(), e);
            return;
        }
    };
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__velibMapReady && typeof window.renderVelibLayer !== 'undefined') {{
                    clearInterval(poll);
                    try {{
                        window.renderVelibLayer({group}, {markers});
                    }} catch(e) {{ console.error('[Velib] renderVelibLayer error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        group = js_string(layer.kind().group_name()),
        markers = js_string(&markers_json),
    ));
}

/// Route marker clicks to `handler`, which receives the marker's target as JSON.
///
/// The closure lives for the rest of the page.
pub fn register_select_handler<F>(handler: F)
where
    F: FnMut(String) + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(String)>::new(handler);
    if let Err(e) = js_sys::Reflect::set(
        &window,
        &JsValue::from_str(SELECT_CALLBACK),
        closure.as_ref().unchecked_ref(),
    ) {
        log::error!("Failed to register marker click handler: {:?}", e);
        return;
    }
    closure.forget();
}
