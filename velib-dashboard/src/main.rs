//! Velib live map dashboard
//!
//! Single page: a header with search and theme switch, a sidebar with the
//! filters, live statistics and the selected item, and the Leaflet map.
//!
//! Data flow:
//! 1. `AppState` is provided once, with the theme read from `localStorage`.
//! 2. Mounting `MapView` creates the map and starts one poll loop per timed
//!    endpoint (stations every 60s, statistics every 30s).
//! 3. Each response replaces its overlay layer model; an effect pushes the
//!    new markers to Leaflet.
//! 4. Filter toggles refetch the affected endpoint at once.

use dioxus::prelude::*;
use velib_map::config::DashboardConfig;
use velib_map_ui::components::{
    FilterPanel, LiveStatsPanel, LoadingOverlay, MapView, SearchBox, SelectedPanel, ThemeToggle,
};
use velib_map_ui::state::AppState;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

// Marker and theme styles; class names match `velib_map::style`.
const DASHBOARD_CSS: &str = r#"
:root { --bg: #ffffff; --fg: #212529; --panel: #f8f9fa; }
[data-theme="dark"] { --bg: #1e1e1e; --fg: #e0e0e0; --panel: #2b2b2b; }
body { margin: 0; background: var(--bg); color: var(--fg); font-family: system-ui, -apple-system, sans-serif; }
.card { background: var(--panel); border-radius: 6px; padding: 10px; }
.station-marker { width: 30px; height: 30px; border-radius: 50%; background: #2196F3; color: #fff;
    display: flex; align-items: center; justify-content: center; font-size: 11px; font-weight: bold;
    border: 2px solid #fff; box-shadow: 0 1px 3px rgba(0,0,0,.4); }
.station-marker.empty { background: #9e9e9e; }
.station-marker.full { background: #4caf50; }
.station-marker.low { background: #ff9800; }
.bike-marker { width: 20px; height: 20px; border-radius: 50%; background: #e91e63; border: 2px solid #fff; }
.bike-marker.electric { background: #00bcd4; }
"#;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("velib-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(DashboardConfig::default()));

    use_hook(move || {
        log::info!("Velib dashboard starting, theme {}", state.theme.peek());
    });

    rsx! {
        document::Link { rel: "stylesheet", href: LEAFLET_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }
        document::Script { src: LEAFLET_JS }
        style { {DASHBOARD_CSS} }

        LoadingOverlay {}

        header {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 16px; background: #343a40; color: #fff;",
            h1 {
                style: "font-size: 18px; margin: 0;",
                "Velib Tracker"
            }
            div {
                style: "display: flex; gap: 16px; align-items: center;",
                SearchBox {}
                ThemeToggle {}
            }
        }

        div {
            style: "display: flex; height: calc(100vh - 52px);",
            aside {
                style: "width: 280px; padding: 12px; overflow-y: auto;",
                FilterPanel {}
                LiveStatsPanel {}
                SelectedPanel {}
            }
            main {
                style: "flex: 1;",
                MapView {}
            }
        }
    }
}
