//! Application state managed via Dioxus context.
//!
//! `AppState` is the dashboard's single view-model: every reactive value a
//! component or loader needs is a named signal here, provided once via
//! `use_context_provider` and read back with `use_context::<AppState>()`.

use crate::browser;
use dioxus::prelude::*;
use velib_api::endpoint::join_url;
use velib_api::station::Station;
use velib_api::statistics::OverviewStats;
use velib_api::trip::LiveTrip;
use velib_map::config::DashboardConfig;
use velib_map::loading;
use velib_map::sequence::Sequencer;
use velib_map::theme::Theme;
use velib_map::{FilterState, LayerKind, OverlayLayer, Selection};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    pub config: Signal<DashboardConfig>,
    /// Filter checkbox values
    pub filters: Signal<FilterState>,
    /// Stations from the last applied poll
    pub stations: Signal<Vec<Station>>,
    /// Live trips from the last applied poll
    pub trips: Signal<Vec<LiveTrip>>,
    pub station_layer: Signal<OverlayLayer>,
    pub bike_layer: Signal<OverlayLayer>,
    /// Latest overview snapshot (None until the first poll lands)
    pub stats: Signal<Option<OverviewStats>>,
    /// Last clicked station or bike
    pub selection: Signal<Option<Selection>>,
    pub theme: Signal<Theme>,
    /// Requests in flight through `call_with_loading`
    pub pending_requests: Signal<u32>,
    pub sequencer: Signal<Sequencer>,
}

impl AppState {
    /// Create a new AppState; the theme comes from `localStorage`.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: Signal::new(config),
            filters: Signal::new(FilterState::default()),
            stations: Signal::new(Vec::new()),
            trips: Signal::new(Vec::new()),
            station_layer: Signal::new(OverlayLayer::new(LayerKind::Stations)),
            bike_layer: Signal::new(OverlayLayer::new(LayerKind::Bikes)),
            stats: Signal::new(None),
            selection: Signal::new(None),
            theme: Signal::new(browser::stored_theme()),
            pending_requests: Signal::new(0),
            sequencer: Signal::new(Sequencer::new()),
        }
    }

    /// Absolute URL of a backend path.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.config.peek().api_base, path)
    }

    pub fn is_loading(&self) -> bool {
        loading::is_loading((self.pending_requests)())
    }
}
