//! Per-endpoint refreshes and the poll loops that drive them.
//!
//! Every refresh follows the same path: take a sequence ticket, fetch,
//! drop the response if a newer one was already applied, then replace the
//! endpoint's state wholesale. Failures are logged and the previous data
//! stays on screen.

use crate::fetch::{call_with_loading, fetch_json};
use crate::state::AppState;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use log::{error, info, warn};
use velib_api::bike::MalfunctioningResponse;
use velib_api::endpoint::{station_history_path, DEFAULT_HISTORY_HOURS};
use velib_api::history::StationHistory;
use velib_api::station::StationsResponse;
use velib_api::statistics::OverviewStats;
use velib_api::trip::LiveTripsResponse;
use velib_api::Endpoint;
use velib_map::marker::{bike_markers, station_markers};
use velib_map::report::{log_history, log_malfunctions};
use velib_map::schedule::is_wanted;

/// Fetch `endpoint` and apply the result, unless a newer response won.
async fn fetch_fresh<T: serde::de::DeserializeOwned>(
    mut state: AppState,
    endpoint: Endpoint,
) -> Option<T> {
    let ticket = state.sequencer.write().begin(endpoint);
    let url = state.url(endpoint.path());
    match fetch_json::<T>(&url).await {
        Ok(payload) => {
            if state.sequencer.write().accept(ticket) {
                Some(payload)
            } else {
                warn!("Dropping stale {} response #{}", endpoint, ticket.seq);
                None
            }
        }
        Err(e) => {
            error!("Error loading {}: {}", endpoint, e);
            None
        }
    }
}

pub async fn load_stations(mut state: AppState) {
    let Some(response) = fetch_fresh::<StationsResponse>(state, Endpoint::Stations).await else {
        return;
    };
    let flags = *state.filters.peek();
    state
        .station_layer
        .write()
        .replace(station_markers(&response.stations, &flags));
    state.stations.set(response.stations);
}

/// Rebuild the in-transit overlay, or clear it when the toggle is off.
pub async fn load_live_trips(mut state: AppState) {
    let flags = *state.filters.peek();
    if !state.sequencer.write().sync_toggle(Endpoint::LiveTrips, &flags) {
        state.bike_layer.write().clear();
        state.trips.set(Vec::new());
        return;
    }
    let Some(response) = fetch_fresh::<LiveTripsResponse>(state, Endpoint::LiveTrips).await else {
        return;
    };
    let flags = *state.filters.peek();
    state
        .bike_layer
        .write()
        .replace(bike_markers(&response.live_trips, &flags));
    state.trips.set(response.live_trips);
}

pub async fn load_statistics(mut state: AppState) {
    if let Some(stats) = fetch_fresh::<OverviewStats>(state, Endpoint::Statistics).await {
        state.stats.set(Some(stats));
    }
}

/// Log docked malfunctioning bikes; switching the toggle off drops pending responses.
pub async fn load_malfunctions(mut state: AppState) {
    let flags = *state.filters.peek();
    if !state.sequencer.write().sync_toggle(Endpoint::Malfunctioning, &flags) {
        return;
    }
    if let Some(response) =
        fetch_fresh::<MalfunctioningResponse>(state, Endpoint::Malfunctioning).await
    {
        let logged = log_malfunctions(&response);
        info!("{} malfunctioning bikes docked", logged);
    }
}

/// Last 24 hours of a station, logged once received.
pub async fn load_station_history(state: AppState, code: String) {
    let url = state.url(&station_history_path(&code, DEFAULT_HISTORY_HOURS));
    match call_with_loading::<StationHistory>(state, &url).await {
        Ok(history) => log_history(&history),
        Err(e) => error!("Error loading station history for {}: {}", code, e),
    }
}

pub async fn refresh(state: AppState, endpoint: Endpoint) {
    match endpoint {
        Endpoint::Stations => load_stations(state).await,
        Endpoint::LiveTrips => load_live_trips(state).await,
        Endpoint::Statistics => load_statistics(state).await,
        Endpoint::Malfunctioning => load_malfunctions(state).await,
    }
}

/// Start one timer per scheduled endpoint.
///
/// Each tick spawns its fetch without waiting for the previous one, so a
/// slow response never delays the next poll. The first tick fires at once.
pub fn start_polling(state: AppState) {
    let schedule = state.config.peek().schedule;
    for (endpoint, period) in schedule.timed() {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        info!("Polling {} every {}s", endpoint, period.as_secs());
        spawn(async move {
            loop {
                if is_wanted(endpoint, &state.filters.peek()) {
                    spawn(refresh(state, endpoint));
                }
                TimeoutFuture::new(millis).await;
            }
        });
    }
}
