//! Headless run of the dashboard poll loop.
//!
//! Each timed endpoint gets its own `tokio` interval. Ticks spawn their fetch
//! without waiting for the previous one, and responses older than the last
//! applied one for the same endpoint are dropped, as on the map.

use log::{error, info, warn};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use velib_api::bike::MalfunctioningResponse;
use velib_api::client::ApiClient;
use velib_api::station::StationsResponse;
use velib_api::statistics::OverviewStats;
use velib_api::trip::LiveTripsResponse;
use velib_api::Endpoint;
use velib_map::marker::{bike_markers, station_markers};
use velib_map::report::log_malfunctions;
use velib_map::schedule::{is_wanted, PollSchedule};
use velib_map::sequence::Sequencer;
use velib_map::stats::stat_lines;
use velib_map::{FilterState, LayerKind, OverlayLayer};

/// A decoded response, tagged by endpoint.
#[derive(Debug)]
pub enum Payload {
    Stations(StationsResponse),
    LiveTrips(LiveTripsResponse),
    Statistics(OverviewStats),
    Malfunctioning(MalfunctioningResponse),
}

/// What the map would currently show.
pub struct WatchState {
    pub sequencer: Sequencer,
    pub stations: OverlayLayer,
    pub bikes: OverlayLayer,
}

impl Default for WatchState {
    fn default() -> Self {
        Self {
            sequencer: Sequencer::new(),
            stations: OverlayLayer::new(LayerKind::Stations),
            bikes: OverlayLayer::new(LayerKind::Bikes),
        }
    }
}

impl WatchState {
    /// Replace the affected layer and log a summary.
    pub fn apply(&mut self, payload: Payload, flags: &FilterState) {
        match payload {
            Payload::Stations(response) => {
                self.stations
                    .replace(station_markers(&response.stations, flags));
                info!(
                    "Stations: {} received, {}",
                    response.stations.len(),
                    layer_summary(&self.stations)
                );
            }
            Payload::LiveTrips(response) => {
                self.bikes.replace(bike_markers(&response.live_trips, flags));
                info!(
                    "Live trips: {} received, {}",
                    response.live_trips.len(),
                    layer_summary(&self.bikes)
                );
            }
            Payload::Statistics(stats) => {
                let lines: Vec<String> = stat_lines(&stats)
                    .iter()
                    .map(|l| format!("{} {}", l.label, l.value))
                    .collect();
                info!("Statistics: {}", lines.join(", "));
            }
            Payload::Malfunctioning(response) => {
                log_malfunctions(&response);
            }
        }
    }
}

/// "N markers (class: count, ...)" for one layer.
pub fn layer_summary(layer: &OverlayLayer) -> String {
    if layer.is_empty() {
        return "0 markers".to_string();
    }
    let counts: Vec<String> = layer
        .class_counts()
        .iter()
        .map(|(class, n)| format!("{}: {}", class, n))
        .collect();
    format!("{} markers ({})", layer.len(), counts.join(", "))
}

struct Monitor {
    client: ApiClient,
    flags: FilterState,
    state: Mutex<WatchState>,
}

async fn fetch(client: &ApiClient, endpoint: Endpoint) -> velib_api::error::Result<Payload> {
    Ok(match endpoint {
        Endpoint::Stations => Payload::Stations(client.stations().await?),
        Endpoint::LiveTrips => Payload::LiveTrips(client.live_trips().await?),
        Endpoint::Statistics => Payload::Statistics(client.overview().await?),
        Endpoint::Malfunctioning => Payload::Malfunctioning(client.malfunctioning().await?),
    })
}

async fn refresh(monitor: Arc<Monitor>, endpoint: Endpoint) {
    let ticket = monitor.state.lock().await.sequencer.begin(endpoint);
    let payload = match fetch(&monitor.client, endpoint).await {
        Ok(payload) => payload,
        Err(e) => {
            error!("Error loading {}: {}", endpoint, e);
            return;
        }
    };

    let mut state = monitor.state.lock().await;
    if !state.sequencer.accept(ticket) {
        warn!("Dropping stale {} response #{}", endpoint, ticket.seq);
        return;
    }
    state.apply(payload, &monitor.flags);
}

/// Poll until Ctrl-C.
///
/// Toggled endpoints without a period are fetched once at startup, the way
/// switching their checkbox on fetches them once in the browser.
pub async fn run_watch(
    client: ApiClient,
    flags: FilterState,
    schedule: PollSchedule,
) -> anyhow::Result<()> {
    let monitor = Arc::new(Monitor {
        client,
        flags,
        state: Mutex::new(WatchState::default()),
    });
    info!("Watching {}", monitor.client.base_url());

    let mut handles = Vec::new();
    for endpoint in Endpoint::ALL {
        if !is_wanted(endpoint, &flags) {
            continue;
        }
        let Some(period) = schedule.period(endpoint) else {
            tokio::spawn(refresh(monitor.clone(), endpoint));
            continue;
        };
        info!("Polling {} every {}s", endpoint, period.as_secs());
        let monitor = monitor.clone();
        handles.push(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tokio::spawn(refresh(monitor.clone(), endpoint));
            }
        }));
    }

    tokio::signal::ctrl_c().await?;
    info!("Stopping");
    for handle in handles {
        handle.abort();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use velib_api::station::Station;

    fn station(code: &str, bikes: u32, capacity: u32) -> Station {
        Station {
            code: code.to_string(),
            name: format!("Station {}", code),
            latitude: 48.85,
            longitude: 2.35,
            nb_bike: bikes,
            nb_ebike: 0,
            nb_free_dock: capacity - bikes,
            nb_free_edock: 0,
            total_capacity: capacity,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_layer_summary() {
        let layer = OverlayLayer::new(LayerKind::Bikes);
        assert_eq!(layer_summary(&layer), "0 markers");
    }

    #[test]
    fn test_apply_stations_rebuilds_layer() {
        let mut state = WatchState::default();
        let flags = FilterState::default();
        let response = StationsResponse {
            stations: vec![station("1", 5, 10), station("2", 1, 10), station("3", 0, 10)],
            total: 3,
        };
        state.apply(Payload::Stations(response), &flags);
        // Default flags hide the empty station
        assert_eq!(state.stations.len(), 2);
        assert_eq!(
            layer_summary(&state.stations),
            "2 markers (station-marker: 1, station-marker low: 1)"
        );

        let response = StationsResponse {
            stations: vec![station("1", 5, 10)],
            total: 1,
        };
        state.apply(Payload::Stations(response), &flags);
        assert_eq!(state.stations.len(), 1);
    }

    #[test]
    fn test_apply_trips_with_toggle_off_leaves_layer_empty() {
        let mut state = WatchState::default();
        let response = LiveTripsResponse {
            live_trips: Vec::new(),
            total: 0,
        };
        state.apply(Payload::LiveTrips(response), &FilterState::default());
        assert!(state.bikes.is_empty());
    }
}
