//! Poll periods per endpoint.
//!
//! Stations and statistics poll on timers from startup. Live trips and
//! malfunctioning bikes default to no period and are fetched when their
//! toggle is switched on; giving them a period polls them too, still gated
//! by the toggle.

use crate::filter::FilterState;
use std::time::Duration;
use velib_api::Endpoint;

pub const STATIONS_PERIOD: Duration = Duration::from_secs(60);
pub const STATISTICS_PERIOD: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    pub stations: Option<Duration>,
    pub statistics: Option<Duration>,
    pub live_trips: Option<Duration>,
    pub malfunctioning: Option<Duration>,
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self {
            stations: Some(STATIONS_PERIOD),
            statistics: Some(STATISTICS_PERIOD),
            live_trips: None,
            malfunctioning: None,
        }
    }
}

impl PollSchedule {
    pub fn period(&self, endpoint: Endpoint) -> Option<Duration> {
        match endpoint {
            Endpoint::Stations => self.stations,
            Endpoint::Statistics => self.statistics,
            Endpoint::LiveTrips => self.live_trips,
            Endpoint::Malfunctioning => self.malfunctioning,
        }
    }

    pub fn with_period(mut self, endpoint: Endpoint, period: Option<Duration>) -> Self {
        // A zero period would spin; treat it as "not scheduled".
        let period = period.filter(|p| !p.is_zero());
        match endpoint {
            Endpoint::Stations => self.stations = period,
            Endpoint::Statistics => self.statistics = period,
            Endpoint::LiveTrips => self.live_trips = period,
            Endpoint::Malfunctioning => self.malfunctioning = period,
        }
        self
    }

    /// Endpoints with a timer, in `Endpoint::ALL` order.
    pub fn timed(&self) -> Vec<(Endpoint, Duration)> {
        Endpoint::ALL
            .iter()
            .filter_map(|&e| self.period(e).map(|p| (e, p)))
            .collect()
    }
}

/// Whether a fetch of `endpoint` is wanted under the current toggles.
pub fn is_wanted(endpoint: Endpoint, flags: &FilterState) -> bool {
    match endpoint {
        Endpoint::Stations | Endpoint::Statistics => true,
        Endpoint::LiveTrips => flags.show_in_transit,
        Endpoint::Malfunctioning => flags.show_malfunctioning,
    }
}
