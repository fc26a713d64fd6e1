//! Read-only endpoints exposed by the tracker backend.

use std::fmt;

/// Window requested when the user asks for a station's history.
pub const DEFAULT_HISTORY_HOURS: u32 = 24;

/// The polled endpoints. Station history is requested on demand and is
/// addressed with [`station_history_path`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
    Stations,
    LiveTrips,
    Statistics,
    Malfunctioning,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Stations,
        Endpoint::LiveTrips,
        Endpoint::Statistics,
        Endpoint::Malfunctioning,
    ];

    /// Path relative to the backend origin.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Stations => "/api/stations",
            Endpoint::LiveTrips => "/api/trips/live",
            Endpoint::Statistics => "/api/statistics/overview",
            Endpoint::Malfunctioning => "/api/bikes/malfunctioning",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Stations => "stations",
            Endpoint::LiveTrips => "live trips",
            Endpoint::Statistics => "statistics",
            Endpoint::Malfunctioning => "malfunctioning bikes",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Path of the hourly history for one station.
pub fn station_history_path(code: &str, hours: u32) -> String {
    format!("/api/stations/{}/history?hours={}", code, hours)
}

/// Join a base URL (possibly empty, for same-origin requests) and a path.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
