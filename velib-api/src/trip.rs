use serde::{Deserialize, Serialize};

/// Compact station reference embedded in trip payloads.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct TripStation {
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A trip that has started but not yet ended.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LiveTrip {
    pub bike_name: String,
    #[serde(default)]
    pub bike_electric: bool,
    #[serde(default)]
    pub start_station: Option<TripStation>,
    /// ISO-8601 start time, as sent by the backend
    #[serde(default)]
    pub start_time: Option<String>,
    /// Seconds elapsed since the bike left its station.
    ///
    /// Negative when the backend clock lags the trip start.
    #[serde(default)]
    pub duration_so_far: i64,
}

impl LiveTrip {
    /// Seconds elapsed, clamped at zero.
    pub fn elapsed_seconds(&self) -> u64 {
        u64::try_from(self.duration_so_far).unwrap_or(0)
    }

    /// Whole minutes elapsed, rounded down.
    pub fn duration_minutes(&self) -> u64 {
        self.elapsed_seconds() / 60
    }

    pub fn kind_label(&self) -> &'static str {
        if self.bike_electric {
            "Electric"
        } else {
            "Mechanical"
        }
    }
}

/// Body of `GET /api/trips/live`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveTripsResponse {
    pub live_trips: Vec<LiveTrip>,
    #[serde(default)]
    pub total: usize,
}
