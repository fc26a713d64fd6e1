use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status key the backend uses for docked, rentable bikes.
pub const STATUS_AVAILABLE: &str = "disponible";
pub const STATUS_IN_TRANSIT: &str = "in_transit";
pub const STATUS_MISSING: &str = "missing";

/// Snapshot returned by `GET /api/statistics/overview`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_bikes: u64,
    #[serde(default)]
    pub total_stations: Option<u64>,
    /// Bike count per status; statuses with no bike are usually absent
    #[serde(default)]
    pub bike_status: BTreeMap<String, u64>,
    #[serde(default)]
    pub active_malfunctions: u64,
    #[serde(default)]
    pub trips_today: u64,
    #[serde(default)]
    pub trips_last_hour: u64,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl OverviewStats {
    /// Bikes in `status`, zero when the backend omitted it.
    pub fn status_count(&self, status: &str) -> u64 {
        self.bike_status.get(status).copied().unwrap_or(0)
    }
}
