use serde::{Deserialize, Serialize};

/// A Velib docking station as reported by `GET /api/stations`.
///
/// Counts are trusted as sent: `nb_bike + nb_ebike <= total_capacity` is
/// assumed but never checked here.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Station {
    /// Station code used in URLs (e.g. "16107")
    pub code: String,
    /// Human-readable station name
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Docked mechanical bikes
    #[serde(default)]
    pub nb_bike: u32,
    /// Docked electric bikes
    #[serde(default)]
    pub nb_ebike: u32,
    /// Free mechanical docks
    #[serde(default)]
    pub nb_free_dock: u32,
    /// Free electric docks
    #[serde(default)]
    pub nb_free_edock: u32,
    /// Total number of docks
    #[serde(default)]
    pub total_capacity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Station {
    /// Mechanical plus electric bikes currently docked.
    pub fn total_bikes(&self) -> u32 {
        self.nb_bike.saturating_add(self.nb_ebike)
    }

    /// Mechanical plus electric free docks.
    pub fn free_docks(&self) -> u32 {
        self.nb_free_dock.saturating_add(self.nb_free_edock)
    }

    /// No bike of either kind is docked.
    pub fn is_empty(&self) -> bool {
        self.total_bikes() == 0
    }

    /// No dock of either kind is free.
    pub fn is_full(&self) -> bool {
        self.free_docks() == 0
    }

    /// Share of the capacity occupied by bikes.
    ///
    /// `None` when the station reports no capacity at all.
    pub fn fill_ratio(&self) -> Option<f64> {
        if self.total_capacity == 0 {
            return None;
        }
        Some(f64::from(self.total_bikes()) / f64::from(self.total_capacity))
    }
}

/// Body of `GET /api/stations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationsResponse {
    pub stations: Vec<Station>,
    #[serde(default)]
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_payload;

    const BODY: &str = r#"{
        "stations": [
            {"id": 1, "code": "16107", "name": "Benjamin Godard - Victor Hugo",
             "latitude": 48.865983, "longitude": 2.275725, "station_type": "velib",
             "state": "Operative", "nb_bike": 3, "nb_ebike": 1, "nb_free_dock": 20,
             "nb_free_edock": 11, "total_capacity": 35, "credit_card": true,
             "updated_at": "2024-05-01T10:20:30.123456"}
        ],
        "total": 1
    }"#;

    #[test]
    fn test_parse_stations_ignores_extra_fields() {
        let response: StationsResponse = parse_payload(BODY).unwrap();
        assert_eq!(response.total, 1);
        let station = &response.stations[0];
        assert_eq!(station.code, "16107");
        assert_eq!(station.total_bikes(), 4);
        assert_eq!(station.free_docks(), 31);
        assert!((station.latitude - 48.865983).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_counts_default_to_zero() {
        let body = r#"{"stations": [{"code": "1", "name": "A", "latitude": 0.0, "longitude": 0.0}]}"#;
        let response: StationsResponse = parse_payload(body).unwrap();
        let station = &response.stations[0];
        assert!(station.is_empty());
        assert!(station.is_full());
        assert_eq!(station.fill_ratio(), None);
    }

    #[test]
    fn test_fill_ratio() {
        let station = Station {
            code: "S1".to_string(),
            name: "Rue A".to_string(),
            latitude: 48.85,
            longitude: 2.35,
            nb_bike: 3,
            nb_ebike: 1,
            nb_free_dock: 6,
            nb_free_edock: 0,
            total_capacity: 10,
            updated_at: None,
        };
        assert_eq!(station.fill_ratio(), Some(0.4));
        assert!(!station.is_empty());
        assert!(!station.is_full());
    }

    #[test]
    fn test_counts_saturate_instead_of_wrapping() {
        let station = Station {
            code: "S2".to_string(),
            name: "Rue B".to_string(),
            latitude: 48.85,
            longitude: 2.35,
            nb_bike: u32::MAX,
            nb_ebike: 1,
            nb_free_dock: u32::MAX,
            nb_free_edock: 1,
            total_capacity: 10,
            updated_at: None,
        };
        assert_eq!(station.total_bikes(), u32::MAX);
        assert_eq!(station.free_docks(), u32::MAX);
        assert!(!station.is_empty());
        assert!(!station.is_full());
    }
}
