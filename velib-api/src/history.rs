use serde::{Deserialize, Serialize};

/// One hourly bucket of station occupancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub timestamp: String,
    pub bike_count: i64,
    /// Derived by the backend from capacity; may go negative on bad snapshots
    pub free_docks: i64,
}

/// Body of `GET /api/stations/{code}/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationHistory {
    pub station_code: String,
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
    pub hours: u32,
}

impl StationHistory {
    pub fn latest(&self) -> Option<&HistoryPoint> {
        self.history.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_payload;

    #[test]
    fn test_parse_history() {
        let body = r#"{"station_code": "S1", "hours": 24, "history": [
            {"timestamp": "2024-05-01T09:00:00", "bike_count": 5, "free_docks": 5},
            {"timestamp": "2024-05-01T10:00:00", "bike_count": 7, "free_docks": 3}
        ]}"#;
        let history: StationHistory = parse_payload(body).unwrap();
        assert_eq!(history.hours, 24);
        assert_eq!(history.latest().unwrap().bike_count, 7);
    }

    #[test]
    fn test_empty_history_has_no_latest() {
        let body = r#"{"station_code": "S1", "hours": 24, "history": []}"#;
        let history: StationHistory = parse_payload(body).unwrap();
        assert!(history.latest().is_none());
    }
}
