use serde::{Deserialize, Serialize};

/// A bike with at least one active malfunction report.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct MalfunctioningBike {
    pub id: i64,
    pub bike_name: String,
    #[serde(default)]
    pub bike_electric: bool,
    /// Backend id of the station the bike is docked at, if any
    #[serde(default)]
    pub current_station_id: Option<i64>,
    #[serde(default)]
    pub malfunction_score: f64,
}

/// Body of `GET /api/bikes/malfunctioning`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MalfunctioningResponse {
    pub bikes: Vec<MalfunctioningBike>,
}

impl MalfunctioningResponse {
    /// Bikes currently docked somewhere, the only ones that could be placed on a map.
    pub fn docked(&self) -> impl Iterator<Item = &MalfunctioningBike> {
        self.bikes.iter().filter(|b| b.current_station_id.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_payload;

    #[test]
    fn test_docked_skips_bikes_without_station() {
        let body = r#"{"bikes": [
            {"id": 1, "bike_name": "111", "current_station_id": 42, "malfunction_score": 0.8,
             "malfunctions": [{"type": "boomerang"}]},
            {"id": 2, "bike_name": "222", "current_station_id": null}
        ]}"#;
        let response: MalfunctioningResponse = parse_payload(body).unwrap();
        let docked: Vec<_> = response.docked().map(|b| b.bike_name.as_str()).collect();
        assert_eq!(docked, vec!["111"]);
    }
}
