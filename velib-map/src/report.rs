//! Payloads that are fetched but not drawn.
//!
//! Malfunction markers and history charts have no agreed presentation yet,
//! so both are reported to the log only.

use log::info;
use velib_api::bike::MalfunctioningResponse;
use velib_api::history::StationHistory;

/// Log every malfunctioning bike that is docked at a station.
///
/// Returns how many were logged.
pub fn log_malfunctions(response: &MalfunctioningResponse) -> usize {
    let mut count = 0;
    for bike in response.docked() {
        info!(
            "Malfunctioning bike {} at station {} (score {:.2})",
            bike.bike_name,
            bike.current_station_id.unwrap_or_default(),
            bike.malfunction_score
        );
        count += 1;
    }
    count
}

/// Log a station's history: point count and the latest bucket.
pub fn log_history(history: &StationHistory) {
    match history.latest() {
        Some(point) => info!(
            "Station {} history: {} points over {}h, latest {} bikes / {} free at {}",
            history.station_code,
            history.history.len(),
            history.hours,
            point.bike_count,
            point.free_docks,
            point.timestamp
        ),
        None => info!(
            "Station {} history: no data over {}h",
            history.station_code, history.hours
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velib_api::bike::MalfunctioningBike;

    #[test]
    fn test_log_malfunctions_counts_docked_only() {
        let bike = |id: i64, station: Option<i64>| MalfunctioningBike {
            id,
            bike_name: id.to_string(),
            bike_electric: false,
            current_station_id: station,
            malfunction_score: 0.5,
        };
        let response = MalfunctioningResponse {
            bikes: vec![bike(1, Some(10)), bike(2, None), bike(3, Some(11))],
        };
        assert_eq!(log_malfunctions(&response), 2);
    }
}
