//! The single selected map item and its side-panel summary.

use crate::marker::SelectTarget;
use velib_api::station::Station;
use velib_api::trip::LiveTrip;
use velib_utils::format::format_duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Station(Station),
    Bike(LiveTrip),
}

/// Button shown under the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    /// Request the station's recent history
    StationHistory { code: String },
    /// Navigate to the bike's detail page
    BikeDetails { name: String },
}

impl PanelAction {
    pub fn label(&self) -> &'static str {
        match self {
            PanelAction::StationHistory { .. } => "View History",
            PanelAction::BikeDetails { .. } => "View Details",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSummary {
    pub title: String,
    pub lines: Vec<String>,
    pub action: PanelAction,
}

impl Selection {
    /// Resolve a clicked marker against the data currently on the map.
    pub fn find(target: &SelectTarget, stations: &[Station], trips: &[LiveTrip]) -> Option<Self> {
        match target {
            SelectTarget::Station(code) => stations
                .iter()
                .find(|s| &s.code == code)
                .cloned()
                .map(Selection::Station),
            SelectTarget::Bike(name) => trips
                .iter()
                .find(|t| &t.bike_name == name)
                .cloned()
                .map(Selection::Bike),
        }
    }

    pub fn summary(&self) -> SelectionSummary {
        match self {
            Selection::Station(station) => SelectionSummary {
                title: station.name.clone(),
                lines: vec![
                    format!("Code: {}", station.code),
                    format!("Bikes: {} / {}", station.total_bikes(), station.total_capacity),
                ],
                action: PanelAction::StationHistory {
                    code: station.code.clone(),
                },
            },
            Selection::Bike(trip) => {
                let mut lines = vec![format!("Type: {}", trip.kind_label())];
                if let Some(start) = &trip.start_station {
                    lines.push(format!("From: {}", start.name));
                }
                lines.push(format!("Duration: {}", format_duration(trip.elapsed_seconds())));
                SelectionSummary {
                    title: format!("Bike {}", trip.bike_name),
                    lines,
                    action: PanelAction::BikeDetails {
                        name: trip.bike_name.clone(),
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velib_api::trip::TripStation;

    fn rue_a() -> Station {
        Station {
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
        }
    }

    #[test]
    fn test_station_summary() {
        let summary = Selection::Station(rue_a()).summary();
        assert_eq!(summary.title, "Rue A");
        assert_eq!(summary.lines, vec!["Code: S1", "Bikes: 4 / 10"]);
        assert_eq!(
            summary.action,
            PanelAction::StationHistory {
                code: "S1".to_string()
            }
        );
        assert_eq!(summary.action.label(), "View History");
    }

    #[test]
    fn test_bike_summary() {
        let trip = LiveTrip {
            bike_name: "4242".to_string(),
            bike_electric: false,
            start_station: Some(TripStation {
                code: "S1".to_string(),
                name: "Rue A".to_string(),
                lat: 48.85,
                lon: 2.35,
            }),
            start_time: None,
            duration_so_far: 3900,
        };
        let summary = Selection::Bike(trip).summary();
        assert_eq!(summary.title, "Bike 4242");
        assert_eq!(
            summary.lines,
            vec!["Type: Mechanical", "From: Rue A", "Duration: 1h 5m"]
        );
    }

    #[test]
    fn test_find_selection() {
        let stations = vec![rue_a()];
        let found = Selection::find(&SelectTarget::Station("S1".to_string()), &stations, &[]);
        assert_eq!(found, Some(Selection::Station(rue_a())));
        assert!(Selection::find(&SelectTarget::Station("S2".to_string()), &stations, &[]).is_none());
        assert!(Selection::find(&SelectTarget::Bike("1".to_string()), &stations, &[]).is_none());
    }
}
