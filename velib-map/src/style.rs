//! Marker classes.

use serde::{Deserialize, Serialize};
use velib_api::station::Station;

/// Below this fill ratio a station is flagged as running low.
pub const LOW_FILL_RATIO: f64 = 0.2;

pub const STATION_MARKER_CLASS: &str = "station-marker";
pub const BIKE_MARKER_CLASS: &str = "bike-marker";

/// Visual class of a station marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StationStyle {
    Default,
    Empty,
    Full,
    Low,
}

impl StationStyle {
    /// Pick the style from the station's fill ratio.
    ///
    /// Empty and full win over low, so an empty station (ratio 0) is never
    /// also styled low. Stations without capacity keep the default style.
    pub fn for_station(station: &Station) -> Self {
        match station.fill_ratio() {
            Some(r) if r == 0.0 => StationStyle::Empty,
            Some(r) if r == 1.0 => StationStyle::Full,
            Some(r) if r < LOW_FILL_RATIO => StationStyle::Low,
            _ => StationStyle::Default,
        }
    }

    pub fn modifier(self) -> Option<&'static str> {
        match self {
            StationStyle::Default => None,
            StationStyle::Empty => Some("empty"),
            StationStyle::Full => Some("full"),
            StationStyle::Low => Some("low"),
        }
    }

    pub fn label(self) -> &'static str {
        self.modifier().unwrap_or("default")
    }

    /// CSS class list for the marker icon.
    pub fn css_class(self) -> String {
        match self.modifier() {
            Some(m) => format!("{} {}", STATION_MARKER_CLASS, m),
            None => STATION_MARKER_CLASS.to_string(),
        }
    }
}

/// CSS class list for an in-transit bike marker.
pub fn bike_css_class(electric: bool) -> String {
    if electric {
        format!("{} electric", BIKE_MARKER_CLASS)
    } else {
        BIKE_MARKER_CLASS.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(bikes: u32, ebikes: u32, capacity: u32) -> Station {
        Station {
            code: "S1".to_string(),
            name: "Rue A".to_string(),
            latitude: 48.85,
            longitude: 2.35,
            nb_bike: bikes,
            nb_ebike: ebikes,
            nb_free_dock: capacity.saturating_sub(bikes + ebikes),
            nb_free_edock: 0,
            total_capacity: capacity,
            updated_at: None,
        }
    }

    #[test]
    fn test_style_from_fill_ratio() {
        assert_eq!(StationStyle::for_station(&station(0, 0, 20)), StationStyle::Empty);
        assert_eq!(StationStyle::for_station(&station(15, 5, 20)), StationStyle::Full);
        assert_eq!(StationStyle::for_station(&station(2, 1, 20)), StationStyle::Low);
        assert_eq!(StationStyle::for_station(&station(3, 1, 20)), StationStyle::Default);
        assert_eq!(StationStyle::for_station(&station(3, 1, 10)), StationStyle::Default);
    }

    #[test]
    fn test_zero_capacity_is_default() {
        assert_eq!(StationStyle::for_station(&station(0, 0, 0)), StationStyle::Default);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(StationStyle::Empty.css_class(), "station-marker empty");
        assert_eq!(StationStyle::Low.css_class(), "station-marker low");
        assert_eq!(StationStyle::Default.css_class(), "station-marker");
        assert_eq!(bike_css_class(true), "bike-marker electric");
        assert_eq!(bike_css_class(false), "bike-marker");
    }
}
