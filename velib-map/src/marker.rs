//! Marker specs handed to the map widget.
//!
//! A `MarkerSpec` is plain data: position, icon and popup markup, plus the
//! target to report back when the marker is clicked. All structs derive
//! `Serialize` so they can be passed to the Leaflet bridge as JSON.

use crate::filter::FilterState;
use crate::style::{bike_css_class, StationStyle};
use serde::{Deserialize, Serialize};
use velib_api::station::Station;
use velib_api::trip::LiveTrip;
use velib_utils::routes::{bike_page, station_page};

/// Leaflet `divIcon` geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IconGeometry {
    pub size: [i32; 2],
    pub anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

pub const STATION_ICON: IconGeometry = IconGeometry {
    size: [30, 30],
    anchor: [15, 15],
    popup_anchor: [0, -15],
};

pub const BIKE_ICON: IconGeometry = IconGeometry {
    size: [20, 20],
    anchor: [10, 10],
    popup_anchor: [0, -10],
};

/// What a click on the marker selects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum SelectTarget {
    Station(String),
    Bike(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub lat: f64,
    pub lon: f64,
    pub class_name: String,
    /// Inner HTML of the icon, if any
    pub html: Option<String>,
    pub icon: IconGeometry,
    pub popup_html: String,
    pub target: SelectTarget,
}

/// Escape text interpolated into popup markup.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn popup_stat(value: u32, label: &str) -> String {
    format!(
        r#"<div class="popup-stat"><div class="popup-stat-value">{}</div><div class="popup-stat-label">{}</div></div>"#,
        value, label
    )
}

/// Button navigating to `path`.
///
/// The path is quoted as a JS string literal before being HTML-escaped, since
/// the browser decodes the attribute before running the handler.
fn details_button(path: &str) -> String {
    let literal = serde_json::to_string(path).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"<button class="btn btn-sm btn-primary w-100 mt-2" onclick="window.location.href={}">View Details</button>"#,
        escape_html(&literal)
    )
}

/// Popup summarising a station's counts.
pub fn station_popup_html(station: &Station) -> String {
    format!(
        r#"<div class="popup-content"><div class="popup-header">{}</div><div class="popup-stats">{}{}{}{}</div>{}</div>"#,
        escape_html(&station.name),
        popup_stat(station.nb_bike, "Mechanical"),
        popup_stat(station.nb_ebike, "Electric"),
        popup_stat(station.free_docks(), "Free Docks"),
        popup_stat(station.total_capacity, "Capacity"),
        details_button(&station_page(&station.code)),
    )
}

/// Popup for a bike currently out on a trip.
pub fn bike_popup_html(trip: &LiveTrip) -> String {
    let from = trip
        .start_station
        .as_ref()
        .map(|s| escape_html(&s.name))
        .unwrap_or_default();
    format!(
        r#"<div class="popup-content"><div class="popup-header">Bike {}</div><p><strong>Type:</strong> {}</p><p><strong>From:</strong> {}</p><p><strong>Duration:</strong> {} minutes</p>{}</div>"#,
        escape_html(&trip.bike_name),
        trip.kind_label(),
        from,
        trip.duration_minutes(),
        details_button(&bike_page(&trip.bike_name)),
    )
}

pub fn station_marker(station: &Station) -> MarkerSpec {
    let style = StationStyle::for_station(station);
    MarkerSpec {
        lat: station.latitude,
        lon: station.longitude,
        class_name: style.css_class(),
        html: Some(format!("<span>{}</span>", station.total_bikes())),
        icon: STATION_ICON,
        popup_html: station_popup_html(station),
        target: SelectTarget::Station(station.code.clone()),
    }
}

/// Marker at the trip's start station; trips without one have no position.
pub fn bike_marker(trip: &LiveTrip) -> Option<MarkerSpec> {
    let start = trip.start_station.as_ref()?;
    Some(MarkerSpec {
        lat: start.lat,
        lon: start.lon,
        class_name: bike_css_class(trip.bike_electric),
        html: None,
        icon: BIKE_ICON,
        popup_html: bike_popup_html(trip),
        target: SelectTarget::Bike(trip.bike_name.clone()),
    })
}

/// Markers for the stations visible under `flags`.
pub fn station_markers(stations: &[Station], flags: &FilterState) -> Vec<MarkerSpec> {
    flags.visible(stations).map(station_marker).collect()
}

/// Markers for in-transit bikes, none while the overlay is switched off.
pub fn bike_markers(trips: &[LiveTrip], flags: &FilterState) -> Vec<MarkerSpec> {
    if !flags.show_in_transit {
        return Vec::new();
    }
    trips.iter().filter_map(bike_marker).collect()
}
