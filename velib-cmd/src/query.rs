//! One-shot queries against the tracker backend.

use log::info;
use velib_api::bike::MalfunctioningBike;
use velib_api::client::ApiClient;
use velib_api::history::HistoryPoint;
use velib_api::station::Station;
use velib_api::trip::LiveTrip;
use velib_map::stats::stat_lines;
use velib_map::style::StationStyle;
use velib_map::FilterState;
use velib_utils::format::{format_duration, format_timestamp};

/// Local time for display, or the raw value when it does not parse.
fn display_time(raw: &str) -> String {
    format_timestamp(raw).unwrap_or_else(|_| raw.to_string())
}

pub fn station_line(station: &Station) -> String {
    format!(
        "{:>8}  {:<7}  {:>3}/{:<3} bikes ({} e)  {:>3} free  {}",
        station.code,
        StationStyle::for_station(station).label(),
        station.total_bikes(),
        station.total_capacity,
        station.nb_ebike,
        station.free_docks(),
        station.name
    )
}

pub fn trip_line(trip: &LiveTrip) -> String {
    let from = trip
        .start_station
        .as_ref()
        .map(|s| s.name.as_str())
        .unwrap_or("unknown station");
    format!(
        "{:>8}  {:<10}  {:>7}  from {}",
        trip.bike_name,
        trip.kind_label(),
        format_duration(trip.elapsed_seconds()),
        from
    )
}

pub fn malfunction_line(bike: &MalfunctioningBike) -> String {
    let location = match bike.current_station_id {
        Some(id) => format!("docked at station #{}", id),
        None => "not docked".to_string(),
    };
    format!(
        "{:>8}  score {:.2}  {}",
        bike.bike_name, bike.malfunction_score, location
    )
}

pub fn history_line(point: &HistoryPoint) -> String {
    format!(
        "{}  {:>3} bikes  {:>3} free",
        display_time(&point.timestamp),
        point.bike_count,
        point.free_docks
    )
}

fn write_stations_csv(path: &str, stations: &[&Station]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "code",
        "name",
        "latitude",
        "longitude",
        "bikes",
        "ebikes",
        "free_docks",
        "capacity",
        "style",
    ])?;
    for station in stations {
        writer.write_record([
            station.code.clone(),
            station.name.clone(),
            station.latitude.to_string(),
            station.longitude.to_string(),
            station.total_bikes().to_string(),
            station.nb_ebike.to_string(),
            station.free_docks().to_string(),
            station.total_capacity.to_string(),
            StationStyle::for_station(station).label().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Print the stations the filter lets through, optionally saving them as CSV.
pub async fn run_stations(
    client: &ApiClient,
    flags: &FilterState,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    let response = client.stations().await?;
    let visible: Vec<&Station> = flags.visible(&response.stations).collect();
    info!(
        "{} of {} stations visible",
        visible.len(),
        response.stations.len()
    );

    for station in &visible {
        println!("{}", station_line(station));
    }

    if let Some(path) = csv_path {
        write_stations_csv(path, &visible)?;
        info!("Wrote {} stations to {}", visible.len(), path);
    }
    Ok(())
}

pub async fn run_stats(client: &ApiClient) -> anyhow::Result<()> {
    let stats = client.overview().await?;
    for line in stat_lines(&stats) {
        println!("{:<12} {}", line.label, line.value);
    }
    if let Some(ts) = &stats.timestamp {
        println!("{:<12} {}", "Updated", display_time(ts));
    }
    Ok(())
}

pub async fn run_live(client: &ApiClient) -> anyhow::Result<()> {
    let response = client.live_trips().await?;
    info!("{} bikes in transit", response.live_trips.len());
    for trip in &response.live_trips {
        println!("{}", trip_line(trip));
    }
    Ok(())
}

pub async fn run_malfunctions(client: &ApiClient) -> anyhow::Result<()> {
    let response = client.malfunctioning().await?;
    info!(
        "{} malfunctioning bikes, {} docked",
        response.bikes.len(),
        response.docked().count()
    );
    for bike in &response.bikes {
        println!("{}", malfunction_line(bike));
    }
    Ok(())
}

pub async fn run_history(client: &ApiClient, code: &str, hours: u32) -> anyhow::Result<()> {
    let history = client.station_history(code, hours).await?;
    info!(
        "{} points for station {} over {}h",
        history.history.len(),
        history.station_code,
        history.hours
    );
    for point in &history.history {
        println!("{}", history_line(point));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use velib_api::trip::TripStation;

    fn station() -> Station {
        Station {
            code: "16107".to_string(),
            name: "Benjamin Godard".to_string(),
            latitude: 48.865983,
            longitude: 2.275725,
            nb_bike: 2,
            nb_ebike: 1,
            nb_free_dock: 30,
            nb_free_edock: 2,
            total_capacity: 35,
            updated_at: None,
        }
    }

    #[test]
    fn test_station_line() {
        let line = station_line(&station());
        assert!(line.contains("16107"));
        assert!(line.contains("low"));
        assert!(line.contains("3/35"));
        assert!(line.contains("32 free"));
        assert!(line.ends_with("Benjamin Godard"));
    }

    #[test]
    fn test_trip_line() {
        let trip = LiveTrip {
            bike_name: "42".to_string(),
            bike_electric: true,
            start_station: Some(TripStation {
                code: "16107".to_string(),
                name: "Benjamin Godard".to_string(),
                lat: 48.86,
                lon: 2.27,
            }),
            start_time: None,
            duration_so_far: 3900,
        };
        let line = trip_line(&trip);
        assert!(line.contains("Electric"));
        assert!(line.contains("1h 5m"));
        assert!(line.ends_with("from Benjamin Godard"));
    }

    #[test]
    fn test_trip_line_without_start_station() {
        let trip = LiveTrip {
            bike_name: "7".to_string(),
            bike_electric: false,
            start_station: None,
            start_time: None,
            duration_so_far: 120,
        };
        assert!(trip_line(&trip).ends_with("from unknown station"));
    }

    #[test]
    fn test_malfunction_line() {
        let bike = MalfunctioningBike {
            id: 1,
            bike_name: "99".to_string(),
            bike_electric: false,
            current_station_id: Some(12),
            malfunction_score: 0.875,
        };
        assert!(malfunction_line(&bike).contains("score 0.88"));
        assert!(malfunction_line(&bike).ends_with("docked at station #12"));
    }

    #[test]
    fn test_history_line_keeps_unparseable_timestamp() {
        let point = HistoryPoint {
            timestamp: "yesterday".to_string(),
            bike_count: 4,
            free_docks: 6,
        };
        assert!(history_line(&point).starts_with("yesterday"));
    }
}
