//! Live statistics panel.

use velib_api::statistics::{OverviewStats, STATUS_AVAILABLE, STATUS_IN_TRANSIT, STATUS_MISSING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatLine {
    pub label: &'static str,
    pub value: u64,
}

/// Lines of the live statistics panel, top to bottom.
pub fn stat_lines(stats: &OverviewStats) -> Vec<StatLine> {
    vec![
        StatLine {
            label: "Total Bikes",
            value: stats.total_bikes,
        },
        StatLine {
            label: "Available",
            value: stats.status_count(STATUS_AVAILABLE),
        },
        StatLine {
            label: "In Transit",
            value: stats.status_count(STATUS_IN_TRANSIT),
        },
        StatLine {
            label: "Missing",
            value: stats.status_count(STATUS_MISSING),
        },
        StatLine {
            label: "Malfunctions",
            value: stats.active_malfunctions,
        },
        StatLine {
            label: "Trips Today",
            value: stats.trips_today,
        },
        StatLine {
            label: "Last Hour",
            value: stats.trips_last_hour,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_stat_lines() {
        let mut bike_status = BTreeMap::new();
        bike_status.insert("disponible".to_string(), 60);
        let stats = OverviewStats {
            total_bikes: 100,
            total_stations: Some(12),
            bike_status,
            active_malfunctions: 3,
            trips_today: 250,
            trips_last_hour: 9,
            timestamp: None,
        };
        let lines: Vec<(&str, u64)> = stat_lines(&stats)
            .into_iter()
            .map(|l| (l.label, l.value))
            .collect();
        assert_eq!(
            lines,
            vec![
                ("Total Bikes", 100),
                ("Available", 60),
                ("In Transit", 0),
                ("Missing", 0),
                ("Malfunctions", 3),
                ("Trips Today", 250),
                ("Last Hour", 9),
            ]
        );
    }
}
