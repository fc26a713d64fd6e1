//! Station visibility from the map filter toggles.

use serde::{Deserialize, Serialize};
use velib_api::station::Station;

/// State of the five filter checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub show_all: bool,
    pub show_empty: bool,
    pub show_full: bool,
    pub show_in_transit: bool,
    pub show_malfunctioning: bool,
}

impl Default for FilterState {
    /// The page loads with every station shown and the bike overlays off.
    fn default() -> Self {
        Self {
            show_all: true,
            show_empty: false,
            show_full: false,
            show_in_transit: false,
            show_malfunctioning: false,
        }
    }
}

impl FilterState {
    /// True when at least one of the station toggles is on.
    pub fn any_station_toggle(&self) -> bool {
        self.show_all || self.show_empty || self.show_full
    }

    /// Whether `station` belongs on the map.
    ///
    /// The three station toggles partition stations: empty ones are only
    /// shown by `show_empty`, full ones by `show_full`, and everything in
    /// between by `show_all`. The bike toggles play no part.
    pub fn should_show(&self, station: &Station) -> bool {
        if !self.any_station_toggle() {
            return false;
        }

        let is_empty = station.is_empty();
        let is_full = station.is_full();

        if self.show_empty && is_empty {
            return true;
        }
        if self.show_full && is_full {
            return true;
        }
        self.show_all && !is_empty && !is_full
    }

    /// Stations visible under these toggles, in input order.
    pub fn visible<'a>(&'a self, stations: &'a [Station]) -> impl Iterator<Item = &'a Station> {
        stations.iter().filter(move |s| self.should_show(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(bikes: u32, ebikes: u32, free: u32, free_e: u32, capacity: u32) -> Station {
        Station {
            code: "S1".to_string(),
            name: "Rue A".to_string(),
            latitude: 48.85,
            longitude: 2.35,
            nb_bike: bikes,
            nb_ebike: ebikes,
            nb_free_dock: free,
            nb_free_edock: free_e,
            total_capacity: capacity,
            updated_at: None,
        }
    }

    fn flags(all: bool, empty: bool, full: bool) -> FilterState {
        FilterState {
            show_all: all,
            show_empty: empty,
            show_full: full,
            show_in_transit: false,
            show_malfunctioning: false,
        }
    }

    #[test]
    fn test_no_station_toggle_hides_everything() {
        let mut f = flags(false, false, false);
        f.show_in_transit = true;
        f.show_malfunctioning = true;
        for s in [
            station(0, 0, 10, 0, 10),
            station(10, 0, 0, 0, 10),
            station(3, 1, 6, 0, 10),
        ] {
            assert!(!f.should_show(&s));
        }
    }

    #[test]
    fn test_show_empty_only() {
        let f = flags(false, true, false);
        assert!(f.should_show(&station(0, 0, 10, 0, 10)));
        assert!(!f.should_show(&station(1, 0, 9, 0, 10)));
    }

    #[test]
    fn test_show_full_only() {
        let f = flags(false, false, true);
        assert!(f.should_show(&station(8, 2, 0, 0, 10)));
        assert!(!f.should_show(&station(3, 1, 6, 0, 10)));
        assert!(!f.should_show(&station(0, 0, 10, 0, 10)));
    }

    #[test]
    fn test_show_all_excludes_empty_and_full() {
        let f = flags(true, false, false);
        assert!(f.should_show(&station(3, 1, 5, 1, 10)));
        assert!(!f.should_show(&station(0, 0, 10, 0, 10)));
        assert!(!f.should_show(&station(6, 4, 0, 0, 10)));
    }

    #[test]
    fn test_toggles_partition_rather_than_union() {
        // A partly filled station is never shown by show_empty/show_full alone,
        // even though a naive union of flags would let show_all leak in.
        let partial = station(3, 1, 6, 0, 10);
        assert!(!flags(false, true, true).should_show(&partial));
        assert!(flags(true, true, true).should_show(&partial));

        let empty = station(0, 0, 10, 0, 10);
        assert!(flags(true, true, false).should_show(&empty));
        assert!(!flags(true, false, true).should_show(&empty));
    }

    #[test]
    fn test_visible_keeps_order() {
        let f = flags(true, false, false);
        let mut a = station(2, 0, 8, 0, 10);
        a.code = "A".to_string();
        let mut b = station(0, 0, 10, 0, 10);
        b.code = "B".to_string();
        let mut c = station(5, 0, 5, 0, 10);
        c.code = "C".to_string();
        let stations = vec![a, b, c];
        let codes: Vec<_> = f.visible(&stations).map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["A", "C"]);
    }
}
