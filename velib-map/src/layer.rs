//! Overlay layers.
//!
//! Each refresh replaces a layer's whole marker set; markers are never
//! patched in place, so applying the same data twice leaves the same layer.

use crate::marker::MarkerSpec;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Stations,
    Bikes,
}

impl LayerKind {
    /// Name of the Leaflet layer group on the JS side.
    pub fn group_name(self) -> &'static str {
        match self {
            LayerKind::Stations => "stations",
            LayerKind::Bikes => "bikes",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayer {
    kind: LayerKind,
    markers: Vec<MarkerSpec>,
}

impl OverlayLayer {
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            markers: Vec::new(),
        }
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// Clear the layer, then add `markers`.
    pub fn replace<I>(&mut self, markers: I)
    where
        I: IntoIterator<Item = MarkerSpec>,
    {
        self.markers.clear();
        self.markers.extend(markers);
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn markers(&self) -> &[MarkerSpec] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Marker count per CSS class list.
    pub fn class_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for marker in &self.markers {
            *counts.entry(marker.class_name.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// JSON array of the markers, for the map bridge.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.markers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterState;
    use crate::marker::station_markers;
    use velib_api::station::Station;

    fn stations() -> Vec<Station> {
        let make = |code: &str, bikes: u32, free: u32| Station {
            code: code.to_string(),
            name: format!("Station {}", code),
            latitude: 48.85,
            longitude: 2.35,
            nb_bike: bikes,
            nb_ebike: 0,
            nb_free_dock: free,
            nb_free_edock: 0,
            total_capacity: bikes + free,
            updated_at: None,
        };
        vec![make("A", 5, 5), make("B", 1, 9), make("C", 0, 10), make("D", 10, 0)]
    }

    #[test]
    fn test_replace_is_idempotent() {
        let flags = FilterState::default();
        let data = stations();
        let mut layer = OverlayLayer::new(LayerKind::Stations);

        layer.replace(station_markers(&data, &flags));
        let first = layer.clone();
        layer.replace(station_markers(&data, &flags));

        assert_eq!(layer, first);
        assert_eq!(layer.len(), 2);
    }

    #[test]
    fn test_replace_drops_previous_markers() {
        let data = stations();
        let mut layer = OverlayLayer::new(LayerKind::Stations);
        layer.replace(station_markers(&data, &FilterState::default()));

        let empty_only = FilterState {
            show_all: false,
            show_empty: true,
            ..FilterState::default()
        };
        layer.replace(station_markers(&data, &empty_only));
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.class_counts().get("station-marker empty"), Some(&1));

        layer.clear();
        assert!(layer.is_empty());
    }

    #[test]
    fn test_class_counts() {
        let all = FilterState {
            show_all: true,
            show_empty: true,
            show_full: true,
            ..FilterState::default()
        };
        let mut layer = OverlayLayer::new(LayerKind::Stations);
        layer.replace(station_markers(&stations(), &all));
        let counts = layer.class_counts();
        assert_eq!(counts.get("station-marker"), Some(&1));
        assert_eq!(counts.get("station-marker low"), Some(&1));
        assert_eq!(counts.get("station-marker empty"), Some(&1));
        assert_eq!(counts.get("station-marker full"), Some(&1));
    }
}
