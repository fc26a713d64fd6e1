use crate::schedule::PollSchedule;

/// Paris, Hôtel de Ville.
pub const DEFAULT_CENTER: (f64, f64) = (48.8566, 2.3522);
pub const DEFAULT_ZOOM: u8 = 12;
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Settings for one dashboard instance.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Origin of the REST backend; empty for same-origin requests
    pub api_base: String,
    pub center: (f64, f64),
    pub zoom: u8,
    /// Light tiles, used regardless of the page theme
    pub tile_url: String,
    pub attribution: String,
    pub schedule: PollSchedule,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            schedule: PollSchedule::default(),
        }
    }
}
