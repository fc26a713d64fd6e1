//! Reusable Dioxus RSX components for the Velib tracker dashboard.

mod filter_panel;
mod live_stats;
mod loading_overlay;
mod map_view;
mod search_box;
mod selected_panel;
mod theme_toggle;

pub use filter_panel::FilterPanel;
pub use live_stats::LiveStatsPanel;
pub use loading_overlay::LoadingOverlay;
pub use map_view::{MapView, MAP_CONTAINER_ID};
pub use search_box::SearchBox;
pub use selected_panel::SelectedPanel;
pub use theme_toggle::ThemeToggle;
