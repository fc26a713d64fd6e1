//! Rendering pipeline for the Velib tracker map.
//!
//! Everything between a decoded payload and the overlay handed to the map
//! widget lives here, free of any browser dependency so the web app and the
//! native monitor share it:
//! - `filter`: which stations are visible for the current toggles
//! - `style`: marker classes from station fill ratio
//! - `marker`: marker specs and popup markup
//! - `layer`: overlay layers replaced wholesale on each refresh
//! - `loading`: pending-request count for the loading overlay
//! - `selection`: the selected station or bike and its summary panel
//! - `schedule` / `sequence`: poll periods and stale-response rejection
//! - `stats`: live statistics panel lines
//! - `report`: logging for payloads with no drawing yet
//! - `theme`: persisted light/dark preference
//! - `config`: dashboard defaults

pub mod config;
pub mod filter;
pub mod layer;
pub mod loading;
pub mod marker;
pub mod report;
pub mod schedule;
pub mod selection;
pub mod sequence;
pub mod stats;
pub mod style;
pub mod theme;

pub use filter::FilterState;
pub use layer::{LayerKind, OverlayLayer};
pub use selection::Selection;
