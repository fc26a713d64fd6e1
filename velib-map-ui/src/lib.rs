//! Shared Dioxus components and Leaflet bridge for the Velib tracker dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map functions via `js_sys::eval()`
//! - `browser`: `localStorage`, document attributes and navigation
//! - `fetch`: JSON requests through the browser `fetch` API
//! - `state`: Reactive AppState with Dioxus Signals
//! - `loaders`: per-endpoint refreshes and the poll loops
//! - `components`: RSX components (map, filters, panels, toggles)

pub mod browser;
pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod loaders;
pub mod state;
