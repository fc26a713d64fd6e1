//! Domain types and REST client for the Velib tracker backend.
//!
//! Every payload the dashboard consumes is modelled here so the browser
//! app and the native monitor decode the same JSON the same way:
//! - `station`: docking stations and their occupancy counts
//! - `trip`: trips currently in progress
//! - `bike`: bikes flagged as malfunctioning
//! - `statistics`: the live overview snapshot
//! - `history`: per-station hourly occupancy
//! - `endpoint`: the read-only endpoint paths
//! - `client`: a `reqwest` client (behind the `api` feature, native only)

pub mod bike;
pub mod endpoint;
pub mod error;
pub mod history;
pub mod station;
pub mod statistics;
pub mod trip;

#[cfg(feature = "api")]
pub mod client;

pub use endpoint::Endpoint;
pub use error::{parse_payload, FetchError};
