//! Native HTTP client for the tracker backend.
//!
//! Mirrors what the browser does with `fetch`: one GET per call, no retry,
//! non-2xx answers and undecodable bodies surface as [`FetchError`].

use crate::bike::MalfunctioningResponse;
use crate::endpoint::{join_url, station_history_path, Endpoint};
use crate::error::{parse_payload, FetchError, Result};
use crate::history::StationHistory;
use crate::station::StationsResponse;
use crate::statistics::OverviewStats;
use crate::trip::LiveTripsResponse;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Use a preconfigured `reqwest` client (timeouts, proxies).
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = join_url(&self.base_url, path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_payload(&body)
    }

    pub async fn stations(&self) -> Result<StationsResponse> {
        self.get(Endpoint::Stations.path()).await
    }

    pub async fn live_trips(&self) -> Result<LiveTripsResponse> {
        self.get(Endpoint::LiveTrips.path()).await
    }

    pub async fn overview(&self) -> Result<OverviewStats> {
        self.get(Endpoint::Statistics.path()).await
    }

    pub async fn malfunctioning(&self) -> Result<MalfunctioningResponse> {
        self.get(Endpoint::Malfunctioning.path()).await
    }

    pub async fn station_history(&self, code: &str, hours: u32) -> Result<StationHistory> {
        self.get(&station_history_path(code, hours)).await
    }
}
