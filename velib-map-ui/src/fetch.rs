//! JSON requests through the browser `fetch` API.

use crate::state::AppState;
use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use velib_api::{parse_payload, FetchError};
use velib_map::loading::{LoadingGuard, PendingCounter};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn js_error(value: JsValue) -> FetchError {
    FetchError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// GET `url` and decode the JSON body.
///
/// One attempt, no timeout: a hung request simply never resolves.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| FetchError::Network("fetch did not yield a Response".to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| FetchError::Decode("response body is not text".to_string()))?;
    parse_payload(&body)
}

/// `AppState::pending_requests` as a loading counter.
struct PendingSignal(Signal<u32>);

impl PendingCounter for PendingSignal {
    fn update(&mut self, f: impl FnOnce(u32) -> u32) {
        // The signal is gone once the app unmounts; nothing left to show then.
        if let Ok(mut pending) = self.0.try_write() {
            *pending = f(*pending);
        }
    }
}

/// [`fetch_json`] with the page-wide loading overlay shown while it runs.
///
/// The overlay is hidden again whatever the outcome, including when the
/// future is dropped. Polling requests do not go through here.
pub async fn call_with_loading<T: DeserializeOwned>(
    state: AppState,
    url: &str,
) -> Result<T, FetchError> {
    let _loading = LoadingGuard::begin(PendingSignal(state.pending_requests));
    fetch_json(url).await
}
