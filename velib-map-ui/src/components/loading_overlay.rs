//! Page-wide loading overlay.

use crate::state::AppState;
use dioxus::prelude::*;

/// Covers the page while a `call_with_loading` request is pending.
#[component]
pub fn LoadingOverlay() -> Element {
    let state = use_context::<AppState>();
    let display = if state.is_loading() { "flex" } else { "none" };

    rsx! {
        div {
            id: "loadingOverlay",
            style: "display: {display}; position: fixed; inset: 0; z-index: 2000; justify-content: center; align-items: center; background: rgba(0, 0, 0, 0.3); color: #fff;",
            "Loading..."
        }
    }
}
