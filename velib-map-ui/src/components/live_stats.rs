//! Live statistics panel.

use crate::state::AppState;
use dioxus::prelude::*;
use velib_map::stats::stat_lines;

/// Overview counters, refreshed by the statistics poll.
#[component]
pub fn LiveStatsPanel() -> Element {
    let state = use_context::<AppState>();
    let lines = state.stats.read().as_ref().map(stat_lines);

    rsx! {
        div {
            id: "liveStats",
            class: "card mb-3",
            h6 { "Live Statistics" }
            match lines {
                Some(lines) => rsx! {
                    for line in lines {
                        p {
                            key: "{line.label}",
                            strong { "{line.label}:" }
                            " {line.value}"
                        }
                    }
                },
                None => rsx! {
                    p { style: "color: #666;", "Waiting for data..." }
                },
            }
        }
    }
}
