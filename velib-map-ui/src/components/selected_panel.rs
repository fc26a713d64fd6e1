//! Side panel for the selected station or bike.

use crate::browser::navigate;
use crate::loaders::load_station_history;
use crate::state::AppState;
use dioxus::prelude::*;
use velib_map::selection::PanelAction;
use velib_utils::routes::bike_page;

/// Summary of the last clicked marker; hidden until something is selected.
#[component]
pub fn SelectedPanel() -> Element {
    let state = use_context::<AppState>();
    let Some(summary) = state.selection.read().as_ref().map(|s| s.summary()) else {
        return rsx! {};
    };

    let label = summary.action.label();
    let action = summary.action.clone();
    let on_action = move |_| match &action {
        PanelAction::StationHistory { code } => {
            spawn(load_station_history(state, code.clone()));
        }
        PanelAction::BikeDetails { name } => navigate(&bike_page(name)),
    };

    rsx! {
        div {
            id: "selectedInfo",
            class: "card mb-3",
            div {
                id: "selectedContent",
                h6 { "{summary.title}" }
                for line in summary.lines.iter() {
                    p {
                        class: "mb-1",
                        "{line}"
                    }
                }
                button {
                    class: "btn btn-sm btn-primary w-100 mt-2",
                    onclick: on_action,
                    "{label}"
                }
            }
        }
    }
}
