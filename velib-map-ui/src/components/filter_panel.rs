//! Map filter checkboxes.

use crate::loaders::{load_live_trips, load_malfunctions, load_stations};
use crate::state::AppState;
use dioxus::prelude::*;
use velib_map::FilterState;

#[derive(Clone, Copy, PartialEq)]
enum Toggle {
    All,
    Empty,
    Full,
    InTransit,
    Malfunctioning,
}

impl Toggle {
    fn flag(self, filters: &mut FilterState) -> &mut bool {
        match self {
            Toggle::All => &mut filters.show_all,
            Toggle::Empty => &mut filters.show_empty,
            Toggle::Full => &mut filters.show_full,
            Toggle::InTransit => &mut filters.show_in_transit,
            Toggle::Malfunctioning => &mut filters.show_malfunctioning,
        }
    }
}

/// Filter checkboxes. Each change refetches the endpoint it affects.
#[component]
pub fn FilterPanel() -> Element {
    let mut state = use_context::<AppState>();
    let filters = (state.filters)();

    let mut on_toggle = move |toggle: Toggle| {
        {
            let mut filters = state.filters.write();
            let flag = toggle.flag(&mut filters);
            *flag = !*flag;
        }
        match toggle {
            Toggle::All | Toggle::Empty | Toggle::Full => {
                spawn(load_stations(state));
            }
            Toggle::InTransit => {
                spawn(load_live_trips(state));
            }
            Toggle::Malfunctioning => {
                spawn(load_malfunctions(state));
            }
        }
    };

    rsx! {
        div {
            class: "card mb-3",
            h6 { "Filters" }
            label {
                style: "display: block;",
                input {
                    id: "showStations",
                    r#type: "checkbox",
                    checked: filters.show_all,
                    onchange: move |_| on_toggle(Toggle::All),
                }
                " All stations"
            }
            label {
                style: "display: block;",
                input {
                    id: "showEmptyStations",
                    r#type: "checkbox",
                    checked: filters.show_empty,
                    onchange: move |_| on_toggle(Toggle::Empty),
                }
                " Empty stations"
            }
            label {
                style: "display: block;",
                input {
                    id: "showFullStations",
                    r#type: "checkbox",
                    checked: filters.show_full,
                    onchange: move |_| on_toggle(Toggle::Full),
                }
                " Full stations"
            }
            label {
                style: "display: block;",
                input {
                    id: "showInTransit",
                    r#type: "checkbox",
                    checked: filters.show_in_transit,
                    onchange: move |_| on_toggle(Toggle::InTransit),
                }
                " Bikes in transit"
            }
            label {
                style: "display: block;",
                input {
                    id: "showMalfunctions",
                    r#type: "checkbox",
                    checked: filters.show_malfunctioning,
                    onchange: move |_| on_toggle(Toggle::Malfunctioning),
                }
                " Malfunctioning bikes"
            }
        }
    }
}
