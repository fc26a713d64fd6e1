//! Header search box.

use crate::browser::navigate;
use dioxus::prelude::*;
use velib_utils::routes::search_target;

/// Search by bike id (digits only) or station name.
#[component]
pub fn SearchBox() -> Element {
    let mut query = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(target) = search_target(&query.peek()) {
            navigate(&target);
        }
    };

    rsx! {
        form {
            id: "searchForm",
            style: "display: flex; gap: 6px;",
            onsubmit: on_submit,
            input {
                id: "searchInput",
                r#type: "search",
                placeholder: "Bike id or station name",
                value: "{query}",
                oninput: move |evt: Event<FormData>| query.set(evt.value()),
            }
            button {
                r#type: "submit",
                class: "btn btn-sm btn-outline-light",
                "Search"
            }
        }
    }
}
