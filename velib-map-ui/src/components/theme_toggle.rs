//! Light/dark theme switch.

use crate::browser::{apply_theme, persist_theme};
use crate::state::AppState;
use dioxus::prelude::*;

/// Checkbox switching the page theme. The map tiles are not affected.
#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let theme = (state.theme)();
    let icon = theme.icon_class();

    // Keep the root attribute in sync, including the stored theme on first render
    use_effect(move || {
        apply_theme((state.theme)());
    });

    let on_change = move |_| {
        let next = state.theme.peek().toggled();
        persist_theme(next);
        state.theme.set(next);
    };

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 6px; cursor: pointer;",
            input {
                id: "themeToggle",
                r#type: "checkbox",
                checked: theme.is_dark(),
                onchange: on_change,
            }
            i {
                id: "themeIcon",
                class: icon,
            }
        }
    }
}
