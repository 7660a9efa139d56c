use dioxus::prelude::*;

use crate::common::storage::set_local_storage;

// a live filter box; every keystroke updates the signal and is remembered
// across reloads under storage_key
#[derive(Clone, PartialEq, Props)]
pub struct SearchBarProps {
    search_signal: Signal<String>,
    storage_key: &'static str,
    placeholder: &'static str,
    #[props(default)]
    status: String,
}

#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    let mut search_signal = props.search_signal;
    let storage_key = props.storage_key;
    let placeholder = props.placeholder;
    let status = props.status.clone();

    rsx! {
        div {
            class: "search-bar",
            style: "
                display: flex;
                align-items: center;
                gap: var(--space-2);
                margin-bottom: var(--space-6);
                background-color: var(--surface);
                padding: var(--space-3);
                border-radius: var(--radius-lg);
                box-shadow: var(--shadow-sm);
            ",
            input {
                class: "form-input",
                style: "flex: 1;",
                r#type: "search",
                placeholder: "{placeholder}",
                value: "{search_signal()}",
                oninput: move |event| {
                    let filter = event.value();
                    set_local_storage(storage_key, filter.clone());
                    search_signal.set(filter);
                },
            }

            if !status.is_empty() {
                span {
                    class: "search-status",
                    style: "margin-left: var(--space-4); color: var(--text-tertiary);",
                    "{status}"
                }
            }
        }
    }
}
