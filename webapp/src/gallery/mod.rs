use dioxus::prelude::*;

use crate::console::{DASHBOARD, load_more};

pub mod detail;
mod faces;
mod grid;
mod info;
use grid::GalleryGrid;

#[derive(Clone, PartialEq, Props)]
struct GalleryNavBarProps {
    label: String,
    status: String,
}

#[component]
fn GalleryNavBar(props: GalleryNavBarProps) -> Element {
    rsx! {
        div { class: "gallery-header",
            button {
                class: "btn btn-secondary",
                onclick: move |_| DASHBOARD.write().back(),
                "Back"
            }
            h2 { class: "section-title", style: "margin-bottom: 0;", "{props.label}" }
            span { class: "status-message", "{props.status}" }
        }
    }
}

#[component]
pub fn Gallery() -> Element {
    let dashboard = DASHBOARD.read();

    let label = dashboard.selected_label().unwrap_or_default().to_owned();
    let images = dashboard.images().to_vec();

    let status = match (dashboard.is_loading(), dashboard.page_error()) {
        (_, Some(err)) => format!("Error: {err}"),
        (true, None) if images.is_empty() => String::from("Searching..."),
        _ if dashboard.next_token().is_some() => format!("Showing {}", images.len()),
        _ => format!("Found {} images", images.len()),
    };

    let empty = !dashboard.is_loading() && dashboard.page_error().is_none() && images.is_empty();
    let can_load_more = dashboard.can_load_more();
    let loading_more = dashboard.is_loading_more();

    rsx! {
        GalleryNavBar { label: label.clone(), status }

        if empty {
            span { class: "status-message", "No images tagged \"{label}\"" }
        } else {
            GalleryGrid { images }
        }

        div { class: "gallery-footer",
            if can_load_more || loading_more {
                button {
                    class: "btn btn-primary",
                    disabled: loading_more,
                    onclick: move |_| load_more(),
                    if loading_more { "Loading..." } else { "Load More" }
                }
            }
        }
    }
}
