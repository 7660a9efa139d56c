use dioxus::prelude::*;

use common::detail::label_pivots;

use crate::{
    console::{DASHBOARD, select_tag},
    gallery::{faces::FaceOverlay, info::MetadataTable},
};

// the detail modal, drawn over whichever view is showing
//
// clicking outside the content or the X closes it; any pivot starts a new
// search, which closes it as part of the tag selection
#[component]
pub fn ImageModal() -> Element {
    let dashboard = DASHBOARD.read();

    let Some(image) = dashboard.selected_image().cloned() else {
        return rsx! {};
    };
    let loading = dashboard.detail_loading();

    let title = if image.image_name.is_empty() {
        image.image_id.clone()
    } else {
        image.image_name.clone()
    };
    let labels = label_pivots(&image);
    let faces = image.faces.clone();

    rsx! {
        div {
            class: "modal",
            onclick: move |_| DASHBOARD.write().close_detail(),
            div {
                class: "modal-content",
                onclick: move |event| event.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "section-title", style: "margin-bottom: 0;", "{title}" }
                    if loading {
                        span { class: "status-message", "Loading details..." }
                    }
                    span {
                        class: "modal-close",
                        onclick: move |_| DASHBOARD.write().close_detail(),
                        "X"
                    }
                }

                div { class: "detail-body",
                    div { class: "detail-image",
                        match image.display_url() {
                            Some(src) => rsx! {
                                img { src, alt: "{title}" }
                            },
                            None => rsx! {
                                span { class: "status-message", "No preview available" }
                            },
                        }
                        for (idx, face) in faces.into_iter().enumerate() {
                            FaceOverlay { key: "{idx}", face }
                        }
                    }

                    div {
                        if !labels.is_empty() {
                            h3 { class: "form-label", "Labels" }
                            div { class: "detail-labels",
                                for (idx, pivot) in labels.into_iter().enumerate() {
                                    PivotPill { key: "{idx}", search: pivot.search, label: pivot.label }
                                }
                            }
                        }

                        h3 { class: "form-label", "Metadata" }
                        MetadataTable { image: image.clone() }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PivotPillProps {
    label: String,
    search: String,
}

#[component]
pub fn PivotPill(props: PivotPillProps) -> Element {
    let search = props.search;

    rsx! {
        button { class: "pill", onclick: move |_| select_tag(&search), "{props.label}" }
    }
}
