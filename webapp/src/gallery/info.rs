use dioxus::prelude::*;

use api::image::ImageDetail;
use common::detail::{Attribute, ordered_attributes};

use crate::console::select_tag;

#[derive(Clone, PartialEq, Props)]
struct AttributeRowProps {
    attribute: Attribute,
}

#[component]
fn AttributeRow(props: AttributeRowProps) -> Element {
    let Attribute { key, value, pivot } = props.attribute;

    let cell = match pivot {
        Some(pivot) => {
            let search = pivot.search;

            rsx! {
                span {
                    class: "pivot-link",
                    title: "Search for {pivot.label}",
                    onclick: move |_| select_tag(&search),
                    "{value}"
                }
            }
        }
        None => rsx! {
            span { "{value}" }
        },
    };

    rsx! {
        tr {
            td { "{key}" }
            td { {cell} }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct MetadataTableProps {
    image: ImageDetail,
}

#[component]
pub fn MetadataTable(props: MetadataTableProps) -> Element {
    let attributes = ordered_attributes(&props.image);

    if attributes.is_empty() {
        return rsx! {
            span { class: "status-message", "No metadata recorded" }
        };
    }

    rsx! {
        table { class: "detail-table",
            tbody {
                for (idx, attribute) in attributes.into_iter().enumerate() {
                    AttributeRow { key: "{idx}", attribute }
                }
            }
        }
    }
}
