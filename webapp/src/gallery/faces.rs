use dioxus::prelude::*;

use api::image::Face;
use common::detail::{face_pivots, overlay};

use crate::gallery::detail::PivotPill;

#[derive(Clone, PartialEq, Props)]
pub struct FaceOverlayProps {
    face: Face,
}

// one detected face: a box over the image and, while hovered, its attributes
#[component]
pub fn FaceOverlay(props: FaceOverlayProps) -> Element {
    let mut hovered = use_signal(|| false);

    let style = overlay(&props.face).style();
    let pivots = face_pivots(&props.face);

    rsx! {
        div {
            class: "face-box",
            style: "{style}",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),

            if hovered() && !pivots.is_empty() {
                div { class: "face-popup",
                    for (idx, pivot) in pivots.into_iter().enumerate() {
                        PivotPill { key: "{idx}", search: pivot.search, label: pivot.label }
                    }
                }
            }
        }
    }
}
