use dioxus::prelude::*;

use api::tag::GalleryItem;

use crate::console::open_image;

#[derive(Clone, PartialEq, Props)]
struct GalleryTileProps {
    item: GalleryItem,
}

#[component]
fn GalleryTile(props: GalleryTileProps) -> Element {
    let item = props.item;
    let name = item.image_name.clone();
    let thumbnail = item.thumbnail_url.clone();

    rsx! {
        div {
            class: "gallery-tile",
            title: "{name}",
            onclick: move |_| open_image(&item),

            match thumbnail {
                Some(src) => rsx! {
                    img { src, alt: "{name}", loading: "lazy" }
                },
                None => rsx! {
                    span { class: "status-message", "{name}" }
                },
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GalleryGridProps {
    images: Vec<GalleryItem>,
}

#[component]
pub fn GalleryGrid(props: GalleryGridProps) -> Element {
    rsx! {
        div { class: "gallery-grid",
            for (idx, item) in props.images.into_iter().enumerate() {
                GalleryTile { key: "{idx}", item }
            }
        }
    }
}
