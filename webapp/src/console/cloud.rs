use dioxus::prelude::*;

use api::tag::Tag;
use common::tags::CloudWord;

use crate::{
    common::{cloud_rng, storage::try_local_storage},
    components::search_bar::SearchBar,
    console::{DASHBOARD, refresh_tags, select_tag},
};

const CLOUD_FILTER_KEY: &str = "cloud_filter";

#[derive(Clone, PartialEq, Props)]
struct TopTagProps {
    tag: Tag,
}

#[component]
fn TopTag(props: TopTagProps) -> Element {
    let tag = props.tag;
    let key = tag.key.clone();

    rsx! {
        button { class: "pill top-tag", onclick: move |_| select_tag(&key),
            "{tag.name}"
            span { class: "pill-count", "{tag.count}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct WordProps {
    word: CloudWord,
}

#[component]
fn Word(props: WordProps) -> Element {
    let word = props.word;
    let key = word.tag.key.clone();
    let style = format!(
        "font-size: {:.1}px; opacity: {}; color: {};",
        word.size, word.opacity, word.color
    );

    rsx! {
        span {
            class: "cloud-word",
            style: "{style}",
            title: "{word.tag.count} images",
            onclick: move |_| select_tag(&key),
            "{word.tag.name}"
        }
    }
}

#[component]
pub fn TagCloud() -> Element {
    let query = use_signal(|| try_local_storage::<String>(CLOUD_FILTER_KEY).unwrap_or_default());

    use_effect(move || {
        DASHBOARD.write().set_query(query());
    });

    // reshuffled whenever the tag list or the filter changes, but not when
    // some unrelated part of the page re-renders
    let ranking = use_memo(move || DASHBOARD.read().ranking(&mut cloud_rng()));

    let dashboard = DASHBOARD.read();

    if let Some(err) = dashboard.tags_error() {
        return rsx! {
            div { class: "card",
                p { class: "error-message", "Failed to load tags: {err}" }
                button { class: "btn btn-secondary", onclick: move |_| refresh_tags(), "Retry" }
            }
        };
    }

    if !dashboard.tags_loaded() {
        return rsx! {
            span { class: "status-message", "Loading tags..." }
        };
    }

    if dashboard.tags().is_empty() {
        return rsx! {
            span { class: "status-message", "No tags yet. Upload some photos to get started." }
        };
    }

    let ranking = ranking.read();
    let words = ranking.words();
    let status = format!("{} tags", dashboard.tags().len());

    rsx! {
        h2 { class: "section-title", "Top tags" }
        div { class: "top-tags",
            for (idx, tag) in ranking.top.iter().cloned().enumerate() {
                TopTag { key: "{idx}", tag }
            }
        }

        SearchBar {
            search_signal: query,
            storage_key: CLOUD_FILTER_KEY,
            placeholder: "Filter tags...",
            status,
        }

        div { class: "card tag-cloud",
            if words.is_empty() {
                span { class: "status-message", "No tags match \"{query()}\"" }
            }
            for (idx, word) in words.into_iter().enumerate() {
                Word { key: "{idx}", word }
            }
        }
    }
}
