use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::stats::Stats;

use crate::{
    Route,
    common::{
        local_time,
        session::{self, api_client},
    },
    console::select_tag,
};

const STATS_TOP: usize = 5;
const STATS_RECENT_DAYS: usize = 7;

#[derive(Clone, PartialEq, Props)]
struct RankedListProps {
    title: &'static str,
    entries: Vec<(String, u64)>,
    // labels are tag names, so they can open the gallery
    #[props(default)]
    pivot: bool,
}

#[component]
fn RankedList(props: RankedListProps) -> Element {
    let pivot = props.pivot;

    rsx! {
        div {
            h3 { class: "form-label", "{props.title}" }
            if props.entries.is_empty() {
                span { class: "status-message", "Nothing yet" }
            }
            ul { class: "stats-list",
                for (idx, (name, count)) in props.entries.into_iter().enumerate() {
                    RankedEntry { key: "{idx}", name, count, pivot }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct RankedEntryProps {
    name: String,
    count: u64,
    pivot: bool,
}

#[component]
fn RankedEntry(props: RankedEntryProps) -> Element {
    let name = props.name.clone();

    rsx! {
        li {
            if props.pivot {
                span {
                    class: "pivot-link",
                    onclick: move |_| {
                        select_tag(&name);
                        navigator().push(Route::Console {});
                    },
                    "{props.name}"
                }
            } else {
                span { "{props.name}" }
            }
            span { class: "status-message", "{props.count}" }
        }
    }
}

fn top(map: &std::collections::BTreeMap<String, u64>, count: usize) -> Vec<(String, u64)> {
    Stats::ranked(map)
        .into_iter()
        .take(count)
        .map(|(name, value)| (name.to_owned(), value))
        .collect()
}

#[component]
pub fn StatsPanel() -> Element {
    let stats_future = use_resource(move || async move {
        let client = api_client()?;
        let issued = session::epoch();
        let result = client.get_stats().await;

        if let Err(err) = &result {
            session::check(issued, err);
        }

        Some(result)
    });

    let stats = match &*stats_future.read() {
        Some(Some(Ok(stats))) => stats.clone(),
        Some(Some(Err(err))) => {
            return rsx! {
                div { class: "card",
                    span { class: "error-message", "Failed to load stats: {err}" }
                }
            };
        }
        Some(None) => return rsx! {},
        None => {
            return rsx! {
                div { class: "card",
                    span { class: "status-message", "Loading stats..." }
                }
            };
        }
    };

    // most recent days last, as they come out of the map
    let recent: Vec<(String, u64)> = stats
        .shots_by_date
        .iter()
        .rev()
        .take(STATS_RECENT_DAYS)
        .rev()
        .map(|(date, count)| (date.clone(), *count))
        .collect();

    let updated = match stats.last_updated {
        0 => String::from("never"),
        secs => local_time(secs),
    };

    rsx! {
        div { class: "card",
            h2 { class: "section-title", "Collection" }

            div { class: "stats-grid", style: "margin-bottom: var(--space-4);",
                div {
                    div { class: "stat-value", "{stats.total_images}" }
                    span { class: "status-message", "images" }
                }
                div {
                    div { class: "stat-value", "{stats.images_with_people}" }
                    span { class: "status-message", "with people" }
                }
            }

            div { class: "stats-grid",
                RankedList { title: "Top labels", entries: top(&stats.top_labels, STATS_TOP), pivot: true }
                RankedList { title: "Top cameras", entries: top(&stats.top_cameras, STATS_TOP) }
                RankedList { title: "Recent days", entries: recent }
            }

            p { class: "status-message", style: "margin-top: var(--space-4);", "Updated {updated}" }
        }
    }
}
