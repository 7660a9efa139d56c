use dioxus::prelude::*;
use tracing::debug;

use api::tag::GalleryItem;
use common::dashboard::{Dashboard, PageRequest, View};

use crate::{
    common::{
        CONFIG,
        session::{self, api_client},
    },
    components::navigation::SignInPrompt,
    gallery::{Gallery, detail::ImageModal},
};

mod cloud;
use cloud::TagCloud;

// the one piece of console state, shared by every view and by the request
// handlers below
pub static DASHBOARD: GlobalSignal<Dashboard> = Signal::global(Dashboard::new);

// actions
//
// each one applies its transition synchronously, then spawns the fetch.  the
// completion handler passes the request ticket back to the dashboard, which
// drops the result if the user has since moved on

pub fn refresh_tags() {
    let Some(client) = api_client() else {
        return;
    };

    let issued = session::epoch();

    // Console calls this while rendering, so the ticket is taken in the task
    spawn(async move {
        if !session::is_current(issued) {
            return;
        }
        let req = DASHBOARD.write().request_tags();

        match client.get_tags().await {
            Ok(tags) => {
                let outcome = DASHBOARD.write().set_tags(&req, tags);
                debug!(?outcome, "tags fetched");
            }
            Err(err) => {
                DASHBOARD.write().fail_tags(&req, &err);
                session::check(issued, &err);
            }
        }
    });
}

// a tag click from the cloud, or any pivot in the detail modal
pub fn select_tag(value: &str) {
    let Some(client) = api_client() else {
        return;
    };

    if let Some(req) = DASHBOARD.write().select_tag(value) {
        fetch_page(client, req);
    }
}

pub fn load_more() {
    let Some(client) = api_client() else {
        return;
    };

    if let Some(req) = DASHBOARD.write().load_more() {
        fetch_page(client, req);
    }
}

fn fetch_page(client: api::ApiClient, req: PageRequest) {
    let limit = CONFIG.page_size;
    let issued = session::epoch();

    spawn(async move {
        let result = client.search_tag(&req.to_req(limit)).await;

        match result {
            Ok(resp) => {
                let outcome = DASHBOARD.write().apply_page(&req, resp);
                debug!(?outcome, generation = req.generation, "page fetched");
            }
            Err(err) => {
                DASHBOARD.write().fail_page(&req, &err);
                session::check(issued, &err);
            }
        }
    });
}

pub fn open_image(item: &GalleryItem) {
    let Some(client) = api_client() else {
        return;
    };

    let issued = session::epoch();
    let req = DASHBOARD.write().open_image(item);

    spawn(async move {
        let result = client.get_image(&req.image_id).await;
        let failure = result.as_ref().err().cloned();

        DASHBOARD.write().apply_detail(&req, result);

        if let Some(err) = failure {
            session::check(issued, &err);
        }
    });
}

#[component]
pub fn Console() -> Element {
    // the tag list survives a trip to the profile page
    use_hook(|| {
        if !DASHBOARD.peek().tags_loaded() {
            refresh_tags();
        }
    });

    if session::active().is_none() {
        return rsx! {
            SignInPrompt {}
        };
    }

    let view = DASHBOARD.read().view();
    let modal_open = DASHBOARD.read().selected_image().is_some();

    rsx! {
        match view {
            View::Cloud => rsx! {
                TagCloud {}
            },
            View::Gallery => rsx! {
                Gallery {}
            },
        }

        if modal_open {
            ImageModal {}
        }
    }
}
