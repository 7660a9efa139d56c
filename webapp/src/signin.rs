use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::{debug, warn};

use common::auth::{login_url, parse_callback};

use crate::{
    Route,
    common::{CONFIG, now_secs, session},
};

fn current_fragment() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

fn redirect(url: &str) {
    debug!("redirecting to hosted sign-in");

    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(url) {
            warn!("failed to reach the hosted sign-in page: {err:?}");
        }
    }
}

// both ends of the hosted sign-in
//
// with no fragment this sends the browser to the provider; the provider sends
// it back here with the token (or an error) in the fragment
#[component]
pub fn SignIn() -> Element {
    let outcome = use_hook(|| {
        let fragment = current_fragment();

        if fragment.trim_start_matches('#').is_empty() {
            redirect(&login_url(&CONFIG.auth));
            return None;
        }

        Some(parse_callback(&fragment, now_secs()))
    });

    let started = outcome.clone();
    use_effect(move || {
        if let Some(Ok(session)) = started.clone() {
            session::start(session);
            navigator().replace(Route::Console {});
        }
    });

    match outcome {
        Some(Err(err)) => rsx! {
            div { class: "card", style: "max-width: 420px; margin: 10vh auto;",
                p { class: "error-message", "{err}" }
                button {
                    class: "btn btn-primary",
                    style: "margin-top: var(--space-4);",
                    onclick: move |_| redirect(&login_url(&CONFIG.auth)),
                    "Try again"
                }
            }
        },
        _ => rsx! {
            span { class: "status-message", "Signing in..." }
        },
    }
}
