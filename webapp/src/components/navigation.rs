use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    common::session::{SESSION, sign_out},
    profile::{PROFILE, load_profile},
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path == target { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let signed_in = SESSION.read().is_some();

    let user = match PROFILE.read().profile() {
        Some(profile) => profile.name().to_owned(),
        None => String::new(),
    };

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::Console {}, style: "display: flex; align-items: center;",
                        span { style: "font-weight: 600; font-size: 1.25rem;", "Carnus Console" }
                    }
                }

                if signed_in {
                    nav { class: "nav-links",
                        NavBarButton { name: "Explore".to_owned(), target: Route::Console {} }
                        NavBarButton { name: "Profile".to_owned(), target: Route::ProfilePage {} }
                        span { class: "nav-user", "{user}" }
                        button {
                            class: "btn btn-sm btn-secondary",
                            onclick: move |_| sign_out(),
                            "Sign Out"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    // the header shows who is signed in, so the profile is fetched here rather
    // than waiting for the profile page
    use_effect(move || {
        if SESSION.read().is_some() && !PROFILE.peek().is_loaded() {
            load_profile();
        }
    });

    rsx! {
        NavBarInner {}
        div { class: "page-content", Outlet::<Route> {} }
    }
}

// shown in place of any page while nobody is signed in
#[component]
pub fn SignInPrompt() -> Element {
    rsx! {
        div { class: "card", style: "max-width: 420px; margin: 10vh auto; text-align: center;",
            h2 { class: "section-title", "Welcome to Carnus" }
            p { class: "status-message", style: "margin-bottom: var(--space-4);",
                "Sign in to browse your photo collection."
            }
            Link { class: "btn btn-primary", to: Route::SignIn {}, "Sign In" }
        }
    }
}
