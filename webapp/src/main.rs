#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod console;
use console::Console;

mod gallery;

mod profile;
use profile::ProfilePage;

mod signin;
use signin::SignIn;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// the tag selection and open image live in the dashboard signal rather than
// the url, so going to the profile and back lands on the same gallery page
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Console {},
        #[route("/profile")]
        ProfilePage {},
        #[route("/signin")]
        SignIn {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
