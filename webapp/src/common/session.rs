use dioxus::prelude::*;
use tracing::{debug, info, warn};

use api::{ApiClient, ApiError};
use common::auth::{Epoch, Session, logout_url};

use crate::{
    common::{
        CONFIG, now_secs,
        storage::{delete_local_storage, set_local_storage, try_local_storage},
    },
    console::DASHBOARD,
    profile::PROFILE,
};

const SESSION_KEY: &str = "session";

pub static SESSION: GlobalSignal<Option<Session>> = Signal::global(restore);

// moves on with every sign-in and sign-out
static EPOCH: GlobalSignal<Epoch> = Signal::global(Epoch::default);

fn restore() -> Option<Session> {
    let session: Session = try_local_storage(SESSION_KEY)?;

    if session.is_expired(now_secs()) {
        debug!("stored session has expired");
        delete_local_storage(SESSION_KEY);
        return None;
    }

    Some(session)
}

// the current session, if it is still usable
pub fn active() -> Option<Session> {
    (*SESSION.read())
        .clone()
        .filter(|session| !session.is_expired(now_secs()))
}

pub fn api_client() -> Option<ApiClient> {
    active().map(|session| ApiClient::new(CONFIG.api_root.clone(), session.id_token))
}

// stamp for a request about to be issued
pub fn epoch() -> Epoch {
    *EPOCH.peek()
}

// false once the session a request was issued under has ended
pub fn is_current(issued: Epoch) -> bool {
    issued == epoch()
}

pub fn start(session: Session) {
    info!("signed in");
    set_local_storage(SESSION_KEY, &session);
    EPOCH.write().advance();
    *SESSION.write() = Some(session);
}

fn clear() {
    delete_local_storage(SESSION_KEY);
    EPOCH.write().advance();
    *SESSION.write() = None;
    PROFILE.write().reset();
    DASHBOARD.write().sign_out();
}

// the backend no longer accepts the token; the sign-in prompt takes over
//
// a rejection of a token from an earlier session says nothing about this one
pub fn check(issued: Epoch, err: &ApiError) {
    if *err != ApiError::Unauthorized {
        return;
    }

    if !is_current(issued) {
        debug!("ignoring rejection of an earlier session");
        return;
    }

    warn!("session rejected by the api, signing out");
    clear();
}

pub fn sign_out() {
    clear();

    let url = logout_url(&CONFIG.auth);
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(&url) {
            warn!("failed to reach the hosted sign-out page: {err:?}");
        }
    }
}
