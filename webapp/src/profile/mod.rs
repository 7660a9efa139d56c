use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{debug, warn};

use api::{
    ApiError,
    profile::{Profile, UpdateProfileReq},
};
use common::{
    format_bytes,
    profile::{ProfileSlot, merge_saved, name_change, storage_fraction},
};

use crate::{
    common::{
        now_secs,
        session::{self, api_client},
    },
    components::navigation::SignInPrompt,
};

mod avatar;
use avatar::AvatarEditor;

mod stats;
use stats::StatsPanel;

// the signed-in user's profile, shared with the header
pub static PROFILE: GlobalSignal<ProfileSlot> = Signal::global(ProfileSlot::default);

pub fn load_profile() {
    let Some(client) = api_client() else {
        return;
    };

    let issued = session::epoch();
    let req = PROFILE.write().begin();

    spawn(async move {
        match client.get_profile().await {
            Ok(profile) => {
                let outcome = PROFILE.write().apply(&req, profile);
                debug!(?outcome, "profile fetched");
            }
            Err(err) => {
                warn!("failed to load profile: {err}");
                session::check(issued, &err);
            }
        }
    });
}

// send a change and fold the response into PROFILE
//
// the outcome is reported through status_signal, which clears itself after a
// few seconds
pub async fn save_profile(req: UpdateProfileReq, status_signal: Signal<String>) {
    let Some(client) = api_client() else {
        return;
    };

    let issued = session::epoch();
    let result = client.update_profile(&req).await;

    // signed out while the save was in flight
    if !session::is_current(issued) {
        return;
    }

    let message = match result {
        Ok(resp) => {
            let previous = PROFILE.peek().profile().cloned().unwrap_or_default();
            let merged = merge_saved(&previous, &req, resp, now_secs());

            let mut slot = PROFILE.write();
            let save = slot.begin();
            slot.apply(&save, Some(merged));
            drop(slot);

            // the saved record carries a storage key, not a link we can show
            if req.touches_avatar() && !req.delete_avatar {
                debug!("refreshing profile for the new avatar link");
                load_profile();
            }

            String::from("Profile saved")
        }
        Err(ApiError::CooldownActive) => String::from("Avatar cooldown still active"),
        Err(err) => {
            session::check(issued, &err);
            format!("Failed to save profile: {err}")
        }
    };

    report(status_signal, message);

    let task = Timeout::new(4000, move || report(status_signal, String::new()));
    task.forget();
}

// the page may be gone by the time a save finishes
pub fn report(mut status_signal: Signal<String>, message: impl Into<String>) {
    if let Ok(mut status) = status_signal.try_write() {
        *status = message.into();
    }
}

#[derive(Clone, PartialEq, Props)]
struct NameFormProps {
    profile: Profile,
    status_signal: Signal<String>,
}

#[component]
fn NameForm(props: NameFormProps) -> Element {
    let profile = props.profile;
    let status_signal = props.status_signal;

    let first_name = profile.first_name.clone();
    let last_name = profile.last_name.clone();

    rsx! {
        form {
            onsubmit: move |event| {
                let profile = profile.clone();
                async move {
                    let value = |name: &str| {
                        event.values().get(name).map(|v| v.as_value()).unwrap_or_default()
                    };

                    match name_change(&profile, &value("first_name"), &value("last_name")) {
                        Ok(req) => save_profile(req, status_signal).await,
                        Err(err) => report(status_signal, err.to_string()),
                    }
                }
            },

            div { class: "form-group",
                label { class: "form-label", "First name" }
                input { class: "form-input", name: "first_name", r#type: "text", value: "{first_name}" }
            }
            div { class: "form-group",
                label { class: "form-label", "Last name" }
                input { class: "form-input", name: "last_name", r#type: "text", value: "{last_name}" }
            }
            button { class: "btn btn-primary", r#type: "submit", "Save" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct StorageUsageProps {
    profile: Profile,
}

#[component]
fn StorageUsage(props: StorageUsageProps) -> Element {
    let Some(fraction) = storage_fraction(&props.profile) else {
        return rsx! {};
    };

    let used = format_bytes(props.profile.storage_bytes_used);
    let quota = format_bytes(props.profile.storage_quota_bytes);
    let fill = format!("width: {:.1}%;", fraction * 100.0);

    rsx! {
        div { class: "form-group",
            label { class: "form-label", "Storage" }
            div { class: "storage-bar",
                div { class: "storage-fill", style: "{fill}" }
            }
            span { class: "status-message", "{used} of {quota} used" }
        }
    }
}

#[component]
pub fn ProfilePage() -> Element {
    let status_signal = use_signal(String::new);

    if session::active().is_none() {
        return rsx! {
            SignInPrompt {}
        };
    }

    let Some(profile) = PROFILE.read().profile().cloned() else {
        return rsx! {
            span { class: "status-message", "Loading profile..." }
        };
    };

    let email = profile.email.clone();

    rsx! {
        h2 { class: "section-title", "Profile" }

        div { class: "profile-layout",
            div { class: "card",
                AvatarEditor { profile: profile.clone(), status_signal }

                div { class: "form-group",
                    label { class: "form-label", "Email" }
                    span { "{email}" }
                }

                NameForm { profile: profile.clone(), status_signal }
                StorageUsage { profile: profile.clone() }

                if !status_signal().is_empty() {
                    p { class: "status-message", style: "margin-top: var(--space-4);", "{status_signal}" }
                }
            }

            StatsPanel {}
        }
    }
}
