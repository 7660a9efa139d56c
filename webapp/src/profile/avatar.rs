use dioxus::prelude::*;
use tracing::debug;

use api::profile::Profile;
use common::{
    format_bytes,
    profile::{
        AVATAR_MAX_BYTES, avatar_preview, avatar_removal, avatar_upload, check_avatar,
        cooldown_remaining, format_duration,
    },
};

use crate::{
    common::now_secs,
    profile::{report, save_profile},
};

// a picked file waiting for "Upload"
#[derive(Clone, Debug, PartialEq)]
struct PendingAvatar {
    name: String,
    image: Vec<u8>,
}

#[derive(Clone, PartialEq, Props)]
pub struct AvatarEditorProps {
    profile: Profile,
    status_signal: Signal<String>,
}

#[component]
pub fn AvatarEditor(props: AvatarEditorProps) -> Element {
    let status_signal = props.status_signal;
    let mut pending = use_signal(|| None::<PendingAvatar>);

    let profile = props.profile;
    let remaining = cooldown_remaining(&profile, now_secs());
    let locked = remaining > 0;
    let hint = if locked {
        format!("Avatar can be changed again in {}", format_duration(remaining))
    } else {
        format!("Up to {}, changeable once a day", format_bytes(AVATAR_MAX_BYTES as u64))
    };

    let preview = match &*pending.read() {
        Some(avatar) => Some(avatar_preview(&avatar.image)),
        None => profile.avatar_url.clone(),
    };
    let has_avatar = profile.avatar_url.is_some();

    let picked = profile.clone();

    let actions = match pending() {
        Some(avatar) => {
            let label = format!("Upload {}", avatar.name);

            rsx! {
                button {
                    class: "btn btn-primary btn-sm",
                    onclick: move |_| {
                        let profile = profile.clone();
                        let avatar = avatar.clone();
                        async move {
                            match avatar_upload(&profile, &avatar.image, now_secs()) {
                                Ok(req) => {
                                    pending.set(None);
                                    save_profile(req, status_signal).await;
                                }
                                Err(err) => report(status_signal, err.to_string()),
                            }
                        }
                    },
                    "{label}"
                }
                button {
                    class: "btn btn-secondary btn-sm",
                    onclick: move |_| pending.set(None),
                    "Cancel"
                }
            }
        }
        None if has_avatar => rsx! {
            button {
                class: "btn btn-danger btn-sm",
                disabled: locked,
                onclick: move |_| {
                    let profile = profile.clone();
                    async move {
                        match avatar_removal(&profile, now_secs()) {
                            Ok(req) => save_profile(req, status_signal).await,
                            Err(err) => report(status_signal, err.to_string()),
                        }
                    }
                },
                "Remove avatar"
            }
        },
        None => rsx! {},
    };

    rsx! {
        div { class: "form-group", style: "align-items: flex-start;",
            label { class: "form-label", "Avatar" }

            match preview {
                Some(src) => rsx! {
                    img { class: "avatar", src, alt: "avatar" }
                },
                None => rsx! {
                    div { class: "avatar" }
                },
            }

            span { class: "status-message", "{hint}" }

            input {
                r#type: "file",
                accept: "image/*",
                disabled: locked,
                onchange: move |event: FormEvent| {
                    let profile = picked.clone();
                    async move {
                        let Some(files) = event.files() else {
                            return;
                        };
                        let Some(name) = files.files().into_iter().next() else {
                            return;
                        };
                        let Some(bytes) = files.read_file(&name).await else {
                            report(status_signal, format!("Could not read {name}"));
                            return;
                        };

                        // rejected before it is ever previewed
                        if let Err(err) = check_avatar(&profile, bytes.len(), now_secs()) {
                            pending.set(None);
                            report(status_signal, err.to_string());
                            return;
                        }

                        debug!(size = bytes.len(), "avatar picked");
                        pending.set(Some(PendingAvatar { name, image: bytes }));
                    }
                },
            }

            div { style: "display: flex; gap: var(--space-2);", {actions} }
        }
    }
}
