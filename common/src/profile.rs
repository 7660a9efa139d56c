use base64::{
    Engine,
    engine::{GeneralPurpose, general_purpose},
};
use thiserror::Error;
use tracing::debug;

use api::profile::{Profile, UpdateProfileReq, UpdateProfileResp};

use crate::dashboard::Outcome;

// the backend enforces the same numbers; checking them here saves the upload
pub const AVATAR_COOLDOWN_SECS: i64 = 86_400;
pub const AVATAR_MAX_BYTES: usize = 20 * 1024;

const ENGINE: GeneralPurpose = general_purpose::STANDARD;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("avatar must be at most 20 KB (this one is {size} bytes)")]
    AvatarTooLarge { size: usize },

    #[error("avatar can be changed again in {}", until(.remaining_secs))]
    CooldownActive { remaining_secs: i64 },

    #[error("nothing to save")]
    NothingChanged,
}

fn until(secs: &i64) -> String {
    format_duration(*secs)
}

pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    let (hours, minutes) = (secs / 3600, (secs % 3600) / 60);

    match (hours, minutes) {
        (0, 0) => format!("{secs}s"),
        (0, m) => format!("{m}m"),
        (h, m) => format!("{h}h {m}m"),
    }
}

// seconds until the avatar may change again; zero when it already may
pub fn cooldown_remaining(profile: &Profile, now: i64) -> i64 {
    match profile.avatar_updated_at {
        Some(updated) => (updated + AVATAR_COOLDOWN_SECS - now).max(0),
        None => 0,
    }
}

pub fn check_cooldown(profile: &Profile, now: i64) -> Result<(), ProfileError> {
    match cooldown_remaining(profile, now) {
        0 => Ok(()),
        remaining_secs => Err(ProfileError::CooldownActive { remaining_secs }),
    }
}

pub fn check_avatar(profile: &Profile, size: usize, now: i64) -> Result<(), ProfileError> {
    if size > AVATAR_MAX_BYTES {
        return Err(ProfileError::AvatarTooLarge { size });
    }

    check_cooldown(profile, now)
}

// only the name fields that actually differ end up in the request
pub fn name_change(
    profile: &Profile,
    first_name: &str,
    last_name: &str,
) -> Result<UpdateProfileReq, ProfileError> {
    let changed = |old: &str, new: &str| {
        let new = new.trim();
        (old != new).then(|| new.to_owned())
    };

    let req = UpdateProfileReq {
        first_name: changed(&profile.first_name, first_name),
        last_name: changed(&profile.last_name, last_name),
        ..Default::default()
    };

    if req.is_empty() {
        return Err(ProfileError::NothingChanged);
    }

    Ok(req)
}

// the limit applies to the raw image, not the base64 text sent for it
pub fn avatar_upload(
    profile: &Profile,
    image: &[u8],
    now: i64,
) -> Result<UpdateProfileReq, ProfileError> {
    check_avatar(profile, image.len(), now)?;

    Ok(UpdateProfileReq {
        avatar_blob: Some(ENGINE.encode(image)),
        ..Default::default()
    })
}

// inline preview for an avatar that has not been uploaded yet
pub fn avatar_preview(image: &[u8]) -> String {
    format!("data:image/*;base64,{}", ENGINE.encode(image))
}

pub fn avatar_removal(profile: &Profile, now: i64) -> Result<UpdateProfileReq, ProfileError> {
    check_cooldown(profile, now)?;

    Ok(UpdateProfileReq {
        delete_avatar: true,
        ..Default::default()
    })
}

// fold a successful save back into the profile we are showing
//
// the POST response is not a complete record: it leaves out the cooldown
// timestamp and display name, and its AvatarUrl is a storage key rather than a
// presigned link.  avatar removal only returns a message
pub fn merge_saved(
    previous: &Profile,
    req: &UpdateProfileReq,
    resp: UpdateProfileResp,
    now: i64,
) -> Profile {
    let mut merged = match resp {
        UpdateProfileResp::Profile(saved) => saved,
        UpdateProfileResp::Message { .. } => {
            let mut merged = previous.clone();
            if let Some(first_name) = &req.first_name {
                merged.first_name = first_name.clone();
            }
            if let Some(last_name) = &req.last_name {
                merged.last_name = last_name.clone();
            }
            merged
        }
    };

    if merged.email.is_empty() {
        merged.email = previous.email.clone();
    }

    merged.display_name = if merged.first_name.is_empty() {
        merged.email.clone()
    } else {
        merged.first_name.clone()
    };

    merged.avatar_url = if req.delete_avatar { None } else { previous.avatar_url.clone() };

    merged.avatar_updated_at = if req.touches_avatar() {
        Some(now)
    } else {
        merged.avatar_updated_at.or(previous.avatar_updated_at)
    };

    if merged.storage_quota_bytes == 0 {
        merged.storage_bytes_used = previous.storage_bytes_used;
        merged.storage_quota_bytes = previous.storage_quota_bytes;
    }

    merged
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProfileRequest {
    pub ticket: u64,
}

// the signed-in user's profile
//
// loads and saves are ticketed like the dashboard's fetches.  a save counts as
// the latest word, so a load issued before it cannot overwrite the merge, and
// reset keeps counting so nothing from a previous session lands afterwards
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileSlot {
    profile: Option<Profile>,
    ticket: u64,
}

impl ProfileSlot {
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.profile.is_some()
    }

    pub fn begin(&mut self) -> ProfileRequest {
        self.ticket += 1;
        ProfileRequest {
            ticket: self.ticket,
        }
    }

    // a missing record means nothing has been saved yet
    pub fn apply(&mut self, req: &ProfileRequest, profile: Option<Profile>) -> Outcome {
        if req.ticket != self.ticket {
            debug!(ticket = req.ticket, "dropping stale profile");
            return Outcome::Stale;
        }

        self.profile = Some(profile.unwrap_or_default());
        Outcome::Applied
    }

    pub fn reset(&mut self) {
        self.ticket += 1;
        self.profile = None;
    }
}

// share of the quota in use, clamped to [0, 1]; None without a quota
pub fn storage_fraction(profile: &Profile) -> Option<f64> {
    if profile.storage_quota_bytes == 0 {
        return None;
    }

    Some((profile.storage_bytes_used as f64 / profile.storage_quota_bytes as f64).min(1.0))
}
