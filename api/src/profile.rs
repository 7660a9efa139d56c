use serde::{Deserialize, Serialize};

use crate::nullable;

// structs and types

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "nullable")]
    pub first_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub last_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    // filled in by the handler as FirstName, falling back to Email
    #[serde(default, deserialize_with = "nullable")]
    pub display_name: String,
    // presigned, so it expires; never write this back
    #[serde(default, deserialize_with = "nullable", skip_serializing)]
    pub avatar_url: Option<String>,
    // epoch seconds; absent from POST responses
    #[serde(default, deserialize_with = "nullable")]
    pub avatar_updated_at: Option<i64>,
    #[serde(default, deserialize_with = "nullable")]
    pub storage_bytes_used: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub storage_quota_bytes: u64,
}

impl Profile {
    pub fn name(&self) -> &str {
        if !self.display_name.is_empty() {
            &self.display_name
        } else if !self.first_name.is_empty() {
            &self.first_name
        } else {
            &self.email
        }
    }
}

// messages

// POST /profile
//
// only the fields that actually changed are sent; the handler keeps the stored
// value for anything missing
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateProfileReq {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    // base64 jpeg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_blob: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub delete_avatar: bool,
}

impl UpdateProfileReq {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.avatar_blob.is_none()
            && !self.delete_avatar
    }

    pub fn touches_avatar(&self) -> bool {
        self.avatar_blob.is_some() || self.delete_avatar
    }
}

// removing an avatar only acknowledges with a message, everything else echoes
// the stored record back
//
// Profile has defaults for every field and would match any object, so the
// message variant has to be tried first
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UpdateProfileResp {
    Message { message: String },
    Profile(Profile),
}
