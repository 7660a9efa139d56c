use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{nullable, string_or_number};

// structs and types

// namespace marker the backend puts in front of every tag key
pub const TAG_PREFIX: &str = "TAG#";

pub const DEFAULT_PAGE_SIZE: u32 = 50;

// the backend tag key for a display value
pub fn tag_key(value: &str) -> String {
    if value.starts_with(TAG_PREFIX) {
        value.to_owned()
    } else {
        format!("{TAG_PREFIX}{value}")
    }
}

// the display value for a backend tag key
pub fn display_tag(key: &str) -> &str {
    key.strip_prefix(TAG_PREFIX).unwrap_or(key)
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Tag {
    pub name: String,
    pub count: u64,
    pub key: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        let name = name.into();
        let key = tag_key(&name);

        Tag { name, count, key }
    }
}

// one row of GET /tags
//
// the deployed frontend reads Text/Count while the handler writes text/count,
// so accept both spellings
#[derive(Clone, Debug, Deserialize)]
pub struct TagWire {
    #[serde(rename = "Text", alias = "text")]
    pub text: String,
    #[serde(rename = "Count", alias = "count", default, deserialize_with = "nullable")]
    pub count: i64,
}

impl From<TagWire> for Tag {
    fn from(wire: TagWire) -> Self {
        Tag::new(wire.text, wire.count.max(0) as u64)
    }
}

// a single thumbnail in a tag search result
//
// anything beyond the three fields we render is kept around verbatim, since
// the shallow record doubles as the detail view when the full fetch fails
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(rename = "ImageId", alias = "image_id", deserialize_with = "string_or_number")]
    pub image_id: String,
    #[serde(rename = "ThumbnailUrl", alias = "thumbnail_url", default, deserialize_with = "nullable")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "ImageName", alias = "image_name", default, deserialize_with = "nullable")]
    pub image_name: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

// messages

// GET /tags/{key}
#[derive(Clone, Debug, PartialEq)]
pub struct SearchTagReq {
    pub tag_key: String,
    pub limit: u32,
    pub next_token: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchTagResp {
    #[serde(default, deserialize_with = "nullable")]
    pub items: Vec<GalleryItem>,
    #[serde(default, deserialize_with = "nullable")]
    pub next_token: Option<String>,
}
