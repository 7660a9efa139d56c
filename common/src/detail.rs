use std::collections::BTreeMap;

use serde_json::Value;

use api::image::{Face, FaceAttribute, ImageDetail};

use crate::label::normalize;

// camera fields, pinned to the top of the metadata table in this order
pub const HARDWARE_KEYS: [&str; 7] = [
    "Make",
    "CameraModel",
    "Lens",
    "Aperture",
    "ShutterSpeed",
    "ISO",
    "FocalLength",
];

// internal and linking fields that never show up in the metadata table
pub const EXCLUDED_KEYS: [&str; 11] = [
    "Labels",
    "Faces",
    "DetailUrl",
    "ThumbnailUrl",
    "ImageId",
    "ThumbnailKey",
    "PK",
    "SK",
    "ProcessedAt",
    "ImageName",
    "Tag",
];

// index key prefix
pub const EXCLUDED_PREFIX: &str = "GSI";

// face attributes that describe the detection rather than the person
pub const FACE_BLACKLIST: [&str; 5] = ["BoundingBox", "Confidence", "Landmarks", "Pose", "Quality"];

// the processor writes this when a camera field could not be read
const UNKNOWN: &str = "Unknown";

// a clickable value that re-enters the tag search
#[derive(Clone, Debug, PartialEq)]
pub struct Pivot {
    pub label: String,
    pub search: String,
}

impl Pivot {
    fn verbatim(text: impl Into<String>) -> Self {
        let text = text.into();

        Pivot {
            label: text.clone(),
            search: text,
        }
    }

    fn normalized(token: &str) -> Self {
        Pivot::verbatim(normalize(token))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
    pub pivot: Option<Pivot>,
}

pub fn is_hardware(key: &str) -> bool {
    HARDWARE_KEYS.contains(&key)
}

fn is_excluded(key: &str) -> bool {
    EXCLUDED_KEYS.contains(&key) || key.starts_with(EXCLUDED_PREFIX)
}

pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(val) => val.clone(),
        other => other.to_string(),
    }
}

// hardware keys first in their fixed order, then everything else by key,
// ignoring case (Size sorts after alpha, not before it)
pub fn order_fields(fields: &BTreeMap<String, Value>) -> Vec<(&str, &Value)> {
    let mut ordered: Vec<(&str, &Value)> = HARDWARE_KEYS
        .iter()
        .filter_map(|key| fields.get_key_value(*key))
        .map(|(key, value)| (key.as_str(), value))
        .collect();

    let mut rest: Vec<(&str, &Value)> = fields
        .iter()
        .filter(|(key, _)| !is_hardware(key) && !is_excluded(key))
        .map(|(key, value)| (key.as_str(), value))
        .collect();

    // stable, so keys differing only in case keep the map's byte order
    rest.sort_by_cached_key(|(key, _)| key.to_lowercase());

    ordered.extend(rest);
    ordered
}

pub fn ordered_attributes(image: &ImageDetail) -> Vec<Attribute> {
    order_fields(&image.fields)
        .into_iter()
        .map(|(key, value)| {
            let value = display_value(value);
            let pivot = (is_hardware(key) && !value.is_empty() && value != UNKNOWN)
                .then(|| Pivot::verbatim(value.clone()));

            Attribute {
                key: key.to_owned(),
                value,
                pivot,
            }
        })
        .collect()
}

// detected labels are already backend tag names
pub fn label_pivots(image: &ImageDetail) -> Vec<Pivot> {
    image
        .labels
        .iter()
        .filter(|label| !label.trim().is_empty())
        .map(|label| Pivot::verbatim(label.as_str()))
        .collect()
}

// percentage geometry for a face box drawn over the displayed image
//
// the box is passed through unchanged: values outside [0, 1] are a detector
// problem and are drawn wherever they land
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl OverlayBox {
    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; width: {:.3}%; height: {:.3}%;",
            self.left, self.top, self.width, self.height
        )
    }
}

pub fn overlay(face: &Face) -> OverlayBox {
    let bbox = face.bounding_box;

    OverlayBox {
        left: bbox.left * 100.0,
        top: bbox.top * 100.0,
        width: bbox.width * 100.0,
        height: bbox.height * 100.0,
    }
}

// the pills shown while hovering a face
//
//   Smile: true         -> "Smile"
//   EyesOpen: false     -> (nothing)
//   Gender: "Female"    -> "Female"
//   AgeRange: {25, 35}  -> "Age 25-35", used verbatim
//   Emotions: [HAPPY]   -> "Happy"
pub fn face_pivots(face: &Face) -> Vec<Pivot> {
    let attributes = face
        .attributes
        .iter()
        .filter(|(key, _)| !FACE_BLACKLIST.contains(&key.as_str()))
        .filter_map(|(key, value)| match value {
            FaceAttribute::Flag(true) => Some(Pivot::normalized(key)),
            FaceAttribute::Flag(false) => None,
            FaceAttribute::Text(text) if text.trim().is_empty() => None,
            FaceAttribute::Text(text) => Some(Pivot::normalized(text)),
            FaceAttribute::Range { low, high } => Some(Pivot::verbatim(format!("Age {low}-{high}"))),
        });

    let emotions = face
        .emotions
        .iter()
        .filter(|emotion| !emotion.trim().is_empty())
        .map(|emotion| Pivot::normalized(emotion));

    attributes.chain(emotions).collect()
}
