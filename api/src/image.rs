use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::{nullable, string_or_number, tag::GalleryItem};

// structs and types

// face geometry as fractions of the image width/height
//
// the detector promises the unit interval; nothing here enforces it
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingBox {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FaceAttribute {
    Flag(bool),
    Text(String),
    Range { low: i64, high: i64 },
}

impl FaceAttribute {
    // coerce one detector attribute into something we know how to render
    //
    //   {"Value": true, "Confidence": 98.1} -> Flag(true)
    //   {"Value": "Female", ...}            -> Text("Female")
    //   {"Low": 25, "High": 35}             -> Range
    //   true / "Female"                     -> Flag / Text
    //
    // null (the processor's "confidence too low") and anything else is dropped
    pub fn coerce(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(val) => Some(FaceAttribute::Flag(*val)),
            Value::String(val) => Some(FaceAttribute::Text(val.clone())),
            Value::Object(map) => {
                if let (Some(low), Some(high)) = (map.get("Low"), map.get("High")) {
                    return Some(FaceAttribute::Range {
                        low: low.as_f64()?.round() as i64,
                        high: high.as_f64()?.round() as i64,
                    });
                }

                match map.get("Value")? {
                    Value::Bool(val) => Some(FaceAttribute::Flag(*val)),
                    Value::String(val) => Some(FaceAttribute::Text(val.clone())),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "FaceWire")]
pub struct Face {
    pub bounding_box: BoundingBox,
    pub attributes: BTreeMap<String, FaceAttribute>,
    pub emotions: Vec<String>,
}

#[derive(Deserialize)]
struct FaceWire {
    #[serde(rename = "BoundingBox", default, deserialize_with = "nullable")]
    bounding_box: BoundingBox,
    #[serde(rename = "Emotions", default, deserialize_with = "nullable")]
    emotions: Vec<Value>,
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

impl From<FaceWire> for Face {
    fn from(wire: FaceWire) -> Self {
        let attributes = wire
            .rest
            .iter()
            .filter_map(|(key, value)| Some((key.clone(), FaceAttribute::coerce(value)?)))
            .collect();

        // emotions arrive either as {"Type": "HAPPY", "Confidence": ..} or bare strings
        let emotions = wire
            .emotions
            .iter()
            .filter_map(|emotion| match emotion {
                Value::String(val) => Some(val.clone()),
                Value::Object(map) => map.get("Type")?.as_str().map(String::from),
                _ => None,
            })
            .collect();

        Face {
            bounding_box: wire.bounding_box,
            attributes,
            emotions,
        }
    }
}

// the full record behind a thumbnail
//
// the typed fields are the ones the detail view treats specially; every other
// field (exif, hardware, storage/ownership metadata) lands in `fields` and is
// rendered generically
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ImageDetail {
    #[serde(rename = "ImageId", alias = "image_id", deserialize_with = "string_or_number")]
    pub image_id: String,
    #[serde(rename = "ImageName", alias = "image_name", default, deserialize_with = "nullable")]
    pub image_name: String,
    #[serde(rename = "ThumbnailUrl", alias = "thumbnail_url", default, deserialize_with = "nullable")]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "DetailUrl", alias = "detail_url", default, deserialize_with = "nullable")]
    pub detail_url: Option<String>,
    #[serde(rename = "Labels", default, deserialize_with = "nullable")]
    pub labels: Vec<String>,
    #[serde(rename = "Faces", default, deserialize_with = "nullable")]
    pub faces: Vec<Face>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl ImageDetail {
    // prefer the full-size rendition, but a thumbnail is better than nothing
    pub fn display_url(&self) -> Option<&str> {
        self.detail_url
            .as_deref()
            .or(self.thumbnail_url.as_deref())
    }
}

// the shallow record we already hold from the gallery, used when a detail
// fetch fails
impl From<GalleryItem> for ImageDetail {
    fn from(item: GalleryItem) -> Self {
        ImageDetail {
            image_id: item.image_id,
            image_name: item.image_name,
            thumbnail_url: item.thumbnail_url,
            detail_url: None,
            labels: Vec::new(),
            faces: Vec::new(),
            fields: item.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL: &str = r#"{
        "ImageId": "abc",
        "ImageName": "DSC_0001.NEF",
        "DetailUrl": "https://assets/abc?sig",
        "ThumbnailUrl": "https://assets/abc?sig",
        "Labels": ["Dog", "Outdoors"],
        "Make": "NIKON CORPORATION",
        "CameraModel": "NIKON Z 6",
        "ISO": 400,
        "GPSLatitude": null,
        "Faces": [{
            "BoundingBox": {"Width": 0.2, "Height": 0.3, "Left": 0.1, "Top": 0.4},
            "AgeRange": {"Low": 25, "High": 35},
            "Gender": {"Value": "Female", "Confidence": 99.2},
            "Smile": {"Value": true, "Confidence": 91.0},
            "EyesOpen": {"Value": false, "Confidence": 80.0},
            "MouthOpen": null,
            "Emotions": [{"Type": "HAPPY", "Confidence": 95.5}, "CALM"]
        }]
    }"#;

    #[test]
    fn detail_splits_typed_and_free_fields() {
        let image: ImageDetail = serde_json::from_str(DETAIL).unwrap();

        assert_eq!(image.image_id, "abc");
        assert_eq!(image.labels, vec!["Dog", "Outdoors"]);
        assert_eq!(image.fields["Make"], "NIKON CORPORATION");
        assert_eq!(image.fields["ISO"], 400);
        assert!(image.fields.contains_key("GPSLatitude"));
        assert!(!image.fields.contains_key("Labels"));
        assert_eq!(image.display_url(), Some("https://assets/abc?sig"));
    }

    #[test]
    fn faces_are_coerced_on_ingress() {
        let image: ImageDetail = serde_json::from_str(DETAIL).unwrap();
        let face = &image.faces[0];

        assert_eq!(
            face.bounding_box,
            BoundingBox {
                left: 0.1,
                top: 0.4,
                width: 0.2,
                height: 0.3
            }
        );
        assert_eq!(
            face.attributes["AgeRange"],
            FaceAttribute::Range { low: 25, high: 35 }
        );
        assert_eq!(
            face.attributes["Gender"],
            FaceAttribute::Text(String::from("Female"))
        );
        assert_eq!(face.attributes["Smile"], FaceAttribute::Flag(true));
        assert_eq!(face.attributes["EyesOpen"], FaceAttribute::Flag(false));
        assert!(!face.attributes.contains_key("MouthOpen"));
        assert!(!face.attributes.contains_key("BoundingBox"));
        assert_eq!(face.emotions, vec!["HAPPY", "CALM"]);
    }

    #[test]
    fn shallow_detail_from_gallery_item() {
        let item: GalleryItem = serde_json::from_str(
            r#"{"ImageId": "x", "ThumbnailUrl": "https://t/x", "ImageName": "x.jpg", "Timestamp": "2025"}"#,
        )
        .unwrap();
        let image = ImageDetail::from(item);

        assert!(image.faces.is_empty());
        assert_eq!(image.display_url(), Some("https://t/x"));
        assert_eq!(image.fields["Timestamp"], "2025");
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let image: ImageDetail =
            serde_json::from_str(r#"{"ImageId": "x", "Labels": null, "Faces": null}"#).unwrap();

        assert!(image.labels.is_empty());
        assert!(image.faces.is_empty());
        assert_eq!(image.display_url(), None);
    }
}
