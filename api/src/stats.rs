use std::collections::BTreeMap;

use serde::Deserialize;

use crate::nullable;

// GET /stats
//
// aggregate numbers over the whole collection
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "nullable")]
    pub total_images: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub images_with_people: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub top_cameras: BTreeMap<String, u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub top_labels: BTreeMap<String, u64>,
    // keyed by YYYY-MM-DD, so the map order is chronological
    #[serde(default, deserialize_with = "nullable")]
    pub shots_by_date: BTreeMap<String, u64>,
    #[serde(default, deserialize_with = "nullable")]
    pub last_updated: i64,
}

impl Stats {
    // descending by count, for the "top N" lists
    pub fn ranked(map: &BTreeMap<String, u64>) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = map.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_is_descending() {
        let stats: Stats = serde_json::from_str(
            r#"{"total_images": 3, "top_cameras": {"Z 6": 1, "X100V": 2}, "last_updated": 10}"#,
        )
        .unwrap();

        assert_eq!(stats.total_images, 3);
        assert_eq!(Stats::ranked(&stats.top_cameras), vec![("X100V", 2), ("Z 6", 1)]);
        assert!(stats.shots_by_date.is_empty());
    }
}
