use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use api::tag::Tag;

// number of tags pinned in the top bar
pub const TOP_COUNT: usize = 5;

// cloud font sizes, in px
pub const FONT_MIN: f64 = 12.0;
pub const FONT_RANGE: f64 = 63.0;
pub const FONT_FLAT: f64 = 20.0;

// anything smaller is drawn faded
pub const FONT_EMPHASIS: f64 = 30.0;

pub const PALETTE: [&str; 8] = [
    "#6366f1", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#64748b",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagRanking {
    pub top: Vec<Tag>,
    pub cloud: Vec<Tag>,
}

// one rendered word in the cloud
#[derive(Clone, Debug, PartialEq)]
pub struct CloudWord {
    pub tag: Tag,
    pub size: f64,
    pub opacity: f64,
    pub color: &'static str,
}

// split the tag list into the top bar and the (shuffled, filtered) cloud
//
// the top bar is always computed over the full list so that typing in the
// filter box never reshuffles it.  the sort is stable, but ties are "any
// correct top five", not a promise about which of the tied tags wins
pub fn rank<R: Rng + ?Sized>(tags: &[Tag], query: &str, rng: &mut R) -> TagRanking {
    let mut by_count: Vec<&Tag> = tags.iter().collect();
    by_count.sort_by(|a, b| b.count.cmp(&a.count));

    let top: Vec<Tag> = by_count.into_iter().take(TOP_COUNT).cloned().collect();
    let top_keys: HashSet<&str> = top.iter().map(|tag| tag.key.as_str()).collect();

    let needle = query.to_lowercase();
    let mut cloud: Vec<Tag> = tags
        .iter()
        .filter(|tag| !top_keys.contains(tag.key.as_str()))
        .filter(|tag| tag.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    cloud.shuffle(rng);

    TagRanking { top, cloud }
}

// linear map from count to font size over the cloud's own min/max
//
// a flat cloud (one distinct count, or nothing at all) gets the midpoint
pub fn font_size(count: u64, lo: u64, hi: u64) -> f64 {
    if hi <= lo {
        return FONT_FLAT;
    }

    let offset = count.saturating_sub(lo) as f64;
    FONT_MIN + offset / (hi - lo) as f64 * FONT_RANGE
}

impl TagRanking {
    pub fn bounds(&self) -> (u64, u64) {
        let lo = self.cloud.iter().map(|tag| tag.count).min().unwrap_or(0);
        let hi = self.cloud.iter().map(|tag| tag.count).max().unwrap_or(0);

        (lo, hi)
    }

    pub fn words(&self) -> Vec<CloudWord> {
        let (lo, hi) = self.bounds();

        self.cloud
            .iter()
            .enumerate()
            .map(|(idx, tag)| {
                let size = font_size(tag.count, lo, hi);

                CloudWord {
                    tag: tag.clone(),
                    size,
                    opacity: if size > FONT_EMPHASIS { 1.0 } else { 0.6 },
                    color: PALETTE[idx % PALETTE.len()],
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::SmallRng};

    fn tags(counts: &[(&str, u64)]) -> Vec<Tag> {
        counts.iter().map(|(name, count)| Tag::new(*name, *count)).collect()
    }

    fn names(tags: &[Tag]) -> HashSet<String> {
        tags.iter().map(|tag| tag.name.clone()).collect()
    }

    #[test]
    fn small_sets_are_all_top() {
        let mut rng = SmallRng::seed_from_u64(7);
        let input = tags(&[("Dog", 3), ("Cat", 9), ("Tree", 1)]);
        let ranking = rank(&input, "", &mut rng);

        assert_eq!(ranking.top.len(), 3);
        assert_eq!(ranking.top[0].name, "Cat");
        assert!(ranking.cloud.is_empty());
    }

    #[test]
    fn cloud_is_filtered_case_insensitively() {
        let mut rng = SmallRng::seed_from_u64(7);
        let input = tags(&[
            ("A", 100),
            ("B", 90),
            ("C", 80),
            ("D", 70),
            ("E", 60),
            ("Beach", 5),
            ("Sea", 4),
            ("Seagull", 2),
        ]);

        let ranking = rank(&input, "SEA", &mut rng);
        assert_eq!(names(&ranking.cloud), names(&tags(&[("Sea", 0), ("Seagull", 0)])));
        assert_eq!(names(&ranking.top), names(&input[..5]));

        let ranking = rank(&input, "", &mut rng);
        assert_eq!(ranking.cloud.len(), 3);

        // the query never leaks into the top bar
        let ranking = rank(&input, "zzz", &mut rng);
        assert_eq!(ranking.top.len(), 5);
        assert!(ranking.cloud.is_empty());
    }

    #[test]
    fn font_sizes_span_the_range() {
        assert_eq!(font_size(2, 2, 10), FONT_MIN);
        assert_eq!(font_size(10, 2, 10), FONT_MIN + FONT_RANGE);
        assert_eq!(font_size(6, 2, 10), FONT_MIN + FONT_RANGE / 2.0);
        assert_eq!(font_size(4, 4, 4), FONT_FLAT);
    }

    #[test]
    fn empty_cloud_does_not_divide_by_zero() {
        let ranking = TagRanking::default();

        assert_eq!(ranking.bounds(), (0, 0));
        assert!(ranking.words().is_empty());
        assert_eq!(font_size(0, 0, 0), FONT_FLAT);
    }

    #[test]
    fn words_cycle_the_palette() {
        let cloud: Vec<Tag> = (0..10).map(|i| Tag::new(format!("t{i}"), 1)).collect();
        let ranking = TagRanking {
            top: Vec::new(),
            cloud,
        };
        let words = ranking.words();

        assert_eq!(words[0].color, PALETTE[0]);
        assert_eq!(words[8].color, PALETTE[0]);
        assert_eq!(words[9].color, PALETTE[1]);
        assert!(words.iter().all(|word| word.size == FONT_FLAT && word.opacity == 0.6));
    }

    proptest! {
        #[test]
        fn top_holds_the_highest_counts(
            counts in prop::collection::vec(0u64..20, 0..30),
            seed in any::<u64>(),
        ) {
            let input: Vec<Tag> = counts
                .iter()
                .enumerate()
                .map(|(i, count)| Tag::new(format!("tag{i}"), *count))
                .collect();
            let mut rng = SmallRng::seed_from_u64(seed);
            let ranking = rank(&input, "", &mut rng);

            prop_assert_eq!(ranking.top.len(), input.len().min(TOP_COUNT));
            prop_assert_eq!(ranking.top.len() + ranking.cloud.len(), input.len());

            let floor = ranking.top.iter().map(|tag| tag.count).min().unwrap_or(0);
            for tag in &ranking.cloud {
                prop_assert!(tag.count <= floor);
            }

            // the multiset of the five highest counts must be the top bar's counts
            let mut expected = counts.clone();
            expected.sort_unstable_by(|a, b| b.cmp(a));
            expected.truncate(TOP_COUNT);
            let mut actual: Vec<u64> = ranking.top.iter().map(|tag| tag.count).collect();
            actual.sort_unstable_by(|a, b| b.cmp(a));
            prop_assert_eq!(actual, expected);
        }
    }
}
