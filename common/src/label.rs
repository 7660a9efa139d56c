use std::sync::LazyLock;

use regex::Regex;

use api::tag::tag_key;

// a lowercase letter or digit immediately followed by an uppercase letter, i.e.
// the seam in EyesOpen or MouthOpen.  runs of capitals (HAPPY) are not split
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

// turn a machine token into display text
//
//   EyesOpen   -> Eyes Open
//   HAPPY      -> Happy
//   MOUTH_OPEN -> Mouth Open
//
// the output is a fixed point, so normalize(normalize(x)) == normalize(x) and
// the same text can be used as the pivot label and its search value
pub fn normalize(token: &str) -> String {
    let spaced = token.replace('_', " ");
    let spaced = WORD_BOUNDARY.replace_all(&spaced, "$1 $2");

    spaced
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<String>>()
        .join(" ")
}

// a first letter whose capital is more than one char (ß -> SS) is left alone,
// since the second char would be lowercased again on the next pass
fn title_case(word: &str) -> String {
    let mut chars = word.chars();

    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    let mut out = match (upper.next(), upper.next()) {
        (Some(capital), None) => String::from(capital),
        _ => String::from(first),
    };

    out.extend(chars.flat_map(char::to_lowercase));
    out
}

// the backend key a normalized token resolves to
pub fn search_key(token: &str) -> String {
    tag_key(&normalize(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_and_title_cases() {
        assert_eq!(normalize("EyesOpen"), "Eyes Open");
        assert_eq!(normalize("HAPPY"), "Happy");
        assert_eq!(normalize("MOUTH_OPEN"), "Mouth Open");
        assert_eq!(normalize("  smile "), "Smile");
        assert_eq!(normalize("Female"), "Female");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn digits_count_as_word_ends() {
        assert_eq!(normalize("iPhone12Pro"), "I Phone12 Pro");
    }

    #[test]
    fn wide_capitals_are_kept_as_written() {
        assert_eq!(normalize("ß"), "ß");
        assert_eq!(normalize("straße"), "Straße");
        assert_eq!(normalize("ŉx"), "ŉx");
        assert_eq!(normalize("élan VITAL"), "Élan Vital");
        assert_eq!(normalize(&normalize("ßIG")), normalize("ßIG"));
    }

    #[test]
    fn label_and_key_stay_in_sync() {
        let label = normalize("EyesOpen");

        assert_eq!(search_key("EyesOpen"), tag_key(&label));
        assert_eq!(search_key(&label), search_key("EyesOpen"));
        assert_eq!(search_key("EyesOpen"), "TAG#Eyes Open");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(token in "\\PC{0,24}") {
            let once = normalize(&token);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_never_leaves_padding(token in "\\PC{0,24}") {
            let out = normalize(&token);
            prop_assert_eq!(out.trim(), out.as_str());
            prop_assert!(!out.contains("  "));
            prop_assert!(!out.contains('_'));
        }
    }
}
