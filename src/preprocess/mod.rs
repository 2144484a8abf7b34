//! Textual normalization of raw parameter cells
//!
//! Reference tables are typed by hand and the same construct shows up with
//! small spelling differences. Before tokenizing, a cell is rewritten by a
//! fixed list of rules, in this order:
//!
//! 1. A comma in front of the `or`/`plus` keyword is dropped
//!    (`A, or B` → `A or B`).
//! 2. `The` in front of `Bitwise` is dropped
//!    (`The Bitwise OR of` → `Bitwise OR of`).
//! 3. A brace group holding a three or four digit run is spread into
//!    single digits (`{1234}` → `{1 2 3 4}`).
//!
//! Every rule is written so that its output never matches it again, which
//! keeps [`normalize`] idempotent.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static COMMA_BEFORE_CONJUNCTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\s*,)+\s*\b(or|plus)\b").expect("valid regex"));

static ARTICLE_BEFORE_BITWISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:The\s+)+Bitwise\b").expect("valid regex"));

static DIGIT_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\d?\d{3})\}").expect("valid regex"));

/// Normalize a raw cell. Pure and total.
pub fn normalize(raw: &str) -> String {
    let text = drop_comma_before_conjunction(raw);
    let text = drop_article_before_bitwise(&text);
    let text = spread_digit_groups(&text);
    text.into_owned()
}

/// Rule 1: `A, or B` → `A or B`, `A, plus B` → `A plus B`.
pub fn drop_comma_before_conjunction(text: &str) -> Cow<'_, str> {
    COMMA_BEFORE_CONJUNCTION.replace_all(text, " $1")
}

/// Rule 2: `The Bitwise` → `Bitwise`.
pub fn drop_article_before_bitwise(text: &str) -> Cow<'_, str> {
    ARTICLE_BEFORE_BITWISE.replace_all(text, "Bitwise")
}

/// Rule 3: `{1234}` → `{1 2 3 4}`.
pub fn spread_digit_groups(text: &str) -> Cow<'_, str> {
    DIGIT_GROUP.replace_all(text, |caps: &Captures<'_>| {
        let digits: Vec<String> = caps[1].chars().map(String::from).collect();
        format!("{{{}}}", digits.join(" "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_before_or() {
        assert_eq!(normalize("A, or B"), "A or B");
        assert_eq!(normalize("A, B, or C"), "A, B or C");
        assert_eq!(normalize("A , plus B"), "A plus B");
    }

    #[test]
    fn test_comma_kept_before_other_words() {
        assert_eq!(
            normalize("RENDERBUFFER, if renderbufer is non-zero"),
            "RENDERBUFFER, if renderbufer is non-zero"
        );
        assert_eq!(normalize("A, orange"), "A, orange");
    }

    #[test]
    fn test_article_before_bitwise() {
        assert_eq!(normalize("The Bitwise OR of X"), "Bitwise OR of X");
        assert_eq!(normalize("Then Bitwise"), "Then Bitwise");
    }

    #[test]
    fn test_digit_groups() {
        assert_eq!(normalize("Uniform{1234}{i f d ui}"), "Uniform{1 2 3 4}{i f d ui}");
        assert_eq!(normalize("{234}"), "{2 3 4}");
        assert_eq!(normalize("{12}"), "{12}");
        assert_eq!(normalize("{12345}"), "{12345}");
        assert_eq!(normalize("{if}"), "{if}");
    }

    #[test]
    fn test_idempotent_on_stacked_inputs() {
        for raw in ["A, , or B", "The The Bitwise OR", "x,or, plus y", "{1234}, or {5678}"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }
}
