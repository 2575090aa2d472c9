use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::{Captures, Regex};

// A maximal run of letters; digits and punctuation end a word
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}+").unwrap());

/// Uppercase `c` only when it maps to exactly one char; `ß` and `ﬁ` stay put
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Compare two strings ignoring case
///
/// Both sides are uppercased char by char and compared by code point, so a
/// string sorts before any longer string it is a prefix of.
pub fn cmp_fold(a: &str, b: &str) -> Ordering {
    a.chars().map(simple_upper).cmp(b.chars().map(simple_upper))
}

/// Return true if `a` sorts before `b` ignoring case
pub fn less_fold(a: &str, b: &str) -> bool {
    cmp_fold(a, b) == Ordering::Less
}

/// Lowercase `text`, then uppercase the first letter of every word
///
/// Words are runs of letters, so `"3RD-PARTY"` becomes `"3Rd-Party"`.
pub fn title_case(text: &str) -> String {
    let lower = text.to_lowercase();
    WORD.replace_all(&lower, |caps: &Captures| {
        let mut chars = caps[0].chars();
        match chars.next() {
            Some(first) => std::iter::once(simple_upper(first)).chain(chars).collect(),
            None => String::new(),
        }
    })
    .into_owned()
}
