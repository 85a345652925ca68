//! Mention-token extraction.
//!
//! A mention token is `@` followed by one or more Unicode letters, marks,
//! digits, or underscores. Matching against candidate names is
//! case-insensitive and token-based: a token matches a name only when the
//! whole token equals the name, so `@Anna` never matches a candidate named
//! `Ann`.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use super::Protagonist;

static MENTION_REGEX: OnceLock<Regex> = OnceLock::new();

pub fn mention_regex() -> &'static Regex {
    MENTION_REGEX.get_or_init(|| {
        Regex::new(r"@([\p{L}\p{M}\d_]+)").expect("mention pattern is valid")
    })
}

/// All mentioned names in `text`, lowercased.
pub fn mentioned_names(text: &str) -> HashSet<String> {
    mention_regex()
        .find_iter(text)
        .map(|m| m.as_str()[1..].to_lowercase())
        .collect()
}

/// The selected set implied by `text`: every candidate whose name is
/// mentioned, in candidate-list order.
pub fn compute_selected(text: &str, candidates: &[Protagonist]) -> Vec<Protagonist> {
    let mentioned = mentioned_names(text);

    candidates
        .iter()
        .filter(|p| mentioned.contains(&p.name.to_lowercase()))
        .cloned()
        .collect()
}

/// Whether two selected sets differ by membership (compared by name).
///
/// Used to avoid proposing redundant upstream updates, which could
/// otherwise feed a render loop.
pub fn selection_changed(current: &[Protagonist], proposed: &[Protagonist]) -> bool {
    current.len() != proposed.len()
        || !proposed
            .iter()
            .all(|p| current.iter().any(|c| c.name == p.name))
}

/// Remove every whole-token `@name` occurrence (case-insensitive) from
/// `text`, trimming edge whitespace left behind.
pub fn strip_mention_tokens(text: &str, name: &str) -> String {
    let target = name.to_lowercase();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in mention_regex().find_iter(text) {
        let token_name = &m.as_str()[1..];
        if token_name.to_lowercase() == target {
            out.push_str(&text[last..m.start()]);
            last = m.end();
        }
    }
    out.push_str(&text[last..]);

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<Protagonist> {
        vec![
            Protagonist::new("1", "Ann"),
            Protagonist::new("2", "Bob"),
            Protagonist::new("3", "Carol"),
        ]
    }

    #[test]
    fn extraction_is_case_insensitive() {
        let selected = compute_selected("hi @carol and @BOB", &candidates());

        let names: Vec<_> = selected.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Carol"]);
    }

    #[test]
    fn repeated_mentions_select_once() {
        let selected = compute_selected("@Carol met @carol again", &candidates());

        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Carol");
    }

    #[test]
    fn unicode_names_are_tokenized() {
        let cast = vec![
            Protagonist::new("1", "Ren\u{e9}e"),
            Protagonist::new("2", "1_x"),
        ];
        let selected = compute_selected("hola @ren\u{e9}e y @1_x", &cast);

        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn unmentioned_candidates_are_not_selected() {
        let selected = compute_selected("nobody here", &candidates());
        assert!(selected.is_empty());
    }

    #[test]
    fn membership_comparison_ignores_order() {
        let a = vec![Protagonist::new("1", "Ann"), Protagonist::new("2", "Bob")];
        let b = vec![Protagonist::new("2", "Bob"), Protagonist::new("1", "Ann")];

        assert!(!selection_changed(&a, &b));
        assert!(selection_changed(&a, &a[..1].to_vec()));
    }

    #[test]
    fn strip_removes_whole_tokens_only() {
        let out = strip_mention_tokens("say hi to @Ann and @Anna", "Ann");
        assert_eq!(out, "say hi to  and @Anna");
    }

    #[test]
    fn strip_is_case_insensitive_and_trims() {
        let out = strip_mention_tokens("@bob wrote this", "Bob");
        assert_eq!(out, "wrote this");
    }
}
