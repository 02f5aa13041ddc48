//! Title normalization and batch-scoped collision resolution.
//!
//! `normalize` maps an arbitrary title onto `[a-z0-9-]*`:
//!
//! 1. lowercase (Unicode-aware),
//! 2. canonical decomposition with combining marks dropped (`é` → `e`),
//! 3. everything except ASCII lowercase letters, digits, whitespace and `-`
//!    is removed,
//! 4. every run of whitespace and hyphens becomes a single `-`,
//! 5. leading and trailing hyphens are trimmed.
//!
//! `unique_slug` then suffixes `_1`, `_2`, ... until the candidate is unused
//! within the current batch. Normalized slugs never contain `_`, so a suffixed
//! slug cannot collide with another title's bare slug.

use std::collections::HashSet;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::domain::poem::value_objects::{PoemId, PoemSlug};

/// The two fields of a record the slug engine looks at.
#[derive(Debug, Clone, Copy)]
pub struct SlugSource<'a> {
    pub id: &'a PoemId,
    pub title: Option<&'a str>,
}

impl<'a> SlugSource<'a> {
    pub fn new(id: &'a PoemId, title: &'a str) -> Self {
        Self {
            id,
            title: Some(title),
        }
    }
}

pub fn normalize(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for ch in lowered.nfd().filter(|ch| !is_combining_mark(*ch)) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
        }
    }

    slug
}

pub fn unique_slug(candidate: &str, existing: &HashSet<PoemSlug>) -> PoemSlug {
    if !existing.contains(candidate) {
        return PoemSlug::from_normalized(candidate.to_owned());
    }

    let mut counter = 1u64;
    loop {
        let suffixed = format!("{candidate}_{counter}");
        if !existing.contains(suffixed.as_str()) {
            return PoemSlug::from_normalized(suffixed);
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn taken(slugs: &[&str]) -> HashSet<PoemSlug> {
        slugs
            .iter()
            .map(|s| PoemSlug::from_normalized((*s).to_owned()))
            .collect()
    }

    #[test]
    fn lowercases() {
        assert_eq!(normalize("TITLE"), "title");
    }

    #[test]
    fn whitespace_becomes_hyphen() {
        assert_eq!(normalize("hello world"), "hello-world");
        assert_eq!(normalize("hello \t\n  world"), "hello-world");
    }

    #[test]
    fn punctuation_is_removed_without_separator() {
        assert_eq!(normalize("hello@world!"), "helloworld");
    }

    #[test]
    fn diacritics_are_stripped() {
        assert_eq!(normalize("héllò wörld"), "hello-world");
        assert_eq!(normalize("ÄÖÜ äöü"), "aou-aou");
    }

    #[test]
    fn empty_and_symbol_only_titles_normalize_to_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("§ & % !"), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn german_title_with_symbols() {
        assert_eq!(
            normalize("Meine Schöne Gedicht: Mit § & % Zeichen!"),
            "meine-schone-gedicht-mit-zeichen"
        );
    }

    #[test]
    fn characters_without_decomposition_are_dropped() {
        // ß has no canonical decomposition
        assert_eq!(normalize("Straße"), "strae");
        assert_eq!(normalize("日本 poem"), "poem");
    }

    #[test]
    fn hyphen_runs_collapse() {
        assert_eq!(normalize("a--b"), "a-b");
        assert_eq!(normalize("a - - b"), "a-b");
        assert_eq!(normalize("a-@-b"), "a-b");
    }

    #[test]
    fn edges_are_trimmed() {
        assert_eq!(normalize("  -- Hi there --  "), "hi-there");
        assert_eq!(normalize("! leading"), "leading");
        assert_eq!(normalize("trailing ?"), "trailing");
    }

    #[test]
    fn digits_survive() {
        assert_eq!(normalize("Ode No. 5"), "ode-no-5");
    }

    #[test]
    fn unique_slug_keeps_unused_candidate() {
        let existing = taken(&["other"]);
        assert_eq!(unique_slug("my-poem", &existing).as_str(), "my-poem");
    }

    #[test]
    fn unique_slug_appends_first_free_counter() {
        let existing = taken(&["my-poem", "my-poem_1", "my-poem_3"]);
        assert_eq!(unique_slug("my-poem", &existing).as_str(), "my-poem_2");
    }

    #[test]
    fn unique_slug_handles_empty_candidate() {
        let existing = taken(&[""]);
        assert_eq!(unique_slug("", &existing).as_str(), "_1");
    }

    proptest! {
        #[test]
        fn normalized_charset(title in "\\PC{0,64}") {
            let slug = normalize(&title);
            prop_assert!(slug.chars().all(|ch| matches!(ch, 'a'..='z' | '0'..='9' | '-')));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn normalized_has_no_edge_hyphen(title in "[ a-zA-Z0-9!?@§äöüéÀ\\-]{0,48}") {
            let slug = normalize(&title);
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
        }

        #[test]
        fn normalize_is_idempotent(title in "\\PC{0,64}") {
            let once = normalize(&title);
            prop_assert_eq!(normalize(&once), once.clone());
        }
    }
}
