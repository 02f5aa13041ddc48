use crate::domain::poem::entity::PoemRecord;
use crate::domain::poem::value_objects::PoemFilter;

pub struct MatchesFilterSpec<'a> {
    filter: &'a PoemFilter,
}

impl<'a> MatchesFilterSpec<'a> {
    pub fn new(filter: &'a PoemFilter) -> Self {
        Self { filter }
    }

    pub fn is_satisfied_by(&self, poem: &PoemRecord) -> bool {
        let filter = self.filter;
        field_matches(filter.audience.as_deref(), poem.audience.as_deref())
            && field_matches(filter.occasion.as_deref(), poem.occasion.as_deref())
            && field_matches(filter.content_type.as_deref(), poem.content_type.as_deref())
            && field_matches(filter.style.as_deref(), poem.style.as_deref())
            && field_matches(filter.verse_type.as_deref(), poem.verse_type.as_deref())
            && field_matches(filter.length.as_deref(), poem.length.as_deref())
            && field_matches(filter.language.as_deref(), poem.language.as_deref())
            && self.keyword_matches(poem)
    }

    fn keyword_matches(&self, poem: &PoemRecord) -> bool {
        let Some(needle) = self.filter.keyword.as_deref().map(str::trim) else {
            return true;
        };
        if needle.is_empty() {
            return true;
        }

        let needle = needle.to_lowercase();
        poem.title
            .as_deref()
            .is_some_and(|title| title.to_lowercase().contains(&needle))
            || poem
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(&needle))
    }
}

fn field_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual.is_some_and(|actual| actual.eq_ignore_ascii_case(wanted)),
    }
}
