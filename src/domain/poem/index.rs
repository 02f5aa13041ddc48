// src/domain/poem/index.rs
use std::collections::{HashMap, HashSet};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::poem::slug::{SlugSource, normalize, unique_slug};
use crate::domain::poem::value_objects::{PoemId, PoemSlug};

/// Bidirectional id/slug mapping for one ordered batch of poems.
///
/// Collisions are resolved in input order: the first record with a given
/// normalized title keeps the bare slug, later ones get `_1`, `_2`, ...
/// An index is never extended; a new batch means a new `build`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugIndex {
    id_to_slug: HashMap<PoemId, PoemSlug>,
    slug_to_id: HashMap<PoemSlug, PoemId>,
    /// Input order, with each record's normalized title before suffixing.
    order: Vec<(PoemId, String)>,
}

impl SlugIndex {
    pub fn build<'a, I>(records: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = SlugSource<'a>>,
    {
        let mut index = Self::default();
        let mut assigned: HashSet<PoemSlug> = HashSet::new();

        for source in records {
            let title = source.title.ok_or_else(|| {
                DomainError::InvalidInput(format!("poem {} has no title", source.id))
            })?;
            if index.id_to_slug.contains_key(source.id) {
                return Err(DomainError::InvalidInput(format!(
                    "poem {} appears more than once in the batch",
                    source.id
                )));
            }

            let candidate = normalize(title);
            let slug = unique_slug(&candidate, &assigned);
            assigned.insert(slug.clone());
            index.id_to_slug.insert(source.id.clone(), slug.clone());
            index.slug_to_id.insert(slug, source.id.clone());
            index.order.push((source.id.clone(), candidate));
        }

        Ok(index)
    }

    pub fn id_for(&self, slug: &str) -> Option<&PoemId> {
        self.slug_to_id.get(slug)
    }

    pub fn slug_for(&self, id: &PoemId) -> Option<&PoemSlug> {
        self.id_to_slug.get(id)
    }

    pub fn id_to_slug(&self) -> &HashMap<PoemId, PoemSlug> {
        &self.id_to_slug
    }

    pub fn slug_to_id(&self) -> &HashMap<PoemSlug, PoemId> {
        &self.slug_to_id
    }

    /// Whether building from `records` would give this same index: same ids
    /// with the same normalized titles, in the same order.
    pub fn is_built_from<'a, I>(&self, records: I) -> bool
    where
        I: IntoIterator<Item = SlugSource<'a>>,
    {
        let mut entries = self.order.iter();
        for source in records {
            match (entries.next(), source.title) {
                (Some((id, candidate)), Some(title))
                    if id == source.id && *candidate == normalize(title) => {}
                _ => return false,
            }
        }
        entries.next().is_none()
    }

    /// Entries in the order the records were supplied.
    pub fn iter(&self) -> impl Iterator<Item = (&PoemId, &PoemSlug)> {
        self.order
            .iter()
            .filter_map(|(id, _)| self.id_to_slug.get(id).map(|slug| (id, slug)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
