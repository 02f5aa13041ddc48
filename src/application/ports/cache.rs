// src/application/ports/cache.rs
use std::sync::Arc;

use crate::domain::poem::{PageRequest, PoemFilter, SlugIndex};

/// Identifies one page of one filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKey {
    pub filter: PoemFilter,
    pub page: PageRequest,
}

impl PageKey {
    pub fn new(filter: &PoemFilter, page: PageRequest) -> Self {
        Self {
            filter: filter.clone(),
            page,
        }
    }
}

/// Key-value store for slug indexes, one entry per listing page.
///
/// `put` replaces whatever was stored under the key. Implementations must
/// never merge an old index into a new one, since collision suffixes depend
/// on the order of a single batch.
pub trait SlugIndexCache: Send + Sync {
    fn get(&self, key: &PageKey) -> Option<Arc<SlugIndex>>;
    fn put(&self, key: PageKey, index: Arc<SlugIndex>);
}
