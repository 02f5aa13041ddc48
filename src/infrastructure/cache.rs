use crate::application::ports::cache::{PageKey, SlugIndexCache};
use crate::domain::poem::SlugIndex;
use std::sync::Arc;

/// Cache that never retains anything: every lookup misses and every `put` is
/// dropped, so each request rebuilds its slug index.
#[derive(Default, Clone)]
pub struct DisabledSlugIndexCache;

impl SlugIndexCache for DisabledSlugIndexCache {
    fn get(&self, _key: &PageKey) -> Option<Arc<SlugIndex>> {
        None
    }

    fn put(&self, _key: PageKey, _index: Arc<SlugIndex>) {}
}
