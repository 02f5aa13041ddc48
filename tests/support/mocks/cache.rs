// tests/support/mocks/cache.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use poemsland_core::application::ports::cache::{PageKey, SlugIndexCache};
use poemsland_core::domain::poem::SlugIndex;

/// Working in-memory cache that counts hits and writes.
#[derive(Default)]
pub struct RecordingCache {
    entries: Mutex<HashMap<PageKey, Arc<SlugIndex>>>,
    hits: Mutex<usize>,
    puts: Mutex<usize>,
}

impl RecordingCache {
    pub fn hits(&self) -> usize {
        *self.hits.lock().unwrap()
    }

    pub fn puts(&self) -> usize {
        *self.puts.lock().unwrap()
    }

    pub fn seed(&self, key: PageKey, index: SlugIndex) {
        self.entries.lock().unwrap().insert(key, Arc::new(index));
    }

    pub fn stored(&self, key: &PageKey) -> Option<Arc<SlugIndex>> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl SlugIndexCache for RecordingCache {
    fn get(&self, key: &PageKey) -> Option<Arc<SlugIndex>> {
        let found = self.entries.lock().unwrap().get(key).cloned();
        if found.is_some() {
            *self.hits.lock().unwrap() += 1;
        }
        found
    }

    fn put(&self, key: PageKey, index: Arc<SlugIndex>) {
        *self.puts.lock().unwrap() += 1;
        self.entries.lock().unwrap().insert(key, index);
    }
}
