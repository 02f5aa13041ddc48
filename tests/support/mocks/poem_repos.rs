// tests/support/mocks/poem_repos.rs
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use poemsland_core::domain::errors::{DomainError, DomainResult};
use poemsland_core::domain::poem::{PageRequest, PoemFilter, PoemPage, PoemReadRepository};
use poemsland_core::infrastructure::repositories::InMemoryPoemRepository;

/// Repository whose every call fails like an unreachable backing store.
pub struct FailingPoemRepo;

#[async_trait]
impl PoemReadRepository for FailingPoemRepo {
    async fn list_page(&self, _filter: &PoemFilter, _page: PageRequest) -> DomainResult<PoemPage> {
        Err(DomainError::Persistence("backing store unavailable".into()))
    }
}

/// Delegates to an in-memory repository and counts `list_page` calls.
pub struct CountingPoemRepo {
    inner: InMemoryPoemRepository,
    calls: AtomicUsize,
}

impl CountingPoemRepo {
    pub fn new(inner: InMemoryPoemRepository) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PoemReadRepository for CountingPoemRepo {
    async fn list_page(&self, filter: &PoemFilter, page: PageRequest) -> DomainResult<PoemPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_page(filter, page).await
    }
}
