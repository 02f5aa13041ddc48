use crate::domain::errors::DomainResult;
use crate::domain::poem::entity::PoemRecord;
use crate::domain::poem::value_objects::{PageRequest, PoemFilter};
use async_trait::async_trait;

/// One page of the newest-first listing plus the number of matches overall.
#[derive(Debug, Clone, Default)]
pub struct PoemPage {
    pub records: Vec<PoemRecord>,
    pub total: u64,
}

#[async_trait]
pub trait PoemReadRepository: Send + Sync {
    /// Records matching `filter`, ordered by `created_at` descending with ties
    /// broken by id ascending.
    async fn list_page(&self, filter: &PoemFilter, page: PageRequest) -> DomainResult<PoemPage>;
}
