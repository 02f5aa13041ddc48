use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::poem::{
    PageRequest, PoemFilter, PoemPage, PoemReadRepository, PoemRecord,
    specifications::MatchesFilterSpec,
};
use async_trait::async_trait;
use std::path::Path;
use tokio::sync::RwLock;

/// Read-only poem catalog held in memory, optionally seeded from a JSON array.
#[derive(Default)]
pub struct InMemoryPoemRepository {
    records: RwLock<Vec<PoemRecord>>,
}

impl InMemoryPoemRepository {
    pub fn new(records: Vec<PoemRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|err| {
            DomainError::Persistence(format!("failed to read {}: {err}", path.display()))
        })?;
        let records: Vec<PoemRecord> = serde_json::from_str(&raw).map_err(|err| {
            DomainError::Persistence(format!("failed to parse {}: {err}", path.display()))
        })?;

        tracing::info!(count = records.len(), path = %path.display(), "loaded poem seed file");
        Ok(Self::new(records))
    }
}

#[async_trait]
impl PoemReadRepository for InMemoryPoemRepository {
    async fn list_page(&self, filter: &PoemFilter, page: PageRequest) -> DomainResult<PoemPage> {
        let records = self.records.read().await;
        let spec = MatchesFilterSpec::new(filter);

        let mut matching: Vec<&PoemRecord> = records
            .iter()
            .filter(|record| spec.is_satisfied_by(record))
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });

        let total = matching.len() as u64;
        let records = matching
            .into_iter()
            .skip(page.offset())
            .take(page.per_page() as usize)
            .cloned()
            .collect();

        Ok(PoemPage { records, total })
    }
}
