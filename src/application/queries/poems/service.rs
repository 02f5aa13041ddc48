use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        ports::cache::{PageKey, SlugIndexCache},
    },
    domain::poem::{
        PageRequest, PoemFilter, PoemPage, PoemReadRepository, PoemRecord, SlugIndex,
        value_objects::DEFAULT_PER_PAGE,
    },
};

pub struct PoemQueryService {
    pub(super) read_repo: Arc<dyn PoemReadRepository>,
    pub(super) index_cache: Arc<dyn SlugIndexCache>,
    pub(super) default_per_page: u32,
}

impl PoemQueryService {
    pub fn new(
        read_repo: Arc<dyn PoemReadRepository>,
        index_cache: Arc<dyn SlugIndexCache>,
    ) -> Self {
        Self {
            read_repo,
            index_cache,
            default_per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn with_default_per_page(mut self, per_page: u32) -> Self {
        self.default_per_page = per_page;
        self
    }

    pub(super) fn page_request(&self, page: u32, per_page: u32) -> PageRequest {
        let per_page = if per_page == 0 {
            self.default_per_page
        } else {
            per_page
        };
        PageRequest::new(page, per_page)
    }

    /// Fetch one page and the slug index covering exactly that page.
    pub(super) async fn load_page(
        &self,
        filter: &PoemFilter,
        page: PageRequest,
    ) -> ApplicationResult<(PoemPage, Arc<SlugIndex>)> {
        let records = self.read_repo.list_page(filter, page).await?;
        let key = PageKey::new(filter, page);

        if let Some(cached) = self.index_cache.get(&key) {
            if cached.is_built_from(records.records.iter().map(PoemRecord::slug_source)) {
                tracing::debug!(page = page.page(), "slug index cache hit");
                return Ok((records, cached));
            }
        }

        let index = SlugIndex::build(records.records.iter().map(PoemRecord::slug_source))
            .map_err(|err| {
                tracing::error!(page = page.page(), error = %err, "failed to index poem page");
                err
            })?;
        let index = Arc::new(index);
        self.index_cache.put(key, Arc::clone(&index));

        Ok((records, index))
    }
}
