// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{ports::cache::SlugIndexCache, queries::poems::PoemQueryService},
    domain::poem::PoemReadRepository,
};

pub struct ApplicationServices {
    pub poem_queries: Arc<PoemQueryService>,
}

impl ApplicationServices {
    pub fn new(
        poem_read_repo: Arc<dyn PoemReadRepository>,
        index_cache: Arc<dyn SlugIndexCache>,
        default_per_page: u32,
    ) -> Self {
        let poem_queries = Arc::new(
            PoemQueryService::new(Arc::clone(&poem_read_repo), Arc::clone(&index_cache))
                .with_default_per_page(default_per_page),
        );

        Self { poem_queries }
    }
}
