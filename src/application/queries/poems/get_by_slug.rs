use super::PoemQueryService;
use crate::{
    application::{
        dto::PoemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::poem::PoemFilter,
};

/// Resolve a slug against one page of the listing.
///
/// Slugs are only unique per page, so the caller has to say which page the
/// link came from. A miss is reported as not found; deciding between a
/// redirect and an error page is left to the caller.
pub struct GetPoemBySlugQuery {
    pub slug: String,
    pub filter: PoemFilter,
    pub page: u32,
    pub per_page: u32,
}

impl PoemQueryService {
    pub async fn get_poem_by_slug(&self, query: GetPoemBySlugQuery) -> ApplicationResult<PoemDto> {
        let page = self.page_request(query.page, query.per_page);
        let (records, index) = self.load_page(&query.filter, page).await?;

        let not_found = || {
            ApplicationError::not_found(format!(
                "poem '{}' not found on page {}",
                query.slug,
                page.page()
            ))
        };

        let id = index.id_for(&query.slug).ok_or_else(not_found)?;
        let slug = index.slug_for(id).ok_or_else(not_found)?;
        let record = records
            .records
            .into_iter()
            .find(|record| &record.id == id)
            .ok_or_else(not_found)?;

        Ok(PoemDto::new(record, slug))
    }
}
