use super::PoemQueryService;
use crate::{
    application::{
        dto::{GalleryPage, PoemSummaryDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::poem::PoemFilter,
};

pub struct ListPoemsQuery {
    pub filter: PoemFilter,
    pub page: u32,
    pub per_page: u32,
}

impl PoemQueryService {
    pub async fn list_poems(
        &self,
        query: ListPoemsQuery,
    ) -> ApplicationResult<GalleryPage<PoemSummaryDto>> {
        let page = self.page_request(query.page, query.per_page);
        let (records, index) = self.load_page(&query.filter, page).await?;
        let total = records.total;

        let items = records
            .records
            .into_iter()
            .map(|record| match index.slug_for(&record.id).cloned() {
                Some(slug) => Ok(PoemSummaryDto::new(record, &slug)),
                None => Err(ApplicationError::infrastructure(format!(
                    "poem {} missing from slug index",
                    record.id
                ))),
            })
            .collect::<ApplicationResult<Vec<_>>>()?;

        tracing::debug!(page = page.page(), count = items.len(), total, "listed poems");

        Ok(GalleryPage::new(
            items,
            page.page(),
            page.per_page(),
            total,
            page.total_pages(total),
        ))
    }
}
