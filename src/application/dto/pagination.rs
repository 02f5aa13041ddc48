use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct GalleryPage<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_more: bool,
}

impl<T> GalleryPage<T> {
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total: u64, total_pages: u32) -> Self {
        let has_more = page < total_pages;
        Self {
            items,
            page,
            per_page,
            total,
            total_pages,
            has_more,
        }
    }
}
