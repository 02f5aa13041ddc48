// src/domain/poem/entity.rs
use crate::domain::poem::slug::SlugSource;
use crate::domain::poem::value_objects::PoemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generated poem as stored by the backing data store.
///
/// `title` is optional because stored rows are not guaranteed to carry one;
/// the slug engine rejects such records instead of guessing a title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoemRecord {
    pub id: PoemId,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub verse_type: Option<String>,
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PoemRecord {
    pub fn slug_source(&self) -> SlugSource<'_> {
        SlugSource {
            id: &self.id,
            title: self.title.as_deref(),
        }
    }
}
