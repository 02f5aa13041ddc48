use crate::domain::poem::{PoemRecord, PoemSlug};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full poem as shown on its own `/poemsland/<slug>` page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PoemDto {
    pub id: String,
    pub slug: String,
    pub title: String,
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

impl PoemDto {
    pub fn new(record: PoemRecord, slug: &PoemSlug) -> Self {
        Self {
            id: record.id.into(),
            slug: slug.to_string(),
            title: record.title.unwrap_or_default(),
            content: record.content,
            audience: record.audience,
            occasion: record.occasion,
            content_type: record.content_type,
            style: record.style,
            verse_type: record.verse_type,
            length: record.length,
            keywords: record.keywords,
            language: record.language,
            created_at: record.created_at,
        }
    }
}

/// Gallery tile: enough to render a card and link to the poem.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PoemSummaryDto {
    pub id: String,
    pub slug: String,
    pub title: String,
    /// First line of the poem.
    pub preview: String,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PoemSummaryDto {
    pub fn new(record: PoemRecord, slug: &PoemSlug) -> Self {
        let preview = record
            .content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or_default()
            .to_string();

        Self {
            id: record.id.into(),
            slug: slug.to_string(),
            title: record.title.unwrap_or_default(),
            preview,
            audience: record.audience,
            occasion: record.occasion,
            style: record.style,
            language: record.language,
            created_at: record.created_at,
        }
    }
}
