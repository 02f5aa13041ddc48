// tests/support/builders.rs
use chrono::{DateTime, Duration, TimeZone, Utc};

use poemsland_core::domain::poem::{PoemId, PoemRecord};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
}

pub struct PoemBuilder {
    id: String,
    title: Option<String>,
    content: String,
    occasion: Option<String>,
    style: Option<String>,
    language: Option<String>,
    keywords: Vec<String>,
    created_at: DateTime<Utc>,
}

impl PoemBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some("Test Poem".into()),
            content: "Roses are red\nViolets are blue".into(),
            occasion: None,
            style: None,
            language: None,
            keywords: Vec::new(),
            created_at: base_time(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = Some(occasion.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    /// Minutes after `base_time`; larger means newer.
    pub fn minutes(mut self, minutes: i64) -> Self {
        self.created_at = base_time() + Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> PoemRecord {
        PoemRecord {
            id: PoemId::new(self.id).unwrap(),
            title: self.title,
            content: self.content,
            audience: None,
            occasion: self.occasion,
            content_type: None,
            style: self.style,
            verse_type: None,
            length: None,
            keywords: self.keywords,
            language: self.language,
            created_at: self.created_at,
        }
    }
}

/// Three poems titled "My Poem", newest first by id: 1, 2, 3.
pub fn same_title_trio() -> Vec<PoemRecord> {
    vec![
        PoemBuilder::new("1").title("My Poem").minutes(30).build(),
        PoemBuilder::new("2").title("My Poem").minutes(20).build(),
        PoemBuilder::new("3").title("My Poem").minutes(10).build(),
    ]
}
