use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque record identifier handed out by the backing data store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PoemId(String);

impl PoemId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("poem id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PoemId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for PoemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PoemId> for String {
    fn from(value: PoemId) -> Self {
        value.0
    }
}

/// URL-safe identifier derived from a poem title.
///
/// Only the slug engine creates these, so the inner string always matches
/// `[a-z0-9-]*` optionally followed by `_<counter>`. The empty slug is legal:
/// it is what a title made only of symbols normalizes to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PoemSlug(String);

impl PoemSlug {
    pub(crate) fn from_normalized(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PoemSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PoemSlug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::borrow::Borrow<str> for PoemSlug {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<PoemSlug> for String {
    fn from(value: PoemSlug) -> Self {
        value.0
    }
}

pub const DEFAULT_PER_PAGE: u32 = 12;
pub const MAX_PER_PAGE: u32 = 100;

/// 1-based page selection over the newest-first poem listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        let page = page.max(1);
        let per_page = if per_page == 0 {
            DEFAULT_PER_PAGE
        } else {
            per_page.min(MAX_PER_PAGE)
        };
        Self { page, per_page }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.per_page as usize
    }

    pub fn total_pages(&self, total: u64) -> u32 {
        let per_page = u64::from(self.per_page);
        u32::try_from(total.div_ceil(per_page)).unwrap_or(u32::MAX)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

/// Optional exact-match filters applied before pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PoemFilter {
    pub audience: Option<String>,
    pub occasion: Option<String>,
    pub content_type: Option<String>,
    pub style: Option<String>,
    pub verse_type: Option<String>,
    pub length: Option<String>,
    pub language: Option<String>,
    /// Case-insensitive substring matched against title and keywords.
    pub keyword: Option<String>,
}
