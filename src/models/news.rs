//! News article model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_min_len, require_present, Status, MIN_NAME_LEN};
use crate::errors::AppError;
use crate::list::{Entity, Toggleable};

/// Minimum body length for a published article.
const MIN_CONTENT_LEN: usize = 20;

/// A news article. Inactive articles are unpublished.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub views_count: u32,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticleDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Entity for NewsArticle {
    type Draft = NewsArticleDraft;

    const KIND: &'static str = "News article";
    const COLLECTION: &'static str = "news";
    const PAGE_SIZE: usize = 10;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "category"];
    const PROTECTED_FIELDS: &'static [&'static str] = &["viewsCount"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "category" => Some(self.category.clone()),
            _ => None,
        }
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            content: draft.content,
            author: draft.author.trim().to_string(),
            category: draft.category.trim().to_string(),
            image_url: draft.image_url,
            views_count: 0,
            status: Status::Active,
            created_at,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        require_min_len("Title", &self.title, MIN_NAME_LEN)?;
        require_min_len("Content", &self.content, MIN_CONTENT_LEN)?;
        require_present("Author", &self.author)?;
        require_present("Category", &self.category)
    }
}

impl Toggleable for NewsArticle {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status, _reason: Option<String>) {
        self.status = status;
    }
}
