//! Family history model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_min_len, require_present, Status, MIN_NAME_LEN};
use crate::errors::AppError;
use crate::list::{Entity, Toggleable};

const MIN_STORY_LEN: usize = 20;

/// A written account of a family's lineage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FamilyHistory {
    pub id: String,
    pub title: String,
    /// Name of the family the history describes.
    pub family: String,
    pub content: String,
    pub author: String,
    /// Earliest generation the account reaches back to, e.g. "1850s".
    #[serde(default)]
    pub period: Option<String>,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyHistoryDraft {
    pub title: String,
    pub family: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub period: Option<String>,
}

impl Entity for FamilyHistory {
    type Draft = FamilyHistoryDraft;

    const KIND: &'static str = "Family history";
    const COLLECTION: &'static str = "family-histories";
    const PAGE_SIZE: usize = 10;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "family"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.family.as_str(), self.author.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "family" => Some(self.family.clone()),
            _ => None,
        }
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            family: draft.family.trim().to_string(),
            content: draft.content,
            author: draft.author.trim().to_string(),
            period: draft.period,
            status: Status::Active,
            created_at,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        require_min_len("Title", &self.title, MIN_NAME_LEN)?;
        require_present("Family", &self.family)?;
        require_min_len("Content", &self.content, MIN_STORY_LEN)?;
        require_present("Author", &self.author)
    }
}

impl Toggleable for FamilyHistory {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status, _reason: Option<String>) {
        self.status = status;
    }
}
