//! Community model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_min_len, require_present, Status, MIN_NAME_LEN};
use crate::errors::AppError;
use crate::list::{Entity, Toggleable};

/// A local or diaspora community of members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub leader: Option<String>,
    #[serde(default)]
    pub members_count: u32,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityDraft {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub leader: Option<String>,
}

impl Entity for Community {
    type Draft = CommunityDraft;

    const KIND: &'static str = "Community";
    const COLLECTION: &'static str = "communities";
    const PAGE_SIZE: usize = 10;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "location"];
    const PROTECTED_FIELDS: &'static [&'static str] = &["membersCount"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.location.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "location" => Some(self.location.clone()),
            _ => None,
        }
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            location: draft.location.trim().to_string(),
            description: draft.description,
            leader: draft.leader,
            members_count: 0,
            status: Status::Active,
            created_at,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        require_min_len("Name", &self.name, MIN_NAME_LEN)?;
        require_present("Location", &self.location)
    }
}

impl Toggleable for Community {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status, _reason: Option<String>) {
        self.status = status;
    }
}
