//! Sub-clan model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_min_len, require_present, Status, MIN_NAME_LEN};
use crate::errors::AppError;
use crate::list::{Entity, Toggleable};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubClan {
    pub id: String,
    pub name: String,
    /// Name of the parent clan.
    pub clan: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub families_count: u32,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubClanDraft {
    pub name: String,
    pub clan: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity for SubClan {
    type Draft = SubClanDraft;

    const KIND: &'static str = "Sub-clan";
    const COLLECTION: &'static str = "sub-clans";
    const PAGE_SIZE: usize = 10;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "clan"];
    const PROTECTED_FIELDS: &'static [&'static str] = &["familiesCount"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.clan.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "clan" => Some(self.clan.clone()),
            _ => None,
        }
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            clan: draft.clan.trim().to_string(),
            description: draft.description,
            families_count: 0,
            status: Status::Active,
            created_at,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        require_min_len("Name", &self.name, MIN_NAME_LEN)?;
        require_present("Clan", &self.clan)
    }
}

impl Toggleable for SubClan {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status, _reason: Option<String>) {
        self.status = status;
    }
}
