//! Family model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_min_len, require_present, Status, MIN_NAME_LEN};
use crate::errors::AppError;
use crate::list::{Entity, Toggleable};

/// A registered family household.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Family {
    pub id: String,
    pub name: String,
    pub head_of_family: String,
    /// Name of the clan the family belongs to.
    pub clan: String,
    #[serde(default)]
    pub sub_clan: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub members_count: u32,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyDraft {
    pub name: String,
    pub head_of_family: String,
    pub clan: String,
    #[serde(default)]
    pub sub_clan: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Entity for Family {
    type Draft = FamilyDraft;

    const KIND: &'static str = "Family";
    const COLLECTION: &'static str = "families";
    const PAGE_SIZE: usize = 10;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "clan"];
    const PROTECTED_FIELDS: &'static [&'static str] = &["membersCount"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.head_of_family.as_str(), self.clan.as_str()]
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
            head_of_family: draft.head_of_family.trim().to_string(),
            clan: draft.clan.trim().to_string(),
            sub_clan: draft.sub_clan,
            location: draft.location,
            members_count: 0,
            status: Status::Active,
            created_at,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        require_min_len("Name", &self.name, MIN_NAME_LEN)?;
        require_min_len("Head of family", &self.head_of_family, MIN_NAME_LEN)?;
        require_present("Clan", &self.clan)
    }
}

impl Toggleable for Family {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status, _reason: Option<String>) {
        self.status = status;
    }
}
