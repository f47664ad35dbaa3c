//! Clan model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_min_len, require_present, Status, MIN_NAME_LEN};
use crate::errors::AppError;
use crate::list::{Entity, Toggleable};

/// A clan belonging to an ethnic group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Clan {
    pub id: String,
    pub name: String,
    /// Name of the parent ethnic group.
    pub ethnic_group: String,
    #[serde(default)]
    pub totem: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub sub_clans_count: u32,
    #[serde(default)]
    pub families_count: u32,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new clan.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanDraft {
    pub name: String,
    pub ethnic_group: String,
    #[serde(default)]
    pub totem: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity for Clan {
    type Draft = ClanDraft;

    const KIND: &'static str = "Clan";
    const COLLECTION: &'static str = "clans";
    const PAGE_SIZE: usize = 10;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "ethnicGroup"];
    const PROTECTED_FIELDS: &'static [&'static str] = &["subClansCount", "familiesCount"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.ethnic_group.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "ethnicGroup" => Some(self.ethnic_group.clone()),
            _ => None,
        }
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            ethnic_group: draft.ethnic_group.trim().to_string(),
            totem: draft.totem,
            description: draft.description,
            sub_clans_count: 0,
            families_count: 0,
            status: Status::Active,
            created_at,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        require_min_len("Name", &self.name, MIN_NAME_LEN)?;
        require_present("Ethnic group", &self.ethnic_group)
    }
}

impl Toggleable for Clan {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status, _reason: Option<String>) {
        self.status = status;
    }
}
