//! Ethnic group model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_min_len, require_present, Status, MIN_NAME_LEN};
use crate::errors::AppError;
use crate::list::{Entity, Toggleable};

/// An ethnic group, the top level of the lineage hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EthnicGroup {
    pub id: String,
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub clans_count: u32,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new ethnic group.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthnicGroupDraft {
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
}

impl Entity for EthnicGroup {
    type Draft = EthnicGroupDraft;

    const KIND: &'static str = "Ethnic group";
    const COLLECTION: &'static str = "ethnic-groups";
    const PAGE_SIZE: usize = 5;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "region"];
    const PROTECTED_FIELDS: &'static [&'static str] = &["clansCount"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.region.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "region" => Some(self.region.clone()),
            _ => None,
        }
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            region: draft.region.trim().to_string(),
            description: draft.description,
            population: draft.population,
            clans_count: 0,
            status: Status::Active,
            created_at,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        require_min_len("Name", &self.name, MIN_NAME_LEN)?;
        require_present("Region", &self.region)
    }
}

impl Toggleable for EthnicGroup {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status, _reason: Option<String>) {
        self.status = status;
    }
}
