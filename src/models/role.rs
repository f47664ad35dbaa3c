//! Console role model.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_min_len, Status, MIN_NAME_LEN};
use crate::errors::AppError;
use crate::list::{Entity, Toggleable};

/// A named set of console permissions assigned to administrators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Permission strings, e.g. "clans:write".
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub users_count: u32,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Entity for Role {
    type Draft = RoleDraft;

    const KIND: &'static str = "Role";
    const COLLECTION: &'static str = "roles";
    const PAGE_SIZE: usize = 5;
    const FILTER_FIELDS: &'static [&'static str] = &["status"];
    const PROTECTED_FIELDS: &'static [&'static str] = &["usersCount"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            _ => None,
        }
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        let mut seen = HashSet::new();
        let permissions: Vec<String> = draft
            .permissions
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty() && seen.insert(p.clone()))
            .collect();

        Self {
            id,
            name: draft.name.trim().to_string(),
            description: draft.description,
            permissions,
            users_count: 0,
            status: Status::Active,
            created_at,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        require_min_len("Name", &self.name, MIN_NAME_LEN)?;
        if let Some(bad) = self.permissions.iter().find(|p| !p.contains(':')) {
            return Err(AppError::Validation(format!(
                "Permission {} must look like resource:action",
                bad
            )));
        }
        Ok(())
    }
}

impl Toggleable for Role {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status, _reason: Option<String>) {
        self.status = status;
    }
}
