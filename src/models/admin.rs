//! Console administrator model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_email, require_min_len, require_present, Status, MIN_NAME_LEN};
use crate::errors::AppError;
use crate::list::{Entity, Toggleable};

/// An operator with access to the admin console.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Name of the assigned role.
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub status: Status,
    /// Why the account was last suspended.
    #[serde(default)]
    pub status_reason: Option<String>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Entity for Admin {
    type Draft = AdminDraft;

    const KIND: &'static str = "Admin";
    const COLLECTION: &'static str = "admins";
    const PAGE_SIZE: usize = 10;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "role"];
    const PROTECTED_FIELDS: &'static [&'static str] = &["lastLogin", "statusReason"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "role" => Some(self.role.clone()),
            _ => None,
        }
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_lowercase(),
            role: draft.role.trim().to_string(),
            phone: draft.phone,
            status: Status::Active,
            status_reason: None,
            last_login: None,
            created_at,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        require_min_len("Name", &self.name, MIN_NAME_LEN)?;
        require_email(&self.email)?;
        require_present("Role", &self.role)
    }
}

impl Toggleable for Admin {
    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status, reason: Option<String>) {
        self.status = status;
        self.status_reason = match status {
            Status::Inactive => reason,
            Status::Active => None,
        };
    }
}
