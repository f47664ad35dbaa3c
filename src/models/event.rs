//! Community event model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{require_min_len, require_present, Status, MIN_NAME_LEN};
use crate::errors::AppError;
use crate::list::{Entity, Toggleable};

/// Kind of gathering, used as a dropdown filter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Festival,
    Funeral,
    Wedding,
    Naming,
    Meeting,
    #[default]
    Other,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Festival => "festival",
            EventCategory::Funeral => "funeral",
            EventCategory::Wedding => "wedding",
            EventCategory::Naming => "naming",
            EventCategory::Meeting => "meeting",
            EventCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub location: String,
    pub date: NaiveDate,
    pub category: EventCategory,
    #[serde(default)]
    pub organizer: Option<String>,
    #[serde(default)]
    pub attendees_count: u32,
    pub status: Status,
    /// Why the event was last suspended.
    #[serde(default)]
    pub status_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub location: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub category: EventCategory,
    #[serde(default)]
    pub organizer: Option<String>,
}

impl Entity for Event {
    type Draft = EventDraft;

    const KIND: &'static str = "Event";
    const COLLECTION: &'static str = "events";
    const PAGE_SIZE: usize = 10;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "category"];
    const PROTECTED_FIELDS: &'static [&'static str] = &["attendeesCount", "statusReason"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.location.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "category" => Some(self.category.as_str().to_string()),
            _ => None,
        }
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description,
            location: draft.location.trim().to_string(),
            date: draft.date,
            category: draft.category,
            organizer: draft.organizer,
            attendees_count: 0,
            status: Status::Active,
            status_reason: None,
            created_at,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        require_min_len("Title", &self.title, MIN_NAME_LEN)?;
        require_present("Location", &self.location)
    }
}

impl Toggleable for Event {
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
