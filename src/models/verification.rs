//! Verification queue model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_min_len, require_present, VerificationStatus, MIN_NAME_LEN};
use crate::errors::AppError;
use crate::list::Entity;

/// What a verification request asks the reviewers to confirm.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum VerificationKind {
    Family,
    Clan,
    Membership,
    FamilyHistory,
}

impl VerificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationKind::Family => "family",
            VerificationKind::Clan => "clan",
            VerificationKind::Membership => "membership",
            VerificationKind::FamilyHistory => "familyHistory",
        }
    }
}

/// A submission awaiting review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationItem {
    pub id: String,
    /// Name of the record or person being verified.
    pub subject: String,
    pub kind: VerificationKind,
    pub submitted_by: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
    pub status: VerificationStatus,
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDraft {
    pub subject: String,
    pub kind: VerificationKind,
    pub submitted_by: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl Entity for VerificationItem {
    type Draft = VerificationDraft;

    const KIND: &'static str = "Verification request";
    const COLLECTION: &'static str = "verifications";
    const PAGE_SIZE: usize = 10;
    const FILTER_FIELDS: &'static [&'static str] = &["status", "kind"];
    const PROTECTED_FIELDS: &'static [&'static str] =
        &["rejectionReason", "reviewedAt", "kind"];

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.subject
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.subject.as_str(), self.submitted_by.as_str()]
    }

    fn filter_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.as_str().to_string()),
            "kind" => Some(self.kind.as_str().to_string()),
            _ => None,
        }
    }

    fn from_draft(id: String, created_at: DateTime<Utc>, draft: Self::Draft) -> Self {
        Self {
            id,
            subject: draft.subject.trim().to_string(),
            kind: draft.kind,
            submitted_by: draft.submitted_by.trim().to_string(),
            details: draft.details,
            documents: draft.documents,
            status: VerificationStatus::Pending,
            rejection_reason: None,
            reviewed_at: None,
            created_at,
        }
    }

    fn validate(&self) -> Result<(), AppError> {
        require_min_len("Subject", &self.subject, MIN_NAME_LEN)?;
        require_present("Submitted by", &self.submitted_by)?;
        if self.status == VerificationStatus::Rejected {
            require_present("Rejection reason", self.rejection_reason.as_deref().unwrap_or(""))?;
        }
        Ok(())
    }
}
