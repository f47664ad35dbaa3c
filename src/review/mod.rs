//! Review workflow for the verification queue.
//!
//! Items start `pending` and move once, to `approved` or `rejected`.
//! Rejection needs a reason the submitter can act on.

use chrono::Utc;

use crate::errors::AppError;
use crate::list::{ListController, Mutation, Notification};
use crate::models::{VerificationItem, VerificationStatus};

/// Approve a pending item.
pub fn approve(
    queue: &mut ListController<VerificationItem>,
    id: &str,
) -> Result<Mutation<VerificationItem>, AppError> {
    let (item, revision) = queue.apply(id, |item| {
        ensure_pending(item)?;
        item.status = VerificationStatus::Approved;
        item.reviewed_at = Some(Utc::now());
        Ok(())
    })?;
    tracing::info!(id, subject = %item.subject, "verification approved");

    let notification = Notification::success(
        "Verification approved",
        format!("{} has been verified.", item.subject),
    );
    Ok(Mutation {
        entity: item,
        notification,
        revision,
    })
}

/// Reject a pending item. A blank reason leaves the queue untouched.
pub fn reject(
    queue: &mut ListController<VerificationItem>,
    id: &str,
    reason: &str,
) -> Result<Mutation<VerificationItem>, AppError> {
    queue.find(id)?;
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(AppError::Validation(
            "A reason is required to reject a verification request".to_string(),
        ));
    }

    let (item, revision) = queue.apply(id, |item| {
        ensure_pending(item)?;
        item.status = VerificationStatus::Rejected;
        item.rejection_reason = Some(reason.to_string());
        item.reviewed_at = Some(Utc::now());
        Ok(())
    })?;
    tracing::info!(id, subject = %item.subject, reason, "verification rejected");

    let notification = Notification::destructive(
        "Verification rejected",
        format!("{} was rejected. Reason: {}", item.subject, reason),
    );
    Ok(Mutation {
        entity: item,
        notification,
        revision,
    })
}

/// Number of items still awaiting review.
pub fn pending_count(queue: &ListController<VerificationItem>) -> usize {
    queue
        .items()
        .iter()
        .filter(|item| item.status == VerificationStatus::Pending)
        .count()
}

fn ensure_pending(item: &VerificationItem) -> Result<(), AppError> {
    if item.status.is_terminal() {
        return Err(AppError::Conflict(format!(
            "Verification request {} is already {}",
            item.id,
            item.status.as_str()
        )));
    }
    Ok(())
}
