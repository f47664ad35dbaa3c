//! Verification queue endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::{
    create_entity, delete_entity, error, get_entity, list_entities, mutated, update_entity,
    ApiResult,
};
use crate::errors::AppError;
use crate::list::Entity;
use crate::models::VerificationItem;
use crate::review;
use crate::state::AppState;

/// Request body for rejecting a verification request.
#[derive(Debug, Default, Deserialize)]
pub struct RejectRequest {
    #[serde(default)]
    pub reason: String,
}

/// Routes for the verification queue, mounted at `/verifications`.
pub fn verification_routes() -> Router<AppState> {
    let base = format!("/{}", VerificationItem::COLLECTION);
    Router::new()
        .route(
            &base,
            get(list_entities::<VerificationItem>).post(create_entity::<VerificationItem>),
        )
        .route(
            &format!("{}/{{id}}", base),
            get(get_entity::<VerificationItem>)
                .put(update_entity::<VerificationItem>)
                .delete(delete_entity::<VerificationItem>),
        )
        .route(&format!("{}/{{id}}/approve", base), post(approve_verification))
        .route(&format!("{}/{{id}}/reject", base), post(reject_verification))
}

/// POST /api/verifications/:id/approve - Approve a pending request.
pub async fn approve_verification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<VerificationItem> {
    state.simulate_latency().await;
    let mut queue = state.collections.verifications.write().await;
    let revision_id = queue.revision();

    match review::approve(&mut queue, &id) {
        Ok(mutation) => mutated(mutation),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/verifications/:id/reject - Reject a pending request with a reason.
pub async fn reject_verification(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Option<Json<RejectRequest>>, JsonRejection>,
) -> ApiResult<VerificationItem> {
    state.simulate_latency().await;
    let mut queue = state.collections.verifications.write().await;
    let revision_id = queue.revision();

    let result = payload.map_err(AppError::from).and_then(|body| {
        let request = body.map(|Json(request)| request).unwrap_or_default();
        review::reject(&mut queue, &id, &request.reason)
    });
    match result {
        Ok(mutation) => mutated(mutation),
        Err(e) => error(e, revision_id),
    }
}
