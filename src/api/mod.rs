//! REST API module.
//!
//! Every collection is served by the same generic handlers; the verification
//! queue adds its review actions on top.

mod collections;
mod overview;
mod verifications;

pub use collections::*;
pub use overview::*;
pub use verifications::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::{AppError, AppErrorWithRevision};
use crate::list::{Mutation, Notification};

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    pub revision_id: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, revision_id: i64) -> Self {
        Self {
            success: true,
            data,
            notification: None,
            revision_id,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppErrorWithRevision>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T, revision_id: i64) -> ApiResult<T> {
    Ok(ApiResponse::new(data, revision_id))
}

/// Create a successful response for a mutation, carrying its notification.
pub fn mutated<T: Serialize>(mutation: Mutation<T>) -> ApiResult<T> {
    Ok(ApiResponse {
        success: true,
        data: mutation.entity,
        notification: Some(mutation.notification),
        revision_id: mutation.revision,
    })
}

/// Create an error API response.
pub fn error<T: Serialize>(err: AppError, revision_id: i64) -> ApiResult<T> {
    if err.status_code().is_server_error() {
        tracing::error!("{}", err);
    } else {
        tracing::warn!("{}", err);
    }
    Err(AppErrorWithRevision {
        error: err,
        revision_id,
    })
}
