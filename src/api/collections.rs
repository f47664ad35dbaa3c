//! Generic collection endpoints shared by every console screen.

use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use super::{error, mutated, success, ApiResult};
use crate::errors::AppError;
use crate::list::{Entity, FilterCriteria, Toggleable, View};
use crate::state::{AppState, Collections, HasCollection};

/// Query keys with a fixed meaning; every other key is a field filter.
const SEARCH_PARAM: &str = "search";
const PAGE_PARAM: &str = "page";

/// Request body for toggling an entity's status.
#[derive(Debug, Default, Deserialize)]
pub struct StatusChangeRequest {
    #[serde(default)]
    pub reason: Option<String>,
}

/// Routes for the collection of `T`, mounted at `/{T::COLLECTION}`.
pub fn collection_routes<T>() -> Router<AppState>
where
    T: Toggleable,
    Collections: HasCollection<T>,
{
    let base = format!("/{}", T::COLLECTION);
    Router::new()
        .route(&base, get(list_entities::<T>).post(create_entity::<T>))
        .route(
            &format!("{}/{{id}}", base),
            get(get_entity::<T>)
                .put(update_entity::<T>)
                .delete(delete_entity::<T>),
        )
        .route(
            &format!("{}/{{id}}/status", base),
            post(toggle_entity_status::<T>),
        )
}

/// Split raw query parameters into search term, page and field filters.
pub fn criteria_from_query(params: HashMap<String, String>) -> Result<FilterCriteria, AppError> {
    let mut criteria = FilterCriteria::default();
    for (key, value) in params {
        match key.as_str() {
            SEARCH_PARAM => criteria.search_term = value,
            PAGE_PARAM => {
                criteria.page = value
                    .parse()
                    .map_err(|_| AppError::BadRequest(format!("Invalid page: {}", value)))?;
            }
            _ => {
                criteria.field_filters.insert(key, value);
            }
        }
    }
    Ok(criteria)
}

/// GET /api/{collection} - One page of the filtered collection.
pub async fn list_entities<T>(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<View<T>>
where
    T: Entity,
    Collections: HasCollection<T>,
{
    let list = state.collection::<T>().read().await;
    let revision_id = list.revision();

    let view = criteria_from_query(params).and_then(|criteria| list.view_with(&criteria));
    match view {
        Ok(view) => success(view, revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/{collection}/:id - Get a single entity.
pub async fn get_entity<T>(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<T>
where
    T: Entity,
    Collections: HasCollection<T>,
{
    let list = state.collection::<T>().read().await;
    let revision_id = list.revision();

    match list.find(&id) {
        Ok(entity) => success(entity.clone(), revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/{collection} - Create an entity from its draft.
pub async fn create_entity<T>(
    State(state): State<AppState>,
    payload: Result<Json<T::Draft>, JsonRejection>,
) -> ApiResult<T>
where
    T: Entity,
    Collections: HasCollection<T>,
{
    state.simulate_latency().await;
    let mut list = state.collection::<T>().write().await;
    let revision_id = list.revision();

    let result = payload
        .map_err(AppError::from)
        .and_then(|Json(draft)| list.add(draft));
    match result {
        Ok(mutation) => mutated(mutation),
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/{collection}/:id - Merge a patch over an entity.
pub async fn update_entity<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<T>
where
    T: Entity,
    Collections: HasCollection<T>,
{
    state.simulate_latency().await;
    let mut list = state.collection::<T>().write().await;
    let revision_id = list.revision();

    let result = payload
        .map_err(AppError::from)
        .and_then(|Json(patch)| list.update(&id, &patch));
    match result {
        Ok(mutation) => mutated(mutation),
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/{collection}/:id/status - Toggle between active and inactive.
///
/// The body is optional; without one the toggle carries no reason.
pub async fn toggle_entity_status<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Option<Json<StatusChangeRequest>>, JsonRejection>,
) -> ApiResult<T>
where
    T: Toggleable,
    Collections: HasCollection<T>,
{
    state.simulate_latency().await;
    let mut list = state.collection::<T>().write().await;
    let revision_id = list.revision();

    let result = payload.map_err(AppError::from).and_then(|body| {
        let request = body.map(|Json(request)| request).unwrap_or_default();
        list.toggle_status(&id, request.reason)
    });
    match result {
        Ok(mutation) => mutated(mutation),
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/{collection}/:id - Remove an entity.
pub async fn delete_entity<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<T>
where
    T: Entity,
    Collections: HasCollection<T>,
{
    state.simulate_latency().await;
    let mut list = state.collection::<T>().write().await;
    let revision_id = list.revision();

    match list.remove(&id) {
        Ok(mutation) => mutated(mutation),
        Err(e) => error(e, revision_id),
    }
}
