//! Dashboard overview endpoint.

use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{success, ApiResult};
use crate::list::Toggleable;
use crate::models::{
    Admin, Clan, Community, EthnicGroup, Event, Family, FamilyHistory, NewsArticle, Role, SubClan,
};
use crate::review;
use crate::state::{AppState, Collections, HasCollection};

/// Record counts for one collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub collection: &'static str,
    pub total: usize,
    pub active: usize,
}

/// Counts shown on the console dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub collections: Vec<CollectionSummary>,
    pub verifications_total: usize,
    pub pending_verifications: usize,
    pub generated_at: DateTime<Utc>,
}

/// Returns the summary and the collection revision.
async fn summarize<T>(state: &AppState) -> (CollectionSummary, i64)
where
    T: Toggleable,
    Collections: HasCollection<T>,
{
    let list = state.collection::<T>().read().await;
    let summary = CollectionSummary {
        collection: T::COLLECTION,
        total: list.len(),
        active: list.count_active(),
    };
    (summary, list.revision())
}

/// GET /api/overview - Per-collection counts for the dashboard.
///
/// The revision is the sum of all collection revisions, so it moves whenever any collection changes.
pub async fn get_overview(State(state): State<AppState>) -> ApiResult<Overview> {
    let parts = vec![
        summarize::<Admin>(&state).await,
        summarize::<EthnicGroup>(&state).await,
        summarize::<Clan>(&state).await,
        summarize::<SubClan>(&state).await,
        summarize::<Role>(&state).await,
        summarize::<Community>(&state).await,
        summarize::<Event>(&state).await,
        summarize::<NewsArticle>(&state).await,
        summarize::<Family>(&state).await,
        summarize::<FamilyHistory>(&state).await,
    ];

    let queue = state.collections.verifications.read().await;
    let mut revision_id = queue.revision();
    let mut collections = Vec::with_capacity(parts.len());
    for (summary, revision) in parts {
        revision_id += revision;
        collections.push(summary);
    }

    let overview = Overview {
        collections,
        verifications_total: queue.len(),
        pending_verifications: review::pending_count(&queue),
        generated_at: Utc::now(),
    };
    success(overview, revision_id)
}
