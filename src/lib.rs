//! Kinship admin console backend.
//!
//! In-memory collections for the community and genealogy platform, each
//! managed by a generic list controller and served over a JSON API.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod list;
pub mod models;
pub mod review;
pub mod state;

use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use models::{
    Admin, Clan, Community, EthnicGroup, Event, Family, FamilyHistory, NewsArticle, Role, SubClan,
};
pub use state::AppState;

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let psk = state.config.api_psk.clone();

    let api_routes = Router::new()
        .route("/overview", get(api::get_overview))
        .merge(api::collection_routes::<Admin>())
        .merge(api::collection_routes::<EthnicGroup>())
        .merge(api::collection_routes::<Clan>())
        .merge(api::collection_routes::<SubClan>())
        .merge(api::collection_routes::<Role>())
        .merge(api::collection_routes::<Community>())
        .merge(api::collection_routes::<Event>())
        .merge(api::collection_routes::<NewsArticle>())
        .merge(api::collection_routes::<Family>())
        .merge(api::collection_routes::<FamilyHistory>())
        .merge(api::verification_routes())
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
