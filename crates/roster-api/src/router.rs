//! Route definitions for the Roster HTTP API.

use axum::Router;
use axum::routing::get;

use crate::handlers;
use crate::state::AppState;

/// Build the router and thread `state` through every route.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(member_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Member endpoints: one search per variant plus lookup by id.
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/members", get(handlers::member::search_members_v1))
        .route("/v1/members/{id}", get(handlers::member::get_member))
        .route("/v2/members", get(handlers::member::search_members_v2))
        .route("/v3/members", get(handlers::member::search_members_v3))
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
