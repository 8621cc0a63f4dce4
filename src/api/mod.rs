// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use axum::{
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::repositories::{MemberRepository, TeamRepository};
use crate::infrastructure::repositories::{
    InMemoryStore, PostgresMemberRepository, PostgresTeamRepository,
};
use handlers::{health, members, teams};

/// Repositories shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub teams: Arc<dyn TeamRepository>,
    pub members: Arc<dyn MemberRepository>,
}

impl AppState {
    /// State backed by PostgreSQL
    pub fn postgres(pool: PgPool, auditor: &str) -> Self {
        Self {
            teams: Arc::new(PostgresTeamRepository::new(pool.clone(), auditor)),
            members: Arc::new(PostgresMemberRepository::new(pool, auditor)),
        }
    }

    /// State backed by a single in-process store
    pub fn in_memory(auditor: &str) -> Self {
        let store = Arc::new(InMemoryStore::new(auditor));
        Self {
            teams: store.clone(),
            members: store,
        }
    }
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Team routes
        .route("/api/teams", post(teams::create_team).get(teams::list_teams))
        .route("/api/teams/:id", get(teams::get_team).delete(teams::delete_team))
        .route("/api/teams/:id/members", get(members::list_team_members))
        .route(
            "/api/teams/:id/members/:member_id",
            put(teams::add_member).delete(teams::remove_member),
        )
        // Member routes
        .route("/api/members", post(members::create_member))
        .route(
            "/api/members/:id",
            get(members::get_member).delete(members::delete_member),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
