use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_handler))
        .route(
            "/v1/roles",
            get(handlers::roles::list_roles_handler).post(handlers::roles::create_role_handler),
        )
        .route(
            "/v1/roles/search",
            get(handlers::roles::search_role_handler),
        )
        .route(
            "/v1/roles/memberships",
            post(handlers::memberships::create_membership_handler),
        )
        .route(
            "/v1/roles/memberships/search",
            get(handlers::memberships::search_memberships_handler),
        )
        .route(
            "/v1/roles/{role_id}",
            get(handlers::roles::get_role_handler),
        )
        .route("/v1/teams", get(handlers::directory::list_teams_handler))
        .route(
            "/v1/teams/{team_id}",
            get(handlers::directory::get_team_handler),
        )
        .route("/v1/users", get(handlers::directory::list_users_handler))
        .route(
            "/v1/users/{user_id}",
            get(handlers::directory::get_user_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
