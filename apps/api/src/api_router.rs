use axum::Router;
use axum::routing::get;
use presyohan_core::AppError;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

mod cors;


pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let cors_layer = cors::build_cors_layer(frontend_url)?;

    let user_routes = Router::new()
        .route("/api/users", get(handlers::users::list_users_handler))
        .route(
            "/api/users/lookup",
            get(handlers::users::lookup_user_handler),
        );

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(user_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(app_state))
}
