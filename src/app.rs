use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/login", get(handlers::login_page).post(handlers::login))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/activities", post(handlers::add_activity))
        .with_state(state)
}
