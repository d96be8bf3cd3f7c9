use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/workout", get(handlers::workout_page))
        .route("/nutrition", get(handlers::nutrition_page))
        .route("/progress", get(handlers::progress_page))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route(
            "/api/workouts",
            get(handlers::get_workouts).post(handlers::add_exercise),
        )
        .route("/api/workouts/:index", delete(handlers::delete_exercise))
        .route(
            "/api/meals",
            get(handlers::get_meals).post(handlers::add_meal),
        )
        .route("/api/meals/:index", delete(handlers::delete_meal))
        .route(
            "/api/progress",
            get(handlers::get_progress).post(handlers::add_progress),
        )
        .route("/api/progress/:index", delete(handlers::delete_progress))
        .with_state(state)
}
