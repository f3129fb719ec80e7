pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;

use axum::Router;

pub use routes::AppState;

/// Create the application router
pub fn create_application(state: AppState) -> Router {
    routes::create_app(state)
}
