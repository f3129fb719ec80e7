use tracing::debug;

/// Plain-text body of the liveness route
pub const LIVENESS_MESSAGE: &str = "Server is up and running!";

/// Liveness check; never touches the database
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Server is running", body = String, content_type = "text/plain"),
    ),
    tag = "system"
)]
pub async fn liveness() -> &'static str {
    debug!("Liveness check requested");
    LIVENESS_MESSAGE
}
