use axum::extract::State;

use crate::error::ErrorResponse;
use crate::methods::routes::HELLO_PATH;
use crate::state::AppState;

/// Greets the caller. Takes no parameters and never fails.
#[utoipa::path(
    get,
    path = HELLO_PATH,
    tag = "greeting",
    responses(
        (status = 200, description = "Greeting text", body = String, content_type = "text/plain"),
        (status = 405, description = "Method other than GET", body = ErrorResponse),
    )
)]
pub async fn hello(State(state): State<AppState>) -> String {
    tracing::debug!(env = %state.env, "greeting requested");
    state.greeting.to_string()
}
