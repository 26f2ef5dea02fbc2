use crate::AppState;
use axum::extract::State;

/// GET /
/// Response: 200 OK with the plain-text greeting
pub async fn hello(State(state): State<AppState>) -> String {
    state.api.hello().to_owned()
}
