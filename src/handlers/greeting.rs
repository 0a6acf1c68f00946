use crate::startup::AppState;
use axum::extract::State;

/// Returns the fixed greeting as a plain-text 200 response.
pub async fn greeting(State(state): State<AppState>) -> &'static str {
    state.greeter.greet()
}
