pub mod chatbot_answer;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /chatbot-answers              GET list, POST create
/// /chatbot-answers/{id}         GET get_by_id, PUT update
/// /chatbot-answers/status/{id}  PUT update_status
/// /chatbot-answers/order        PUT update_order
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/chatbot-answers", chatbot_answer::router())
}
