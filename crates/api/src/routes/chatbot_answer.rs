//! Route definitions for the chatbot answer resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::chatbot_answer;
use crate::state::AppState;

/// Routes mounted at `/chatbot-answers`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// PUT    /status/{id}  -> update_status
/// PUT    /order        -> update_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(chatbot_answer::list).post(chatbot_answer::create),
        )
        .route(
            "/{id}",
            get(chatbot_answer::get_by_id).put(chatbot_answer::update),
        )
        .route("/status/{id}", put(chatbot_answer::update_status))
        .route("/order", put(chatbot_answer::update_order))
}
