//! Handlers for the `/api/chatbot-answers` resource.
//!
//! The admin panel consumes the list with embedded relation text, flips a
//! single row's status, and persists a full ordering as an id sequence.
//! The add/edit flows use the create, get and update endpoints.

use std::collections::HashSet;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use cbot_core::error::CoreError;
use cbot_core::types::DbId;
use cbot_db::models::answer::{
    AnswerListResponse, CreateChatbotAnswer, UpdateAnswerOrder, UpdateAnswerStatus,
    UpdateChatbotAnswer,
};
use cbot_db::repositories::AnswerRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/chatbot-answers
///
/// Returns every answer with its related category/question text embedded,
/// in the persisted display order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let answers = AnswerRepo::list(&state.pool).await?;
    Ok(Json(AnswerListResponse { answers }))
}

/// POST /api/chatbot-answers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateChatbotAnswer>,
) -> AppResult<impl IntoResponse> {
    require_text("en", &input.en)?;
    require_text("od", &input.od)?;

    let answer = AnswerRepo::create(&state.pool, &input).await?;

    tracing::info!(answer_id = answer.id, "Chatbot answer created");

    Ok((StatusCode::CREATED, Json(answer)))
}

/// GET /api/chatbot-answers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let answer = AnswerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ChatbotAnswer",
            id,
        }))?;
    Ok(Json(answer))
}

/// PUT /api/chatbot-answers/{id}
///
/// Partial update; omitted fields are left untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChatbotAnswer>,
) -> AppResult<impl IntoResponse> {
    if let Some(en) = &input.en {
        require_text("en", en)?;
    }
    if let Some(od) = &input.od {
        require_text("od", od)?;
    }

    let answer = AnswerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ChatbotAnswer",
            id,
        }))?;

    tracing::info!(answer_id = id, "Chatbot answer updated");

    Ok(Json(answer))
}

/// PUT /api/chatbot-answers/status/{id}
///
/// Single-field status update issued by the panel's toggle action.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnswerStatus>,
) -> AppResult<StatusCode> {
    let changed = AnswerRepo::update_status(&state.pool, id, input.status).await?;
    if !changed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ChatbotAnswer",
            id,
        }));
    }

    tracing::info!(answer_id = id, status = %input.status, "Answer status updated");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/chatbot-answers/order
///
/// Persists a user-defined ordering. The body carries the full id sequence
/// in its new display order; each row's rank becomes its index.
pub async fn update_order(
    State(state): State<AppState>,
    Json(input): Json<UpdateAnswerOrder>,
) -> AppResult<StatusCode> {
    if input.order.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "order must contain at least one answer id".to_string(),
        )));
    }

    let mut seen = HashSet::with_capacity(input.order.len());
    if !input.order.iter().all(|id| seen.insert(id)) {
        return Err(AppError::Core(CoreError::Validation(
            "order contains duplicate answer ids".to_string(),
        )));
    }

    let applied = AnswerRepo::reorder(&state.pool, &input.order).await?;
    if !applied {
        return Err(AppError::Core(CoreError::Validation(
            "order references an unknown answer id".to_string(),
        )));
    }

    tracing::info!(count = input.order.len(), "Answer order updated");

    Ok(StatusCode::NO_CONTENT)
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field} must not be empty"
        ))));
    }
    Ok(())
}
