//! Chatbot answer entity model and DTOs.
//!
//! An answer carries bilingual body text and references one category and
//! one question. The related rows are owned by their own admin flows; the
//! list endpoint embeds their English text so the panel can render derived
//! columns without extra round-trips.

use cbot_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::AnswerStatus;

/// A row from the `chatbot_answers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChatbotAnswer {
    pub id: DbId,
    pub category_id: DbId,
    pub question_id: DbId,
    pub en: String,
    pub od: String,
    pub status: AnswerStatus,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Embedded display text of a related category or question.
#[derive(Debug, Clone, Serialize)]
pub struct RelatedText {
    pub en: String,
}

/// An answer enriched with its related category and question text.
///
/// The relations are `Option` because the join is a LEFT JOIN: legacy rows
/// whose related entity has disappeared still list, and the client falls
/// back to a synthesized label.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerWithRelations {
    #[serde(flatten)]
    pub answer: ChatbotAnswer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<RelatedText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<RelatedText>,
}

/// Response envelope for the answer list endpoint.
#[derive(Debug, Serialize)]
pub struct AnswerListResponse {
    pub answers: Vec<AnswerWithRelations>,
}

/// DTO for creating a new answer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChatbotAnswer {
    pub category_id: DbId,
    pub question_id: DbId,
    pub en: String,
    pub od: String,
    /// Defaults to Active if omitted.
    pub status: Option<AnswerStatus>,
    /// Defaults to the end of the current ordering if omitted.
    pub sort_order: Option<i32>,
}

/// DTO for updating an existing answer. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChatbotAnswer {
    pub category_id: Option<DbId>,
    pub question_id: Option<DbId>,
    pub en: Option<String>,
    pub od: Option<String>,
    pub status: Option<AnswerStatus>,
}

/// Request body for the single-field status update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAnswerStatus {
    pub status: AnswerStatus,
}

/// Request body for persisting a user-defined ordering.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAnswerOrder {
    pub order: Vec<DbId>,
}
