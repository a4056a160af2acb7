//! Wire types for the chatbot-answer endpoints, as consumed by the panel.
//!
//! Relation data may arrive embedded under the current field names, under
//! the legacy capitalized names, or not at all; the panel renders a
//! sensible label in every case.

use cbot_core::display::{category_label, question_label, RelatedRef};
use cbot_core::types::DbId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication status as serialized on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerStatus {
    Active,
    Inactive,
}

impl AnswerStatus {
    /// The opposite status, used by the toggle action.
    pub fn toggled(self) -> Self {
        match self {
            AnswerStatus::Active => AnswerStatus::Inactive,
            AnswerStatus::Inactive => AnswerStatus::Active,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnswerStatus::Active => "Active",
            AnswerStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for AnswerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Embedded display text of a related category or question.
#[derive(Debug, Clone, Deserialize)]
pub struct RelatedText {
    pub en: String,
}

/// One answer as returned by the list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRecord {
    pub id: DbId,
    #[serde(default)]
    pub category_id: Option<DbId>,
    #[serde(default)]
    pub question_id: Option<DbId>,
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub od: String,
    pub status: AnswerStatus,
    #[serde(default)]
    pub category: Option<RelatedText>,
    #[serde(default)]
    pub question: Option<RelatedText>,
    /// Legacy embedding emitted by older API responses.
    #[serde(default, rename = "ChatbotCategory")]
    pub chatbot_category: Option<RelatedText>,
    #[serde(default, rename = "ChatbotQuestion")]
    pub chatbot_question: Option<RelatedText>,
}

impl AnswerRecord {
    fn question_ref(&self) -> RelatedRef<'_> {
        RelatedRef::from_parts(
            self.question.as_ref().map(|r| r.en.as_str()),
            self.chatbot_question.as_ref().map(|r| r.en.as_str()),
            self.question_id,
        )
    }

    fn category_ref(&self) -> RelatedRef<'_> {
        RelatedRef::from_parts(
            self.category.as_ref().map(|r| r.en.as_str()),
            self.chatbot_category.as_ref().map(|r| r.en.as_str()),
            self.category_id,
        )
    }

    /// Display text for the question column and the confirmation prompt.
    pub fn question_text(&self) -> String {
        question_label(self.question_ref())
    }

    /// Display text for the category column.
    pub fn category_text(&self) -> String {
        category_label(self.category_ref())
    }
}

/// Envelope of the list endpoint. A missing `answers` key reads as empty.
#[derive(Debug, Deserialize)]
pub struct AnswerListPayload {
    #[serde(default)]
    pub answers: Vec<AnswerRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_record() -> AnswerRecord {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "category_id": 4,
            "question_id": 7,
            "en": "Answer text",
            "od": "Answer text (od)",
            "status": "Active"
        }))
        .unwrap()
    }

    #[test]
    fn embedded_question_wins() {
        let mut record = base_record();
        record.question = Some(RelatedText {
            en: "How do I renew?".to_string(),
        });
        assert_eq!(record.question_text(), "How do I renew?");
    }

    #[test]
    fn legacy_field_name_is_recognized() {
        let record: AnswerRecord = serde_json::from_value(serde_json::json!({
            "id": 2,
            "question_id": 7,
            "status": "Active",
            "ChatbotQuestion": { "en": "Eligibility?" },
            "ChatbotCategory": { "en": "Licensing" }
        }))
        .unwrap();
        assert_eq!(record.question_text(), "Eligibility?");
        assert_eq!(record.category_text(), "Licensing");
    }

    #[test]
    fn id_only_synthesizes_labels() {
        let record = base_record();
        assert_eq!(record.question_text(), "Question 7");
        assert_eq!(record.category_text(), "Category 4");
    }

    #[test]
    fn missing_everything_uses_terminal_fallbacks() {
        let record: AnswerRecord = serde_json::from_value(serde_json::json!({
            "id": 3,
            "status": "Inactive"
        }))
        .unwrap();
        assert_eq!(record.question_text(), "this question");
        assert_eq!(record.category_text(), "");
    }

    #[test]
    fn missing_answers_key_reads_as_empty_list() {
        let payload: AnswerListPayload = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(payload.answers.is_empty());
    }
}
