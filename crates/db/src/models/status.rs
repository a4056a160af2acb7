//! Answer status enum mapping to the `answer_status` Postgres enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Publication status of a chatbot answer. Stored as the `answer_status`
/// enum type; serialized on the wire as `"Active"` / `"Inactive"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "answer_status")]
pub enum AnswerStatus {
    Active,
    Inactive,
}

impl AnswerStatus {
    /// The opposite status, as sent by the admin panel's toggle action.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_states() {
        assert_eq!(AnswerStatus::Active.toggled(), AnswerStatus::Inactive);
        assert_eq!(AnswerStatus::Inactive.toggled(), AnswerStatus::Active);
        assert_eq!(AnswerStatus::Active.toggled().toggled(), AnswerStatus::Active);
    }

    #[test]
    fn wire_format_matches_database_labels() {
        assert_eq!(
            serde_json::to_string(&AnswerStatus::Active).unwrap(),
            "\"Active\""
        );
        let parsed: AnswerStatus = serde_json::from_str("\"Inactive\"").unwrap();
        assert_eq!(parsed, AnswerStatus::Inactive);
    }
}
