//! Display-text resolution for an answer's related category and question.
//!
//! The list endpoint embeds related rows when the join finds them, but the
//! admin client must also render rows whose relation data is missing or
//! arrives under a legacy field name. Resolution runs over an explicit
//! input union rather than optional-chaining across row shapes:
//!
//! 1. embedded relation text (primary field, then the legacy alternate)
//! 2. a label synthesized from the raw foreign key
//! 3. a terminal fallback (placeholder for questions, empty for categories)

use crate::types::DbId;

/// What is known about a related entity after probing a row, in priority
/// order. Empty embedded text counts as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelatedRef<'a> {
    /// An embedded relation object supplied its display text.
    Embedded(&'a str),
    /// Only the raw foreign key is available.
    IdOnly(DbId),
    /// Neither embedded data nor an id.
    Absent,
}

impl<'a> RelatedRef<'a> {
    /// Classify a row's relation data: primary embedded field, then the
    /// alternate embedded field, then the raw id.
    pub fn from_parts(
        primary: Option<&'a str>,
        alternate: Option<&'a str>,
        id: Option<DbId>,
    ) -> Self {
        if let Some(text) = primary.filter(|t| !t.is_empty()) {
            return RelatedRef::Embedded(text);
        }
        if let Some(text) = alternate.filter(|t| !t.is_empty()) {
            return RelatedRef::Embedded(text);
        }
        match id {
            Some(id) => RelatedRef::IdOnly(id),
            None => RelatedRef::Absent,
        }
    }
}

/// Display text for an answer's question.
pub fn question_label(related: RelatedRef<'_>) -> String {
    match related {
        RelatedRef::Embedded(text) => text.to_string(),
        RelatedRef::IdOnly(id) => format!("Question {id}"),
        RelatedRef::Absent => "this question".to_string(),
    }
}

/// Display text for an answer's category. Falls back to an empty string,
/// not a placeholder.
pub fn category_label(related: RelatedRef<'_>) -> String {
    match related {
        RelatedRef::Embedded(text) => text.to_string(),
        RelatedRef::IdOnly(id) => format!("Category {id}"),
        RelatedRef::Absent => String::new(),
    }
}
