//! Repository for the `chatbot_answers` table.

use cbot_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::answer::{
    AnswerWithRelations, ChatbotAnswer, CreateChatbotAnswer, RelatedText, UpdateChatbotAnswer,
};
use crate::models::status::AnswerStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, category_id, question_id, en, od, status, sort_order, \
    created_at, updated_at";

/// Column list for queries joining the related category and question.
const JOINED_COLUMNS: &str = "a.id, a.category_id, a.question_id, a.en, a.od, a.status, \
    a.sort_order, a.created_at, a.updated_at, \
    c.en AS category_en, q.en AS question_en";

/// LEFT JOINs so answers still list when a related row has disappeared.
const RELATION_JOINS: &str = "FROM chatbot_answers a \
    LEFT JOIN chatbot_categories c ON c.id = a.category_id \
    LEFT JOIN chatbot_questions q ON q.id = a.question_id";

/// Intermediate row for the joined queries; flattened entity plus the two
/// related text columns.
#[derive(FromRow)]
struct AnswerJoinRow {
    #[sqlx(flatten)]
    answer: ChatbotAnswer,
    category_en: Option<String>,
    question_en: Option<String>,
}

impl From<AnswerJoinRow> for AnswerWithRelations {
    fn from(row: AnswerJoinRow) -> Self {
        AnswerWithRelations {
            answer: row.answer,
            category: row.category_en.map(|en| RelatedText { en }),
            question: row.question_en.map(|en| RelatedText { en }),
        }
    }
}

/// Provides CRUD and ordering operations for chatbot answers.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Insert a new answer, returning the created row.
    ///
    /// If `status` is `None`, defaults to Active. If `sort_order` is `None`,
    /// the row is appended after the current maximum.
    pub async fn create(
        pool: &PgPool,
        input: &CreateChatbotAnswer,
    ) -> Result<ChatbotAnswer, sqlx::Error> {
        let query = format!(
            "INSERT INTO chatbot_answers
                (category_id, question_id, en, od, status, sort_order)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'Active'),
                     COALESCE($6, (SELECT COALESCE(MAX(sort_order) + 1, 0)
                                   FROM chatbot_answers)))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatbotAnswer>(&query)
            .bind(input.category_id)
            .bind(input.question_id)
            .bind(&input.en)
            .bind(&input.od)
            .bind(input.status)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find an answer by its internal ID, enriched with related text.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<AnswerWithRelations>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} {RELATION_JOINS} WHERE a.id = $1");
        let row = sqlx::query_as::<_, AnswerJoinRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(AnswerWithRelations::from))
    }

    /// List all answers with related text, in the persisted display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<AnswerWithRelations>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} {RELATION_JOINS} ORDER BY a.sort_order, a.id");
        let rows = sqlx::query_as::<_, AnswerJoinRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(AnswerWithRelations::from).collect())
    }

    /// Update an answer. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChatbotAnswer,
    ) -> Result<Option<ChatbotAnswer>, sqlx::Error> {
        let query = format!(
            "UPDATE chatbot_answers SET
                category_id = COALESCE($2, category_id),
                question_id = COALESCE($3, question_id),
                en = COALESCE($4, en),
                od = COALESCE($5, od),
                status = COALESCE($6, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChatbotAnswer>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(input.question_id)
            .bind(&input.en)
            .bind(&input.od)
            .bind(input.status)
            .fetch_optional(pool)
            .await
    }

    /// Set the status of a single answer. Returns `true` if a row changed.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: AnswerStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE chatbot_answers SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Persist a user-defined ordering: each id in `order` gets its position
    /// index as `sort_order`, in one transaction.
    ///
    /// Returns `false` if any id does not match a row; dropping the
    /// transaction rolls the partial update back. Rows not named in `order`
    /// keep their previous rank.
    pub async fn reorder(pool: &PgPool, order: &[DbId]) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        for (rank, id) in order.iter().enumerate() {
            let result = sqlx::query("UPDATE chatbot_answers SET sort_order = $2 WHERE id = $1")
                .bind(id)
                .bind(rank as i32)
                .execute(&mut *tx)
                .await?;
            if result.rows_affected() == 0 {
                return Ok(false);
            }
        }
        tx.commit().await?;
        Ok(true)
    }
}
