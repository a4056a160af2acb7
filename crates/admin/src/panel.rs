//! Answer management panel state.
//!
//! Headless view-model for the admin table: holds the answer list, the
//! pending status-toggle confirmation and the reorder panel state, and
//! performs network operations through the injected [`AnswersApi`]. Local
//! state only changes after the server accepts a mutation; failures become
//! notifications and never disturb the list.

use std::sync::Arc;

use cbot_core::types::DbId;

use crate::client::{AnswersApi, ClientError};
use crate::notify::{Navigator, NoticeLevel, Notifier};
use crate::types::{AnswerRecord, AnswerStatus};

/// Route of the external edit flow, keyed by answer id.
const EDIT_ROUTE_PREFIX: &str = "/admin/manage-chatbot/edit-answer";

/// A requested status flip awaiting user confirmation.
#[derive(Debug, Clone)]
pub struct PendingToggle {
    pub answer_id: DbId,
    pub target: AnswerStatus,
    question: String,
}

impl PendingToggle {
    /// Prompt text shown in the confirmation dialog.
    pub fn message(&self) -> String {
        format!(
            "Are you sure you want to set the answer for \"{}\" to {}?",
            self.question, self.target
        )
    }
}

/// One row of the reorder panel, seeded from the current list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderEntry {
    pub id: DbId,
    /// Primary display key: the derived question text.
    pub label: String,
    /// Secondary display key: the derived category text.
    pub secondary: String,
}

pub struct AnswerPanel {
    api: Arc<dyn AnswersApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    answers: Vec<AnswerRecord>,
    loading: bool,
    pending_toggle: Option<PendingToggle>,
    reorder_open: bool,
    load_generation: u64,
}

impl AnswerPanel {
    pub fn new(
        api: Arc<dyn AnswersApi>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            notifier,
            navigator,
            answers: Vec::new(),
            loading: false,
            pending_toggle: None,
            reorder_open: false,
            load_generation: 0,
        }
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending_toggle(&self) -> Option<&PendingToggle> {
        self.pending_toggle.as_ref()
    }

    pub fn is_reorder_open(&self) -> bool {
        self.reorder_open
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    /// Bulk-load the list, replacing local state on success. On failure the
    /// list is left empty and a generic notification is shown.
    pub async fn load(&mut self) {
        self.loading = true;
        let generation = self.next_generation();
        let result = self.api.fetch_answers().await;
        self.finish_load(generation, result);
    }

    fn next_generation(&mut self) -> u64 {
        self.load_generation += 1;
        self.load_generation
    }

    /// Apply a load result, unless a newer load has superseded it. The
    /// currency check keeps a slow response from overwriting fresher state.
    fn finish_load(&mut self, generation: u64, result: Result<Vec<AnswerRecord>, ClientError>) {
        if generation != self.load_generation {
            return;
        }
        self.loading = false;
        match result {
            Ok(answers) => self.answers = answers,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load chatbot answers");
                self.answers = Vec::new();
                self.notifier
                    .notify(NoticeLevel::Error, "Failed to load chatbot answers.");
            }
        }
    }

    // -----------------------------------------------------------------------
    // Status toggle
    // -----------------------------------------------------------------------

    /// Open the confirmation prompt for flipping a row's status. Ignored if
    /// the id is not in the current list.
    pub fn request_status_toggle(&mut self, answer_id: DbId) {
        let Some(row) = self.answers.iter().find(|a| a.id == answer_id) else {
            return;
        };
        self.pending_toggle = Some(PendingToggle {
            answer_id,
            target: row.status.toggled(),
            question: row.question_text(),
        });
    }

    pub fn cancel_status_toggle(&mut self) {
        self.pending_toggle = None;
    }

    /// Send the confirmed status flip. Only the targeted row changes, and
    /// only after the server accepts; the prompt closes in all cases.
    pub async fn confirm_status_toggle(&mut self) {
        let Some(pending) = self.pending_toggle.take() else {
            return;
        };
        let result = self.api.update_status(pending.answer_id, pending.target).await;
        match result {
            Ok(()) => {
                for answer in &mut self.answers {
                    if answer.id == pending.answer_id {
                        answer.status = pending.target;
                    }
                }
                self.notifier.notify(
                    NoticeLevel::Success,
                    &format!("Answer status set to \"{}\" successfully!", pending.target),
                );
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to update answer status");
                self.notifier
                    .notify(NoticeLevel::Error, "Failed to update status.");
            }
        }
    }

    // -----------------------------------------------------------------------
    // Reordering
    // -----------------------------------------------------------------------

    pub fn open_reorder(&mut self) {
        self.reorder_open = true;
    }

    pub fn close_reorder(&mut self) {
        self.reorder_open = false;
    }

    /// Entries for the reorder panel, seeded from the current list.
    pub fn reorder_entries(&self) -> Vec<ReorderEntry> {
        self.answers
            .iter()
            .map(|answer| ReorderEntry {
                id: answer.id,
                label: answer.question_text(),
                secondary: answer.category_text(),
            })
            .collect()
    }

    /// Persist a new ordering. `order` holds the full id sequence as the
    /// user arranged it. On success the local list is rearranged to match
    /// and the panel closes; on failure both stay untouched.
    pub async fn save_order(&mut self, order: Vec<DbId>) {
        let result = self.api.update_order(&order).await;
        match result {
            Ok(()) => {
                self.apply_order(&order);
                self.reorder_open = false;
                self.notifier
                    .notify(NoticeLevel::Success, "Answer order updated successfully!");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to update answer order");
                self.notifier
                    .notify(NoticeLevel::Error, "Failed to update answer order.");
            }
        }
    }

    /// Rearrange the local list to match the id sequence. Rows not named in
    /// `order` keep their relative order after the sequenced ones.
    fn apply_order(&mut self, order: &[DbId]) {
        self.answers.sort_by_key(|answer| {
            order
                .iter()
                .position(|&id| id == answer.id)
                .unwrap_or(usize::MAX)
        });
    }

    // -----------------------------------------------------------------------
    // Edit navigation
    // -----------------------------------------------------------------------

    /// Route to the external edit flow. No local state changes.
    pub fn edit_answer(&self, answer_id: DbId) {
        self.navigator
            .navigate(&format!("{EDIT_ROUTE_PREFIX}/{answer_id}"));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::types::RelatedText;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    #[derive(Default)]
    struct MockApi {
        answers: Vec<AnswerRecord>,
        fail_fetch: bool,
        fail_status: bool,
        fail_order: bool,
        status_calls: Mutex<Vec<(DbId, AnswerStatus)>>,
        order_calls: Mutex<Vec<Vec<DbId>>>,
    }

    #[async_trait]
    impl AnswersApi for MockApi {
        async fn fetch_answers(&self) -> Result<Vec<AnswerRecord>, ClientError> {
            if self.fail_fetch {
                return Err(ClientError::RequestFailed("boom".into()));
            }
            Ok(self.answers.clone())
        }

        async fn update_status(
            &self,
            id: DbId,
            status: AnswerStatus,
        ) -> Result<(), ClientError> {
            self.status_calls.lock().unwrap().push((id, status));
            if self.fail_status {
                return Err(ClientError::RequestFailed("boom".into()));
            }
            Ok(())
        }

        async fn update_order(&self, order: &[DbId]) -> Result<(), ClientError> {
            self.order_calls.lock().unwrap().push(order.to_vec());
            if self.fail_order {
                return Err(ClientError::RequestFailed("boom".into()));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<(NoticeLevel, String)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, level: NoticeLevel, message: &str) {
            self.notices.lock().unwrap().push((level, message.to_string()));
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        paths: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.paths.lock().unwrap().push(path.to_string());
        }
    }

    fn record(id: DbId, status: AnswerStatus, question: &str) -> AnswerRecord {
        let mut rec: AnswerRecord = serde_json::from_value(serde_json::json!({
            "id": id,
            "category_id": 1,
            "question_id": id,
            "en": format!("Answer {id}"),
            "od": format!("Answer {id} (od)"),
            "status": status.as_str(),
        }))
        .unwrap();
        rec.question = Some(RelatedText {
            en: question.to_string(),
        });
        rec.category = Some(RelatedText {
            en: "General".to_string(),
        });
        rec
    }

    struct Harness {
        panel: AnswerPanel,
        api: Arc<MockApi>,
        notifier: Arc<RecordingNotifier>,
        navigator: Arc<RecordingNavigator>,
    }

    fn harness(api: MockApi) -> Harness {
        let api = Arc::new(api);
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let panel = AnswerPanel::new(api.clone(), notifier.clone(), navigator.clone());
        Harness {
            panel,
            api,
            notifier,
            navigator,
        }
    }

    async fn loaded_harness(answers: Vec<AnswerRecord>) -> Harness {
        let mut h = harness(MockApi {
            answers,
            ..MockApi::default()
        });
        h.panel.load().await;
        h
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn load_replaces_list_and_clears_loading() {
        let mut h = harness(MockApi {
            answers: vec![record(1, AnswerStatus::Active, "Q1")],
            ..MockApi::default()
        });

        h.panel.load().await;

        assert!(!h.panel.is_loading());
        assert_eq!(h.panel.answers().len(), 1);
        assert!(h.notifier.notices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn load_failure_notifies_and_leaves_list_empty() {
        let mut h = harness(MockApi {
            fail_fetch: true,
            ..MockApi::default()
        });

        h.panel.load().await;

        assert!(!h.panel.is_loading());
        assert!(h.panel.answers().is_empty());
        let notices = h.notifier.notices.lock().unwrap();
        assert_eq!(
            notices.as_slice(),
            [(NoticeLevel::Error, "Failed to load chatbot answers.".to_string())]
        );
    }

    #[tokio::test]
    async fn stale_load_response_is_discarded() {
        let mut h = harness(MockApi::default());

        let stale = h.panel.next_generation();
        let _current = h.panel.next_generation();

        h.panel
            .finish_load(stale, Ok(vec![record(1, AnswerStatus::Active, "Q1")]));

        assert!(h.panel.answers().is_empty(), "superseded response ignored");
    }

    // -----------------------------------------------------------------------
    // Status toggle
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn toggling_active_row_sends_inactive() {
        let mut h = loaded_harness(vec![record(1, AnswerStatus::Active, "Q1")]).await;

        h.panel.request_status_toggle(1);
        assert_matches!(
            h.panel.pending_toggle(),
            Some(PendingToggle {
                target: AnswerStatus::Inactive,
                ..
            })
        );

        h.panel.confirm_status_toggle().await;

        let calls = h.api.status_calls.lock().unwrap();
        assert_eq!(calls.as_slice(), [(1, AnswerStatus::Inactive)]);
    }

    #[tokio::test]
    async fn toggling_inactive_row_sends_active() {
        let mut h = loaded_harness(vec![record(1, AnswerStatus::Inactive, "Q1")]).await;

        h.panel.request_status_toggle(1);
        h.panel.confirm_status_toggle().await;

        let calls = h.api.status_calls.lock().unwrap();
        assert_eq!(calls.as_slice(), [(1, AnswerStatus::Active)]);
    }

    #[tokio::test]
    async fn confirmed_toggle_updates_only_target_row() {
        let mut h = loaded_harness(vec![
            record(1, AnswerStatus::Active, "Q1"),
            record(2, AnswerStatus::Active, "Q2"),
        ])
        .await;

        h.panel.request_status_toggle(1);
        h.panel.confirm_status_toggle().await;

        assert_eq!(h.panel.answers()[0].status, AnswerStatus::Inactive);
        assert_eq!(h.panel.answers()[1].status, AnswerStatus::Active);
        assert!(h.panel.pending_toggle().is_none(), "prompt closes");

        let notices = h.notifier.notices.lock().unwrap();
        assert_eq!(
            notices.as_slice(),
            [(
                NoticeLevel::Success,
                "Answer status set to \"Inactive\" successfully!".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn failed_toggle_leaves_list_unchanged() {
        let mut h = loaded_harness(vec![record(1, AnswerStatus::Active, "Q1")]).await;
        // Swap in a failing API after the load.
        let api = Arc::new(MockApi {
            fail_status: true,
            ..MockApi::default()
        });
        h.panel.api = api;

        h.panel.request_status_toggle(1);
        h.panel.confirm_status_toggle().await;

        assert_eq!(h.panel.answers()[0].status, AnswerStatus::Active);
        assert!(h.panel.pending_toggle().is_none(), "prompt closes on failure too");

        let notices = h.notifier.notices.lock().unwrap();
        assert_eq!(
            notices.as_slice(),
            [(NoticeLevel::Error, "Failed to update status.".to_string())]
        );
    }

    #[tokio::test]
    async fn cancel_toggle_sends_nothing() {
        let mut h = loaded_harness(vec![record(1, AnswerStatus::Active, "Q1")]).await;

        h.panel.request_status_toggle(1);
        h.panel.cancel_status_toggle();
        h.panel.confirm_status_toggle().await;

        assert!(h.api.status_calls.lock().unwrap().is_empty());
        assert!(h.notifier.notices.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn prompt_message_names_question_and_target() {
        let mut h = loaded_harness(vec![record(1, AnswerStatus::Active, "How do I renew?")]).await;

        h.panel.request_status_toggle(1);

        let message = h.panel.pending_toggle().unwrap().message();
        assert_eq!(
            message,
            "Are you sure you want to set the answer for \"How do I renew?\" to Inactive?"
        );
    }

    // -----------------------------------------------------------------------
    // Reordering
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn reorder_entries_seed_from_current_list() {
        let h = loaded_harness(vec![
            record(1, AnswerStatus::Active, "Q1"),
            record(2, AnswerStatus::Active, "Q2"),
        ])
        .await;

        let entries = h.panel.reorder_entries();
        assert_eq!(
            entries,
            [
                ReorderEntry {
                    id: 1,
                    label: "Q1".to_string(),
                    secondary: "General".to_string()
                },
                ReorderEntry {
                    id: 2,
                    label: "Q2".to_string(),
                    secondary: "General".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn saved_order_rearranges_list_and_closes_panel() {
        let mut h = loaded_harness(vec![
            record(1, AnswerStatus::Active, "Q1"),
            record(2, AnswerStatus::Active, "Q2"),
            record(3, AnswerStatus::Active, "Q3"),
        ])
        .await;
        h.panel.open_reorder();

        h.panel.save_order(vec![3, 1, 2]).await;

        let ids: Vec<DbId> = h.panel.answers().iter().map(|a| a.id).collect();
        assert_eq!(ids, [3, 1, 2]);
        assert!(!h.panel.is_reorder_open());

        assert_eq!(
            h.api.order_calls.lock().unwrap().as_slice(),
            [vec![3, 1, 2]]
        );
        let notices = h.notifier.notices.lock().unwrap();
        assert_eq!(
            notices.as_slice(),
            [(
                NoticeLevel::Success,
                "Answer order updated successfully!".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn failed_order_save_keeps_list_and_panel() {
        let mut h = loaded_harness(vec![
            record(1, AnswerStatus::Active, "Q1"),
            record(2, AnswerStatus::Active, "Q2"),
        ])
        .await;
        h.panel.api = Arc::new(MockApi {
            fail_order: true,
            ..MockApi::default()
        });
        h.panel.open_reorder();

        h.panel.save_order(vec![2, 1]).await;

        let ids: Vec<DbId> = h.panel.answers().iter().map(|a| a.id).collect();
        assert_eq!(ids, [1, 2], "order unchanged on failure");
        assert!(h.panel.is_reorder_open(), "panel stays open");

        let notices = h.notifier.notices.lock().unwrap();
        assert_eq!(
            notices.as_slice(),
            [(
                NoticeLevel::Error,
                "Failed to update answer order.".to_string()
            )]
        );
    }

    // -----------------------------------------------------------------------
    // Edit navigation
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn edit_routes_to_external_flow() {
        let h = loaded_harness(vec![record(7, AnswerStatus::Active, "Q7")]).await;

        h.panel.edit_answer(7);

        assert_eq!(
            h.navigator.paths.lock().unwrap().as_slice(),
            ["/admin/manage-chatbot/edit-answer/7".to_string()]
        );
        assert_eq!(h.panel.answers().len(), 1, "no state mutation");
    }
}
