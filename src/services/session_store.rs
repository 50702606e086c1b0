use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::models::{Answer, Question, QuizSession, SessionState};
use crate::storage::{KvStore, SAVED_QUIZ_KEY};

/// Owns the active `QuizSession` and is its single writer. Every mutation
/// snapshots the session to the key-value store, guarded so partial sessions
/// (no questions yet, or no document) are never persisted.
///
/// All operations are synchronous; callers running on a multi-threaded
/// runtime serialize access behind one lock (see `AppState`), since
/// `record_answer` is a read-modify-write of `score`.
pub struct SessionStore {
    session: QuizSession,
    store: Arc<dyn KvStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            session: QuizSession::default(),
            store,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn set_questions(&mut self, questions: Vec<Question>) {
        self.session.questions = questions;
        self.persist();
    }

    pub fn set_document_name(&mut self, name: String) {
        self.session.document_name = name;
        self.persist();
    }

    pub fn set_document_content(&mut self, content: String) {
        self.session.document_content = content;
        self.persist();
    }

    pub fn set_state(&mut self, state: SessionState) {
        self.session.state = state;
        self.persist();
    }

    /// Score writes are clamped at zero; the session never shows a negative
    /// score no matter what sequence of adjustments produced it.
    pub fn set_score(&mut self, value: i64) {
        self.session.score = value.max(0) as u32;
        self.persist();
    }

    /// Record (or overwrite) the answer for the question at `index`.
    ///
    /// Re-answering first reverses the previous answer's score contribution,
    /// so after any call sequence the question contributes exactly 1 to
    /// `score` when its current answer is correct and 0 otherwise.
    pub fn record_answer(&mut self, index: usize, answer: Answer) -> AppResult<()> {
        let total = self.session.questions.len();
        let question = self.session.questions.get_mut(index).ok_or_else(|| {
            AppError::Validation(format!(
                "question index {} out of range (quiz has {} questions)",
                index, total
            ))
        })?;

        let was_correct = match question.user_answer.take() {
            Some(previous) => question.is_correct(&previous),
            None => false,
        };
        let now_correct = question.is_correct(&answer);
        question.user_answer = Some(answer);

        if was_correct {
            self.session.score = self.session.score.saturating_sub(1);
        }
        if now_correct {
            self.session.score += 1;
        }

        self.persist();
        Ok(())
    }

    /// Move to the next question; on the last question, completes the quiz
    /// instead (index stays put).
    pub fn advance(&mut self) {
        if self.session.questions.is_empty() {
            return;
        }
        if self.session.current_index < self.session.questions.len() - 1 {
            self.session.current_index += 1;
        } else {
            self.session.state = SessionState::Completed;
        }
        self.persist();
    }

    pub fn retreat(&mut self) {
        if self.session.current_index == 0 {
            return;
        }
        self.session.current_index -= 1;
        self.persist();
    }

    /// Restore the persisted snapshot, if any, as a fresh attempt: answers
    /// cleared, score zeroed, back at the first question. Returns whether a
    /// snapshot existed. An unreadable snapshot counts as absent.
    pub fn load_saved(&mut self) -> AppResult<bool> {
        let Some(raw) = self.store.get(SAVED_QUIZ_KEY)? else {
            return Ok(false);
        };

        let mut saved: QuizSession = match serde_json::from_str(&raw) {
            Ok(saved) => saved,
            Err(err) => {
                log::warn!("discarding unreadable session snapshot: {}", err);
                return Ok(false);
            }
        };

        saved.clear_answers();
        saved.score = 0;
        saved.current_index = 0;
        saved.state = SessionState::Ready;
        self.session = saved;
        Ok(true)
    }

    /// Restart the current quiz from scratch and drop the snapshot.
    pub fn reset(&mut self) {
        self.session.clear_answers();
        self.session.score = 0;
        self.session.current_index = 0;
        self.session.state = SessionState::Ready;
        if let Err(err) = self.store.remove(SAVED_QUIZ_KEY) {
            log::warn!("failed to remove session snapshot: {}", err);
        }
    }

    /// Replace the whole session, e.g. when adopting a replayed history
    /// entry.
    pub fn adopt(&mut self, session: QuizSession) {
        self.session = session;
        self.persist();
    }

    /// Clear the in-memory session ahead of an ingest run. The previous
    /// snapshot (if any) is left in place; the persistence guard keeps the
    /// partial session from overwriting it.
    pub fn begin_ingest(&mut self) {
        self.session = QuizSession {
            state: SessionState::Uploading,
            ..QuizSession::default()
        };
    }

    /// Failed ingest: back to a stable empty `idle` session. Nothing partial
    /// was persisted, so there is nothing to undo in the store.
    pub fn rollback_ingest(&mut self) {
        self.session = QuizSession::default();
    }

    fn persist(&self) {
        let session = &self.session;
        if session.questions.is_empty()
            || session.document_name.is_empty()
            || session.document_content.is_empty()
        {
            return;
        }

        let snapshot = match serde_json::to_string(session) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::warn!("failed to serialize session snapshot: {}", err);
                return;
            }
        };

        // Loss of persistence must not block the in-memory session.
        if let Err(err) = self.store.put(SAVED_QUIZ_KEY, &snapshot) {
            log::warn!("failed to persist session snapshot: {}", err);
        }
    }
}
