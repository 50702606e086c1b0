use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::errors::{AppError, AppResult};
use crate::models::{HistoryEntry, QuizSession, SessionState};
use crate::storage::{KvStore, QUIZ_HISTORY_KEY};

/// The stored list is capped; without a cap the history would grow without
/// bound, one entry per completed quiz.
pub const MAX_ENTRIES: usize = 100;

/// Append-only log of completed quiz attempts, newest first.
pub struct HistoryLog {
    store: Arc<dyn KvStore>,
}

impl HistoryLog {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// All stored entries, newest first. An unreadable payload is treated as
    /// an empty history.
    pub fn entries(&self) -> AppResult<Vec<HistoryEntry>> {
        let Some(raw) = self.store.get(QUIZ_HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(err) => {
                log::warn!("discarding unreadable quiz history: {}", err);
                Ok(Vec::new())
            }
        }
    }

    pub fn find(&self, id: &str) -> AppResult<HistoryEntry> {
        self.entries()?
            .into_iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| AppError::NotFound(format!("history entry with id '{}' not found", id)))
    }

    /// Record a completed session as a new entry at the head of the list.
    pub fn append(&self, session: &QuizSession) -> AppResult<HistoryEntry> {
        let entry = HistoryEntry::from_session(session);

        let mut entries = self.entries()?;
        entries.insert(0, entry.clone());
        entries.truncate(MAX_ENTRIES);

        let payload = serde_json::to_string(&entries)?;
        self.store.put(QUIZ_HISTORY_KEY, &payload)?;
        Ok(entry)
    }

    pub fn clear(&self) -> AppResult<()> {
        self.store.remove(QUIZ_HISTORY_KEY)
    }

    /// Build a fresh session from a past attempt: same questions in a new
    /// random order, answers cleared, score back to zero.
    pub fn replay(&self, entry: &HistoryEntry) -> QuizSession {
        let mut questions = entry.questions.clone();
        questions.shuffle(&mut thread_rng());
        for question in &mut questions {
            question.clear_answer();
        }

        QuizSession {
            questions,
            document_name: entry.document_name.clone(),
            document_content: entry.document_content.clone(),
            state: SessionState::Ready,
            score: 0,
            current_index: 0,
        }
    }
}
