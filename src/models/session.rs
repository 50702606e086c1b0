use serde::{Deserialize, Serialize};

use crate::models::question::Question;

/// Lifecycle of the active quiz. `uploading`/`processing`/`generating` are
/// only ever observed while the ingest flow runs; a failed ingest always
/// lands back on `idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionState {
    Idle,
    Uploading,
    Processing,
    Generating,
    Ready,
    InProgress,
    Completed,
}

/// The one active quiz attempt. Owned exclusively by the session store;
/// everything else sees read-only views.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizSession {
    pub questions: Vec<Question>,
    pub document_name: String,
    pub document_content: String,
    pub state: SessionState,
    pub score: u32,
    pub current_index: usize,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self {
            questions: Vec::new(),
            document_name: String::new(),
            document_content: String::new(),
            state: SessionState::Idle,
            score: 0,
            current_index: 0,
        }
    }
}

impl QuizSession {
    pub fn clear_answers(&mut self) {
        for question in &mut self.questions {
            question.clear_answer();
        }
    }
}
