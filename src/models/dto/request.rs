use serde::Deserialize;

use crate::models::Answer;

/// Relays one user choice into the session store's answer recording.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordAnswerRequest {
    pub question_index: usize,
    pub answer: Answer,
}
