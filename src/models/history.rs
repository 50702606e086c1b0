use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};

use crate::models::question::Question;
use crate::models::session::QuizSession;

/// Immutable record of one completed quiz attempt. The stored list only
/// supports whole-list clearing, never per-entry deletion.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct HistoryEntry {
    /// Millisecond timestamp at creation; practically unique, not crypto.
    pub id: String,
    /// Display date shown in the history list.
    pub date: String,
    pub document_name: String,
    pub document_content: String,
    pub score: u32,
    pub total_questions: usize,
    /// Questions as answered, so an attempt can be reviewed or replayed.
    pub questions: Vec<Question>,
}

impl HistoryEntry {
    pub fn from_session(session: &QuizSession) -> Self {
        Self {
            id: Utc::now().timestamp_millis().to_string(),
            date: Local::now().format("%Y-%m-%d").to_string(),
            document_name: session.document_name.clone(),
            document_content: session.document_content.clone(),
            score: session.score,
            total_questions: session.questions.len(),
            questions: session.questions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{Answer, QuestionKind};
    use crate::models::session::SessionState;

    #[test]
    fn from_session_copies_score_and_answers() {
        let mut question = Question::new(
            QuestionKind::TrueFalse {
                correct_answer: true,
            },
            "Rust has a garbage collector.".to_string(),
            None,
        );
        question.user_answer = Some(Answer::Bool(false));

        let session = QuizSession {
            questions: vec![question.clone()],
            document_name: "notes.txt".to_string(),
            document_content: "some document text".to_string(),
            state: SessionState::Completed,
            score: 1,
            current_index: 0,
        };

        let entry = HistoryEntry::from_session(&session);

        assert_eq!(entry.document_name, "notes.txt");
        assert_eq!(entry.score, 1);
        assert_eq!(entry.total_questions, 1);
        assert_eq!(entry.questions[0].user_answer, Some(Answer::Bool(false)));
        assert!(!entry.id.is_empty());
        assert!(!entry.date.is_empty());
    }

    #[test]
    fn entry_round_trip_serialization() {
        let session = QuizSession {
            questions: vec![Question::new(
                QuestionKind::FillInBlank {
                    correct_answer: "ownership".to_string(),
                },
                "Rust's memory model is based on ____.".to_string(),
                None,
            )],
            document_name: "rust.txt".to_string(),
            document_content: "a long enough document".to_string(),
            state: SessionState::Completed,
            score: 0,
            current_index: 0,
        };

        let entry = HistoryEntry::from_session(&session);
        let json = serde_json::to_string(&entry).expect("entry should serialize");
        let parsed: HistoryEntry = serde_json::from_str(&json).expect("entry should deserialize");

        assert_eq!(parsed, entry);
    }
}
