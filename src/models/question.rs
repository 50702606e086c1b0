use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An answer as it crosses the wire: quiz answers are either free text /
/// option text, or a boolean for true-false questions.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Bool(bool),
    Text(String),
}

/// Type-specific question payload. `options` only exists for the
/// multiple-choice variant, so "is this field present" checks never appear
/// downstream.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice {
        options: Vec<String>,
        correct_answer: String,
    },
    TrueFalse {
        correct_answer: bool,
    },
    FillInBlank {
        correct_answer: String,
    },
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "multiple-choice",
            QuestionKind::TrueFalse { .. } => "true-false",
            QuestionKind::FillInBlank { .. } => "fill-in-blank",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    #[serde(flatten)]
    pub kind: QuestionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<Answer>,
}

impl Question {
    /// Ids are assigned locally when questions enter the system; the
    /// generation endpoint never supplies them.
    pub fn new(kind: QuestionKind, prompt: String, explanation: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            prompt,
            kind,
            explanation,
            user_answer: None,
        }
    }

    /// Whether `answer` matches this question's correct answer. Fill-in-blank
    /// comparison is whitespace-trimmed and case-insensitive; a boolean given
    /// for a text question (or vice versa) is simply wrong.
    pub fn is_correct(&self, answer: &Answer) -> bool {
        match (&self.kind, answer) {
            (QuestionKind::MultipleChoice { correct_answer, .. }, Answer::Text(given)) => {
                given == correct_answer
            }
            (QuestionKind::TrueFalse { correct_answer }, Answer::Bool(given)) => {
                given == correct_answer
            }
            (QuestionKind::FillInBlank { correct_answer }, Answer::Text(given)) => {
                given.trim().to_lowercase() == correct_answer.trim().to_lowercase()
            }
            _ => false,
        }
    }

    /// Whether the currently recorded answer is correct.
    pub fn answered_correctly(&self) -> bool {
        self.user_answer
            .as_ref()
            .is_some_and(|answer| self.is_correct(answer))
    }

    pub fn clear_answer(&mut self) {
        self.user_answer = None;
    }

    pub fn correct_answer(&self) -> Answer {
        match &self.kind {
            QuestionKind::MultipleChoice { correct_answer, .. }
            | QuestionKind::FillInBlank { correct_answer } => {
                Answer::Text(correct_answer.clone())
            }
            QuestionKind::TrueFalse { correct_answer } => Answer::Bool(*correct_answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiple_choice() -> Question {
        Question::new(
            QuestionKind::MultipleChoice {
                options: vec!["Paris".to_string(), "Lyon".to_string()],
                correct_answer: "Paris".to_string(),
            },
            "Capital of France?".to_string(),
            None,
        )
    }

    #[test]
    fn multiple_choice_grades_by_option_text() {
        let question = multiple_choice();

        assert!(question.is_correct(&Answer::Text("Paris".to_string())));
        assert!(!question.is_correct(&Answer::Text("Lyon".to_string())));
        assert!(!question.is_correct(&Answer::Bool(true)));
    }

    #[test]
    fn true_false_grades_by_boolean() {
        let question = Question::new(
            QuestionKind::TrueFalse {
                correct_answer: false,
            },
            "The sun orbits the earth.".to_string(),
            None,
        );

        assert!(question.is_correct(&Answer::Bool(false)));
        assert!(!question.is_correct(&Answer::Bool(true)));
        assert!(!question.is_correct(&Answer::Text("false".to_string())));
    }

    #[test]
    fn fill_in_blank_grades_case_insensitive_and_trimmed() {
        let question = Question::new(
            QuestionKind::FillInBlank {
                correct_answer: "Photosynthesis".to_string(),
            },
            "Plants convert light via ____.".to_string(),
            None,
        );

        assert!(question.is_correct(&Answer::Text("photosynthesis".to_string())));
        assert!(question.is_correct(&Answer::Text("  PHOTOSYNTHESIS ".to_string())));
        assert!(!question.is_correct(&Answer::Text("respiration".to_string())));
    }

    #[test]
    fn answered_correctly_reflects_current_answer() {
        let mut question = multiple_choice();
        assert!(!question.answered_correctly());

        question.user_answer = Some(Answer::Text("Paris".to_string()));
        assert!(question.answered_correctly());

        question.user_answer = Some(Answer::Text("Lyon".to_string()));
        assert!(!question.answered_correctly());
    }

    #[test]
    fn question_serializes_with_kebab_case_type_tag() {
        let question = multiple_choice();
        let json = serde_json::to_value(&question).expect("question should serialize");

        assert_eq!(json["type"], "multiple-choice");
        assert!(json["options"].is_array());
        assert!(json.get("user_answer").is_none());
    }

    #[test]
    fn question_round_trip_preserves_answer_shape() {
        let mut question = Question::new(
            QuestionKind::TrueFalse {
                correct_answer: true,
            },
            "Water boils at 100C at sea level.".to_string(),
            Some("Standard atmospheric pressure.".to_string()),
        );
        question.user_answer = Some(Answer::Bool(true));

        let json = serde_json::to_string(&question).expect("question should serialize");
        let parsed: Question = serde_json::from_str(&json).expect("question should deserialize");

        assert_eq!(parsed, question);
        assert_eq!(parsed.user_answer, Some(Answer::Bool(true)));
    }

    #[test]
    fn generated_ids_do_not_collide() {
        let ids: std::collections::HashSet<String> =
            (0..100).map(|_| multiple_choice().id).collect();
        assert_eq!(ids.len(), 100);
    }
}
