use serde::Serialize;

use crate::models::{Answer, Question, QuestionKind, QuizSession, SessionState};
use crate::services::scoring::calculate_percentage;

/// One question as the browser renders it mid-quiz: the prompt, the choices
/// for its type, and what the user picked so far. The correct answer stays
/// server-side until the results view.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub question_type: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<Answer>,
    pub answered: bool,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        let options = match &question.kind {
            QuestionKind::MultipleChoice { options, .. } => Some(options.clone()),
            QuestionKind::TrueFalse { .. } | QuestionKind::FillInBlank { .. } => None,
        };

        QuestionView {
            id: question.id.clone(),
            question_type: question.kind.label().to_string(),
            prompt: question.prompt.clone(),
            options,
            user_answer: question.user_answer.clone(),
            answered: question.user_answer.is_some(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub state: SessionState,
    pub document_name: String,
    pub score: u32,
    pub current_index: usize,
    pub total_questions: usize,
    pub questions: Vec<QuestionView>,
}

impl From<&QuizSession> for SessionView {
    fn from(session: &QuizSession) -> Self {
        SessionView {
            state: session.state,
            document_name: session.document_name.clone(),
            score: session.score,
            current_index: session.current_index,
            total_questions: session.questions.len(),
            questions: session.questions.iter().map(QuestionView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RestoreResponse {
    pub restored: bool,
}

/// Per-question review line on the results screen, correct answer included.
#[derive(Debug, Clone, Serialize)]
pub struct ResultQuestionView {
    pub id: String,
    pub question_type: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<Answer>,
    pub correct_answer: Answer,
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl From<&Question> for ResultQuestionView {
    fn from(question: &Question) -> Self {
        ResultQuestionView {
            id: question.id.clone(),
            question_type: question.kind.label().to_string(),
            prompt: question.prompt.clone(),
            user_answer: question.user_answer.clone(),
            correct_answer: question.correct_answer(),
            correct: question.answered_correctly(),
            explanation: question.explanation.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeBreakdown {
    pub question_type: String,
    pub correct: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub document_name: String,
    pub score: u32,
    pub total_questions: usize,
    pub percentage: u32,
    pub breakdown: Vec<TypeBreakdown>,
    pub questions: Vec<ResultQuestionView>,
}

const BREAKDOWN_ORDER: [&str; 3] = ["multiple-choice", "true-false", "fill-in-blank"];

impl From<&QuizSession> for ResultsView {
    fn from(session: &QuizSession) -> Self {
        let breakdown = BREAKDOWN_ORDER
            .iter()
            .filter_map(|label| {
                let of_type: Vec<&Question> = session
                    .questions
                    .iter()
                    .filter(|q| q.kind.label() == *label)
                    .collect();
                if of_type.is_empty() {
                    return None;
                }
                Some(TypeBreakdown {
                    question_type: label.to_string(),
                    correct: of_type.iter().filter(|q| q.answered_correctly()).count() as u32,
                    total: of_type.len() as u32,
                })
            })
            .collect();

        ResultsView {
            document_name: session.document_name.clone(),
            score: session.score,
            total_questions: session.questions.len(),
            percentage: calculate_percentage(session.score, session.questions.len() as u32),
            breakdown,
            questions: session.questions.iter().map(ResultQuestionView::from).collect(),
        }
    }
}
