#![allow(dead_code)]

use async_trait::async_trait;

use docquiz_server::errors::{AppError, AppResult};
use docquiz_server::models::{Question, QuestionKind, UploadedFile};
use docquiz_server::services::{QuestionGenerator, TextExtractor};

/// Document text comfortably above the ingest minimum (100+ characters).
pub fn document_content() -> String {
    "France is a country in western Europe. Its capital city is Paris, which \
     is also its largest city by population."
        .to_string()
}

pub fn multiple_choice(prompt: &str, options: &[&str], correct: &str) -> Question {
    Question::new(
        QuestionKind::MultipleChoice {
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct.to_string(),
        },
        prompt.to_string(),
        None,
    )
}

pub fn true_false(prompt: &str, correct: bool) -> Question {
    Question::new(
        QuestionKind::TrueFalse {
            correct_answer: correct,
        },
        prompt.to_string(),
        None,
    )
}

/// Two multiple-choice plus one true-false question, answerable with
/// "Paris", `true` and "Osmosis".
pub fn three_question_quiz() -> Vec<Question> {
    vec![
        multiple_choice(
            "What is the capital of France?",
            &["Paris", "Lyon", "Marseille"],
            "Paris",
        ),
        true_false("Paris is the largest city in France.", true),
        multiple_choice(
            "Which process moves water across a membrane?",
            &["Osmosis", "Diffusion", "Respiration"],
            "Osmosis",
        ),
    ]
}

/// Extractor stub returning a fixed text for any file.
pub struct StaticExtractor(pub String);

#[async_trait]
impl TextExtractor for StaticExtractor {
    async fn extract(&self, _file: &UploadedFile) -> AppResult<String> {
        Ok(self.0.clone())
    }
}

/// Extractor stub that always fails.
pub struct FailingExtractor;

#[async_trait]
impl TextExtractor for FailingExtractor {
    async fn extract(&self, file: &UploadedFile) -> AppResult<String> {
        Err(AppError::Extraction(format!("'{}' is unreadable", file.name)))
    }
}

/// Generator stub returning a fixed question list for any content.
pub struct StaticGenerator(pub Vec<Question>);

#[async_trait]
impl QuestionGenerator for StaticGenerator {
    async fn generate(&self, _content: &str) -> AppResult<Vec<Question>> {
        Ok(self.0.clone())
    }
}

/// Generator stub that always fails with the given message.
pub struct FailingGenerator(pub String);

#[async_trait]
impl QuestionGenerator for FailingGenerator {
    async fn generate(&self, _content: &str) -> AppResult<Vec<Question>> {
        Err(AppError::Generation(self.0.clone()))
    }
}
