use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Question, QuestionKind};

/// Produces quiz questions from extracted document text. The remote model
/// call lives behind this seam; everything in-process only sees `Question`s.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, content: &str) -> AppResult<Vec<Question>>;
}

/// One question as the generation endpoint emits it: camelCase fields and no
/// id. Ids are assigned locally on conversion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    #[serde(rename = "type")]
    pub question_type: String,
    pub question: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    pub correct_answer: Value,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl TryFrom<GeneratedQuestion> for Question {
    type Error = AppError;

    fn try_from(raw: GeneratedQuestion) -> AppResult<Self> {
        let kind = match raw.question_type.as_str() {
            "multiple-choice" => {
                let options = raw
                    .options
                    .filter(|options| !options.is_empty())
                    .ok_or_else(|| {
                        AppError::Generation(
                            "multiple-choice question is missing its options".to_string(),
                        )
                    })?;
                let correct_answer = text_answer(&raw.correct_answer).ok_or_else(|| {
                    AppError::Generation(
                        "multiple-choice correctAnswer must be a string".to_string(),
                    )
                })?;
                QuestionKind::MultipleChoice {
                    options,
                    correct_answer,
                }
            }
            "true-false" => {
                let correct_answer = raw.correct_answer.as_bool().ok_or_else(|| {
                    AppError::Generation("true-false correctAnswer must be a boolean".to_string())
                })?;
                QuestionKind::TrueFalse { correct_answer }
            }
            "fill-in-blank" => {
                let correct_answer = text_answer(&raw.correct_answer).ok_or_else(|| {
                    AppError::Generation(
                        "fill-in-blank correctAnswer must be a string".to_string(),
                    )
                })?;
                QuestionKind::FillInBlank { correct_answer }
            }
            other => {
                return Err(AppError::Generation(format!(
                    "unknown question type '{}'",
                    other
                )))
            }
        };

        Ok(Question::new(kind, raw.question, raw.explanation))
    }
}

fn text_answer(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    questions: Option<Value>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    quiz: Option<Value>,
}

/// Parse a generation response body into questions.
///
/// The canonical contract is `{"questions": [...]}`. An `{"error": "..."}`
/// body carries the remote failure message. The legacy `{"quiz": "..."}`
/// shape (one opaque string) is deprecated and rejected outright: there is
/// no reliable way to grade a quiz we cannot parse, and no partial quiz may
/// ever be started from it.
pub(crate) fn parse_generation_response(body: &str) -> AppResult<Vec<Question>> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|err| AppError::Generation(format!("endpoint returned malformed JSON: {}", err)))?;

    if let Some(message) = response.error {
        return Err(AppError::Generation(message));
    }
    if response.quiz.is_some() {
        return Err(AppError::Generation(
            "endpoint answered with the deprecated 'quiz' response shape".to_string(),
        ));
    }

    let Some(questions) = response.questions else {
        return Err(AppError::Generation(
            "response is missing the 'questions' field".to_string(),
        ));
    };
    let Value::Array(items) = questions else {
        return Err(AppError::Generation(
            "the 'questions' field is not a list".to_string(),
        ));
    };

    items
        .into_iter()
        .map(|item| {
            let raw: GeneratedQuestion = serde_json::from_value(item)
                .map_err(|err| AppError::Generation(format!("malformed question object: {}", err)))?;
            Question::try_from(raw)
        })
        .collect()
}

/// `QuestionGenerator` speaking the remote endpoint's JSON contract:
/// `POST {url}` with `{"content": "..."}`, optional bearer token, explicit
/// timeout. No retries; a failed call is reported and the user re-uploads.
pub struct HttpQuestionGenerator {
    client: reqwest::Client,
    url: String,
    api_key: Option<SecretString>,
}

impl HttpQuestionGenerator {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.generator_timeout_secs))
            .build()
            .map_err(|err| AppError::Internal(format!("failed to build HTTP client: {}", err)))?;

        Ok(Self {
            client,
            url: config.generator_url.clone(),
            api_key: config.generator_api_key.clone(),
        })
    }
}

#[async_trait]
impl QuestionGenerator for HttpQuestionGenerator {
    async fn generate(&self, content: &str) -> AppResult<Vec<Question>> {
        let mut request = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "content": content }));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                AppError::Generation("question generation timed out".to_string())
            } else {
                AppError::Generation(format!("question generation request failed: {}", err))
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            AppError::Generation(format!("failed to read generation response: {}", err))
        })?;

        if !status.is_success() {
            // Error bodies still follow the contract when the endpoint is
            // reachable; fall back to the bare status otherwise.
            if let Ok(GenerateResponse {
                error: Some(message),
                ..
            }) = serde_json::from_str::<GenerateResponse>(&body)
            {
                return Err(AppError::Generation(message));
            }
            return Err(AppError::Generation(format!(
                "generation endpoint returned {}",
                status
            )));
        }

        parse_generation_response(&body)
    }
}
