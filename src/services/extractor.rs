use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, AppResult};
use crate::models::UploadedFile;

pub const MIME_TEXT_PLAIN: &str = "text/plain";
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t]{2,}").expect("WHITESPACE_RUNS is a valid regex pattern"));

/// Turns an uploaded file's bytes into plain text.
///
/// Implementations handling paged formats (PDF) concatenate per-page text
/// with newline separators in page order. Empty extraction output is an
/// extraction error, never an empty success.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, file: &UploadedFile) -> AppResult<String>;
}

/// Built-in extractor for plain-text uploads. Binary document formats are
/// the job of an external extraction service; without one configured they
/// fail with an extraction error and the ingest flow rolls back cleanly.
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, file: &UploadedFile) -> AppResult<String> {
        match file.mime_type.as_str() {
            MIME_TEXT_PLAIN => {
                let text = String::from_utf8(file.bytes.clone()).map_err(|_| {
                    AppError::Extraction(format!("'{}' is not valid UTF-8 text", file.name))
                })?;
                if text.trim().is_empty() {
                    return Err(AppError::Extraction(format!(
                        "'{}' contains no extractable text",
                        file.name
                    )));
                }
                Ok(normalize_whitespace(&text))
            }
            MIME_PDF | MIME_DOCX => Err(AppError::Extraction(format!(
                "no extractor is configured for '{}' documents",
                file.mime_type
            ))),
            other => Err(AppError::Extraction(format!(
                "unsupported file type: {}",
                other
            ))),
        }
    }
}

/// Collapse runs of spaces and tabs; newlines are kept so page and
/// paragraph boundaries survive into the generation prompt.
fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUNS.replace_all(text, " ").into_owned()
}
