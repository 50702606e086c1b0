use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::{SessionState, UploadedFile};
use crate::services::extractor::{TextExtractor, MIME_DOCX, MIME_PDF, MIME_TEXT_PLAIN};
use crate::services::generator::QuestionGenerator;
use crate::services::session_store::SessionStore;

pub const ALLOWED_MIME_TYPES: [&str; 3] = [MIME_TEXT_PLAIN, MIME_PDF, MIME_DOCX];

/// Extracted content below this many characters (post-trim) cannot produce
/// a meaningful quiz.
pub const MIN_CONTENT_CHARS: usize = 50;

/// Pipeline from a raw uploaded file to a ready-to-answer session:
/// validation, extraction, generation, handoff. Extraction and generation
/// run sequentially; any failure rolls the session back to `idle` with no
/// document fields left behind.
pub struct IngestService {
    extractor: Arc<dyn TextExtractor>,
    generator: Arc<dyn QuestionGenerator>,
}

impl IngestService {
    pub fn new(extractor: Arc<dyn TextExtractor>, generator: Arc<dyn QuestionGenerator>) -> Self {
        Self {
            extractor,
            generator,
        }
    }

    pub async fn ingest(
        &self,
        session: &RwLock<SessionStore>,
        file: UploadedFile,
    ) -> AppResult<()> {
        // Reject before touching the session, so a bad pick does not clobber
        // whatever quiz is currently loaded.
        file.validate()?;
        if !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) {
            return Err(AppError::Validation(
                "please upload a .txt, .pdf, or .docx file".to_string(),
            ));
        }

        match self.run(session, &file).await {
            Ok(()) => Ok(()),
            Err(err) => {
                log::warn!("ingest of '{}' failed: {}", file.name, err);
                session.write().await.rollback_ingest();
                Err(err)
            }
        }
    }

    async fn run(&self, session: &RwLock<SessionStore>, file: &UploadedFile) -> AppResult<()> {
        session.write().await.begin_ingest();

        let content = self.extractor.extract(file).await?;
        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(AppError::Validation(
                "the document appears to be empty; upload a document with content".to_string(),
            ));
        }
        if content.chars().count() < MIN_CONTENT_CHARS {
            return Err(AppError::Validation(
                "the document contains insufficient content; upload a document with more text"
                    .to_string(),
            ));
        }

        {
            let mut store = session.write().await;
            store.set_document_name(file.name.clone());
            store.set_document_content(content.clone());
            store.set_state(SessionState::Processing);
        }

        // The lock is never held across the remote call; the `generating`
        // state stays observable while it runs.
        session.write().await.set_state(SessionState::Generating);
        let questions = self.generator.generate(&content).await?;
        if questions.is_empty() {
            return Err(AppError::Generation(
                "the generation endpoint returned no questions".to_string(),
            ));
        }

        let mut store = session.write().await;
        store.set_questions(questions);
        store.set_state(SessionState::Ready);
        Ok(())
    }
}
