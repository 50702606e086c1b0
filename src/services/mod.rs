pub mod extractor;
pub mod generator;
pub mod history_log;
pub mod ingest_service;
pub mod scoring;
pub mod session_store;

pub use extractor::{PlainTextExtractor, TextExtractor};
pub use generator::{HttpQuestionGenerator, QuestionGenerator};
pub use history_log::HistoryLog;
pub use ingest_service::IngestService;
pub use session_store::SessionStore;
