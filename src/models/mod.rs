pub mod document;
pub mod dto;
pub mod history;
pub mod question;
pub mod session;

pub use document::UploadedFile;
pub use history::HistoryEntry;
pub use question::{Answer, Question, QuestionKind};
pub use session::{QuizSession, SessionState};
