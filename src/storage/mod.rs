pub mod file;
pub mod memory;

pub use file::FileKvStore;
pub use memory::InMemoryKvStore;

use crate::errors::AppResult;

/// Key under which the active session snapshot is stored.
pub const SAVED_QUIZ_KEY: &str = "savedQuiz";

/// Key under which the completed-quiz history list is stored.
pub const QUIZ_HISTORY_KEY: &str = "quizHistory";

/// Small local key-value store holding JSON strings. Writes are synchronous
/// and whole-value; the session snapshot and the history list are each a
/// single small document, so there is no batching or partial update.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}
