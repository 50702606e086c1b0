use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        HistoryLog, HttpQuestionGenerator, IngestService, PlainTextExtractor, QuestionGenerator,
        SessionStore, TextExtractor,
    },
    storage::{FileKvStore, KvStore},
};

/// Shared application state. The session store is the single writer of the
/// active quiz, so every mutation goes through one lock; handlers hold it
/// only for the duration of a synchronous operation.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<SessionStore>>,
    pub history: Arc<HistoryLog>,
    pub ingest: Arc<IngestService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let store: Arc<dyn KvStore> = Arc::new(FileKvStore::new(&config.data_dir)?);
        let extractor: Arc<dyn TextExtractor> = Arc::new(PlainTextExtractor);
        let generator: Arc<dyn QuestionGenerator> = Arc::new(HttpQuestionGenerator::new(&config)?);

        Ok(Self::with_collaborators(config, store, extractor, generator))
    }

    /// Dependency-injected constructor; the test suites wire in in-memory
    /// storage and stub collaborators through this.
    pub fn with_collaborators(
        config: Config,
        store: Arc<dyn KvStore>,
        extractor: Arc<dyn TextExtractor>,
        generator: Arc<dyn QuestionGenerator>,
    ) -> Self {
        let session = Arc::new(RwLock::new(SessionStore::new(store.clone())));
        let history = Arc::new(HistoryLog::new(store));
        let ingest = Arc::new(IngestService::new(extractor, generator));

        Self {
            session,
            history,
            ingest,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
