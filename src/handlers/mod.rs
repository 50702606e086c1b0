pub mod history_handler;
pub mod session_handler;
pub mod upload_handler;

pub use history_handler::{clear_history, list_history, replay_quiz};
pub use session_handler::{
    advance_question, get_results, get_session, health_check, record_answer, reset_session,
    restore_session, retreat_question,
};
pub use upload_handler::upload_document;
