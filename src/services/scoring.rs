use crate::models::Question;

/// Score as a whole percentage of `total`, rounded half-up (`f64::round`,
/// matching how the results screens have always displayed it). Zero total
/// yields zero rather than dividing by it.
pub fn calculate_percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

/// Read-only projection of the score from the question list itself. The
/// session store's incremental `score` is the single source of truth; this
/// exists for display-side sanity, never as a second writer.
pub fn correct_count(questions: &[Question]) -> u32 {
    questions.iter().filter(|q| q.answered_correctly()).count() as u32
}
