#[cfg(test)]
pub mod fixtures {
    use crate::models::{Question, QuestionKind};

    /// Document text comfortably above the ingest minimum.
    pub fn document_content() -> String {
        "France is a country in western Europe. Its capital city is Paris, \
         which is also its largest city by population."
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

    pub fn fill_in_blank(prompt: &str, correct: &str) -> Question {
        Question::new(
            QuestionKind::FillInBlank {
                correct_answer: correct.to_string(),
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
}
