//! Exam-program (HEMIS) import format.
//!
//! The university exam system imports quizzes as blocks separated by
//! `====`, with `#` prefixed to the correct variant and `++++` between
//! questions:
//!
//! ```text
//! What is a slice?
//! ====
//! #A view into a sequence
//! ====
//! An owned buffer
//! ====
//! ++++
//! Next question...
//! ```

use crate::model::QuestionSet;

/// Render the exam-program import format.
#[must_use]
pub fn render(set: &QuestionSet) -> String {
    let mut out = Vec::new();
    let questions = &set.questions;

    for (i, question) in questions.iter().enumerate() {
        out.push(question.text.clone());
        out.push("====".to_string());

        for variant in &question.variants {
            let marker = if question.correct == Some(variant.id) {
                "#"
            } else {
                ""
            };
            out.push(format!("{marker}{}", variant.text));
            out.push("====".to_string());
        }

        if i < questions.len() - 1 {
            out.push("++++".to_string());
        }
    }

    out.join("\n")
}
