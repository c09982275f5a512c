//! Student hand-out format.
//!
//! Renders questions the way they are handed to students:
//!
//! ```text
//! 1. What is a slice?
//! a) A view into a sequence
//! b) An owned buffer
//!
//! 2. ...
//! ```
//!
//! The no-variants flavor keeps only the numbered prompts, for answer-sheet
//! style hand-outs. Correctness markers are never rendered here.

use crate::model::{variant_letter, QuestionSet};

/// Render the student format.
///
/// `include_variants` toggles the lettered option lines.
#[must_use]
pub fn render(set: &QuestionSet, include_variants: bool) -> String {
    let mut out = Vec::new();

    for question in &set.questions {
        out.push(format!("{}. {}", question.id, question.text));

        if include_variants {
            for variant in &question.variants {
                out.push(format!("{}) {}", variant_letter(variant.id), variant.text));
            }
        }

        out.push(String::new());
    }

    out.join("\n")
}
