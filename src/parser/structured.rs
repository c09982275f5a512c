//! Structured (JSON) question loader.
//!
//! Deserializes the canonical schema directly. Unlike the free-text parser
//! this loader repairs nothing: a missing field, a wrong type, or a broken
//! model invariant fails the whole load with an error naming the offender.

use crate::model::QuestionSet;

use super::ParseError;

/// Load a question set from canonical JSON text.
///
/// Fails with [`ParseError::MalformedStructured`] on schema violations
/// (serde_json's message carries the field path) and with
/// [`ParseError::InvalidModel`] when the document deserializes but breaks
/// a referential invariant.
pub fn load_str(text: &str) -> Result<QuestionSet, ParseError> {
    let set: QuestionSet =
        serde_json::from_str(text).map_err(|e| ParseError::MalformedStructured {
            message: e.to_string(),
        })?;
    validate(&set)?;
    Ok(set)
}

/// Check the model invariants the schema alone cannot express.
fn validate(set: &QuestionSet) -> Result<(), ParseError> {
    for question in &set.questions {
        if question.id == 0 {
            return Err(ParseError::InvalidModel {
                question_id: question.id,
                message: "field `id` must be positive".to_string(),
            });
        }
        if question.text.trim().is_empty() {
            return Err(ParseError::InvalidModel {
                question_id: question.id,
                message: "field `text` must be non-empty".to_string(),
            });
        }
        for (i, variant) in question.variants.iter().enumerate() {
            if variant.text.trim().is_empty() {
                return Err(ParseError::InvalidModel {
                    question_id: question.id,
                    message: format!("field `variants[{i}].text` must be non-empty"),
                });
            }
            if question.variants[..i].iter().any(|v| v.id == variant.id) {
                return Err(ParseError::InvalidModel {
                    question_id: question.id,
                    message: format!("field `variants[{i}].id` duplicates id {}", variant.id),
                });
            }
        }
        if let Some(correct) = question.correct {
            if question.variant(correct).is_none() {
                return Err(ParseError::InvalidModel {
                    question_id: question.id,
                    message: format!("field `correct` references missing variant id {correct}"),
                });
            }
        }
    }
    Ok(())
}
