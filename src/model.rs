//! Canonical question model.
//!
//! Every component of the pipeline reads and writes this structure: the
//! parsers build it, the duplicate analyzer inspects it, and the output
//! formatters render it. A [`QuestionSet`] is constructed once per input
//! document and never mutated afterwards.
//!
//! The serde representation is the canonical interchange schema:
//!
//! ```json
//! {
//!   "questions": [
//!     {
//!       "id": 1,
//!       "text": "What is ownership?",
//!       "variants": [
//!         { "id": 1, "text": "A type system concept" },
//!         { "id": 2, "text": "A garbage collector" }
//!       ],
//!       "correct": 1
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// An ordered collection of questions parsed from one input document.
///
/// Order is insertion order from the source and drives numbering in all
/// rendered outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Questions in source order.
    pub questions: Vec<Question>,
}

impl QuestionSet {
    /// Create a question set from already-built questions.
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Number of questions in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the set contains no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A single quiz question with its answer variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Positive identifier, unique within the set. Taken from the source
    /// numbering when present, assigned sequentially otherwise.
    pub id: u32,
    /// The prompt text.
    pub text: String,
    /// Answer variants in the order they appeared in the source.
    pub variants: Vec<Variant>,
    /// Id of the variant marked correct, or `None` when the source carried
    /// no correctness marker. `None` is a valid state, not an error.
    pub correct: Option<u32>,
}

impl Question {
    /// Create a question with no variants and no correct answer yet.
    #[must_use]
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            variants: Vec::new(),
            correct: None,
        }
    }

    /// Look up a variant by id.
    #[must_use]
    pub fn variant(&self, id: u32) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }

    /// The variant marked correct, if any.
    #[must_use]
    pub fn correct_variant(&self) -> Option<&Variant> {
        self.correct.and_then(|id| self.variant(id))
    }
}

/// One candidate answer to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Letter-derived ordinal: `a` maps to 1, `b` to 2, and so on,
    /// regardless of how the source spelled the marker (`a)` or `a.`).
    pub id: u32,
    /// The answer text.
    pub text: String,
}

impl Variant {
    /// Create a variant.
    #[must_use]
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Map a variant id back to its source letter (1 maps to 'a').
#[must_use]
pub fn variant_letter(id: u32) -> char {
    char::from_u32('a' as u32 + id.saturating_sub(1)).unwrap_or('?')
}

/// Map a (case-folded) variant letter to its ordinal id.
///
/// Returns `None` for characters outside `a..=z`.
#[must_use]
pub fn letter_to_id(letter: char) -> Option<u32> {
    let lower = letter.to_ascii_lowercase();
    lower
        .is_ascii_lowercase()
        .then(|| lower as u32 - 'a' as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_letter_roundtrip() {
        for (id, letter) in [(1, 'a'), (2, 'b'), (26, 'z')] {
            assert_eq!(variant_letter(id), letter);
            assert_eq!(letter_to_id(letter), Some(id));
        }
    }

    #[test]
    fn test_letter_to_id_uppercase_folds() {
        assert_eq!(letter_to_id('A'), Some(1));
        assert_eq!(letter_to_id('D'), Some(4));
    }

    #[test]
    fn test_letter_to_id_rejects_non_letters() {
        assert_eq!(letter_to_id('1'), None);
        assert_eq!(letter_to_id('*'), None);
    }

    #[test]
    fn test_correct_variant_lookup() {
        let mut q = Question::new(1, "q");
        q.variants.push(Variant::new(1, "first"));
        q.variants.push(Variant::new(2, "second"));
        q.correct = Some(2);
        assert_eq!(q.correct_variant().map(|v| v.text.as_str()), Some("second"));
    }

    #[test]
    fn test_correct_variant_none_when_unmarked() {
        let mut q = Question::new(1, "q");
        q.variants.push(Variant::new(1, "only"));
        assert!(q.correct_variant().is_none());
    }

    #[test]
    fn test_schema_field_names() {
        let set = QuestionSet::new(vec![Question {
            id: 3,
            text: "t".into(),
            variants: vec![Variant::new(1, "v")],
            correct: None,
        }]);
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["questions"][0]["id"], 3);
        assert_eq!(json["questions"][0]["correct"], serde_json::Value::Null);
        assert_eq!(json["questions"][0]["variants"][0]["text"], "v");
    }
}
