//! Free-text quiz parser.
//!
//! # Overview
//!
//! Turns informally typed quiz text into the canonical model in a single
//! line-oriented pass. Each non-blank line is classified as a question
//! start, an answer variant, or unrecognized, and grouped statefully:
//!
//! ```text
//! 1. What is borrowing?
//! a) Taking ownership
//! b) *A temporary reference
//! c) A copy
//! ```
//!
//! Documents without any `N.`-style numbering are accepted too: every
//! non-variant line then opens a new question and ids are assigned
//! sequentially from 1.
//!
//! Malformed lines never abort a parse; at worst they are dropped. The
//! result is always a schema-valid [`QuestionSet`].

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{letter_to_id, Question, QuestionSet, Variant};

/// `12. question text` - explicit number, dot separator, prompt.
static QUESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.*)$").expect("question pattern is valid"));

/// `b) *text` / `B. text` - letter, `)` or `.` separator, optional
/// correctness marker glued to the front of the text.
static VARIANT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z])[).]\s*(\*?)(.+)$").expect("variant pattern is valid"));

/// How one input line was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Opens a question with an explicit source number.
    QuestionStart {
        /// The parsed source number
        number: u32,
        /// Prompt text after the separator
        text: String,
    },
    /// An answer variant line.
    Variant {
        /// Letter-derived ordinal (`a` is 1), case-folded
        id: u32,
        /// Whether the correctness marker was present
        correct: bool,
        /// Variant text with the marker stripped
        text: String,
    },
    /// Matched neither pattern.
    Unrecognized,
}

/// Classify a single trimmed line.
///
/// A question-start match requires an explicit leading number; whether an
/// unrecognized line becomes a question boundary is decided by the grouping
/// pass, not here.
#[must_use]
pub fn classify_line(line: &str) -> LineKind {
    if let Some(caps) = QUESTION_RE.captures(line) {
        // The number always fits u32 for realistic inputs; absurd ones
        // (hundreds of digits) fall through to Unrecognized.
        if let Ok(number) = caps[1].parse::<u32>() {
            return LineKind::QuestionStart {
                number,
                text: caps[2].trim().to_string(),
            };
        }
        return LineKind::Unrecognized;
    }

    if let Some(caps) = VARIANT_RE.captures(line) {
        let letter = caps[1].chars().next().unwrap_or('a');
        if let Some(id) = letter_to_id(letter) {
            return LineKind::Variant {
                id,
                correct: !caps[2].is_empty(),
                text: caps[3].trim().to_string(),
            };
        }
    }

    LineKind::Unrecognized
}

/// Parse free-form quiz text into a question set.
///
/// Never fails: unreadable bytes are rejected upstream, and individual
/// malformed lines degrade per the grouping rules. An empty input yields
/// an empty set.
#[must_use]
pub fn parse_str(content: &str) -> QuestionSet {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    // Numbering convention: one conforming line anywhere makes the whole
    // document a numbered one.
    let has_numbering = lines
        .iter()
        .any(|l| matches!(classify_line(l), LineKind::QuestionStart { .. }));

    let mut parser = Grouper::new(has_numbering);
    for line in &lines {
        parser.feed(line);
    }
    parser.finish()
}

/// Stateful line grouper: accumulates the open question and closes it on
/// each boundary.
struct Grouper {
    numbered: bool,
    questions: Vec<Question>,
    current: Option<Question>,
    next_sequential_id: u32,
}

impl Grouper {
    fn new(numbered: bool) -> Self {
        Self {
            numbered,
            questions: Vec::new(),
            current: None,
            next_sequential_id: 1,
        }
    }

    fn feed(&mut self, line: &str) {
        match classify_line(line) {
            LineKind::QuestionStart { number, text } if self.numbered => {
                self.open(number, text);
            }
            LineKind::Variant { id, correct, text } => {
                if let Some(question) = self.current.as_mut() {
                    question.variants.push(Variant::new(id, text));
                    if correct {
                        // Last marked variant wins when several carry the
                        // marker in one question.
                        question.correct = Some(id);
                    }
                } else {
                    log::debug!("dropping variant line with no open question: {line:?}");
                }
            }
            // In unnumbered documents every non-variant line is a question
            // boundary and ids run sequentially from 1.
            _ if !self.numbered => {
                let id = self.next_sequential_id;
                self.next_sequential_id += 1;
                self.open(id, line.to_string());
            }
            _ => {
                // Numbered document: the line cannot be attributed
                // unambiguously, and inventing a sequential id here could
                // collide with a later explicit number.
                log::debug!("dropping unrecognized line: {line:?}");
            }
        }
    }

    fn open(&mut self, id: u32, text: String) {
        if let Some(done) = self.current.take() {
            self.questions.push(done);
        }
        self.current = Some(Question::new(id, text));
    }

    fn finish(mut self) -> QuestionSet {
        if let Some(done) = self.current.take() {
            self.questions.push(done);
        }
        QuestionSet::new(self.questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_question_start() {
        assert_eq!(
            classify_line("12. What is a trait?"),
            LineKind::QuestionStart {
                number: 12,
                text: "What is a trait?".to_string()
            }
        );
    }

    #[test]
    fn test_classify_variant_paren_separator() {
        assert_eq!(
            classify_line("b) Something"),
            LineKind::Variant {
                id: 2,
                correct: false,
                text: "Something".to_string()
            }
        );
    }

    #[test]
    fn test_classify_variant_dot_separator() {
        assert_eq!(
            classify_line("c. Something"),
            LineKind::Variant {
                id: 3,
                correct: false,
                text: "Something".to_string()
            }
        );
    }

    #[test]
    fn test_classify_variant_uppercase_letter() {
        assert_eq!(
            classify_line("D) text"),
            LineKind::Variant {
                id: 4,
                correct: false,
                text: "text".to_string()
            }
        );
    }

    #[test]
    fn test_classify_variant_correct_marker() {
        assert_eq!(
            classify_line("a) *the right one"),
            LineKind::Variant {
                id: 1,
                correct: true,
                text: "the right one".to_string()
            }
        );
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(classify_line("no leading convention"), LineKind::Unrecognized);
        assert_eq!(classify_line("1.no-space"), LineKind::Unrecognized);
    }

    #[test]
    fn test_numbered_document() {
        let set = parse_str("1. First?\na) yes\nb) *no\n\n2. Second?\na) *maybe\n");
        assert_eq!(set.len(), 2);
        assert_eq!(set.questions[0].id, 1);
        assert_eq!(set.questions[0].correct, Some(2));
        assert_eq!(set.questions[1].correct, Some(1));
    }

    #[test]
    fn test_explicit_numbers_preserved() {
        let set = parse_str("7. Seventh?\na) x\n\n40. Fortieth?\nb) y\n");
        assert_eq!(set.questions[0].id, 7);
        assert_eq!(set.questions[1].id, 40);
    }

    #[test]
    fn test_unnumbered_document() {
        let set = parse_str("First question\na) one\nb) two\nSecond question\na) *three\n");
        assert_eq!(set.len(), 2);
        assert_eq!(set.questions[0].id, 1);
        assert_eq!(set.questions[0].text, "First question");
        assert_eq!(set.questions[1].id, 2);
        assert_eq!(set.questions[1].correct, Some(1));
    }

    #[test]
    fn test_last_correct_marker_wins() {
        let set = parse_str("1. Q?\na) *first\nb) *second\nc) third\n");
        assert_eq!(set.questions[0].correct, Some(2));
    }

    #[test]
    fn test_no_marker_anywhere() {
        let set = parse_str("1. Q?\na) x\nb) y\n\n2. R?\na) z\n");
        assert!(set.questions.iter().all(|q| q.correct.is_none()));
    }

    #[test]
    fn test_continuation_line_dropped_in_numbered_doc() {
        let set = parse_str("1. Q?\na) x\nstray continuation text\nb) y\n");
        assert_eq!(set.len(), 1);
        assert_eq!(set.questions[0].variants.len(), 2);
        assert_eq!(set.questions[0].text, "Q?");
    }

    #[test]
    fn test_leading_stray_lines_in_numbered_doc_dropped() {
        // A numbered document never grows invented questions: leading junk
        // and its orphaned variants are dropped.
        let set = parse_str("Intro line\na) orphan\n2. Numbered?\nb) z\n");
        assert_eq!(set.len(), 1);
        assert_eq!(set.questions[0].id, 2);
        assert_eq!(set.questions[0].variants.len(), 1);
    }

    #[test]
    fn test_question_ids_stay_unique_with_leading_junk() {
        let set = parse_str("Intro\na) x\n1. Real?\nb) y\n");
        assert_eq!(set.len(), 1);
        assert_eq!(set.questions[0].id, 1);
        assert_eq!(set.questions[0].text, "Real?");
        let mut ids: Vec<u32> = set.questions.iter().map(|q| q.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), set.len());
    }

    #[test]
    fn test_variant_before_any_question_dropped() {
        let set = parse_str("a) orphan\n1. Q?\nb) kept\n");
        assert_eq!(set.len(), 1);
        assert_eq!(set.questions[0].variants.len(), 1);
        assert_eq!(set.questions[0].variants[0].id, 2);
    }

    #[test]
    fn test_malformed_order_preserved() {
        let set = parse_str("1. Q?\nc) third letter first\na) then first\n");
        let ids: Vec<u32> = set.questions[0].variants.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_str("").is_empty());
        assert!(parse_str("\n\n  \n").is_empty());
    }

    #[test]
    fn test_crlf_input() {
        let set = parse_str("1. Q?\r\na) x\r\nb) *y\r\n");
        assert_eq!(set.len(), 1);
        assert_eq!(set.questions[0].correct, Some(2));
    }
}
