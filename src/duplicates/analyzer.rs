//! Duplicate and near-duplicate detection.
//!
//! # Overview
//!
//! The analyzer walks a fully parsed [`QuestionSet`] and reports duplicated
//! content at two levels:
//!
//! - whole questions whose prompts match
//! - answer options whose texts match
//!
//! Two comparison modes are supported:
//!
//! - **Exact** (default): case-insensitive equality via a seen-text table,
//!   O(n) over questions and O(m) over each question's options.
//! - **Similarity**: normalized Levenshtein ratio in `[0, 1]` against a
//!   configurable threshold per level. Pairwise, so O(n²) over questions
//!   and O(m²) over option pairs; prefer exact mode for large sets, or
//!   pre-bucket by length before switching this on.
//!
//! Findings come back in forward-scan order (outer index before inner),
//! independent of any hashing, and carry the conflicting texts so the
//! report renderer needs nothing else.
//!
//! # Example
//!
//! ```
//! use quizcheck::duplicates::{AnalyzerConfig, DuplicateAnalyzer, DuplicateReport};
//! use quizcheck::parser::free_text;
//!
//! let set = free_text::parse_str("1. What is X?\na) A\n\n2. What is X?\na) A\n");
//! let analyzer = DuplicateAnalyzer::new(AnalyzerConfig::default());
//! match analyzer.analyze(&set) {
//!     DuplicateReport::NoDuplicates => println!("clean"),
//!     DuplicateReport::Findings(findings) => println!("{} findings", findings.len()),
//! }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::model::QuestionSet;

/// How texts are compared for duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompareMode {
    /// Case-insensitive string equality.
    Exact,
    /// Thresholded normalized edit-distance ratio.
    Similarity,
}

/// Configuration for the duplicate analyzer.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerConfig {
    /// Comparison mode for both levels.
    pub mode: CompareMode,
    /// Minimum ratio for two questions to count as duplicates
    /// (similarity mode only).
    pub question_threshold: f64,
    /// Minimum ratio for two options to count as duplicates
    /// (similarity mode only).
    pub variant_threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            mode: CompareMode::Exact,
            question_threshold: 0.8,
            variant_threshold: 0.9,
        }
    }
}

impl AnalyzerConfig {
    /// Set the comparison mode.
    #[must_use]
    pub fn with_mode(mut self, mode: CompareMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the question-level similarity threshold, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_question_threshold(mut self, threshold: f64) -> Self {
        self.question_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Set the option-level similarity threshold, clamped to `[0, 1]`.
    #[must_use]
    pub fn with_variant_threshold(mut self, threshold: f64) -> Self {
        self.variant_threshold = threshold.clamp(0.0, 1.0);
        self
    }
}

/// One reported duplicate pair.
///
/// Findings are self-contained: they carry the texts and originating
/// question ids so they can be rendered without the source set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Finding {
    /// Two questions with matching prompts.
    DuplicateQuestions {
        /// Id of the earlier question
        first_id: u32,
        /// Id of the later question
        second_id: u32,
        /// Prompt of the earlier question
        first_text: String,
        /// Prompt of the later question
        second_text: String,
        /// Similarity score; 1.0 for exact-mode matches
        similarity: f64,
    },
    /// Two answer options with matching texts.
    DuplicateVariants {
        /// Question id of the earlier option
        first_question: u32,
        /// Variant id of the earlier option
        first_variant: u32,
        /// Text of the earlier option
        first_text: String,
        /// Question id of the later option (equals `first_question` for
        /// within-question matches)
        second_question: u32,
        /// Variant id of the later option
        second_variant: u32,
        /// Text of the later option
        second_text: String,
        /// Similarity score; 1.0 for exact-mode matches
        similarity: f64,
    },
}

/// Outcome of a duplicate analysis.
///
/// The clean case is an explicit variant rather than an empty list, so
/// downstream rendering branches on meaning instead of on emptiness.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DuplicateReport {
    /// No duplicated content was found.
    NoDuplicates,
    /// One or more duplicate pairs, in discovery order.
    Findings(Vec<Finding>),
}

impl DuplicateReport {
    /// Whether the analysis produced any findings.
    #[must_use]
    pub fn has_findings(&self) -> bool {
        matches!(self, Self::Findings(_))
    }

    /// The findings, empty for the clean case.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        match self {
            Self::NoDuplicates => &[],
            Self::Findings(findings) => findings,
        }
    }
}

/// Detects duplicated questions and options in a question set.
pub struct DuplicateAnalyzer {
    config: AnalyzerConfig,
}

impl DuplicateAnalyzer {
    /// Create an analyzer with the given configuration.
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Create an analyzer with the default (exact mode) configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(AnalyzerConfig::default())
    }

    /// Analyze a question set and report duplicate content.
    #[must_use]
    pub fn analyze(&self, set: &QuestionSet) -> DuplicateReport {
        let mut findings = Vec::new();

        match self.config.mode {
            CompareMode::Exact => {
                self.exact_questions(set, &mut findings);
                self.exact_variants(set, &mut findings);
            }
            CompareMode::Similarity => {
                self.similar_questions(set, &mut findings);
                self.similar_variants(set, &mut findings);
            }
        }

        if findings.is_empty() {
            DuplicateReport::NoDuplicates
        } else {
            DuplicateReport::Findings(findings)
        }
    }

    /// Exact question pass: each later duplicate is reported once against
    /// the first question that carried the same case-folded text.
    fn exact_questions(&self, set: &QuestionSet, findings: &mut Vec<Finding>) {
        let mut seen: HashMap<String, usize> = HashMap::new();
        for (i, question) in set.questions.iter().enumerate() {
            let key = question.text.to_lowercase();
            if let Some(&first) = seen.get(&key) {
                let original = &set.questions[first];
                findings.push(Finding::DuplicateQuestions {
                    first_id: original.id,
                    second_id: question.id,
                    first_text: original.text.clone(),
                    second_text: question.text.clone(),
                    similarity: 1.0,
                });
            } else {
                seen.insert(key, i);
            }
        }
    }

    /// Exact option pass, scoped to each question separately.
    fn exact_variants(&self, set: &QuestionSet, findings: &mut Vec<Finding>) {
        for question in &set.questions {
            let mut seen: HashMap<String, usize> = HashMap::new();
            for (i, variant) in question.variants.iter().enumerate() {
                let key = variant.text.to_lowercase();
                if let Some(&first) = seen.get(&key) {
                    let original = &question.variants[first];
                    findings.push(Finding::DuplicateVariants {
                        first_question: question.id,
                        first_variant: original.id,
                        first_text: original.text.clone(),
                        second_question: question.id,
                        second_variant: variant.id,
                        second_text: variant.text.clone(),
                        similarity: 1.0,
                    });
                } else {
                    seen.insert(key, i);
                }
            }
        }
    }

    /// Pairwise question comparison, forward scan with i < j.
    fn similar_questions(&self, set: &QuestionSet, findings: &mut Vec<Finding>) {
        let questions = &set.questions;
        for i in 0..questions.len() {
            for j in (i + 1)..questions.len() {
                let score = similarity(&questions[i].text, &questions[j].text);
                if score >= self.config.question_threshold {
                    findings.push(Finding::DuplicateQuestions {
                        first_id: questions[i].id,
                        second_id: questions[j].id,
                        first_text: questions[i].text.clone(),
                        second_text: questions[j].text.clone(),
                        similarity: score,
                    });
                }
            }
        }
    }

    /// Pairwise option comparison across question pairs (i, j) with i <= j.
    ///
    /// The i == j case covers duplicated options inside one question; the
    /// identical (question, option) pair is skipped explicitly so nothing
    /// is ever compared against itself.
    fn similar_variants(&self, set: &QuestionSet, findings: &mut Vec<Finding>) {
        let questions = &set.questions;
        for i in 0..questions.len() {
            for j in i..questions.len() {
                for (vi, first) in questions[i].variants.iter().enumerate() {
                    for (vj, second) in questions[j].variants.iter().enumerate() {
                        if i == j && vi >= vj {
                            continue;
                        }
                        let score = similarity(&first.text, &second.text);
                        if score >= self.config.variant_threshold {
                            findings.push(Finding::DuplicateVariants {
                                first_question: questions[i].id,
                                first_variant: first.id,
                                first_text: first.text.clone(),
                                second_question: questions[j].id,
                                second_variant: second.id,
                                second_text: second.text.clone(),
                                similarity: score,
                            });
                        }
                    }
                }
            }
        }
    }
}

/// Case-folded normalized Levenshtein ratio in `[0, 1]`.
fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}
