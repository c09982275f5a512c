//! Human-readable rendering of a duplicate report.
//!
//! Pure formatting over [`DuplicateReport`]: one section per finding kind,
//! each finding with the conflicting ids, the similarity score, and both
//! full texts so the source can be located and fixed. No analysis happens
//! here.

use std::fmt::Write as _;

use yansi::Paint;

use crate::model::variant_letter;

use super::{DuplicateReport, Finding};

/// Renders a [`DuplicateReport`] as line-oriented text.
pub struct ReportBuilder {
    color: bool,
}

impl ReportBuilder {
    /// Create a builder; `color` enables ANSI styling of section headers.
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render the report.
    #[must_use]
    pub fn render(&self, report: &DuplicateReport) -> String {
        let findings = match report {
            DuplicateReport::NoDuplicates => {
                return "No duplicate or similar content found.\n".to_string();
            }
            DuplicateReport::Findings(findings) => findings,
        };

        let mut out = String::new();

        let questions: Vec<&Finding> = findings
            .iter()
            .filter(|f| matches!(f, Finding::DuplicateQuestions { .. }))
            .collect();
        if !questions.is_empty() {
            self.header(&mut out, "SIMILAR QUESTIONS FOUND:");
            for finding in questions {
                self.render_question_pair(&mut out, finding);
            }
        }

        let variants: Vec<&Finding> = findings
            .iter()
            .filter(|f| matches!(f, Finding::DuplicateVariants { .. }))
            .collect();
        if !variants.is_empty() {
            self.header(&mut out, "SIMILAR ANSWER VARIANTS FOUND:");
            for finding in variants {
                self.render_variant_pair(&mut out, finding);
            }
        }

        out
    }

    fn header(&self, out: &mut String, text: &str) {
        if self.color {
            let _ = writeln!(out, "{}", text.yellow().bold());
        } else {
            let _ = writeln!(out, "{text}");
        }
    }

    fn render_question_pair(&self, out: &mut String, finding: &Finding) {
        if let Finding::DuplicateQuestions {
            first_id,
            second_id,
            first_text,
            second_text,
            similarity,
        } = finding
        {
            let _ = writeln!(
                out,
                "Question {first_id} and Question {second_id} - {similarity:.2} similarity"
            );
            let _ = writeln!(out, "  Q{first_id}: {first_text}");
            let _ = writeln!(out, "  Q{second_id}: {second_text}");
            let _ = writeln!(out);
        }
    }

    fn render_variant_pair(&self, out: &mut String, finding: &Finding) {
        if let Finding::DuplicateVariants {
            first_question,
            first_variant,
            first_text,
            second_question,
            second_variant,
            second_text,
            similarity,
        } = finding
        {
            let first_letter = variant_letter(*first_variant);
            let second_letter = variant_letter(*second_variant);
            let _ = writeln!(
                out,
                "Q{first_question} option {first_letter} and Q{second_question} option {second_letter} - {similarity:.2} similarity"
            );
            let _ = writeln!(out, "  Q{first_question} {first_letter}) {first_text}");
            let _ = writeln!(out, "  Q{second_question} {second_letter}) {second_text}");
            let _ = writeln!(out);
        }
    }
}
