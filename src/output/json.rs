//! Canonical JSON output.
//!
//! Serializes the question set with the exact schema the structured loader
//! consumes, so a rendered document reloads into an identical set. This is
//! the contract surface for every external consumer of parsed quizzes.

use std::fs;
use std::path::Path;

use crate::model::QuestionSet;

/// JSON renderer for a question set.
pub struct JsonOutput<'a> {
    set: &'a QuestionSet,
}

impl<'a> JsonOutput<'a> {
    /// Create a renderer borrowing the set.
    #[must_use]
    pub fn new(set: &'a QuestionSet) -> Self {
        Self { set }
    }

    /// Render compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self.set)
    }

    /// Render pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.set)
    }

    /// Write pretty-printed JSON to a file, with a trailing newline.
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{free_text, structured};

    #[test]
    fn test_schema_round_trip_is_exact() {
        let set = free_text::parse_str("1. Q?\na) yes\nb) *no\n\n5. R?\nc) maybe\n");
        let json = JsonOutput::new(&set).to_json_pretty().unwrap();
        let reloaded = structured::load_str(&json).unwrap();
        assert_eq!(set, reloaded);
    }

    #[test]
    fn test_compact_round_trip() {
        let set = free_text::parse_str("1. Q?\na) x\n");
        let json = JsonOutput::new(&set).to_json().unwrap();
        assert_eq!(structured::load_str(&json).unwrap(), set);
    }

    #[test]
    fn test_top_level_field() {
        let set = free_text::parse_str("1. Q?\na) x\n");
        let json = JsonOutput::new(&set).to_json().unwrap();
        assert!(json.starts_with(r#"{"questions":"#));
    }
}
