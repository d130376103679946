//! Slang term detection against a term → meaning glossary.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

const BUILTIN_GLOSSARY: &[(&str, &str)] = &[
    ("cap", "lie or not true"),
    ("deadass", "seriously"),
    ("fr", "for real"),
    ("bussin", "really good"),
    ("sus", "suspicious"),
    ("lit", "exciting or excellent"),
    ("fire", "very good"),
    ("bet", "agreed, okay"),
    ("lowkey", "somewhat, secretly"),
    ("highkey", "openly, very much"),
    ("ngl", "not gonna lie"),
    ("tbh", "to be honest"),
    ("imo", "in my opinion"),
    ("smh", "shaking my head"),
    ("fomo", "fear of missing out"),
    ("yolo", "you only live once"),
    ("goat", "greatest of all time"),
    ("salty", "bitter or annoyed"),
    ("flex", "show off"),
    ("ghosted", "cut off all contact suddenly"),
    ("stan", "devoted fan"),
    ("vibe", "mood or atmosphere"),
    ("slay", "do something impressively well"),
    ("mid", "mediocre"),
    ("rizz", "charisma, charm"),
];

/// A slang term found in an input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlangHit {
    pub term: String,
    pub meaning: String,
}

/// One CSV row of a glossary dataset: `term,meaning`.
#[derive(Debug, Deserialize)]
struct GlossaryRow {
    term: String,
    meaning: String,
}

/// Immutable lowercase term → meaning table.
#[derive(Debug, Clone)]
pub struct SlangGlossary {
    entries: HashMap<String, String>,
}

impl SlangGlossary {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_GLOSSARY
                .iter()
                .map(|&(term, meaning)| (term.to_string(), meaning.to_string()))
                .collect(),
        }
    }

    /// Load a glossary from a CSV file with `term,meaning` columns.
    /// Terms are lowercased on load.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or parsed, or
    /// holds no rows.
    pub fn from_csv(path: &Path) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut entries = HashMap::new();
        for result in reader.deserialize() {
            let row: GlossaryRow = result?;
            entries.insert(row.term.to_lowercase(), row.meaning);
        }
        if entries.is_empty() {
            return Err(DatasetError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(Self { entries })
    }

    /// Find glossary terms in `text` by whole-word match on lowercased,
    /// punctuation-trimmed words. Each distinct term is reported once, in
    /// first-occurrence order.
    #[must_use]
    pub fn detect(&self, text: &str) -> Vec<SlangHit> {
        let mut hits: Vec<SlangHit> = Vec::new();
        for word in text.split_whitespace() {
            let cleaned = word
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if cleaned.is_empty() {
                continue;
            }
            if let Some(meaning) = self.entries.get(&cleaned) {
                if !hits.iter().any(|h| h.term == cleaned) {
                    hits.push(SlangHit {
                        term: cleaned,
                        meaning: meaning.clone(),
                    });
                }
            }
        }
        hits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn detects_known_terms_case_insensitively() {
        let glossary = SlangGlossary::builtin();
        let hits = glossary.detect("No CAP, that meal was bussin fr");
        let terms: Vec<&str> = hits.iter().map(|h| h.term.as_str()).collect();
        assert_eq!(terms, vec!["cap", "bussin", "fr"]);
    }

    #[test]
    fn punctuation_does_not_hide_terms() {
        let glossary = SlangGlossary::builtin();
        let hits = glossary.detect("That's sus... deadass!");
        let terms: Vec<&str> = hits.iter().map(|h| h.term.as_str()).collect();
        assert_eq!(terms, vec!["sus", "deadass"]);
    }

    #[test]
    fn repeated_terms_are_reported_once() {
        let glossary = SlangGlossary::builtin();
        let hits = glossary.detect("fr fr fr");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].meaning, "for real");
    }

    #[test]
    fn plain_text_yields_no_hits() {
        let glossary = SlangGlossary::builtin();
        assert!(glossary.detect("The weather is lovely today").is_empty());
    }

    #[test]
    fn substrings_of_words_do_not_match() {
        // "capital" must not trigger "cap".
        let glossary = SlangGlossary::builtin();
        assert!(glossary.detect("The capital of France").is_empty());
    }

    #[test]
    fn from_csv_loads_and_lowercases_terms() {
        let dir = std::env::temp_dir().join("slangster-glossary-ok");
        std::fs::create_dir_all(&dir).expect("tempdir");
        let path = dir.join("slang.csv");
        let mut f = std::fs::File::create(&path).expect("create csv");
        writeln!(f, "term,meaning").unwrap();
        writeln!(f, "Bussin,really good").unwrap();
        writeln!(f, "cheugy,out of style").unwrap();
        drop(f);

        let glossary = SlangGlossary::from_csv(&path).expect("load glossary");
        assert_eq!(glossary.len(), 2);
        let hits = glossary.detect("so cheugy");
        assert_eq!(hits[0].term, "cheugy");
    }

    #[test]
    fn from_csv_rejects_empty_dataset() {
        let dir = std::env::temp_dir().join("slangster-glossary-empty");
        std::fs::create_dir_all(&dir).expect("tempdir");
        let path = dir.join("slang.csv");
        std::fs::write(&path, "term,meaning\n").expect("write csv");

        let result = SlangGlossary::from_csv(&path);
        assert!(matches!(result, Err(DatasetError::Empty { .. })));
    }
}
