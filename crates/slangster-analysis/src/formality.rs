//! Formality level scoring over weighted indicator families.
//!
//! Each family contributes fixed points per hit; the class with the highest
//! total wins, with confidence derived from its share of all points.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;

const ACADEMIC_WORDS: &[&str] = &[
    "furthermore",
    "consequently",
    "nevertheless",
    "notwithstanding",
    "pursuant",
    "aforementioned",
    "subsequent",
    "facilitate",
    "demonstrate",
    "establish",
    "implement",
    "analyze",
    "evaluate",
    "synthesize",
    "constitute",
    "endeavor",
    "ascertain",
    "utilize",
    "commence",
    "terminate",
    "preliminary",
    "comprehensive",
    "substantial",
    "exemplify",
    "illustrate",
];

const FORMAL_PHRASES: &[&str] = &[
    "i would like to",
    "i am writing to",
    "i would be grateful",
    "please find attached",
    "thank you for your consideration",
    "i look forward to",
    "yours sincerely",
    "yours faithfully",
    "dear sir/madam",
    "to whom it may concern",
    "in accordance with",
    "with regard to",
    "pursuant to",
    "in compliance with",
    "i am pleased to inform",
    "please be advised",
    "we regret to inform",
    "it has come to our attention",
];

const POLITE_REQUESTS: &[&str] = &[
    "would you be so kind",
    "if you would be so kind",
    "i would appreciate",
    "could you please",
    "would it be possible",
    "i wonder if you might",
    "perhaps you could",
    "if it is not too much trouble",
];

const FORMAL_STRUCTURES: &[&str] = &[
    "i am writing to",
    "please be advised",
    "i would like to request",
    "it is my understanding",
    "i trust this finds you well",
    "thank you for your time and consideration",
];

const CONTRACTIONS: &[&str] = &[
    "won't", "can't", "don't", "doesn't", "didn't", "wasn't", "weren't", "haven't", "hasn't",
    "hadn't", "shouldn't", "wouldn't", "couldn't", "isn't", "aren't", "i'm", "you're", "we're",
    "they're", "it's", "that's", "what's", "who's", "i'll", "you'll", "we'll", "they'll", "i'd",
    "you'd", "we'd", "they'd", "i've", "you've", "we've", "they've",
];

const CASUAL_WORDS: &[&str] = &[
    "yeah", "nah", "yep", "nope", "okay", "cool", "awesome", "dude", "folks", "stuff", "kinda",
    "sorta", "gonna", "wanna", "gotta", "dunno", "lemme", "gimme",
];

const INFORMAL_PHRASES: &[&str] = &[
    "how are you doing",
    "what's up",
    "how's it going",
    "see you later",
    "talk to you soon",
    "catch you later",
    "take care",
    "no worries",
    "no problem",
    "you bet",
    "for sure",
];

const FILLER_WORDS: &[&str] = &[
    "like",
    "you know",
    "i mean",
    "basically",
    "literally",
    "actually",
    "honestly",
    "seriously",
    "obviously",
    "definitely",
    "probably",
];

const SLANG_WORDS: &[&str] = &[
    "bro", "sis", "bestie", "fam", "squad", "lit", "dope", "epic", "legit", "sus", "vibe", "mood",
    "flex", "salty", "savage", "lowkey", "highkey", "deadass", "fr", "ngl", "tbh", "imo", "lol",
    "lmao", "omg", "brb", "ttyl",
];

const INTERNET_SLANG: &[&str] = &[
    "smh", "fomo", "yolo", "tfw", "mfw", "irl", "af", "goat", "stan", "ship", "simp", "boomer",
    "zoomer", "cancelled", "ghosted", "finsta", "slide into dms",
];

const CASUAL_INTENSIFIERS: &[&str] = &[
    "hella",
    "mad",
    "crazy",
    "insane",
    "wild",
    "nuts",
    "bananas",
    "stupid good",
    "lowkey fire",
    "no cap",
];

const BUSINESS_TERMS: &[&str] = &[
    "synergy",
    "leverage",
    "optimize",
    "streamline",
    "paradigm",
    "benchmark",
    "deliverable",
    "stakeholder",
    "roi",
    "kpi",
    "actionable",
    "scalable",
    "bandwidth",
    "circle back",
    "touch base",
    "drill down",
    "deep dive",
    "best practice",
    "win-win",
    "game changer",
];

const CORPORATE_PHRASES: &[&str] = &[
    "think outside the box",
    "low hanging fruit",
    "move the needle",
    "let's take this offline",
    "i'll circle back",
    "let's touch base",
    "action items",
    "going forward",
    "at the end of the day",
    "it is what it is",
];

/// The winning formality class for one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormalityLevel {
    Formal,
    Professional,
    Informal,
    Casual,
    Neutral,
}

/// Raw per-class point totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FormalityScores {
    pub formal: u32,
    pub professional: u32,
    pub informal: u32,
    pub casual: u32,
}

/// Human-readable hit descriptions grouped by class.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormalityIndicators {
    pub formal: Vec<String>,
    pub professional: Vec<String>,
    pub informal: Vec<String>,
    pub casual: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormalityReport {
    pub level: FormalityLevel,
    pub confidence: f64,
    pub scores: FormalityScores,
    /// Percentage share of points per class.
    pub distribution: BTreeMap<String, f64>,
    pub indicators: FormalityIndicators,
    pub word_count: usize,
    pub avg_sentence_length: f64,
}

/// Formality analyzer with precompiled word-boundary patterns.
#[derive(Debug)]
pub struct FormalityAnalyzer {
    filler_patterns: Vec<(String, Regex)>,
    structure_patterns: Vec<(String, Regex)>,
}

impl FormalityAnalyzer {
    /// Build the analyzer, compiling one word-boundary regex per filler word
    /// and per formal sentence structure.
    #[must_use]
    pub fn new() -> Self {
        let boundary_patterns = |words: &[&str]| -> Vec<(String, Regex)> {
            words
                .iter()
                .filter_map(|word| {
                    Regex::new(&format!(r"\b{}\b", regex::escape(word)))
                        .ok()
                        .map(|re| ((*word).to_string(), re))
                })
                .collect()
        };
        Self {
            filler_patterns: boundary_patterns(FILLER_WORDS),
            structure_patterns: boundary_patterns(FORMAL_STRUCTURES),
        }
    }

    /// Score `text` against every indicator family and pick the level.
    ///
    /// Empty input yields `Neutral` with confidence 0.0; input with no
    /// indicator hits yields `Neutral` with confidence 0.3.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn analyze(&self, text: &str) -> FormalityReport {
        if text.trim().is_empty() {
            return FormalityReport {
                level: FormalityLevel::Neutral,
                confidence: 0.0,
                scores: FormalityScores::default(),
                distribution: BTreeMap::new(),
                indicators: FormalityIndicators::default(),
                word_count: 0,
                avg_sentence_length: 0.0,
            };
        }

        let lower = text.to_lowercase();
        let word_count = text.split_whitespace().count();
        let mut scores = FormalityScores::default();
        let mut indicators = FormalityIndicators::default();

        for word in ACADEMIC_WORDS {
            if lower.contains(word) {
                scores.formal += 3;
                indicators.formal.push(format!("academic word: '{word}'"));
            }
        }
        for phrase in FORMAL_PHRASES {
            if lower.contains(phrase) {
                scores.formal += 5;
                indicators.formal.push(format!("formal phrase: '{phrase}'"));
            }
        }
        for phrase in POLITE_REQUESTS {
            if lower.contains(phrase) {
                scores.formal += 3;
                indicators
                    .formal
                    .push(format!("polite request: '{phrase}'"));
            }
        }
        for (structure, pattern) in &self.structure_patterns {
            if pattern.is_match(&lower) {
                scores.formal += 4;
                indicators
                    .formal
                    .push(format!("formal structure: '{structure}'"));
            }
        }

        for contraction in CONTRACTIONS {
            if lower.contains(contraction) {
                scores.informal += 2;
                indicators
                    .informal
                    .push(format!("contraction: '{contraction}'"));
            }
        }
        for word in CASUAL_WORDS {
            if lower.contains(word) {
                scores.informal += 2;
                indicators.informal.push(format!("casual word: '{word}'"));
            }
        }
        for phrase in INFORMAL_PHRASES {
            if lower.contains(phrase) {
                scores.informal += 3;
                indicators
                    .informal
                    .push(format!("informal phrase: '{phrase}'"));
            }
        }
        for (word, pattern) in &self.filler_patterns {
            let count = pattern.find_iter(&lower).count();
            if count > 0 {
                scores.informal += u32::try_from(count).unwrap_or(u32::MAX);
                indicators
                    .informal
                    .push(format!("filler word: '{word}' ({count}x)"));
            }
        }

        for slang in SLANG_WORDS {
            if lower.contains(slang) {
                scores.casual += 3;
                indicators.casual.push(format!("slang: '{slang}'"));
            }
        }
        for slang in INTERNET_SLANG {
            if lower.contains(slang) {
                scores.casual += 4;
                indicators.casual.push(format!("internet slang: '{slang}'"));
            }
        }
        for intensifier in CASUAL_INTENSIFIERS {
            if lower.contains(intensifier) {
                scores.casual += 2;
                indicators
                    .casual
                    .push(format!("casual intensifier: '{intensifier}'"));
            }
        }

        for term in BUSINESS_TERMS {
            if lower.contains(term) {
                scores.professional += 3;
                indicators
                    .professional
                    .push(format!("business term: '{term}'"));
            }
        }
        for phrase in CORPORATE_PHRASES {
            if lower.contains(phrase) {
                scores.professional += 4;
                indicators
                    .professional
                    .push(format!("corporate phrase: '{phrase}'"));
            }
        }

        // Structural signals.
        let avg_sentence_length = average_sentence_length(text);
        if avg_sentence_length > 20.0 {
            scores.formal += 2;
            indicators.formal.push(format!(
                "complex sentences (avg {avg_sentence_length:.1} words)"
            ));
        } else if avg_sentence_length < 8.0 {
            scores.casual += 1;
            indicators.casual.push(format!(
                "short sentences (avg {avg_sentence_length:.1} words)"
            ));
        }

        let exclamations = text.matches('!').count();
        if exclamations > 2 {
            scores.casual += u32::try_from(exclamations).unwrap_or(u32::MAX);
            indicators
                .casual
                .push(format!("multiple exclamations ({exclamations})"));
        }

        let has_letters = text.chars().any(char::is_alphabetic);
        if has_letters && text == text.to_uppercase() {
            scores.casual += 3;
            indicators.casual.push("all caps usage".to_string());
        } else if text
            .split_whitespace()
            .any(|w| w.chars().any(char::is_alphabetic) && w == w.to_uppercase())
        {
            scores.casual += 1;
            indicators.casual.push("some words in caps".to_string());
        }

        let labelled = [
            ("formal", scores.formal),
            ("professional", scores.professional),
            ("informal", scores.informal),
            ("casual", scores.casual),
        ];
        let max_score = labelled.iter().map(|&(_, s)| s).max().unwrap_or(0);
        let total_score: u32 = labelled.iter().map(|&(_, s)| s).sum();

        let (level, confidence) = if max_score == 0 {
            (FormalityLevel::Neutral, 0.3)
        } else {
            let winner = labelled
                .iter()
                .max_by_key(|&&(_, s)| s)
                .map_or("neutral", |&(label, _)| label);
            let level = match winner {
                "formal" => FormalityLevel::Formal,
                "professional" => FormalityLevel::Professional,
                "informal" => FormalityLevel::Informal,
                _ => FormalityLevel::Casual,
            };
            let confidence =
                (f64::from(max_score) / f64::from(total_score.max(1)) * 1.2).min(0.95);
            (level, confidence)
        };

        let distribution = labelled
            .iter()
            .map(|&(label, score)| {
                let share = if total_score == 0 {
                    0.0
                } else {
                    f64::from(score) / f64::from(total_score) * 100.0
                };
                (label.to_string(), (share * 10.0).round() / 10.0)
            })
            .collect();

        FormalityReport {
            level,
            confidence,
            scores,
            distribution,
            indicators,
            word_count,
            avg_sentence_length,
        }
    }
}

impl Default for FormalityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn average_sentence_length(text: &str) -> f64 {
    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .collect();
    if sentences.is_empty() {
        return 0.0;
    }
    let total_words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
    #[allow(clippy::cast_precision_loss)]
    let avg = total_words as f64 / sentences.len() as f64;
    avg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> FormalityAnalyzer {
        FormalityAnalyzer::new()
    }

    #[test]
    fn empty_input_is_neutral_with_zero_confidence() {
        let report = analyzer().analyze("   ");
        assert_eq!(report.level, FormalityLevel::Neutral);
        assert_eq!(report.confidence, 0.0);
        assert_eq!(report.word_count, 0);
    }

    #[test]
    fn indicator_free_text_is_neutral_with_floor_confidence() {
        let report = analyzer().analyze("The report covers three regions and two quarters plus a forecast section");
        assert_eq!(report.level, FormalityLevel::Neutral);
        assert!((report.confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn formal_letter_is_classified_formal() {
        let report = analyzer().analyze(
            "Dear Sir/Madam, I am writing to request a review of my application. \
             I would be grateful for your consideration and I look forward to your reply.",
        );
        assert_eq!(report.level, FormalityLevel::Formal);
        assert!(report.confidence > 0.5);
        assert!(!report.indicators.formal.is_empty());
    }

    #[test]
    fn formal_sentence_structures_add_formal_points() {
        let report = analyzer().analyze("It is my understanding that the request remains open");
        assert_eq!(report.level, FormalityLevel::Formal);
        assert!(report
            .indicators
            .formal
            .iter()
            .any(|i| i.contains("formal structure")));

        let bare = analyzer().analyze("The request remains open");
        assert!(report.scores.formal > bare.scores.formal);
    }

    #[test]
    fn structure_and_phrase_hits_both_count() {
        // "i would like to" (phrase, +5) and "i would like to request"
        // (structure, +4) overlap and both score, like the indicator
        // families they come from.
        let report = analyzer().analyze("I would like to request access to the archive");
        assert!(report.scores.formal >= 9);
        assert_eq!(report.level, FormalityLevel::Formal);
    }

    #[test]
    fn slang_heavy_text_is_classified_casual() {
        let report = analyzer().analyze("ngl that party was lit, deadass the vibe was fire lol");
        assert_eq!(report.level, FormalityLevel::Casual);
        assert!(report.scores.casual > report.scores.formal);
    }

    #[test]
    fn corporate_speak_is_classified_professional() {
        let report = analyzer().analyze(
            "We should leverage the synergy across stakeholders and circle back on the deliverable going forward",
        );
        assert_eq!(report.level, FormalityLevel::Professional);
    }

    #[test]
    fn contractions_push_toward_informal() {
        let report = analyzer().analyze("I'm sure it's fine, don't worry about it, that's life");
        assert!(report.scores.informal > 0);
        assert!(report
            .indicators
            .informal
            .iter()
            .any(|i| i.contains("contraction")));
    }

    #[test]
    fn confidence_is_capped() {
        let report = analyzer().analyze("yours sincerely, pursuant to the aforementioned");
        assert!(report.confidence <= 0.95);
    }

    #[test]
    fn exclamations_count_as_casual_signal() {
        let report = analyzer().analyze("Fine! Fine! Fine! Whatever!");
        assert!(report
            .indicators
            .casual
            .iter()
            .any(|i| i.contains("exclamations")));
    }

    #[test]
    fn distribution_shares_sum_to_hundred_when_scored() {
        let report = analyzer().analyze("ngl I'm gonna circle back, no cap");
        let sum: f64 = report.distribution.values().sum();
        assert!((sum - 100.0).abs() < 0.5, "distribution summed to {sum}");
    }
}
