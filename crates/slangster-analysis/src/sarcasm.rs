//! Rule-based sarcasm detection.
//!
//! Seven independent signals each add to a confidence score capped at 1.0;
//! anything at or above the 0.4 threshold counts as sarcasm. The first
//! signal that fires labels the kind.

use regex::Regex;
use serde::Serialize;

/// Decision threshold on the accumulated confidence.
const SARCASM_THRESHOLD: f64 = 0.4;

const SARCASTIC_PHRASES: &[&str] = &[
    // Work and money
    "work 40 hours just to be poor",
    "work 40 hours just to be broke",
    "work full time just to be poor",
    "love working for peanuts",
    "love being overworked and underpaid",
    "amazing salary of nothing",
    "thanks for the poverty wage",
    "love working overtime",
    "enjoy unpaid overtime",
    "love working for free",
    // General ironic expressions
    "just great",
    "oh wonderful",
    "how lovely",
    "that's perfect",
    "exactly what i wanted",
    "couldn't be better",
    "living the dream",
    "what a surprise",
    "how shocking",
    "oh joy",
    "just peachy",
    "oh how nice",
    "what fun",
    "yeah right",
    // Frustration
    "great now im stuck",
    "great now i'm stuck",
    "perfect im stuck",
    "perfect i'm stuck",
    "wonderful i'm stuck",
    "brilliant now what",
    // Tech problems
    "perfect my computer crashed",
    "great my computer",
    "wonderful crashed again",
    "fantastic broken again",
];

const POSITIVE_WORDS: &[&str] = &[
    "great",
    "amazing",
    "wonderful",
    "perfect",
    "fantastic",
    "excellent",
    "brilliant",
    "awesome",
    "love",
    "enjoy",
    "thrilled",
    "excited",
    "happy",
    "pleased",
    "delighted",
];

const ECONOMIC_HARDSHIP_TERMS: &[&str] = &[
    "poor",
    "broke",
    "can't afford",
    "no money",
    "struggling",
    "paycheck to paycheck",
    "minimum wage",
    "low pay",
    "underpaid",
    "costs too much",
    "bills",
    "debt",
    "rent",
];

const NEGATIVE_CONTEXT_WORDS: &[&str] = &[
    "crashed",
    "broken",
    "stuck",
    "problem",
    "issue",
    "error",
    "failed",
    "trouble",
    "wrong",
    "terrible",
    "awful",
    "hate",
    "annoying",
    "frustrated",
    "angry",
    "upset",
    "disappointed",
    "again",
    "still",
    "not working",
    "stopped",
    "freeze",
];

const TEMPORAL_INDICATORS: &[&str] = &[
    "again",
    "still",
    "always",
    "every time",
    "once again",
    "yet again",
    "as usual",
];

const INTENSIFIERS: &[&str] = &[
    "so",
    "very",
    "really",
    "extremely",
    "absolutely",
    "totally",
    "completely",
];

/// Which signal first marked the text as sarcastic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SarcasmKind {
    ExplicitPhrase,
    Contradiction,
    Economic,
    Exclamation,
    Repetitive,
    Temporal,
    Escalation,
}

#[derive(Debug, Clone, Serialize)]
pub struct SarcasmReport {
    pub detected: bool,
    pub confidence: f64,
    pub reasons: Vec<String>,
    pub kind: Option<SarcasmKind>,
}

impl SarcasmReport {
    fn negative() -> Self {
        Self {
            detected: false,
            confidence: 0.0,
            reasons: Vec::new(),
            kind: None,
        }
    }
}

/// Sarcasm detector with precompiled exclamation patterns.
#[derive(Debug)]
pub struct SarcasmDetector {
    positive_exclamation: Regex,
}

impl SarcasmDetector {
    #[must_use]
    pub fn new() -> Self {
        // The alternation mirrors POSITIVE_WORDS that plausibly end in '!'.
        let positive_exclamation = Regex::new(
            r"(?i)\b(perfect|great|wonderful|amazing|fantastic|brilliant|excellent|awesome)!",
        )
        .unwrap_or_else(|_| unreachable!("static pattern is valid"));
        Self {
            positive_exclamation,
        }
    }

    /// Run every signal against `text` and accumulate a confidence.
    ///
    /// Empty input is never sarcastic.
    #[must_use]
    pub fn detect(&self, text: &str) -> SarcasmReport {
        if text.trim().is_empty() {
            return SarcasmReport::negative();
        }

        let lower = text.to_lowercase();
        let mut confidence: f64 = 0.0;
        let mut reasons = Vec::new();
        let mut kind = None;

        let phrase_hits = matched_phrases(&lower);
        if !phrase_hits.is_empty() {
            confidence += 0.8;
            for phrase in &phrase_hits {
                reasons.push(format!("sarcastic phrase: '{phrase}'"));
            }
            kind.get_or_insert(SarcasmKind::ExplicitPhrase);
        }

        let contradiction = contradiction_score(&lower);
        if contradiction > 0.0 {
            confidence += contradiction * 1.2;
            reasons.push("positive words used in a negative context".to_string());
            kind.get_or_insert(SarcasmKind::Contradiction);
        }

        let economic = economic_score(&lower);
        if economic > 0.0 {
            confidence += economic * 1.1;
            reasons.push("economic hardship expressed with positive language".to_string());
            kind.get_or_insert(SarcasmKind::Economic);
        }

        let exclamation = self.exclamation_score(text);
        if exclamation > 0.0 {
            confidence += exclamation * 1.3;
            reasons.push("positive exclamation in a negative context".to_string());
            kind.get_or_insert(SarcasmKind::Exclamation);
        }

        let repetitive = repetitive_score(&lower);
        if repetitive > 0.0 {
            confidence += repetitive;
            reasons.push("repetitive positive language".to_string());
            kind.get_or_insert(SarcasmKind::Repetitive);
        }

        let temporal = temporal_score(&lower);
        if temporal > 0.0 {
            confidence += temporal;
            reasons.push("timing marker alongside positive language".to_string());
            kind.get_or_insert(SarcasmKind::Temporal);
        }

        let escalation = escalation_score(&lower);
        if escalation > 0.0 {
            confidence += escalation;
            reasons.push("intensified positive language near a problem".to_string());
            kind.get_or_insert(SarcasmKind::Escalation);
        }

        let confidence = confidence.min(1.0);

        SarcasmReport {
            detected: confidence >= SARCASM_THRESHOLD,
            confidence,
            reasons,
            kind,
        }
    }

    /// Positive word immediately followed by `!`, with negative context
    /// within an 80-character window around the match.
    fn exclamation_score(&self, text: &str) -> f64 {
        for m in self.positive_exclamation.find_iter(text) {
            let window = 80;
            let begin = m.start().saturating_sub(window);
            let end = (m.end() + window).min(text.len());
            let begin = floor_char_boundary(text, begin);
            let end = floor_char_boundary(text, end);
            let context = text[begin..end].to_lowercase();
            if NEGATIVE_CONTEXT_WORDS.iter().any(|w| context.contains(w)) {
                return 0.6;
            }
        }
        0.0
    }
}

impl Default for SarcasmDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn matched_phrases(lower: &str) -> Vec<&'static str> {
    SARCASTIC_PHRASES
        .iter()
        .filter(|phrase| lower.contains(*phrase))
        .copied()
        .collect()
}

fn contradiction_score(lower: &str) -> f64 {
    let mut score = 0.0;

    let has_positive = POSITIVE_WORDS.iter().any(|w| lower.contains(w));
    let has_hardship = ECONOMIC_HARDSHIP_TERMS.iter().any(|t| lower.contains(t));
    if has_positive && has_hardship {
        score += 0.5;
    }

    if lower.contains("love")
        && ["poor", "broke", "struggling"].iter().any(|t| lower.contains(t))
    {
        score += 0.3;
    }
    if lower.contains("great")
        && ["can't afford", "no money", "broke"].iter().any(|t| lower.contains(t))
    {
        score += 0.3;
    }

    score
}

fn economic_score(lower: &str) -> f64 {
    let mut score = 0.0;

    if lower.contains("work") && lower.contains("40") && lower.contains("poor") {
        score += 0.6;
    }
    if lower.contains("work")
        && lower.contains("hours")
        && ["poor", "broke", "struggling"].iter().any(|t| lower.contains(t))
    {
        score += 0.5;
    }

    score
}

fn repetitive_score(lower: &str) -> f64 {
    let mut score = 0.0;

    let distinct_positives = POSITIVE_WORDS
        .iter()
        .filter(|w| lower.contains(*w))
        .count();
    if distinct_positives >= 3 {
        score += 0.4;
    } else if distinct_positives >= 2 {
        score += 0.3;
    }

    // Same positive word twice, e.g. "perfect, just perfect".
    for word in POSITIVE_WORDS {
        if let Some(first) = lower.find(word) {
            if lower[first + word.len()..].contains(word) {
                score += 0.3;
                break;
            }
        }
    }

    score
}

fn temporal_score(lower: &str) -> f64 {
    let has_temporal = TEMPORAL_INDICATORS.iter().any(|t| lower.contains(t));
    let has_positive = POSITIVE_WORDS.iter().any(|w| lower.contains(w));
    if has_temporal && has_positive {
        0.5
    } else {
        0.0
    }
}

fn escalation_score(lower: &str) -> f64 {
    let has_problem = [
        "problem", "issue", "broken", "crashed", "failed", "error", "stuck", "trouble", "wrong",
    ]
    .iter()
    .any(|t| lower.contains(t));
    if !has_problem {
        return 0.0;
    }

    for intensifier in INTENSIFIERS {
        for positive in POSITIVE_WORDS {
            if lower.contains(&format!("{intensifier} {positive}")) {
                return 0.4;
            }
        }
    }
    0.0
}

/// Largest char boundary at or below `index`.
fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
