use std::collections::BTreeMap;

use serde::Serialize;

/// Per-emotion aggregate scores for one input.
///
/// `BTreeMap` gives deterministic, lexicographic iteration — argmax ties
/// resolve to the smallest label regardless of match order.
pub type EmotionScores = BTreeMap<String, f64>;

/// The single strongest emotion for an input, with its aggregate score as
/// a confidence value. Absent when no lexicon token matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominantEmotion {
    pub emotion: String,
    pub confidence: f64,
}

/// Three-way sentiment split. Components sum to 1.0 when any token matched,
/// otherwise all three are 0.0 — never NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentDistribution {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

impl SentimentDistribution {
    pub const ZERO: Self = Self {
        positive: 0.0,
        negative: 0.0,
        neutral: 0.0,
    };
}

/// Full emoticon analysis for one input string, shaped for JSON consumers.
#[derive(Debug, Clone, Serialize)]
pub struct TextAnalysis {
    /// Every matched token, one entry per occurrence.
    pub emoticons_found: Vec<String>,
    pub emotion_scores: EmotionScores,
    pub dominant_emotion: Option<DominantEmotion>,
    pub sentiment: SentimentDistribution,
    pub total_emoticons: usize,
    /// Equal to the dominant emotion's confidence, or 0.0 when none.
    pub confidence: f64,
}

impl TextAnalysis {
    /// The documented zero state for empty or token-free input.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            emoticons_found: Vec::new(),
            emotion_scores: EmotionScores::new(),
            dominant_emotion: None,
            sentiment: SentimentDistribution::ZERO,
            total_emoticons: 0,
            confidence: 0.0,
        }
    }
}

/// An emoticon suggested for a target emotion.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub token: String,
    pub confidence: f64,
}

/// One emotion in the catalog exposed by the emotions-list endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EmotionCatalogEntry {
    pub weight: f64,
    /// Emoticons expressing this emotion, strongest first.
    pub emoticons: Vec<Suggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_analysis_is_the_zero_state() {
        let a = TextAnalysis::empty();
        assert!(a.emoticons_found.is_empty());
        assert!(a.emotion_scores.is_empty());
        assert!(a.dominant_emotion.is_none());
        assert_eq!(a.sentiment, SentimentDistribution::ZERO);
        assert_eq!(a.total_emoticons, 0);
        assert_eq!(a.confidence, 0.0);
    }

    #[test]
    fn text_analysis_serializes_null_dominant_emotion() {
        let json = serde_json::to_value(TextAnalysis::empty()).expect("serialize");
        assert!(json["dominant_emotion"].is_null());
        assert_eq!(json["sentiment"]["positive"].as_f64(), Some(0.0));
        assert_eq!(json["total_emoticons"].as_i64(), Some(0));
    }
}
