//! The emoticon emotion pipeline: scan, aggregate, classify, select.

use std::collections::BTreeMap;

use crate::lexicon::{EmotionWeights, Lexicon};
use crate::scanner;
use crate::sentiment;
use crate::types::{
    DominantEmotion, EmotionCatalogEntry, EmotionScores, Suggestion, TextAnalysis,
};

/// Number of occurrences at which the intensity frequency boost saturates.
const FULL_BOOST_OCCURRENCES: f64 = 10.0;

/// Maximum suggestions returned for a target emotion.
const MAX_SUGGESTIONS: usize = 10;

/// Stateless-per-call emotion analyzer over immutable tables.
///
/// Build one at startup and share it; every method is a pure function of
/// its input string and the tables.
#[derive(Debug, Clone)]
pub struct EmotionAnalyzer {
    lexicon: Lexicon,
    weights: EmotionWeights,
}

impl EmotionAnalyzer {
    #[must_use]
    pub fn new(lexicon: Lexicon, weights: EmotionWeights) -> Self {
        Self { lexicon, weights }
    }

    /// Analyzer over the builtin tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin(), EmotionWeights::builtin())
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Run the full pipeline on one input string.
    ///
    /// Empty input and token-free input both yield the documented zero
    /// state: no matches, empty scores, null dominant emotion, all-zero
    /// sentiment.
    #[must_use]
    pub fn analyze(&self, text: &str) -> TextAnalysis {
        let found = scanner::scan(&self.lexicon, text);
        if found.is_empty() {
            return TextAnalysis::empty();
        }

        let emotion_scores = self.aggregate(&found);
        let dominant_emotion = Self::dominant(&emotion_scores);
        let sentiment = sentiment::classify(&emotion_scores);
        let confidence = dominant_emotion.as_ref().map_or(0.0, |d| d.confidence);
        let total_emoticons = found.len();

        TextAnalysis {
            emoticons_found: found,
            emotion_scores,
            dominant_emotion,
            sentiment,
            total_emoticons,
            confidence,
        }
    }

    /// Frequency-boosted per-emotion intensity, capped at 1.0.
    ///
    /// `boost = min(n / 10, 1.0)` where `n` is the total token count, then
    /// `intensity = min(score * (1 + boost), 1.0)` — many emotional tokens
    /// of any kind push every matched emotion toward the cap.
    #[must_use]
    pub fn intensity(&self, text: &str) -> BTreeMap<String, f64> {
        let analysis = self.analyze(text);
        #[allow(clippy::cast_precision_loss)]
        let boost = (analysis.total_emoticons as f64 / FULL_BOOST_OCCURRENCES).min(1.0);

        analysis
            .emotion_scores
            .into_iter()
            .map(|(emotion, score)| (emotion, (score * (1.0 + boost)).min(1.0)))
            .collect()
    }

    /// Emoticons expressing `emotion`, strongest first, at most ten.
    #[must_use]
    pub fn suggest(&self, emotion: &str) -> Vec<Suggestion> {
        let wanted = emotion.to_lowercase();
        let mut suggestions: Vec<Suggestion> = self
            .lexicon
            .iter()
            .filter_map(|(token, emotions)| {
                emotions
                    .iter()
                    .find(|(label, _)| *label == wanted)
                    .map(|&(_, confidence)| Suggestion {
                        token: token.to_string(),
                        confidence,
                    })
            })
            .collect();

        suggestions.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.token.cmp(&b.token))
        });
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }

    /// Every emotion in the lexicon with its weight and emoticons, sorted
    /// strongest-first. Backs the emotions-list endpoint.
    #[must_use]
    pub fn emotion_catalog(&self) -> BTreeMap<String, EmotionCatalogEntry> {
        let mut catalog: BTreeMap<String, EmotionCatalogEntry> = BTreeMap::new();

        for (token, emotions) in self.lexicon.iter() {
            for (emotion, confidence) in emotions {
                let entry = catalog
                    .entry(emotion.clone())
                    .or_insert_with(|| EmotionCatalogEntry {
                        weight: self.weights.weight(emotion),
                        emoticons: Vec::new(),
                    });
                entry.emoticons.push(Suggestion {
                    token: token.to_string(),
                    confidence: *confidence,
                });
            }
        }

        for entry in catalog.values_mut() {
            entry.emoticons.sort_by(|a, b| {
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.token.cmp(&b.token))
            });
        }

        catalog
    }

    /// Mean confidence-weighted score per emotion across all matched tokens.
    ///
    /// Repeated same-emotion tokens do not automatically dominate (the mean
    /// absorbs them), but distinct tokens voting for the same emotion raise
    /// its average.
    fn aggregate(&self, tokens: &[String]) -> EmotionScores {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        let mut counts: BTreeMap<String, u32> = BTreeMap::new();

        for token in tokens {
            let Some(emotions) = self.lexicon.get(token) else {
                continue;
            };
            for (emotion, confidence) in emotions {
                let weight = self.weights.weight(emotion);
                *totals.entry(emotion.clone()).or_default() += confidence * weight;
                *counts.entry(emotion.clone()).or_default() += 1;
            }
        }

        totals
            .into_iter()
            .map(|(emotion, total)| {
                let count = f64::from(counts[&emotion]);
                (emotion, total / count)
            })
            .collect()
    }

    /// Argmax over the score map. Ties break to the lexicographically
    /// smallest label via the map's sorted iteration and strict comparison.
    fn dominant(scores: &EmotionScores) -> Option<DominantEmotion> {
        let mut best: Option<(&String, f64)> = None;
        for (emotion, &score) in scores {
            if best.is_none_or(|(_, b)| score > b) {
                best = Some((emotion, score));
            }
        }
        best.map(|(emotion, confidence)| DominantEmotion {
            emotion: emotion.clone(),
            confidence,
        })
    }
}
