//! Three-way sentiment classification over aggregate emotion scores.

use crate::types::{EmotionScores, SentimentDistribution};

/// Closed positive bucket. Labels outside all three buckets are silently
/// dropped from sentiment — a documented limitation, not an error.
pub const POSITIVE_EMOTIONS: &[&str] = &[
    "happy",
    "joyful",
    "excited",
    "love",
    "content",
    "playful",
    "celebrating",
    "approval",
];

pub const NEGATIVE_EMOTIONS: &[&str] = &[
    "sad",
    "angry",
    "fearful",
    "disgusted",
    "frustrated",
    "disappointed",
    "disapproval",
];

pub const NEUTRAL_EMOTIONS: &[&str] = &["neutral", "thinking", "confused", "surprised"];

/// Partition scores into the fixed buckets and normalize to a three-way
/// distribution. An all-zero bucket total yields the explicit zero state
/// rather than NaN.
#[must_use]
pub fn classify(scores: &EmotionScores) -> SentimentDistribution {
    let bucket_sum = |bucket: &[&str]| -> f64 {
        bucket
            .iter()
            .filter_map(|label| scores.get(*label))
            .sum()
    };

    let positive = bucket_sum(POSITIVE_EMOTIONS);
    let negative = bucket_sum(NEGATIVE_EMOTIONS);
    let neutral = bucket_sum(NEUTRAL_EMOTIONS);
    let total = positive + negative + neutral;

    if total == 0.0 {
        return SentimentDistribution::ZERO;
    }

    SentimentDistribution {
        positive: positive / total,
        negative: negative / total,
        neutral: neutral / total,
    }
}
