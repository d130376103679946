//! Emotional flow across an ordered list of messages.
//!
//! Each message runs through the emoticon pipeline; the dominant emotions
//! that emerge form a timeline, which is then summarized as a trend, a
//! stability score, a confidence trend, and an overall tone.

use serde::Serialize;

use crate::analyzer::EmotionAnalyzer;
use crate::types::SentimentDistribution;

/// Minimum mean-confidence delta between conversation halves before the
/// confidence trend leaves `Steady`.
const CONFIDENCE_TREND_EPSILON: f64 = 0.1;

/// How much the dominant emotion moved over the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionTrend {
    Stable,
    MostlyStable,
    Variable,
    HighlyVariable,
    InsufficientData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTrend {
    Rising,
    Falling,
    Steady,
    InsufficientData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallTone {
    Positive,
    Negative,
    Neutral,
}

/// Per-message summary within a conversation.
#[derive(Debug, Clone, Serialize)]
pub struct MessageFlow {
    /// Zero-based position in the input list.
    pub index: usize,
    pub dominant_emotion: Option<String>,
    pub confidence: f64,
    pub sentiment: SentimentDistribution,
}

/// Flow summary for a whole conversation.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationFlow {
    pub messages: Vec<MessageFlow>,
    /// Dominant emotions of the messages that had one, in message order.
    pub timeline: Vec<String>,
    pub emotion_trend: EmotionTrend,
    /// `1 - changes / (n - 1)` over the timeline; 1.0 for short timelines.
    pub stability: f64,
    pub confidence_trend: ConfidenceTrend,
    pub overall_tone: OverallTone,
}

/// Analyze `messages` in order and summarize their emotional flow.
#[must_use]
pub fn analyze_conversation(analyzer: &EmotionAnalyzer, messages: &[String]) -> ConversationFlow {
    let mut per_message = Vec::with_capacity(messages.len());
    let mut timeline = Vec::new();
    let mut confidences = Vec::new();
    let mut sentiment_totals = SentimentDistribution::ZERO;

    for (index, message) in messages.iter().enumerate() {
        let analysis = analyzer.analyze(message);
        if let Some(dominant) = &analysis.dominant_emotion {
            timeline.push(dominant.emotion.clone());
            confidences.push(dominant.confidence);
        }
        sentiment_totals.positive += analysis.sentiment.positive;
        sentiment_totals.negative += analysis.sentiment.negative;
        sentiment_totals.neutral += analysis.sentiment.neutral;

        per_message.push(MessageFlow {
            index,
            dominant_emotion: analysis.dominant_emotion.as_ref().map(|d| d.emotion.clone()),
            confidence: analysis.confidence,
            sentiment: analysis.sentiment,
        });
    }

    let (emotion_trend, stability) = emotion_trend(&timeline);
    let confidence_trend = confidence_trend(&confidences);
    let overall_tone = overall_tone(&sentiment_totals);

    ConversationFlow {
        messages: per_message,
        timeline,
        emotion_trend,
        stability,
        confidence_trend,
        overall_tone,
    }
}

/// Classify the timeline by its change ratio and compute stability.
///
/// The ratio is `changes / (n - 1)`: 0 is `Stable`, under 0.3 is
/// `MostlyStable`, under 0.7 is `Variable`, anything above is
/// `HighlyVariable`. Fewer than two entries cannot show a trend.
fn emotion_trend(timeline: &[String]) -> (EmotionTrend, f64) {
    if timeline.len() < 2 {
        return (EmotionTrend::InsufficientData, 1.0);
    }

    let changes = timeline.windows(2).filter(|w| w[0] != w[1]).count();
    #[allow(clippy::cast_precision_loss)]
    let ratio = changes as f64 / (timeline.len() - 1) as f64;
    let stability = 1.0 - ratio;

    let trend = if changes == 0 {
        EmotionTrend::Stable
    } else if ratio < 0.3 {
        EmotionTrend::MostlyStable
    } else if ratio < 0.7 {
        EmotionTrend::Variable
    } else {
        EmotionTrend::HighlyVariable
    };

    (trend, stability)
}

/// Compare mean confidence of the first half against the second half.
fn confidence_trend(confidences: &[f64]) -> ConfidenceTrend {
    if confidences.len() < 2 {
        return ConfidenceTrend::InsufficientData;
    }

    let mid = confidences.len() / 2;
    let mean = |slice: &[f64]| -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n = slice.len() as f64;
        slice.iter().sum::<f64>() / n
    };
    let early = mean(&confidences[..mid]);
    let late = mean(&confidences[mid..]);

    if late - early > CONFIDENCE_TREND_EPSILON {
        ConfidenceTrend::Rising
    } else if early - late > CONFIDENCE_TREND_EPSILON {
        ConfidenceTrend::Falling
    } else {
        ConfidenceTrend::Steady
    }
}

/// Majority vote over the summed per-message sentiment. Ties and all-zero
/// input both land on `Neutral`.
fn overall_tone(totals: &SentimentDistribution) -> OverallTone {
    if totals.positive > totals.negative && totals.positive > totals.neutral {
        OverallTone::Positive
    } else if totals.negative > totals.positive && totals.negative > totals.neutral {
        OverallTone::Negative
    } else {
        OverallTone::Neutral
    }
}
