//! Token → emotion lexicon and the emotion weight table.
//!
//! Both tables are built once at startup and never mutated, so they can be
//! shared freely across request handlers. The builtin tables mirror the
//! datasets shipped with the application; a CSV override may replace either
//! one at load time.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::DatasetError;

/// Multiplier applied to emotions missing from the weight table.
pub const DEFAULT_EMOTION_WEIGHT: f64 = 0.5;

/// Builtin emoticon-to-emotion table. Each token carries one or more
/// emotion labels with a confidence in [0, 1].
const BUILTIN_LEXICON: &[(&str, &[(&str, f64)])] = &[
    // Happy / joy
    (":)", &[("happy", 0.9), ("friendly", 0.7)]),
    (":-)", &[("happy", 0.9), ("friendly", 0.7)]),
    ("😊", &[("happy", 0.95), ("friendly", 0.8), ("content", 0.7)]),
    ("😀", &[("happy", 0.9), ("excited", 0.8), ("joyful", 0.9)]),
    ("😃", &[("happy", 0.9), ("excited", 0.85), ("energetic", 0.8)]),
    ("😄", &[("happy", 0.95), ("joyful", 0.9), ("excited", 0.8)]),
    ("😁", &[("happy", 0.9), ("excited", 0.8), ("enthusiastic", 0.85)]),
    ("😆", &[("happy", 0.85), ("amused", 0.9), ("laughing", 0.95)]),
    (
        "😂",
        &[
            ("happy", 0.8),
            ("amused", 0.95),
            ("laughing", 0.95),
            ("joyful", 0.9),
        ],
    ),
    ("🤣", &[("amused", 0.95), ("laughing", 0.95), ("happy", 0.9)]),
    ("😍", &[("happy", 0.8), ("love", 0.95), ("adoration", 0.9)]),
    ("🥰", &[("happy", 0.85), ("love", 0.9), ("affectionate", 0.95)]),
    ("😘", &[("happy", 0.8), ("love", 0.85), ("affectionate", 0.8)]),
    ("🙂", &[("happy", 0.7), ("content", 0.8), ("neutral", 0.6)]),
    ("🤗", &[("happy", 0.8), ("friendly", 0.9), ("welcoming", 0.85)]),
    // Sad
    (":(", &[("sad", 0.9), ("unhappy", 0.8)]),
    (":-(", &[("sad", 0.9), ("unhappy", 0.8)]),
    ("😢", &[("sad", 0.95), ("crying", 0.9), ("upset", 0.8)]),
    ("😭", &[("sad", 0.9), ("crying", 0.95), ("devastated", 0.85)]),
    ("😞", &[("sad", 0.85), ("disappointed", 0.9), ("dejected", 0.8)]),
    ("😔", &[("sad", 0.8), ("disappointed", 0.85), ("pensive", 0.7)]),
    ("😟", &[("sad", 0.7), ("worried", 0.85), ("concerned", 0.8)]),
    ("🙁", &[("sad", 0.8), ("unhappy", 0.85), ("disappointed", 0.7)]),
    // Angry
    (">:(", &[("angry", 0.9), ("frustrated", 0.8)]),
    ("😠", &[("angry", 0.9), ("mad", 0.85), ("frustrated", 0.8)]),
    ("😡", &[("angry", 0.95), ("furious", 0.9), ("rage", 0.85)]),
    ("😤", &[("angry", 0.8), ("frustrated", 0.9), ("huffing", 0.85)]),
    ("🙄", &[("annoyed", 0.85), ("sarcastic", 0.8), ("dismissive", 0.75)]),
    // Surprised / shocked
    (":O", &[("surprised", 0.9), ("shocked", 0.8)]),
    ("😮", &[("surprised", 0.9), ("shocked", 0.8), ("amazed", 0.7)]),
    ("😲", &[("surprised", 0.95), ("shocked", 0.9), ("astonished", 0.85)]),
    ("🤯", &[("surprised", 0.8), ("shocked", 0.95), ("mind_blown", 0.95)]),
    (
        "😱",
        &[
            ("surprised", 0.8),
            ("shocked", 0.9),
            ("fearful", 0.85),
            ("screaming", 0.9),
        ],
    ),
    // Fearful / anxious
    ("😨", &[("fearful", 0.9), ("anxious", 0.85), ("scared", 0.8)]),
    ("😰", &[("fearful", 0.8), ("anxious", 0.9), ("nervous", 0.85)]),
    // Disgusted
    ("🤢", &[("disgusted", 0.9), ("nauseous", 0.95), ("sick", 0.8)]),
    ("🤮", &[("disgusted", 0.95), ("nauseous", 0.95), ("vomiting", 0.95)]),
    // Neutral / thinking
    ("😐", &[("neutral", 0.9), ("expressionless", 0.85)]),
    ("😑", &[("neutral", 0.8), ("expressionless", 0.9), ("unimpressed", 0.7)]),
    ("🤔", &[("thinking", 0.9), ("pondering", 0.85), ("contemplative", 0.8)]),
    ("🧐", &[("thinking", 0.85), ("analytical", 0.9), ("scrutinizing", 0.8)]),
    // Confused
    ("😕", &[("confused", 0.8), ("uncertain", 0.75), ("disappointed", 0.6)]),
    ("😵", &[("confused", 0.9), ("dizzy", 0.85), ("overwhelmed", 0.8)]),
    ("🤷", &[("confused", 0.7), ("indifferent", 0.8), ("shrugging", 0.9)]),
    // Playful
    (";)", &[("playful", 0.9), ("flirty", 0.8), ("winking", 0.95)]),
    (";-)", &[("playful", 0.9), ("flirty", 0.8), ("winking", 0.95)]),
    ("😉", &[("playful", 0.9), ("flirty", 0.8), ("winking", 0.95)]),
    ("😜", &[("playful", 0.95), ("silly", 0.9), ("teasing", 0.85)]),
    ("🤪", &[("playful", 0.85), ("silly", 0.9), ("crazy", 0.8)]),
    ("😛", &[("playful", 0.9), ("silly", 0.8), ("teasing", 0.85)]),
    // Cool / confident
    ("😎", &[("cool", 0.95), ("confident", 0.85), ("relaxed", 0.8)]),
    ("🤓", &[("smart", 0.9), ("nerdy", 0.95), ("studious", 0.85)]),
    // Sleepy / tired
    ("😴", &[("sleepy", 0.95), ("tired", 0.9), ("peaceful", 0.7)]),
    ("🥱", &[("tired", 0.85), ("bored", 0.8), ("yawning", 0.95)]),
    // Hearts
    ("❤️", &[("love", 0.95), ("affection", 0.9), ("caring", 0.85)]),
    ("💕", &[("love", 0.9), ("sweet", 0.85), ("affectionate", 0.9)]),
    ("💖", &[("love", 0.95), ("sparkling", 0.8), ("excited", 0.7)]),
    // Celebration
    (
        "🎉",
        &[
            ("celebrating", 0.95),
            ("party", 0.9),
            ("festive", 0.85),
            ("happy", 0.8),
        ],
    ),
    (
        "🎊",
        &[
            ("celebrating", 0.9),
            ("party", 0.95),
            ("confetti", 0.9),
            ("happy", 0.8),
        ],
    ),
    (
        "🥳",
        &[
            ("celebrating", 0.95),
            ("party", 0.9),
            ("birthday", 0.8),
            ("happy", 0.85),
        ],
    ),
    // Approval
    ("👍", &[("approval", 0.9), ("positive", 0.85), ("good", 0.8)]),
    ("👎", &[("disapproval", 0.9), ("negative", 0.85), ("bad", 0.8)]),
    ("👌", &[("perfect", 0.9), ("okay", 0.85), ("approval", 0.8)]),
    (
        "🙏",
        &[
            ("grateful", 0.9),
            ("praying", 0.85),
            ("thankful", 0.8),
            ("respectful", 0.7),
        ],
    ),
    // Classic text emoticons
    ("XD", &[("laughing", 0.9), ("amused", 0.85), ("happy", 0.8)]),
    ("xD", &[("laughing", 0.9), ("amused", 0.85), ("happy", 0.8)]),
    (":P", &[("playful", 0.9), ("silly", 0.8), ("teasing", 0.75)]),
    (":p", &[("playful", 0.9), ("silly", 0.8), ("teasing", 0.75)]),
    ("=)", &[("happy", 0.8), ("content", 0.7)]),
    ("=(", &[("sad", 0.8), ("unhappy", 0.7)]),
    (":D", &[("happy", 0.9), ("excited", 0.8), ("joyful", 0.85)]),
    (":|", &[("neutral", 0.9), ("indifferent", 0.8)]),
    (":/", &[("confused", 0.8), ("uncertain", 0.75), ("skeptical", 0.7)]),
    ("<3", &[("love", 0.95), ("heart", 0.9), ("affection", 0.85)]),
    ("</3", &[("heartbroken", 0.95), ("sad", 0.8), ("broken", 0.9)]),
];

/// Builtin importance multipliers. Primary emotions score full weight;
/// progressively narrower states are discounted so they do not drown out
/// the primary signal in aggregate scores.
const BUILTIN_WEIGHTS: &[(&str, f64)] = &[
    // Primary
    ("happy", 1.0),
    ("sad", 1.0),
    ("angry", 1.0),
    ("fearful", 1.0),
    ("surprised", 1.0),
    ("disgusted", 1.0),
    // Secondary
    ("joyful", 0.9),
    ("excited", 0.9),
    ("frustrated", 0.9),
    ("anxious", 0.9),
    ("confused", 0.8),
    ("love", 0.95),
    ("content", 0.8),
    ("playful", 0.8),
    ("disappointed", 0.85),
    // Tertiary
    ("amused", 0.7),
    ("friendly", 0.7),
    ("cool", 0.6),
    ("tired", 0.6),
    ("thinking", 0.5),
    ("neutral", 0.3),
    ("peaceful", 0.6),
    ("celebrating", 0.8),
    // Specific states
    ("laughing", 0.6),
    ("crying", 0.8),
    ("winking", 0.4),
    ("approval", 0.6),
    ("disapproval", 0.6),
];

/// Immutable token → emotion-confidence table.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<String, Vec<(String, f64)>>,
    /// Keys ordered longest first (ties lexicographic) for the scanner.
    scan_order: Vec<String>,
}

/// One CSV row of a lexicon dataset: `token,emotion,confidence`.
#[derive(Debug, Deserialize)]
struct LexiconRow {
    token: String,
    emotion: String,
    confidence: f64,
}

impl Lexicon {
    /// The builtin emoticon table, always available.
    #[must_use]
    pub fn builtin() -> Self {
        let pairs = BUILTIN_LEXICON.iter().flat_map(|(token, emotions)| {
            emotions
                .iter()
                .map(move |(emotion, confidence)| ((*token).to_string(), (*emotion).to_string(), *confidence))
        });
        // The builtin table is validated by tests; construction cannot fail.
        Self::from_rows(pairs, Path::new("<builtin>")).expect("builtin lexicon is valid")
    }

    /// Load a lexicon from a CSV file with `token,emotion,confidence` columns,
    /// one row per (token, emotion) pair.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or parsed, if any
    /// confidence falls outside [0, 1], if a token ends up with no positive
    /// confidence entry, or if the file holds no rows at all.
    pub fn from_csv(path: &Path) -> Result<Self, DatasetError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let row: LexiconRow = result?;
            rows.push((row.token, row.emotion, row.confidence));
        }
        Self::from_rows(rows, path)
    }

    fn from_rows<I>(rows: I, path: &Path) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (String, String, f64)>,
    {
        let mut entries: HashMap<String, Vec<(String, f64)>> = HashMap::new();
        for (token, emotion, confidence) in rows {
            if !(0.0..=1.0).contains(&confidence) {
                return Err(DatasetError::InvalidConfidence {
                    token,
                    emotion,
                    value: confidence,
                });
            }
            entries.entry(token).or_default().push((emotion, confidence));
        }

        if entries.is_empty() {
            return Err(DatasetError::Empty {
                path: path.to_path_buf(),
            });
        }

        for (token, emotions) in &entries {
            if !emotions.iter().any(|&(_, c)| c > 0.0) {
                return Err(DatasetError::DeadToken {
                    token: token.clone(),
                });
            }
        }

        let mut scan_order: Vec<String> = entries.keys().cloned().collect();
        scan_order.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Ok(Self {
            entries,
            scan_order,
        })
    }

    /// Emotion-confidence pairs for a token, if it is in the lexicon.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&[(String, f64)]> {
        self.entries.get(token).map(Vec::as_slice)
    }

    /// Keys in scan order: longest first, ties lexicographic.
    pub fn scan_keys(&self) -> impl Iterator<Item = &str> {
        self.scan_order.iter().map(String::as_str)
    }

    /// All (token, emotions) entries, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(String, f64)])> {
        self.entries
            .iter()
            .map(|(token, emotions)| (token.as_str(), emotions.as_slice()))
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

/// Immutable emotion label → importance multiplier table.
#[derive(Debug, Clone)]
pub struct EmotionWeights {
    weights: HashMap<String, f64>,
}

impl EmotionWeights {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            weights: BUILTIN_WEIGHTS
                .iter()
                .map(|&(label, w)| (label.to_string(), w))
                .collect(),
        }
    }

    /// Multiplier for a label; unknown labels get [`DEFAULT_EMOTION_WEIGHT`].
    #[must_use]
    pub fn weight(&self, label: &str) -> f64 {
        self.weights
            .get(label)
            .copied()
            .unwrap_or(DEFAULT_EMOTION_WEIGHT)
    }

    /// All known labels with their multipliers.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(label, &w)| (label.as_str(), w))
    }
}
