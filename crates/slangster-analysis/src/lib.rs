//! Text analysis engines: emoticon emotion scoring, slang detection,
//! formality scoring, sarcasm detection, and conversation flow.
//!
//! Everything here is synchronous and pure over immutable tables built at
//! startup, either from the builtin datasets or from CSV overrides. The
//! server and CLI crates wrap [`AnalysisEngine`] without adding logic.

pub mod analyzer;
pub mod conversation;
pub mod engine;
pub mod error;
pub mod formality;
pub mod lexicon;
pub mod sarcasm;
pub mod scanner;
pub mod sentiment;
pub mod slang;
pub mod types;

pub use analyzer::EmotionAnalyzer;
pub use conversation::{
    ConfidenceTrend, ConversationFlow, EmotionTrend, MessageFlow, OverallTone,
};
pub use engine::{AnalysisEngine, TextReport};
pub use error::DatasetError;
pub use formality::{FormalityAnalyzer, FormalityLevel, FormalityReport};
pub use lexicon::{EmotionWeights, Lexicon, DEFAULT_EMOTION_WEIGHT};
pub use sarcasm::{SarcasmDetector, SarcasmKind, SarcasmReport};
pub use slang::{SlangGlossary, SlangHit};
pub use types::{
    DominantEmotion, EmotionCatalogEntry, EmotionScores, SentimentDistribution, Suggestion,
    TextAnalysis,
};
