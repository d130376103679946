//! One engine bundling every analyzer behind a single handle.

use std::path::Path;

use serde::Serialize;

use crate::analyzer::EmotionAnalyzer;
use crate::conversation::{self, ConversationFlow};
use crate::formality::{FormalityAnalyzer, FormalityReport};
use crate::lexicon::{EmotionWeights, Lexicon};
use crate::sarcasm::{SarcasmDetector, SarcasmReport};
use crate::slang::{SlangGlossary, SlangHit};

/// Combined slang, formality, and sarcasm report for one input.
#[derive(Debug, Clone, Serialize)]
pub struct TextReport {
    pub slang: Vec<SlangHit>,
    pub formality: FormalityReport,
    pub sarcasm: SarcasmReport,
}

/// All analyzers behind one immutable handle.
///
/// Built once at startup and shared; every analysis method borrows
/// immutably, so an `Arc<AnalysisEngine>` serves concurrent callers
/// without locking.
#[derive(Debug)]
pub struct AnalysisEngine {
    emotions: EmotionAnalyzer,
    slang: SlangGlossary,
    formality: FormalityAnalyzer,
    sarcasm: SarcasmDetector,
}

impl AnalysisEngine {
    /// Engine over the builtin datasets.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            emotions: EmotionAnalyzer::builtin(),
            slang: SlangGlossary::builtin(),
            formality: FormalityAnalyzer::new(),
            sarcasm: SarcasmDetector::new(),
        }
    }

    /// Engine with optional CSV dataset overrides.
    ///
    /// A missing or unreadable override logs a warning and falls back to
    /// the builtin dataset; the engine always comes up.
    #[must_use]
    pub fn with_datasets(lexicon_path: Option<&Path>, glossary_path: Option<&Path>) -> Self {
        let lexicon = match lexicon_path {
            Some(path) => match Lexicon::from_csv(path) {
                Ok(lexicon) => lexicon,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        path = %path.display(),
                        "failed to load emoticon lexicon, using builtin"
                    );
                    Lexicon::builtin()
                }
            },
            None => Lexicon::builtin(),
        };

        let slang = match glossary_path {
            Some(path) => match SlangGlossary::from_csv(path) {
                Ok(glossary) => glossary,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        path = %path.display(),
                        "failed to load slang glossary, using builtin"
                    );
                    SlangGlossary::builtin()
                }
            },
            None => SlangGlossary::builtin(),
        };

        Self {
            emotions: EmotionAnalyzer::new(lexicon, EmotionWeights::builtin()),
            slang,
            formality: FormalityAnalyzer::new(),
            sarcasm: SarcasmDetector::new(),
        }
    }

    #[must_use]
    pub fn emotions(&self) -> &EmotionAnalyzer {
        &self.emotions
    }

    #[must_use]
    pub fn slang(&self) -> &SlangGlossary {
        &self.slang
    }

    #[must_use]
    pub fn formality(&self) -> &FormalityAnalyzer {
        &self.formality
    }

    #[must_use]
    pub fn sarcasm(&self) -> &SarcasmDetector {
        &self.sarcasm
    }

    /// Slang, formality, and sarcasm in one pass.
    #[must_use]
    pub fn analyze_text(&self, text: &str) -> TextReport {
        TextReport {
            slang: self.slang.detect(text),
            formality: self.formality.analyze(text),
            sarcasm: self.sarcasm.detect(text),
        }
    }

    /// Emotional flow across an ordered message list.
    #[must_use]
    pub fn conversation_flow(&self, messages: &[String]) -> ConversationFlow {
        conversation::analyze_conversation(&self.emotions, messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_engine_serves_every_analyzer() {
        let engine = AnalysisEngine::builtin();
        assert!(!engine.emotions().lexicon().is_empty());
        assert!(!engine.slang().is_empty());

        let report = engine.analyze_text("ngl this is bussin fr 😊");
        assert_eq!(report.slang.len(), 3);
        assert!(!report.sarcasm.detected);
    }

    #[test]
    fn missing_dataset_paths_fall_back_to_builtin() {
        let bogus = Path::new("/nonexistent/lexicon.csv");
        let engine = AnalysisEngine::with_datasets(Some(bogus), Some(bogus));
        assert_eq!(
            engine.emotions().lexicon().len(),
            EmotionAnalyzer::builtin().lexicon().len()
        );
        assert!(!engine.slang().is_empty());
    }

    #[test]
    fn no_overrides_use_builtin_datasets() {
        let engine = AnalysisEngine::with_datasets(None, None);
        let analysis = engine.emotions().analyze("😊");
        assert_eq!(
            analysis.dominant_emotion.map(|d| d.emotion),
            Some("happy".to_string())
        );
    }

    #[test]
    fn combined_report_covers_all_dimensions() {
        let engine = AnalysisEngine::builtin();
        let report = engine.analyze_text("Living the dream, deadass");
        assert!(report.sarcasm.detected);
        assert_eq!(report.slang[0].term, "deadass");
        assert!(report.formality.word_count > 0);
    }

    #[test]
    fn conversation_flow_runs_through_the_engine() {
        let engine = AnalysisEngine::builtin();
        let flow = engine.conversation_flow(&["😊".to_string(), "😊".to_string()]);
        assert_eq!(flow.timeline.len(), 2);
    }
}
