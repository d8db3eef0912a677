//! Mood Analyzer - Main orchestrator for the Brain module.
//!
//! Runs language resolution first, then classification, scoring, tag
//! extraction and reply generation over the same analysis text.
//! Every stage is a pure function over the static lexicon, so a single
//! analyzer can be shared across any number of concurrent requests.

use tracing::debug;

use super::assessment::{AnalysisInput, AnalysisResult};
use super::language::Language;
use super::mood::{MoodClassifier, MoodScorer};
use super::response::ResponseGenerator;
use super::tags::TagExtractor;

/// Main analyzer that orchestrates all analysis components
#[derive(Debug, Default, Clone, Copy)]
pub struct MoodAnalyzer {
    classifier: MoodClassifier,
    scorer: MoodScorer,
    tag_extractor: TagExtractor,
    responder: ResponseGenerator,
}

impl MoodAnalyzer {
    /// Create a new analyzer
    pub fn new() -> Self {
        Self {
            classifier: MoodClassifier::new(),
            scorer: MoodScorer::new(),
            tag_extractor: TagExtractor::new(),
            responder: ResponseGenerator::new(),
        }
    }

    /// Analyze one input and produce an assessment
    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        // 1. Resolve language (hint, else script detection over all user text)
        let language = Language::resolve(input.language_hint.as_deref(), &input.detection_text());

        let text = input.analysis_text();

        // 2. Classify
        let mood = self.classifier.classify_with_marker(text, language);

        // 3. Score
        let score = self.scorer.score(mood.label, text, language);

        // 4. Tags
        let tags = self.tag_extractor.extract(text, language);

        // 5. Reply
        let comment = self.responder.generate(mood.label, score, &tags, language);

        let result = AnalysisResult {
            language,
            mood_label: mood.label,
            mood_score: score,
            tags,
            comment,
        };

        debug!(marker = ?mood.marker, "{}", result.summary());

        result
    }
}

#[cfg(test)]
impl MoodAnalyzer {
    /// Analyze a bare piece of text with no self-report or hint
    pub fn analyze_text(&self, text: &str) -> AnalysisResult {
        self.analyze(&AnalysisInput::new(None, Some(text.to_string()), None))
    }
}
