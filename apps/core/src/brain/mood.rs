//! Mood classification and scoring.
//!
//! Pure lexicon lookups, no model required. The classifier returns exactly one
//! label; categories are tested in a fixed priority order (tired, anxious,
//! happy) so a text carrying both tired and happy markers is always `Tired`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::language::Language;
use super::lexicon::{contains_any, first_match, lexicon};

/// Lowest score the scorer can return
pub const MIN_SCORE: i8 = -3;
/// Highest score the scorer can return
pub const MAX_SCORE: i8 = 3;

/// Coarse emotional classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Tired,
    Anxious,
    Happy,
    Neutral,
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl MoodLabel {
    pub fn label(&self) -> &'static str {
        match self {
            MoodLabel::Tired => "tired",
            MoodLabel::Anxious => "anxious",
            MoodLabel::Happy => "happy",
            MoodLabel::Neutral => "neutral",
        }
    }

    /// Base score before intensifiers
    pub fn base_score(&self) -> i8 {
        match self {
            MoodLabel::Tired => -2,
            MoodLabel::Anxious => -1,
            MoodLabel::Neutral => 0,
            MoodLabel::Happy => 2,
        }
    }
}

/// Result of mood classification, with the marker that decided it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodMatch {
    pub label: MoodLabel,
    pub marker: Option<&'static str>,
}

/// Lexicon-based mood classifier
#[derive(Debug, Default, Clone, Copy)]
pub struct MoodClassifier;

impl MoodClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify `text` into a single mood label
    pub fn classify(&self, text: &str, language: Language) -> MoodLabel {
        self.classify_with_marker(text, language).label
    }

    /// Like [`classify`](Self::classify) but also reports the winning marker
    pub fn classify_with_marker(&self, text: &str, language: Language) -> MoodMatch {
        let text = text.to_lowercase();

        for &(label, markers) in &lexicon(language).moods {
            if let Some(marker) = first_match(&text, markers) {
                return MoodMatch {
                    label,
                    marker: Some(marker),
                };
            }
        }

        MoodMatch {
            label: MoodLabel::Neutral,
            marker: None,
        }
    }
}

/// Maps a label plus intensifiers to a bounded integer score
#[derive(Debug, Default, Clone, Copy)]
pub struct MoodScorer;

impl MoodScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score `text` for `label`, clamped to `[MIN_SCORE, MAX_SCORE]`
    pub fn score(&self, label: MoodLabel, text: &str, language: Language) -> i8 {
        let text = text.to_lowercase();
        let bundle = lexicon(language);

        let mut score = label.base_score();
        if contains_any(&text, bundle.strong_down) {
            score -= 1;
        }
        if contains_any(&text, bundle.strong_up) {
            score += 1;
        }

        score.clamp(MIN_SCORE, MAX_SCORE)
    }
}
