//! Assessment - input and output structures of a mood analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::language::Language;
use super::mood::MoodLabel;
use super::tags::Tag;

/// Mood picked by the user from the fixed selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfReportedMood {
    VeryGood,
    Good,
    Ok,
    Tired,
    Bad,
}

impl fmt::Display for SelfReportedMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SelfReportedMood {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelfReportedMood::VeryGood => "very_good",
            SelfReportedMood::Good => "good",
            SelfReportedMood::Ok => "ok",
            SelfReportedMood::Tired => "tired",
            SelfReportedMood::Bad => "bad",
        }
    }
}

/// One unit of work for the analyzer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisInput {
    pub self_reported_mood: Option<SelfReportedMood>,
    pub free_text: Option<String>,
    pub language_hint: Option<String>,
}

impl AnalysisInput {
    pub fn new(
        self_reported_mood: Option<SelfReportedMood>,
        free_text: Option<String>,
        language_hint: Option<String>,
    ) -> Self {
        Self {
            self_reported_mood,
            free_text,
            language_hint,
        }
    }

    /// Self-report as stored in the log, empty when absent
    pub fn mood_text(&self) -> &'static str {
        self.self_reported_mood.map(|m| m.as_str()).unwrap_or("")
    }

    /// Free text, empty when absent
    pub fn free_text(&self) -> &str {
        self.free_text.as_deref().unwrap_or("")
    }

    /// The text that gets classified: free text first, self-report otherwise
    pub fn analysis_text(&self) -> &str {
        match self.free_text() {
            "" => self.mood_text(),
            text => text,
        }
    }

    /// Self-report and free text joined, used for script-based language detection
    pub fn detection_text(&self) -> String {
        format!("{} {}", self.mood_text(), self.free_text())
            .trim()
            .to_string()
    }
}

/// Result of a mood analysis, as returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub language: Language,
    pub mood_label: MoodLabel,
    pub mood_score: i8,
    pub tags: Vec<Tag>,
    pub comment: String,
}

impl AnalysisResult {
    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Language: {}, Mood: {} ({:+}), Tags: {}",
            self.language,
            self.mood_label,
            self.mood_score,
            super::tags::join_tags(&self.tags)
        )
    }
}
