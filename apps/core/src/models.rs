use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::brain::tags::join_tags;
use crate::brain::{AnalysisInput, AnalysisResult, SelfReportedMood};

/// Body of `POST /analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodRequest {
    /// Mood picked from the selector.
    #[serde(default)]
    pub mood_text: Option<SelfReportedMood>,
    /// What actually happened, in the user's words.
    #[serde(default)]
    pub comment: Option<String>,
    /// Caller-side user identifier.
    #[serde(default)]
    pub user_id: Option<String>,
    /// `ja` or `en`; anything else lets the analyzer detect the language.
    #[serde(default)]
    pub language: Option<String>,
}

impl MoodRequest {
    pub fn to_input(&self) -> AnalysisInput {
        AnalysisInput::new(self.mood_text, self.comment.clone(), self.language.clone())
    }

    /// User id, or `default_user` when missing or blank.
    pub fn user_id_or<'a>(&'a self, default_user: &'a str) -> &'a str {
        match self.user_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => default_user,
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Header of the analysis log, in column order.
pub const RECORD_HEADER: [&str; 8] = [
    "timestamp",
    "user_id",
    "mood_text",
    "comment",
    "mood_label",
    "mood_score",
    "tags",
    "language",
];

/// One row of the analysis log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Local time, ISO-8601 at second precision.
    pub timestamp: String,
    pub user_id: String,
    /// Raw self-report, empty when absent.
    pub mood_text: String,
    /// Raw free text, empty when absent.
    pub comment: String,
    pub mood_label: String,
    pub mood_score: i8,
    /// Tags joined with `|`.
    pub tags: String,
    pub language: String,
}

impl AnalysisRecord {
    pub fn new(
        at: DateTime<Local>,
        user_id: &str,
        input: &AnalysisInput,
        result: &AnalysisResult,
    ) -> Self {
        Self {
            timestamp: at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            user_id: user_id.to_string(),
            mood_text: input.mood_text().to_string(),
            comment: input.free_text().to_string(),
            mood_label: result.mood_label.label().to_string(),
            mood_score: result.mood_score,
            tags: join_tags(&result.tags),
            language: result.language.code().to_string(),
        }
    }
}
