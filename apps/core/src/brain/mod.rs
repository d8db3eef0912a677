//! # Brain Module
//!
//! Fast, lexicon-based mood analysis for Chattomo.
//! Turns a self-reported mood plus free text into a label, a score,
//! topic tags and a reply, in Japanese or English.
//!
//! ## Components
//! - `language`: Language resolution (hint or script detection)
//! - `lexicon`: Static marker tables per language
//! - `mood`: Mood classification and scoring
//! - `tags`: Topic tag extraction
//! - `response`: Templated replies
//! - `assessment`: Input and output structures
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod assessment;
pub mod language;
pub mod lexicon;
pub mod mood;
pub mod response;
pub mod tags;

pub use analyzer::MoodAnalyzer;
pub use assessment::{AnalysisInput, AnalysisResult, SelfReportedMood};
pub use language::Language;
pub use mood::{MoodClassifier, MoodLabel, MoodScorer};
pub use response::ResponseGenerator;
pub use tags::{Tag, TagExtractor};
