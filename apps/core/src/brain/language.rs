//! Language resolution.
//!
//! Picks which lexicon bundle and template set govern an analysis.
//! An explicit hint wins; otherwise the text is scanned for Japanese script.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved language of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "en")]
    English,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Language {
    /// Returns the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
        }
    }

    /// Parses a caller-supplied hint. Anything other than `ja`/`en` is ignored.
    pub fn from_hint(hint: &str) -> Option<Self> {
        if hint.eq_ignore_ascii_case("ja") {
            Some(Language::Japanese)
        } else if hint.eq_ignore_ascii_case("en") {
            Some(Language::English)
        } else {
            None
        }
    }

    /// Resolve the language for an analysis.
    pub fn resolve(hint: Option<&str>, text: &str) -> Self {
        if let Some(language) = hint.and_then(Self::from_hint) {
            return language;
        }
        Self::detect(text)
    }

    /// Detect the language from script alone: one Japanese codepoint is enough.
    pub fn detect(text: &str) -> Self {
        if text.chars().any(is_japanese_char) {
            Language::Japanese
        } else {
            Language::English
        }
    }
}

/// Hiragana, Katakana or CJK Unified Ideographs
fn is_japanese_char(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}')
}
