//! Topic tag extraction.
//!
//! Unlike mood labels, tags are not exclusive: every category with a marker in
//! the text contributes one tag. Output order follows the category order,
//! never the position of the marker in the text.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::language::Language;
use super::lexicon::{contains_any, lexicon};

/// Topical tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    Work,
    People,
    Sleep,
    Health,
    Money,
    Future,
    SelfEsteem,
    Love,
    /// Fallback when no category matched
    General,
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Tag {
    /// The eight lexicon-backed categories, in extraction order
    pub const CATEGORIES: [Tag; 8] = [
        Tag::Work,
        Tag::People,
        Tag::Sleep,
        Tag::Health,
        Tag::Money,
        Tag::Future,
        Tag::SelfEsteem,
        Tag::Love,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tag::Work => "work",
            Tag::People => "people",
            Tag::Sleep => "sleep",
            Tag::Health => "health",
            Tag::Money => "money",
            Tag::Future => "future",
            Tag::SelfEsteem => "self-esteem",
            Tag::Love => "love",
            Tag::General => "general",
        }
    }
}

/// Joins tags the way the analysis log stores them (`work|sleep`)
pub fn join_tags(tags: &[Tag]) -> String {
    tags.iter().map(Tag::label).collect::<Vec<_>>().join("|")
}

/// Extracts topic tags from text
#[derive(Debug, Default, Clone, Copy)]
pub struct TagExtractor;

impl TagExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract tags from `text`. Never returns an empty list.
    pub fn extract(&self, text: &str, language: Language) -> Vec<Tag> {
        let text = text.to_lowercase();

        let tags: Vec<Tag> = lexicon(language)
            .tags
            .iter()
            .filter(|(_, markers)| contains_any(&text, *markers))
            .map(|(tag, _)| *tag)
            .collect();

        if tags.is_empty() {
            vec![Tag::General]
        } else {
            tags
        }
    }
}
