//! Lexicon Store.
//!
//! Marker phrases per language and category. Every bundle is a `'static`
//! table built at compile time, so the store is shared freely between
//! request handlers without synchronization.
//!
//! Markers are matched as plain substrings of the lower-cased input text.

use super::language::Language;
use super::mood::MoodLabel;
use super::tags::Tag;

/// A list of marker phrases
pub type Markers = &'static [&'static str];

/// Self-contained set of markers for one language
#[derive(Debug)]
pub struct LexiconBundle {
    /// Mood categories, in classification priority order
    pub moods: [(MoodLabel, Markers); 3],
    /// Tag categories, in extraction order
    pub tags: [(Tag, Markers); 8],
    /// Phrases that push the score down by one
    pub strong_down: Markers,
    /// Phrases that push the score up by one
    pub strong_up: Markers,
}

static JAPANESE: LexiconBundle = LexiconBundle {
    moods: [
        (
            MoodLabel::Tired,
            &["しんど", "疲れ", "つかれ", "だる", "もう無理", "燃え尽き"],
        ),
        (
            MoodLabel::Anxious,
            &["不安", "怖い", "こわい", "心配", "やば", "どうしよう"],
        ),
        (
            MoodLabel::Happy,
            &["嬉し", "うれし", "楽しい", "たのし", "最高", "幸せ", "やった"],
        ),
    ],
    tags: [
        (Tag::Work, &["仕事", "残業", "案件", "客", "プロジェクト"]),
        (Tag::People, &["上司", "先輩", "同僚", "人間関係"]),
        (Tag::Sleep, &["眠", "寝", "不眠", "睡眠"]),
        (Tag::Health, &["体調", "腹", "胃", "頭痛", "腰", "痛い"]),
        (Tag::Money, &["お金", "給料", "収入", "貯金", "生活費"]),
        (Tag::Future, &["将来", "ワーホリ", "海外", "キャリア", "不安"]),
        (Tag::SelfEsteem, &["自信ない", "自己嫌悪", "自分なんて"]),
        (Tag::Love, &["恋", "恋愛", "彼氏", "彼女", "デート", "好き"]),
    ],
    strong_down: &["ほんまに無理", "限界", "最悪", "死ぬほど"],
    strong_up: &["神", "優勝", "最高すぎ", "幸せすぎ"],
};

static ENGLISH: LexiconBundle = LexiconBundle {
    moods: [
        (
            MoodLabel::Tired,
            &["tired", "exhausted", "drained", "burned out", "burnt out", "no energy"],
        ),
        (
            MoodLabel::Anxious,
            &["anxious", "anxiety", "worried", "scared", "afraid", "nervous", "panic"],
        ),
        (
            MoodLabel::Happy,
            &["happy", "excited", "great", "awesome", "fun", "fantastic", "amazing"],
        ),
    ],
    tags: [
        (Tag::Work, &["work", "job", "project", "client", "deadline"]),
        (Tag::People, &["boss", "manager", "coworker", "colleague", "people"]),
        (
            Tag::Sleep,
            &["sleep", "tired", "insomnia", "can't sleep", "fell asleep"],
        ),
        (
            Tag::Health,
            &["health", "headache", "stomach", "back pain", "sick", "ill"],
        ),
        (Tag::Money, &["money", "salary", "income", "bills", "rent"]),
        (
            Tag::Future,
            &["future", "career", "abroad", "visa", "move overseas", "plan"],
        ),
        (
            Tag::SelfEsteem,
            &["hate myself", "no confidence", "worthless", "not good enough"],
        ),
        (
            Tag::Love,
            &["love", "crush", "boyfriend", "girlfriend", "date", "romantic"],
        ),
    ],
    strong_down: &["terrible", "awful", "really bad", "hate this", "breaking down"],
    strong_up: &["amazing", "awesome", "so happy", "super excited", "best day"],
};

/// Returns the bundle governing `language`
pub fn lexicon(language: Language) -> &'static LexiconBundle {
    match language {
        Language::Japanese => &JAPANESE,
        Language::English => &ENGLISH,
    }
}

/// First marker contained in `text`, if any. `text` must already be lower-cased.
pub fn first_match(text: &str, markers: Markers) -> Option<&'static str> {
    markers.iter().copied().find(|marker| text.contains(marker))
}

/// Whether `text` contains any of `markers`. `text` must already be lower-cased.
pub fn contains_any(text: &str, markers: Markers) -> bool {
    first_match(text, markers).is_some()
}
