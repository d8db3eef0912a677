//! Brain Module Tests
//!
//! Cross-component tests for language resolution, mood classification,
//! scoring, tag extraction and the analyzer orchestrator.

use crate::brain::{
    AnalysisInput, Language, MoodAnalyzer, MoodClassifier, MoodLabel, MoodScorer,
    ResponseGenerator, SelfReportedMood, Tag, TagExtractor,
};

const SAMPLE_TEXTS: &[&str] = &[
    "",
    "I'm so exhausted from work but had an awesome meeting",
    "worried about my visa and rent",
    "Best day ever with my girlfriend, so happy!",
    "My boss is terrible and I can't sleep",
    "nothing to report",
    "今日は仕事でしんどかったけど最高やった",
    "将来が不安で眠れない",
    "彼氏とデートして幸せすぎ",
    "上司が最悪、頭痛もする",
    "自分なんて…自信ない",
    "ok",
];

#[cfg(test)]
mod language_tests {
    use super::*;

    #[test]
    fn test_unsupported_hints_fall_back_to_script() {
        for hint in [None, Some("fr"), Some("japanese"), Some(" en"), Some("")] {
            assert_eq!(Language::resolve(hint, "hello there"), Language::English);
            assert_eq!(Language::resolve(hint, "hello ちゃん"), Language::Japanese);
            assert_eq!(Language::resolve(hint, "中"), Language::Japanese);
        }
    }

    #[test]
    fn test_script_ranges_boundaries() {
        assert_eq!(Language::detect("\u{3040}"), Language::Japanese);
        assert_eq!(Language::detect("\u{30FF}"), Language::Japanese);
        assert_eq!(Language::detect("\u{9FFF}"), Language::Japanese);
        // Hangul and fullwidth punctuation are not Japanese script
        assert_eq!(Language::detect("안녕"), Language::English);
        assert_eq!(Language::detect("！？"), Language::English);
    }
}

#[cfg(test)]
mod classifier_tests {
    use super::*;

    #[test]
    fn test_tired_priority_over_happy() {
        let classifier = MoodClassifier::new();
        let cases = [
            ("awesome day but totally drained", Language::English),
            ("happy yet burnt out", Language::English),
            ("楽しいけど疲れた", Language::Japanese),
            ("最高やけどだるい", Language::Japanese),
        ];
        for (text, language) in cases {
            assert_eq!(
                classifier.classify(text, language),
                MoodLabel::Tired,
                "Expected Tired for '{}'",
                text
            );
        }
    }

    #[test]
    fn test_classify_is_pure() {
        let classifier = MoodClassifier::new();
        for text in SAMPLE_TEXTS {
            for language in [Language::English, Language::Japanese] {
                let first = classifier.classify(text, language);
                let second = classifier.classify(text, language);
                assert_eq!(first, second);
            }
        }
    }

    #[test]
    fn test_substring_matching() {
        let classifier = MoodClassifier::new();
        // Markers match inside longer words
        assert_eq!(classifier.classify("funny movie", Language::English), MoodLabel::Happy);
        assert_eq!(classifier.classify("PANICKING", Language::English), MoodLabel::Anxious);
    }
}

#[cfg(test)]
mod scorer_tests {
    use super::*;

    #[test]
    fn test_score_bounds_for_all_samples() {
        let classifier = MoodClassifier::new();
        let scorer = MoodScorer::new();
        for text in SAMPLE_TEXTS {
            for language in [Language::English, Language::Japanese] {
                let label = classifier.classify(text, language);
                let score = scorer.score(label, text, language);
                assert!((-3..=3).contains(&score), "score {} out of range for '{}'", score, text);
            }
        }
    }

    #[test]
    fn test_intensifiers_are_language_specific() {
        let scorer = MoodScorer::new();
        assert_eq!(scorer.score(MoodLabel::Neutral, "最悪", Language::English), 0);
        assert_eq!(scorer.score(MoodLabel::Neutral, "最悪", Language::Japanese), -1);
        assert_eq!(scorer.score(MoodLabel::Neutral, "awesome", Language::Japanese), 0);
        assert_eq!(scorer.score(MoodLabel::Neutral, "awesome", Language::English), 1);
    }
}

#[cfg(test)]
mod tag_tests {
    use super::*;

    #[test]
    fn test_tags_never_empty_and_distinct() {
        let extractor = TagExtractor::new();
        for text in SAMPLE_TEXTS {
            for language in [Language::English, Language::Japanese] {
                let tags = extractor.extract(text, language);
                assert!(!tags.is_empty());

                let mut deduped = tags.clone();
                deduped.dedup();
                assert_eq!(tags, deduped, "duplicate tags for '{}'", text);

                for tag in &tags {
                    assert!(Tag::CATEGORIES.contains(tag) || *tag == Tag::General);
                }
                if tags.contains(&Tag::General) {
                    assert_eq!(tags, vec![Tag::General]);
                }
            }
        }
    }

    #[test]
    fn test_multiple_tags_english() {
        let extractor = TagExtractor::new();
        let tags = extractor.extract("worried about my visa and rent", Language::English);
        assert_eq!(tags, vec![Tag::Money, Tag::Future]);
    }

    #[test]
    fn test_self_esteem_and_love_japanese() {
        let extractor = TagExtractor::new();
        assert_eq!(
            extractor.extract("自分なんて…自信ない", Language::Japanese),
            vec![Tag::SelfEsteem]
        );
        assert_eq!(
            extractor.extract("彼氏とデートして幸せすぎ", Language::Japanese),
            vec![Tag::Love]
        );
    }
}

#[cfg(test)]
mod analyzer_tests {
    use super::*;

    #[test]
    fn test_anxious_future_reply() {
        let analyzer = MoodAnalyzer::new();
        let result = analyzer.analyze_text("worried about my visa and rent");

        assert_eq!(result.mood_label, MoodLabel::Anxious);
        assert_eq!(result.mood_score, -1);
        assert!(result.comment.starts_with("It's completely natural to feel anxious about the future."));
    }

    #[test]
    fn test_happy_love_reply_japanese() {
        let analyzer = MoodAnalyzer::new();
        let result = analyzer.analyze_text("彼氏とデートして幸せすぎ");

        assert_eq!(result.language, Language::Japanese);
        assert_eq!(result.mood_label, MoodLabel::Happy);
        assert_eq!(result.mood_score, 3);
        assert!(result.comment.starts_with("なんか恋バナの匂いがするぞ"));
    }

    #[test]
    fn test_japanese_self_report_with_english_text() {
        let analyzer = MoodAnalyzer::new();
        // Language comes from all user text; classification only from the free text
        let input = AnalysisInput::new(
            Some(SelfReportedMood::Good),
            Some("great day 仕事".to_string()),
            None,
        );
        let result = analyzer.analyze(&input);

        assert_eq!(result.language, Language::Japanese);
        assert_eq!(result.mood_label, MoodLabel::Neutral);
        assert_eq!(result.tags, vec![Tag::Work]);
    }

    #[test]
    fn test_generator_matches_analyzer() {
        let analyzer = MoodAnalyzer::new();
        let generator = ResponseGenerator::new();
        for text in SAMPLE_TEXTS {
            let result = analyzer.analyze_text(text);
            let expected =
                generator.generate(result.mood_label, result.mood_score, &result.tags, result.language);
            assert_eq!(result.comment, expected);
        }
    }

    #[test]
    fn test_concurrent_analysis() {
        let analyzer = MoodAnalyzer::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(move || {
                    analyzer.analyze_text("I'm so exhausted from work but had an awesome meeting")
                })
            })
            .collect();

        for handle in handles {
            let result = handle.join().expect("analysis thread panicked");
            assert_eq!(result.mood_label, MoodLabel::Tired);
            assert_eq!(result.mood_score, -1);
        }
    }
}
