//! Reply generation.
//!
//! A small decision tree over the mood label, refined by one tag per label.
//! Each language has its own template set; the Japanese one is written in a
//! casual Kansai voice and is not a translation of the English one.

use super::language::Language;
use super::mood::MoodLabel;
use super::tags::Tag;

/// Which template a reply was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    TiredWork,
    Tired,
    AnxiousFuture,
    Anxious,
    HappyLove,
    Happy,
    Neutral,
}

impl Template {
    /// Pick the template for a label and its tags
    pub fn select(label: MoodLabel, tags: &[Tag]) -> Self {
        match label {
            MoodLabel::Tired if tags.contains(&Tag::Work) => Template::TiredWork,
            MoodLabel::Tired => Template::Tired,
            MoodLabel::Anxious if tags.contains(&Tag::Future) => Template::AnxiousFuture,
            MoodLabel::Anxious => Template::Anxious,
            MoodLabel::Happy if tags.contains(&Tag::Love) => Template::HappyLove,
            MoodLabel::Happy => Template::Happy,
            MoodLabel::Neutral => Template::Neutral,
        }
    }

    pub fn text(&self, language: Language) -> &'static str {
        match language {
            Language::Japanese => self.japanese(),
            Language::English => self.english(),
        }
    }

    fn japanese(&self) -> &'static str {
        match self {
            Template::TiredWork => "今日も仕事おつかれさま。かなり頑張りすぎてそうやから、今日は“回復デー”って決めてもいいレベルやで。",
            Template::Tired => "だいぶ疲れてそうやね…。まずは自分を責めずに、休む時間をちゃんと確保しよ。",
            Template::AnxiousFuture => "将来のこと、不安になるのめっちゃ分かる。でも全部を一気に解こうとせずに、今できる一歩だけ一緒に決めよ。",
            Template::Anxious => "不安が大きそうやね…。今すぐコントロールできることと、いったん手放していいことを分けてみよっか。",
            Template::HappyLove => "なんか恋バナの匂いがするぞ…？その嬉しい気持ち、ちゃんと覚えとこ。あとで振り返ったときのエネルギーになるからね。",
            Template::Happy => "いい感じやん！何が良かったのか一言メモしておくと、あとで“再現レシピ”として使えるで。",
            Template::Neutral => "了解。今の状態をちゃんとことばにできてるのがすでに強みやで。もう少しだけ状況教えてくれる？",
        }
    }

    fn english(&self) -> &'static str {
        match self {
            Template::TiredWork => concat!(
                "You sound really drained from work today. ",
                "It's totally okay to treat today as a recovery day instead of pushing yourself harder."
            ),
            Template::Tired => concat!(
                "You seem pretty exhausted. Don't blame yourself for feeling this way. ",
                "Let’s make rest your first priority today."
            ),
            Template::AnxiousFuture => concat!(
                "It's completely natural to feel anxious about the future. ",
                "Instead of solving everything at once, let's pick just one small step you can take now."
            ),
            Template::Anxious => concat!(
                "I can feel your anxiety. Let's separate what you can control right now ",
                "from what you can safely put aside for later."
            ),
            Template::HappyLove => concat!(
                "Ooh, this sounds like romance energy. 😏 ",
                "Try to capture what made you feel this happy—it's a great memory to come back to later."
            ),
            Template::Happy => concat!(
                "Love this mood! If you note down what went well today, ",
                "it becomes a recipe you can reuse on tough days."
            ),
            Template::Neutral => concat!(
                "Got it. The fact that you can put your current state into words is already a strength. ",
                "If you’re okay with it, tell me a bit more so I can understand you better."
            ),
        }
    }
}

/// Builds the reply shown to the user
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseGenerator;

impl ResponseGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a reply. `_score` does not influence the template choice yet.
    pub fn generate(&self, label: MoodLabel, _score: i8, tags: &[Tag], language: Language) -> String {
        Template::select(label, tags).text(language).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_selection() {
        assert_eq!(Template::select(MoodLabel::Tired, &[Tag::Work]), Template::TiredWork);
        assert_eq!(Template::select(MoodLabel::Tired, &[Tag::Sleep]), Template::Tired);
        assert_eq!(
            Template::select(MoodLabel::Anxious, &[Tag::Money, Tag::Future]),
            Template::AnxiousFuture
        );
        assert_eq!(Template::select(MoodLabel::Anxious, &[Tag::General]), Template::Anxious);
        assert_eq!(Template::select(MoodLabel::Happy, &[Tag::Love]), Template::HappyLove);
        assert_eq!(Template::select(MoodLabel::Happy, &[Tag::Work]), Template::Happy);
        assert_eq!(Template::select(MoodLabel::Neutral, &[Tag::Love]), Template::Neutral);
    }

    #[test]
    fn test_tag_refinement_is_per_label() {
        // `work` only refines tired replies
        assert_eq!(Template::select(MoodLabel::Anxious, &[Tag::Work]), Template::Anxious);
        assert_eq!(Template::select(MoodLabel::Happy, &[Tag::Future]), Template::Happy);
    }

    #[test]
    fn test_score_does_not_change_reply() {
        let generator = ResponseGenerator::new();
        let low = generator.generate(MoodLabel::Tired, -3, &[Tag::Work], Language::English);
        let high = generator.generate(MoodLabel::Tired, 3, &[Tag::Work], Language::English);
        assert_eq!(low, high);
    }

    #[test]
    fn test_languages_have_distinct_templates() {
        let generator = ResponseGenerator::new();
        let en = generator.generate(MoodLabel::Neutral, 0, &[Tag::General], Language::English);
        let ja = generator.generate(MoodLabel::Neutral, 0, &[Tag::General], Language::Japanese);
        assert!(en.starts_with("Got it."));
        assert!(ja.starts_with("了解。"));
    }

    #[test]
    fn test_english_templates_join_cleanly() {
        let reply = Template::TiredWork.text(Language::English);
        assert!(reply.contains("today. It's totally okay"));
    }
}
