use rand::Rng;

use super::rules::{TextFeatures, RULES};
use super::{AnalysisDetail, AnalysisResult, TextDetail};

pub const BASE_SCORE: i32 = 85;
pub const MIN_SCORE: i32 = 10;
pub const MAX_SCORE: i32 = 95;
const DEFAULT_CATEGORY: &str = "General News";
const DEFAULT_SOURCES: u32 = 3;

pub fn score_text(text: &str) -> AnalysisResult {
    score_text_with(text, &mut rand::thread_rng())
}

/// Scores `text` against [`RULES`]. Everything except the readability
/// figure depends only on the text.
pub fn score_text_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> AnalysisResult {
    let features = TextFeatures::extract(text);

    let mut score = BASE_SCORE;
    let mut category = DEFAULT_CATEGORY;
    let mut sources = DEFAULT_SOURCES;
    let mut flags = Vec::new();

    for rule in RULES.iter().filter(|rule| rule.trigger.fires(&features)) {
        log::trace!("rule {} fired", rule.name);
        score += rule.delta;
        if let Some(flag) = rule.flag {
            flags.push(flag.to_string());
        }
        if let Some(over) = rule.category {
            category = over.category;
            sources = over.sources;
        }
    }

    AnalysisResult {
        credibility_score: score.clamp(MIN_SCORE, MAX_SCORE) as u8,
        sources,
        category: category.to_string(),
        flags,
        detail: AnalysisDetail::Text(TextDetail {
            word_count: features.word_count,
            sentence_count: features.sentence_count,
            readability_score: rng.gen_range(70..100),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn score(text: &str) -> AnalysisResult {
        score_text_with(text, &mut StdRng::seed_from_u64(7))
    }

    fn text_detail(result: &AnalysisResult) -> &TextDetail {
        match &result.detail {
            AnalysisDetail::Text(detail) => detail,
            other => panic!("expected text detail, got {:?}", other),
        }
    }

    #[test]
    fn sensational_alien_story() {
        let result = score("BREAKING: Aliens have landed in downtown New York...");
        assert_eq!(result.category, "Extraordinary Claims");
        assert_eq!(result.sources, 1);
        assert_eq!(result.credibility_score, 20);
        assert_eq!(
            result.flags,
            ["Sensational language detected", "Extraordinary claims without evidence"]
        );
    }

    #[test]
    fn scientific_text_is_capped_at_maximum() {
        let result = score(
            "Scientists have discovered that drinking water helps maintain proper hydration...",
        );
        assert_eq!(result.category, "Scientific/Medical");
        assert_eq!(result.sources, 5);
        assert_eq!(result.credibility_score, 95);
        assert!(result.flags.is_empty());
    }

    #[test]
    fn financial_text_keeps_base_score() {
        let result = score(
            "The stock market experienced a 2% increase today following positive economic indicators.",
        );
        assert_eq!(result.category, "Financial");
        assert_eq!(result.sources, 6);
        assert_eq!(result.credibility_score, 85);
        assert!(result.flags.is_empty());
    }

    #[test]
    fn neutral_text_gets_defaults() {
        let result = score("The town council met on Tuesday to discuss the new library opening hours.");
        assert_eq!(result.category, "General News");
        assert_eq!(result.sources, 3);
        assert_eq!(result.credibility_score, 85);
        assert!(result.flags.is_empty());
    }

    #[test]
    fn later_override_wins() {
        // scientific, then political, then financial
        let result = score("A new study of election data shows the stock price of pollsters rose.");
        assert_eq!(result.category, "Financial");
        assert_eq!(result.sources, 6);
        assert_eq!(result.credibility_score, 95);
    }

    #[test]
    fn short_text_is_always_flagged() {
        for text in ["Hi", "Scientists publish peer-reviewed data.", "URGENT!!!", "ok."] {
            let result = score(text);
            assert!(
                result.flags.iter().any(|f| f == "Content too brief for proper analysis"),
                "{:?} missing brevity flag",
                text
            );
        }
    }

    #[test]
    fn long_single_sentence_is_flagged() {
        let text = "The committee met today and reviewed the plans for the harbour bridge \
                    along with the budget for the coming summer season";
        let result = score(text);
        assert_eq!(result.flags, ["Poor sentence structure"]);
        assert_eq!(result.credibility_score, 75);
    }

    #[test]
    fn every_rule_firing_clamps_to_minimum() {
        let text = "SHOCKING!!! Terrified people panic as sources claim a secret government cover-up!";
        let result = score(text);
        assert_eq!(result.credibility_score, 10);
        assert_eq!(
            result.flags,
            [
                "Sensational language detected",
                "Excessive use of exclamation marks",
                "Extraordinary claims without evidence",
                "Emotional manipulation detected",
                "Vague or unverified sources",
            ]
        );
        // "secret government" also trips the political override
        assert_eq!(result.category, "Political");
    }

    #[test]
    fn score_stays_in_range() {
        let texts = [
            "",
            "!!!!!!!!",
            "alien ufo conspiracy fear panic allegedly breaking",
            "Peer-reviewed research and evidence from scientists support the study data.",
            "Vote in the election. The president spoke. Congress passed the policy.",
        ];
        for text in texts {
            let s = i32::from(score(text).credibility_score);
            assert!((MIN_SCORE..=MAX_SCORE).contains(&s), "{:?} scored {}", text, s);
        }
    }

    #[test]
    fn scoring_is_idempotent() {
        let text = "Many believe the market will crash, reportedly because of fear.";
        let first = score_text(text);
        let second = score_text(text);
        assert_eq!(first.credibility_score, second.credibility_score);
        assert_eq!(first.category, second.category);
        assert_eq!(first.flags, second.flags);
        assert_eq!(text_detail(&first).word_count, text_detail(&second).word_count);
        assert_eq!(text_detail(&first).sentence_count, text_detail(&second).sentence_count);
    }

    #[test]
    fn detail_counts_words_and_sentences() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let result = score_text_with("One two three. Four five! Six?", &mut rng);
            let detail = text_detail(&result);
            assert_eq!(detail.word_count, 6);
            assert_eq!(detail.sentence_count, 3);
            assert!((70..100).contains(&detail.readability_score));
        }
    }
}
