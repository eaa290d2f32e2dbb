//! The keyword rule table for text scoring. Order matters: category and
//! source overrides are applied top to bottom, last write wins.

/// Facts about a text that the rules look at.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFeatures {
    pub lowered: String,
    pub char_len: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub exclamations: usize,
}

impl TextFeatures {
    pub fn extract(text: &str) -> Self {
        let sentence_count = text
            .split(['.', '!', '?'])
            .filter(|fragment| !fragment.trim().is_empty())
            .count();

        TextFeatures {
            lowered: text.to_lowercase(),
            char_len: text.chars().count(),
            word_count: text.split_whitespace().count(),
            sentence_count,
            exclamations: text.matches('!').count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    AnyKeyword(&'static [&'static str]),
    ExclamationsOver(usize),
    ShorterThan(usize),
    SingleSentenceLongerThan(usize),
}

impl Trigger {
    pub fn fires(&self, features: &TextFeatures) -> bool {
        match *self {
            Trigger::AnyKeyword(words) => words.iter().any(|w| features.lowered.contains(w)),
            Trigger::ExclamationsOver(limit) => features.exclamations > limit,
            Trigger::ShorterThan(len) => features.char_len < len,
            Trigger::SingleSentenceLongerThan(len) => {
                features.sentence_count == 1 && features.char_len > len
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryOverride {
    pub category: &'static str,
    pub sources: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub name: &'static str,
    pub trigger: Trigger,
    pub delta: i32,
    pub flag: Option<&'static str>,
    pub category: Option<CategoryOverride>,
}

pub const RULES: [Rule; 10] = [
    Rule {
        name: "sensational",
        trigger: Trigger::AnyKeyword(&[
            "breaking",
            "urgent",
            "shocking",
            "unbelievable",
            "explosive",
            "bombshell",
        ]),
        delta: -25,
        flag: Some("Sensational language detected"),
        category: None,
    },
    Rule {
        name: "excess_punctuation",
        trigger: Trigger::ExclamationsOver(2),
        delta: -15,
        flag: Some("Excessive use of exclamation marks"),
        category: None,
    },
    Rule {
        name: "extraordinary_claim",
        trigger: Trigger::AnyKeyword(&[
            "alien",
            "ufo",
            "miracle cure",
            "conspiracy",
            "secret government",
            "cover-up",
        ]),
        delta: -40,
        flag: Some("Extraordinary claims without evidence"),
        category: Some(CategoryOverride { category: "Extraordinary Claims", sources: 1 }),
    },
    Rule {
        name: "emotional",
        trigger: Trigger::AnyKeyword(&[
            "fear",
            "panic",
            "terrified",
            "outraged",
            "devastated",
            "furious",
        ]),
        delta: -20,
        flag: Some("Emotional manipulation detected"),
        category: None,
    },
    Rule {
        name: "vague_sourcing",
        trigger: Trigger::AnyKeyword(&[
            "some people say",
            "many believe",
            "sources claim",
            "reportedly",
            "allegedly",
        ]),
        delta: -15,
        flag: Some("Vague or unverified sources"),
        category: None,
    },
    Rule {
        name: "scientific",
        trigger: Trigger::AnyKeyword(&[
            "scientists",
            "study",
            "research",
            "data",
            "evidence",
            "peer-reviewed",
        ]),
        delta: 10,
        flag: None,
        category: Some(CategoryOverride { category: "Scientific/Medical", sources: 5 }),
    },
    Rule {
        name: "political",
        trigger: Trigger::AnyKeyword(&[
            "election",
            "vote",
            "president",
            "government",
            "policy",
            "congress",
        ]),
        delta: 0,
        flag: None,
        category: Some(CategoryOverride { category: "Political", sources: 4 }),
    },
    Rule {
        name: "financial",
        trigger: Trigger::AnyKeyword(&[
            "stock",
            "market",
            "investment",
            "economy",
            "economic",
            "financial",
        ]),
        delta: 0,
        flag: None,
        category: Some(CategoryOverride { category: "Financial", sources: 6 }),
    },
    Rule {
        name: "too_short",
        trigger: Trigger::ShorterThan(50),
        delta: -10,
        flag: Some("Content too brief for proper analysis"),
        category: None,
    },
    Rule {
        name: "weak_structure",
        trigger: Trigger::SingleSentenceLongerThan(100),
        delta: -10,
        flag: Some("Poor sentence structure"),
        category: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_ignore_empty_fragments() {
        let features = TextFeatures::extract("Wait... what?!  Really. ");
        assert_eq!(features.sentence_count, 3);
        assert_eq!(features.exclamations, 1);
        assert_eq!(features.word_count, 3);
    }

    #[test]
    fn keywords_match_case_insensitively_inside_words() {
        let features = TextFeatures::extract("UFOs over the Capitol");
        assert!(Trigger::AnyKeyword(&["ufo"]).fires(&features));
        assert!(!Trigger::AnyKeyword(&["alien"]).fires(&features));
    }

    #[test]
    fn length_is_counted_in_characters() {
        let features = TextFeatures::extract("ééééé");
        assert_eq!(features.char_len, 5);
        assert!(Trigger::ShorterThan(6).fires(&features));
    }

    #[test]
    fn single_sentence_rule_needs_exactly_one_sentence() {
        let long = "a".repeat(120);
        assert!(Trigger::SingleSentenceLongerThan(100).fires(&TextFeatures::extract(&long)));

        let two = format!("{}. {}", "a".repeat(60), "b".repeat(60));
        assert!(!Trigger::SingleSentenceLongerThan(100).fires(&TextFeatures::extract(&two)));
    }

    #[test]
    fn override_rules_come_in_table_order() {
        let categories: Vec<&str> = RULES
            .iter()
            .filter_map(|rule| rule.category.map(|c| c.category))
            .collect();
        assert_eq!(
            categories,
            ["Extraordinary Claims", "Scientific/Medical", "Political", "Financial"]
        );
    }
}
