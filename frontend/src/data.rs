//! Hard-coded sample content for the landing page. Decorative only.

use crate::analysis::ScoreTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn icon(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Stable => "●",
        }
    }

    // Rising misinformation is bad news, hence red for up.
    pub fn class(self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Stable => "trend-stable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendingTopic {
    pub topic: &'static str,
    pub flagged: u32,
    pub verified: u32,
    pub trend: Trend,
}

impl TrendingTopic {
    pub fn flagged_percent(&self) -> f64 {
        let total = self.flagged + self.verified;
        if total == 0 {
            return 0.0;
        }
        f64::from(self.flagged) / f64::from(total) * 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentAnalysis {
    pub content: &'static str,
    pub score: u8,
    pub minutes_ago: i64,
}

impl RecentAnalysis {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }

    pub fn age_label(&self) -> String {
        let age = chrono::Duration::minutes(self.minutes_ago);
        if age.num_hours() >= 1 {
            format!("{} h ago", age.num_hours())
        } else {
            format!("{} min ago", age.num_minutes())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TRENDING_TOPICS: [TrendingTopic; 4] = [
    TrendingTopic { topic: "Climate Change", flagged: 23, verified: 87, trend: Trend::Up },
    TrendingTopic { topic: "Election News", flagged: 45, verified: 12, trend: Trend::Up },
    TrendingTopic { topic: "Health Information", flagged: 12, verified: 156, trend: Trend::Down },
    TrendingTopic { topic: "Technology", flagged: 8, verified: 203, trend: Trend::Stable },
];

pub const RECENT_ANALYSES: [RecentAnalysis; 4] = [
    RecentAnalysis {
        content: "Scientists announce breakthrough in renewable energy...",
        score: 89,
        minutes_ago: 2,
    },
    RecentAnalysis {
        content: "SHOCKING: Celebrity reveals secret that doctors hate...",
        score: 15,
        minutes_ago: 5,
    },
    RecentAnalysis {
        content: "Local weather forecast shows rain expected tomorrow...",
        score: 95,
        minutes_ago: 8,
    },
    RecentAnalysis {
        content: "Breaking: Unverified claims about market crash...",
        score: 32,
        minutes_ago: 12,
    },
];

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🛡",
        title: "AI-Powered Analysis",
        description: "Advanced NLP models analyze text for misinformation patterns and credibility signals.",
    },
    Feature {
        icon: "👁",
        title: "Deepfake Detection",
        description: "Detects AI-generated images and videos using cutting-edge detection algorithms.",
    },
    Feature {
        icon: "⚡",
        title: "Real-Time Scanning",
        description: "Instant analysis of social media posts as you browse Twitter, Facebook, and Reddit.",
    },
    Feature {
        icon: "📈",
        title: "Trending Analysis",
        description: "Track misinformation trends and see what topics are being flagged most frequently.",
    },
];

pub const SAMPLE_TEXTS: [&str; 3] = [
    "Scientists have discovered that drinking water helps maintain proper hydration levels in the human body.",
    "BREAKING: Aliens have landed in downtown New York and are demanding to speak to our leader immediately!",
    "The stock market experienced a 2% increase today following positive economic indicators and employment data.",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::text::score_text;

    #[test]
    fn flagged_percent_uses_flagged_share_of_total() {
        let election = TRENDING_TOPICS[1];
        assert!((election.flagged_percent() - 45.0 / 57.0 * 100.0).abs() < 1e-9);

        let empty = TrendingTopic { topic: "Nothing", flagged: 0, verified: 0, trend: Trend::Stable };
        assert_eq!(empty.flagged_percent(), 0.0);
    }

    #[test]
    fn recent_analyses_split_into_verified_and_misleading() {
        let verdicts: Vec<&str> = RECENT_ANALYSES.iter().map(|a| a.tier().verdict()).collect();
        assert_eq!(
            verdicts,
            ["Verified content", "Potentially misleading", "Verified content", "Potentially misleading"]
        );
    }

    #[test]
    fn age_labels() {
        assert_eq!(RECENT_ANALYSES[0].age_label(), "2 min ago");
        let old = RecentAnalysis { content: "", score: 50, minutes_ago: 130 };
        assert_eq!(old.age_label(), "2 h ago");
    }

    #[test]
    fn samples_show_three_different_outcomes() {
        let results: Vec<_> = SAMPLE_TEXTS.iter().map(|s| score_text(s)).collect();
        let categories: Vec<&str> = results.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, ["Scientific/Medical", "Extraordinary Claims", "Financial"]);

        // every sample is one long sentence, so each also loses 10 for structure
        let scores: Vec<u8> = results.iter().map(|r| r.credibility_score).collect();
        assert_eq!(scores, [85, 10, 85]);
        assert!(results.iter().all(|r| r.flags.iter().any(|f| f == "Poor sentence structure")));
    }
}
