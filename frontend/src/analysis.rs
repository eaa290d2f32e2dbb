//! Credibility analysis behind the landing page demo.
//!
//! Text goes through a keyword heuristic in [`text`]; images are validated
//! and answered with an explicit placeholder in [`image`]. Nothing here
//! touches the DOM, so the whole module is unit tested natively.

use serde::Serialize;
use thiserror::Error;

use crate::config;

pub mod image;
pub mod rules;
pub mod text;

pub use image::ImageFormat;

/// One user submission.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisInput {
    Text(String),
    Image {
        name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub credibility_score: u8,
    pub sources: u32,
    pub category: String,
    pub flags: Vec<String>,
    pub detail: AnalysisDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AnalysisDetail {
    Text(TextDetail),
    Image(ImageDetail),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDetail {
    pub word_count: usize,
    pub sentence_count: usize,
    /// Decorative figure in `70..100`, differs between calls.
    pub readability_score: u8,
}

/// Measurements are `None` until a real detector exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDetail {
    pub format: ImageFormat,
    pub byte_len: usize,
    pub deepfake_detected: Option<bool>,
    pub manipulation_score: Option<u8>,
    pub originality_score: Option<u8>,
}

impl ImageDetail {
    pub fn is_placeholder(&self) -> bool {
        self.deepfake_detected.is_none()
            && self.manipulation_score.is_none()
            && self.originality_score.is_none()
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Enter some text to analyze")]
    EmptyText,
    #[error("Select an image to analyze")]
    NoFileSelected,
    #[error("{mime:?} is not an image type")]
    NotAnImage { mime: String },
    #[error("Unsupported image format, use PNG, JPEG, GIF, WebP or BMP")]
    UnsupportedImage,
    #[error("Image is {size} bytes, the limit is {limit} bytes")]
    ImageTooLarge { size: usize, limit: usize },
}

/// Validates the input and runs the matching analysis.
pub fn analyze(input: &AnalysisInput) -> Result<AnalysisResult, AnalysisError> {
    match input {
        AnalysisInput::Text(content) => {
            if content.trim().is_empty() {
                return Err(AnalysisError::EmptyText);
            }
            Ok(text::score_text(content))
        }
        AnalysisInput::Image { name, mime, bytes } => {
            log::debug!("Validating image {} ({}, {} bytes)", name, mime, bytes.len());
            image::analyze_image(mime, bytes, config::MAX_IMAGE_BYTES)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            ScoreTier::High
        } else if score >= 40 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn color_class(self) -> &'static str {
        match self {
            ScoreTier::High => "score-high",
            ScoreTier::Medium => "score-medium",
            ScoreTier::Low => "score-low",
        }
    }

    pub fn fill_class(self) -> &'static str {
        match self {
            ScoreTier::High => "fill-high",
            ScoreTier::Medium => "fill-medium",
            ScoreTier::Low => "fill-low",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ScoreTier::High => "✔",
            ScoreTier::Medium => "⚠",
            ScoreTier::Low => "✖",
        }
    }

    // The dashboard only distinguishes verified from everything else.
    pub fn verdict(self) -> &'static str {
        match self {
            ScoreTier::High => "Verified content",
            ScoreTier::Medium | ScoreTier::Low => "Potentially misleading",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected_before_scoring() {
        let input = AnalysisInput::Text("   \n\t ".to_string());
        assert_eq!(analyze(&input), Err(AnalysisError::EmptyText));
    }

    #[test]
    fn text_input_is_scored() {
        let input = AnalysisInput::Text(
            "The stock market experienced a 2% increase today following positive economic indicators."
                .to_string(),
        );
        let result = analyze(&input).unwrap();
        assert_eq!(result.category, "Financial");
        assert!(matches!(result.detail, AnalysisDetail::Text(_)));
    }

    #[test]
    fn image_input_goes_through_validation() {
        let input = AnalysisInput::Image {
            name: "notes.txt".to_string(),
            mime: "text/plain".to_string(),
            bytes: b"hello".to_vec(),
        };
        assert_eq!(
            analyze(&input),
            Err(AnalysisError::NotAnImage { mime: "text/plain".to_string() })
        );
    }

    #[test]
    fn tiers_follow_score_thresholds() {
        assert_eq!(ScoreTier::from_score(95), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(70), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(69), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(40), ScoreTier::Medium);
        assert_eq!(ScoreTier::from_score(39), ScoreTier::Low);
        assert_eq!(ScoreTier::Medium.verdict(), "Potentially misleading");
        assert_eq!(ScoreTier::High.color_class(), "score-high");
    }

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let result = AnalysisResult {
            credibility_score: 85,
            sources: 3,
            category: "General News".to_string(),
            flags: vec![],
            detail: AnalysisDetail::Text(TextDetail {
                word_count: 4,
                sentence_count: 1,
                readability_score: 80,
            }),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["credibilityScore"], 85);
        assert_eq!(json["detail"]["kind"], "text");
        assert_eq!(json["detail"]["wordCount"], 4);
    }
}
