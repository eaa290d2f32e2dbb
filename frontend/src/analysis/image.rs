//! Image uploads. No detector is wired up yet, so an accepted image gets a
//! result whose measurements are all absent and which says so in its flags.

use serde::Serialize;

use super::{AnalysisDetail, AnalysisError, AnalysisResult, ImageDetail};
use super::text::BASE_SCORE;

pub const PLACEHOLDER_FLAG: &str = "Image analysis is not available yet: this result is a placeholder";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
    Bmp,
}

impl ImageFormat {
    /// Identifies the format from the leading magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some(ImageFormat::Png),
            [0xFF, 0xD8, 0xFF, ..] => Some(ImageFormat::Jpeg),
            [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some(ImageFormat::Gif),
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some(ImageFormat::Webp),
            [b'B', b'M', ..] => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ImageFormat::Png => "PNG",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Gif => "GIF",
            ImageFormat::Webp => "WebP",
            ImageFormat::Bmp => "BMP",
        }
    }
}

/// Rejects uploads over `max_bytes` before any of their content is read.
pub fn check_size(size: usize, max_bytes: usize) -> Result<(), AnalysisError> {
    if size > max_bytes {
        return Err(AnalysisError::ImageTooLarge { size, limit: max_bytes });
    }
    Ok(())
}

pub fn analyze_image(mime: &str, bytes: &[u8], max_bytes: usize) -> Result<AnalysisResult, AnalysisError> {
    if !mime.starts_with("image/") {
        return Err(AnalysisError::NotAnImage { mime: mime.to_string() });
    }
    if bytes.is_empty() {
        return Err(AnalysisError::NoFileSelected);
    }
    check_size(bytes.len(), max_bytes)?;
    let format = ImageFormat::sniff(bytes).ok_or(AnalysisError::UnsupportedImage)?;

    Ok(AnalysisResult {
        credibility_score: BASE_SCORE as u8,
        sources: 0,
        category: "Image".to_string(),
        flags: vec![PLACEHOLDER_FLAG.to_string()],
        detail: AnalysisDetail::Image(ImageDetail {
            format,
            byte_len: bytes.len(),
            deepfake_detected: None,
            manipulation_score: None,
            originality_score: None,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn sniffs_known_formats() {
        assert_eq!(ImageFormat::sniff(&PNG_HEADER), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::sniff(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::sniff(b"RIFF\x10\0\0\0WEBPVP8 "), Some(ImageFormat::Webp));
        assert_eq!(ImageFormat::sniff(b"BM\x36\0"), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::sniff(b"RIFF\x10\0\0\0WAVEfmt "), None);
        assert_eq!(ImageFormat::sniff(b"%PDF-1.7"), None);
        assert_eq!(ImageFormat::sniff(&[]), None);
    }

    #[test]
    fn accepted_image_is_a_placeholder() {
        let result = analyze_image("image/png", &PNG_HEADER, 1024).unwrap();
        assert_eq!(result.category, "Image");
        assert_eq!(result.sources, 0);
        assert_eq!(result.flags, [PLACEHOLDER_FLAG]);
        match result.detail {
            AnalysisDetail::Image(detail) => {
                assert!(detail.is_placeholder());
                assert_eq!(detail.format, ImageFormat::Png);
                assert_eq!(detail.byte_len, 8);
            }
            other => panic!("expected image detail, got {:?}", other),
        }
    }

    #[test]
    fn placeholder_is_stable_across_calls() {
        let first = analyze_image("image/png", &PNG_HEADER, 1024).unwrap();
        let second = analyze_image("image/png", &PNG_HEADER, 1024).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_non_image_mime() {
        let err = analyze_image("application/pdf", b"%PDF-1.7", 1024).unwrap_err();
        assert_eq!(err, AnalysisError::NotAnImage { mime: "application/pdf".to_string() });
    }

    #[test]
    fn rejects_image_mime_with_foreign_content() {
        let err = analyze_image("image/jpeg", b"#!/bin/sh\necho hi", 1024).unwrap_err();
        assert_eq!(err, AnalysisError::UnsupportedImage);
    }

    #[test]
    fn size_check_allows_exactly_the_limit() {
        assert_eq!(check_size(1024, 1024), Ok(()));
        assert_eq!(
            check_size(3 * 1024 * 1024 * 1024, 1024),
            Err(AnalysisError::ImageTooLarge { size: 3 * 1024 * 1024 * 1024, limit: 1024 })
        );
    }

    #[test]
    fn rejects_empty_and_oversized_files() {
        assert_eq!(analyze_image("image/png", &[], 1024), Err(AnalysisError::NoFileSelected));
        assert_eq!(
            analyze_image("image/png", &PNG_HEADER, 4),
            Err(AnalysisError::ImageTooLarge { size: 8, limit: 4 })
        );
    }
}
