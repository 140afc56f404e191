//! Normalized result types shared by all transformers.

use serde::Serialize;

/// Category of a download link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadType {
    Video,
    Image,
    Audio,
    File,
}

impl DownloadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadType::Video => "video",
            DownloadType::Image => "image",
            DownloadType::Audio => "audio",
            DownloadType::File => "file",
        }
    }

    /// Map a free-form provider type string into the closed set.
    ///
    /// The upstream API is not versioned, so anything unrecognized falls back
    /// to [`DownloadType::File`] instead of propagating an invalid tag.
    pub fn from_raw(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "video" => DownloadType::Video,
            "image" | "photo" => DownloadType::Image,
            "audio" => DownloadType::Audio,
            _ => DownloadType::File,
        }
    }
}

impl std::fmt::Display for DownloadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One directly downloadable media link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadLink {
    pub label: String,
    pub url: String,
    #[serde(rename = "type")]
    pub download_type: DownloadType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl DownloadLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>, download_type: DownloadType) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            download_type,
            quality: None,
            size: None,
        }
    }

    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }
}

/// The normalized output shape every platform converges on.
///
/// Invariant: when `success` is false, `downloads` is empty and `error` is
/// set. When true, `error` is unset (`downloads` may still be empty for
/// preview-only content).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnifiedResult {
    pub success: bool,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub downloads: Vec<DownloadLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UnifiedResult {
    /// Build a successful result with no optional metadata yet.
    pub fn success(platform: impl Into<String>, downloads: Vec<DownloadLink>) -> Self {
        Self {
            success: true,
            platform: platform.into(),
            title: None,
            author: None,
            thumbnail: None,
            downloads,
            error: None,
        }
    }

    /// Build the failure envelope. Downloads are always empty on failure.
    pub fn failure(platform: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            platform: platform.into(),
            title: None,
            author: None,
            thumbnail: None,
            downloads: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_known_types() {
        assert_eq!(DownloadType::from_raw("video"), DownloadType::Video);
        assert_eq!(DownloadType::from_raw("Image"), DownloadType::Image);
        assert_eq!(DownloadType::from_raw("photo"), DownloadType::Image);
        assert_eq!(DownloadType::from_raw("AUDIO"), DownloadType::Audio);
    }

    #[test]
    fn test_from_raw_unknown_falls_back_to_file() {
        assert_eq!(DownloadType::from_raw("gif"), DownloadType::File);
        assert_eq!(DownloadType::from_raw(""), DownloadType::File);
    }

    #[test]
    fn test_failure_envelope_invariant() {
        let result = UnifiedResult::failure("Unknown", "boom");
        assert!(!result.success);
        assert!(result.downloads.is_empty());
        assert_eq!(result.error.as_deref(), Some("boom"));
    }
}
