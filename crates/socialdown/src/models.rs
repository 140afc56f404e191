//! Raw payload shapes returned by the SocialDown API.
//!
//! The upstream API is unversioned and loosely shaped, so every field that is
//! not part of the success discriminator is optional and must be checked
//! before use. A missing `success` flag reads as `false`.

use serde::Deserialize;

/// Response from GET /insta
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstagramResponse {
    #[serde(default)]
    pub success: bool,
    pub urls: Option<Vec<String>>,
    pub error: Option<String>,
}

/// Response from GET /fb
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FacebookResponse {
    #[serde(default)]
    pub success: bool,
    pub hd: Option<String>,
    pub sd: Option<String>,
    pub audio: Option<String>,
    pub error: Option<String>,
}

/// Response from GET /spotify
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpotifyResponse {
    #[serde(default)]
    pub success: bool,
    pub download_url: Option<String>,
    pub name: Option<String>,
    pub artists: Option<Vec<String>>,
    pub image: Option<String>,
    pub error: Option<String>,
}

/// Response from GET /tiktok
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TikTokResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<Vec<TikTokEntry>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TikTokEntry {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(rename = "downloadLinks")]
    pub download_links: Option<Vec<TikTokLink>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TikTokLink {
    pub link: String,
    pub text: Option<String>,
}

/// Response from GET /yt (shared by the mp4 and mp3 format legs)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct YouTubeResponse {
    #[serde(default)]
    pub success: bool,
    pub data: Option<Vec<YouTubeEntry>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct YouTubeEntry {
    pub title: Option<String>,
    #[serde(rename = "downloadUrl")]
    pub download_url: Option<String>,
    #[serde(rename = "fileSize")]
    pub file_size: Option<String>,
    pub format: Option<String>,
}

/// Response from GET /x
#[derive(Debug, Clone, Default, Deserialize)]
pub struct XResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub found: bool,
    pub media: Option<Vec<XMedia>>,
    #[serde(rename = "authorName")]
    pub author_name: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct XMedia {
    pub url: String,
    #[serde(rename = "type")]
    pub media_type: String,
}

/// Response from GET /mediafire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaFireResponse {
    #[serde(default)]
    pub success: bool,
    pub download: Option<String>,
    pub name: Option<String>,
    pub size: Option<String>,
    pub error: Option<String>,
}

/// Response from GET /pinterest
///
/// This endpoint signals success with `source: "pinterest"` instead of a
/// boolean flag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PinterestResponse {
    pub source: Option<String>,
    pub title: Option<String>,
    pub medias: Option<Vec<PinterestMedia>>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PinterestMedia {
    pub url: String,
    pub quality: String,
    pub extension: String,
    #[serde(rename = "formattedSize")]
    pub formatted_size: Option<String>,
}

/// Output format requested from the /yt endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YtFormat {
    Mp4,
    Mp3,
}

impl YtFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            YtFormat::Mp4 => "mp4",
            YtFormat::Mp3 => "mp3",
        }
    }
}
