//! Pure per-platform transformers from raw payloads to [`UnifiedResult`].
//!
//! Every function here is a fallible pure mapping: no I/O, no state, and
//! calling one twice on the same payload yields the same output. Failure
//! surfaces the provider's own error message when it sent one, otherwise a
//! platform-specific fallback.

use socialdown::{
    FacebookResponse, InstagramResponse, MediaFireResponse, PinterestResponse, SpotifyResponse,
    TikTokResponse, XResponse, YouTubeResponse,
};

use crate::error::ResolveError;
use crate::models::{DownloadLink, DownloadType, UnifiedResult};
use crate::platform::Platform;

type Result<T> = std::result::Result<T, ResolveError>;

/// Provider message if present, else the platform's fixed fallback.
fn transform_error(provider_message: Option<&String>, fallback: &str) -> ResolveError {
    ResolveError::Transform(
        provider_message
            .cloned()
            .unwrap_or_else(|| fallback.to_string()),
    )
}

pub fn instagram(data: &InstagramResponse) -> Result<UnifiedResult> {
    let urls = data
        .urls
        .as_deref()
        .filter(|urls| data.success && !urls.is_empty())
        .ok_or_else(|| transform_error(data.error.as_ref(), "No media found"))?;

    let downloads = urls
        .iter()
        .enumerate()
        .map(|(i, url)| {
            // The provider conflates images and videos in one list.
            DownloadLink::new(format!("Download Media {}", i + 1), url, DownloadType::Video)
        })
        .collect();

    Ok(UnifiedResult::success(Platform::Instagram.display_name(), downloads)
        .with_title("Instagram Post"))
}

pub fn facebook(data: &FacebookResponse) -> Result<UnifiedResult> {
    if !data.success {
        return Err(transform_error(data.error.as_ref(), "No media found"));
    }

    let mut downloads = Vec::new();
    if let Some(hd) = &data.hd {
        downloads.push(DownloadLink::new("HD Video", hd, DownloadType::Video).with_quality("HD"));
    }
    if let Some(sd) = &data.sd {
        downloads.push(DownloadLink::new("SD Video", sd, DownloadType::Video).with_quality("SD"));
    }
    if let Some(audio) = &data.audio {
        downloads.push(DownloadLink::new("Audio Only", audio, DownloadType::Audio));
    }

    if downloads.is_empty() {
        return Err(ResolveError::Transform(
            "No download links returned".to_string(),
        ));
    }

    Ok(UnifiedResult::success(Platform::Facebook.display_name(), downloads)
        .with_title("Facebook Video"))
}

pub fn spotify(data: &SpotifyResponse) -> Result<UnifiedResult> {
    let download_url = data
        .download_url
        .as_ref()
        .filter(|_| data.success)
        .ok_or_else(|| transform_error(data.error.as_ref(), "No track found"))?;

    let downloads = vec![DownloadLink::new(
        "Download MP3",
        download_url,
        DownloadType::Audio,
    )];

    let mut result = UnifiedResult::success(Platform::Spotify.display_name(), downloads)
        .with_title(data.name.clone().unwrap_or_else(|| "Spotify Track".to_string()));
    if let Some(artists) = &data.artists {
        result = result.with_author(artists.join(", "));
    }
    if let Some(image) = &data.image {
        result = result.with_thumbnail(image);
    }
    Ok(result)
}

pub fn tiktok(data: &TikTokResponse) -> Result<UnifiedResult> {
    let video = data
        .data
        .as_ref()
        .and_then(|entries| entries.first())
        .filter(|_| data.success)
        .ok_or_else(|| transform_error(data.error.as_ref(), "No video found"))?;

    let links = video
        .download_links
        .as_ref()
        .ok_or_else(|| ResolveError::Transform("No download links found".to_string()))?;

    let downloads = links
        .iter()
        .map(|link| {
            DownloadLink::new(
                link.text.clone().unwrap_or_else(|| "Download".to_string()),
                &link.link,
                DownloadType::Video,
            )
        })
        .collect();

    let mut result = UnifiedResult::success(Platform::TikTok.display_name(), downloads)
        .with_title(video.title.clone().unwrap_or_else(|| "TikTok Video".to_string()));
    if let Some(thumbnail) = &video.thumbnail {
        result = result.with_thumbnail(thumbnail);
    }
    Ok(result)
}

pub fn x(data: &XResponse) -> Result<UnifiedResult> {
    let media = data
        .media
        .as_deref()
        .filter(|media| data.success && data.found && !media.is_empty())
        .ok_or_else(|| transform_error(data.error.as_ref(), "Tweet not found"))?;

    let downloads = media
        .iter()
        .enumerate()
        .map(|(i, item)| {
            DownloadLink::new(
                format!("Download {} {}", item.media_type, i + 1),
                &item.url,
                DownloadType::from_raw(&item.media_type),
            )
        })
        .collect();

    let author = data.author_name.as_deref().unwrap_or("User");
    Ok(UnifiedResult::success(Platform::X.display_name(), downloads)
        .with_title(format!("Post by {}", author)))
}

pub fn mediafire(data: &MediaFireResponse) -> Result<UnifiedResult> {
    let download = data
        .download
        .as_ref()
        .filter(|_| data.success)
        .ok_or_else(|| transform_error(data.error.as_ref(), "File not found"))?;

    let size = data.size.as_deref().unwrap_or("Unknown");
    let downloads = vec![DownloadLink::new(
        format!("Download File ({})", size),
        download,
        DownloadType::File,
    )];

    Ok(UnifiedResult::success(Platform::MediaFire.display_name(), downloads)
        .with_title(data.name.clone().unwrap_or_else(|| "File".to_string())))
}

pub fn pinterest(data: &PinterestResponse) -> Result<UnifiedResult> {
    // This endpoint signals success with source == "pinterest".
    let medias = data
        .medias
        .as_deref()
        .filter(|medias| data.source.as_deref() == Some("pinterest") && !medias.is_empty())
        .ok_or_else(|| transform_error(data.error.as_ref(), "Pin not found"))?;

    let downloads = medias
        .iter()
        .map(|media| {
            let download_type = if media.extension == "mp4" {
                DownloadType::Video
            } else {
                DownloadType::Image
            };
            let mut link = DownloadLink::new(
                format!("Download {} ({})", media.quality, media.extension),
                &media.url,
                download_type,
            );
            if let Some(size) = &media.formatted_size {
                link = link.with_size(size);
            }
            link
        })
        .collect();

    Ok(UnifiedResult::success(Platform::Pinterest.display_name(), downloads)
        .with_title(data.title.clone().unwrap_or_else(|| "Pinterest Pin".to_string())))
}

/// Merge the two YouTube format legs into one result.
///
/// Each leg has already settled independently; a `None` here means that leg's
/// fetch failed outright. A leg is valid when the provider reported success
/// and returned at least one data entry.
pub fn youtube_merged(
    mp4: Option<&YouTubeResponse>,
    mp3: Option<&YouTubeResponse>,
) -> Result<UnifiedResult> {
    fn valid_entry(data: Option<&YouTubeResponse>) -> Option<&socialdown::YouTubeEntry> {
        data.filter(|r| r.success)
            .and_then(|r| r.data.as_ref())
            .and_then(|entries| entries.first())
    }

    let mp4_entry = valid_entry(mp4);
    let mp3_entry = valid_entry(mp3);

    let meta = mp4_entry.or(mp3_entry).ok_or_else(|| {
        // Fallback chain: MP4 error, then MP3 error, then generic.
        let message = mp4
            .and_then(|r| r.error.clone())
            .or_else(|| mp3.and_then(|r| r.error.clone()))
            .unwrap_or_else(|| "Video not found".to_string());
        ResolveError::Transform(message)
    })?;

    let mut downloads = Vec::new();
    if let Some(entry) = mp4_entry {
        if let Some(url) = &entry.download_url {
            downloads.push(DownloadLink::new(
                format_label("Download Video (MP4)", entry.file_size.as_deref()),
                url,
                DownloadType::Video,
            ));
        }
    }
    if let Some(entry) = mp3_entry {
        if let Some(url) = &entry.download_url {
            downloads.push(DownloadLink::new(
                format_label("Download Audio (MP3)", entry.file_size.as_deref()),
                url,
                DownloadType::Audio,
            ));
        }
    }

    Ok(UnifiedResult::success(Platform::YouTube.display_name(), downloads)
        .with_title(meta.title.clone().unwrap_or_else(|| "YouTube Video".to_string())))
}

fn format_label(base: &str, file_size: Option<&str>) -> String {
    match file_size {
        Some(size) => format!("{} ({})", base, size),
        None => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use socialdown::{
        FacebookResponse, InstagramResponse, MediaFireResponse, PinterestMedia, PinterestResponse,
        SpotifyResponse, TikTokEntry, TikTokLink, TikTokResponse, XMedia, XResponse, YouTubeEntry,
        YouTubeResponse,
    };

    use super::*;

    fn youtube_ok(title: &str, url: Option<&str>, size: Option<&str>) -> YouTubeResponse {
        YouTubeResponse {
            success: true,
            data: Some(vec![YouTubeEntry {
                title: Some(title.to_string()),
                download_url: url.map(String::from),
                file_size: size.map(String::from),
                format: None,
            }]),
            error: None,
        }
    }

    fn youtube_failed(error: Option<&str>) -> YouTubeResponse {
        YouTubeResponse {
            success: false,
            data: None,
            error: error.map(String::from),
        }
    }

    #[test]
    fn test_instagram_maps_each_url() {
        let data = InstagramResponse {
            success: true,
            urls: Some(vec!["https://a".into(), "https://b".into()]),
            error: None,
        };
        let result = instagram(&data).unwrap();
        assert!(result.success);
        assert_eq!(result.platform, "Instagram");
        assert_eq!(result.title.as_deref(), Some("Instagram Post"));
        assert_eq!(result.downloads.len(), 2);
        assert_eq!(result.downloads[0].label, "Download Media 1");
        assert_eq!(result.downloads[1].label, "Download Media 2");
        assert_eq!(result.downloads[0].download_type, DownloadType::Video);
    }

    #[test]
    fn test_instagram_empty_urls_fails() {
        let data = InstagramResponse {
            success: true,
            urls: Some(vec![]),
            error: None,
        };
        let err = instagram(&data).unwrap_err();
        assert_eq!(err.to_string(), "No media found");
    }

    #[test]
    fn test_instagram_uses_provider_error() {
        let data = InstagramResponse {
            success: false,
            urls: None,
            error: Some("Post is private".into()),
        };
        let err = instagram(&data).unwrap_err();
        assert_eq!(err.to_string(), "Post is private");
    }

    #[test]
    fn test_facebook_hd_and_audio_ordering() {
        let data = FacebookResponse {
            success: true,
            hd: Some("https://hd".into()),
            sd: None,
            audio: Some("https://audio".into()),
            error: None,
        };
        let result = facebook(&data).unwrap();
        assert_eq!(result.downloads.len(), 2);
        assert_eq!(result.downloads[0].label, "HD Video");
        assert_eq!(result.downloads[0].download_type, DownloadType::Video);
        assert_eq!(result.downloads[0].quality.as_deref(), Some("HD"));
        assert_eq!(result.downloads[1].label, "Audio Only");
        assert_eq!(result.downloads[1].download_type, DownloadType::Audio);
        assert_eq!(result.downloads[1].quality, None);
    }

    #[test]
    fn test_facebook_no_variants_fails() {
        let data = FacebookResponse {
            success: true,
            hd: None,
            sd: None,
            audio: None,
            error: None,
        };
        let err = facebook(&data).unwrap_err();
        assert_eq!(err.to_string(), "No download links returned");
    }

    #[test]
    fn test_spotify_metadata() {
        let data = SpotifyResponse {
            success: true,
            download_url: Some("https://mp3".into()),
            name: Some("Track".into()),
            artists: Some(vec!["A".into(), "B".into()]),
            image: Some("https://img".into()),
            error: None,
        };
        let result = spotify(&data).unwrap();
        assert_eq!(result.title.as_deref(), Some("Track"));
        assert_eq!(result.author.as_deref(), Some("A, B"));
        assert_eq!(result.thumbnail.as_deref(), Some("https://img"));
        assert_eq!(result.downloads.len(), 1);
        assert_eq!(result.downloads[0].label, "Download MP3");
        assert_eq!(result.downloads[0].download_type, DownloadType::Audio);
    }

    #[test]
    fn test_spotify_missing_download_url_fails() {
        let data = SpotifyResponse {
            success: true,
            ..Default::default()
        };
        assert_eq!(spotify(&data).unwrap_err().to_string(), "No track found");
    }

    #[test]
    fn test_tiktok_link_labels() {
        let data = TikTokResponse {
            success: true,
            data: Some(vec![TikTokEntry {
                title: None,
                thumbnail: Some("https://thumb".into()),
                download_links: Some(vec![
                    TikTokLink {
                        link: "https://1".into(),
                        text: Some("No Watermark".into()),
                    },
                    TikTokLink {
                        link: "https://2".into(),
                        text: None,
                    },
                ]),
            }]),
            error: None,
        };
        let result = tiktok(&data).unwrap();
        assert_eq!(result.title.as_deref(), Some("TikTok Video"));
        assert_eq!(result.thumbnail.as_deref(), Some("https://thumb"));
        assert_eq!(result.downloads[0].label, "No Watermark");
        assert_eq!(result.downloads[1].label, "Download");
    }

    #[test]
    fn test_tiktok_entry_without_links_fails() {
        let data = TikTokResponse {
            success: true,
            data: Some(vec![TikTokEntry::default()]),
            error: None,
        };
        let err = tiktok(&data).unwrap_err();
        assert_eq!(err.to_string(), "No download links found");
    }

    #[test]
    fn test_x_labels_and_type_fallback() {
        let data = XResponse {
            success: true,
            found: true,
            media: Some(vec![
                XMedia {
                    url: "https://v".into(),
                    media_type: "video".into(),
                },
                XMedia {
                    url: "https://g".into(),
                    media_type: "gif".into(),
                },
            ]),
            author_name: None,
            error: None,
        };
        let result = x(&data).unwrap();
        assert_eq!(result.platform, "X (Twitter)");
        assert_eq!(result.title.as_deref(), Some("Post by User"));
        assert_eq!(result.downloads[0].label, "Download video 1");
        assert_eq!(result.downloads[0].download_type, DownloadType::Video);
        assert_eq!(result.downloads[1].label, "Download gif 2");
        assert_eq!(result.downloads[1].download_type, DownloadType::File);
    }

    #[test]
    fn test_x_not_found_fails() {
        let data = XResponse {
            success: true,
            found: false,
            media: Some(vec![]),
            author_name: None,
            error: None,
        };
        assert_eq!(x(&data).unwrap_err().to_string(), "Tweet not found");
    }

    #[test]
    fn test_mediafire_size_in_label() {
        let data = MediaFireResponse {
            success: true,
            download: Some("https://file".into()),
            name: Some("archive.zip".into()),
            size: Some("10 MB".into()),
            error: None,
        };
        let result = mediafire(&data).unwrap();
        assert_eq!(result.title.as_deref(), Some("archive.zip"));
        assert_eq!(result.downloads[0].label, "Download File (10 MB)");
        assert_eq!(result.downloads[0].download_type, DownloadType::File);

        let without_size = MediaFireResponse {
            size: None,
            ..data
        };
        let result = mediafire(&without_size).unwrap();
        assert_eq!(result.downloads[0].label, "Download File (Unknown)");
    }

    #[test]
    fn test_pinterest_extension_selects_type() {
        let data = PinterestResponse {
            source: Some("pinterest".into()),
            title: Some("Pin".into()),
            medias: Some(vec![
                PinterestMedia {
                    url: "https://v".into(),
                    quality: "720p".into(),
                    extension: "mp4".into(),
                    formatted_size: Some("4.2 MB".into()),
                },
                PinterestMedia {
                    url: "https://i".into(),
                    quality: "originals".into(),
                    extension: "jpg".into(),
                    formatted_size: None,
                },
            ]),
            error: None,
        };
        let result = pinterest(&data).unwrap();
        assert_eq!(result.downloads[0].label, "Download 720p (mp4)");
        assert_eq!(result.downloads[0].download_type, DownloadType::Video);
        assert_eq!(result.downloads[0].size.as_deref(), Some("4.2 MB"));
        assert_eq!(result.downloads[1].label, "Download originals (jpg)");
        assert_eq!(result.downloads[1].download_type, DownloadType::Image);
    }

    #[test]
    fn test_pinterest_wrong_source_fails() {
        let data = PinterestResponse {
            source: Some("other".into()),
            medias: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(pinterest(&data).unwrap_err().to_string(), "Pin not found");
    }

    #[test]
    fn test_youtube_both_legs_valid() {
        let mp4 = youtube_ok("Video", Some("https://v.mp4"), Some("120 MB"));
        let mp3 = youtube_ok("Video", Some("https://a.mp3"), None);
        let result = youtube_merged(Some(&mp4), Some(&mp3)).unwrap();
        assert!(result.success);
        assert_eq!(result.title.as_deref(), Some("Video"));
        assert_eq!(result.downloads.len(), 2);
        assert_eq!(result.downloads[0].label, "Download Video (MP4) (120 MB)");
        assert_eq!(result.downloads[0].download_type, DownloadType::Video);
        assert_eq!(result.downloads[1].label, "Download Audio (MP3)");
        assert_eq!(result.downloads[1].download_type, DownloadType::Audio);
    }

    #[test]
    fn test_youtube_mp3_only() {
        let mp3 = youtube_ok("Audio Title", Some("https://a.mp3"), None);
        let result = youtube_merged(None, Some(&mp3)).unwrap();
        assert!(result.success);
        assert_eq!(result.title.as_deref(), Some("Audio Title"));
        assert_eq!(result.downloads.len(), 1);
        assert_eq!(result.downloads[0].label, "Download Audio (MP3)");
    }

    #[test]
    fn test_youtube_error_fallback_chain() {
        let mp4 = youtube_failed(Some("mp4 broke"));
        let mp3 = youtube_failed(Some("mp3 broke"));
        let err = youtube_merged(Some(&mp4), Some(&mp3)).unwrap_err();
        assert_eq!(err.to_string(), "mp4 broke");

        let err = youtube_merged(None, Some(&youtube_failed(Some("mp3 broke")))).unwrap_err();
        assert_eq!(err.to_string(), "mp3 broke");

        let err = youtube_merged(None, None).unwrap_err();
        assert_eq!(err.to_string(), "Video not found");
    }

    #[test]
    fn test_youtube_valid_leg_without_url_yields_no_link() {
        let mp4 = youtube_ok("Video", None, None);
        let result = youtube_merged(Some(&mp4), None).unwrap();
        assert!(result.success);
        assert!(result.downloads.is_empty());
        assert_eq!(result.title.as_deref(), Some("Video"));
    }

    #[test]
    fn test_transformers_are_idempotent() {
        let data = FacebookResponse {
            success: true,
            hd: Some("https://hd".into()),
            sd: Some("https://sd".into()),
            audio: None,
            error: None,
        };
        assert_eq!(facebook(&data).unwrap(), facebook(&data).unwrap());
    }
}
