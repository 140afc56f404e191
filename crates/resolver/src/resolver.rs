//! The orchestrator tying detection, fetching, and transformation together.

use socialdown::YtFormat;

use crate::api::MediaApi;
use crate::error::ResolveError;
use crate::models::UnifiedResult;
use crate::platform::{detect_platform, Platform};
use crate::transform;

/// Resolves a user-submitted URL into a [`UnifiedResult`].
///
/// Generic over [`MediaApi`] so tests can inject a mock upstream.
pub struct MediaResolver<A: MediaApi> {
    api: A,
}

impl<A: MediaApi> MediaResolver<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Process a URL end to end. Never fails: every error is folded into the
    /// failure envelope of the returned result.
    pub async fn process_url(&self, url: &str) -> UnifiedResult {
        let Some(platform) = detect_platform(url) else {
            return UnifiedResult::failure("Unknown", "Unsupported platform or invalid URL.");
        };

        match self.resolve(platform, url).await {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(platform = platform.display_name(), error = %err, "failed to resolve URL");
                let mut message = err.to_string();
                if message.is_empty() {
                    message = "Failed to process URL".to_string();
                }
                UnifiedResult::failure(platform.display_name(), message)
            }
        }
    }

    async fn resolve(&self, platform: Platform, url: &str) -> Result<UnifiedResult, ResolveError> {
        match platform {
            Platform::Instagram => transform::instagram(&self.api.instagram(url).await?),
            Platform::Facebook => transform::facebook(&self.api.facebook(url).await?),
            Platform::Spotify => transform::spotify(&self.api.spotify(url).await?),
            Platform::TikTok => transform::tiktok(&self.api.tiktok(url).await?),
            Platform::X => transform::x(&self.api.x(url).await?),
            Platform::MediaFire => transform::mediafire(&self.api.mediafire(url).await?),
            Platform::Pinterest => transform::pinterest(&self.api.pinterest(url).await?),
            Platform::YouTube => {
                // Both legs always settle; a failure in one does not abort
                // the other.
                let (mp4, mp3) = tokio::join!(
                    self.api.youtube(url, YtFormat::Mp4),
                    self.api.youtube(url, YtFormat::Mp3)
                );
                if let Err(err) = &mp4 {
                    tracing::debug!(error = %err, "YouTube mp4 leg failed");
                }
                if let Err(err) = &mp3 {
                    tracing::debug!(error = %err, "YouTube mp3 leg failed");
                }
                transform::youtube_merged(mp4.ok().as_ref(), mp3.ok().as_ref())
            }
            // Detectable but deliberately unsupported; no API call is made.
            Platform::CapCut | Platform::SoundCloud | Platform::Threads => {
                Err(ResolveError::Transform(format!(
                    "{} support is currently limited to preview only.",
                    platform.display_name()
                )))
            }
        }
    }
}
