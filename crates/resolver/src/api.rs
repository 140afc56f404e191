//! Trait seam over the upstream API client.
//!
//! The resolver talks to the SocialDown API exclusively through this trait so
//! orchestrator tests can substitute a mock and count calls.

use async_trait::async_trait;
use socialdown::{
    FacebookResponse, InstagramResponse, MediaFireResponse, PinterestResponse, SocialdownClient,
    SocialdownError, SpotifyResponse, TikTokResponse, XResponse, YouTubeResponse, YtFormat,
};

/// One method per upstream endpoint.
#[async_trait]
pub trait MediaApi: Send + Sync {
    async fn instagram(&self, url: &str) -> Result<InstagramResponse, SocialdownError>;
    async fn facebook(&self, url: &str) -> Result<FacebookResponse, SocialdownError>;
    async fn spotify(&self, url: &str) -> Result<SpotifyResponse, SocialdownError>;
    async fn tiktok(&self, url: &str) -> Result<TikTokResponse, SocialdownError>;
    async fn x(&self, url: &str) -> Result<XResponse, SocialdownError>;
    async fn youtube(&self, url: &str, format: YtFormat)
        -> Result<YouTubeResponse, SocialdownError>;
    async fn mediafire(&self, url: &str) -> Result<MediaFireResponse, SocialdownError>;
    async fn pinterest(&self, url: &str) -> Result<PinterestResponse, SocialdownError>;
}

#[async_trait]
impl MediaApi for SocialdownClient {
    async fn instagram(&self, url: &str) -> Result<InstagramResponse, SocialdownError> {
        self.fetch_instagram(url).await
    }

    async fn facebook(&self, url: &str) -> Result<FacebookResponse, SocialdownError> {
        self.fetch_facebook(url).await
    }

    async fn spotify(&self, url: &str) -> Result<SpotifyResponse, SocialdownError> {
        self.fetch_spotify(url).await
    }

    async fn tiktok(&self, url: &str) -> Result<TikTokResponse, SocialdownError> {
        self.fetch_tiktok(url).await
    }

    async fn x(&self, url: &str) -> Result<XResponse, SocialdownError> {
        self.fetch_x(url).await
    }

    async fn youtube(
        &self,
        url: &str,
        format: YtFormat,
    ) -> Result<YouTubeResponse, SocialdownError> {
        self.fetch_youtube(url, format).await
    }

    async fn mediafire(&self, url: &str) -> Result<MediaFireResponse, SocialdownError> {
        self.fetch_mediafire(url).await
    }

    async fn pinterest(&self, url: &str) -> Result<PinterestResponse, SocialdownError> {
        self.fetch_pinterest(url).await
    }
}
