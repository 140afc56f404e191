use crate::client::SocialdownClient;
use crate::models::TikTokResponse;

impl SocialdownClient {
    /// Resolve a TikTok video link.
    /// GET /tiktok
    pub async fn fetch_tiktok(&self, link: &str) -> crate::Result<TikTokResponse> {
        self.get("/tiktok", link, &[]).await
    }
}
