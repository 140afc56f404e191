use crate::client::SocialdownClient;
use crate::models::SpotifyResponse;

impl SocialdownClient {
    /// Resolve a Spotify track link.
    /// GET /spotify
    pub async fn fetch_spotify(&self, link: &str) -> crate::Result<SpotifyResponse> {
        self.get("/spotify", link, &[]).await
    }
}
