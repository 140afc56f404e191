use crate::client::SocialdownClient;
use crate::models::InstagramResponse;

impl SocialdownClient {
    /// Resolve an Instagram post or reel link.
    /// GET /insta
    pub async fn fetch_instagram(&self, link: &str) -> crate::Result<InstagramResponse> {
        self.get("/insta", link, &[]).await
    }
}
