use crate::client::SocialdownClient;
use crate::models::FacebookResponse;

impl SocialdownClient {
    /// Resolve a Facebook video link (facebook.com or fb.watch).
    /// GET /fb
    pub async fn fetch_facebook(&self, link: &str) -> crate::Result<FacebookResponse> {
        self.get("/fb", link, &[]).await
    }
}
