use crate::client::SocialdownClient;
use crate::models::PinterestResponse;

impl SocialdownClient {
    /// Resolve a Pinterest pin link (pinterest.com or pin.it).
    /// GET /pinterest
    pub async fn fetch_pinterest(&self, link: &str) -> crate::Result<PinterestResponse> {
        self.get("/pinterest", link, &[]).await
    }
}
