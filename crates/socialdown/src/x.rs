use crate::client::SocialdownClient;
use crate::models::XResponse;

impl SocialdownClient {
    /// Resolve an X (Twitter) post link.
    /// GET /x
    pub async fn fetch_x(&self, link: &str) -> crate::Result<XResponse> {
        self.get("/x", link, &[]).await
    }
}
