use crate::client::SocialdownClient;
use crate::models::MediaFireResponse;

impl SocialdownClient {
    /// Resolve a MediaFire file link.
    /// GET /mediafire
    pub async fn fetch_mediafire(&self, link: &str) -> crate::Result<MediaFireResponse> {
        self.get("/mediafire", link, &[]).await
    }
}
