use crate::client::SocialdownClient;
use crate::models::{YouTubeResponse, YtFormat};

impl SocialdownClient {
    /// Resolve a YouTube video link in the requested output format.
    /// GET /yt?format=mp4|mp3
    pub async fn fetch_youtube(
        &self,
        link: &str,
        format: YtFormat,
    ) -> crate::Result<YouTubeResponse> {
        self.get("/yt", link, &[("format", format.as_str())]).await
    }
}
