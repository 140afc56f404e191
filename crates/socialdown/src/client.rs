use reqwest::Client;

const BASE_URL: &str = "https://socialdown.itz-ashlynn.workers.dev";

pub struct SocialdownClient {
    client: Client,
    base_url: String,
}

impl SocialdownClient {
    /// Create a SocialdownClient with a reqwest Client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create a client pointed at a non-default base URL (used by tests).
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET with the target link as the `url` query parameter.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        link: &str,
        extra: &[(&str, &str)],
    ) -> crate::Result<T> {
        let endpoint = self.url(path);
        let mut query: Vec<(&str, &str)> = vec![("url", link)];
        query.extend_from_slice(extra);

        let response = self.client.get(&endpoint).query(&query).send().await?;
        self.handle_response(response).await
    }

    pub(crate) async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(crate::SocialdownError::Api {
                status_code: status.as_u16(),
            });
        }
        let body = response.text().await?;
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| crate::SocialdownError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
