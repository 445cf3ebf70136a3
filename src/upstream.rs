use crate::config::Config;
use crate::error::FetchError;
use reqwest::Client;
use tracing::debug;

/// Status and text of the upstream response, as received.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: u16,
    pub text: String,
}

/// HTTP client bound to a single URL.
/// Create it once per execution environment and share it between invocations to reuse connections.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: Client,
    url: String,
}

impl Upstream {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        // redirects are followed with reqwest's default limit of 10 hops
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: config.upstream_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Sends one GET to the upstream URL and reads the whole body as text.
    /// Non-2xx statuses are not errors.
    pub async fn fetch(&self) -> Result<UpstreamResponse, FetchError> {
        debug!("GET {}", self.url);

        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = resp.status().as_u16();
        debug!("Upstream status: {}, final URL: {}", status, resp.url());

        // decodes using the charset from Content-Type, UTF-8 if none
        let text = resp.text().await.map_err(|source| FetchError::Body {
            url: self.url.clone(),
            source,
        })?;

        debug!("Upstream body: {} bytes", text.len());

        Ok(UpstreamResponse { status, text })
    }
}
