use crate::config::Config;
use reqwest::blocking::Client;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {status} for url ({url})")]
    Status { status: StatusCode, url: String },
}

/// Where the raw feed document comes from.
pub trait FeedSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client })
    }
}

impl FeedSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "fetching feed");
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }
        let body = resp.text()?;
        tracing::debug!(url, bytes = body.len(), "fetched feed");
        Ok(body)
    }
}
