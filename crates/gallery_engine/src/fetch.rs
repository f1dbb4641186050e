use std::time::Duration;

use futures_util::StreamExt;
use url::Url;

use crate::{FailureKind, FetchError, Photo};

/// Limits applied to one photo list request.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// The injectable collaborator that performs the network fetch and
/// deserialization.
#[async_trait::async_trait]
pub trait PhotoFetcher: Send + Sync {
    async fn list_photos(&self) -> Result<Vec<Photo>, FetchError>;
}

/// Production fetcher: GETs `<base>/photos` and decodes the JSON body.
#[derive(Debug, Clone)]
pub struct ReqwestPhotoFetcher {
    endpoint: Url,
    settings: FetchSettings,
}

impl ReqwestPhotoFetcher {
    pub fn new(base_url: &str, settings: FetchSettings) -> Result<Self, FetchError> {
        let base = Url::parse(base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let endpoint = base
            .join("photos")
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        Ok(Self { endpoint, settings })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl PhotoFetcher for ReqwestPhotoFetcher {
    async fn list_photos(&self) -> Result<Vec<Photo>, FetchError> {
        let client = self.build_client()?;

        let response = client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
