use std::time::Duration;

use futures_util::StreamExt;
use serde::Deserialize;
use stock_core::AnalysisResult;
use stock_logging::{stock_debug, stock_info};
use url::Url;

use crate::{FailureKind, FetchError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            // Analyses are generated on demand by the backend and can be slow.
            request_timeout: Duration::from_secs(60),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Wire shape of a successful response; fields other than `content` are ignored.
#[derive(Debug, Deserialize)]
struct AnalysisPayload {
    content: String,
}

#[async_trait::async_trait]
pub trait AnalysisFetcher: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<AnalysisResult, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl AnalysisFetcher for ReqwestFetcher {
    async fn fetch(&self, symbol: &str) -> Result<AnalysisResult, FetchError> {
        let url = analysis_url(&self.settings.base_url, symbol)?;
        stock_info!("GET {}", url);

        let response = self
            .client
            .get(url.as_str())
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

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        stock_debug!("{} answered {} ({} bytes)", symbol, status, bytes.len());

        decode_payload(&bytes)
    }
}

/// Builds `{base_url}/api/stock/{symbol}` with the symbol uppercased and
/// percent-encoded as a single path segment.
pub fn analysis_url(base_url: &str, symbol: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(base_url)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    let symbol = symbol.to_uppercase();
    url.path_segments_mut()
        .map_err(|()| FetchError::new(FailureKind::InvalidUrl, "base url cannot have a path"))?
        .pop_if_empty()
        .extend(["api", "stock", symbol.as_str()]);
    Ok(url)
}

/// Decodes a response body into an analysis; anything without a string
/// `content` field is rejected.
pub fn decode_payload(bytes: &[u8]) -> Result<AnalysisResult, FetchError> {
    let payload: AnalysisPayload = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::InvalidPayload, err.to_string()))?;
    Ok(AnalysisResult::new(payload.content))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
