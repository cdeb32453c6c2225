use std::time::Duration;

use lengthen_logging::{lengthen_debug, lengthen_info, lengthen_trace};
use reqwest::StatusCode;
use url::Url;

use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct TransportSettings {
    /// Upper bound on establishing the TCP/TLS connection. Once connected the
    /// request waits for the response indefinitely.
    pub connect_timeout: Option<Duration>,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Some(Duration::from_secs(10)),
        }
    }
}

/// Capability to issue one lengthen request against the shortening service.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Sends `GET <origin><path_and_query>` and returns the body of a 200
    /// response.
    async fn lengthen(&self, path_and_query: &str) -> Result<String, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    origin: Url,
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(origin: &str, settings: TransportSettings) -> Result<Self, FetchError> {
        let origin = parse_origin(origin)?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { origin, client })
    }

    pub fn origin(&self) -> &str {
        self.origin.as_str().trim_end_matches('/')
    }

    fn request_url(&self, path_and_query: &str) -> Result<Url, FetchError> {
        let raw = format!("{}{}", self.origin(), path_and_query);
        Url::parse(&raw).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn lengthen(&self, path_and_query: &str) -> Result<String, FetchError> {
        let url = self.request_url(path_and_query)?;
        lengthen_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        lengthen_trace!("Lengthen response status={}", status);
        if status != StatusCode::OK {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        lengthen_info!("Lengthen response body_len={}", body.len());
        Ok(body)
    }
}

fn parse_origin(origin: &str) -> Result<Url, FetchError> {
    let parsed =
        Url::parse(origin).map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(FetchError::new(
                FailureKind::InvalidUrl,
                format!("unsupported scheme {other}"),
            ))
        }
    }
    if parsed.host_str().is_none() {
        return Err(FetchError::new(FailureKind::InvalidUrl, "origin has no host"));
    }
    Ok(parsed)
}
