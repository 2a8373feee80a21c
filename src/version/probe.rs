//! HTTP probe reading the running server's version header

use std::time::Duration;

#[cfg(test)]
use mockall::automock;
use tracing::{debug, warn};

use crate::version::error::ProbeError;

/// Trait for reading the raw version identifier of a running server
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionProbe: Send + Sync {
    /// Fetches the raw version header from `url`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - Header value as sent by the server
    /// * `Ok(None)` - The response carried no version header
    /// * `Err(ProbeError)` - The request failed
    async fn fetch_version_header(&self, url: &str) -> Result<Option<String>, ProbeError>;
}

/// Probe implementation issuing a plain GET request
pub struct HttpProbe {
    client: reqwest::Client,
    header: String,
}

impl HttpProbe {
    /// Creates an HttpProbe reading `header` with the given request timeout
    pub fn new(header: &str, timeout: Duration) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            header: header.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl VersionProbe for HttpProbe {
    async fn fetch_version_header(&self, url: &str) -> Result<Option<String>, ProbeError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            // Error pages usually still carry the header, so keep looking
            warn!("{} returned status {}", url, status);
        }

        let Some(value) = response.headers().get(self.header.as_str()) else {
            debug!("{} sent no {} header", url, self.header);
            return Ok(None);
        };

        let value = value
            .to_str()
            .map_err(|e| ProbeError::InvalidHeader(e.to_string()))?;
        debug!("{}: {}", self.header, value);

        Ok(Some(value.to_string()))
    }
}
