use tracing::debug;

use crate::consts::MAX_DOWNLOAD_BYTES;
use crate::error::{Error, Result};

/// Status and body of a completed GET request.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues plain GET requests. Non-2xx statuses are returned, not raised.
pub trait HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// [`HttpTransport`] over a blocking `ureq` agent.
///
/// Requests carry no Referer header; no timeout is configured.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    max_body: u64,
}

impl UreqTransport {
    pub fn new() -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: config.into(),
            max_body: MAX_DOWNLOAD_BYTES,
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let mut response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .with_config()
            .limit(self.max_body)
            .read_to_vec()
            .map_err(|e| Error::Transport(e.to_string()))?;

        debug!(url, status, bytes = body.len(), "GET complete");
        Ok(HttpResponse { status, body })
    }
}
