use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::io::http::HttpTransport;

/// Image record of a print ticket. Only the origin URL is read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TicketImage {
    #[serde(default)]
    origin_image_url: Option<String>,
}

/// Client for the print-ticket image endpoint.
pub struct LookupClient<T: HttpTransport> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport> LookupClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `{base}/api/v1/printingTicket/{code}/image`
    pub fn endpoint(&self, code: &str) -> String {
        format!(
            "{}/api/v1/printingTicket/{}/image",
            self.base_url.trim_end_matches('/'),
            code
        )
    }

    /// Look up the origin image URL of the ticket `code`.
    ///
    /// One request, no retry. Fails with [`Error::Http`] on a non-2xx status
    /// and [`Error::Data`] when the body has no usable `originImageUrl`.
    pub fn fetch_origin_url(&self, code: &str) -> Result<String> {
        let url = self.endpoint(code);
        info!(code, "Looking up print ticket");

        let response = self.transport.get(&url)?;
        if !response.is_success() {
            warn!(code, status = response.status, "Ticket lookup rejected");
            return Err(Error::Http {
                status: response.status,
            });
        }

        let ticket: TicketImage = serde_json::from_slice(&response.body)
            .map_err(|e| Error::Data(format!("Invalid API response: {e}")))?;

        match ticket.origin_image_url {
            Some(url) if !url.is_empty() => {
                info!(code, url = %url, "Found origin image");
                Ok(url)
            }
            _ => Err(Error::Data(
                "No originImageUrl found in the API response".into(),
            )),
        }
    }

    /// Download the bytes behind an origin image URL.
    pub fn fetch_original(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.transport.get(url)?;
        if !response.is_success() {
            return Err(Error::Http {
                status: response.status,
            });
        }
        Ok(response.body)
    }
}

/// File name for a downloaded original: the last path segment of `url`,
/// without query or fragment.
pub fn original_filename(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let path = path.split_once("://").map_or(path, |(_, rest)| rest);
    match path.split_once('/') {
        Some((_, tail)) => tail
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or("original")
            .to_string(),
        None => "original".to_string(),
    }
}
