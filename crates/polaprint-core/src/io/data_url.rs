use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};

/// A `data:<mime>;base64,<payload>` string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUrl(String);

impl DataUrl {
    /// Encode `bytes` as a base64 data URL of the given MIME type.
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }

    /// Wrap an existing string, checking only that it has a data URL shape.
    pub fn parse(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        split(&url)?;
        Ok(Self(url))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MIME type declared in the header, without parameters.
    pub fn mime(&self) -> &str {
        split(&self.0)
            .map(|(header, _)| header.split(';').next().unwrap_or(""))
            .unwrap_or("")
    }

    /// Decode the base64 payload back to raw bytes.
    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        let (header, payload) = split(&self.0)?;
        if !header.split(';').any(|param| param == "base64") {
            return Err(Error::InvalidDataUrl(
                "only base64 payloads are supported".into(),
            ));
        }
        STANDARD
            .decode(payload)
            .map_err(|e| Error::InvalidDataUrl(e.to_string()))
    }
}

impl std::fmt::Display for DataUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn split(url: &str) -> Result<(&str, &str)> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| Error::InvalidDataUrl("missing data: scheme".into()))?;
    rest.split_once(',')
        .ok_or_else(|| Error::InvalidDataUrl("missing payload separator".into()))
}
