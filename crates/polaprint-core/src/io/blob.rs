use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};

/// In-memory document addressed by an object URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Registry of live object URLs (`blob:` handles).
///
/// Every URL handed out must be revoked once its document is no longer
/// needed; [`BlobRegistry::live_count`] reports how many are outstanding.
#[derive(Debug, Default)]
pub struct BlobRegistry {
    next_id: u64,
    entries: HashMap<String, Blob>,
}

impl BlobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `blob` and return a fresh object URL for it.
    pub fn create_object_url(&mut self, blob: Blob) -> String {
        self.next_id += 1;
        let url = format!("blob:polaprint/{}", self.next_id);
        debug!(url = %url, bytes = blob.bytes.len(), "Object URL created");
        self.entries.insert(url.clone(), blob);
        url
    }

    pub fn get(&self, url: &str) -> Result<&Blob> {
        self.entries
            .get(url)
            .ok_or_else(|| Error::UnknownObjectUrl(url.to_string()))
    }

    /// Release `url`, returning its document if it was still live.
    pub fn revoke(&mut self, url: &str) -> Option<Blob> {
        let blob = self.entries.remove(url);
        if blob.is_some() {
            debug!(url, "Object URL revoked");
        }
        blob
    }

    pub fn live_count(&self) -> usize {
        self.entries.len()
    }
}
