//! Deduplicated scan history for one scanning session.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::normalize;

/// An ordered, deduplicated sequence of normalized barcodes.
///
/// The cache grows only by append-if-absent and is bounded by the lifetime
/// of one scanning session; there is no eviction. Raw inputs that differ
/// only by leading-zero padding normalize to the same entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanCache {
    seen: Vec<String>,
}

impl ScanCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `raw` and append it if it has not been seen yet.
    ///
    /// Returns `true` when the code was new; a duplicate leaves the cache
    /// unchanged and returns `false`.
    pub fn record(&mut self, raw: &str) -> bool {
        let code = normalize(raw);

        if self.seen.iter().any(|seen| *seen == code) {
            debug!(%code, "barcode already scanned this session");
            return false;
        }

        self.seen.push(code);
        true
    }

    /// Check whether a barcode (in any padding) has been seen
    pub fn contains(&self, raw: &str) -> bool {
        let code = normalize(raw);
        self.seen.iter().any(|seen| *seen == code)
    }

    /// The normalized codes, in scan order
    pub fn codes(&self) -> &[String] {
        &self.seen
    }

    /// Number of distinct codes scanned
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check whether nothing has been scanned yet
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Forget the scan history
    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
