//! Content fingerprinting for transform memoization.

use std::path::Path;

use sha2::{Digest, Sha256};

/// Content-addressed cache key for a (file, raw source) pair.
///
/// Two invocations with identical path and content produce identical
/// fingerprints and may share a cached transform result. Any difference in
/// either input produces a different fingerprint; collision safety is
/// delegated to SHA-256.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Compute the fingerprint of a file's raw source.
    ///
    /// # Hash Format
    ///
    /// Hex-encoded SHA-256 of the file path and raw content, NUL-separated
    /// so the two inputs cannot run into each other.
    #[must_use]
    pub fn compute(file: &Path, raw: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(file.as_os_str().as_encoded_bytes());
        hasher.update([0u8]);
        hasher.update(raw.as_bytes());
        Self(hex::encode(hasher.finalize()))
    }

    /// Hex digest string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
