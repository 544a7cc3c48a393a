use md5::{Digest, Md5};
use std::fmt;
use std::str::FromStr;

use crate::errors::{HashQueueError, HashQueueResult};

/// A 128-bit MD5 digest to search for.
///
/// Parsed once from its hex form so workers compare raw bytes instead of
/// formatting a hex string for every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetHash([u8; 16]);

impl TargetHash {
    /// Digest of `text` encoded as UTF-8
    pub fn of(text: &str) -> Self {
        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&Md5::digest(text.as_bytes()));
        Self(bytes)
    }

    pub fn from_hex(hex: &str) -> HashQueueResult<Self> {
        let hex = hex.trim();
        if hex.len() != 32 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(HashQueueError::invalid_hash(format!(
                "expected 32 hex digits, got '{}'",
                hex
            )));
        }

        let mut bytes = [0u8; 16];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let pair = &hex[i * 2..i * 2 + 2];
            *byte = u8::from_str_radix(pair, 16).map_err(|_| {
                HashQueueError::invalid_hash(format!("'{}' is not a hex digest", hex))
            })?;
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Whether `candidate` hashes to this digest
    #[inline]
    pub fn matches(&self, candidate: &str) -> bool {
        Md5::digest(candidate.as_bytes()).as_slice() == self.0.as_slice()
    }
}

impl FromStr for TargetHash {
    type Err = HashQueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for TargetHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
