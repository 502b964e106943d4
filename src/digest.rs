//! Content digests used to derive document identifiers.

use crate::error::Result;
use sha2::{Digest, Sha512};

/// One-way digest over byte content, rendered as hex.
pub trait ContentDigest {
    /// Name of the algorithm, recorded as the identifier source.
    fn algorithm(&self) -> &str;

    /// Digest `bytes` and return the hex encoding.
    fn digest_hex(&self, bytes: &[u8]) -> Result<String>;
}

/// SHA-512, lowercase hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512Hex;

impl Sha512Hex {
    /// Algorithm name recorded for identifiers derived with this digest.
    pub const ALGORITHM: &'static str = "sha512Hex";
}

impl ContentDigest for Sha512Hex {
    fn algorithm(&self) -> &str {
        Self::ALGORITHM
    }

    fn digest_hex(&self, bytes: &[u8]) -> Result<String> {
        Ok(hex::encode(Sha512::digest(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha512_known_value() {
        let hex = Sha512Hex.digest_hex(b"abc").unwrap();
        assert_eq!(hex.len(), 128);
        assert!(hex.starts_with("ddaf35a193617aba"));
        assert!(hex.ends_with("a54ca49f"));
    }

    #[test]
    fn test_algorithm_name() {
        assert_eq!(Sha512Hex.algorithm(), "sha512Hex");
    }
}
