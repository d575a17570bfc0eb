//! Seed digests and hash-to-number extraction.
//!
//! This module implements the determinism policy for Radiance:
//! - A seed string is hashed into a 64-character lowercase hex digest
//! - Every random-looking decision reads a short hex window of that digest
//!
//! No other source of randomness is used once a digest exists.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use crate::error::DigestError;

/// Largest window that still fits in a `u32`.
pub const MAX_EXTRACT_LENGTH: usize = 8;

/// Hash function used to turn a seed into a digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestAlgorithm {
    /// SHA-256, the reference algorithm.
    #[default]
    Sha256,
    /// BLAKE3 with the default 32-byte output.
    Blake3,
}

impl DigestAlgorithm {
    /// Returns the algorithm name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Blake3 => "blake3",
        }
    }

    /// Hashes `input` and returns the lowercase hex digest.
    pub fn hash_hex(&self, input: &[u8]) -> String {
        match self {
            DigestAlgorithm::Sha256 => hex::encode(Sha256::digest(input)),
            DigestAlgorithm::Blake3 => blake3::hash(input).to_hex().to_string(),
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "blake3" => Ok(DigestAlgorithm::Blake3),
            _ => Err(format!("unknown digest algorithm: {}", s)),
        }
    }
}

/// A lowercase hexadecimal digest derived from a seed.
///
/// Digests built with [`Digest::from_seed`] are always 64 characters long.
/// [`Digest::from_hex`] accepts any non-empty hex string, so reads near the
/// end of a shorter digest are rejected by [`Digest::extract`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest(String);

impl Digest {
    /// Hashes a seed string with the given algorithm.
    ///
    /// # Example
    /// ```
    /// use radiance_spec::hash::{Digest, DigestAlgorithm};
    ///
    /// let digest = Digest::from_seed("radiance", DigestAlgorithm::Sha256);
    /// assert_eq!(digest.len(), 64);
    /// ```
    pub fn from_seed(seed: &str, algorithm: DigestAlgorithm) -> Self {
        Self(algorithm.hash_hex(seed.as_bytes()))
    }

    /// Wraps an existing hex string, normalizing it to lowercase.
    pub fn from_hex(hex: &str) -> Result<Self, DigestError> {
        if hex.is_empty() {
            return Err(DigestError::Empty);
        }
        if let Some(c) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(DigestError::InvalidHex(c));
        }
        Ok(Self(hex.to_ascii_lowercase()))
    }

    /// Returns the digest as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the digest length in hex characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the digest has no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reads `length` hex characters at `offset` as an unsigned number.
    pub fn extract(&self, offset: usize, length: usize) -> Result<u32, DigestError> {
        extract_number(&self.0, offset, length)
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reads `length` hex characters of `digest` starting at `offset`.
///
/// Reads that run past the end of the digest are rejected rather than
/// truncated, so a short digest can never silently bias the result.
///
/// # Example
/// ```
/// use radiance_spec::hash::extract_number;
///
/// assert_eq!(extract_number("00ff10", 2, 2).unwrap(), 255);
/// assert!(extract_number("00ff10", 5, 2).is_err());
/// ```
pub fn extract_number(digest: &str, offset: usize, length: usize) -> Result<u32, DigestError> {
    if length == 0 || length > MAX_EXTRACT_LENGTH {
        return Err(DigestError::InvalidLength(length));
    }

    let end = offset
        .checked_add(length)
        .filter(|end| *end <= digest.len())
        .ok_or(DigestError::OutOfRange {
            offset,
            length,
            available: digest.len(),
        })?;

    let window = digest.get(offset..end).ok_or(DigestError::OutOfRange {
        offset,
        length,
        available: digest.len(),
    })?;

    u32::from_str_radix(window, 16).map_err(|_| {
        let bad = window
            .chars()
            .find(|c| !c.is_ascii_hexdigit())
            .unwrap_or('?');
        DigestError::InvalidHex(bad)
    })
}
