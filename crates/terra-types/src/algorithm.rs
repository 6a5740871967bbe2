use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the underlying 512-bit hash algorithms.
///
/// Each variant comes from a separate design lineage: a Merkle–Damgård
/// construction, a sponge, and a HAIFA-style compression function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-512 (SHA-2 family).
    #[serde(rename = "sha512")]
    Sha512,
    /// SHA3-512 (Keccak sponge).
    #[serde(rename = "sha3-512")]
    Sha3_512,
    /// BLAKE2b with a 64-byte output, unkeyed.
    #[serde(rename = "blake2b-512")]
    Blake2b512,
}

/// Order in which intermediate digests are concatenated.
pub const COMPOSITION_ORDER: [HashAlgorithm; 3] = [
    HashAlgorithm::Sha512,
    HashAlgorithm::Sha3_512,
    HashAlgorithm::Blake2b512,
];

/// Algorithm applied to the concatenated intermediates.
pub const FINAL_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha512;

/// Length of the concatenated intermediate digests.
pub const COMBINED_LEN: usize = 3 * 64;

impl HashAlgorithm {
    /// Stable lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha512 => "sha512",
            Self::Sha3_512 => "sha3-512",
            Self::Blake2b512 => "blake2b-512",
        }
    }

    /// Output length in bytes.
    pub fn output_len(&self) -> usize {
        64
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_order_is_fixed() {
        assert_eq!(
            COMPOSITION_ORDER,
            [HashAlgorithm::Sha512, HashAlgorithm::Sha3_512, HashAlgorithm::Blake2b512]
        );
        assert_eq!(FINAL_ALGORITHM, HashAlgorithm::Sha512);
    }

    #[test]
    fn combined_len_matches_outputs() {
        let total: usize = COMPOSITION_ORDER.iter().map(|a| a.output_len()).sum();
        assert_eq!(total, COMBINED_LEN);
        assert_eq!(COMBINED_LEN, 192);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(HashAlgorithm::Sha3_512.to_string(), "sha3-512");
        assert_eq!(format!("{}", HashAlgorithm::Blake2b512), "blake2b-512");
    }

    #[test]
    fn serde_matches_name() {
        for alg in COMPOSITION_ORDER {
            let json = serde_json::to_string(&alg).unwrap();
            assert_eq!(json, format!("\"{}\"", alg.name()));
            let parsed: HashAlgorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, alg);
        }
    }
}
