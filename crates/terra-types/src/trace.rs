use serde::{Deserialize, Serialize};

use crate::algorithm::{HashAlgorithm, COMBINED_LEN};
use crate::digest::Digest512;

/// Every digest produced by one composite computation.
///
/// Holds the three intermediate digests alongside the final one so callers
/// can inspect or re-derive the fold.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DigestTrace {
    pub sha512: Digest512,
    pub sha3_512: Digest512,
    pub blake2b_512: Digest512,
    pub composite: Digest512,
}

impl DigestTrace {
    /// Intermediate digests in concatenation order.
    pub fn intermediates(&self) -> [(HashAlgorithm, &Digest512); 3] {
        [
            (HashAlgorithm::Sha512, &self.sha512),
            (HashAlgorithm::Sha3_512, &self.sha3_512),
            (HashAlgorithm::Blake2b512, &self.blake2b_512),
        ]
    }

    /// The 192-byte buffer that the final pass hashes.
    pub fn combined_buffer(&self) -> [u8; COMBINED_LEN] {
        let mut buf = [0u8; COMBINED_LEN];
        for (i, (_, digest)) in self.intermediates().iter().enumerate() {
            buf[i * Digest512::LEN..(i + 1) * Digest512::LEN].copy_from_slice(digest.as_bytes());
        }
        buf
    }

    /// The final composite digest.
    pub fn composite(&self) -> &Digest512 {
        &self.composite
    }
}
