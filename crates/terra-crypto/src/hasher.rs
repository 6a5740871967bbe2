use std::fmt;

use blake2::Blake2b512;
use sha2::{Digest, Sha512};
use sha3::Sha3_512;
use subtle::ConstantTimeEq;
use terra_types::{Digest512, DigestTrace, COMBINED_LEN};

use crate::algorithm::finish;

/// Incremental composite hasher.
///
/// Feeds every update into SHA-512, SHA3-512 and BLAKE2b-512 in parallel.
/// On finalization the three intermediate digests are concatenated in that
/// order into a 192-byte buffer, which is hashed once more with SHA-512.
///
/// Splitting the input across any number of [`update`](Self::update) calls
/// gives the same result as hashing it in one piece.
#[derive(Clone, Default)]
pub struct CompositeHasher {
    sha512: Sha512,
    sha3_512: Sha3_512,
    blake2b_512: Blake2b512,
    bytes_hashed: u64,
}

impl CompositeHasher {
    /// Create a hasher with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb more input.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.sha512.update(data);
        self.sha3_512.update(data);
        self.blake2b_512.update(data);
        self.bytes_hashed += data.len() as u64;
        self
    }

    /// Total number of input bytes absorbed so far.
    pub fn bytes_hashed(&self) -> u64 {
        self.bytes_hashed
    }

    /// Finish and return the composite digest.
    pub fn finalize(self) -> Digest512 {
        self.finalize_trace().composite
    }

    /// Finish and return the intermediate digests together with the composite.
    pub fn finalize_trace(self) -> DigestTrace {
        let intermediates = [
            finish(self.sha512),
            finish(self.sha3_512),
            finish(self.blake2b_512),
        ];
        let composite = fold(&intermediates);
        let [sha512, sha3_512, blake2b_512] = intermediates;
        DigestTrace {
            sha512,
            sha3_512,
            blake2b_512,
            composite,
        }
    }
}

impl fmt::Debug for CompositeHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeHasher")
            .field("bytes_hashed", &self.bytes_hashed)
            .finish_non_exhaustive()
    }
}

/// Concatenate three intermediate digests and hash the 192-byte result with SHA-512.
pub fn fold(intermediates: &[Digest512; 3]) -> Digest512 {
    let mut combined = [0u8; COMBINED_LEN];
    for (slot, digest) in combined.chunks_exact_mut(Digest512::LEN).zip(intermediates) {
        slot.copy_from_slice(digest.as_bytes());
    }
    finish(Sha512::new_with_prefix(combined))
}

/// Composite digest of `input`.
pub fn composite_digest(input: &[u8]) -> Digest512 {
    let mut hasher = CompositeHasher::new();
    hasher.update(input);
    hasher.finalize()
}

/// Composite digest of `input` along with its intermediate digests.
pub fn composite_trace(input: &[u8]) -> DigestTrace {
    let mut hasher = CompositeHasher::new();
    hasher.update(input);
    hasher.finalize_trace()
}

/// Check that `input` hashes to `expected`, comparing in constant time.
pub fn verify(input: &[u8], expected: &Digest512) -> bool {
    digests_match(&composite_digest(input), expected)
}

/// Constant-time equality of two digests.
pub fn digests_match(a: &Digest512, b: &Digest512) -> bool {
    a.as_bytes()[..].ct_eq(&b.as_bytes()[..]).into()
}
