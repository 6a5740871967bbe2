use blake2::Blake2b512;
use sha2::digest::consts::U64;
use sha2::{Digest, Sha512};
use sha3::Sha3_512;
use terra_types::{Digest512, HashAlgorithm};

/// Hash `input` with a single underlying algorithm.
pub fn algorithm_digest(alg: HashAlgorithm, input: &[u8]) -> Digest512 {
    match alg {
        HashAlgorithm::Sha512 => finish(Sha512::new_with_prefix(input)),
        HashAlgorithm::Sha3_512 => finish(Sha3_512::new_with_prefix(input)),
        HashAlgorithm::Blake2b512 => finish(Blake2b512::new_with_prefix(input)),
    }
}

/// Finalize any 64-byte-output hasher into a [`Digest512`].
pub(crate) fn finish<D: Digest<OutputSize = U64>>(hasher: D) -> Digest512 {
    let mut bytes = [0u8; Digest512::LEN];
    bytes.copy_from_slice(&hasher.finalize());
    Digest512::from_bytes(bytes)
}
