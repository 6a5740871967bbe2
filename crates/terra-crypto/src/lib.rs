//! Composite digest for TerraHash.
//!
//! Hashes input with SHA-512, SHA3-512 and BLAKE2b-512, concatenates the three
//! 64-byte digests in that order, and hashes the 192-byte result with SHA-512
//! to produce the final 64-byte digest.
//!
//! All primitives come from established RustCrypto crates; nothing here is custom cryptography.
//!
//! ```
//! let digest = terra_crypto::composite_digest(b"This is some data to hash.");
//! assert_eq!(digest.to_hex().len(), 128);
//! ```

pub mod algorithm;
pub mod error;
pub mod hasher;
pub mod stream;

pub use algorithm::algorithm_digest;
pub use error::{CryptoError, CryptoResult};
pub use hasher::{composite_digest, composite_trace, digests_match, fold, verify, CompositeHasher};
pub use stream::{digest_file, digest_reader, DEFAULT_CHUNK_SIZE};
