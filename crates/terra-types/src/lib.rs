//! Foundation types for TerraHash.
//!
//! This crate provides the value types shared by the hashing crate and the
//! command-line tool.
//!
//! # Key Types
//!
//! - [`Digest512`]: 64-byte digest, rendered as lowercase hex
//! - [`HashAlgorithm`]: The three underlying algorithms and their fixed order
//! - [`DigestTrace`]: Intermediate and final digests of one computation

pub mod algorithm;
pub mod digest;
pub mod error;
pub mod trace;

pub use algorithm::{HashAlgorithm, COMBINED_LEN, COMPOSITION_ORDER, FINAL_ALGORITHM};
pub use digest::Digest512;
pub use error::TypeError;
pub use trace::DigestTrace;
