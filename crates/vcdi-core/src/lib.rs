//! # vcdi-core: Foundational Types for Data Integrity Proofs
//!
//! Leaf crate of the workspace. Defines the primitives every other crate
//! builds on when producing or checking a Data Integrity proof.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalBytes` newtype.** Everything that is hashed or signed flows
//!    through `CanonicalBytes::new()` (RFC 8785 JSON Canonicalization Scheme).
//!    Raw `serde_json::to_vec()` output is never hashed.
//!
//! 2. **`SigningInput` newtype.** The Data Integrity hash data
//!    (`SHA-256(proof config) || SHA-256(document)`) can only be built from two
//!    `CanonicalBytes` values. Key pairs in `vcdi-crypto` sign nothing else.
//!
//! 3. **UTC-only timestamps.** `Timestamp` is UTC with a `Z` suffix and
//!    seconds precision, matching the `created` / `expires` proof fields.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vcdi-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod temporal;

pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest, SigningInput};
pub use error::{CanonicalizationError, CryptoError, VcdiError};
pub use temporal::Timestamp;
