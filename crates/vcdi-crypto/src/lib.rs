//! # vcdi-crypto: Key Pairs for Data Integrity Cryptosuites
//!
//! Provides the signature algorithms behind the supported cryptosuites:
//!
//! - **Ed25519** (`eddsa-2022`).
//! - **ECDSA over P-256 with SHA-256** (`ecdsa-2019`), behind the default
//!   `ecdsa` feature.
//! - **Multibase** base58-btc encoding of proof values.
//!
//! ## Crate Policy
//!
//! - Depends only on `vcdi-core` internally.
//! - Signing input MUST be `&SigningInput`; raw bytes cannot be signed.
//! - Private keys do not implement `Serialize` and never appear in `Debug`.

pub mod ed25519;
#[cfg(feature = "ecdsa")]
pub mod ecdsa_p256;
pub mod key;
pub mod proof_value;

pub use ed25519::{Ed25519KeyPair, Ed25519PublicKey};
pub use key::{KeyAlgorithm, KeyPair, PublicKey};
#[cfg(feature = "ecdsa")]
pub use ecdsa_p256::{P256KeyPair, P256PublicKey};
pub use proof_value::{decode_proof_value, encode_proof_value};
