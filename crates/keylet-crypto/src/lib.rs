//! Hashing primitives for ledger keylets.
//!
//! Provides SHA-512-half (the leading 256 bits of SHA-512) and the
//! [`HashAppend`] trait that fixes how each field type is serialized into the
//! hash. All crypto operations wrap the `sha2` crate; no custom cryptography.

pub mod hasher;

pub use hasher::{sha512_half, HashAppend, Sha512Half};
