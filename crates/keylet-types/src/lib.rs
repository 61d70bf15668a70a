//! Foundation types for ledger keylets.
//!
//! Fixed-width value types shared by the hashing and derivation crates. None
//! of them carry behavior beyond construction, comparison, and text
//! conversion; every width and byte order is fixed so that independently
//! built nodes agree on their serialized form.
//!
//! # Key Types
//!
//! - [`Uint256`] — 256-bit big-endian key with exact full-width addition
//! - [`AccountId`] — 160-bit account identifier
//! - [`Currency`] — 160-bit currency identifier
//! - [`Issue`] — currency plus issuing account
//! - [`Book`] — directional pair of issues

pub mod account;
pub mod currency;
pub mod error;
pub mod issue;
pub mod strhex;
pub mod uint256;

pub use account::AccountId;
pub use currency::Currency;
pub use error::TypeError;
pub use issue::{Book, Issue};
pub use strhex::{char_unhex, str_unhex};
pub use uint256::Uint256;

/// Sequence number of a closed ledger.
pub type LedgerIndex = u32;
