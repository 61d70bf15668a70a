//! Storage-key derivation for ledger state objects.
//!
//! Every mutable object in the ledger's state map lives under a 256-bit key
//! that each node computes independently from the object's identifying
//! fields. This crate provides:
//! - [`LedgerSpace`] namespace tags that keep categories from colliding
//! - Raw index derivation for every category ([`indexes`])
//! - Quality encoding for rate-ordered order-book directories ([`quality`])
//! - Deterministic directory paging ([`directory`])
//! - [`Keylet`] (object type plus key) and one constructor per category
//!   ([`factory`])
//!
//! All functions are pure and thread-safe. Precondition violations, such as
//! paging a non-directory keylet or asking for the book of an identical
//! pair, panic rather than return a partial key.
//!
//! ```
//! use keylet::factory;
//! use keylet_types::{AccountId, Currency};
//!
//! let alice = AccountId::from_bytes([1; 20]);
//! let bob = AccountId::from_bytes([2; 20]);
//! let usd = Currency::from_iso("USD").unwrap();
//! assert_eq!(factory::line(&alice, &bob, &usd), factory::line(&bob, &alice, &usd));
//! ```

pub mod directory;
pub mod entry_type;
pub mod factory;
pub mod indexes;
pub mod keylet;
pub mod quality;
pub mod space;

pub use directory::{dir_node_index, directory_chain};
pub use entry_type::LedgerEntryType;
pub use keylet::Keylet;
pub use quality::{quality_index, quality_next, QUALITY_STEP};
pub use space::LedgerSpace;
