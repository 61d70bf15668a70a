//! One keylet constructor per ledger object category.
//!
//! Every function here is pure: it hashes its arguments through
//! [`indexes`](crate::indexes) and tags the result with the object type the
//! storage layer should find at that key. Directory-only operations assert
//! that they were handed a directory keylet.

use keylet_types::{AccountId, Book, Currency, Issue, LedgerIndex, Uint256};

use crate::directory::dir_node_index;
use crate::entry_type::LedgerEntryType;
use crate::indexes;
use crate::keylet::Keylet;
use crate::quality::{quality_index, quality_next};

fn expect_directory(keylet: &Keylet, operation: &'static str) {
    if !keylet.is_directory() {
        tracing::error!(
            operation,
            entry_type = %keylet.entry_type(),
            key = %keylet.key(),
            "directory operation on a non-directory keylet"
        );
    }
    assert!(
        keylet.is_directory(),
        "{operation} requires a directory keylet, got {}",
        keylet.entry_type()
    );
}

pub fn account(id: &AccountId) -> Keylet {
    Keylet::new(
        LedgerEntryType::AccountRoot,
        indexes::account_root_index(id),
    )
}

/// An entry reached through a directory, whose exact type is not known.
pub fn child(key: Uint256) -> Keylet {
    Keylet::new(LedgerEntryType::Child, key)
}

/// A key whose object type is not checked.
pub fn unchecked(key: Uint256) -> Keylet {
    Keylet::new(LedgerEntryType::Any, key)
}

/// The hashes of the most recent 256 ledgers.
pub fn skip() -> Keylet {
    Keylet::new(LedgerEntryType::LedgerHashes, indexes::ledger_hash_index())
}

/// The long-range ledger hash history containing `ledger`.
pub fn skip_for(ledger: LedgerIndex) -> Keylet {
    Keylet::new(
        LedgerEntryType::LedgerHashes,
        indexes::ledger_hash_index_for(ledger),
    )
}

pub fn amendments() -> Keylet {
    Keylet::new(LedgerEntryType::Amendments, indexes::amendments_index())
}

pub fn fees() -> Keylet {
    Keylet::new(LedgerEntryType::FeeSettings, indexes::fee_index())
}

pub fn generator(id: &AccountId) -> Keylet {
    Keylet::new(LedgerEntryType::GeneratorMap, indexes::generator_index(id))
}

/// The quality-zero directory of `book`. Direction matters.
///
/// # Panics
///
/// If `book` is not consistent.
pub fn book(book: &Book) -> Keylet {
    Keylet::new(
        LedgerEntryType::DirectoryNode,
        indexes::book_base_index(book),
    )
}

/// The trust line between two accounts; symmetric in `a` and `b`.
pub fn line(a: &AccountId, b: &AccountId, currency: &Currency) -> Keylet {
    Keylet::new(
        LedgerEntryType::TrustLine,
        indexes::trust_line_index(a, b, currency),
    )
}

/// The trust line between `id` and the issuer of `issue`.
pub fn line_for_issue(id: &AccountId, issue: &Issue) -> Keylet {
    Keylet::new(
        LedgerEntryType::TrustLine,
        indexes::trust_line_index_for_issue(id, issue),
    )
}

pub fn offer(id: &AccountId, sequence: u32) -> Keylet {
    Keylet::new(LedgerEntryType::Offer, indexes::offer_index(id, sequence))
}

/// The bucket of `book_dir` holding offers at `quality`.
///
/// # Panics
///
/// If `book_dir` is not a directory keylet.
pub fn quality(book_dir: &Keylet, quality: u64) -> Keylet {
    expect_directory(book_dir, "quality");
    let key = quality_index(book_dir.key(), quality);
    tracing::trace!(base = %book_dir.key(), quality, %key, "quality bucket");
    Keylet::new(LedgerEntryType::DirectoryNode, key)
}

/// The first key past every quality bucket of `book_dir`.
///
/// # Panics
///
/// If `book_dir` is not a directory keylet.
pub fn next_quality(book_dir: &Keylet) -> Keylet {
    expect_directory(book_dir, "next_quality");
    Keylet::new(LedgerEntryType::DirectoryNode, quality_next(book_dir.key()))
}

pub fn ticket(id: &AccountId, sequence: u32) -> Keylet {
    Keylet::new(LedgerEntryType::Ticket, indexes::ticket_index(id, sequence))
}

pub fn signers(id: &AccountId) -> Keylet {
    Keylet::new(LedgerEntryType::SignerList, indexes::signer_list_index(id))
}

pub fn check(id: &AccountId, sequence: u32) -> Keylet {
    Keylet::new(LedgerEntryType::Check, indexes::check_index(id, sequence))
}

pub fn deposit_preauth(owner: &AccountId, preauthorized: &AccountId) -> Keylet {
    Keylet::new(
        LedgerEntryType::DepositPreauth,
        indexes::deposit_preauth_index(owner, preauthorized),
    )
}

/// Root page of the directory listing everything `id` owns.
pub fn owner_dir(id: &AccountId) -> Keylet {
    Keylet::new(
        LedgerEntryType::DirectoryNode,
        indexes::owner_dir_index(id),
    )
}

/// Page `index` of the directory rooted at `root`.
///
/// # Panics
///
/// If `root` is not a directory keylet.
pub fn page(root: &Keylet, index: u64) -> Keylet {
    expect_directory(root, "page");
    page_of(root.key(), index)
}

/// Page `index` of the directory whose root key is `root`.
pub fn page_of(root: &Uint256, index: u64) -> Keylet {
    let key = dir_node_index(root, index);
    tracing::trace!(%root, index, %key, "directory page");
    Keylet::new(LedgerEntryType::DirectoryNode, key)
}

pub fn escrow(source: &AccountId, sequence: u32) -> Keylet {
    Keylet::new(
        LedgerEntryType::Escrow,
        indexes::escrow_index(source, sequence),
    )
}

pub fn pay_channel(source: &AccountId, destination: &AccountId, sequence: u32) -> Keylet {
    Keylet::new(
        LedgerEntryType::PayChannel,
        indexes::pay_channel_index(source, destination, sequence),
    )
}
