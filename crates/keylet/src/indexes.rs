//! Raw 256-bit index derivation for every ledger object category.
//!
//! Each index is SHA-512-half over a namespace tag followed by the category's
//! fields in a fixed order. These functions return bare keys; the typed
//! [`Keylet`](crate::Keylet) wrappers live in [`factory`](crate::factory).

use keylet_crypto::{HashAppend, Sha512Half};
use keylet_types::{AccountId, Book, Currency, Issue, LedgerIndex, Uint256};

use crate::quality::quality_index;
use crate::space::LedgerSpace;

/// Ledgers per long-range skip list bucket.
const SKIP_BUCKET_SHIFT: u32 = 16;

/// Reserved signer-list id hashed after the account.
const SIGNER_LIST_ID: u32 = 0;

/// Hash `space`'s tag followed by `fields`, in order.
pub fn index(space: LedgerSpace, fields: &[&dyn HashAppend]) -> Uint256 {
    let mut hasher = Sha512Half::new();
    hasher.append(&space);
    for field in fields {
        field.hash_append(&mut hasher);
    }
    hasher.finalize()
}

/// The skip list of the most recent 256 ledger hashes.
pub fn ledger_hash_index() -> Uint256 {
    index(LedgerSpace::SkipList, &[])
}

/// The long-range skip list holding the hash of `ledger`.
///
/// Every 65536 consecutive ledgers share one bucket.
pub fn ledger_hash_index_for(ledger: LedgerIndex) -> Uint256 {
    let bucket: u32 = ledger >> SKIP_BUCKET_SHIFT;
    index(LedgerSpace::SkipList, &[&bucket])
}

pub fn amendments_index() -> Uint256 {
    index(LedgerSpace::Amendment, &[])
}

pub fn fee_index() -> Uint256 {
    index(LedgerSpace::Fee, &[])
}

pub fn account_root_index(account: &AccountId) -> Uint256 {
    index(LedgerSpace::Account, &[account])
}

pub fn generator_index(generator: &AccountId) -> Uint256 {
    index(LedgerSpace::Generator, &[generator])
}

/// The quality-zero key of `book`'s directory.
///
/// Hashes input currency, output currency, input issuer, output issuer, then
/// clears the trailing 8 bytes so quality buckets can be written there.
///
/// # Panics
///
/// If `book` is not consistent (see [`Book::is_consistent`]).
pub fn book_base_index(book: &Book) -> Uint256 {
    if !book.is_consistent() {
        tracing::error!(%book, "book base requested for an inconsistent book");
    }
    assert!(book.is_consistent(), "inconsistent book: {book}");

    let hash = index(
        LedgerSpace::BookDir,
        &[
            &book.input.currency,
            &book.output.currency,
            &book.input.account,
            &book.output.account,
        ],
    );
    let base = quality_index(&hash, 0);
    tracing::trace!(%book, %base, "derived book base");
    base
}

pub fn offer_index(account: &AccountId, sequence: u32) -> Uint256 {
    index(LedgerSpace::Offer, &[account, &sequence])
}

pub fn owner_dir_index(account: &AccountId) -> Uint256 {
    index(LedgerSpace::OwnerDir, &[account])
}

pub fn ticket_index(account: &AccountId, sequence: u32) -> Uint256 {
    index(LedgerSpace::Ticket, &[account, &sequence])
}

/// The trust line between `a` and `b` in `currency`.
///
/// The lower account is always hashed first, so the argument order does not
/// matter.
pub fn trust_line_index(a: &AccountId, b: &AccountId, currency: &Currency) -> Uint256 {
    let (low, high) = if a < b { (a, b) } else { (b, a) };
    index(LedgerSpace::TrustLine, &[low, high, currency])
}

/// The trust line between `account` and `issue`'s issuer.
pub fn trust_line_index_for_issue(account: &AccountId, issue: &Issue) -> Uint256 {
    trust_line_index(account, &issue.account, &issue.currency)
}

pub fn signer_list_index(account: &AccountId) -> Uint256 {
    index(LedgerSpace::SignerList, &[account, &SIGNER_LIST_ID])
}

pub fn check_index(account: &AccountId, sequence: u32) -> Uint256 {
    index(LedgerSpace::Check, &[account, &sequence])
}

/// Authorization by `owner` for deposits from `preauthorized`. Not symmetric.
pub fn deposit_preauth_index(owner: &AccountId, preauthorized: &AccountId) -> Uint256 {
    index(LedgerSpace::DepositPreauth, &[owner, preauthorized])
}

pub fn escrow_index(source: &AccountId, sequence: u32) -> Uint256 {
    index(LedgerSpace::Escrow, &[source, &sequence])
}

pub fn pay_channel_index(source: &AccountId, destination: &AccountId, sequence: u32) -> Uint256 {
    index(LedgerSpace::PayChannel, &[source, destination, &sequence])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use keylet_crypto::sha512_half;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn account(fill: u8) -> AccountId {
        AccountId::from_bytes([fill; 20])
    }

    fn usd() -> Currency {
        Currency::from_iso("USD").unwrap()
    }

    #[test]
    fn index_prepends_tag() {
        let id = account(3);
        assert_eq!(
            index(LedgerSpace::Account, &[&id]),
            sha512_half(&[&0x0061u16, &id])
        );
    }

    #[test]
    fn index_is_deterministic() {
        let id = account(5);
        assert_eq!(offer_index(&id, 17), offer_index(&id, 17));
        assert_ne!(offer_index(&id, 17), offer_index(&id, 18));
    }

    #[test]
    fn skip_buckets_group_65536_ledgers() {
        assert_eq!(ledger_hash_index_for(0), ledger_hash_index_for(65535));
        assert_ne!(ledger_hash_index_for(65535), ledger_hash_index_for(65536));
        assert_eq!(ledger_hash_index_for(65536), ledger_hash_index_for(131071));
        assert_ne!(ledger_hash_index_for(0), ledger_hash_index());
    }

    #[test]
    fn same_fields_different_spaces() {
        let id = account(7);
        let keys = [
            offer_index(&id, 1),
            ticket_index(&id, 1),
            check_index(&id, 1),
            escrow_index(&id, 1),
        ];
        let distinct: HashSet<_> = keys.iter().collect();
        assert_eq!(distinct.len(), keys.len());
        assert_ne!(account_root_index(&id), owner_dir_index(&id));
        assert_ne!(account_root_index(&id), generator_index(&id));
    }

    #[test]
    fn spaces_separate_sampled_inputs() {
        let mut rng = StdRng::seed_from_u64(0x6b65_796c_6574);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let id = AccountId::from_bytes(rng.gen());
            let seq: u32 = rng.gen();
            for space in LedgerSpace::ALL {
                assert!(
                    seen.insert(index(space, &[&id, &seq])),
                    "collision in {space} for {id} / {seq}"
                );
            }
        }
        assert_eq!(seen.len(), 500 * LedgerSpace::ALL.len());
    }

    #[test]
    fn trust_line_sorts_accounts() {
        let (a, b) = (account(1), account(2));
        assert_eq!(trust_line_index(&a, &b, &usd()), trust_line_index(&b, &a, &usd()));
        assert_eq!(
            trust_line_index(&a, &b, &usd()),
            index(LedgerSpace::TrustLine, &[&a, &b, &usd()])
        );
        assert_ne!(
            trust_line_index(&a, &b, &usd()),
            trust_line_index(&a, &b, &Currency::from_iso("EUR").unwrap())
        );
    }

    #[test]
    fn trust_line_for_issue_uses_issuer() {
        let (holder, issuer) = (account(9), account(4));
        let issue = Issue::new(usd(), issuer);
        assert_eq!(
            trust_line_index_for_issue(&holder, &issue),
            trust_line_index(&issuer, &holder, &usd())
        );
    }

    #[test]
    fn deposit_preauth_is_directional() {
        let (a, b) = (account(1), account(2));
        assert_ne!(deposit_preauth_index(&a, &b), deposit_preauth_index(&b, &a));
    }

    #[test]
    fn pay_channel_is_directional() {
        let (a, b) = (account(1), account(2));
        assert_ne!(pay_channel_index(&a, &b, 1), pay_channel_index(&b, &a, 1));
    }

    #[test]
    fn signer_list_hashes_reserved_id() {
        let id = account(8);
        assert_eq!(
            signer_list_index(&id),
            index(LedgerSpace::SignerList, &[&id, &0u32])
        );
    }

    #[test]
    fn book_base_has_zero_quality() {
        let book = Book::new(Issue::new(usd(), account(1)), Issue::xrp());
        let base = book_base_index(&book);
        assert_eq!(base.low_u64(), 0);
        assert_ne!(base, book_base_index(&book.reversed()));
    }

    #[test]
    #[should_panic(expected = "inconsistent book")]
    fn book_base_rejects_identical_sides() {
        let side = Issue::new(usd(), account(1));
        book_base_index(&Book::new(side, side));
    }

    #[test]
    #[should_panic(expected = "inconsistent book")]
    fn book_base_rejects_malformed_issue() {
        let orphan = Issue::new(usd(), AccountId::xrp());
        book_base_index(&Book::new(orphan, Issue::xrp()));
    }
}
