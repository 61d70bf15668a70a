use std::fmt;

use keylet_crypto::{HashAppend, Sha512Half};

/// Namespace tag hashed in front of every index.
///
/// Each category of ledger object gets its own tag, so identical field tuples
/// from two categories never hash to the same key. The discriminants are the
/// ASCII codes of the listed characters and are part of the on-ledger format:
/// changing one moves every object of that category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum LedgerSpace {
    Account = b'a' as u16,
    DirNode = b'd' as u16,
    Generator = b'g' as u16,
    TrustLine = b'r' as u16,
    Offer = b'o' as u16,
    OwnerDir = b'O' as u16,
    BookDir = b'B' as u16,
    SkipList = b's' as u16,
    Escrow = b'u' as u16,
    Amendment = b'f' as u16,
    Fee = b'e' as u16,
    Ticket = b'T' as u16,
    SignerList = b'S' as u16,
    PayChannel = b'x' as u16,
    Check = b'C' as u16,
    DepositPreauth = b'p' as u16,
}

impl LedgerSpace {
    pub const ALL: [LedgerSpace; 16] = [
        Self::Account,
        Self::DirNode,
        Self::Generator,
        Self::TrustLine,
        Self::Offer,
        Self::OwnerDir,
        Self::BookDir,
        Self::SkipList,
        Self::Escrow,
        Self::Amendment,
        Self::Fee,
        Self::Ticket,
        Self::SignerList,
        Self::PayChannel,
        Self::Check,
        Self::DepositPreauth,
    ];

    /// The 16-bit tag written into the hash.
    pub const fn tag(self) -> u16 {
        self as u16
    }
}

impl HashAppend for LedgerSpace {
    fn hash_append(&self, hasher: &mut Sha512Half) {
        self.tag().hash_append(hasher);
    }
}

impl fmt::Display for LedgerSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, char::from(self.tag() as u8))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn tags_are_distinct() {
        let tags: HashSet<u16> = LedgerSpace::ALL.iter().map(|s| s.tag()).collect();
        assert_eq!(tags.len(), LedgerSpace::ALL.len());
    }

    #[test]
    fn tags_are_ascii_codes() {
        assert_eq!(LedgerSpace::Account.tag(), 0x61);
        assert_eq!(LedgerSpace::OwnerDir.tag(), 0x4f);
        assert_eq!(LedgerSpace::BookDir.tag(), 0x42);
        assert_eq!(LedgerSpace::PayChannel.tag(), 0x78);
    }

    #[test]
    fn hashes_as_big_endian_u16() {
        let mut via_space = Sha512Half::new();
        via_space.append(&LedgerSpace::Offer);
        assert_eq!(via_space.finalize(), Sha512Half::digest(&[0x00, b'o']));
    }

    #[test]
    fn display_shows_character() {
        assert_eq!(LedgerSpace::Ticket.to_string(), "Ticket(T)");
    }
}
