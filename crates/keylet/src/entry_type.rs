use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of ledger object a key refers to.
///
/// `Any` and `Child` are lookup modes rather than stored types: they mark a
/// key whose object type the caller has not pinned down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerEntryType {
    AccountRoot,
    DirectoryNode,
    TrustLine,
    Offer,
    Escrow,
    PayChannel,
    Ticket,
    SignerList,
    Check,
    DepositPreauth,
    FeeSettings,
    Amendments,
    LedgerHashes,
    GeneratorMap,
    /// Unchecked: matches every stored type.
    Any,
    /// An entry reached through a directory; matches anything but a directory.
    Child,
}

impl LedgerEntryType {
    /// The 16-bit type code stored in the object itself.
    pub const fn code(self) -> Option<u16> {
        let code = match self {
            Self::AccountRoot => b'a',
            Self::DirectoryNode => b'd',
            Self::TrustLine => b'r',
            Self::Offer => b'o',
            Self::Escrow => b'u',
            Self::PayChannel => b'x',
            Self::Ticket => b'T',
            Self::SignerList => b'S',
            Self::Check => b'C',
            Self::DepositPreauth => b'p',
            Self::FeeSettings => b's',
            Self::Amendments => b'f',
            Self::LedgerHashes => b'h',
            Self::GeneratorMap => b'g',
            Self::Any | Self::Child => return None,
        };
        Some(code as u16)
    }

    /// Whether this names a concrete stored type.
    pub const fn is_concrete(self) -> bool {
        self.code().is_some()
    }
}

impl fmt::Display for LedgerEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AccountRoot => "AccountRoot",
            Self::DirectoryNode => "DirectoryNode",
            Self::TrustLine => "RippleState",
            Self::Offer => "Offer",
            Self::Escrow => "Escrow",
            Self::PayChannel => "PayChannel",
            Self::Ticket => "Ticket",
            Self::SignerList => "SignerList",
            Self::Check => "Check",
            Self::DepositPreauth => "DepositPreauth",
            Self::FeeSettings => "FeeSettings",
            Self::Amendments => "Amendments",
            Self::LedgerHashes => "LedgerHashes",
            Self::GeneratorMap => "GeneratorMap",
            Self::Any => "Any",
            Self::Child => "Child",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_modes_have_no_code() {
        assert_eq!(LedgerEntryType::Any.code(), None);
        assert_eq!(LedgerEntryType::Child.code(), None);
        assert!(!LedgerEntryType::Any.is_concrete());
        assert!(LedgerEntryType::Offer.is_concrete());
    }

    #[test]
    fn known_codes() {
        assert_eq!(LedgerEntryType::AccountRoot.code(), Some(0x0061));
        assert_eq!(LedgerEntryType::DirectoryNode.code(), Some(0x0064));
        assert_eq!(LedgerEntryType::TrustLine.code(), Some(0x0072));
        assert_eq!(LedgerEntryType::LedgerHashes.code(), Some(0x0068));
        assert_eq!(LedgerEntryType::Check.code(), Some(0x0043));
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&LedgerEntryType::PayChannel).unwrap();
        let parsed: LedgerEntryType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, LedgerEntryType::PayChannel);
    }
}
