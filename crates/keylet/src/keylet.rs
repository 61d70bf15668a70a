use std::fmt;

use keylet_types::Uint256;
use serde::{Deserialize, Serialize};

use crate::entry_type::LedgerEntryType;

/// Where a ledger object is stored and what kind of object it must be.
///
/// Produced by the functions in [`factory`](crate::factory); the storage layer
/// uses `key` as the address and `entry_type` to check what it read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Keylet {
    entry_type: LedgerEntryType,
    key: Uint256,
}

impl Keylet {
    pub(crate) const fn new(entry_type: LedgerEntryType, key: Uint256) -> Self {
        Self { entry_type, key }
    }

    pub fn entry_type(&self) -> LedgerEntryType {
        self.entry_type
    }

    pub fn key(&self) -> &Uint256 {
        &self.key
    }

    /// Whether an object of type `found` may be returned for this keylet.
    pub fn admits(&self, found: LedgerEntryType) -> bool {
        match self.entry_type {
            LedgerEntryType::Any => true,
            LedgerEntryType::Child => found != LedgerEntryType::DirectoryNode,
            expected => found == expected,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.entry_type == LedgerEntryType::DirectoryNode
    }
}

impl fmt::Display for Keylet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entry_type, self.key)
    }
}
