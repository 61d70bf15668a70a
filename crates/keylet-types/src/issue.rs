use std::fmt;

use serde::{Deserialize, Serialize};

use crate::account::AccountId;
use crate::currency::Currency;

/// A currency together with its issuing account.
///
/// The native asset has no issuer: its currency and account are both zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Issue {
    pub currency: Currency,
    pub account: AccountId,
}

impl Issue {
    pub const fn new(currency: Currency, account: AccountId) -> Self {
        Self { currency, account }
    }

    /// The native asset.
    pub const fn xrp() -> Self {
        Self {
            currency: Currency::xrp(),
            account: AccountId::xrp(),
        }
    }

    pub fn is_xrp(&self) -> bool {
        self.currency.is_xrp()
    }

    /// A native currency must have the native issuer and vice versa.
    pub fn is_consistent(&self) -> bool {
        self.currency.is_xrp() == self.account.is_xrp()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_xrp() {
            write!(f, "{}", self.currency)
        } else {
            write!(f, "{}/{}", self.account, self.currency)
        }
    }
}

/// A directional market: offers that take `input` and give `output`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Book {
    pub input: Issue,
    pub output: Issue,
}

impl Book {
    pub const fn new(input: Issue, output: Issue) -> Self {
        Self { input, output }
    }

    /// The same pair traded in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            input: self.output,
            output: self.input,
        }
    }

    /// Both sides are well-formed issues and they differ.
    pub fn is_consistent(&self) -> bool {
        self.input.is_consistent() && self.output.is_consistent() && self.input != self.output
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.input, self.output)
    }
}
