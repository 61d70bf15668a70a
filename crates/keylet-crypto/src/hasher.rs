use keylet_types::{AccountId, Currency, Uint256};
use sha2::{Digest, Sha512};

/// A value with one canonical fixed-width byte encoding.
///
/// Integers are written big-endian; identifiers and keys are written as their
/// raw bytes. Nothing is length-prefixed or delimited, so two field lists
/// hash alike only if they have the same widths and the same bytes.
pub trait HashAppend {
    fn hash_append(&self, hasher: &mut Sha512Half);
}

/// SHA-512 truncated to its first 256 bits.
///
/// Fields are fed in order with [`append`](Self::append) and the digest is
/// returned as a [`Uint256`].
#[derive(Clone, Default)]
pub struct Sha512Half {
    inner: Sha512,
}

impl Sha512Half {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Feed one field in its canonical encoding.
    pub fn append<T: HashAppend + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.hash_append(self);
        self
    }

    /// The leading 256 bits of the digest.
    pub fn finalize(self) -> Uint256 {
        let digest = self.inner.finalize();
        let mut half = [0u8; 32];
        half.copy_from_slice(&digest[..32]);
        Uint256::from_bytes(half)
    }

    /// One-shot hash of raw bytes.
    pub fn digest(data: &[u8]) -> Uint256 {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

/// Hash an ordered list of fields.
pub fn sha512_half(fields: &[&dyn HashAppend]) -> Uint256 {
    let mut hasher = Sha512Half::new();
    for field in fields {
        field.hash_append(&mut hasher);
    }
    hasher.finalize()
}

impl HashAppend for u16 {
    fn hash_append(&self, hasher: &mut Sha512Half) {
        hasher.update(&self.to_be_bytes());
    }
}

impl HashAppend for u32 {
    fn hash_append(&self, hasher: &mut Sha512Half) {
        hasher.update(&self.to_be_bytes());
    }
}

impl HashAppend for u64 {
    fn hash_append(&self, hasher: &mut Sha512Half) {
        hasher.update(&self.to_be_bytes());
    }
}

impl<const N: usize> HashAppend for [u8; N] {
    fn hash_append(&self, hasher: &mut Sha512Half) {
        hasher.update(self);
    }
}

impl HashAppend for Uint256 {
    fn hash_append(&self, hasher: &mut Sha512Half) {
        hasher.update(self.as_bytes());
    }
}

impl HashAppend for AccountId {
    fn hash_append(&self, hasher: &mut Sha512Half) {
        hasher.update(self.as_bytes());
    }
}

impl HashAppend for Currency {
    fn hash_append(&self, hasher: &mut Sha512Half) {
        hasher.update(self.as_bytes());
    }
}
