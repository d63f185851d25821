//! Store addresses.

use std::fmt;

use crate::AddressError;

/// Index of a cell in a [`Store`](crate::Store).
///
/// Addresses are assigned by the store at allocation time and stay valid for
/// the lifetime of that store. An `Address` built by hand (for example from
/// an evaluator integer) is only a claim; the store checks it on every access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(usize);

impl Address {
    /// Create an address from a raw cell index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Address(index)
    }

    /// Convert a signed evaluator integer into an address.
    ///
    /// Negative values never name a cell. Values too large for `usize` are
    /// clamped to `usize::MAX`, which no store can reach, so the store's own
    /// range check rejects them.
    pub fn from_raw(raw: i64) -> Result<Self, AddressError> {
        if raw < 0 {
            return Err(AddressError::Negative { address: raw });
        }
        Ok(Address(usize::try_from(raw).unwrap_or(usize::MAX)))
    }

    /// The raw cell index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Address {
    #[inline]
    fn from(index: usize) -> Self {
        Address(index)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}
