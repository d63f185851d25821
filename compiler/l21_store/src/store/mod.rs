//! The cell array behind every L21 variable.

use tracing::{debug, trace};

use crate::{Address, AddressError};

/// An append-only sequence of mutable value cells.
///
/// Cell `i` is created by the `i`-th call to [`Store::extend`] and stays at
/// index `i` for as long as the store lives. Only its content can change,
/// through [`Store::set`].
///
/// There is deliberately no `Clone`: a run owns exactly one store, and every
/// alias of a variable is an [`Address`] into it, never a copy of it.
#[derive(Debug)]
pub struct Store<V> {
    cells: Vec<V>,
}

impl<V> Store<V> {
    /// Create an empty store.
    pub fn new() -> Self {
        Store { cells: Vec::new() }
    }

    /// Create an empty store with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Store {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Number of allocated cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell has been allocated yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The address the next [`extend`](Store::extend) will assign.
    #[inline]
    pub fn next_address(&self) -> Address {
        Address::new(self.cells.len())
    }

    /// Append a cell holding `value`.
    ///
    /// The new cell's address is the store length before the call. Returns
    /// the store so allocations can be chained.
    pub fn extend(&mut self, value: V) -> &mut Self {
        let address = self.next_address();
        self.cells.push(value);
        trace!(%address, "store extended");
        self
    }

    /// Append a cell holding `value` and return its address.
    pub fn extend_get_address(&mut self, value: V) -> Address {
        let address = self.next_address();
        self.extend(value);
        address
    }

    /// Borrow the value at `address`.
    pub fn get(&self, address: Address) -> Result<&V, AddressError> {
        self.cells
            .get(address.index())
            .ok_or_else(|| out_of_range(address, self.cells.len()))
    }

    /// Overwrite the value at `address`.
    ///
    /// An address at or past the end is rejected and the store is left
    /// untouched.
    pub fn set(&mut self, address: Address, value: V) -> Result<(), AddressError> {
        let len = self.cells.len();
        match self.cells.get_mut(address.index()) {
            Some(cell) => {
                *cell = value;
                trace!(%address, "store cell overwritten");
                Ok(())
            }
            None => Err(out_of_range(address, len)),
        }
    }

    /// Iterate over every cell in address order.
    pub fn iter(&self) -> impl Iterator<Item = (Address, &V)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, value)| (Address::new(index), value))
    }
}

impl<V: Clone> Store<V> {
    /// Read a copy of the value at `address`.
    ///
    /// Reading never mutates, so repeated reads of an unmodified store agree.
    pub fn apply(&self, address: Address) -> Result<V, AddressError> {
        self.get(address).cloned()
    }
}

impl<V> Default for Store<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cold]
fn out_of_range(address: Address, len: usize) -> AddressError {
    debug!(%address, len, "rejected store access");
    AddressError::OutOfRange {
        address: address.index(),
        len,
    }
}
