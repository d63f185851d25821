//! L21 Store - the interpreter heap.
//!
//! A store is an append-only sequence of mutable cells. Variables never hold
//! values directly; they hold an [`Address`] into the store, and the cell at
//! that address holds the value. Overwriting a cell is therefore visible to
//! every binding that resolves to the same address, which is how `set!`
//! gets reference semantics.
//!
//! # Invariants
//!
//! - An address, once handed out, keeps pointing at the same cell for the
//!   rest of the run. Cells are never moved or removed.
//! - The store only grows. There is no reclamation.
//! - Every failed access leaves the store exactly as it was.
//!
//! The store is generic over the value type; it never inspects values.

mod address;
mod error;
mod store;

pub use address::Address;
pub use error::AddressError;
pub use store::Store;
