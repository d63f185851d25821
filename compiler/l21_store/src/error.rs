/// Error returned by store reads and writes that do not name a live cell.
///
/// Typed rather than stringly so the evaluator can tell a negative index
/// (a bad computation) from an index past the end (a stale or forged address).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The address is at or beyond the current store length.
    #[error("no such address: {address} (store has {len} cells)")]
    OutOfRange { address: usize, len: usize },
    /// The address came from a negative integer.
    #[error("no such address: {address} is negative")]
    Negative { address: i64 },
}
