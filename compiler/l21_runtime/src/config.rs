//! Runtime configuration.

use l21_env::GlobalLookup;

/// Cells preallocated for a new store.
pub const DEFAULT_STORE_CAPACITY: usize = 256;

/// Settings fixed when a [`Runtime`](crate::Runtime) is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuntimeConfig {
    /// Which binding wins when a global name is defined twice.
    ///
    /// `FirstMatch` keeps the earliest definition visible; `LastMatch` lets
    /// redefinition replace it.
    pub global_lookup: GlobalLookup,
    /// Initial store capacity. Only affects allocation, never behavior.
    pub store_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            global_lookup: GlobalLookup::default(),
            store_capacity: DEFAULT_STORE_CAPACITY,
        }
    }
}
