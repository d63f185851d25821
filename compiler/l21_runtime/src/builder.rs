//! `RuntimeBuilder` for creating Runtime instances with various configurations.

use l21_env::{GlobalEnv, GlobalLookup};
use l21_store::Store;

use crate::{Runtime, RuntimeConfig};

/// Builder for creating [`Runtime`] instances.
///
/// By default the runtime gets a fresh store and a fresh global frame using
/// [`RuntimeConfig::default`].
pub struct RuntimeBuilder<V> {
    config: RuntimeConfig,
    store: Option<Store<V>>,
    global: Option<GlobalEnv>,
}

impl<V> RuntimeBuilder<V> {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        RuntimeBuilder {
            config: RuntimeConfig::default(),
            store: None,
            global: None,
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the global lookup order.
    #[must_use]
    pub fn global_lookup(mut self, lookup: GlobalLookup) -> Self {
        self.config.global_lookup = lookup;
        self
    }

    /// Set the initial store capacity.
    #[must_use]
    pub fn store_capacity(mut self, capacity: usize) -> Self {
        self.config.store_capacity = capacity;
        self
    }

    /// Start from an existing store instead of an empty one.
    #[must_use]
    pub fn store(mut self, store: Store<V>) -> Self {
        self.store = Some(store);
        self
    }

    /// Start from an existing global frame.
    ///
    /// The frame's own lookup order wins over the configured one.
    #[must_use]
    pub fn global_env(mut self, global: GlobalEnv) -> Self {
        self.global = Some(global);
        self
    }

    /// Build the runtime.
    pub fn build(self) -> Runtime<V> {
        let mut config = self.config;
        let global = match self.global {
            Some(global) => {
                config.global_lookup = global.lookup_order();
                global
            }
            None => GlobalEnv::with_lookup(config.global_lookup),
        };
        let store = self
            .store
            .unwrap_or_else(|| Store::with_capacity(config.store_capacity));
        Runtime::from_parts(store, global, config)
    }
}

impl<V> Default for RuntimeBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
