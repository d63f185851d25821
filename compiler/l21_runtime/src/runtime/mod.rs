//! The per-run context.

use tracing::debug;

use l21_env::{Environment, FrameShapeError, GlobalEnv};
use l21_store::{Address, Store};

use crate::{RuntimeBuilder, RuntimeConfig, RuntimeError};

/// The store and global frame of one interpreter run.
///
/// Variables resolve through an [`Environment`] to an [`Address`], and the
/// address names a cell in this runtime's store. Every environment handed
/// out by a runtime ends in that runtime's global frame.
#[derive(Debug)]
pub struct Runtime<V> {
    store: Store<V>,
    global: GlobalEnv,
    config: RuntimeConfig,
}

impl<V> Runtime<V> {
    /// Create a runtime with an empty store and empty global frame.
    pub fn new() -> Self {
        RuntimeBuilder::new().build()
    }

    /// Start configuring a runtime.
    pub fn builder() -> RuntimeBuilder<V> {
        RuntimeBuilder::new()
    }

    pub(crate) fn from_parts(store: Store<V>, global: GlobalEnv, config: RuntimeConfig) -> Self {
        Runtime {
            store,
            global,
            config,
        }
    }

    /// Settings this runtime was built with.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// The heap shared by every environment of this run.
    pub fn store(&self) -> &Store<V> {
        &self.store
    }

    /// Mutable access to the heap, for evaluator writes that bypass names.
    pub fn store_mut(&mut self) -> &mut Store<V> {
        &mut self.store
    }

    /// The global frame every environment of this run ends in.
    pub fn global_env(&self) -> &GlobalEnv {
        &self.global
    }

    /// The environment top-level expressions are evaluated in.
    pub fn global_scope(&self) -> Environment {
        Environment::Global(self.global.clone())
    }

    /// Allocate a cell for `value` and bind `name` to it globally.
    pub fn define_global(&mut self, name: impl Into<String>, value: V) -> Address {
        let address = self.store.extend_get_address(value);
        self.global.add_binding(name, address);
        address
    }

    /// Overwrite the variable `name` as seen from `env` (`set!`).
    ///
    /// Every environment resolving `name` to the same address observes the
    /// new value.
    pub fn assign(&mut self, env: &Environment, name: &str, value: V) -> Result<(), RuntimeError> {
        let address = env.apply_env(name)?;
        self.store.set(address, value)?;
        Ok(())
    }

    /// Enter a scope: allocate one cell per value and bind `names` to them
    /// in a new frame on top of `parent`.
    ///
    /// A length mismatch is rejected before anything is allocated.
    pub fn bind_frame<N: Into<String>>(
        &mut self,
        parent: &Environment,
        names: impl IntoIterator<Item = N>,
        values: impl IntoIterator<Item = V>,
    ) -> Result<Environment, RuntimeError> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let values: Vec<V> = values.into_iter().collect();
        if names.len() != values.len() {
            debug!(names = names.len(), values = values.len(), "frame shape mismatch");
            return Err(FrameShapeError {
                names: names.len(),
                addresses: values.len(),
            }
            .into());
        }

        let addresses: Vec<Address> = values
            .into_iter()
            .map(|value| self.store.extend_get_address(value))
            .collect();
        Ok(parent.extend(names, addresses)?)
    }
}

impl<V: Clone> Runtime<V> {
    /// Read the variable `name` as seen from `env`.
    pub fn lookup(&self, env: &Environment, name: &str) -> Result<V, RuntimeError> {
        let address = env.apply_env(name)?;
        Ok(self.store.apply(address)?)
    }
}

impl<V> Default for Runtime<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
