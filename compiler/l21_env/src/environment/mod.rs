//! Scope chains.

use std::fmt;
use std::mem;
use std::rc::Rc;

use smallvec::SmallVec;
use tracing::trace;

use l21_store::Address;

use crate::{FrameShapeError, GlobalEnv, UnboundVariable};

/// A fixed frame of bindings linked to its enclosing environment.
///
/// Built once on scope entry and never changed afterwards. Frames are shared
/// through `Rc`, so a closure and an active call can hold the same chain.
pub struct ExtEnv {
    names: SmallVec<[String; 4]>,
    addresses: SmallVec<[Address; 4]>,
    parent: Environment,
}

impl ExtEnv {
    /// Build a frame from parallel name and address sequences.
    ///
    /// The sequences must have the same length.
    pub fn new<N: Into<String>>(
        names: impl IntoIterator<Item = N>,
        addresses: impl IntoIterator<Item = Address>,
        parent: Environment,
    ) -> Result<Self, FrameShapeError> {
        let names: SmallVec<[String; 4]> = names.into_iter().map(Into::into).collect();
        let addresses: SmallVec<[Address; 4]> = addresses.into_iter().collect();
        if names.len() != addresses.len() {
            return Err(FrameShapeError {
                names: names.len(),
                addresses: addresses.len(),
            });
        }
        Ok(ExtEnv {
            names,
            addresses,
            parent,
        })
    }

    /// Build a frame from `(name, address)` pairs.
    pub fn from_pairs<N: Into<String>>(
        pairs: impl IntoIterator<Item = (N, Address)>,
        parent: Environment,
    ) -> Self {
        let (names, addresses) = pairs
            .into_iter()
            .map(|(name, address)| (name.into(), address))
            .unzip();
        ExtEnv {
            names,
            addresses,
            parent,
        }
    }

    /// Names bound by this frame, in binding order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Addresses bound by this frame, parallel to [`names`](ExtEnv::names).
    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    /// The enclosing environment.
    pub fn parent(&self) -> &Environment {
        &self.parent
    }

    /// Find `name` in this frame only. The leftmost match wins.
    pub fn lookup_local(&self, name: &str) -> Option<Address> {
        self.names
            .iter()
            .position(|bound| bound == name)
            .and_then(|position| self.addresses.get(position).copied())
    }
}

impl fmt::Debug for ExtEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only this frame; printing the parent would walk the whole chain.
        f.debug_struct("ExtEnv")
            .field("names", &self.names)
            .field("addresses", &self.addresses)
            .field("parent_depth", &self.parent.depth())
            .finish()
    }
}

impl Drop for ExtEnv {
    /// Unlink uniquely owned ancestors one at a time so freeing a long chain
    /// never nests one drop call per frame.
    fn drop(&mut self) {
        if self.parent.is_global_env() {
            return;
        }
        let tail = Environment::Global(self.parent.global().clone());
        let mut next = mem::replace(&mut self.parent, tail.clone());
        while let Environment::Ext(frame) = next {
            match Rc::try_unwrap(frame) {
                // `owned` drops at the end of this arm with a global parent.
                Ok(mut owned) => next = mem::replace(&mut owned.parent, tail.clone()),
                // Still shared; whoever holds it frees the rest.
                Err(_) => break,
            }
        }
    }
}

/// An environment: a chain of frames ending in the global frame.
///
/// Cloning is cheap and shares the chain. New scopes are only ever added at
/// the front, so chains are acyclic and always terminate in a [`GlobalEnv`].
#[derive(Clone, Debug)]
pub enum Environment {
    /// The top-level frame.
    Global(GlobalEnv),
    /// A frame introduced by entering a scope.
    Ext(Rc<ExtEnv>),
}

impl Environment {
    /// Make `frame` the innermost scope of a new environment.
    pub fn from_ext(frame: ExtEnv) -> Self {
        Environment::Ext(Rc::new(frame))
    }

    /// Extend this environment with a new innermost frame.
    pub fn extend<N: Into<String>>(
        &self,
        names: impl IntoIterator<Item = N>,
        addresses: impl IntoIterator<Item = Address>,
    ) -> Result<Self, FrameShapeError> {
        ExtEnv::new(names, addresses, self.clone()).map(Self::from_ext)
    }

    /// Extend this environment with a frame built from `(name, address)` pairs.
    #[must_use]
    pub fn extend_pairs<N: Into<String>>(
        &self,
        pairs: impl IntoIterator<Item = (N, Address)>,
    ) -> Self {
        Self::from_ext(ExtEnv::from_pairs(pairs, self.clone()))
    }

    /// Resolve `name` to an address, searching from the innermost frame out.
    ///
    /// Within one frame the leftmost binding wins; the global frame applies
    /// its configured [`GlobalLookup`](crate::GlobalLookup) order.
    pub fn apply_env(&self, name: &str) -> Result<Address, UnboundVariable> {
        let mut env = self;
        let mut depth = 0usize;
        loop {
            match env {
                Environment::Ext(frame) => {
                    if let Some(address) = frame.lookup_local(name) {
                        trace!(name, %address, depth, "resolved in extension frame");
                        return Ok(address);
                    }
                    env = &frame.parent;
                    depth += 1;
                }
                Environment::Global(global) => {
                    let address = global.apply(name)?;
                    trace!(name, %address, depth, "resolved in global frame");
                    return Ok(address);
                }
            }
        }
    }

    /// Returns `true` if some frame in the chain binds `name`.
    pub fn is_bound(&self, name: &str) -> bool {
        self.apply_env(name).is_ok()
    }

    /// Returns `true` if this is the global frame itself.
    pub fn is_global_env(&self) -> bool {
        matches!(self, Environment::Global(_))
    }

    /// Returns `true` if this is an extension frame.
    pub fn is_ext_env(&self) -> bool {
        matches!(self, Environment::Ext(_))
    }

    /// The innermost frame, if it is an extension frame.
    pub fn as_ext(&self) -> Option<&ExtEnv> {
        match self {
            Environment::Ext(frame) => Some(frame.as_ref()),
            Environment::Global(_) => None,
        }
    }

    /// The global frame at the end of this chain.
    pub fn global(&self) -> &GlobalEnv {
        let mut env = self;
        loop {
            match env {
                Environment::Ext(frame) => env = &frame.parent,
                Environment::Global(global) => return global,
            }
        }
    }

    /// Number of frames in the chain, including the global frame.
    pub fn depth(&self) -> usize {
        let mut env = self;
        let mut depth = 1;
        while let Environment::Ext(frame) = env {
            env = &frame.parent;
            depth += 1;
        }
        depth
    }
}

impl From<GlobalEnv> for Environment {
    fn from(global: GlobalEnv) -> Self {
        Environment::Global(global)
    }
}

impl From<ExtEnv> for Environment {
    fn from(frame: ExtEnv) -> Self {
        Self::from_ext(frame)
    }
}
