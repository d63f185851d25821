//! The global frame.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use l21_store::Address;

use crate::UnboundVariable;

/// Which binding a global lookup returns when a name was bound more than once.
///
/// The global frame never removes or overwrites a binding; redefining a name
/// appends a second entry. This setting picks which entry lookup sees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GlobalLookup {
    /// The earliest binding wins. Later bindings of the same name are kept
    /// but can never be reached through lookup.
    #[default]
    FirstMatch,
    /// The most recent binding wins, so redefinition replaces.
    LastMatch,
}

#[derive(Debug, Default)]
struct GlobalFrame {
    /// Binding names in insertion order. Same length as `addresses`.
    names: Vec<String>,
    addresses: Vec<Address>,
    /// Ascending positions of each name in `names`.
    positions: FxHashMap<String, SmallVec<[usize; 1]>>,
    lookup: GlobalLookup,
}

impl GlobalFrame {
    fn position(&self, name: &str) -> Option<usize> {
        let positions = self.positions.get(name)?;
        match self.lookup {
            GlobalLookup::FirstMatch => positions.first().copied(),
            GlobalLookup::LastMatch => positions.last().copied(),
        }
    }
}

/// The top-level frame of a run.
///
/// `GlobalEnv` is a handle: clones alias the same frame, and bindings added
/// through any handle are visible to every chain that ends in it. A run
/// creates one and keeps it for its whole lifetime.
///
/// Single-threaded: a host that shares a run across threads must lock the
/// whole runtime itself.
#[derive(Clone, Debug, Default)]
pub struct GlobalEnv(Rc<RefCell<GlobalFrame>>);

impl GlobalEnv {
    /// Create an empty global frame with first-match lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty global frame with the given lookup order.
    pub fn with_lookup(lookup: GlobalLookup) -> Self {
        GlobalEnv(Rc::new(RefCell::new(GlobalFrame {
            lookup,
            ..GlobalFrame::default()
        })))
    }

    /// The lookup order this frame was created with.
    pub fn lookup_order(&self) -> GlobalLookup {
        self.0.borrow().lookup
    }

    /// Append a binding of `name` to `address`.
    ///
    /// Existing bindings are left in place, including earlier bindings of
    /// the same name.
    pub fn add_binding(&self, name: impl Into<String>, address: Address) {
        let name = name.into();
        let mut guard = self.0.borrow_mut();
        let frame = &mut *guard;

        let position = frame.names.len();
        let positions = frame.positions.entry(name.clone()).or_default();
        positions.push(position);
        let redefinition = positions.len() > 1;

        debug!(%name, %address, "global binding added");
        if redefinition && frame.lookup == GlobalLookup::FirstMatch {
            debug!(%name, "redefinition hidden by the earlier global binding");
        }

        frame.names.push(name);
        frame.addresses.push(address);
    }

    /// Find the address bound to `name` in this frame.
    pub fn lookup(&self, name: &str) -> Option<Address> {
        let frame = self.0.borrow();
        frame
            .position(name)
            .and_then(|position| frame.addresses.get(position).copied())
    }

    /// Resolve `name`, failing if this frame does not bind it.
    pub fn apply(&self, name: &str) -> Result<Address, UnboundVariable> {
        self.lookup(name).ok_or_else(|| {
            debug!(name, "unbound variable");
            UnboundVariable {
                name: name.to_owned(),
            }
        })
    }

    /// How many bindings exist for `name`, counting hidden redefinitions.
    pub fn definitions(&self, name: &str) -> usize {
        self.0.borrow().positions.get(name).map_or(0, SmallVec::len)
    }

    /// Number of bindings, counting every redefinition.
    pub fn len(&self) -> usize {
        self.0.borrow().names.len()
    }

    /// Returns `true` if nothing has been bound yet.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().names.is_empty()
    }

    /// Snapshot of every binding in insertion order.
    pub fn bindings(&self) -> Vec<(String, Address)> {
        let frame = self.0.borrow();
        frame
            .names
            .iter()
            .cloned()
            .zip(frame.addresses.iter().copied())
            .collect()
    }

    /// Returns `true` if both handles alias the same frame.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
