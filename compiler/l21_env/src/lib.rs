//! L21 Env - variable scoping for the L21 interpreter.
//!
//! An environment maps variable names to store [`Address`]es. It is a
//! singly-linked chain of frames:
//!
//! - [`ExtEnv`]: a fixed frame created on scope entry (e.g. a function call),
//!   linked to its enclosing environment. Never mutated after creation.
//! - [`GlobalEnv`]: the single top-level frame every chain ends in. It grows
//!   in place as top-level definitions are added.
//!
//! Lookup walks from the innermost frame outwards, so inner bindings shadow
//! outer ones. The environment never touches the store; the evaluator
//! resolves a name here and then reads or writes the store itself.

mod environment;
mod error;
mod global;

pub use environment::{Environment, ExtEnv};
pub use error::{FrameShapeError, UnboundVariable};
pub use global::{GlobalEnv, GlobalLookup};

pub use l21_store::Address;
