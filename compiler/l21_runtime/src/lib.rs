//! L21 Runtime - the mutable state of one interpreter run.
//!
//! Bundles the two halves of L21's reference semantics into one owned
//! context:
//!
//! - a [`Store`] of mutable cells (the heap), and
//! - a [`GlobalEnv`] that every scope chain ends in.
//!
//! Instead of process-wide statics, each run owns a [`Runtime`] and passes it
//! through the evaluator. Independent runtimes never see each other's
//! bindings, which keeps tests isolated and lets a host run several programs.
//!
//! # Usage
//!
//! ```text
//! let mut rt = Runtime::new();
//! let addr = rt.define_global("a", value);
//! let env = rt.global_scope();
//! rt.assign(&env, "a", other)?;   // set!
//! let v = rt.lookup(&env, "a")?;
//! ```

mod builder;
mod config;
mod error;
mod runtime;

use std::sync::Once;

pub use builder::RuntimeBuilder;
pub use config::{RuntimeConfig, DEFAULT_STORE_CAPACITY};
pub use error::RuntimeError;
pub use runtime::Runtime;

pub use l21_env::{Environment, ExtEnv, FrameShapeError, GlobalEnv, GlobalLookup, UnboundVariable};
pub use l21_store::{Address, AddressError, Store};

static LOG_SUBSCRIBER: Once = Once::new();

/// Install a `fmt` subscriber for store and environment events.
///
/// Does nothing unless `RUST_LOG` is set, and nothing on any call after the
/// first. `RUST_LOG=l21_env=debug` shows global bindings and unbound names;
/// `RUST_LOG=l21_store=trace,l21_env=trace` adds every allocation, write and
/// resolved lookup.
pub fn init_tracing() {
    LOG_SUBSCRIBER.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os("RUST_LOG").is_none() {
            return;
        }
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true))
            .with(EnvFilter::from_default_env())
            .init();
    });
}
