use l21_env::{FrameShapeError, UnboundVariable};
use l21_store::AddressError;

/// Any failure of a runtime operation.
///
/// Each variant wraps the error of the component that failed, so `?` lifts
/// store and environment errors without losing their detail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Address(#[from] AddressError),
    #[error(transparent)]
    Unbound(#[from] UnboundVariable),
    #[error(transparent)]
    FrameShape(#[from] FrameShapeError),
}
