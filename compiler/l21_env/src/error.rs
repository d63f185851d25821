/// A name that no frame in the chain binds.
///
/// This is an ordinary outcome of lookup; whether it is a program error is
/// up to the evaluator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no such variable: {name}")]
pub struct UnboundVariable {
    pub name: String,
}

/// A frame built from name and address sequences of different lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("frame shape mismatch: {names} names but {addresses} addresses")]
pub struct FrameShapeError {
    pub names: usize,
    pub addresses: usize,
}
