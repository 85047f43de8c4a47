use thiserror::Error;

/// Rejections raised by the reducer. Stored in the state, never propagated.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CounterError {
    /// Decrement attempted while the counter sits at zero.
    #[error("You can't go below zero.")]
    FloorViolation,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown test id: {0:?}")]
pub struct TestIdError(pub String);
