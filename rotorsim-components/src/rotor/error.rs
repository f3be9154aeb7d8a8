use thiserror::Error;

/// Errors that may occur when working with rotor models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RotorError {
    /// The performance envelope was read before it was ever computed.
    #[error("rotor envelope has not been computed; call `recompute()` first")]
    EnvelopeNotComputed,

    /// An integer label did not map to a turning direction.
    #[error("invalid rotor turning direction `{0}` (expected 1 or -1)")]
    InvalidTurningDirection(i8),
}
