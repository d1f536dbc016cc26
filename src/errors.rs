//! Definition of errors.

use std::collections::TryReserveError;
use std::fmt;

/// A specialized Result type for acscan.
pub type Result<T, E = AcscanError> = core::result::Result<T, E>;

/// Errors in acscan.
#[derive(Debug, thiserror::Error)]
pub enum AcscanError {
    /// The argument is invalid.
    #[error("InvalidArgumentError: {arg}: {msg}")]
    InvalidArgument {
        /// Name of the argument.
        arg: &'static str,

        /// Error message.
        msg: String,
    },

    /// The scale of the automaton exceeds the expected one.
    #[error("AutomatonScaleError: {arg} must be <= {max}")]
    AutomatonScale {
        /// Name of the quantity that overflowed.
        arg: &'static str,

        /// The maximum allowed value.
        max: u32,
    },

    /// The state arena could not grow.
    #[error("AllocationError: {0}")]
    Allocation(#[from] TryReserveError),
}

impl AcscanError {
    pub(crate) fn invalid_argument<T>(arg: &'static str, op: &str, value: T) -> Self
    where
        T: fmt::Display,
    {
        Self::InvalidArgument {
            arg,
            msg: format!("must be {op} {value}"),
        }
    }

    pub(crate) const fn automaton_scale(arg: &'static str, max: u32) -> Self {
        Self::AutomatonScale { arg, max }
    }
}
