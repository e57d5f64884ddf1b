//! Error types shared by the sequence helpers and the traverser

use derive_more::Display;
use log::debug;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Names a required argument that was passed as absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Argument {
    /// The sequence handed to a strict helper (`none`, `for_each`)
    #[display(fmt = "source")]
    Source,

    /// The root sequence of a traversal
    #[display(fmt = "roots")]
    Roots,

    /// The stop condition of a conditional traversal
    #[display(fmt = "should_stop")]
    ShouldStop,

    /// The per-node or per-element action
    #[display(fmt = "action")]
    Action,
}

/// Failure of a helper or traversal call
///
/// `E` is the error type of the caller's callbacks. It defaults to
/// [`anyhow::Error`] so callbacks can use `?` freely.
#[derive(Debug, Display)]
pub enum Error<E = anyhow::Error> {
    /// A required argument was absent; raised before any element is processed
    #[display(fmt = "{} parameter cannot be absent", _0)]
    InvalidInput(Argument),

    /// A caller-supplied callback failed; its error is passed through as-is
    #[display(fmt = "{}", _0)]
    Callback(E),
}

impl<E> Error<E> {
    /// Returns true if this is a precondition failure
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// The absent argument, for precondition failures
    pub fn invalid_argument(&self) -> Option<Argument> {
        match self {
            Error::InvalidInput(argument) => Some(*argument),
            Error::Callback(_) => None,
        }
    }

    /// Unwrap the callback's own error, if that is what failed
    pub fn into_callback(self) -> Option<E> {
        match self {
            Error::InvalidInput(_) => None,
            Error::Callback(error) => Some(error),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for Error<E> {}

/// Result alias used across the crate
pub type Result<T, E = anyhow::Error> = std::result::Result<T, Error<E>>;

/// Unwrap a required argument or report it as [`Error::InvalidInput`]
pub(crate) fn require<V, E>(value: Option<V>, argument: Argument) -> Result<V, E> {
    value.ok_or_else(|| {
        debug!("Rejecting call: {} parameter is absent", argument);
        Error::InvalidInput(argument)
    })
}
