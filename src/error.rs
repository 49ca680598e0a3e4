//! The one recoverable error in the crate: loading an entity from a caller
//! buffer that is too short. Everything numeric is infallible and follows
//! IEEE-754 propagation instead.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The source slice held fewer floats than the entity layout requires.
    TooShort { needed: usize, got: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::TooShort { needed, got } => {
                write!(f, "buffer holds {got} floats, layout needs {needed}")
            }
        }
    }
}

impl Error for LayoutError {}

/// Shared `from_slice` length check.
#[inline]
pub(crate) fn check_len(data: &[f32], needed: usize) -> Result<(), LayoutError> {
    if data.len() < needed {
        Err(LayoutError::TooShort { needed, got: data.len() })
    } else {
        Ok(())
    }
}
