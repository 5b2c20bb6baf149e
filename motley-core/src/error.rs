//! Errors reported by checked access.

/// Why a checked access to a container's alternative failed.
///
/// Both cases are recoverable: assigning or emplacing into the container
/// afterwards is always legal (and is the normal way out of the vacant
/// state).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// The container is live, but at a different alternative than the one
    /// requested.
    WrongAlternative {
        /// Type name of the requested alternative.
        expected: &'static str,
        /// Type name of the alternative actually live.
        actual: &'static str,
    },

    /// The container holds no value: a previous value-changing operation
    /// destroyed the old value and failed to construct the new one.
    Vacant,
}

impl core::fmt::Display for AccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccessError::WrongAlternative { expected, actual } => {
                write!(f, "wrong alternative: expected {expected}, value is {actual}")
            }
            AccessError::Vacant => {
                write!(f, "container is vacant (a failed construction emptied it)")
            }
        }
    }
}

impl core::error::Error for AccessError {}
