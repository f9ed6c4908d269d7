// ============================================================================
// Numeric Errors
// Error types for checked fixed-point conversions
// ============================================================================

use std::fmt;

/// Errors that can occur when a value crosses into the fixed-point domain
/// through a checked boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Scaled value does not fit in the 32-bit raw representation
    Overflow,
    /// Value is not a multiple of 1/256
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: scaled value exceeds 32-bit range")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: value is not representable with 8 fractional bits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
