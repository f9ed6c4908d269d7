// ============================================================================
// Numeric Module
// Fixed-point value with 8 fractional bits
// ============================================================================
//
// This module provides:
// - Fixed: 32-bit fixed-point value that reports every operation
// - NumericError: Error types for checked boundary conversions
//
// Design principles:
// - Raw representation is an i32 scaled by 2^8; nothing else is cached
// - Integer construction is a plain shift (wraps, never panics)
// - Only boundary conversions return Result

mod errors;
mod fixed;

pub use errors::{NumericError, NumericResult};
pub use fixed::Fixed;
