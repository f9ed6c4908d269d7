// ============================================================================
// Fixed-Point Value
// 32-bit fixed-point number with 8 fractional bits and observable operations
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::domain::InstanceId;
use crate::interfaces::{EventHandler, EventKind, FixedEvent, LoggingEventHandler};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Fixed-point number stored as `value × 2^8` in an `i32`.
///
/// Every construction, assignment, accessor call and drop is reported to the
/// instance's [`EventHandler`]. Copies share their source's handler but get a
/// fresh [`InstanceId`].
///
/// # Value Range
/// - Minimum: -8,388,608.0
/// - Maximum: +8,388,607.99609375
/// - Precision: 0.00390625 (1/256)
///
/// # Example
/// ```
/// use observable_fixed::prelude::*;
/// use std::sync::Arc;
///
/// let handler = Arc::new(RecordingEventHandler::new());
/// let a = Fixed::from_int(10, handler.clone());
/// let b = a.clone();
/// assert_eq!(b.raw_bits(), 2560);
/// assert_eq!(
///     handler.messages(),
///     vec![
///         "Int constructor called",
///         "Copy constructor called",
///         "Assignation operator called",
///         "getRawBits member function called",
///         "getRawBits member function called",
///     ]
/// );
/// ```
pub struct Fixed {
    raw: i32,
    id: InstanceId,
    handler: Arc<dyn EventHandler>,
}

// ============================================================================
// Scale Constants
// ============================================================================

/// 10^8 / 256: one raw step expressed with 8 decimal places
const DECIMAL_STEP: i64 = 390_625;
const DECIMAL_STEP_SCALE: u32 = 8;

impl Fixed {
    /// Number of fractional bits
    pub const FRACTIONAL_BITS: u32 = 8;

    /// The scale factor (2^FRACTIONAL_BITS)
    pub const SCALE: i32 = 1 << Self::FRACTIONAL_BITS;

    // ========================================================================
    // Construction
    // ========================================================================

    fn with_raw(raw: i32, handler: Arc<dyn EventHandler>, kind: EventKind) -> Self {
        let fixed = Self {
            raw,
            id: InstanceId::new(),
            handler,
        };
        fixed.emit(kind);
        fixed
    }

    /// Create a zero value.
    pub fn new(handler: Arc<dyn EventHandler>) -> Self {
        Self::with_raw(0, handler, EventKind::DefaultConstructed)
    }

    /// Create from an integer value.
    ///
    /// The raw value is `value << 8`. Values outside ±2^23 wrap silently;
    /// callers that need the range checked go through [`Fixed::from_decimal`].
    #[inline]
    pub fn from_int(value: i32, handler: Arc<dyn EventHandler>) -> Self {
        Self::with_raw(
            value << Self::FRACTIONAL_BITS,
            handler,
            EventKind::IntConstructed { value },
        )
    }

    /// Create from a float, rounding half away from zero to the nearest 1/256.
    ///
    /// Out-of-range inputs saturate at the raw bounds; NaN becomes zero.
    pub fn from_float(value: f32, handler: Arc<dyn EventHandler>) -> Self {
        let raw = (value * Self::SCALE as f32).round() as i32;
        Self::with_raw(raw, handler, EventKind::FloatConstructed { value })
    }

    /// Convert from rust_decimal::Decimal.
    ///
    /// This is the only checked entry point: integer and float construction,
    /// assignment and `set_raw_bits` never report range problems.
    ///
    /// # Errors
    /// - `Overflow` if the scaled value does not fit in an `i32`
    /// - `PrecisionLoss` if `value` is not a multiple of 1/256
    pub fn from_decimal(value: Decimal, handler: Arc<dyn EventHandler>) -> NumericResult<Self> {
        let scaled = value
            .checked_mul(Decimal::from(Self::SCALE))
            .ok_or(NumericError::Overflow)?;

        if !scaled.fract().is_zero() {
            return Err(NumericError::PrecisionLoss);
        }

        let raw = scaled.to_i32().ok_or(NumericError::Overflow)?;
        Ok(Self::with_raw(raw, handler, EventKind::DecimalConstructed))
    }

    // ========================================================================
    // Assignment
    // ========================================================================

    /// Copy `source`'s raw bits into `self` and return `self` for chaining.
    ///
    /// `self` keeps its own id and handler. The borrow rules already rule out
    /// `source` being `self`.
    #[inline]
    pub fn assign(&mut self, source: &Fixed) -> &mut Self {
        self.clone_from(source);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    #[inline]
    pub fn raw_bits(&self) -> i32 {
        self.emit(EventKind::RawBitsRead);
        self.raw
    }

    /// Overwrite the raw internal value. `raw` is taken as already scaled.
    #[inline]
    pub fn set_raw_bits(&mut self, raw: i32) {
        self.emit(EventKind::RawBitsWritten { raw });
        self.raw = raw;
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn handler(&self) -> &Arc<dyn EventHandler> {
        &self.handler
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Float view of the value.
    #[inline]
    pub fn to_float(&self) -> f32 {
        self.raw as f32 / Self::SCALE as f32
    }

    /// Integer part, rounded toward negative infinity.
    #[inline]
    pub fn to_int(&self) -> i32 {
        self.raw >> Self::FRACTIONAL_BITS
    }

    /// Exact decimal view of the value.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.raw as i64 * DECIMAL_STEP, DECIMAL_STEP_SCALE)
    }

    #[inline]
    fn emit(&self, kind: EventKind) {
        self.handler.on_event(FixedEvent::new(self.id, kind));
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fixed {
    /// Zero value reporting to `tracing`.
    fn default() -> Self {
        Self::new(Arc::new(LoggingEventHandler))
    }
}

impl Clone for Fixed {
    /// Copy construction: a fresh instance on the same handler, filled in
    /// through assignment.
    fn clone(&self) -> Self {
        let mut copy = Self {
            raw: 0,
            id: InstanceId::new(),
            handler: Arc::clone(&self.handler),
        };
        copy.emit(EventKind::CopyConstructed);
        copy.clone_from(self);
        copy
    }

    /// Assignment. The value is read through `raw_bits`, so the source
    /// reports a read as well.
    fn clone_from(&mut self, source: &Self) {
        self.emit(EventKind::Assigned);
        self.raw = source.raw_bits();
    }
}

impl Drop for Fixed {
    fn drop(&mut self) {
        self.emit(EventKind::Dropped);
    }
}

impl PartialEq for Fixed {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Fixed {}

impl PartialOrd for Fixed {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fixed {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl Hash for Fixed {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed({}, raw={})", self, self.raw)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal().normalize())
    }
}

// ============================================================================
// Tests
// ============================================================================
