// ============================================================================
// Observable Fixed-Point Library
// 8-fractional-bit fixed-point value with injectable per-operation diagnostics
// ============================================================================

//! # Observable Fixed
//!
//! A 32-bit fixed-point value type with 8 fractional bits, where every
//! construction, assignment, raw-bit access and drop is reported to a
//! pluggable event handler.
//!
//! ## Features
//!
//! - **Fixed scale** of 256 (`value << 8`), stored in a single `i32`
//! - **Injectable diagnostics** through the [`EventHandler`](interfaces::EventHandler) trait
//! - **Stock handlers** for console output, `tracing`, recording and silence
//! - **Exact decimal view** of the raw bits via `rust_decimal`
//!
//! ## Example
//!
//! ```rust
//! use observable_fixed::prelude::*;
//! use std::sync::Arc;
//!
//! let handler = DiagnosticsConfig::quiet().build_handler();
//!
//! let a = Fixed::new(Arc::clone(&handler));
//! let b = a.clone();
//! let mut c = Fixed::from_int(5, handler);
//! c.assign(&b);
//!
//! assert_eq!(a.raw_bits(), 0);
//! assert_eq!(c.raw_bits(), 0);
//! c.set_raw_bits(300);
//! println!("c = {} (raw {})", c, c.raw_bits());
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{DiagnosticsConfig, InstanceId, SinkKind};
    pub use crate::interfaces::{
        ConsoleEventHandler, EventHandler, EventKind, FixedEvent, LoggingEventHandler,
        NoOpEventHandler, RecordingEventHandler,
    };
    pub use crate::numeric::{Fixed, NumericError, NumericResult};
}
