// ============================================================================
// Instance Identity
// ============================================================================

use std::fmt;
use uuid::Uuid;

// ============================================================================
// Value Objects
// ============================================================================

/// Identifies one `Fixed` instance in diagnostic events.
///
/// Every construction (including a copy) draws a fresh id, so event streams
/// can tell a source apart from its copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(Uuid);

impl InstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for InstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
