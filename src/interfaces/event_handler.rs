// ============================================================================
// Event Handler Interface
// Defines the contract for observing fixed-point lifecycle and accessor events
// ============================================================================

use crate::domain::InstanceId;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::io::{self, Write};

/// What happened to a `Fixed` instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    /// Constructed with raw value 0
    DefaultConstructed,

    /// Constructed from an integer, scaled by 256
    IntConstructed { value: i32 },

    /// Constructed from a float, scaled by 256 and rounded
    FloatConstructed { value: f32 },

    /// Constructed through the checked decimal boundary
    DecimalConstructed,

    /// Copy of another instance (always followed by `Assigned`)
    CopyConstructed,

    /// Raw bits copied from another instance
    Assigned,

    /// Raw bits read
    RawBitsRead,

    /// Raw bits overwritten, unscaled
    RawBitsWritten { raw: i32 },

    /// Instance dropped
    Dropped,
}

impl EventKind {
    /// The one-line console text for this operation.
    pub fn message(&self) -> &'static str {
        match self {
            EventKind::DefaultConstructed => "Default constructor called",
            EventKind::IntConstructed { .. } => "Int constructor called",
            EventKind::FloatConstructed { .. } => "Float constructor called",
            EventKind::DecimalConstructed => "Decimal constructor called",
            EventKind::CopyConstructed => "Copy constructor called",
            EventKind::Assigned => "Assignation operator called",
            EventKind::RawBitsRead => "getRawBits member function called",
            EventKind::RawBitsWritten { .. } => "setRawBits member function called",
            EventKind::Dropped => "Destructor called",
        }
    }
}

/// Event emitted by a `Fixed` instance
#[derive(Debug, Clone)]
pub struct FixedEvent {
    pub instance: InstanceId,
    pub kind: EventKind,
    pub timestamp: DateTime<Utc>,
}

impl FixedEvent {
    pub fn new(instance: InstanceId, kind: EventKind) -> Self {
        Self {
            instance,
            kind,
            timestamp: Utc::now(),
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

/// Event handler trait for processing fixed-point events
/// Implementations can handle console output, tracing, test recording, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a single event
    fn on_event(&self, event: FixedEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<FixedEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for benchmarks and quiet callers
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: FixedEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: FixedEvent) {
        tracing::debug!(
            instance = %event.instance,
            kind = ?event.kind,
            "{}",
            event.message()
        );
    }
}

/// Writes one line per event to a writer.
///
/// `ConsoleEventHandler::stdout()` prints exactly what the exercise driver
/// expects to see on the terminal.
pub struct ConsoleEventHandler<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleEventHandler<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consume the handler and hand back the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl ConsoleEventHandler<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> EventHandler for ConsoleEventHandler<W> {
    fn on_event(&self, event: FixedEvent) {
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "{}", event.message()) {
            tracing::warn!("Failed to write diagnostic line: {}", err);
        }
    }
}

/// Keeps every event in memory, in emission order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<FixedEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<FixedEvent> {
        self.events.lock().clone()
    }

    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.lock().iter().map(|e| e.kind).collect()
    }

    pub fn messages(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(|e| e.message()).collect()
    }

    /// Events of a single instance
    pub fn kinds_for(&self, instance: InstanceId) -> Vec<EventKind> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.instance == instance)
            .map(|e| e.kind)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: FixedEvent) {
        self.events.lock().push(event);
    }
}
