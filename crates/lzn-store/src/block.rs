//! # Block Execution Context
//!
//! The host's block pipeline hands every handler a [`BlockCtx`]: the
//! monotonic block height, the UTC block time, and the event sink for the
//! current execution. Handlers never read a wall clock or a global — all
//! temporal decisions flow through this context, which is what keeps the
//! per-block sweep and every message deterministic across nodes.

use lzn_core::{Event, Timestamp};

/// Per-block execution context.
#[derive(Debug, Clone)]
pub struct BlockCtx {
    /// Monotonic block height.
    pub height: u64,
    /// UTC block time, monotonic non-decreasing across blocks.
    pub time: Timestamp,
    events: Vec<Event>,
}

impl BlockCtx {
    /// Create a context for the given block.
    pub fn new(height: u64, time: Timestamp) -> Self {
        Self {
            height,
            time,
            events: Vec::new(),
        }
    }

    /// Record an event for the host to drain after the handler completes.
    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Events emitted so far, in emission order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drain and return all emitted events.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
