//! Instruction fetch queue (IFQ).
//!
//! Bounded FIFO of fetched-but-undispatched instructions. Entries are
//! [`InstId`] handles; the records themselves live in the trace. It provides:
//! 1. **FIFO order:** `push` at the tail, `pop`/`peek` at the head, no reordering.
//! 2. **Capacity bound:** `is_full` reports `len > capacity`, checked by fetch
//!    before it enqueues, so the queue can momentarily hold `capacity + 1` entries.

use std::collections::VecDeque;

use crate::isa::instruction::InstId;

/// Bounded FIFO of instruction handles.
#[derive(Clone, Debug)]
pub struct FetchQueue {
    entries: VecDeque<InstId>,
    capacity: usize,
}

impl FetchQueue {
    /// Creates an empty queue with the given capacity bound.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends an instruction at the tail.
    pub fn push(&mut self, id: InstId) {
        self.entries.push_back(id);
    }

    /// Removes and returns the oldest instruction.
    pub fn pop(&mut self) -> Option<InstId> {
        self.entries.pop_front()
    }

    /// Returns the oldest instruction without removing it.
    pub fn peek(&self) -> Option<InstId> {
        self.entries.front().copied()
    }

    /// True once the queue holds more entries than its capacity bound.
    pub fn is_full(&self) -> bool {
        self.entries.len() > self.capacity
    }

    /// Number of queued instructions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
