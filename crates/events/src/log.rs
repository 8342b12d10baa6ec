//! Append-only in-memory event log.

use uuid::Uuid;

use crate::EventEnvelope;

/// Append-only, in-memory event log.
///
/// Records are never mutated, reordered or truncated. The full history is kept
/// for the lifetime of the log (no rotation, no cap).
#[derive(Debug, Clone)]
pub struct EventLog<E> {
    entries: Vec<EventEnvelope<E>>,
}

impl<E> Default for EventLog<E> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<E> EventLog<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a payload, assigning it the next sequence number and a fresh UUIDv7.
    pub fn append(&mut self, payload: E) -> &EventEnvelope<E> {
        let next = self.last_sequence_number() + 1;
        self.entries.push(EventEnvelope::new(Uuid::now_v7(), next, payload));
        &self.entries[self.entries.len() - 1]
    }

    /// All envelopes, oldest first.
    pub fn envelopes(&self) -> &[EventEnvelope<E>] {
        &self.entries
    }

    /// All payloads, oldest first.
    pub fn payloads(&self) -> impl Iterator<Item = &E> + '_ {
        self.entries.iter().map(EventEnvelope::payload)
    }

    pub fn last_sequence_number(&self) -> u64 {
        self.entries.last().map(|e| e.sequence_number()).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
