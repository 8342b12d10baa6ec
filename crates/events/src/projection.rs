use crate::{Event, EventEnvelope};

/// A projection builds a read model from an append-only event stream.
///
/// Read models are **disposable**: they can be dropped and rebuilt from the log
/// at any time. Events are the source of truth.
///
/// Projections only consume events; they never write back to the log.
pub trait Projection {
    type Ev: Event;

    /// Apply a single event to the projection, updating the read model.
    ///
    /// Events that are not relevant to this projection should be ignored.
    fn apply(&mut self, envelope: &EventEnvelope<Self::Ev>);
}
