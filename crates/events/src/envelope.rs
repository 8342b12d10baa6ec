use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope for an event, carrying log position metadata.
///
/// This is the unit appended to an [`EventLog`](crate::EventLog).
///
/// - `sequence_number` is 1-based and strictly increasing within a log.
/// - `payload` is the domain event itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,

    /// Monotonically increasing position in the log.
    sequence_number: u64,

    payload: E,
}

impl<E> EventEnvelope<E> {
    pub fn new(event_id: Uuid, sequence_number: u64, payload: E) -> Self {
        Self {
            event_id,
            sequence_number,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_with_its_metadata() {
        let id = Uuid::now_v7();
        let env = EventEnvelope::new(id, 7, "payload".to_string());

        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["sequence_number"], 7);
        assert_eq!(json["payload"], "payload");
        assert_eq!(json["event_id"], id.to_string());
    }
}
