//! Projection runner utilities (read model builders).
//!
//! Read models are **disposable**; events are the source of truth.
//! This module provides deterministic replay and cursor tracking without
//! making storage assumptions.

use thiserror::Error;

use crate::{EventEnvelope, Projection};

/// Tracks projection progress through a log.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProjectionCursor {
    last_sequence_number: u64,
}

impl ProjectionCursor {
    pub fn last_sequence_number(&self) -> u64 {
        self.last_sequence_number
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("non-monotonic sequence number (last={last}, found={found})")]
    NonMonotonicSequence { last: u64, found: u64 },
}

/// Runs envelopes through a projection and tracks progress.
#[derive(Debug)]
pub struct ProjectionRunner<P>
where
    P: Projection,
{
    projection: P,
    cursor: Option<ProjectionCursor>,
}

impl<P> ProjectionRunner<P>
where
    P: Projection,
{
    pub fn new(projection: P) -> Self {
        Self {
            projection,
            cursor: None,
        }
    }

    pub fn projection(&self) -> &P {
        &self.projection
    }

    /// Apply a single envelope, enforcing strictly increasing sequence numbers.
    pub fn apply(&mut self, envelope: &EventEnvelope<P::Ev>) -> Result<(), ProjectionError> {
        let found = envelope.sequence_number();

        if let Some(c) = self.cursor {
            if found <= c.last_sequence_number {
                return Err(ProjectionError::NonMonotonicSequence {
                    last: c.last_sequence_number,
                    found,
                });
            }
        }

        self.projection.apply(envelope);
        self.cursor = Some(ProjectionCursor {
            last_sequence_number: found,
        });
        Ok(())
    }

    /// Apply many envelopes in order.
    pub fn run<'a>(
        &mut self,
        envelopes: impl IntoIterator<Item = &'a EventEnvelope<P::Ev>>,
    ) -> Result<(), ProjectionError>
    where
        P::Ev: 'a,
    {
        for env in envelopes {
            self.apply(env)?;
        }
        Ok(())
    }

    /// Rebuild a projection from scratch by replaying the full event history.
    ///
    /// The factory is used to create a fresh projection instance.
    pub fn rebuild_from_scratch<'a>(
        factory: impl FnOnce() -> P,
        envelopes: impl IntoIterator<Item = &'a EventEnvelope<P::Ev>>,
    ) -> Result<(P, Option<ProjectionCursor>), ProjectionError>
    where
        P::Ev: 'a,
    {
        let mut runner = ProjectionRunner::new(factory());
        runner.run(envelopes)?;
        Ok((runner.projection, runner.cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Event, EventLog};
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    #[derive(Debug, Clone)]
    struct Tick(DateTime<Utc>);

    impl Event for Tick {
        fn event_type(&self) -> &'static str {
            "test.tick"
        }

        fn version(&self) -> u32 {
            1
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[derive(Debug, Default)]
    struct TickCount(usize);

    impl Projection for TickCount {
        type Ev = Tick;

        fn apply(&mut self, _envelope: &EventEnvelope<Tick>) {
            self.0 += 1;
        }
    }

    #[test]
    fn rebuild_replays_whole_log() {
        let mut log = EventLog::new();
        for _ in 0..4 {
            log.append(Tick(Utc::now()));
        }

        let (count, cursor) =
            ProjectionRunner::rebuild_from_scratch(TickCount::default, log.envelopes()).unwrap();
        assert_eq!(count.0, 4);
        assert_eq!(cursor.unwrap().last_sequence_number(), 4);
    }

    #[test]
    fn empty_replay_has_no_cursor() {
        let log: EventLog<Tick> = EventLog::new();
        let (count, cursor) =
            ProjectionRunner::rebuild_from_scratch(TickCount::default, log.envelopes()).unwrap();
        assert_eq!(count.0, 0);
        assert!(cursor.is_none());
    }

    #[test]
    fn out_of_order_envelope_is_rejected() {
        let mut runner = ProjectionRunner::new(TickCount::default());
        runner
            .apply(&EventEnvelope::new(Uuid::now_v7(), 2, Tick(Utc::now())))
            .unwrap();

        let err = runner
            .apply(&EventEnvelope::new(Uuid::now_v7(), 2, Tick(Utc::now())))
            .unwrap_err();
        assert_eq!(err, ProjectionError::NonMonotonicSequence { last: 2, found: 2 });
        assert_eq!(runner.projection().0, 1);
    }
}
