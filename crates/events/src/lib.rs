//! Event primitives: envelopes, the append-only log, projections and replay.

pub mod envelope;
pub mod event;
pub mod handler;
pub mod log;
pub mod projection;
pub mod runner;

pub use envelope::EventEnvelope;
pub use event::Event;
pub use handler::execute;
pub use log::EventLog;
pub use projection::Projection;
pub use runner::{ProjectionCursor, ProjectionError, ProjectionRunner};
