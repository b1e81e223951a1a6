//! Test events — a configurable `DomainEvent` implementation.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use tidemark_core::event::{DomainEvent, StreamSource};

/// Where a [`StubEvent`] takes its stream name from.
#[derive(Debug, Clone)]
pub enum StubStream {
    /// Bound to a registered aggregate type.
    AggregateType(String),
    /// Carries its own stream name.
    StreamName(String),
}

/// A configurable domain event for tests.
///
/// Counts calls to [`DomainEvent::payload`] so tests can observe whether
/// the default body-encoding path ran.
#[derive(Debug)]
pub struct StubEvent {
    /// Logical event type name.
    pub event_name: String,
    /// Stream-name source.
    pub stream: StubStream,
    /// Aggregate identifier.
    pub aggregate_id: Uuid,
    /// Position within the aggregate stream.
    pub sequence_number: i64,
    /// Global position, if committed.
    pub absolute_sequence_number: Option<i64>,
    /// Actor identity.
    pub actor: Option<String>,
    /// Event timestamp.
    pub timestamp: DateTime<Utc>,
    /// Concurrency token.
    pub etag: Option<String>,
    /// Event-specific fields.
    pub payload: serde_json::Value,
    payload_calls: AtomicUsize,
}

impl StubEvent {
    /// Creates an event bound to a registered aggregate type.
    #[must_use]
    pub fn for_aggregate(
        aggregate_type: &str,
        event_name: &str,
        aggregate_id: Uuid,
        sequence_number: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(
            StubStream::AggregateType(aggregate_type.to_owned()),
            event_name,
            aggregate_id,
            sequence_number,
            timestamp,
        )
    }

    /// Creates a loosely-typed event carrying its own stream name.
    #[must_use]
    pub fn for_stream(
        stream_name: &str,
        event_name: &str,
        aggregate_id: Uuid,
        sequence_number: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self::new(
            StubStream::StreamName(stream_name.to_owned()),
            event_name,
            aggregate_id,
            sequence_number,
            timestamp,
        )
    }

    fn new(
        stream: StubStream,
        event_name: &str,
        aggregate_id: Uuid,
        sequence_number: i64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            event_name: event_name.to_owned(),
            stream,
            aggregate_id,
            sequence_number,
            absolute_sequence_number: None,
            actor: None,
            timestamp,
            etag: None,
            payload: serde_json::Value::Null,
            payload_calls: AtomicUsize::new(0),
        }
    }

    /// Sets the actor identity.
    #[must_use]
    pub fn with_actor(mut self, actor: &str) -> Self {
        self.actor = Some(actor.to_owned());
        self
    }

    /// Sets the concurrency token.
    #[must_use]
    pub fn with_etag(mut self, etag: &str) -> Self {
        self.etag = Some(etag.to_owned());
        self
    }

    /// Marks the event as already committed at the given global position.
    #[must_use]
    pub fn with_absolute_sequence_number(mut self, id: i64) -> Self {
        self.absolute_sequence_number = Some(id);
        self
    }

    /// Sets the event-specific payload fields.
    #[must_use]
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// Number of times the codec asked for the payload.
    #[must_use]
    pub fn payload_call_count(&self) -> usize {
        self.payload_calls.load(Ordering::Relaxed)
    }
}

impl DomainEvent for StubEvent {
    fn event_name(&self) -> &str {
        &self.event_name
    }

    fn stream_source(&self) -> StreamSource<'_> {
        match &self.stream {
            StubStream::AggregateType(aggregate_type) => {
                StreamSource::AggregateType(aggregate_type)
            }
            StubStream::StreamName(stream_name) => StreamSource::StreamName(stream_name),
        }
    }

    fn aggregate_id(&self) -> Uuid {
        self.aggregate_id
    }

    fn sequence_number(&self) -> i64 {
        self.sequence_number
    }

    fn absolute_sequence_number(&self) -> Option<i64> {
        self.absolute_sequence_number
    }

    fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    fn payload(&self) -> serde_json::Value {
        self.payload_calls.fetch_add(1, Ordering::Relaxed);
        self.payload.clone()
    }
}
