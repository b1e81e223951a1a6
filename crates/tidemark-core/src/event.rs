//! Domain event abstractions.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Where the stream name for a domain event comes from.
///
/// Most events belong to a registered aggregate type and have their stream
/// name resolved from the type name. Loosely-typed events carry the stream
/// name themselves instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamSource<'a> {
    /// The logical name of the owning aggregate type; the stream name is
    /// resolved through a `StreamNameResolver` keyed by this name.
    AggregateType(&'a str),
    /// An explicit stream name, for events not bound to a registered
    /// aggregate type.
    StreamName(&'a str),
}

/// Trait that all domain events implement.
///
/// A domain event is an immutable fact about a state change to one
/// aggregate instance. The accessors here are the capability set the codec
/// needs to build a storable record; payload-specific fields remain the
/// event's own concern.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Returns the logical event type name (used for deserialization routing).
    fn event_name(&self) -> &str;

    /// Returns where the event's stream name comes from.
    fn stream_source(&self) -> StreamSource<'_>;

    /// Returns the identifier of the aggregate instance this event belongs to.
    fn aggregate_id(&self) -> Uuid;

    /// Returns the position of this event within its aggregate stream.
    /// Sequence numbers start at 1 and increase strictly.
    fn sequence_number(&self) -> i64;

    /// Returns the storage-assigned global ordering token. Present only
    /// after the event has been committed.
    fn absolute_sequence_number(&self) -> Option<i64> {
        None
    }

    /// Returns the identity of whoever caused the event.
    fn actor(&self) -> Option<&str> {
        None
    }

    /// Returns when the event occurred.
    fn timestamp(&self) -> DateTime<Utc>;

    /// Returns the optimistic-concurrency token for this event.
    fn etag(&self) -> Option<&str> {
        None
    }

    /// Serializes the event-specific fields to JSON.
    fn payload(&self) -> serde_json::Value;
}
