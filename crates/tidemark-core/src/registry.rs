//! Collaborator interfaces the codec delegates to.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::CodecError;
use crate::event::DomainEvent;
use crate::serializer::SerializerSettings;

/// Optional per-call replacement for the default body-encoding step.
pub type SerializeFn<'a> = dyn Fn(&dyn DomainEvent) -> Result<String, CodecError> + Send + Sync + 'a;

/// Optional per-call replacement for the registry's default body-decoding
/// step.
pub type DeserializeFn =
    dyn Fn(&DeserializeRequest<'_>) -> Result<Box<dyn DomainEvent>, CodecError> + Send + Sync;

/// Deterministic mapping from a logical aggregate type name to the stream
/// name its events are persisted under.
///
/// The mapping must depend only on the aggregate type, never on fields of
/// an individual event.
pub trait StreamNameResolver: Send + Sync {
    /// Resolves the stream name for an aggregate type.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownAggregateType`] if no stream is
    /// registered for the type.
    fn stream_name(&self, aggregate_type: &str) -> Result<String, CodecError>;
}

/// Everything the event-type registry needs to reconstruct a domain event
/// from a stored record.
#[derive(Debug)]
pub struct DeserializeRequest<'a> {
    /// Stream the record was read from.
    pub stream_name: &'a str,
    /// Event type name to dispatch on.
    pub event_type: &'a str,
    /// Aggregate instance the event belongs to.
    pub aggregate_id: Uuid,
    /// Position within the aggregate stream.
    pub sequence_number: i64,
    /// Timestamp of the event.
    pub timestamp: DateTime<Utc>,
    /// Serialized event payload.
    pub body: &'a str,
    /// Storage-assigned absolute sequence number, if committed.
    pub id: Option<i64>,
    /// Settings the body was encoded with.
    pub settings: &'a SerializerSettings,
    /// Optimistic-concurrency token.
    pub etag: Option<&'a str>,
}

/// Registry of known event types, responsible for dispatching a stored
/// record back to a concrete domain-event constructor.
pub trait EventDeserializer: Send + Sync {
    /// Reconstructs a domain event from a stored record.
    ///
    /// Implementations dispatch on `request.event_type` and
    /// `request.stream_name`, and honor `deserialize` as a full
    /// replacement for their default body decoding when it is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownEventType`] when the type does not map
    /// to a known constructor, or [`CodecError::Deserialization`] when the
    /// body cannot be parsed.
    fn deserialize_event(
        &self,
        request: &DeserializeRequest<'_>,
        deserialize: Option<&DeserializeFn>,
    ) -> Result<Box<dyn DomainEvent>, CodecError>;
}
