//! Conversion between domain events and storable records.

use tidemark_core::aggregate::EventSourced;
use tidemark_core::error::CodecError;
use tidemark_core::event::{DomainEvent, StreamSource};
use tidemark_core::record::StorableEvent;
use tidemark_core::registry::{
    DeserializeFn, DeserializeRequest, EventDeserializer, SerializeFn, StreamNameResolver,
};

use crate::settings;

/// Converts a domain event into a storable record.
///
/// The stream name comes from the `streams` collaborator for events bound
/// to a registered aggregate type, and from the event's own declared
/// stream name otherwise. When `serialize` is supplied its output becomes
/// the body verbatim; the default path encodes the event with the shared
/// settings snapshot.
///
/// # Errors
///
/// Returns [`CodecError::MissingEvent`] when `event` is `None`. Stream
/// resolution and serialization failures propagate unchanged from the
/// collaborators.
pub fn to_storable_event(
    event: Option<&dyn DomainEvent>,
    streams: &dyn StreamNameResolver,
    serialize: Option<&SerializeFn<'_>>,
) -> Result<StorableEvent, CodecError> {
    let event = event.ok_or(CodecError::MissingEvent)?;
    let stream_name = match event.stream_source() {
        StreamSource::AggregateType(aggregate_type) => streams.stream_name(aggregate_type)?,
        StreamSource::StreamName(name) => name.to_owned(),
    };
    let record = StorableEvent {
        id: event.absolute_sequence_number(),
        stream_name,
        aggregate_id: event.aggregate_id(),
        sequence_number: event.sequence_number(),
        event_type: event.event_name().to_owned(),
        actor: event.actor().map(str::to_owned),
        timestamp: event.timestamp(),
        etag: event.etag().map(str::to_owned),
        body: encode_body(event, serialize)?,
    };
    tracing::trace!(
        stream = %record.stream_name,
        event_type = %record.event_type,
        sequence = record.sequence_number,
        "encoded storable event"
    );
    Ok(record)
}

/// Converts a domain event of a statically-known aggregate type into a
/// storable record.
///
/// Skips runtime stream resolution in favor of
/// [`EventSourced::STREAM_NAME`] and leaves `id` unset; append paths use
/// this before the global position is assigned.
///
/// # Errors
///
/// Serialization failures propagate unchanged.
#[doc(hidden)]
pub fn to_storable_event_for<A: EventSourced>(
    event: &dyn DomainEvent,
    serialize: Option<&SerializeFn<'_>>,
) -> Result<StorableEvent, CodecError> {
    Ok(StorableEvent {
        id: None,
        stream_name: A::STREAM_NAME.to_owned(),
        aggregate_id: event.aggregate_id(),
        sequence_number: event.sequence_number(),
        event_type: event.event_name().to_owned(),
        actor: event.actor().map(str::to_owned),
        timestamp: event.timestamp(),
        etag: event.etag().map(str::to_owned),
        body: encode_body(event, serialize)?,
    })
}

/// Converts a storable record back into a domain event.
///
/// Pure parameter marshaling: the record's fields, the shared settings
/// snapshot, and the optional custom function are handed to the registry,
/// which owns the dispatch from event type to constructor.
///
/// # Errors
///
/// Registry failures propagate unchanged.
pub fn to_domain_event(
    record: &StorableEvent,
    registry: &dyn EventDeserializer,
    deserialize: Option<&DeserializeFn>,
) -> Result<Box<dyn DomainEvent>, CodecError> {
    tracing::trace!(
        stream = %record.stream_name,
        event_type = %record.event_type,
        sequence = record.sequence_number,
        "decoding storable event"
    );
    let request = DeserializeRequest {
        stream_name: &record.stream_name,
        event_type: &record.event_type,
        aggregate_id: record.aggregate_id,
        sequence_number: record.sequence_number,
        timestamp: record.timestamp,
        body: &record.body,
        id: record.id,
        settings: settings::payload_settings(),
        etag: record.etag.as_deref(),
    };
    registry.deserialize_event(&request, deserialize)
}

fn encode_body(
    event: &dyn DomainEvent,
    serialize: Option<&SerializeFn<'_>>,
) -> Result<String, CodecError> {
    match serialize {
        Some(serialize) => serialize(event),
        None => settings::payload_settings().encode(event),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use tidemark_core::aggregate::EventSourced;
    use tidemark_core::error::CodecError;
    use tidemark_core::event::DomainEvent;
    use tidemark_test_support::StubEvent;
    use uuid::Uuid;

    use super::to_storable_event_for;

    struct Shipment;

    impl EventSourced for Shipment {
        const STREAM_NAME: &'static str = "Shipment";
    }

    fn dispatched(aggregate_id: Uuid) -> StubEvent {
        StubEvent::for_aggregate(
            "Shipment",
            "ShipmentDispatched",
            aggregate_id,
            2,
            Utc.with_ymd_and_hms(2026, 4, 9, 8, 30, 0).unwrap(),
        )
        .with_etag("e-7")
        .with_payload(json!({"port": "Rotterdam"}))
    }

    #[test]
    fn test_typed_variant_uses_compile_time_stream_name() {
        // Arrange
        let aggregate_id = Uuid::new_v4();
        let event = dispatched(aggregate_id);

        // Act
        let record = to_storable_event_for::<Shipment>(&event, None).unwrap();

        // Assert
        assert_eq!(record.stream_name, "Shipment");
        assert_eq!(record.aggregate_id, aggregate_id);
        assert_eq!(record.sequence_number, 2);
        assert_eq!(record.event_type, "ShipmentDispatched");
        assert_eq!(record.etag.as_deref(), Some("e-7"));
        assert_eq!(record.timestamp, event.timestamp());
    }

    #[test]
    fn test_typed_variant_leaves_id_unset() {
        // Even a previously committed event gets no id on this path; the
        // global position is assigned downstream.
        let event = dispatched(Uuid::new_v4()).with_absolute_sequence_number(41);

        let record = to_storable_event_for::<Shipment>(&event, None).unwrap();

        assert_eq!(record.id, None);
    }

    #[test]
    fn test_typed_variant_honors_custom_serialize() {
        let event = dispatched(Uuid::new_v4());
        let serialize = |event: &dyn DomainEvent| -> Result<String, CodecError> {
            Ok(format!("<{}>", event.event_name()))
        };

        let record = to_storable_event_for::<Shipment>(&event, Some(&serialize)).unwrap();

        assert_eq!(record.body, "<ShipmentDispatched>");
        assert_eq!(event.payload_call_count(), 0);
    }
}
