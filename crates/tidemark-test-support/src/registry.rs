//! Event-type registry mocks.

use std::collections::HashSet;

use tidemark_core::error::CodecError;
use tidemark_core::event::DomainEvent;
use tidemark_core::registry::{DeserializeFn, DeserializeRequest, EventDeserializer};
use tidemark_core::serializer::FieldResolution;

use crate::event::StubEvent;

/// A registry that reconstructs [`StubEvent`]s for a fixed set of
/// `(stream name, event type)` pairs.
#[derive(Debug, Default)]
pub struct StubEventRegistry {
    known: HashSet<(String, String)>,
}

impl StubEventRegistry {
    /// Creates an empty registry; every lookup fails until event types are
    /// registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an event type under a stream.
    #[must_use]
    pub fn with_event(mut self, stream_name: &str, event_name: &str) -> Self {
        self.known
            .insert((stream_name.to_owned(), event_name.to_owned()));
        self
    }
}

impl EventDeserializer for StubEventRegistry {
    fn deserialize_event(
        &self,
        request: &DeserializeRequest<'_>,
        deserialize: Option<&DeserializeFn>,
    ) -> Result<Box<dyn DomainEvent>, CodecError> {
        if let Some(deserialize) = deserialize {
            return deserialize(request);
        }

        let key = (
            request.stream_name.to_owned(),
            request.event_type.to_owned(),
        );
        if !self.known.contains(&key) {
            return Err(CodecError::UnknownEventType {
                stream_name: request.stream_name.to_owned(),
                event_type: request.event_type.to_owned(),
            });
        }

        let body: serde_json::Value = serde_json::from_str(request.body)
            .map_err(|e| CodecError::Deserialization(format!("body parsing failed: {e}")))?;
        let payload = match request.settings.field_resolution {
            FieldResolution::Payload => body,
            FieldResolution::Envelope => body
                .get("payload")
                .cloned()
                .unwrap_or(serde_json::Value::Null),
        };

        let mut event = StubEvent::for_stream(
            request.stream_name,
            request.event_type,
            request.aggregate_id,
            request.sequence_number,
            request.timestamp,
        )
        .with_payload(payload);
        event.absolute_sequence_number = request.id;
        event.etag = request.etag.map(str::to_owned);
        Ok(Box::new(event))
    }
}
