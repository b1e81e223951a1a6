//! Substrate serializer settings.

use crate::error::CodecError;
use crate::event::DomainEvent;

/// Controls which fields of a domain event end up in the serialized body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldResolution {
    /// Serialize the full envelope (event name, aggregate id, sequence
    /// number, timestamp, actor, etag) alongside the payload.
    Envelope,
    /// Serialize only the event's own payload fields. Envelope fields live
    /// in the record columns and are restored from there on decode.
    Payload,
}

/// Settings for the substrate JSON serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializerSettings {
    /// Field-resolution strategy for event bodies.
    pub field_resolution: FieldResolution,
    /// Pretty-print bodies instead of writing compact JSON.
    pub pretty: bool,
}

impl SerializerSettings {
    /// The unmodified factory state: full envelope, compact output.
    #[must_use]
    pub const fn factory() -> Self {
        Self {
            field_resolution: FieldResolution::Envelope,
            pretty: false,
        }
    }

    /// Serializes a domain event body according to these settings.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Serialization`] if the substrate serializer
    /// fails.
    pub fn encode(&self, event: &dyn DomainEvent) -> Result<String, CodecError> {
        let value = match self.field_resolution {
            FieldResolution::Payload => event.payload(),
            FieldResolution::Envelope => serde_json::json!({
                "event_name": event.event_name(),
                "aggregate_id": event.aggregate_id(),
                "sequence_number": event.sequence_number(),
                "timestamp": event.timestamp(),
                "actor": event.actor(),
                "etag": event.etag(),
                "payload": event.payload(),
            }),
        };
        let body = if self.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        body.map_err(|e| CodecError::Serialization(format!("body encoding failed: {e}")))
    }
}

impl Default for SerializerSettings {
    fn default() -> Self {
        Self::factory()
    }
}
