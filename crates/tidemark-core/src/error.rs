//! Codec error types.

use thiserror::Error;

/// Top-level error type for the event codec.
///
/// Failures from collaborators (stream-name resolution, the event-type
/// registry, custom serialize/deserialize functions) pass through the codec
/// unchanged; the codec itself only produces [`CodecError::MissingEvent`].
#[derive(Debug, Error)]
pub enum CodecError {
    /// The encoder was handed no domain event.
    #[error("domain event is required")]
    MissingEvent,

    /// No event stream is registered for an aggregate type.
    #[error("no event stream registered for aggregate type `{0}`")]
    UnknownAggregateType(String),

    /// The substrate serializer or a custom serialize function failed.
    #[error("event serialization failed: {0}")]
    Serialization(String),

    /// The substrate deserializer or a custom deserialize function failed.
    #[error("event deserialization failed: {0}")]
    Deserialization(String),

    /// The event-type registry does not know the event type under the
    /// given stream.
    #[error("unknown event type `{event_type}` in stream `{stream_name}`")]
    UnknownEventType {
        /// The stream the record was read from.
        stream_name: String,
        /// The unrecognized event type name.
        event_type: String,
    },
}
