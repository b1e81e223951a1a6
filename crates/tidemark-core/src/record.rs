//! Persistence-ready event envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored representation of a domain event.
///
/// Built fresh on every encode call and immutable in this workspace; the
/// storage layer owns whatever happens to a record afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorableEvent {
    /// Storage-assigned absolute sequence number. `None` until the record
    /// has been committed.
    pub id: Option<i64>,
    /// Logical partition key identifying the aggregate's event stream.
    pub stream_name: String,
    /// Aggregate instance this event belongs to.
    pub aggregate_id: Uuid,
    /// Position within the aggregate stream.
    pub sequence_number: i64,
    /// Event type name for deserialization routing.
    pub event_type: String,
    /// Identity of whoever caused the event.
    pub actor: Option<String>,
    /// Timestamp of the event.
    pub timestamp: DateTime<Utc>,
    /// Optimistic-concurrency token.
    pub etag: Option<String>,
    /// Serialized event payload.
    pub body: String,
}
