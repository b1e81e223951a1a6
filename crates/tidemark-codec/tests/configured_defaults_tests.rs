//! Host-configured serializer defaults.
//!
//! These tests live in their own binary: the defaults and the cached
//! settings snapshot are process-global, and this binary must own the
//! first initialization. Every test configures the same defaults up
//! front, so test ordering does not matter.

use chrono::{TimeZone, Utc};
use serde_json::json;
use uuid::Uuid;

use tidemark_codec::convert::{to_domain_event, to_storable_event};
use tidemark_codec::settings::configure_defaults;
use tidemark_core::event::DomainEvent;
use tidemark_core::serializer::{FieldResolution, SerializerSettings};
use tidemark_test_support::{StaticStreamNames, StubEvent, StubEventRegistry};

fn host_settings() -> SerializerSettings {
    SerializerSettings {
        field_resolution: FieldResolution::Envelope,
        pretty: false,
    }
}

fn order_shipped(aggregate_id: Uuid) -> StubEvent {
    StubEvent::for_aggregate(
        "Order",
        "OrderShipped",
        aggregate_id,
        3,
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
    )
    .with_actor("u1")
    .with_etag("e1")
    .with_payload(json!({"carrier": "oceanic"}))
}

#[test]
fn test_configured_defaults_keep_envelope_resolution() {
    configure_defaults(host_settings());
    let streams = StaticStreamNames::new().with_stream("Order", "Order");
    let event = order_shipped(Uuid::new_v4());

    let record = to_storable_event(Some(&event), &streams, None).unwrap();

    // The payload-tuned strategy was not applied: the body carries the
    // full envelope the host asked for.
    let body: serde_json::Value = serde_json::from_str(&record.body).unwrap();
    assert_eq!(body["event_name"], "OrderShipped");
    assert_eq!(body["sequence_number"], 3);
    assert_eq!(body["actor"], "u1");
    assert_eq!(body["etag"], "e1");
    assert_eq!(body["payload"]["carrier"], "oceanic");
}

#[test]
fn test_round_trip_under_configured_defaults() {
    configure_defaults(host_settings());
    let streams = StaticStreamNames::new().with_stream("Order", "Order");
    let registry = StubEventRegistry::new().with_event("Order", "OrderShipped");
    let aggregate_id = Uuid::new_v4();
    let event = order_shipped(aggregate_id);

    let record = to_storable_event(Some(&event), &streams, None).unwrap();
    let decoded = to_domain_event(&record, &registry, None).unwrap();

    assert_eq!(decoded.event_name(), "OrderShipped");
    assert_eq!(decoded.aggregate_id(), aggregate_id);
    assert_eq!(decoded.sequence_number(), 3);
    assert_eq!(decoded.etag(), Some("e1"));
    assert_eq!(decoded.payload(), json!({"carrier": "oceanic"}));
}
