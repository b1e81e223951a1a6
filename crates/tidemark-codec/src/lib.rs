//! Tidemark Codec — the boundary codec of an event-sourced application.
//!
//! Converts a domain event into a durable, storage-neutral record and
//! back: `DomainEvent -> to_storable_event -> StorableEvent -> (storage)
//! -> StorableEvent -> to_domain_event -> DomainEvent`. Both directions
//! are stateless aside from the lazily-built serializer settings snapshot.

pub mod convert;
pub mod settings;
