//! Tidemark Core — shared abstractions for the event codec.
//!
//! This crate defines the domain-event capability trait, the storable
//! record, and the collaborator interfaces the codec delegates to. It
//! contains no codec logic.

pub mod aggregate;
pub mod error;
pub mod event;
pub mod record;
pub mod registry;
pub mod serializer;
