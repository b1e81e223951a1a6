//! Stream-name resolver mocks.

use std::collections::HashMap;

use tidemark_core::error::CodecError;
use tidemark_core::registry::StreamNameResolver;

/// A map-backed stream-name resolver.
#[derive(Debug, Default)]
pub struct StaticStreamNames {
    streams: HashMap<String, String>,
}

impl StaticStreamNames {
    /// Creates an empty resolver; every lookup fails until streams are
    /// registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a stream name for an aggregate type.
    #[must_use]
    pub fn with_stream(mut self, aggregate_type: &str, stream_name: &str) -> Self {
        self.streams
            .insert(aggregate_type.to_owned(), stream_name.to_owned());
        self
    }
}

impl StreamNameResolver for StaticStreamNames {
    fn stream_name(&self, aggregate_type: &str) -> Result<String, CodecError> {
        self.streams
            .get(aggregate_type)
            .cloned()
            .ok_or_else(|| CodecError::UnknownAggregateType(aggregate_type.to_owned()))
    }
}

/// A resolver that rejects every aggregate type. Useful for asserting that
/// a code path never consults the resolver.
#[derive(Debug)]
pub struct FailingStreamNames;

impl StreamNameResolver for FailingStreamNames {
    fn stream_name(&self, aggregate_type: &str) -> Result<String, CodecError> {
        Err(CodecError::UnknownAggregateType(aggregate_type.to_owned()))
    }
}
