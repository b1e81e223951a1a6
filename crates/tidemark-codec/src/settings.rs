//! Process-wide serializer defaults and the cached snapshot the codec
//! uses for event bodies.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{OnceLock, PoisonError, RwLock};

use tidemark_core::serializer::{FieldResolution, SerializerSettings};

/// Process-wide serializer defaults plus the "configured by the host" flag.
#[derive(Debug)]
struct SerializerDefaults {
    settings: SerializerSettings,
    configured: bool,
}

static DEFAULTS: RwLock<SerializerDefaults> = RwLock::new(SerializerDefaults {
    settings: SerializerSettings::factory(),
    configured: false,
});

/// Number of times the defaults have been cloned.
static CLONE_CALLS: AtomicUsize = AtomicUsize::new(0);

static PAYLOAD_SETTINGS: OnceLock<SerializerSettings> = OnceLock::new();

/// Replaces the process-wide serializer defaults.
///
/// Host applications call this once at startup, before the first encode or
/// decode; the codec then respects the configured settings instead of its
/// own payload-tuned strategy. Has no effect on the cached snapshot once
/// [`payload_settings`] has run.
pub fn configure_defaults(settings: SerializerSettings) {
    let mut defaults = DEFAULTS.write().unwrap_or_else(PoisonError::into_inner);
    defaults.settings = settings;
    defaults.configured = true;
}

/// Returns whether the host application has replaced the defaults.
#[must_use]
pub fn defaults_configured() -> bool {
    DEFAULTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .configured
}

/// Clones the current process-wide defaults.
#[must_use]
pub fn clone_defaults() -> SerializerSettings {
    CLONE_CALLS.fetch_add(1, Ordering::Relaxed);
    DEFAULTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .settings
        .clone()
}

/// Returns the shared settings snapshot used for event bodies.
///
/// Built once, on first use, from a clone of the process-wide defaults.
/// When the defaults are still in their factory state the snapshot
/// switches field resolution to [`FieldResolution::Payload`]; a host that
/// configured its own defaults keeps them untouched. Concurrent first
/// callers block on the one in-flight build and all observe the same
/// completed snapshot.
#[must_use]
pub fn payload_settings() -> &'static SerializerSettings {
    PAYLOAD_SETTINGS.get_or_init(|| {
        let mut settings = clone_defaults();
        if !defaults_configured() {
            settings.field_resolution = FieldResolution::Payload;
        }
        tracing::debug!(resolution = ?settings.field_resolution, "serializer settings initialized");
        settings
    })
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::{Arc, Barrier};
    use std::thread;

    use chrono::{TimeZone, Utc};
    use tidemark_test_support::{StaticStreamNames, StubEvent};
    use uuid::Uuid;

    use super::CLONE_CALLS;
    use crate::convert::to_storable_event;

    // The defaults in this binary are never reconfigured, so the snapshot
    // is built from the factory state no matter which test runs first.
    // Host-configured defaults are covered by their own integration test
    // binary.

    #[test]
    fn test_concurrent_first_encodes_clone_defaults_once() {
        let streams = Arc::new(StaticStreamNames::new().with_stream("Order", "Order"));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let streams = Arc::clone(&streams);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let event = StubEvent::for_aggregate(
                        "Order",
                        "OrderShipped",
                        Uuid::new_v4(),
                        i + 1,
                        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
                    );
                    barrier.wait();
                    to_storable_event(Some(&event), streams.as_ref(), None).unwrap();
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(CLONE_CALLS.load(Ordering::Relaxed), 1);
    }
}
