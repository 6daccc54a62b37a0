//! Identifiers carried by generated records
//!
//! Both identifiers wrap random (version 4) UUIDs. They are built from
//! UUIDs handed out by a [`FakeDataProvider`](crate::domain::provider::FakeDataProvider)
//! rather than from global entropy, so a seeded provider yields reproducible ids.

use nutype::nutype;
use uuid::Uuid;

/// Opaque identifier of a synthetic user
#[nutype(derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRef))]
pub struct AnonymousId(Uuid);

/// Unique identifier of a single generated event
#[nutype(derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRef))]
pub struct EventId(Uuid);

/// Builds a version 4 UUID from sixteen random bytes
pub fn uuid_from_random_bytes(bytes: [u8; 16]) -> Uuid {
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}
