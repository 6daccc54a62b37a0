//! Type-safe generator tunables
//!
//! These types are deserialized straight out of the layered settings, so an
//! out-of-range value is rejected while loading configuration rather than
//! deep inside a run. Zero counts are valid on purpose: an empty pool or an
//! empty URL list is a reproducible degenerate case, not a config error.

use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of synthetic users seeded into the pool
#[nutype(
    validate(less_or_equal = 1_000_000),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct SeedCount(usize);

impl Default for SeedCount {
    fn default() -> Self {
        Self::try_new(100).expect("Default seed count is valid")
    }
}

/// Number of candidate URLs drawn by each event generator
#[nutype(
    validate(less_or_equal = 10_000),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct UrlCount(usize);

impl Default for UrlCount {
    fn default() -> Self {
        Self::try_new(3).expect("Default URL count is valid")
    }
}

/// Number of driver loop iterations; each iteration emits two records
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRef,
    Display
))]
pub struct IterationCount(u64);

impl Default for IterationCount {
    fn default() -> Self {
        Self::new(1000)
    }
}

/// Pause between driver iterations, in milliseconds (at most one hour)
#[nutype(
    validate(less_or_equal = 3_600_000),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct PauseMillis(u64);

impl PauseMillis {
    pub fn as_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.into_inner())
    }
}

impl Default for PauseMillis {
    fn default() -> Self {
        Self::try_new(100).expect("Default pause is valid")
    }
}

/// Whether the driver keeps its event generators across iterations
///
/// `Reconstruct` builds fresh generators, and therefore fresh candidate URL
/// lists, on every iteration. `Reuse` builds them once before the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorLifecycle {
    #[default]
    Reconstruct,
    Reuse,
}

impl fmt::Display for GeneratorLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorLifecycle::Reconstruct => write!(f, "reconstruct"),
            GeneratorLifecycle::Reuse => write!(f, "reuse"),
        }
    }
}
