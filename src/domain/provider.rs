//! The fake-data provider port
//!
//! Generators never reach for ambient randomness. Every random value they
//! need comes from a [`FakeDataProvider`] passed in by the caller, which
//! keeps generation deterministic under a seeded provider and lets tests
//! substitute providers that misbehave on purpose.

use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Failures raised by a fake-data provider, or by values it produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("provider could not produce {field}: {reason}")]
    Unavailable { field: &'static str, reason: String },

    #[error("provider produced an invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ProviderError {
    pub fn unavailable(field: &'static str, reason: impl fmt::Display) -> Self {
        Self::Unavailable {
            field,
            reason: reason.to_string(),
        }
    }

    pub fn invalid_value(field: &'static str, reason: impl fmt::Display) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.to_string(),
        }
    }
}

pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Source of randomized, realistic-looking field values
pub trait FakeDataProvider {
    /// Random (version 4) UUID
    fn uuid(&mut self) -> ProviderResult<Uuid>;

    /// Browser user-agent string
    fn user_agent(&mut self) -> ProviderResult<String>;

    /// IPv4 address in dotted-quad form
    fn ipv4(&mut self) -> ProviderResult<String>;

    /// Site root URL using the `https` scheme
    fn https_url(&mut self) -> ProviderResult<String>;

    /// Short free-text sentence
    fn sentence(&mut self) -> ProviderResult<String>;

    /// Relative URL path such as `explore/tags`
    fn uri_path(&mut self) -> ProviderResult<String>;

    /// Timestamp between the start of the current year and now
    fn date_time_this_year(&mut self) -> ProviderResult<DateTime<Utc>>;

    /// `count` short random words
    fn words(&mut self, count: usize) -> ProviderResult<Vec<String>>;

    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn choose_index(&mut self, len: usize) -> ProviderResult<usize>;
}
