//! Fake-data provider backed by the `fake` crate
//!
//! [`FakerProvider`] owns its random source. Seed it for reproducible runs,
//! and pin the reference time as well when timestamps must repeat too.

use chrono::{DateTime, TimeZone, Utc};
use fake::faker::internet::en::{DomainSuffix, IPv4, UserAgent};
use fake::faker::lorem::en::{Sentence, Word, Words};
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::domain::identifiers::uuid_from_random_bytes;
use crate::domain::provider::{FakeDataProvider, ProviderError, ProviderResult};
use crate::domain::timestamp::start_of_year;

/// Words in a generated page title
const SENTENCE_WORDS: std::ops::Range<usize> = 3..9;
/// Segments in a generated URL path
const PATH_SEGMENTS: std::ops::Range<usize> = 1..4;

#[derive(Debug, Clone)]
pub struct FakerProvider<R = StdRng> {
    rng: R,
    reference_time: Option<DateTime<Utc>>,
}

impl FakerProvider<StdRng> {
    /// Provider seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic provider; the same seed yields the same value sequence
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FakerProvider<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            reference_time: None,
        }
    }

    /// Pins "now" for timestamp generation instead of reading the clock
    pub fn with_reference_time(mut self, reference_time: DateTime<Utc>) -> Self {
        self.reference_time = Some(reference_time);
        self
    }

    fn now(&self) -> DateTime<Utc> {
        self.reference_time.unwrap_or_else(Utc::now)
    }
}

impl<R: Rng> FakeDataProvider for FakerProvider<R> {
    fn uuid(&mut self) -> ProviderResult<Uuid> {
        Ok(uuid_from_random_bytes(self.rng.gen()))
    }

    fn user_agent(&mut self) -> ProviderResult<String> {
        Ok(UserAgent().fake_with_rng(&mut self.rng))
    }

    fn ipv4(&mut self) -> ProviderResult<String> {
        Ok(IPv4().fake_with_rng(&mut self.rng))
    }

    fn https_url(&mut self) -> ProviderResult<String> {
        let host: String = Word().fake_with_rng(&mut self.rng);
        let suffix: String = DomainSuffix().fake_with_rng(&mut self.rng);
        Ok(format!("https://www.{host}.{suffix}/"))
    }

    fn sentence(&mut self) -> ProviderResult<String> {
        Ok(Sentence(SENTENCE_WORDS).fake_with_rng(&mut self.rng))
    }

    fn uri_path(&mut self) -> ProviderResult<String> {
        let segments: Vec<String> = Words(PATH_SEGMENTS).fake_with_rng(&mut self.rng);
        Ok(segments.join("/"))
    }

    fn date_time_this_year(&mut self) -> ProviderResult<DateTime<Utc>> {
        let end = self.now();
        let start = start_of_year(end).ok_or_else(|| {
            ProviderError::unavailable("event_time", format!("no start of year for {end}"))
        })?;

        let secs = self.rng.gen_range(start.timestamp()..=end.timestamp());
        Utc.timestamp_opt(secs, 0).single().ok_or_else(|| {
            ProviderError::unavailable("event_time", format!("{secs} is not a valid timestamp"))
        })
    }

    fn words(&mut self, count: usize) -> ProviderResult<Vec<String>> {
        Ok(Words(count..count + 1).fake_with_rng(&mut self.rng))
    }

    fn choose_index(&mut self, len: usize) -> ProviderResult<usize> {
        if len == 0 {
            return Err(ProviderError::unavailable(
                "index",
                "cannot choose from zero candidates",
            ));
        }
        Ok(self.rng.gen_range(0..len))
    }
}
