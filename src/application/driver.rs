//! The driver loop
//!
//! Each iteration generates a page event and a track event from the shared
//! user pool, emits them in that order, then pauses. The loop is strictly
//! sequential; the pause is its only suspension point.

use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::domain::{
    config_types::{GeneratorLifecycle, IterationCount, PauseMillis, UrlCount},
    events::Record,
    generators::{PageEventGenerator, TrackEventGenerator},
    provider::FakeDataProvider,
    user_pool::UserPool,
};
use crate::error::Result;
use crate::infrastructure::{log_messages, sink::EventSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverOptions {
    pub iterations: IterationCount,
    /// Zero skips the pause entirely
    pub pause: Duration,
    pub lifecycle: GeneratorLifecycle,
    pub url_count: UrlCount,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            iterations: IterationCount::default(),
            pause: PauseMillis::default().as_duration(),
            lifecycle: GeneratorLifecycle::default(),
            url_count: UrlCount::default(),
        }
    }
}

/// Counts of what a completed run emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub iterations: u64,
    pub page_events: u64,
    pub track_events: u64,
}

#[derive(Debug)]
struct EventGenerators {
    page: PageEventGenerator,
    track: TrackEventGenerator,
}

impl EventGenerators {
    fn build<P>(url_count: UrlCount, provider: &mut P) -> Result<Self>
    where
        P: FakeDataProvider + ?Sized,
    {
        let generators = Self {
            page: PageEventGenerator::new(url_count, provider)?,
            track: TrackEventGenerator::new(url_count, provider)?,
        };
        debug!(url_count = %url_count, "{}", log_messages::driver::GENERATORS_BUILT);
        Ok(generators)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Driver {
    options: DriverOptions,
}

impl Driver {
    pub fn new(options: DriverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    /// Runs the configured number of iterations against `sink`
    ///
    /// The first error aborts the run and is returned unchanged. Records
    /// emitted before the failure stay emitted.
    #[instrument(
        skip_all,
        fields(iterations = %self.options.iterations, lifecycle = %self.options.lifecycle)
    )]
    pub async fn run<P, S>(
        &self,
        pool: &mut UserPool,
        provider: &mut P,
        sink: &mut S,
    ) -> Result<RunSummary>
    where
        P: FakeDataProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        info!(pause = ?self.options.pause, "{}", log_messages::driver::RUN_STARTED);

        let result = self.drive(pool, provider, sink).await;
        match &result {
            Ok(summary) => info!(
                page_events = summary.page_events,
                track_events = summary.track_events,
                "{}",
                log_messages::driver::RUN_COMPLETED
            ),
            Err(error) => warn!(%error, "{}", log_messages::driver::RUN_FAILED),
        }
        result
    }

    async fn drive<P, S>(
        &self,
        pool: &mut UserPool,
        provider: &mut P,
        sink: &mut S,
    ) -> Result<RunSummary>
    where
        P: FakeDataProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        let reused = match self.options.lifecycle {
            GeneratorLifecycle::Reuse => {
                Some(EventGenerators::build(self.options.url_count, provider)?)
            }
            GeneratorLifecycle::Reconstruct => None,
        };

        let mut summary = RunSummary::default();
        for iteration in 0..self.options.iterations.into_inner() {
            let fresh;
            let generators = match &reused {
                Some(generators) => generators,
                None => {
                    fresh = EventGenerators::build(self.options.url_count, provider)?;
                    &fresh
                }
            };

            let page = generators.page.generate(pool, provider)?;
            sink.emit(&Record::Page(page))?;
            summary.page_events += 1;

            let track = generators.track.generate(pool, provider)?;
            sink.emit(&Record::Track(track))?;
            summary.track_events += 1;

            summary.iterations += 1;
            debug!(iteration, "{}", log_messages::driver::ITERATION_EMITTED);

            if !self.options.pause.is_zero() {
                tokio::time::sleep(self.options.pause).await;
            }
        }

        sink.flush()?;
        Ok(summary)
    }
}
