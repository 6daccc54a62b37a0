use tracing::{info, instrument, warn};

use crate::application::driver::{Driver, RunSummary};
use crate::config::Settings;
use crate::domain::user_pool::UserPool;
use crate::infrastructure::{
    faker::FakerProvider,
    log_messages,
    sink::{EventSink, StdoutSink},
};
use crate::Result;

/// Main application struct that wires settings, provider, pool and sink
pub struct Application {
    settings: Settings,
}

impl Application {
    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    /// Generates records to standard output
    #[instrument(skip(self))]
    pub async fn run(self) -> Result<RunSummary> {
        let mut sink = StdoutSink::stdout();
        self.run_with_sink(&mut sink).await
    }

    #[instrument(skip_all)]
    pub async fn run_with_sink<S>(self, sink: &mut S) -> Result<RunSummary>
    where
        S: EventSink + ?Sized,
    {
        let mut provider = self.provider();

        let seed_count = self.settings.generator.seed_count;
        let mut pool = UserPool::initialize(seed_count, &mut provider)?;
        if pool.len() < seed_count.into_inner() {
            warn!(
                requested = %seed_count,
                pooled = pool.len(),
                "{}",
                log_messages::pool::SHORT_OF_SEED_COUNT
            );
        }
        info!(users = pool.len(), "{}", log_messages::pool::INITIALIZED);

        Driver::new(self.settings.driver_options())
            .run(&mut pool, &mut provider, sink)
            .await
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn provider(&self) -> FakerProvider {
        match self.settings.generator.rng_seed {
            Some(seed) => {
                info!(seed, "{}", log_messages::application::SEEDED_RNG);
                FakerProvider::seeded(seed)
            }
            None => {
                info!("{}", log_messages::application::ENTROPY_RNG);
                FakerProvider::from_entropy()
            }
        }
    }
}
