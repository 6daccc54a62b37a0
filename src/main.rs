use anyhow::Result;
use synthetic_events::{config::Settings, infrastructure::log_messages, Application};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let settings = Settings::new()?;

    // Records go to stdout, so logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    info!("{}", log_messages::configuration::CONFIG_LOADED);

    info!(
        seed_count = %settings.generator.seed_count,
        url_count = %settings.generator.url_count,
        lifecycle = %settings.generator.lifecycle,
        iterations = %settings.driver.iterations,
        pause_ms = %settings.driver.pause_ms,
        "{}",
        log_messages::application::STARTING
    );

    let summary = Application::with_settings(settings).run().await?;

    info!(
        iterations = summary.iterations,
        page_events = summary.page_events,
        track_events = summary.track_events,
        "{}",
        log_messages::application::FINISHED
    );

    Ok(())
}
