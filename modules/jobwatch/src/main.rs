use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use jobwatch::{notify, store::FileSeenStore, JobwatchConfig, Watcher};
use listing_client::ListingClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("jobwatch=info".parse()?)
                .add_directive("listing_client=info".parse()?),
        )
        .init();

    info!("Job watch starting...");

    let config = JobwatchConfig::from_env()?;

    let client = ListingClient::new(&config.user_agent, config.request_timeout)?;
    let store = FileSeenStore::new(&config.store_path);
    let notifier = notify::build_backend(config.slack_webhook.clone(), &config.job_label);

    info!(
        store = %store.path().display(),
        user_agent = client.user_agent(),
        "Watcher configured"
    );

    let watcher = Watcher::new(
        Box::new(client),
        Box::new(store),
        notifier,
        config.search_url.clone(),
    );
    let summary = watcher.run().await?;

    info!("Run complete. {summary}");
    Ok(())
}
