use groundops_app::{write_exports, Dashboard, DashboardSnapshot};
use groundops_store::{Config, SeedStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "groundops_app=debug,groundops_view=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("Config unavailable ({}), using defaults", err);
        Config::default()
    });
    tracing::info!(
        "Starting dashboard: {}ms counters at {}ms frames",
        config.dashboard.animation_ms,
        config.dashboard.frame_interval_ms
    );

    let mut dashboard = Dashboard::new(&config, SeedStore::demo());

    let mut frames = tokio::time::interval(config.dashboard.frame_interval());
    let started = frames.tick().await;
    dashboard.mount(started.into_std());

    loop {
        let now = frames.tick().await;
        if dashboard.frame(now.into_std()) == 0 {
            break;
        }
    }
    tracing::debug!("Counters settled");

    let snapshot = DashboardSnapshot::capture(&dashboard);
    println!("{}", snapshot.to_json()?);

    let today = chrono::Local::now().date_naive();
    let written = write_exports(&config.export.directory, &dashboard, today).await?;
    tracing::info!("Wrote {} export files", written.len());

    dashboard.unmount();
    Ok(())
}
