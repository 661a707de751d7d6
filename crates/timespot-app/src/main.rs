use timespot_app::app::App;
use timespot_core::config::load_config;
use timespot_service::ticker::TickEvent;
use tokio::sync::{mpsc, watch};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting TimeSpot world clock");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let mut app = App::build(config)?;
    app.start().await;

    for query in std::env::args().skip(1) {
        if app.add_from_search(&query).await {
            tracing::info!(query = %query, "Added city from search");
        }
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
        tracing::info!("Shutting down");
        shutdown_tx.send(true).ok();
    });

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let ticker = tokio::spawn(app.ticker().run(shutdown_rx, move |event| {
        let event_tx = event_tx.clone();
        async move {
            event_tx.send(event).ok();
        }
    }));

    println!("{CLEAR_SCREEN}{}", app.frame());
    while let Some(event) = event_rx.recv().await {
        app.handle(event).await;
        if event == TickEvent::Tick {
            println!("{CLEAR_SCREEN}{}", app.frame());
        }
    }

    ticker.await?;
    tracing::info!(user_id = %app.user_id(), "TimeSpot stopped");

    Ok(())
}
