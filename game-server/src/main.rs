use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;

use game_persistence::connect_and_migrate;
use game_server::{chat::ChatBot, config::Config, create_routes, game_service::GameService};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting four-letter word game server...");

    let config = Config::from_env()?;

    let word_bank = config.load_word_bank()?;
    info!("Word bank ready with {} words", word_bank.len());

    // One shared connection pool for the whole process
    let db = connect_and_migrate(&config.database_url).await?;
    let pool = db.clone();

    let service = Arc::new(GameService::new(db, word_bank, config.game_rules()));
    info!(
        "Players get {} attempts per game, start policy {:?}",
        service.rules().max_attempts,
        service.rules().start_policy
    );

    let chat_bot = ChatBot::new(service.clone(), config.leaderboard_size);
    let routes = create_routes(service.clone(), chat_bot);

    // Start lock cleanup task
    let cleanup_service = service.clone();
    let prune_interval = Duration::from_secs(config.lock_prune_interval_seconds.max(1));
    let cleanup_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(prune_interval);
        loop {
            interval.tick().await;
            let pruned = cleanup_service.player_locks().prune_idle();
            if pruned > 0 {
                tracing::debug!("Pruned {} idle player locks", pruned);
            }
        }
    });

    let addr = (config.host.parse::<IpAddr>()?, config.port);

    let (addr, server) = warp::serve(routes).try_bind_with_graceful_shutdown(addr, async {
        shutdown_signal().await;
    })?;

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;

    // Release the pool explicitly once requests have drained
    cleanup_task.abort();
    pool.close().await?;
    info!("Server shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    // Wait for SIGINT (Ctrl+C) or SIGTERM
    #[cfg(unix)]
    {
        match (
            signal::unix::signal(signal::unix::SignalKind::interrupt()),
            signal::unix::signal(signal::unix::SignalKind::terminate()),
        ) {
            (Ok(mut sigint), Ok(mut sigterm)) => {
                tokio::select! {
                    _ = sigint.recv() => {
                        info!("Received SIGINT, shutting down gracefully...");
                    }
                    _ = sigterm.recv() => {
                        info!("Received SIGTERM, shutting down gracefully...");
                    }
                }
            }
            _ => {
                tracing::error!("Failed to install signal handlers, waiting for Ctrl+C");
                if signal::ctrl_c().await.is_ok() {
                    info!("Received Ctrl+C, shutting down gracefully...");
                }
            }
        }
    }

    #[cfg(not(unix))]
    {
        if signal::ctrl_c().await.is_ok() {
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    }
}
