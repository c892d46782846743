//! RPG Calendar engine - Main entry point.

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rpgcal_domain::CalendarSnapshot;
use rpgcal_engine::infrastructure::config::AppConfig;
use rpgcal_engine::use_cases::run_clock_ticker;
use rpgcal_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rpgcal_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RPG Calendar engine");

    let config = AppConfig::from_env()?;
    tracing::info!(
        epoch = %config.calendar.epoch(),
        hours_per_fictional_day = config.calendar.hours_per_fictional_day(),
        "Calendar configured"
    );

    let app = App::new(config.calendar);

    let cancel_token = CancellationToken::new();
    setup_shutdown_signal(cancel_token.clone());

    run_clock_ticker(
        app.calendar.clone(),
        app.clock.clone(),
        config.tick_period,
        cancel_token,
        log_snapshot,
    )
    .await;

    tracing::info!("RPG Calendar engine stopped");
    Ok(())
}

fn log_snapshot(snapshot: CalendarSnapshot) {
    tracing::info!(
        date = %snapshot.moment,
        clock = %snapshot.live.display_day_time(),
        period = %snapshot.live.period(),
        today = %snapshot.today_range.label(),
        game_month = %snapshot.game_month,
        week_ends_in = %snapshot.countdown,
        "Tick"
    );
}

/// Set up a signal handler that cancels the token on Ctrl+C or SIGTERM.
fn setup_shutdown_signal(cancel_token: CancellationToken) {
    tokio::spawn(async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut signal) => {
                    signal.recv().await;
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to install SIGTERM handler");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, shutting down...");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, shutting down...");
            }
        }

        cancel_token.cancel();
    });
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
