// DraftRoom entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load and rank the player catalog
// 4. Initialize DraftState
// 5. Create mpsc channels
// 6. Spawn app logic task
// 7. Run the TUI event loop (blocking until user quits)
// 8. Cleanup on exit

use std::path::Path;

use draftroom::app;
use draftroom::catalog;
use draftroom::config;
use draftroom::draft::roster::RosterCaps;
use draftroom::draft::state::DraftState;
use draftroom::tui;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    init_tracing()?;
    info!("DraftRoom starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: league={}, {} teams, {:?} order",
        config.league.name, config.league.num_teams, config.league.draft_order
    );

    // 3. Load and rank the player catalog
    let players = catalog::load_catalog(
        Path::new(&config.data_paths.players),
        Path::new(&config.data_paths.rankings),
    )
    .context("failed to load player catalog")?;
    info!("Catalog ready: {} players", players.len());

    // 4. Initialize DraftState
    let caps = RosterCaps::from_config(&config.league.roster_caps);
    let draft = DraftState::new(
        players,
        config.league.num_teams,
        config.league.draft_order,
        caps,
    );
    let app_state = app::AppState::new(config, draft);

    // 5. Create mpsc channels
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    // 6. Spawn app logic task
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 7. Run the TUI event loop (blocking until user quits)
    if let Err(e) = tui::run(ui_rx, cmd_tx).await {
        error!("TUI error: {}", e);
    }

    // 8. Cleanup: wait for the app task to finish (with timeout)
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("DraftRoom shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by
/// the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("draftroom.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("draftroom=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
