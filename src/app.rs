// Application state and orchestration logic.
//
// The central event loop that coordinates user commands from the TUI with
// the delayed, cancellable AI pick timer. All draft mutations happen on this
// task; the TUI only ever sees immutable snapshots pushed over a channel.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::draft::player::ALL_POSITIONS;
use crate::draft::state::{DraftPhase, DraftState};
use crate::protocol::{DraftSnapshot, RosterGroup, UiUpdate, UserCommand};
use crate::valuation;

/// The human-controlled seat. Team 1 by construction.
pub const HUMAN_TEAM: u32 = 1;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub draft: DraftState,
    /// One-line status for the TUI (last pick, last rejection).
    status_line: Option<String>,
}

impl AppState {
    pub fn new(config: Config, draft: DraftState) -> Self {
        AppState {
            config,
            draft,
            status_line: None,
        }
    }

    /// Build a `DraftSnapshot` from the current draft state.
    pub fn build_snapshot(&self) -> DraftSnapshot {
        let draft = &self.draft;
        let my_roster = ALL_POSITIONS
            .iter()
            .map(|&position| {
                let roster = draft.roster(HUMAN_TEAM);
                RosterGroup {
                    position,
                    players: roster.map(|r| r.players(position).to_vec()).unwrap_or_default(),
                    cap: roster.map(|r| r.cap(position)).unwrap_or(0),
                }
            })
            .collect();

        DraftSnapshot {
            pick: draft.current_pick(),
            round: draft.current_round(),
            team: draft.current_team(),
            phase: draft.phase(),
            paused: draft.is_paused(),
            complete: draft.is_complete(),
            team_count: draft.team_count(),
            total_players: draft.total_players(),
            board: draft.board().to_vec(),
            available: draft.available().to_vec(),
            my_roster,
            status_line: self.status_line.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// AI pick scheduling
// ---------------------------------------------------------------------------

/// A pending AI pick, armed against a specific state version.
///
/// The version token makes cancellation implicit: any mutation (a pick, a
/// pause, a restart) bumps the draft version, and a timer that fires against
/// a stale version is discarded instead of applied.
#[derive(Debug, Clone, Copy)]
struct AiTimer {
    deadline: Instant,
    version: u64,
}

/// Arm an AI pick timer if a computer-controlled team is on the clock.
fn schedule_ai_pick(state: &AppState) -> Option<AiTimer> {
    if state.draft.phase() != DraftPhase::AwaitingAiPick {
        return None;
    }
    let delay = Duration::from_millis(state.config.league.ai_pick_delay_ms);
    Some(AiTimer {
        deadline: Instant::now() + delay,
        version: state.draft.version(),
    })
}

/// Wait for the armed deadline, or forever when none is armed.
async fn ai_wait(deadline: Option<Instant>) {
    match deadline {
        Some(d) => tokio::time::sleep_until(d).await,
        None => std::future::pending().await,
    }
}

/// Run the valuation engine and apply the pick for the team on the clock.
fn run_ai_pick(state: &mut AppState) {
    // The timer was armed for an AI turn, but re-check before valuing: the
    // pause/complete/user-turn cases mean the armed state is gone.
    if state.draft.is_paused() || state.draft.is_complete() || state.draft.is_user_turn() {
        return;
    }

    let team = state.draft.current_team();
    let round = state.draft.current_round();
    let Some(roster) = state.draft.roster(team) else {
        warn!("No roster for team {} on the clock; skipping AI pick", team);
        return;
    };
    let Some(player) = valuation::best_pick(state.draft.available(), roster, round) else {
        return;
    };
    let player_id = player.id.clone();
    let player_name = player.name.clone();

    match state.draft.apply_pick(&player_id, team) {
        Ok(record) => {
            info!(
                "AI pick {} (round {}): team {} drafted {}",
                record.pick, record.round, team, player_name
            );
            state.status_line = Some(format!("Team {} drafted {}", team, player_name));
        }
        Err(e) => {
            // Unreachable given the checks above; log and wait for the next
            // eligible turn rather than retrying.
            warn!("AI pick for team {} rejected: {}", team, e);
        }
    }
}

// ---------------------------------------------------------------------------
// Command handling
// ---------------------------------------------------------------------------

/// Apply a user command to the draft state.
///
/// Rejected picks become a status line, not an error: the TUI shows the
/// message and the state is untouched.
fn handle_user_command(state: &mut AppState, cmd: UserCommand) {
    match cmd {
        UserCommand::Draft { player_id } => match state.draft.apply_pick(&player_id, HUMAN_TEAM) {
            Ok(record) => {
                let name = record.player.name.clone();
                info!("User drafted {} at pick {}", name, record.pick);
                state.status_line = Some(format!("You drafted {}", name));
            }
            Err(e) => {
                info!("User pick rejected: {}", e);
                state.status_line = Some(format!("Pick rejected: {}", e));
            }
        },
        UserCommand::PauseToggle => {
            let paused = state.draft.toggle_paused();
            info!("Draft {}", if paused { "paused" } else { "resumed" });
            state.status_line = Some(if paused {
                "Draft paused".to_string()
            } else {
                "Draft resumed".to_string()
            });
        }
        UserCommand::Restart => {
            state.draft.restart();
            info!(
                "Draft restarted with {} available players",
                state.draft.available().len()
            );
            state.status_line = Some("Draft restarted".to_string());
        }
        UserCommand::Quit => {
            // Handled by the event loop before dispatch.
        }
    }
}

// ---------------------------------------------------------------------------
// Main application loop
// ---------------------------------------------------------------------------

/// Run the application event loop until the command channel closes or a
/// Quit command arrives.
///
/// Listens on the user command channel and the AI pick timer with
/// `tokio::select!`. After every state change the timer is re-armed from the
/// current phase and a fresh snapshot is pushed to the TUI.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    let mut ai_timer = schedule_ai_pick(&state);
    push_snapshot(&ui_tx, &state).await;

    loop {
        let ai_deadline = ai_timer.map(|t| t.deadline);

        tokio::select! {
            // --- User commands ---
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) => {
                        info!("Quit command received, shutting down");
                        break;
                    }
                    Some(cmd) => {
                        handle_user_command(&mut state, cmd);
                        ai_timer = schedule_ai_pick(&state);
                        push_snapshot(&ui_tx, &state).await;
                    }
                    None => {
                        info!("Command channel closed, shutting down");
                        break;
                    }
                }
            }

            // --- AI pick timer ---
            _ = ai_wait(ai_deadline), if ai_timer.is_some() => {
                let timer = ai_timer.take().expect("branch requires an armed timer");
                if timer.version == state.draft.version() {
                    run_ai_pick(&mut state);
                } else {
                    debug!(
                        "Discarding stale AI timer (armed at v{}, state at v{})",
                        timer.version,
                        state.draft.version()
                    );
                }
                ai_timer = schedule_ai_pick(&state);
                push_snapshot(&ui_tx, &state).await;
            }
        }
    }

    info!("Application event loop exiting");
    Ok(())
}

async fn push_snapshot(ui_tx: &mpsc::Sender<UiUpdate>, state: &AppState) {
    let _ = ui_tx
        .send(UiUpdate::Snapshot(Box::new(state.build_snapshot())))
        .await;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
