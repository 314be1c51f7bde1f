// TUI draft room: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the latest `DraftSnapshot` from
// the app orchestrator plus local display state (active tab, filters,
// selection). It applies `UiUpdate` messages from an mpsc channel and
// re-renders at ~30 fps. All draft mutations travel back to the app loop as
// `UserCommand` messages; the TUI never touches draft state directly.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::draft::player::{filter_available, Player, Position};
use crate::draft::state::{DraftPhase, PickRecord};
use crate::protocol::{DraftSnapshot, RosterGroup, UiUpdate, UserCommand};

use layout::build_layout;

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

/// Which view occupies the main panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    /// Available players table.
    Available,
    /// Full draft history grouped by round.
    History,
    /// The user's roster, expanded.
    Roster,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
pub struct ViewState {
    /// The next pick number.
    pub pick: u32,
    pub round: u32,
    pub team: u32,
    pub phase: DraftPhase,
    pub paused: bool,
    pub complete: bool,
    pub team_count: u32,
    pub total_players: usize,
    pub board: Vec<PickRecord>,
    pub available: Vec<Player>,
    pub my_roster: Vec<RosterGroup>,
    pub status_line: Option<String>,

    /// Which tab is active in the main panel.
    pub active_tab: TabId,
    /// Current free-text name filter.
    pub filter_text: String,
    /// Whether the filter input is capturing keystrokes.
    pub filter_mode: bool,
    /// Exact-match position filter for the available table.
    pub position_filter: Option<Position>,
    /// Selection index into the filtered available list.
    pub selected: usize,
    /// Whether the quit confirmation prompt is showing.
    pub confirm_quit: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            pick: 1,
            round: 1,
            team: 1,
            phase: DraftPhase::AwaitingUserPick,
            paused: false,
            complete: false,
            team_count: 0,
            total_players: 0,
            board: Vec::new(),
            available: Vec::new(),
            my_roster: Vec::new(),
            status_line: None,
            active_tab: TabId::Available,
            filter_text: String::new(),
            filter_mode: false,
            position_filter: None,
            selected: 0,
            confirm_quit: false,
        }
    }
}

impl ViewState {
    /// Apply a full draft snapshot from the app orchestrator.
    ///
    /// Local display state (tab, filters, selection) is preserved; the
    /// selection is clamped because the filtered list may have shrunk.
    pub fn apply_snapshot(&mut self, snapshot: DraftSnapshot) {
        self.pick = snapshot.pick;
        self.round = snapshot.round;
        self.team = snapshot.team;
        self.phase = snapshot.phase;
        self.paused = snapshot.paused;
        self.complete = snapshot.complete;
        self.team_count = snapshot.team_count;
        self.total_players = snapshot.total_players;
        self.board = snapshot.board;
        self.available = snapshot.available;
        self.my_roster = snapshot.my_roster;
        self.status_line = snapshot.status_line;
        self.clamp_selection();
    }

    /// The available players under the current filters, in display order.
    pub fn filtered_players(&self) -> Vec<&Player> {
        filter_available(&self.available, &self.filter_text, self.position_filter)
    }

    /// The currently selected player, if the filtered list is nonempty.
    pub fn selected_player(&self) -> Option<&Player> {
        self.filtered_players().get(self.selected).copied()
    }

    /// Keep the selection inside the filtered list.
    pub fn clamp_selection(&mut self) {
        let len = self.filtered_players().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Snapshot(snapshot) => state.apply_snapshot(*snapshot),
    }
}

// ---------------------------------------------------------------------------
// Frame rendering
// ---------------------------------------------------------------------------

/// Render the complete draft-room frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::draft_board::render_current_round(frame, layout.board_strip, state);

    match state.active_tab {
        TabId::Available => widgets::available::render(frame, layout.main_panel, state),
        TabId::History => widgets::draft_board::render_history(frame, layout.main_panel, state),
        TabId::Roster => widgets::roster::render_expanded(frame, layout.main_panel, state),
    }

    widgets::roster::render_sidebar(frame, layout.roster, state);
    widgets::status_bar::render_help(frame, layout.help_bar, state);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal even if rendering panics.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            // UI updates from the app orchestrator
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    None => break, // app is shutting down
                }
            }

            // Keyboard input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quitting = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quitting {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events need no handling; the next
                        // render tick redraws at the new size.
                    }
                    Some(Err(_)) | None => break,
                }
            }

            // Render tick
            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
