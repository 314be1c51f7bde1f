// Message types exchanged between the app orchestrator and the TUI.

use serde::{Deserialize, Serialize};

use crate::draft::player::{Player, Position};
use crate::draft::state::{DraftPhase, PickRecord};

/// Commands from the TUI to the app orchestrator.
///
/// Everything that mutates draft state travels through here; the TUI never
/// touches the `DraftState` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Draft a player for the human seat (team 1).
    Draft { player_id: String },
    /// Flip the pause toggle.
    PauseToggle,
    /// Reset the draft to pick 1 with the full pool.
    Restart,
    /// Shut down the application.
    Quit,
}

/// Updates pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// A full snapshot of the draft state for rendering.
    Snapshot(Box<DraftSnapshot>),
}

/// One position group of a roster, for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterGroup {
    pub position: Position,
    pub players: Vec<Player>,
    /// Advisory cap for the position.
    pub cap: usize,
}

/// A complete view of the draft state at one instant.
///
/// Built by the app orchestrator after every state change and applied by the
/// TUI in one shot, so the display can never show a partially applied pick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftSnapshot {
    /// The next pick number.
    pub pick: u32,
    /// The round containing the next pick.
    pub round: u32,
    /// The team on the clock.
    pub team: u32,
    pub phase: DraftPhase,
    pub paused: bool,
    pub complete: bool,
    pub team_count: u32,
    pub total_players: usize,
    /// Full ordered pick log.
    pub board: Vec<PickRecord>,
    /// Undrafted players in catalog order; the TUI filters and sorts.
    pub available: Vec<Player>,
    /// The human team's roster grouped by position, in display order.
    pub my_roster: Vec<RosterGroup>,
    /// One-line status message (pick confirmations, rejections).
    pub status_line: Option<String>,
}
