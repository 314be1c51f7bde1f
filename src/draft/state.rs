// Draft state: board, rosters, available pool, and the pick executor.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use super::order::{round_of, DraftOrder};
use super::player::{Player, Position};
use super::roster::{Roster, RosterCaps};

/// A single completed pick on the draft board.
///
/// Append-only: records are never reordered or removed once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickRecord {
    /// Sequential pick number (1-indexed).
    pub pick: u32,
    /// Round containing the pick (1-indexed).
    pub round: u32,
    /// Team that made the pick, in `1..=team_count`.
    pub team: u32,
    /// The drafted player.
    pub player: Player,
}

/// Where the draft currently stands, derived from the state flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftPhase {
    /// Team 1 (the human seat) is on the clock.
    AwaitingUserPick,
    /// A computer-controlled team is on the clock.
    AwaitingAiPick,
    /// The pause toggle is set; no picks are accepted.
    Paused,
    /// The pool is exhausted. Terminal until restart.
    Complete,
}

/// Why a pick request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("not team {acting}'s turn (team {on_clock} is on the clock)")]
    NotYourTurn { acting: u32, on_clock: u32 },

    #[error("the draft is complete")]
    DraftComplete,

    #[error("the draft is paused")]
    DraftPaused,

    #[error("player `{id}` is not in the available pool")]
    PlayerUnavailable { id: String },

    #[error("no roster bucket for team {team} at {position}")]
    RosterMissing { team: u32, position: Position },
}

/// The complete state of a mock draft.
///
/// All mutation goes through `apply_pick`, `set_paused`, and `restart`;
/// everything else is a read. Each mutation bumps `version`, which the app
/// orchestrator uses to invalidate scheduled AI picks that no longer match
/// the state they were armed against.
#[derive(Debug, Clone)]
pub struct DraftState {
    order: DraftOrder,
    team_count: u32,
    /// Full catalog, retained so restart can refill the pool.
    catalog: Vec<Player>,
    /// Undrafted players, in catalog order. Shrinks monotonically between
    /// restarts.
    available: Vec<Player>,
    /// Ordered pick log.
    board: Vec<PickRecord>,
    /// Index = team number - 1.
    rosters: Vec<Roster>,
    paused: bool,
    version: u64,
}

impl DraftState {
    /// Create a fresh draft over the given catalog.
    ///
    /// Team 1 is always the human seat, so a fresh draft starts awaiting a
    /// user pick.
    pub fn new(catalog: Vec<Player>, team_count: u32, order: DraftOrder, caps: RosterCaps) -> Self {
        let rosters = (0..team_count).map(|_| Roster::new(caps.clone())).collect();
        DraftState {
            order,
            team_count,
            available: catalog.clone(),
            catalog,
            board: Vec::new(),
            rosters,
            paused: false,
            version: 0,
        }
    }

    // -- Derived counters ---------------------------------------------------

    /// The next pick number: `board length + 1`.
    pub fn current_pick(&self) -> u32 {
        self.board.len() as u32 + 1
    }

    /// The round containing the current pick.
    pub fn current_round(&self) -> u32 {
        round_of(self.current_pick(), self.team_count)
    }

    /// The team on the clock for the current pick.
    pub fn current_team(&self) -> u32 {
        self.order.team_on_clock(self.current_pick(), self.team_count)
    }

    /// Whether the human seat (team 1) is on the clock.
    pub fn is_user_turn(&self) -> bool {
        self.current_team() == 1
    }

    /// Whether every catalog player has been drafted.
    pub fn is_complete(&self) -> bool {
        self.available.is_empty()
    }

    /// Whether the pause toggle is set.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The current phase of the draft state machine.
    ///
    /// Completion dominates pause: a finished draft stays `Complete` even if
    /// the pause toggle was left set.
    pub fn phase(&self) -> DraftPhase {
        if self.is_complete() {
            DraftPhase::Complete
        } else if self.paused {
            DraftPhase::Paused
        } else if self.is_user_turn() {
            DraftPhase::AwaitingUserPick
        } else {
            DraftPhase::AwaitingAiPick
        }
    }

    /// Monotonically increasing mutation counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn team_count(&self) -> u32 {
        self.team_count
    }

    pub fn order(&self) -> DraftOrder {
        self.order
    }

    /// Total number of players in the catalog.
    pub fn total_players(&self) -> usize {
        self.catalog.len()
    }

    // -- Read surface -------------------------------------------------------

    /// The undrafted pool, in catalog order.
    pub fn available(&self) -> &[Player] {
        &self.available
    }

    /// The full ordered pick log.
    pub fn board(&self) -> &[PickRecord] {
        &self.board
    }

    /// Picks belonging to one round, in pick order.
    pub fn picks_in_round(&self, round: u32) -> impl Iterator<Item = &PickRecord> {
        self.board.iter().filter(move |p| p.round == round)
    }

    /// A team's roster, or `None` for an out-of-range team number.
    pub fn roster(&self, team: u32) -> Option<&Roster> {
        if team == 0 {
            return None;
        }
        self.rosters.get(team as usize - 1)
    }

    // -- Mutations ----------------------------------------------------------

    /// Apply a pick: the single mutation point for the draft board, rosters,
    /// and available pool.
    ///
    /// Validates turn legality, pause, completion, and player availability
    /// before touching anything, then performs the whole transition at once:
    /// no intermediate state is observable. `RosterMissing` signals an
    /// internal-consistency violation; it is logged and returned with the
    /// prior state fully intact.
    pub fn apply_pick(&mut self, player_id: &str, acting_team: u32) -> Result<&PickRecord, PickError> {
        if self.is_complete() {
            return Err(PickError::DraftComplete);
        }
        if self.paused {
            return Err(PickError::DraftPaused);
        }
        let on_clock = self.current_team();
        if acting_team != on_clock {
            return Err(PickError::NotYourTurn {
                acting: acting_team,
                on_clock,
            });
        }

        let pool_idx = self
            .available
            .iter()
            .position(|p| p.id == player_id)
            .ok_or_else(|| PickError::PlayerUnavailable {
                id: player_id.to_string(),
            })?;
        let position = self.available[pool_idx].position;

        // Integrity check before any mutation. Rosters are built with a
        // bucket per position, so this failing means the state is corrupt.
        let roster_ok = self
            .roster(acting_team)
            .map(|r| r.has_bucket(position))
            .unwrap_or(false);
        if !roster_ok {
            error!(
                "Roster bucket missing for team {} at {}; aborting pick without mutating",
                acting_team, position
            );
            return Err(PickError::RosterMissing {
                team: acting_team,
                position,
            });
        }

        let pick = self.current_pick();
        let round = self.current_round();
        let player = self.available.remove(pool_idx);

        self.rosters[acting_team as usize - 1].push(player.clone());
        self.board.push(PickRecord {
            pick,
            round,
            team: acting_team,
            player,
        });
        self.version += 1;

        let record = self.board.last().expect("pick was just appended");
        debug!(
            "Pick {} (round {}): team {} drafted {} ({})",
            record.pick, record.round, record.team, record.player.name, record.player.position
        );
        Ok(record)
    }

    /// Set the pause toggle. Bumps the version so a pending AI timer armed
    /// before the change can never fire against it.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            self.paused = paused;
            self.version += 1;
        }
    }

    /// Flip the pause toggle and return the new value.
    pub fn toggle_paused(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Reset to pick 1 / round 1 / team 1: empty board, empty rosters, full
    /// pool, pause cleared.
    pub fn restart(&mut self) {
        self.board.clear();
        self.available = self.catalog.clone();
        for roster in &mut self.rosters {
            roster.clear();
        }
        self.paused = false;
        self.version += 1;
    }
}
