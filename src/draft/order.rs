// Turn sequencing: which team is on the clock for a given pick number.

use serde::{Deserialize, Serialize};

/// Draft order policy.
///
/// Snake is the shipped default: odd rounds run 1..N, even rounds run N..1,
/// so the team that picked last in one round picks first in the next.
/// Linear keeps the same 1..N order every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftOrder {
    Snake,
    Linear,
}

impl Default for DraftOrder {
    fn default() -> Self {
        DraftOrder::Snake
    }
}

impl DraftOrder {
    /// The team on the clock for `pick_number` (1-indexed) in a draft of
    /// `team_count` teams. Returns a team number in `1..=team_count`.
    ///
    /// Pure and total: pick numbers beyond the catalog size simply continue
    /// the arithmetic. Stopping the draft when the pool empties is the
    /// caller's job, not the sequencer's.
    pub fn team_on_clock(&self, pick_number: u32, team_count: u32) -> u32 {
        debug_assert!(pick_number >= 1);
        debug_assert!(team_count >= 1);

        let slot = (pick_number - 1) % team_count;
        match self {
            DraftOrder::Linear => slot + 1,
            DraftOrder::Snake => {
                if round_of(pick_number, team_count) % 2 == 1 {
                    slot + 1
                } else {
                    team_count - slot
                }
            }
        }
    }
}

/// The round containing `pick_number`: `ceil(pick_number / team_count)`.
pub fn round_of(pick_number: u32, team_count: u32) -> u32 {
    (pick_number + team_count - 1) / team_count
}
