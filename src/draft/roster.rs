// Roster buckets and advisory position capacities.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::player::{Player, Position, ALL_POSITIONS};

/// Advisory per-position capacity used to shape AI valuation.
///
/// These are not hard legality limits: a human drafter may exceed them, and
/// the AI is merely steered away from saturated positions because the need
/// bonus drops to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterCaps {
    caps: HashMap<Position, usize>,
}

impl Default for RosterCaps {
    fn default() -> Self {
        let mut caps = HashMap::new();
        caps.insert(Position::Quarterback, 2);
        caps.insert(Position::RunningBack, 4);
        caps.insert(Position::WideReceiver, 5);
        caps.insert(Position::TightEnd, 2);
        caps.insert(Position::Kicker, 1);
        caps.insert(Position::Defense, 1);
        RosterCaps { caps }
    }
}

impl RosterCaps {
    /// Build caps from a config mapping of position strings to counts
    /// (league.toml `[league.roster_caps]`). Positions absent from the
    /// mapping keep their default cap; unknown keys are skipped with a
    /// warning.
    pub fn from_config(config: &HashMap<String, usize>) -> Self {
        let mut result = RosterCaps::default();
        for (pos_str, &count) in config {
            match Position::from_str_pos(pos_str) {
                Some(pos) => {
                    result.caps.insert(pos, count);
                }
                None => {
                    warn!("Unknown position `{}` in roster_caps config, skipping", pos_str);
                }
            }
        }
        result
    }

    /// The capacity ceiling for a position.
    pub fn cap(&self, position: Position) -> usize {
        self.caps.get(&position).copied().unwrap_or(0)
    }
}

/// One team's drafted players, bucketed by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    buckets: HashMap<Position, Vec<Player>>,
    caps: RosterCaps,
}

impl Roster {
    /// Create an empty roster with a bucket for every position.
    pub fn new(caps: RosterCaps) -> Self {
        let mut buckets = HashMap::new();
        for &pos in ALL_POSITIONS {
            buckets.insert(pos, Vec::new());
        }
        Roster { buckets, caps }
    }

    /// The players drafted at a position, in draft order.
    pub fn players(&self, position: Position) -> &[Player] {
        self.buckets
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether a bucket exists for the given position.
    ///
    /// Buckets are created exhaustively in `new`, so a missing bucket is an
    /// internal-consistency violation the pick executor checks for before
    /// mutating anything.
    pub fn has_bucket(&self, position: Position) -> bool {
        self.buckets.contains_key(&position)
    }

    /// Push a drafted player into their position bucket.
    ///
    /// Returns `false` without mutating when the bucket is missing; the
    /// executor treats that as a fatal-for-the-operation condition.
    pub fn push(&mut self, player: Player) -> bool {
        match self.buckets.get_mut(&player.position) {
            Some(bucket) => {
                bucket.push(player);
                true
            }
            None => false,
        }
    }

    /// Number of players drafted at a position.
    pub fn count(&self, position: Position) -> usize {
        self.players(position).len()
    }

    /// Total players on the roster across all positions.
    pub fn total_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Shortfall between the advisory cap and the current count at a
    /// position: `max(0, cap - count)`.
    pub fn positional_need(&self, position: Position) -> usize {
        self.caps.cap(position).saturating_sub(self.count(position))
    }

    /// The advisory cap for a position.
    pub fn cap(&self, position: Position) -> usize {
        self.caps.cap(position)
    }

    /// Remove every drafted player, keeping the caps.
    pub fn clear(&mut self) {
        for bucket in self.buckets.values_mut() {
            bucket.clear();
        }
    }
}
