// Player records and the position enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel rank for players absent from a ranking table.
///
/// Lower is better on both rank scales, so unranked players sort to the
/// bottom and score poorly in valuation without being excluded outright.
pub const UNRANKED: u32 = 999;

/// Football positions used for roster buckets and valuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
    Kicker,
    Defense,
}

/// All positions in display order. Used for roster construction, the TUI
/// position-filter cycle, and exhaustive iteration in tests.
pub const ALL_POSITIONS: &[Position] = &[
    Position::Quarterback,
    Position::RunningBack,
    Position::WideReceiver,
    Position::TightEnd,
    Position::Kicker,
    Position::Defense,
];

impl Position {
    /// Parse a position string into a Position enum.
    ///
    /// Handles the catalog abbreviations, case-insensitive:
    /// - "QB", "RB", "WR", "TE", "K"
    /// - "DST" or "DEF" -> Defense (the catalog uses both spellings)
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            "K" => Some(Position::Kicker),
            "DST" | "DEF" => Some(Position::Defense),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::Kicker => "K",
            Position::Defense => "DST",
        }
    }

    /// Deterministic ordering index for roster display.
    pub fn sort_order(&self) -> u8 {
        match self {
            Position::Quarterback => 0,
            Position::RunningBack => 1,
            Position::WideReceiver => 2,
            Position::TightEnd => 3,
            Position::Kicker => 4,
            Position::Defense => 5,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// A single player from the ranked catalog.
///
/// Immutable once loaded: the catalog adapter assigns both ranks at load
/// time and nothing mutates a Player afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique catalog identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Playing position.
    pub position: Position,
    /// NFL team abbreviation (e.g. "BUF").
    pub team: String,
    /// Rank within the position group (tier * 100 + index). Lower is better.
    pub position_rank: u32,
    /// Rank across all positions. Lower is better.
    pub overall_rank: u32,
}

/// Filter and sort a player list for display.
///
/// - `search` matches as a case-insensitive name substring (empty = match all).
/// - `position` requires an exact position match when present.
/// - Sorting uses overall rank when no position filter is active, otherwise
///   position rank. The sort is stable, so rank ties keep catalog order.
pub fn filter_available<'a>(
    players: &'a [Player],
    search: &str,
    position: Option<Position>,
) -> Vec<&'a Player> {
    let needle = search.to_lowercase();

    let mut filtered: Vec<&Player> = players
        .iter()
        .filter(|p| {
            if let Some(pos) = position {
                if p.position != pos {
                    return false;
                }
            }
            needle.is_empty() || p.name.to_lowercase().contains(&needle)
        })
        .collect();

    if position.is_some() {
        filtered.sort_by_key(|p| p.position_rank);
    } else {
        filtered.sort_by_key(|p| p.overall_rank);
    }

    filtered
}
