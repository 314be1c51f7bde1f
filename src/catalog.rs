// Player catalog loading: flatten position groups and assign rankings.
//
// The catalog arrives as two JSON files: a nested, position-grouped player
// collection, and a pair of ranking tables (an ordered overall id list and
// per-position tier tables). The adapter runs once at load time; the
// resulting player list is immutable afterward.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::draft::player::{Player, Position, UNRANKED};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Raw input shapes
// ---------------------------------------------------------------------------

/// One raw catalog entry. Every field is optional so a malformed entry
/// deserializes instead of failing the whole file; entries missing id,
/// name, or position are dropped during flattening.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

/// The nested player collection: an array of position-group objects, each
/// mapping a group label to a list of raw entries.
pub type RawGroups = Vec<HashMap<String, Vec<RawPlayer>>>;

/// The two ranking tables.
///
/// `overall` is an ordered id list (0-based index + 1 = overall rank).
/// `positions` maps a position string to its tier table; tier names carry an
/// integer suffix ("Tier 2") and each tier holds an ordered id list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingTables {
    #[serde(default)]
    pub overall: Vec<String>,
    #[serde(default)]
    pub positions: HashMap<String, BTreeMap<String, Vec<String>>>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load and rank the full catalog from the two JSON files.
pub fn load_catalog(players_path: &Path, rankings_path: &Path) -> Result<Vec<Player>, CatalogError> {
    let groups: RawGroups = read_json(players_path)?;
    let rankings: RankingTables = read_json(rankings_path)?;
    let players = build_players(groups, &rankings);
    info!(
        "Catalog loaded: {} players ({} overall-ranked ids)",
        players.len(),
        rankings.overall.len()
    );
    Ok(players)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| CatalogError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Flattening and rank assignment
// ---------------------------------------------------------------------------

/// Flatten the nested groups into a ranked player list.
///
/// Entries missing id, name, or position (or whose position string does not
/// parse) are dropped. Group labels are organizational only; the entry's own
/// position string decides its bucket.
pub fn build_players(groups: RawGroups, rankings: &RankingTables) -> Vec<Player> {
    let mut players = Vec::new();

    for group in groups {
        for (label, entries) in group {
            for raw in entries {
                let (id, name, pos_str) = match (raw.id, raw.name, raw.position) {
                    (Some(id), Some(name), Some(pos)) => (id, name, pos),
                    _ => {
                        debug!("Dropping catalog entry in group `{}`: missing field", label);
                        continue;
                    }
                };
                let position = match Position::from_str_pos(&pos_str) {
                    Some(p) => p,
                    None => {
                        debug!(
                            "Dropping catalog entry `{}`: unknown position `{}`",
                            name, pos_str
                        );
                        continue;
                    }
                };

                players.push(Player {
                    overall_rank: overall_rank_of(&id, rankings),
                    position_rank: position_rank_of(&id, position, rankings),
                    id,
                    name,
                    position,
                    team: raw.team.unwrap_or_default(),
                });
            }
        }
    }

    players
}

/// Overall rank: 0-based index in the overall list + 1, else the sentinel.
fn overall_rank_of(id: &str, rankings: &RankingTables) -> u32 {
    rankings
        .overall
        .iter()
        .position(|ranked_id| ranked_id == id)
        .map(|idx| idx as u32 + 1)
        .unwrap_or(UNRANKED)
}

/// Position rank: `tier_number * 100 + index_within_tier`, taking the
/// smallest rank when an id appears in more than one tier. Ids found in no
/// tier (and tiers with an unparseable name) fall through to the sentinel.
fn position_rank_of(id: &str, position: Position, rankings: &RankingTables) -> u32 {
    let Some(tiers) = rankings.positions.get(position.display_str()) else {
        return UNRANKED;
    };

    let mut best = UNRANKED;
    for (tier_name, ids) in tiers {
        let Some(tier_number) = tier_number(tier_name) else {
            debug!("Skipping tier `{}`: no numeric suffix", tier_name);
            continue;
        };
        if let Some(index) = ids.iter().position(|ranked_id| ranked_id == id) {
            let rank = tier_number * 100 + index as u32;
            best = best.min(rank);
        }
    }
    best
}

/// Extract the integer suffix from a tier name ("Tier 2" -> 2).
fn tier_number(tier_name: &str) -> Option<u32> {
    tier_name.split_whitespace().nth(1)?.parse().ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, name: &str, pos: &str) -> RawPlayer {
        RawPlayer {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            position: Some(pos.to_string()),
            team: Some("TST".to_string()),
        }
    }

    fn groups_of(entries: Vec<RawPlayer>) -> RawGroups {
        let mut group = HashMap::new();
        group.insert("players".to_string(), entries);
        vec![group]
    }

    fn rankings_with_tiers(overall: &[&str], qb_tiers: &[(&str, &[&str])]) -> RankingTables {
        let mut tiers = BTreeMap::new();
        for (name, ids) in qb_tiers {
            tiers.insert(
                name.to_string(),
                ids.iter().map(|s| s.to_string()).collect(),
            );
        }
        let mut positions = HashMap::new();
        positions.insert("QB".to_string(), tiers);
        RankingTables {
            overall: overall.iter().map(|s| s.to_string()).collect(),
            positions,
        }
    }

    #[test]
    fn flatten_assigns_overall_rank_from_list_index() {
        let rankings = rankings_with_tiers(&["b", "a"], &[]);
        let players = build_players(groups_of(vec![raw("a", "A", "QB"), raw("b", "B", "QB")]), &rankings);
        let a = players.iter().find(|p| p.id == "a").unwrap();
        let b = players.iter().find(|p| p.id == "b").unwrap();
        assert_eq!(a.overall_rank, 2);
        assert_eq!(b.overall_rank, 1);
    }

    #[test]
    fn missing_overall_rank_uses_sentinel() {
        let rankings = rankings_with_tiers(&[], &[]);
        let players = build_players(groups_of(vec![raw("x", "X", "RB")]), &rankings);
        assert_eq!(players[0].overall_rank, UNRANKED);
        assert_eq!(players[0].position_rank, UNRANKED);
    }

    #[test]
    fn tier_rank_is_tier_number_times_hundred_plus_index() {
        let rankings = rankings_with_tiers(&[], &[("Tier 1", &["a", "b"]), ("Tier 2", &["c"])]);
        let players = build_players(
            groups_of(vec![raw("a", "A", "QB"), raw("b", "B", "QB"), raw("c", "C", "QB")]),
            &rankings,
        );
        let by_id = |id: &str| players.iter().find(|p| p.id == id).unwrap();
        assert_eq!(by_id("a").position_rank, 100);
        assert_eq!(by_id("b").position_rank, 101);
        assert_eq!(by_id("c").position_rank, 200);
    }

    #[test]
    fn duplicate_tier_membership_takes_smallest_rank() {
        let rankings = rankings_with_tiers(&[], &[("Tier 1", &["a"]), ("Tier 3", &["a"])]);
        let players = build_players(groups_of(vec![raw("a", "A", "QB")]), &rankings);
        assert_eq!(players[0].position_rank, 100);
    }

    #[test]
    fn unparseable_tier_name_skipped() {
        let rankings = rankings_with_tiers(&[], &[("Elite", &["a"]), ("Tier 2", &["a"])]);
        let players = build_players(groups_of(vec![raw("a", "A", "QB")]), &rankings);
        assert_eq!(players[0].position_rank, 200);
    }

    #[test]
    fn tier_table_only_applies_to_its_position() {
        // "a" is an RB; the QB tier table must not rank it.
        let rankings = rankings_with_tiers(&[], &[("Tier 1", &["a"])]);
        let players = build_players(groups_of(vec![raw("a", "A", "RB")]), &rankings);
        assert_eq!(players[0].position_rank, UNRANKED);
    }

    #[test]
    fn entries_missing_fields_are_dropped() {
        let incomplete = vec![
            RawPlayer {
                id: None,
                name: Some("No Id".to_string()),
                position: Some("QB".to_string()),
                team: None,
            },
            RawPlayer {
                id: Some("x".to_string()),
                name: None,
                position: Some("QB".to_string()),
                team: None,
            },
            RawPlayer {
                id: Some("y".to_string()),
                name: Some("No Pos".to_string()),
                position: None,
                team: None,
            },
            raw("ok", "Kept", "WR"),
        ];
        let players = build_players(groups_of(incomplete), &RankingTables::default());
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].id, "ok");
    }

    #[test]
    fn unknown_position_string_dropped() {
        let players = build_players(
            groups_of(vec![raw("a", "A", "LONGSNAPPER"), raw("b", "B", "K")]),
            &RankingTables::default(),
        );
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].id, "b");
    }

    #[test]
    fn def_position_string_maps_to_dst() {
        let players = build_players(
            groups_of(vec![raw("d", "Some Defense", "DEF")]),
            &RankingTables::default(),
        );
        assert_eq!(players[0].position, Position::Defense);
    }

    #[test]
    fn missing_team_defaults_to_empty() {
        let entry = RawPlayer {
            id: Some("a".to_string()),
            name: Some("A".to_string()),
            position: Some("TE".to_string()),
            team: None,
        };
        let players = build_players(groups_of(vec![entry]), &RankingTables::default());
        assert_eq!(players[0].team, "");
    }

    #[test]
    fn multiple_groups_all_flattened() {
        let mut g1 = HashMap::new();
        g1.insert("quarterbacks".to_string(), vec![raw("a", "A", "QB")]);
        let mut g2 = HashMap::new();
        g2.insert("kickers".to_string(), vec![raw("b", "B", "K")]);
        let players = build_players(vec![g1, g2], &RankingTables::default());
        assert_eq!(players.len(), 2);
    }

    #[test]
    fn tier_number_parsing() {
        assert_eq!(tier_number("Tier 1"), Some(1));
        assert_eq!(tier_number("Tier 12"), Some(12));
        assert_eq!(tier_number("Tier"), None);
        assert_eq!(tier_number("Elite"), None);
        assert_eq!(tier_number("Tier one"), None);
    }

    #[test]
    fn raw_payload_json_shape_parses() {
        let json = r#"[
            {"quarterbacks": [
                {"id": "qb-1", "name": "QB One", "position": "QB", "team": "AAA"},
                {"name": "Missing Id", "position": "QB"}
            ]},
            {"defenses": [
                {"id": "d-1", "name": "Some D", "position": "DEF", "team": "BBB"}
            ]}
        ]"#;
        let groups: RawGroups = serde_json::from_str(json).unwrap();
        let players = build_players(groups, &RankingTables::default());
        assert_eq!(players.len(), 2);
    }

    #[test]
    fn rankings_json_shape_parses() {
        let json = r#"{
            "overall": ["a", "b"],
            "positions": {
                "QB": {"Tier 1": ["a"]},
                "RB": {"Tier 1": ["b"], "Tier 2": ["c"]}
            }
        }"#;
        let rankings: RankingTables = serde_json::from_str(json).unwrap();
        assert_eq!(rankings.overall.len(), 2);
        assert_eq!(rankings.positions["RB"].len(), 2);
    }
}
