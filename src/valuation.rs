// Heuristic pick valuation for computer-controlled teams.
//
// Scores every available player for the team on the clock from position
// rank, overall rank, positional need, and round-dependent position bonuses,
// then takes the maximum. Position rank carries the dominant weight so the
// AI drafts positionally rather than purely off the overall board.

use crate::draft::player::{Player, Position};
use crate::draft::roster::Roster;

// ---------------------------------------------------------------------------
// Scoring weights
// ---------------------------------------------------------------------------

/// Multiplier on inverted position rank.
const POSITION_RANK_WEIGHT: i64 = 15;
/// Multiplier on inverted overall rank.
const OVERALL_RANK_WEIGHT: i64 = 5;
/// Bonus per unit of positional need.
const NEED_WEIGHT: i64 = 100;
/// Early-round bonus for RB/WR (rounds 1-4).
const EARLY_ROUND_BONUS: i64 = 200;
/// Late-round bonus for QB/TE/K/DST (rounds 8+).
const LATE_ROUND_BONUS: i64 = 150;

// ---------------------------------------------------------------------------
// Core scoring
// ---------------------------------------------------------------------------

/// Scalar draft value of one player for one team in one round.
///
/// Reads state only; never mutates. Higher is better.
pub fn position_value(player: &Player, roster: &Roster, round: u32) -> i64 {
    let position = player.position;
    let need = roster.positional_need(position) as i64;

    let mut value = (1000 - player.position_rank as i64) * POSITION_RANK_WEIGHT;
    value += (1000 - player.overall_rank as i64) * OVERALL_RANK_WEIGHT;

    // Position scarcity: unmet roster need.
    value += need * NEED_WEIGHT;

    // Early rounds favor the workhorse positions.
    if round <= 4 && matches!(position, Position::RunningBack | Position::WideReceiver) {
        value += EARLY_ROUND_BONUS;
    }

    // Late rounds favor filling out the onesie positions.
    if round >= 8
        && matches!(
            position,
            Position::Quarterback | Position::TightEnd | Position::Kicker | Position::Defense
        )
    {
        value += LATE_ROUND_BONUS;
    }

    // Position-specific round windows.
    match position {
        Position::RunningBack if round <= 6 => value += 100,
        Position::WideReceiver if round <= 7 => value += 80,
        Position::Quarterback if round >= 5 => value += 120,
        Position::TightEnd if round >= 6 => value += 100,
        _ => {}
    }

    value
}

/// Select the best available pick for the team on the clock.
///
/// Ties break to the first maximum in input order, so equal-value players
/// resolve by catalog position. Returns `None` only for an empty pool.
pub fn best_pick<'a>(available: &'a [Player], roster: &Roster, round: u32) -> Option<&'a Player> {
    let mut best: Option<(&Player, i64)> = None;
    for player in available {
        let value = position_value(player, roster, round);
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((player, value)),
        }
    }
    best.map(|(player, _)| player)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::player::UNRANKED;
    use crate::draft::roster::RosterCaps;

    fn make_player(id: &str, pos: Position, pos_rank: u32, overall: u32) -> Player {
        Player {
            id: id.to_string(),
            name: format!("Player {}", id),
            position: pos,
            team: "TST".to_string(),
            position_rank: pos_rank,
            overall_rank: overall,
        }
    }

    fn empty_roster() -> Roster {
        Roster::new(RosterCaps::default())
    }

    #[test]
    fn value_formula_exact_running_back_round_one() {
        // RB, position rank 100, overall 10, empty roster (need = 4), round 1:
        // (1000-100)*15 + (1000-10)*5 + 4*100 + 200 (early RB/WR) + 100 (RB <= r6)
        let player = make_player("rb", Position::RunningBack, 100, 10);
        let value = position_value(&player, &empty_roster(), 1);
        assert_eq!(value, 13_500 + 4_950 + 400 + 200 + 100);
    }

    #[test]
    fn value_formula_exact_kicker_round_ten() {
        // K, position rank 100, overall 150, empty roster (need = 1), round 10:
        // (1000-100)*15 + (1000-150)*5 + 1*100 + 150 (late onesie)
        let player = make_player("k", Position::Kicker, 100, 150);
        let value = position_value(&player, &empty_roster(), 10);
        assert_eq!(value, 13_500 + 4_250 + 100 + 150);
    }

    #[test]
    fn quarterback_round_bonuses_stack() {
        let player = make_player("qb", Position::Quarterback, 100, 20);
        let base = (1000 - 100) * 15 + (1000 - 20) * 5 + 2 * 100;
        // Round 3: no QB bonuses.
        assert_eq!(position_value(&player, &empty_roster(), 3), base);
        // Round 5: the QB mid-round window only.
        assert_eq!(position_value(&player, &empty_roster(), 5), base + 120);
        // Round 8: late-round bonus plus the mid-round window.
        assert_eq!(position_value(&player, &empty_roster(), 8), base + 150 + 120);
    }

    #[test]
    fn unranked_players_heavily_penalized_not_excluded() {
        let ranked = make_player("good", Position::WideReceiver, 110, 12);
        let unranked = make_player("deep", Position::WideReceiver, UNRANKED, UNRANKED);
        let roster = empty_roster();
        let v_ranked = position_value(&ranked, &roster, 1);
        let v_unranked = position_value(&unranked, &roster, 1);
        assert!(v_ranked > v_unranked);
        // Unranked players still produce a usable value and win an otherwise
        // empty pool.
        let pool = vec![unranked.clone()];
        assert_eq!(best_pick(&pool, &roster, 1).unwrap().id, "deep");
    }

    #[test]
    fn need_and_round_bonuses_overcome_rank_gap() {
        // The team already holds 2 QBs (capacity), so QB need is 0. An elite
        // available QB then loses to a mid-tier RB whose need and round
        // bonuses exceed the QB's pure rank advantage.
        let mut roster = empty_roster();
        roster.push(make_player("qb_a", Position::Quarterback, 101, 5));
        roster.push(make_player("qb_b", Position::Quarterback, 102, 9));

        let elite_qb = make_player("qb_elite", Position::Quarterback, 1, 1);
        let mid_rb = make_player("rb_mid", Position::RunningBack, 30, 35);

        let round = 3;
        let qb_value = position_value(&elite_qb, &roster, round);
        let rb_value = position_value(&mid_rb, &roster, round);

        // QB: 999*15 + 999*5 = 19_980, no bonuses (need 0, round 3).
        assert_eq!(qb_value, 19_980);
        // RB: 970*15 + 965*5 + 4*100 + 200 + 100 = 20_075.
        assert_eq!(rb_value, 20_075);
        assert!(rb_value > qb_value);

        let pool = vec![elite_qb, mid_rb];
        assert_eq!(best_pick(&pool, &roster, round).unwrap().id, "rb_mid");
    }

    #[test]
    fn large_rank_gap_still_wins_over_need() {
        // Against a sufficiently deep rank gap the need bonus is not enough.
        let mut roster = empty_roster();
        roster.push(make_player("qb_a", Position::Quarterback, 101, 5));
        roster.push(make_player("qb_b", Position::Quarterback, 102, 9));

        let elite_qb = make_player("qb_elite", Position::Quarterback, 1, 1);
        let deep_rb = make_player("rb_deep", Position::RunningBack, 400, 500);

        let pool = vec![deep_rb, elite_qb];
        assert_eq!(best_pick(&pool, &roster, 3).unwrap().id, "qb_elite");
    }

    #[test]
    fn ties_break_to_first_in_input_order() {
        let first = make_player("first", Position::Kicker, 100, 50);
        let second = make_player("second", Position::Kicker, 100, 50);
        let pool = vec![first, second];
        assert_eq!(best_pick(&pool, &empty_roster(), 2).unwrap().id, "first");
    }

    #[test]
    fn best_pick_empty_pool() {
        let pool: Vec<Player> = Vec::new();
        assert!(best_pick(&pool, &empty_roster(), 1).is_none());
    }

    #[test]
    fn early_rounds_prefer_rb_wr_over_equal_rank_qb() {
        let qb = make_player("qb", Position::Quarterback, 100, 10);
        let rb = make_player("rb", Position::RunningBack, 100, 10);
        let roster = empty_roster();
        // Round 1: the RB gets the early-round and RB-window bonuses, and
        // has higher need (4 vs 2).
        assert!(position_value(&rb, &roster, 1) > position_value(&qb, &roster, 1));
    }
}
