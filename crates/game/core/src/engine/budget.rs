//! Action-point economy: the per-turn grant and how slots spend it.

use crate::config::GameConfig;
use crate::state::{GameState, Player, PlayerId};

/// Spendable resources of one player during one turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnBudget {
    pub ap: u32,
    pub bonus_moves: u32,
}

impl TurnBudget {
    pub const fn new(ap: u32, bonus_moves: u32) -> Self {
        Self { ap, bonus_moves }
    }

    /// Budget `player` would start the next turn with.
    pub fn for_player(player: &Player) -> Self {
        Self::new(player.next_ap_start(), player.next_bonus_moves())
    }

    /// Pays for a move: AP first, then the bonus move. Returns `false` when
    /// neither is left.
    pub fn try_fund_move(&mut self) -> bool {
        if self.ap >= GameConfig::MOVE_COST {
            self.ap -= GameConfig::MOVE_COST;
            true
        } else if self.bonus_moves > 0 {
            self.bonus_moves -= 1;
            true
        } else {
            false
        }
    }

    /// Pays for a placement. Bonus moves cannot fund it.
    pub fn try_fund_placement(&mut self) -> bool {
        if self.ap >= GameConfig::PLACE_COST {
            self.ap -= GameConfig::PLACE_COST;
            true
        } else {
            false
        }
    }

    pub const fn can_move(&self) -> bool {
        self.ap >= GameConfig::MOVE_COST || self.bonus_moves > 0
    }

    pub const fn can_place(&self) -> bool {
        self.ap >= GameConfig::PLACE_COST
    }
}

/// Grants this turn's budgets and consumes the one-shot modifiers (self-hit
/// penalty, one turn of boots).
pub(super) fn grant(state: &mut GameState) -> [TurnBudget; 2] {
    PlayerId::ALL.map(|id| {
        let player = state.player_mut(id);
        if !player.alive {
            player.ap_start = 0;
            player.ap_end = 0;
            return TurnBudget::default();
        }

        let budget = TurnBudget::for_player(player);
        player.ap_start = budget.ap;
        player.ap_penalty_next = false;
        player.boots_turns = player.boots_turns.saturating_sub(1);
        budget
    })
}

/// Records the unspent AP that next turn's carry-over is computed from.
pub(super) fn settle(state: &mut GameState, budgets: &[TurnBudget; 2]) {
    for id in PlayerId::ALL {
        let player = state.player_mut(id);
        player.ap_end = if player.alive {
            budgets[id.index()].ap
        } else {
            0
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_spend_ap_before_bonus() {
        let mut budget = TurnBudget::new(1, 1);
        assert!(budget.try_fund_move());
        assert_eq!(budget, TurnBudget::new(0, 1));
        assert!(budget.try_fund_move());
        assert_eq!(budget, TurnBudget::new(0, 0));
        assert!(!budget.try_fund_move());
    }

    #[test]
    fn placement_needs_real_ap() {
        let mut budget = TurnBudget::new(0, 1);
        assert!(!budget.can_place());
        assert!(!budget.try_fund_placement());
        assert_eq!(budget, TurnBudget::new(0, 1));
    }

    #[test]
    fn grant_consumes_one_boots_turn_and_clears_penalty() {
        let mut state = GameState::open_floor(7, 1);
        {
            let p1 = state.player_mut(PlayerId::P1);
            p1.boots_turns = 2;
            p1.ap_penalty_next = true;
        }
        let budgets = grant(&mut state);
        assert_eq!(budgets[0], TurnBudget::new(2, 1));
        assert_eq!(budgets[1], TurnBudget::new(3, 0));
        let p1 = state.player(PlayerId::P1);
        assert_eq!(p1.boots_turns, 1);
        assert_eq!(p1.ap_start, 2);
        assert!(!p1.ap_penalty_next);
    }
}
