//! Bomb placement for one step.

use arrayvec::ArrayVec;

use crate::action::TurnAction;
use crate::config::GameConfig;
use crate::state::{Bomb, GameState, PlayerId, Position};

use super::budget::TurnBudget;
use super::report::{PlacementOutcome, StepReport};

/// Resolves the placement half of one step. Runs after the step's moves, so
/// a bomb lands on the cell its owner occupies after moving.
pub(super) fn resolve_step(
    state: &mut GameState,
    budgets: &mut [TurnBudget; 2],
    actions: [Option<TurnAction>; 2],
    step: &mut StepReport,
) {
    let mut candidates: ArrayVec<(PlayerId, Position), 2> = ArrayVec::new();
    for id in PlayerId::ALL {
        if actions[id.index()] != Some(TurnAction::PlaceBomb) {
            continue;
        }
        let player = state.player(id);
        if !player.alive {
            continue;
        }
        if !budgets[id.index()].try_fund_placement() {
            step.placements[id.index()] = Some(PlacementOutcome::Unfunded);
            continue;
        }
        let position = player.position;
        if state.has_bomb_at(position) {
            step.placements[id.index()] = Some(PlacementOutcome::CellTaken { position });
            continue;
        }
        candidates.push((id, position));
    }

    if let [(first, a), (second, b)] = candidates.as_slice() {
        if a == b {
            for id in [*first, *second] {
                step.placements[id.index()] = Some(PlacementOutcome::Contested { position: *a });
            }
            return;
        }
    }

    for (id, position) in candidates {
        let bomb = Bomb::new(
            state.allocate_bomb_id(),
            id,
            position,
            GameConfig::BOMB_FUSE,
            state.player(id).fire_power,
        );
        state.bombs.push(bomb.clone());
        step.placements[id.index()] = Some(PlacementOutcome::Placed(bomb));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BombId;

    fn place_both(state: &mut GameState) -> (StepReport, [TurnBudget; 2]) {
        let actions = [Some(TurnAction::PlaceBomb), Some(TurnAction::PlaceBomb)];
        let mut budgets = [TurnBudget::new(3, 0), TurnBudget::new(3, 0)];
        let mut step = StepReport::new(0, actions);
        resolve_step(state, &mut budgets, actions, &mut step);
        (step, budgets)
    }

    #[test]
    fn bomb_takes_owner_fire_power() {
        let mut state = GameState::open_floor(7, 1);
        state.player_mut(PlayerId::P2).fire_power = 3;
        place_both(&mut state);
        assert_eq!(state.bombs.len(), 2);
        assert_eq!(state.bombs[0].id, BombId(1));
        assert_eq!(state.bombs[0].range, 1);
        assert_eq!(state.bombs[1].range, 3);
        assert!(state.bombs.iter().all(|b| b.timer == GameConfig::BOMB_FUSE));
    }

    #[test]
    fn same_cell_placements_void_each_other_but_spend_ap() {
        let mut state = GameState::open_floor(7, 1);
        state.player_mut(PlayerId::P2).position = Position::new(1, 1);
        let (step, budgets) = place_both(&mut state);
        assert!(state.bombs.is_empty());
        assert_eq!(budgets, [TurnBudget::new(2, 0), TurnBudget::new(2, 0)]);
        assert!(matches!(
            step.placements[0],
            Some(PlacementOutcome::Contested { .. })
        ));
        assert_eq!(state.next_bomb_id, 1);
    }

    #[test]
    fn occupied_cell_rejects_placement() {
        let mut state = GameState::open_floor(7, 1);
        state.bombs.push(Bomb::new(
            BombId(9),
            PlayerId::P2,
            Position::new(1, 1),
            1,
            1,
        ));
        let (step, budgets) = place_both(&mut state);
        assert_eq!(
            step.placements[0],
            Some(PlacementOutcome::CellTaken {
                position: Position::new(1, 1)
            })
        );
        assert_eq!(budgets[0].ap, 2);
        assert_eq!(state.bombs.len(), 2);
    }

    #[test]
    fn no_ap_means_no_placement() {
        let mut state = GameState::open_floor(7, 1);
        let actions = [Some(TurnAction::PlaceBomb), None];
        let mut budgets = [TurnBudget::new(0, 1), TurnBudget::new(3, 0)];
        let mut step = StepReport::new(0, actions);
        resolve_step(&mut state, &mut budgets, actions, &mut step);
        assert_eq!(step.placements[0], Some(PlacementOutcome::Unfunded));
        assert_eq!(budgets[0], TurnBudget::new(0, 1));
        assert!(state.bombs.is_empty());
    }
}
