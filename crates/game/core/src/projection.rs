//! Single-player preview of an in-progress command.
//!
//! A projection walks one player's action sequence against the committed
//! state without seeing the opponent's plan. The opponent stays where it is
//! and only acts as an obstacle. Nothing here ticks or detonates bombs, and
//! the committed state is never modified, so callers may project as often as
//! they like (once per candidate move during a search, for instance).

use std::collections::BTreeSet;

use crate::action::{Direction, RawCommand, TurnAction};
use crate::config::GameConfig;
use crate::engine::{TurnBudget, blast_footprint};
use crate::state::{Board, Bomb, GameState, PlayerId, Position};

/// Bomb a projection would place, as it will stand after this turn's tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannedBomb {
    pub position: Position,
    pub timer: i32,
    pub range: u32,
}

/// Where a player would end up and what they could still afford.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projection {
    pub player: PlayerId,
    pub position: Position,
    /// Cells entered by successful moves, in order.
    pub steps: Vec<Position>,
    pub ap_start: u32,
    pub ap_remaining: u32,
    pub bonus_moves_remaining: u32,
    pub can_move_more: bool,
    pub can_place_bomb: bool,
    pub planned_bomb: Option<PlannedBomb>,
    /// Committed bombs at their positions after this player's kicks.
    pub projected_bombs: Vec<Bomb>,
    pub place_bomb_step: Option<usize>,
}

impl Projection {
    fn has_bomb_at(&self, position: Position) -> bool {
        self.projected_bombs
            .iter()
            .any(|bomb| bomb.position == position)
            || self
                .planned_bomb
                .is_some_and(|planned| planned.position == position)
    }

    /// Cells that the committed bombs would hit on the next tick, taking this
    /// projection's kicks into account.
    pub fn danger_cells(&self, state: &GameState) -> BTreeSet<Position> {
        imminent_blast_cells(&state.board, &self.projected_bombs)
    }
}

/// Cells covered by bombs that detonate on the next timer tick.
///
/// Each bomb contributes its own footprint. Chains are not followed.
pub fn imminent_blast_cells(board: &Board, bombs: &[Bomb]) -> BTreeSet<Position> {
    bombs
        .iter()
        .filter(|bomb| bomb.timer <= 1)
        .flat_map(|bomb| blast_footprint(board, bomb.position, bomb.range))
        .collect()
}

/// Previews `command` for `player` against the committed `state`.
pub fn project(state: &GameState, player: PlayerId, command: &RawCommand) -> Projection {
    let command = command.normalize();
    let me = state.player(player);
    let mut budget = TurnBudget::for_player(me);

    let mut projection = Projection {
        player,
        position: me.position,
        steps: Vec::new(),
        ap_start: budget.ap,
        ap_remaining: budget.ap,
        bonus_moves_remaining: budget.bonus_moves,
        can_move_more: false,
        can_place_bomb: false,
        planned_bomb: None,
        projected_bombs: state.bombs.clone(),
        place_bomb_step: command.place_bomb_step,
    };

    if me.alive {
        for action in command.actions() {
            match action {
                TurnAction::Move(direction) => {
                    if !budget.try_fund_move() {
                        continue;
                    }
                    if let Some(to) = try_step(state, &mut projection, direction) {
                        projection.position = to;
                        projection.steps.push(to);
                    }
                }
                TurnAction::PlaceBomb => {
                    if !budget.try_fund_placement() || projection.has_bomb_at(projection.position) {
                        continue;
                    }
                    projection.planned_bomb = Some(PlannedBomb {
                        position: projection.position,
                        timer: GameConfig::BOMB_FUSE - 1,
                        range: me.fire_power,
                    });
                }
            }
        }
    }

    projection.ap_remaining = budget.ap;
    projection.bonus_moves_remaining = budget.bonus_moves;
    projection.can_move_more = budget.can_move();
    projection.can_place_bomb = budget.can_place()
        && projection.planned_bomb.is_none()
        && !state.has_bomb_at(projection.position);
    projection
}

/// Directions the projected player could still take from its projected
/// position, with the cell each would enter.
pub fn candidate_moves(
    state: &GameState,
    player: PlayerId,
    projection: &Projection,
) -> Vec<(Direction, Position)> {
    if !projection.can_move_more || !state.player(player).alive {
        return Vec::new();
    }
    Direction::ALL
        .into_iter()
        .filter_map(|direction| {
            let mut scratch = projection.clone();
            try_step(state, &mut scratch, direction).map(|to| (direction, to))
        })
        .collect()
}

/// One move from the projection's current position. Pushes a kicked bomb
/// (committed or planned) inside the projection; returns the entered cell on
/// success.
fn try_step(state: &GameState, projection: &mut Projection, direction: Direction) -> Option<Position> {
    let me = state.player(projection.player);
    let opponent = state.player(projection.player.opponent());
    let blocked_by_opponent = |position: Position| opponent.alive && opponent.position == position;

    let to = direction.step_from(projection.position);
    if !state.board.is_walkable(to) || blocked_by_opponent(to) {
        return None;
    }

    let committed = projection
        .projected_bombs
        .iter()
        .position(|bomb| bomb.position == to);
    let planned = projection
        .planned_bomb
        .is_some_and(|planned| planned.position == to);
    if committed.is_none() && !planned {
        return Some(to);
    }

    if !me.kick {
        return None;
    }
    let push = direction.step_from(to);
    if !state.board.is_walkable(push) || projection.has_bomb_at(push) || blocked_by_opponent(push) {
        return None;
    }
    if let Some(index) = committed {
        projection.projected_bombs[index].position = push;
    } else if let Some(planned) = projection.planned_bomb.as_mut() {
        planned.position = push;
    }
    Some(to)
}
