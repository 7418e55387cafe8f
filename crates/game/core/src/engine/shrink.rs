use crate::config::GameConfig;
use crate::state::{Cell, GameState, PlayerId};

use super::report::{DeathCause, TurnReport};

/// Number of outer rings that are void while `turn` resolves.
///
/// Zero before [`GameConfig::SHRINK_START_TURN`], then one more ring every
/// [`GameConfig::SHRINK_INTERVAL`] turns, never past the centre ring.
pub fn shrink_layer(turn: u32, size: u32) -> u32 {
    if turn < GameConfig::SHRINK_START_TURN {
        return 0;
    }
    let layer = 1 + (turn - GameConfig::SHRINK_START_TURN) / GameConfig::SHRINK_INTERVAL;
    layer.min(size / 2)
}

/// Voids every cell inside the current layer and everything standing on it.
pub(super) fn apply(state: &mut GameState, report: &mut TurnReport) {
    let layer = shrink_layer(state.turn, state.board.size());
    report.shrink_layer = layer;
    if layer == 0 {
        return;
    }

    let rim: Vec<_> = state
        .board
        .positions()
        .filter(|position| state.board.ring_index(*position) < layer)
        .filter(|position| state.board.get(*position) != Some(Cell::Void))
        .collect();
    for &position in &rim {
        state.board.set(position, Cell::Void);
    }
    report.voided = rim;

    let board = &state.board;
    let voided = |position| board.get(position) == Some(Cell::Void);
    state.items.retain(|item| !voided(item.position));
    state.bombs.retain(|bomb| !voided(bomb.position));

    for id in PlayerId::ALL {
        let player = &mut state.players[id.index()];
        if player.alive && voided(player.position) {
            player.alive = false;
            report.deaths.push((id, DeathCause::Void));
        }
    }
}
