use crate::config::GameConfig;
use crate::state::{Cell, GameState, Item, ItemKind, Position};

use super::report::TurnReport;

/// Clears destroyed soft walls and rolls an item drop for each of them.
///
/// Walls are handled in the order the blast reached them, so PRNG draws are
/// reproducible. Guaranteed kinds are handed out without touching the PRNG.
pub(super) fn resolve(state: &mut GameState, destroyed: &[Position], report: &mut TurnReport) {
    for &position in destroyed {
        state.board.set(position, Cell::Floor);
        if state.items.len() >= GameConfig::ITEM_MAX_ON_BOARD {
            continue;
        }
        let Some(kind) = roll(state) else {
            continue;
        };

        let item = Item::new(state.allocate_item_id(), kind, position);
        state.spawned.record(kind);
        state.items.push(item.clone());
        report.drops.push(item);
    }
    report.destroyed_walls.extend_from_slice(destroyed);
}

fn roll(state: &mut GameState) -> Option<ItemKind> {
    if let Some(kind) = state.spawned.pending_guarantee() {
        return Some(kind);
    }
    if state.rng.next_value() >= GameConfig::ITEM_DROP_RATE {
        return None;
    }
    Some(ItemKind::from_unit(state.rng.next_value()))
}
