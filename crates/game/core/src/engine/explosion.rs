//! Timer tick and chained detonation.

use crate::action::Direction;
use crate::state::{Board, Cell, GameState, Position};

use super::report::{BlastTags, TurnReport};

/// Walks one bomb's blast: its own cell, then up to `range` cells in each
/// direction. A walk stops before solid walls, void, and the board edge, and
/// stops *on* a soft wall. `visit` is called for every cell the blast covers.
pub fn walk_blast(
    board: &Board,
    origin: Position,
    range: u32,
    mut visit: impl FnMut(Position, Cell),
) {
    if let Some(cell) = board.get(origin) {
        visit(origin, cell);
    }
    for direction in Direction::ALL {
        for distance in 1..=range as i32 {
            let position = direction.walk_from(origin, distance);
            let Some(cell) = board.get(position) else {
                break;
            };
            if cell.absorbs_blast() {
                break;
            }
            visit(position, cell);
            if cell == Cell::SoftWall {
                break;
            }
        }
    }
}

/// Cells a single bomb would hit, without chaining.
pub fn blast_footprint(board: &Board, origin: Position, range: u32) -> Vec<Position> {
    let mut cells = Vec::new();
    walk_blast(board, origin, range, |position, _| cells.push(position));
    cells
}

pub(super) fn tick_timers(state: &mut GameState) {
    for bomb in &mut state.bombs {
        bomb.timer -= 1;
    }
}

/// Detonates every expired bomb and whatever their blasts reach.
///
/// Runs as a work stack over indices into `state.bombs`; a bomb already
/// marked exploded is skipped. Blast cells and detonation order go into the
/// report. Returns the soft walls hit, in the order they were reached.
pub(super) fn detonate(state: &mut GameState, report: &mut TurnReport) -> Vec<Position> {
    let mut exploded = vec![false; state.bombs.len()];
    let mut stack: Vec<usize> = state
        .bombs
        .iter()
        .enumerate()
        .filter(|(_, bomb)| bomb.timer <= 0)
        .map(|(idx, _)| idx)
        .collect();
    let mut destroyed: Vec<Position> = Vec::new();

    while let Some(idx) = stack.pop() {
        if exploded[idx] {
            continue;
        }
        exploded[idx] = true;

        let bomb = &state.bombs[idx];
        report.detonated.push(bomb.id);
        let tag = BlastTags::of(bomb.owner);
        walk_blast(&state.board, bomb.position, bomb.range, |position, cell| {
            *report.blast.entry(position).or_default() |= tag;
            if cell == Cell::SoftWall {
                if !destroyed.contains(&position) {
                    destroyed.push(position);
                }
                return;
            }
            if let Some(chained) = state
                .bombs
                .iter()
                .position(|other| other.position == position)
            {
                if !exploded[chained] {
                    stack.push(chained);
                }
            }
        });
    }

    let mut flags = exploded.into_iter();
    state
        .bombs
        .retain(|_| !flags.next().unwrap_or(false));
    destroyed
}
