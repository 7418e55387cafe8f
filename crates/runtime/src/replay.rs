//! Deterministic replay of a recorded command log.
//!
//! A match is fully determined by its opening snapshot and the commands both
//! players submitted. Replaying the log and comparing state roots turn by
//! turn proves that a recorded history was produced by these rules.

use duel_core::{GameState, RawCommand, resolve};

use crate::api::{Result, RuntimeError};

/// Re-resolves `log` from `initial` and returns every snapshot, starting
/// with `initial` itself.
pub fn replay(initial: &GameState, log: &[[RawCommand; 2]]) -> Vec<GameState> {
    let mut states = Vec::with_capacity(log.len() + 1);
    states.push(initial.clone());
    for [p1, p2] in log {
        let next = match states.last() {
            Some(last) => resolve(last, p1, p2),
            None => break,
        };
        states.push(next);
    }
    states
}

/// Replays `log` and checks each produced snapshot against `expected_roots`
/// (one root per log entry). Reports the first turn whose root differs.
pub fn verify_replay(
    initial: &GameState,
    log: &[[RawCommand; 2]],
    expected_roots: &[[u8; 32]],
) -> Result<()> {
    let states = replay(initial, log);
    for (idx, state) in states.iter().skip(1).enumerate() {
        let resolved_turn = initial.turn + idx as u32;
        let Some(expected) = expected_roots.get(idx) else {
            return Err(RuntimeError::ReplayDiverged {
                turn: resolved_turn,
            });
        };
        if state.state_root() != *expected {
            tracing::warn!(
                turn = resolved_turn,
                expected = %hex::encode(expected),
                actual = %hex::encode(state.state_root()),
                "replay diverged"
            );
            return Err(RuntimeError::ReplayDiverged {
                turn: resolved_turn,
            });
        }
    }
    if expected_roots.len() > log.len() {
        return Err(RuntimeError::ReplayDiverged {
            turn: initial.turn + log.len() as u32,
        });
    }
    Ok(())
}
