//! Command-history commitment.

use super::RawCommand;

/// Computes a commitment to a sequence of turn commands.
///
/// Together with the starting config, this root pins a match down: the same
/// commands replayed from the same seed always produce the same
/// [`GameState::state_root`](crate::state::GameState::state_root).
///
/// # Design
///
/// - Uses bincode for deterministic serialization
/// - Order matters: the hash is computed sequentially over turns
#[cfg(feature = "serde")]
pub fn compute_commands_root(turns: &[[RawCommand; 2]]) -> [u8; 32] {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();

    for turn in turns {
        if let Ok(bytes) = bincode::serialize(turn) {
            hasher.update(&bytes);
        }
    }

    hasher.finalize().into()
}
