//! Player intent: directions, raw and normalized commands, and the action
//! sequence a command expands into.
//!
//! # Module Structure
//!
//! - `movement`: the four move directions
//! - `command`: normalization and action-sequence expansion
//! - `root`: commitment over a command history

pub mod command;
pub mod movement;
pub mod root;

pub use command::{Command, RawCommand, TurnAction};
pub use movement::Direction;
#[cfg(feature = "serde")]
pub use root::compute_commands_root;
