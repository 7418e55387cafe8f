pub mod board;
pub mod common;
pub mod pieces;
pub mod player;

pub use board::{Board, Cell};
pub use common::{PlayerId, Position};
pub use pieces::{Bomb, BombId, Item, ItemId, ItemKind, MatchStatus, SpawnCounts};
pub use player::Player;
