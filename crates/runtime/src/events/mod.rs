//! Topic-based event bus for match events.
//!
//! Consumers subscribe to the topics they need: renderers follow
//! [`Topic::Turn`], lobbies and scoreboards follow [`Topic::Match`].

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{MatchEvent, TurnEvent};
