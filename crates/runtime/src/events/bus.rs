//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{MatchEvent, TurnEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// One event per resolved turn
    Turn,
    /// Match lifecycle
    Match,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    TurnResolved(TurnEvent),
    Match(MatchEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::TurnResolved(_) => Topic::Turn,
            Event::Match(_) => Topic::Match,
        }
    }
}

/// Topic-based event bus
///
/// Publishing never blocks and never fails: events sent while nobody is
/// subscribed are dropped, and slow subscribers observe `Lagged`.
#[derive(Clone)]
pub struct EventBus {
    turn: broadcast::Sender<Event>,
    lifecycle: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            turn: broadcast::channel(capacity.max(1)).0,
            lifecycle: broadcast::channel(capacity.max(1)).0,
        }
    }

    fn channel(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Turn => &self.turn,
            Topic::Match => &self.lifecycle,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channel(topic).send(event).is_err() {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channel(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use duel_core::MatchStatus;

    use super::*;

    #[tokio::test]
    async fn subscribers_only_see_their_topic() {
        let bus = EventBus::with_capacity(4);
        let mut lifecycle = bus.subscribe(Topic::Match);
        let mut turns = bus.subscribe(Topic::Turn);

        bus.publish(Event::Match(MatchEvent::Ended {
            turn: 3,
            status: MatchStatus::Draw,
            state_root: [0; 32],
        }));

        let event = lifecycle.recv().await.unwrap();
        assert_eq!(event.topic(), Topic::Match);
        assert!(turns.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_harmless() {
        let bus = EventBus::new();
        bus.publish(Event::Match(MatchEvent::Ended {
            turn: 1,
            status: MatchStatus::P1Win,
            state_root: [0; 32],
        }));
    }
}
