//! Match orchestration on top of the deterministic rules.
//!
//! This crate drives a duel turn by turn: it sources both players' commands
//! from [`CommandProvider`]s, resolves them with `duel-core`, keeps the
//! copy-on-write snapshot history and command log, and publishes events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`replay`] re-resolves recorded matches and checks their state roots
pub mod api;
pub mod events;
pub mod replay;
pub mod runtime;

pub use api::{CommandProvider, IdleProvider, Result, RuntimeError, ScriptedProvider};
pub use events::{Event, EventBus, MatchEvent, Topic, TurnEvent};
pub use replay::{replay, verify_replay};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
