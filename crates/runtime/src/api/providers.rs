//! Asynchronous abstraction for sourcing player commands.
//!
//! Runtime users plug in [`CommandProvider`] implementations so a match can
//! run with human input, scripted fixtures, or bots.
use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use duel_core::{GameState, PlayerId, RawCommand};

use super::errors::Result;

/// Supplies one player's plan for the turn about to be resolved.
///
/// The provider only sees the committed snapshot. Both providers are asked
/// before either plan is revealed, so neither can react to the other.
#[async_trait]
pub trait CommandProvider: Send + Sync {
    async fn provide_command(&self, player: PlayerId, state: &GameState) -> Result<RawCommand>;
}

/// Always passes the turn.
pub struct IdleProvider;

#[async_trait]
impl CommandProvider for IdleProvider {
    async fn provide_command(&self, _player: PlayerId, _state: &GameState) -> Result<RawCommand> {
        Ok(RawCommand::idle())
    }
}

/// Plays back a fixed list of commands, then idles.
#[derive(Default)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<RawCommand>>,
}

impl ScriptedProvider {
    pub fn new(commands: impl IntoIterator<Item = RawCommand>) -> Self {
        Self {
            script: Mutex::new(commands.into_iter().collect()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.lock().map(|script| script.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CommandProvider for ScriptedProvider {
    async fn provide_command(&self, _player: PlayerId, _state: &GameState) -> Result<RawCommand> {
        let next = match self.script.lock() {
            Ok(mut script) => script.pop_front(),
            Err(poisoned) => poisoned.into_inner().pop_front(),
        };
        Ok(next.unwrap_or_default())
    }
}
