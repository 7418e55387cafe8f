//! High-level match orchestrator.
//!
//! The runtime owns the committed history of a match, asks both command
//! providers for their plans, resolves turns through the core engine, and
//! publishes what happened on the event bus. History is copy-on-write: every
//! snapshot is an `Arc<GameState>` that stays valid after later turns are
//! resolved, so readers (renderers animating the last turn, for instance)
//! never block the next resolution.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::broadcast;

use duel_content::ContentFactory;
use duel_core::{
    GameConfig, GameEngine, GameState, MatchStatus, PlayerId, RawCommand, TurnReport,
    compute_commands_root,
};

use crate::api::{CommandProvider, Result, RuntimeError};
use crate::events::{Event, EventBus, MatchEvent, Topic, TurnEvent};
use crate::replay::verify_replay;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub event_buffer_size: usize,
}

impl RuntimeConfig {
    /// Reads `config.toml` from a content directory.
    pub fn from_content(factory: &ContentFactory) -> Result<Self> {
        let game_config = factory.load_config().map_err(RuntimeError::Content)?;
        Ok(Self {
            game_config,
            ..Self::default()
        })
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            event_buffer_size: 100,
        }
    }
}

/// A running match.
pub struct Runtime {
    config: RuntimeConfig,
    initial: Arc<GameState>,
    /// `history[i]` is the snapshot produced by `commands[i]`.
    history: Vec<Arc<GameState>>,
    commands: Vec<[RawCommand; 2]>,
    reports: Vec<TurnReport>,
    roots: Vec<[u8; 32]>,
    providers: [Option<Box<dyn CommandProvider>>; 2],
    events: EventBus,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Latest committed snapshot.
    pub fn current(&self) -> Arc<GameState> {
        Arc::clone(self.history.last().unwrap_or(&self.initial))
    }

    pub fn status(&self) -> MatchStatus {
        self.current().status
    }

    /// Snapshot whose turn counter equals `turn`.
    pub fn snapshot(&self, turn: u32) -> Result<Arc<GameState>> {
        match turn.checked_sub(self.initial.turn) {
            Some(0) => Ok(self.initial()),
            Some(offset) => self
                .history
                .get(offset as usize - 1)
                .cloned()
                .ok_or(RuntimeError::UnknownTurn(turn)),
            None => Err(RuntimeError::UnknownTurn(turn)),
        }
    }

    /// Opening snapshot.
    pub fn initial(&self) -> Arc<GameState> {
        Arc::clone(&self.initial)
    }

    /// Commands resolved so far, one pair per turn.
    pub fn command_log(&self) -> &[[RawCommand; 2]] {
        &self.commands
    }

    /// Reports of every resolved turn, oldest first.
    pub fn reports(&self) -> &[TurnReport] {
        &self.reports
    }

    /// Roots of every snapshot produced by a resolved turn, oldest first.
    pub fn state_roots(&self) -> &[[u8; 32]] {
        &self.roots
    }

    /// Commitment over the whole command log.
    pub fn commands_root(&self) -> [u8; 32] {
        compute_commands_root(&self.commands)
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    pub fn set_provider(&mut self, player: PlayerId, provider: impl CommandProvider + 'static) {
        self.providers[player.index()] = Some(Box::new(provider));
    }

    /// Resolves one turn from explicit commands.
    ///
    /// Fails with [`RuntimeError::MatchFinished`] once the match is over; the
    /// history is left untouched in that case.
    pub fn submit_turn(&mut self, p1: RawCommand, p2: RawCommand) -> Result<Arc<GameState>> {
        let current = self.current();
        if current.is_over() {
            tracing::warn!(status = %current.status, "turn submitted to a finished match");
            return Err(RuntimeError::MatchFinished {
                status: current.status,
            });
        }

        let outcome = GameEngine::new(&current).resolve_turn(&p1, &p2);
        let next = Arc::new(outcome.state);
        let root = next.state_root();
        let resolved = current.turn;

        tracing::debug!(
            turn = resolved,
            status = %next.status,
            root = %hex::encode(root),
            "turn resolved"
        );

        self.events.publish(Event::TurnResolved(TurnEvent {
            turn: resolved,
            status: next.status,
            state_root: root,
            report: outcome.report.clone(),
        }));
        if next.is_over() {
            tracing::info!(turn = resolved, status = %next.status, "match ended");
            self.events.publish(Event::Match(MatchEvent::Ended {
                turn: resolved,
                status: next.status,
                state_root: root,
            }));
        }

        self.commands.push([p1, p2]);
        self.reports.push(outcome.report);
        self.roots.push(root);
        self.history.push(Arc::clone(&next));
        Ok(next)
    }

    /// Asks both providers for a plan and resolves the turn.
    ///
    /// Both providers see the same committed snapshot.
    pub async fn step(&mut self) -> Result<Arc<GameState>> {
        let current = self.current();
        if current.is_over() {
            return Err(RuntimeError::MatchFinished {
                status: current.status,
            });
        }

        let mut commands: [RawCommand; 2] = Default::default();
        for id in PlayerId::ALL {
            let provider = self.providers[id.index()]
                .as_ref()
                .ok_or(RuntimeError::ProviderNotSet { player: id })?;
            commands[id.index()] = provider.provide_command(id, &current).await?;
        }
        let [p1, p2] = commands;
        self.submit_turn(p1, p2)
    }

    /// Steps until the match ends or `max_turns` turns have been resolved.
    pub async fn run(&mut self, max_turns: u32) -> Result<MatchStatus> {
        for _ in 0..max_turns {
            if self.current().is_over() {
                break;
            }
            self.step().await?;
        }
        Ok(self.status())
    }

    /// Replays the command log from the opening snapshot and checks every
    /// recorded root.
    pub fn verify(&self) -> Result<()> {
        verify_replay(&self.initial, &self.commands, &self.roots)
    }
}

/// Builder for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    providers: [Option<Box<dyn CommandProvider>>; 2],
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            providers: [None, None],
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from a prepared snapshot instead of generating a board.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Start from `scenarios/{name}.ron` in a content directory.
    pub fn scenario(self, factory: &ContentFactory, name: &str) -> Result<Self> {
        let state = factory
            .load_scenario(name)
            .map_err(RuntimeError::Content)?;
        Ok(self.initial_state(state))
    }

    /// Start from a scenario file anywhere on disk.
    pub fn scenario_file(self, path: &Path) -> Result<Self> {
        let state = duel_content::ScenarioLoader::load(path).map_err(RuntimeError::Content)?;
        Ok(self.initial_state(state))
    }

    pub fn provider(mut self, player: PlayerId, provider: impl CommandProvider + 'static) -> Self {
        self.providers[player.index()] = Some(Box::new(provider));
        self
    }

    /// Builds the runtime. Without an explicit initial state the board is
    /// generated from the configured seed.
    pub fn build(self) -> Result<Runtime> {
        let initial = match self.state {
            Some(state) => state,
            None => GameState::new_match(&self.config.game_config)?,
        };
        tracing::debug!(
            turn = initial.turn,
            seed = initial.rng.seed(),
            root = %hex::encode(initial.state_root()),
            "match initialised"
        );

        Ok(Runtime {
            events: EventBus::with_capacity(self.config.event_buffer_size),
            config: self.config,
            initial: Arc::new(initial),
            history: Vec::new(),
            commands: Vec::new(),
            reports: Vec::new(),
            roots: Vec::new(),
            providers: self.providers,
        })
    }
}
