//! Turn resolution pipeline.
//!
//! [`GameEngine`] is the only producer of new [`GameState`] snapshots. One call
//! resolves one full turn for both players. The phases always run in the
//! same order:
//!
//! 1. grant AP and bonus moves
//! 2. action steps (moves, pickups, then placements, one step index at a time)
//! 3. timer tick
//! 4. detonation with chain reactions
//! 5. damage and self-hit penalties
//! 6. wall destruction and item drops
//! 7. board shrink
//! 8. match status
//! 9. AP settlement and turn counter
//!
//! Resolution cannot fail. Malformed commands are normalized and illegal
//! actions pass as no-ops.
mod budget;
mod damage;
mod drops;
mod explosion;
mod movement;
mod placement;
pub mod report;
mod shrink;

pub use budget::TurnBudget;
pub use explosion::{blast_footprint, walk_blast};
pub use report::{
    BlastMap, BlastTags, DeathCause, MoveOutcome, MoveVeto, PlacementOutcome, StepReport,
    TurnReport,
};
pub use shrink::shrink_layer;

use crate::action::{Command, RawCommand, TurnAction};
use crate::state::{GameState, MatchStatus, PlayerId};

/// A resolved turn: the successor snapshot and what happened on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub state: GameState,
    pub report: TurnReport,
}

/// Resolves turns against a committed snapshot.
///
/// The engine borrows the snapshot immutably and always returns a fresh
/// successor, so the committed state can be shared with readers while a turn
/// is being resolved.
pub struct GameEngine<'a> {
    state: &'a GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    /// Resolves one turn from both players' raw commands.
    ///
    /// A terminal snapshot is returned unchanged with an empty report.
    pub fn resolve_turn(&self, p1: &RawCommand, p2: &RawCommand) -> TurnOutcome {
        if self.state.is_over() {
            let mut report = TurnReport::new(self.state.turn);
            report.status = self.state.status;
            return TurnOutcome {
                state: self.state.clone(),
                report,
            };
        }

        let commands = [p1.normalize(), p2.normalize()];
        let mut next = self.state.clone();
        let mut report = TurnReport::new(next.turn);

        let mut budgets = budget::grant(&mut next);
        for id in PlayerId::ALL {
            report.ap_start[id.index()] = budgets[id.index()].ap;
            report.bonus_moves[id.index()] = budgets[id.index()].bonus_moves;
        }

        run_action_steps(&mut next, &mut budgets, &commands, &mut report);

        explosion::tick_timers(&mut next);
        let destroyed = explosion::detonate(&mut next, &mut report);
        damage::apply(&mut next, &mut report);
        drops::resolve(&mut next, &destroyed, &mut report);
        shrink::apply(&mut next, &mut report);

        next.status = MatchStatus::from_survivors(
            next.player(PlayerId::P1).alive,
            next.player(PlayerId::P2).alive,
        );
        report.status = next.status;

        budget::settle(&mut next, &budgets);
        next.turn = next.turn.saturating_add(1);

        TurnOutcome {
            state: next,
            report,
        }
    }
}

fn run_action_steps(
    state: &mut GameState,
    budgets: &mut [TurnBudget; 2],
    commands: &[Command; 2],
    report: &mut TurnReport,
) {
    let sequences: [Vec<TurnAction>; 2] = [commands[0].actions(), commands[1].actions()];
    let steps = sequences[0].len().max(sequences[1].len());

    for index in 0..steps {
        let actions = [
            sequences[0].get(index).copied(),
            sequences[1].get(index).copied(),
        ];
        let mut step = StepReport::new(index, actions);
        movement::resolve_step(state, budgets, actions, &mut step);
        placement::resolve_step(state, budgets, actions, &mut step);
        report.steps.push(step);
    }
}

/// Advances `state` by one turn.
pub fn resolve(state: &GameState, p1: &RawCommand, p2: &RawCommand) -> GameState {
    GameEngine::new(state).resolve_turn(p1, p2).state
}

/// Advances `state` by one turn and returns the turn's report alongside it.
pub fn resolve_with_report(
    state: &GameState,
    p1: &RawCommand,
    p2: &RawCommand,
) -> (GameState, TurnReport) {
    let TurnOutcome { state, report } = GameEngine::new(state).resolve_turn(p1, p2);
    (state, report)
}
