//! Simultaneous movement for one step.
//!
//! Both players' intents are computed first without touching the state.
//! A fixed list of veto rules then runs over the intent pair; every rule sees
//! the same snapshot for both players, so the outcome never depends on who is
//! P1. Surviving intents (and the bombs they kick) are committed together.

use crate::action::{Direction, TurnAction};
use crate::config::GameConfig;
use crate::state::{BombId, GameState, ItemId, ItemKind, Player, PlayerId, Position};

use super::budget::TurnBudget;
use super::report::{MoveOutcome, MoveVeto, StepReport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct KickIntent {
    bomb: BombId,
    to: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MoveIntent {
    from: Position,
    to: Position,
    kick: Option<KickIntent>,
    veto: Option<MoveVeto>,
}

impl MoveIntent {
    fn is_live(&self) -> bool {
        self.veto.is_none()
    }

    fn outcome(&self) -> MoveOutcome {
        match (self.veto, self.kick) {
            (Some(reason), _) => MoveOutcome::Vetoed {
                from: self.from,
                target: self.to,
                reason,
            },
            (None, Some(kick)) => MoveOutcome::Kicked {
                from: self.from,
                to: self.to,
                bomb: kick.bomb,
                bomb_to: kick.to,
            },
            (None, None) => MoveOutcome::Moved {
                from: self.from,
                to: self.to,
            },
        }
    }
}

type IntentPair = [Option<MoveIntent>; 2];

/// A veto rule inspects the pair from `me`'s side and may reject `me`'s
/// intent. Rules are only consulted for intents that are still live.
type VetoRule = fn(&IntentPair, &GameState, PlayerId) -> Option<MoveVeto>;

/// Applied in order; each rule sees the vetoes of the rules before it.
const VETO_RULES: [VetoRule; 5] = [
    same_target,
    swap,
    kick_path,
    kick_contest,
    occupied_by_opponent,
];

fn live(pair: &IntentPair, id: PlayerId) -> Option<&MoveIntent> {
    pair[id.index()].as_ref().filter(|intent| intent.is_live())
}

fn same_target(pair: &IntentPair, _state: &GameState, me: PlayerId) -> Option<MoveVeto> {
    let mine = live(pair, me)?;
    let theirs = live(pair, me.opponent())?;
    (mine.to == theirs.to).then_some(MoveVeto::SameTarget)
}

fn swap(pair: &IntentPair, _state: &GameState, me: PlayerId) -> Option<MoveVeto> {
    let mine = live(pair, me)?;
    let theirs = live(pair, me.opponent())?;
    (mine.to == theirs.from && theirs.to == mine.from).then_some(MoveVeto::Swap)
}

fn kick_path(pair: &IntentPair, state: &GameState, me: PlayerId) -> Option<MoveVeto> {
    let kick = live(pair, me)?.kick?;
    let blocked = !state.board.is_walkable(kick.to)
        || state
            .bombs
            .iter()
            .any(|bomb| bomb.id != kick.bomb && bomb.position == kick.to)
        || state
            .players
            .iter()
            .any(|player| player.position == kick.to);
    blocked.then_some(MoveVeto::KickPathBlocked)
}

fn kick_contest(pair: &IntentPair, _state: &GameState, me: PlayerId) -> Option<MoveVeto> {
    let kick = live(pair, me)?.kick?;
    let theirs = live(pair, me.opponent())?;
    let clash = match theirs.kick {
        Some(other) => other.bomb == kick.bomb || other.to == kick.to,
        None => false,
    };
    (clash || theirs.to == kick.to).then_some(MoveVeto::KickContested)
}

fn occupied_by_opponent(pair: &IntentPair, state: &GameState, me: PlayerId) -> Option<MoveVeto> {
    let mine = live(pair, me)?;
    let opponent = me.opponent();
    let stays = live(pair, opponent).is_none();
    (stays && mine.to == state.player(opponent).position).then_some(MoveVeto::OccupiedByOpponent)
}

/// Tentative intent for a funded move. Terrain and bomb checks happen here;
/// interaction with the other player is left to the veto rules.
fn intent_for(state: &GameState, player: &Player, direction: Direction) -> MoveIntent {
    let from = player.position;
    let to = direction.step_from(from);
    let mut intent = MoveIntent {
        from,
        to,
        kick: None,
        veto: None,
    };

    match state.board.get(to) {
        None => intent.veto = Some(MoveVeto::OutOfBounds),
        Some(cell) if !cell.is_walkable() => intent.veto = Some(MoveVeto::Terrain),
        Some(_) => {
            if let Some(bomb) = state.bomb_at(to) {
                if player.kick {
                    intent.kick = Some(KickIntent {
                        bomb: bomb.id,
                        to: direction.step_from(to),
                    });
                } else {
                    intent.veto = Some(MoveVeto::BombWithoutKick);
                }
            }
        }
    }
    intent
}

/// Resolves the move half of one step and the pickups that follow it.
pub(super) fn resolve_step(
    state: &mut GameState,
    budgets: &mut [TurnBudget; 2],
    actions: [Option<TurnAction>; 2],
    step: &mut StepReport,
) {
    let mut pair: IntentPair = [None, None];
    for id in PlayerId::ALL {
        let Some(TurnAction::Move(direction)) = actions[id.index()] else {
            continue;
        };
        let player = state.player(id);
        if !player.alive {
            continue;
        }
        if !budgets[id.index()].try_fund_move() {
            step.moves[id.index()] = Some(MoveOutcome::Unfunded);
            continue;
        }
        pair[id.index()] = Some(intent_for(state, player, direction));
    }

    for rule in VETO_RULES {
        let vetoes = PlayerId::ALL.map(|id| rule(&pair, state, id));
        for id in PlayerId::ALL {
            if let (Some(intent), Some(reason)) = (pair[id.index()].as_mut(), vetoes[id.index()]) {
                intent.veto = Some(reason);
            }
        }
    }

    for id in PlayerId::ALL {
        let Some(intent) = pair[id.index()] else {
            continue;
        };
        let Some(kick) = intent.kick.filter(|_| intent.is_live()) else {
            continue;
        };
        if let Some(bomb) = state.bombs.iter_mut().find(|bomb| bomb.id == kick.bomb) {
            bomb.position = kick.to;
        }
    }
    for id in PlayerId::ALL {
        let Some(intent) = pair[id.index()] else {
            continue;
        };
        if intent.is_live() {
            state.player_mut(id).position = intent.to;
        }
        step.moves[id.index()] = Some(intent.outcome());
    }

    collect_items(state, step);
}

/// Every living player standing on an item takes it. Two players on the
/// same item cell each receive its effect.
fn collect_items(state: &mut GameState, step: &mut StepReport) {
    let picked: Vec<(PlayerId, ItemId, ItemKind)> = PlayerId::ALL
        .into_iter()
        .filter_map(|id| {
            let player = state.player(id);
            if !player.alive {
                return None;
            }
            state
                .item_at(player.position)
                .map(|item| (id, item.id, item.kind))
        })
        .collect();

    for (id, _, kind) in &picked {
        apply_item(state.player_mut(*id), *kind);
        step.pickups.push((*id, *kind));
    }
    state
        .items
        .retain(|item| !picked.iter().any(|(_, picked_id, _)| *picked_id == item.id));
}

fn apply_item(player: &mut Player, kind: ItemKind) {
    match kind {
        ItemKind::FireUp => player.fire_power += 1,
        ItemKind::Boots => player.boots_turns += GameConfig::BOOTS_TURNS,
        ItemKind::Kick => player.kick = true,
    }
}
