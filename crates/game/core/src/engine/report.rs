//! Per-turn resolution record.
//!
//! The resolver fills a [`TurnReport`] while it works. Renderers use it to
//! animate the turn step by step (who moved where, which bombs went off,
//! which cells burned) without re-deriving anything from two snapshots.

use std::collections::BTreeMap;

use bitflags::bitflags;

use crate::action::TurnAction;
use crate::state::{Bomb, BombId, Item, ItemKind, MatchStatus, PlayerId, Position};

bitflags! {
    /// Owners whose blast reached a cell.
    ///
    /// A cell hit by both players' bombs carries both bits, which is what
    /// separates friendly fire from enemy fire.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BlastTags: u8 {
        const P1 = 1 << 0;
        const P2 = 1 << 1;
    }
}

impl BlastTags {
    pub const fn of(owner: PlayerId) -> Self {
        match owner {
            PlayerId::P1 => Self::P1,
            PlayerId::P2 => Self::P2,
        }
    }

    pub const fn includes(self, owner: PlayerId) -> bool {
        self.contains(Self::of(owner))
    }
}

/// Blast cells of one turn with their owner tags, ordered by position.
pub type BlastMap = BTreeMap<Position, BlastTags>;

/// Why a funded move did not happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MoveVeto {
    OutOfBounds,
    /// Target is a wall or void.
    Terrain,
    /// Target holds a bomb and the mover cannot kick.
    BombWithoutKick,
    /// Both players aimed at the same cell.
    SameTarget,
    /// The players tried to trade cells.
    Swap,
    /// The kicked bomb has nowhere to go.
    KickPathBlocked,
    /// Both players kicked the same bomb, kicked bombs would collide, or the
    /// bomb would land where the opponent is moving.
    KickContested,
    /// The opponent is standing on the target and stays there.
    OccupiedByOpponent,
}

/// What one move slot did.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    Moved {
        from: Position,
        to: Position,
    },
    Kicked {
        from: Position,
        to: Position,
        bomb: BombId,
        bomb_to: Position,
    },
    /// Paid for, but rejected. The cost is not refunded.
    Vetoed {
        from: Position,
        target: Position,
        reason: MoveVeto,
    },
    /// No AP and no bonus move left; the slot passed without effect.
    Unfunded,
}

impl MoveOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. } | MoveOutcome::Kicked { .. })
    }
}

/// What one placement slot did.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementOutcome {
    Placed(Bomb),
    /// Not enough AP; nothing was spent.
    Unfunded,
    /// The cell already holds a bomb. AP is spent.
    CellTaken { position: Position },
    /// Both players placed on the same cell in the same step. AP is spent.
    Contested { position: Position },
}

/// Both players' slot at one step index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    pub index: usize,
    /// Indexed by [`PlayerId::index`]; `None` when the sequence ran out.
    pub actions: [Option<TurnAction>; 2],
    pub moves: [Option<MoveOutcome>; 2],
    pub placements: [Option<PlacementOutcome>; 2],
    pub pickups: Vec<(PlayerId, ItemKind)>,
}

impl StepReport {
    pub fn new(index: usize, actions: [Option<TurnAction>; 2]) -> Self {
        Self {
            index,
            actions,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DeathCause {
    /// Standing in the opponent's blast.
    Blast,
    /// Standing on a cell swallowed by the shrinking board.
    Void,
}

/// Everything that happened during one resolved turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Turn number that was resolved.
    pub turn: u32,
    pub ap_start: [u32; 2],
    pub bonus_moves: [u32; 2],
    pub steps: Vec<StepReport>,
    /// In detonation order.
    pub detonated: Vec<BombId>,
    pub blast: BlastMap,
    /// In the order the blast reached them.
    pub destroyed_walls: Vec<Position>,
    pub drops: Vec<Item>,
    /// Players that survived a blast of their own.
    pub self_hits: Vec<PlayerId>,
    pub deaths: Vec<(PlayerId, DeathCause)>,
    pub shrink_layer: u32,
    /// Cells that turned to void this turn.
    pub voided: Vec<Position>,
    pub status: MatchStatus,
}

impl TurnReport {
    pub fn new(turn: u32) -> Self {
        Self {
            turn,
            ..Self::default()
        }
    }

    /// Cells hit this turn regardless of owner.
    pub fn blast_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.blast.keys().copied()
    }

    pub fn died(&self, player: PlayerId) -> Option<DeathCause> {
        self.deaths
            .iter()
            .find(|(id, _)| *id == player)
            .map(|(_, cause)| *cause)
    }
}
