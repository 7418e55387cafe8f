use std::fmt;

use super::{PlayerId, Position};

/// Unique, monotonically assigned bomb identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BombId(pub u32);

impl fmt::Display for BombId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bomb {
    pub id: BombId,
    pub owner: PlayerId,
    pub position: Position,
    /// Turns left before detonation; ticks once per turn after the action phase.
    pub timer: i32,
    /// Blast radius, fixed at placement.
    pub range: u32,
}

impl Bomb {
    pub fn new(id: BombId, owner: PlayerId, position: Position, timer: i32, range: u32) -> Self {
        Self {
            id,
            owner,
            position,
            timer,
            range,
        }
    }
}

/// Unique, monotonically assigned item identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// +1 blast range.
    FireUp,
    /// One bonus move per turn for the next two turns.
    Boots,
    /// Unlocks bomb kicking.
    Kick,
}

impl ItemKind {
    /// Order in which the guaranteed minimums are honoured.
    pub const GUARANTEE_ORDER: [ItemKind; 3] = [ItemKind::FireUp, ItemKind::Boots, ItemKind::Kick];

    /// Number of drops of this kind a match always produces before the
    /// random table is consulted.
    pub const fn guaranteed_minimum(self) -> u32 {
        match self {
            ItemKind::FireUp => 2,
            ItemKind::Boots => 1,
            ItemKind::Kick => 1,
        }
    }

    /// Maps a uniform value in `[0, 1)` onto equal thirds.
    pub fn from_unit(value: f64) -> Self {
        if value < 1.0 / 3.0 {
            ItemKind::FireUp
        } else if value < 2.0 / 3.0 {
            ItemKind::Boots
        } else {
            ItemKind::Kick
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    pub position: Position,
}

impl Item {
    pub fn new(id: ItemId, kind: ItemKind, position: Position) -> Self {
        Self { id, kind, position }
    }
}

/// Per-kind drop counters backing the guaranteed-minimum rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnCounts {
    pub fire_up: u32,
    pub boots: u32,
    pub kick: u32,
}

impl SpawnCounts {
    pub fn get(&self, kind: ItemKind) -> u32 {
        match kind {
            ItemKind::FireUp => self.fire_up,
            ItemKind::Boots => self.boots,
            ItemKind::Kick => self.kick,
        }
    }

    pub fn record(&mut self, kind: ItemKind) {
        match kind {
            ItemKind::FireUp => self.fire_up += 1,
            ItemKind::Boots => self.boots += 1,
            ItemKind::Kick => self.kick += 1,
        }
    }

    /// First kind whose guaranteed minimum is still unmet.
    pub fn pending_guarantee(&self) -> Option<ItemKind> {
        ItemKind::GUARANTEE_ORDER
            .into_iter()
            .find(|kind| self.get(*kind) < kind.guaranteed_minimum())
    }
}

/// Match outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Ongoing,
    P1Win,
    P2Win,
    Draw,
}

impl MatchStatus {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, MatchStatus::Ongoing)
    }

    /// Outcome given which players are still alive.
    pub const fn from_survivors(p1_alive: bool, p2_alive: bool) -> Self {
        match (p1_alive, p2_alive) {
            (false, false) => MatchStatus::Draw,
            (false, true) => MatchStatus::P2Win,
            (true, false) => MatchStatus::P1Win,
            (true, true) => MatchStatus::Ongoing,
        }
    }
}
