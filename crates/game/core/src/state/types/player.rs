use crate::config::GameConfig;

use super::{PlayerId, Position};

/// Per-player record. Replaced wholesale every turn along with the rest of
/// the state.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub position: Position,
    pub alive: bool,
    /// Blast range given to bombs this player places.
    pub fire_power: u32,
    /// One-way unlock allowing bombs to be pushed.
    pub kick: bool,
    /// Remaining turns with one bonus move.
    pub boots_turns: u32,
    /// AP granted at the start of the last resolved turn.
    pub ap_start: u32,
    /// AP left unspent at the end of the last resolved turn.
    pub ap_end: u32,
    /// Set by a self-inflicted blast; costs one AP next turn.
    pub ap_penalty_next: bool,
}

impl Player {
    pub fn new(id: PlayerId, position: Position) -> Self {
        Self {
            id,
            position,
            alive: true,
            fire_power: GameConfig::INITIAL_FIRE_POWER,
            kick: false,
            boots_turns: 0,
            ap_start: 0,
            ap_end: 0,
            ap_penalty_next: false,
        }
    }

    pub fn with_kick(mut self) -> Self {
        self.kick = true;
        self
    }

    pub fn with_fire_power(mut self, fire_power: u32) -> Self {
        self.fire_power = fire_power;
        self
    }

    pub fn with_boots_turns(mut self, boots_turns: u32) -> Self {
        self.boots_turns = boots_turns;
        self
    }

    /// AP this player receives when the next turn starts.
    ///
    /// Leftover AP carries over (up to [`GameConfig::AP_CARRY_MAX`]) on top of
    /// the base grant, capped at [`GameConfig::AP_MAX`]. A pending self-hit
    /// penalty is subtracted before the floor of [`GameConfig::AP_MIN`].
    pub fn next_ap_start(&self) -> u32 {
        if !self.alive {
            return 0;
        }
        let carry = self.ap_end.min(GameConfig::AP_CARRY_MAX);
        let mut ap = (carry + GameConfig::AP_BASE).min(GameConfig::AP_MAX);
        if self.ap_penalty_next {
            ap = ap.saturating_sub(GameConfig::SELF_HIT_PENALTY);
        }
        ap.max(GameConfig::AP_MIN)
    }

    /// Bonus moves available in the next turn.
    pub fn next_bonus_moves(&self) -> u32 {
        u32::from(self.alive && self.boots_turns > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carry_over_is_capped() {
        let mut player = Player::new(PlayerId::P1, Position::new(1, 1));
        player.ap_end = 0;
        assert_eq!(player.next_ap_start(), 3);
        player.ap_end = 1;
        assert_eq!(player.next_ap_start(), 4);
        player.ap_end = 4;
        assert_eq!(player.next_ap_start(), 5);
    }

    #[test]
    fn penalty_applies_before_floor() {
        let mut player = Player::new(PlayerId::P2, Position::new(1, 1));
        player.ap_end = 2;
        player.ap_penalty_next = true;
        assert_eq!(player.next_ap_start(), 4);

        player.ap_end = 0;
        assert_eq!(player.next_ap_start(), 2);
    }

    #[test]
    fn dead_players_get_nothing() {
        let mut player = Player::new(PlayerId::P1, Position::new(1, 1)).with_boots_turns(2);
        player.alive = false;
        assert_eq!(player.next_ap_start(), 0);
        assert_eq!(player.next_bonus_moves(), 0);
    }
}
