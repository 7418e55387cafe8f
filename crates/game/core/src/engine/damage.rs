use crate::state::{GameState, PlayerId};

use super::report::{DeathCause, TurnReport};

/// Applies this turn's blast to both players.
///
/// Any opponent tag on a player's cell is lethal, even when their own bomb
/// reached it too. A cell tagged only by the player's own bombs costs them one
/// AP next turn instead.
pub(super) fn apply(state: &mut GameState, report: &mut TurnReport) {
    for id in PlayerId::ALL {
        let player = state.player_mut(id);
        if !player.alive {
            continue;
        }
        let Some(tags) = report.blast.get(&player.position).copied() else {
            continue;
        };
        if tags.includes(id.opponent()) {
            player.alive = false;
            report.deaths.push((id, DeathCause::Blast));
        } else if tags.includes(id) {
            player.ap_penalty_next = true;
            report.self_hits.push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::report::BlastTags;
    use crate::state::Position;

    #[test]
    fn mixed_tags_are_lethal() {
        let mut state = GameState::open_floor(7, 1);
        let mut report = TurnReport::new(1);
        report
            .blast
            .insert(Position::new(1, 1), BlastTags::P1 | BlastTags::P2);
        report.blast.insert(Position::new(5, 5), BlastTags::P2);

        apply(&mut state, &mut report);

        assert!(!state.player(PlayerId::P1).alive);
        assert!(state.player(PlayerId::P2).alive);
        assert!(state.player(PlayerId::P2).ap_penalty_next);
        assert_eq!(report.died(PlayerId::P1), Some(DeathCause::Blast));
        assert_eq!(report.self_hits, vec![PlayerId::P2]);
    }

    #[test]
    fn dead_players_are_ignored() {
        let mut state = GameState::open_floor(7, 1);
        state.player_mut(PlayerId::P1).alive = false;
        let mut report = TurnReport::new(1);
        report.blast.insert(Position::new(1, 1), BlastTags::P2);
        apply(&mut state, &mut report);
        assert!(report.deaths.is_empty());
    }
}
