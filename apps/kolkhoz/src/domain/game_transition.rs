use crate::domain::state::{GameState, Phase, PlayerId};

/// The slice of game state that lifecycle notifications are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLifecycleView {
    pub version: u64,
    pub year: u8,
    pub turn: Option<PlayerId>,
    pub phase: Phase,
}

impl From<&GameState> for GameLifecycleView {
    fn from(state: &GameState) -> Self {
        Self {
            version: state.version,
            year: state.year,
            turn: state.turn,
            phase: state.phase,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: the phase changed.
    PhaseChanged { from: Phase, to: Phase },

    /// Edge-triggered: a new year of the plan was dealt.
    YearStarted { year: u8 },

    /// Edge-triggered: the game moved to GameOver.
    GameEnded,
}

/// Derive domain transitions from before/after lifecycle state.
pub fn derive_game_transitions(
    before: &GameLifecycleView,
    after: &GameLifecycleView,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Year change (never reported for the year past the end)
    if after.year != before.year && after.phase != Phase::GameOver {
        transitions.push(GameTransition::YearStarted { year: after.year });
    }

    // 2. Phase change
    if before.phase != after.phase {
        transitions.push(GameTransition::PhaseChanged {
            from: before.phase,
            to: after.phase,
        });
    }

    // 3. Turn change; re-emitted when a new phase hands the turn to the same seat
    if let Some(player_id) = after.turn {
        if before.turn != Some(player_id) || before.phase != after.phase {
            transitions.push(GameTransition::TurnBecame { player_id });
        }
    }

    // 4. Game end
    if before.phase != Phase::GameOver && after.phase == Phase::GameOver {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}
