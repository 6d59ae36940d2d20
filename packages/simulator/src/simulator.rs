//! In-memory game runner: every seat is a seeded random AI.

use kolkhoz::ai::{drive_ai_turn, AiPlayer, RandomPlayer};
use kolkhoz::domain::{apply_move, derive_ai_seed, new_game, GameConfig, Move, Phase, Variants};
use kolkhoz::AppError;
use serde::Serialize;

/// Far above any real game; guards against a stalled state machine.
const MAX_MOVES: u32 = 10_000;

/// One finished game, written as a JSON line.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game: u64,
    pub seed: u64,
    pub players: usize,
    pub winner: u8,
    pub scores: Vec<u32>,
    pub moves: u32,
    pub famine_years: u8,
    /// Cards sent North over the whole plan.
    pub exiled: usize,
    pub jobs_completed: usize,
}

pub struct Simulator {
    players: usize,
    variants: Variants,
}

impl Simulator {
    pub fn new(players: usize, variants: Variants) -> Self {
        Self { players, variants }
    }

    pub fn simulate_game(&self, game: u64, seed: u64) -> Result<GameRecord, AppError> {
        let config = GameConfig {
            num_players: self.players,
            seed,
            human_seats: Vec::new(),
            variants: self.variants,
        };
        let mut state = new_game(&config)?;
        let ais: Vec<Option<Box<dyn AiPlayer>>> = (0..self.players as u8)
            .map(|seat| {
                Some(Box::new(RandomPlayer::new(Some(derive_ai_seed(seed, seat)))) as Box<dyn AiPlayer>)
            })
            .collect();

        let mut moves = 0;
        let mut famine_years = 0;
        let mut jobs_completed = 0;
        let mut famine_seen_for = 0;
        while state.phase != Phase::GameOver {
            if state.is_famine && famine_seen_for != state.year {
                famine_seen_for = state.year;
                famine_years += 1;
            }
            let outcome = match drive_ai_turn(&mut state, &ais)? {
                Some(outcome) => outcome,
                None if state.phase == Phase::Requisition => {
                    apply_move(&mut state, 0, Move::ContinueToNextYear)?
                }
                None => {
                    return Err(AppError::internal(format!(
                        "game {game} stalled in {:?}",
                        state.phase
                    )))
                }
            };
            jobs_completed += outcome.completed_jobs.len();
            moves += 1;
            if moves > MAX_MOVES {
                return Err(AppError::internal(format!("game {game} exceeded {MAX_MOVES} moves")));
            }
        }

        let result = state
            .result
            .clone()
            .ok_or_else(|| AppError::internal("game over without a result"))?;
        Ok(GameRecord {
            game,
            seed,
            players: self.players,
            winner: result.winner,
            scores: result.scores,
            moves,
            famine_years,
            exiled: state.exiled_cards().count(),
            jobs_completed,
        })
    }
}
