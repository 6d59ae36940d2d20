//! AI player module - automated decisions for non-human seats.
//!
//! - [`AiPlayer`]: the contract every AI implements
//! - [`RandomPlayer`]: uniform random legal moves (seedable for tests)
//! - [`drive_ai_turn`]: turns one AI decision into one applied move

mod random;
mod trait_def;

pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer, SwapChoice};
use tracing::debug;

use crate::domain::game_flow::{apply_move, Move, MoveOutcome};
use crate::domain::player_view::CurrentYearInfo;
use crate::domain::state::{require_last_winner, require_swap, GameState, Phase, PlayerId};
use crate::error::AppError;

/// AI seats by seat index; `None` marks a human seat.
pub type AiSeats = [Option<Box<dyn AiPlayer>>];

/// Apply the next move if it belongs to an AI seat.
///
/// Returns `Ok(None)` when the game waits on a human seat, on the
/// requisition acknowledgment, or is over. Queued AI assignments are applied
/// one per call on behalf of the trick winner.
pub fn drive_ai_turn(state: &mut GameState, ai_by_seat: &AiSeats) -> Result<Option<MoveOutcome>, AppError> {
    let Some((seat, mv)) = next_ai_move(state, ai_by_seat)? else {
        return Ok(None);
    };
    debug!(seat, ?mv, "ai move");
    let outcome = apply_move(state, seat, mv)?;
    Ok(Some(outcome))
}

fn next_ai_move(state: &GameState, ai_by_seat: &AiSeats) -> Result<Option<(PlayerId, Move)>, AppError> {
    if state.phase == Phase::AiAssignment {
        let winner = require_last_winner(state, "drive_ai_turn")?;
        return Ok(state
            .ai_assignment_queue
            .first()
            .map(|&(card, target)| (winner, Move::ApplySingleAssignment { card, target })));
    }

    let Some(seat) = state.turn else {
        return Ok(None);
    };
    let Some(Some(ai)) = ai_by_seat.get(seat as usize) else {
        return Ok(None);
    };
    let view = CurrentYearInfo::for_seat(state, seat);

    let mv = match state.phase {
        Phase::Planning => Move::SetTrump {
            suit: Some(ai.choose_trump(&view)?),
        },
        Phase::Trick => Move::PlayCard {
            card_index: ai.choose_play(&view)?,
        },
        Phase::Assignment => {
            let chosen = ai.choose_assignments(&view)?;
            let next = chosen
                .into_iter()
                .find(|(card, _)| !state.pending_assignments.contains_key(card));
            match next {
                Some((card, target)) => Move::AssignCard { card, target },
                None => Move::SubmitAssignments,
            }
        }
        Phase::Swap => {
            let swap = require_swap(state, "drive_ai_turn")?;
            match swap.made {
                Some(_) => Move::ConfirmSwap,
                None => match ai.choose_swap(&view)? {
                    Some((plot_index, hand_index, area)) => Move::SwapCard {
                        plot_index,
                        hand_index,
                        area,
                    },
                    None => Move::ConfirmSwap,
                },
            }
        }
        Phase::AiAssignment | Phase::PlotSelection | Phase::Requisition | Phase::GameOver => {
            return Ok(None)
        }
    };
    Ok(Some((seat, mv)))
}
